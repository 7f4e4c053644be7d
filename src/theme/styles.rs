//! Global CSS styles for the portfolio page.
//!
//! Warm brown palette: saddle brown for structure, chocolate for accents.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Palette */
  --brown: #8b4513;
  --chocolate: #d2691e;
  --sand: #f4a460;
  --cream: #fdf8f3;
  --ink: #2c1810;
  --ink-muted: #6b5344;
  --white: #ffffff;

  /* Semantic */
  --success: #4caf50;
  --danger: #f44336;
  --info: #2196f3;

  /* Shadows */
  --shadow-soft: 0 5px 25px rgba(139, 69, 19, 0.1);
  --shadow-lift: 0 15px 30px rgba(139, 69, 19, 0.2);

  /* Typography */
  --font-sans: 'Poppins', 'Segoe UI', Helvetica, Arial, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 800ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
  font-family: var(--font-sans);
  color: var(--ink);
  background: var(--cream);
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Page scroll container === */
.page {
  height: 100vh;
  overflow-y: auto;
  outline: none;
}

.page.scroll-locked {
  overflow: hidden;
}

.container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 2rem;
}

section {
  padding: 6rem 0;
}

.section-header {
  text-align: center;
  margin-bottom: 3rem;
}

.section-title {
  font-size: 2.5rem;
  color: var(--brown);
}

/* === Navigation === */
.navbar {
  position: fixed;
  top: 0;
  width: 100%;
  z-index: 1000;
  background: rgba(255, 255, 255, 0.95);
  backdrop-filter: blur(20px);
}

.nav-container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 1rem 2rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.nav-logo {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--brown);
}

.nav-menu {
  display: flex;
  list-style: none;
  gap: 2rem;
}

.nav-link {
  font-weight: 500;
  padding-bottom: 0.25rem;
  border-bottom: 2px solid transparent;
  transition: color var(--transition-normal), border-color var(--transition-normal);
}

.nav-link:hover,
.nav-link.active {
  color: var(--chocolate);
  border-bottom-color: var(--chocolate);
}

.nav-link:focus {
  outline: 2px solid var(--chocolate);
  outline-offset: 2px;
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  overflow: hidden;
  background: linear-gradient(135deg, var(--cream) 0%, #f5e6d3 100%);
}

.hero-content {
  position: relative;
  z-index: 1;
}

.hero-title {
  font-size: 3.5rem;
  font-weight: 700;
  margin-bottom: 1rem;
}

.title-name {
  color: var(--chocolate);
}

.typing-cursor {
  color: var(--chocolate);
  animation: blink 1s step-end infinite;
}

@keyframes blink {
  50% { opacity: 0; }
}

.hero-subtitle {
  font-size: 1.25rem;
  color: var(--ink-muted);
  margin-bottom: 2rem;
}

.hero-buttons {
  display: flex;
  gap: 1rem;
}

.hero-shapes {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.floating-shape {
  position: absolute;
  border-radius: 50%;
  opacity: 0.15;
  background: var(--chocolate);
  transition: transform 3s ease-in-out;
}

.shape-1 { width: 120px; height: 120px; top: 15%; right: 10%; }
.shape-2 { width: 80px; height: 80px; top: 60%; right: 25%; background: var(--sand); }
.shape-3 { width: 60px; height: 60px; top: 30%; left: 8%; background: var(--brown); }
.shape-4 { width: 100px; height: 100px; bottom: 10%; left: 40%; }

/* === Buttons === */
.btn {
  display: inline-block;
  padding: 0.9rem 2rem;
  border-radius: 50px;
  font-weight: 600;
  font-size: 1rem;
  cursor: pointer;
  border: 2px solid var(--chocolate);
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.btn:hover:not(:disabled) {
  transform: translateY(-3px) scale(1.05);
}

.btn:disabled {
  cursor: not-allowed;
}

.btn-primary {
  background: var(--chocolate);
  color: var(--white);
}

.btn-secondary {
  background: transparent;
  color: var(--chocolate);
}

.btn-submit {
  width: 100%;
}

.close-btn {
  background: none;
  border: none;
  font-size: 2rem;
  line-height: 1;
  cursor: pointer;
  color: var(--ink-muted);
}

.close-btn:hover {
  color: var(--chocolate);
}

/* === About & Skills === */
.about-content {
  display: grid;
  grid-template-columns: 2fr 1fr;
  gap: 3rem;
  align-items: center;
}

.about-text {
  font-size: 1.1rem;
  line-height: 1.8;
  color: var(--ink-muted);
}

.about-stats {
  display: flex;
  gap: 2rem;
}

.stat {
  text-align: center;
}

.stat-number {
  display: block;
  font-size: 2.5rem;
  font-weight: 700;
  color: var(--chocolate);
}

.stat-label {
  color: var(--ink-muted);
}

.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
  gap: 1.5rem;
}

.skill-item {
  background: var(--white);
  padding: 1.5rem;
  border-radius: 15px;
  text-align: center;
  font-weight: 600;
  box-shadow: var(--shadow-soft);
}

/* === Projects === */
.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: 2rem;
}

.projects-empty {
  text-align: center;
  color: var(--ink-muted);
}

.project-card {
  background: var(--white);
  border-radius: 20px;
  overflow: hidden;
  box-shadow: var(--shadow-soft);
  transition: transform 0.1s ease, box-shadow var(--transition-normal);
}

.project-card:hover {
  box-shadow: var(--shadow-lift);
}

.project-image {
  height: 180px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 4rem;
  color: var(--white);
  background: linear-gradient(135deg, var(--brown), var(--chocolate));
}

.project-content {
  padding: 1.5rem;
}

.project-title {
  font-size: 1.3rem;
  margin-bottom: 0.75rem;
}

.project-description {
  color: var(--ink-muted);
  line-height: 1.6;
  margin-bottom: 1rem;
}

.project-tech,
.modal-tech {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-bottom: 1rem;
}

.tech-tag {
  background: rgba(210, 105, 30, 0.1);
  color: var(--chocolate);
  padding: 0.3rem 0.8rem;
  border-radius: 20px;
  font-size: 0.85rem;
  font-weight: 500;
}

.project-links,
.modal-links {
  display: flex;
  gap: 1rem;
  font-size: 1.4rem;
}

.project-link:hover,
.modal-links a:hover {
  color: var(--chocolate);
}

/* === Modal === */
.modal,
.lightbox {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
}

.modal { z-index: 2000; }
.lightbox { z-index: 3000; }

.modal-overlay,
.lightbox-overlay {
  position: absolute;
  inset: 0;
  background: rgba(44, 24, 16, 0.7);
}

.lightbox-overlay {
  background: rgba(0, 0, 0, 0.9);
}

.modal-content {
  position: relative;
  width: min(900px, 92vw);
  max-height: 90vh;
  overflow-y: auto;
  background: var(--white);
  border-radius: 20px;
  box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3);
}

.modal-close,
.lightbox-close {
  position: absolute;
  top: 1rem;
  right: 1.25rem;
  z-index: 1;
}

.lightbox-close {
  color: var(--white);
}

.modal-images-gallery {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: 1rem;
  padding: 2rem 2rem 0;
}

.modal-image-wrapper img {
  width: 100%;
  border-radius: 10px;
}

.modal-video-item {
  grid-column: 1 / -1;
}

.modal-video-wrapper video {
  width: 100%;
  border-radius: 10px;
}

.modal-image-caption,
.modal-video-caption {
  margin-top: 0.5rem;
  text-align: center;
  font-size: 0.9rem;
  color: var(--ink-muted);
}

.project-placeholder {
  grid-column: 1 / -1;
  height: 220px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 5rem;
  color: var(--white);
  border-radius: 15px;
  background: linear-gradient(135deg, var(--brown), var(--chocolate));
}

.modal-body {
  padding: 2rem;
}

.modal-title {
  font-size: 1.8rem;
  color: var(--brown);
  margin-bottom: 1rem;
}

.modal-description {
  line-height: 1.8;
  color: var(--ink-muted);
  margin-bottom: 1.5rem;
}

/* === Lightbox === */
.lightbox-content {
  position: relative;
  max-width: 92vw;
  max-height: 90vh;
  text-align: center;
}

.lightbox-image {
  max-width: 100%;
  max-height: 80vh;
  border-radius: 10px;
}

.lightbox-caption {
  margin-top: 1rem;
  color: var(--white);
}

/* === Contact === */
.contact-content {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 3rem;
}

.contact-info h3 {
  font-size: 1.5rem;
  margin-bottom: 1rem;
}

.contact-info p {
  color: var(--ink-muted);
  line-height: 1.7;
}

.form-group {
  margin-bottom: 1rem;
}

.form-group input,
.form-group textarea {
  width: 100%;
  padding: 1rem;
  border: 2px solid #eee0d3;
  border-radius: 10px;
  font: inherit;
  background: var(--white);
  transition: border-color var(--transition-normal);
}

.form-group input:focus,
.form-group textarea:focus {
  outline: none;
  border-color: var(--chocolate);
}

/* === Notifications === */
.notification-stack {
  position: fixed;
  top: 100px;
  right: 20px;
  z-index: 10000;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.notification {
  color: var(--white);
  padding: 1rem 2rem;
  border-radius: 10px;
  box-shadow: 0 5px 15px rgba(0, 0, 0, 0.2);
  cursor: pointer;
  animation: slide-in 0.3s ease;
}

.notification-info { background: var(--info); }
.notification-success { background: var(--success); }
.notification-error { background: var(--danger); }

@keyframes slide-in {
  from { transform: translateX(100%); }
  to { transform: translateX(0); }
}

/* === Footer === */
.footer {
  padding: 2rem 0;
  text-align: center;
  color: var(--cream);
  background: var(--ink);
}

/* === Responsive === */
@media (max-width: 768px) {
  .nav-menu { gap: 1rem; font-size: 0.9rem; }
  .hero-title { font-size: 2.4rem; }
  .about-content,
  .contact-content { grid-template-columns: 1fr; }
}
"#;
