//! UI components for the portfolio page.

mod contact_form;
mod floating_shapes;
mod hero;
mod lightbox;
mod nav_bar;
mod page_section;
mod project_card;
mod project_modal;

pub use contact_form::ContactSection;
pub use floating_shapes::FloatingShapes;
pub use hero::Hero;
pub use lightbox::Lightbox;
pub use nav_bar::NavBar;
pub use page_section::{PageSection, SectionRegistry};
pub use project_card::ProjectsGrid;
pub use project_modal::ProjectModal;
