//! Project view rendering.
//!
//! Pure translation from a [`ProjectEntry`] to what the modal displays. The
//! gallery is rebuilt on every call and each thumbnail carries its own
//! [`OpenImage`] activation, so the UI wires clicks straight from the render
//! output instead of keeping a registry of thumbnails.

use crate::catalog::{MediaItem, ProjectEntry};

/// Browsing context outbound links open in
pub const LINK_TARGET: &str = "_blank";

/// Request to show one image in the lightbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenImage {
    pub src: String,
    pub caption: String,
}

/// A clickable gallery image paired with its activation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub image: MediaItem,
    pub on_activate: OpenImage,
}

impl Thumbnail {
    fn from_media(image: &MediaItem) -> Self {
        Self {
            image: image.clone(),
            on_activate: OpenImage {
                src: image.src.clone(),
                caption: image.caption.clone(),
            },
        }
    }
}

/// One block of the modal gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryItem {
    /// Playable video with caption
    Video(MediaItem),
    /// Image that opens the lightbox when activated
    Thumbnail(Thumbnail),
}

impl GalleryItem {
    /// Identity for keyed rendering: the media source, so per-item UI state
    /// (such as a failed load) never carries over to different media
    pub fn key(&self) -> &str {
        match self {
            GalleryItem::Video(video) => &video.src,
            GalleryItem::Thumbnail(thumbnail) => &thumbnail.image.src,
        }
    }
}

/// Gallery region of the modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryView {
    /// Video first (if any), then thumbnails in source order
    Media(Vec<GalleryItem>),
    /// No media: show the project's icon instead
    Placeholder { icon: String },
}

impl GalleryView {
    /// The (image, activation) pairs the rendering layer must wire up
    pub fn thumbnail_bindings(&self) -> Vec<(&MediaItem, &OpenImage)> {
        match self {
            GalleryView::Media(items) => items
                .iter()
                .filter_map(|item| match item {
                    GalleryItem::Thumbnail(t) => Some((&t.image, &t.on_activate)),
                    GalleryItem::Video(_) => None,
                })
                .collect(),
            GalleryView::Placeholder { .. } => Vec::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, GalleryView::Placeholder { .. })
    }
}

/// Kind of outbound project link
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LinkKind {
    Source,
    Demo,
}

impl LinkKind {
    /// Font Awesome icon class
    pub fn icon(&self) -> &'static str {
        match self {
            LinkKind::Source => "fab fa-github",
            LinkKind::Demo => "fas fa-external-link-alt",
        }
    }

    /// Accessible label
    pub fn label(&self) -> &'static str {
        match self {
            LinkKind::Source => "Source code",
            LinkKind::Demo => "Live demo",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLink {
    pub kind: LinkKind,
    pub href: String,
}

/// Everything the project modal shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectView {
    pub id: String,
    pub title: String,
    /// Description split on line-break markers; empty strings are blank lines
    pub description_lines: Vec<String>,
    pub gallery: GalleryView,
    pub tags: Vec<String>,
    /// Source link first, then demo link; absent URLs are omitted
    pub links: Vec<ActionLink>,
}

/// Render a catalog entry into its modal view
pub fn render_project(entry: &ProjectEntry) -> ProjectView {
    ProjectView {
        id: entry.id.clone(),
        title: entry.title.clone(),
        description_lines: entry.description.split('\n').map(str::to_string).collect(),
        gallery: render_gallery(entry),
        tags: entry.tech.clone(),
        links: render_links(entry),
    }
}

fn render_gallery(entry: &ProjectEntry) -> GalleryView {
    if !entry.has_media() {
        return GalleryView::Placeholder {
            icon: entry.icon.clone(),
        };
    }

    let mut items = Vec::with_capacity(entry.images.len() + 1);
    if let Some(video) = &entry.video {
        items.push(GalleryItem::Video(video.clone()));
    }
    items.extend(
        entry
            .images
            .iter()
            .map(|image| GalleryItem::Thumbnail(Thumbnail::from_media(image))),
    );

    GalleryView::Media(items)
}

fn render_links(entry: &ProjectEntry) -> Vec<ActionLink> {
    [
        (LinkKind::Source, entry.github.as_ref()),
        (LinkKind::Demo, entry.demo.as_ref()),
    ]
    .into_iter()
    .filter_map(|(kind, href)| {
        href.map(|href| ActionLink {
            kind,
            href: href.clone(),
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_entry() -> ProjectEntry {
        ProjectEntry {
            id: "demo".to_string(),
            title: "Demo".to_string(),
            description: "one\ntwo".to_string(),
            summary: None,
            tech: vec!["Rust".to_string(), "Dioxus".to_string()],
            icon: "fas fa-cube".to_string(),
            github: None,
            demo: None,
            images: Vec::new(),
            video: None,
        }
    }

    #[test]
    fn test_placeholder_when_no_media() {
        let view = render_project(&bare_entry());
        assert_eq!(
            view.gallery,
            GalleryView::Placeholder {
                icon: "fas fa-cube".to_string()
            }
        );
        assert!(view.gallery.thumbnail_bindings().is_empty());
    }

    #[test]
    fn test_video_comes_before_images() {
        let mut entry = bare_entry();
        entry.images = vec![MediaItem::new("a.png", "A"), MediaItem::new("b.png", "B")];
        entry.video = Some(MediaItem::new("v.mp4", "V"));

        let GalleryView::Media(items) = render_project(&entry).gallery else {
            panic!("expected media gallery");
        };
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], GalleryItem::Video(MediaItem::new("v.mp4", "V")));
        assert!(matches!(&items[1], GalleryItem::Thumbnail(t) if t.image.src == "a.png"));
        assert!(matches!(&items[2], GalleryItem::Thumbnail(t) if t.image.src == "b.png"));
    }

    #[test]
    fn test_thumbnail_bindings_match_images() {
        let mut entry = bare_entry();
        entry.images = vec![MediaItem::new("a.png", "A"), MediaItem::new("b.png", "B")];

        let view = render_project(&entry);
        let bindings = view.gallery.thumbnail_bindings();
        assert_eq!(bindings.len(), 2);
        for (image, activation) in bindings {
            assert_eq!(image.src, activation.src);
            assert_eq!(image.caption, activation.caption);
        }
    }

    #[test]
    fn test_links_fixed_order() {
        let mut entry = bare_entry();
        entry.demo = Some("https://demo".to_string());
        entry.github = Some("https://github".to_string());

        let kinds: Vec<_> = render_project(&entry).links.iter().map(|l| l.kind).collect();
        assert_eq!(kinds, vec![LinkKind::Source, LinkKind::Demo]);
    }

    #[test]
    fn test_demo_only_link() {
        let mut entry = bare_entry();
        entry.demo = Some("https://demo".to_string());

        let links = render_project(&entry).links;
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].kind, LinkKind::Demo);
        assert_eq!(links[0].kind.icon(), "fas fa-external-link-alt");
    }

    #[test]
    fn test_description_line_breaks() {
        let mut entry = bare_entry();
        entry.description = "a\n\nb".to_string();
        assert_eq!(render_project(&entry).description_lines, vec!["a", "", "b"]);
    }

    #[test]
    fn test_gallery_keys_follow_media_not_position() {
        let mut first = bare_entry();
        first.images = vec![MediaItem::new("a.png", "A")];
        let mut second = bare_entry();
        second.id = "other".to_string();
        second.images = vec![MediaItem::new("b.png", "B")];

        let keys = |entry: &ProjectEntry| match render_project(entry).gallery {
            GalleryView::Media(items) => items.iter().map(|i| i.key().to_string()).collect(),
            GalleryView::Placeholder { .. } => Vec::<String>::new(),
        };

        assert_eq!(keys(&first), vec!["a.png"]);
        assert_eq!(keys(&second), vec!["b.png"]);
    }

    #[test]
    fn test_video_key_is_its_source() {
        let mut entry = bare_entry();
        entry.video = Some(MediaItem::new("clip.mp4", "Clip"));
        let GalleryView::Media(items) = render_project(&entry).gallery else {
            panic!("expected media gallery");
        };
        assert_eq!(items[0].key(), "clip.mp4");
    }
}
