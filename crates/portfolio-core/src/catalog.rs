//! Project Catalog
//!
//! The fixed set of projects the page can show. Built once at startup from
//! the embedded `data/projects.json` or from a user-supplied file with the
//! same shape, and never mutated afterwards.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

/// Embedded catalog shipped with the page
const BUILTIN_CATALOG: &str = include_str!("../data/projects.json");

/// Maximum length of the card blurb derived from a description
pub const CARD_SUMMARY_CHARS: usize = 160;

/// A media file with the caption shown beneath it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub src: String,
    pub caption: String,
}

impl MediaItem {
    pub fn new(src: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            caption: caption.into(),
        }
    }
}

/// Display metadata for one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    /// Identifier referenced by project cards
    pub id: String,
    pub title: String,
    /// Free text; `\n` marks a visual line break
    pub description: String,
    /// Short card text; derived from the description when absent
    #[serde(default)]
    pub summary: Option<String>,
    /// Tech tags in display order
    #[serde(default)]
    pub tech: Vec<String>,
    /// Font Awesome class shown when the project has no media
    pub icon: String,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub images: Vec<MediaItem>,
    #[serde(default)]
    pub video: Option<MediaItem>,
}

impl ProjectEntry {
    /// Whether the entry has anything to put in the gallery
    pub fn has_media(&self) -> bool {
        self.video.is_some() || !self.images.is_empty()
    }

    /// Text for the project card.
    ///
    /// Uses `summary` when present, otherwise the first paragraph of the
    /// description cut to [`CARD_SUMMARY_CHARS`] characters.
    pub fn card_summary(&self) -> String {
        if let Some(summary) = &self.summary {
            return summary.clone();
        }

        let first = self
            .description
            .split("\n\n")
            .next()
            .unwrap_or_default()
            .trim();

        if first.chars().count() <= CARD_SUMMARY_CHARS {
            first.to_string()
        } else {
            let cut: String = first.chars().take(CARD_SUMMARY_CHARS).collect();
            format!("{}…", cut.trim_end())
        }
    }
}

/// Immutable mapping from project id to entry.
///
/// Keeps declaration order for the project grid and an index for lookups.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<ProjectEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting empty ids, empty titles and duplicates
    pub fn new(entries: Vec<ProjectEntry>) -> PortfolioResult<Self> {
        let mut index = HashMap::with_capacity(entries.len());

        for (pos, entry) in entries.iter().enumerate() {
            if entry.id.trim().is_empty() {
                return Err(PortfolioError::InvalidCatalog(format!(
                    "entry #{} has an empty id",
                    pos
                )));
            }
            if entry.title.trim().is_empty() {
                return Err(PortfolioError::InvalidCatalog(format!(
                    "project '{}' has an empty title",
                    entry.id
                )));
            }
            if index.insert(entry.id.clone(), pos).is_some() {
                return Err(PortfolioError::InvalidCatalog(format!(
                    "duplicate id '{}'",
                    entry.id
                )));
            }
        }

        Ok(Self { entries, index })
    }

    /// The catalog shipped with the page
    pub fn builtin() -> PortfolioResult<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse a catalog from a JSON array of entries
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        let entries: Vec<ProjectEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!("Loaded {} projects from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// Look up a project by id
    pub fn get(&self, id: &str) -> Option<&ProjectEntry> {
        self.index.get(id).map(|&pos| &self.entries[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &ProjectEntry> {
        self.entries.iter()
    }

    /// Project ids in declaration order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, title: &str) -> ProjectEntry {
        ProjectEntry {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            summary: None,
            tech: Vec::new(),
            icon: "fas fa-code".to_string(),
            github: None,
            demo: None,
            images: Vec::new(),
            video: None,
        }
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 7);
        assert_eq!(
            catalog.ids().collect::<Vec<_>>(),
            vec![
                "multilingual-chatbot",
                "pacman",
                "lunar-lander",
                "fraud-detection",
                "securities",
                "cognitive-distortions",
                "galois-aes",
            ]
        );
    }

    #[test]
    fn test_builtin_media_shapes() {
        let catalog = Catalog::builtin().unwrap();

        let chatbot = catalog.get("multilingual-chatbot").unwrap();
        assert_eq!(chatbot.images.len(), 4);
        assert!(chatbot.video.is_none());

        let pacman = catalog.get("pacman").unwrap();
        assert_eq!(pacman.video.as_ref().unwrap().src, "images/video (3).mp4");
        assert!(pacman.images.is_empty());

        let securities = catalog.get("securities").unwrap();
        assert!(!securities.has_media());
        assert!(securities.github.is_none());
        assert!(securities.demo.is_none());
    }

    #[test]
    fn test_get_unknown_id() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.get("does-not-exist").is_none());
        assert!(!catalog.contains(""));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(vec![entry("a", "A"), entry("a", "Again")]);
        assert!(matches!(result, Err(PortfolioError::InvalidCatalog(_))));
    }

    #[test]
    fn test_empty_id_and_title_rejected() {
        assert!(Catalog::new(vec![entry("  ", "A")]).is_err());
        assert!(Catalog::new(vec![entry("a", "")]).is_err());
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"[{"id":"x","title":"X","description":"d","icon":"fas fa-x"}]"#;
        let catalog = Catalog::from_json(json).unwrap();
        let x = catalog.get("x").unwrap();
        assert!(x.tech.is_empty());
        assert!(x.images.is_empty());
        assert!(x.video.is_none());
        assert!(x.github.is_none());
    }

    #[test]
    fn test_card_summary_prefers_explicit() {
        let mut e = entry("a", "A");
        e.summary = Some("Short".to_string());
        e.description = "Long text".to_string();
        assert_eq!(e.card_summary(), "Short");
    }

    #[test]
    fn test_card_summary_first_paragraph() {
        let mut e = entry("a", "A");
        e.description = "First paragraph.\n\nSecond paragraph.".to_string();
        assert_eq!(e.card_summary(), "First paragraph.");
    }

    #[test]
    fn test_card_summary_truncates_on_char_boundary() {
        let mut e = entry("a", "A");
        e.description = "→".repeat(CARD_SUMMARY_CHARS + 10);
        let summary = e.card_summary();
        assert!(summary.ends_with('…'));
        assert_eq!(summary.chars().count(), CARD_SUMMARY_CHARS + 1);
    }
}
