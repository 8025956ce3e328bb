// SPDX-License-Identifier: MPL-2.0
//! The style catalog: the ordered list of art styles offered to the user.
//!
//! The catalog starts from a fixed built-in set and can be extended exactly
//! once by an asynchronous fetch (see [`source`]). Merging deduplicates by
//! style name so a provider echoing built-in styles never produces
//! duplicates.

pub mod source;

use serde::Deserialize;

/// A named artistic style with an optional preview image URL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StyleOption {
    pub name: String,
    /// Preview thumbnail location. Extra styles from the bundled source
    /// carry no preview and render as a placeholder.
    #[serde(default, alias = "imageUrl")]
    pub preview_url: Option<String>,
}

impl StyleOption {
    pub fn new(name: impl Into<String>, preview_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preview_url: Some(preview_url.into()),
        }
    }

    pub fn unillustrated(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preview_url: None,
        }
    }
}

/// Built-in styles available before any fetch.
pub fn builtin_styles() -> Vec<StyleOption> {
    [
        ("Cartoon", "https://images.unsplash.com/photo-1593085512500-5d55148d6f0d?w=200&h=200&fit=crop&q=80"),
        ("Van Gogh", "https://images.unsplash.com/photo-1579783902614-a3fb3927b6a5?w=200&h=200&fit=crop&q=80"),
        ("Sketch", "https://images.unsplash.com/photo-1588864724222-26bb46d29943?w=200&h=200&fit=crop&q=80"),
        ("Anime", "https://images.unsplash.com/photo-1607345332249-513a04b3334c?w=200&h=200&fit=crop&q=80"),
        ("Impressionist", "https://images.unsplash.com/photo-1599785209707-a456fc1337bb?w=200&h=200&fit=crop&q=80"),
        ("Watercolor", "https://images.unsplash.com/photo-1513360371669-443f07a48f8d?w=200&h=200&fit=crop&q=80"),
        ("Oil Painting", "https://images.unsplash.com/photo-1579965342575-5fab2a4d6825?w=200&h=200&fit=crop&q=80"),
        ("Cyberpunk", "https://images.unsplash.com/photo-1639762681057-408e52192e50?w=200&h=200&fit=crop&q=80"),
        ("Steampunk", "https://images.unsplash.com/photo-1456428746267-31627f674f7b?w=200&h=200&fit=crop&q=80"),
        ("Roman carving", "https://images.unsplash.com/photo-1600098910833-410a561a0c49?w=200&h=200&fit=crop&q=80"),
        ("Renaissance painting", "https://images.unsplash.com/photo-1617591932329-1b332f14c771?w=200&h=200&fit=crop&q=80"),
    ]
    .into_iter()
    .map(|(name, url)| StyleOption::new(name, url))
    .collect()
}

/// Ordered style list with one-shot extension semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleCatalog {
    entries: Vec<StyleOption>,
    extra_loaded: bool,
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StyleCatalog {
    /// Catalog seeded with the built-in styles.
    pub fn builtin() -> Self {
        Self {
            entries: builtin_styles(),
            extra_loaded: false,
        }
    }

    /// Catalog with explicit entries, for tests.
    #[cfg(test)]
    pub fn with_entries(entries: Vec<StyleOption>) -> Self {
        Self {
            entries,
            extra_loaded: false,
        }
    }

    pub fn entries(&self) -> &[StyleOption] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|s| s.name == name)
    }

    /// Whether the load-more action is still offered. It disappears
    /// permanently after the first successful merge.
    pub fn can_load_more(&self) -> bool {
        !self.extra_loaded
    }

    /// Appends styles whose names are not already present and marks the
    /// catalog as extended. Returns the entries that were actually added,
    /// in catalog order, so callers can fetch their thumbnails.
    pub fn merge_extra(&mut self, extra: Vec<StyleOption>) -> Vec<StyleOption> {
        let mut added = Vec::new();
        for style in extra {
            if !self.contains(&style.name) {
                self.entries.push(style.clone());
                added.push(style);
            }
        }
        self.extra_loaded = true;
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_eleven_entries() {
        let catalog = StyleCatalog::builtin();
        assert_eq!(catalog.len(), 11);
        assert!(catalog.contains("Cartoon"));
        assert!(catalog.contains("Renaissance painting"));
        assert!(catalog.can_load_more());
    }

    #[test]
    fn builtin_styles_all_have_previews() {
        assert!(builtin_styles().iter().all(|s| s.preview_url.is_some()));
    }

    #[test]
    fn merge_appends_only_unseen_names() {
        let mut catalog = StyleCatalog::builtin();
        let added = catalog.merge_extra(vec![
            StyleOption::unillustrated("Pop Art"),
            StyleOption::unillustrated("Cartoon"), // already present
            StyleOption::unillustrated("Baroque"),
        ]);

        assert_eq!(catalog.len(), 13);
        assert_eq!(
            added.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            vec!["Pop Art", "Baroque"]
        );
    }

    #[test]
    fn merge_disables_further_loads() {
        let mut catalog = StyleCatalog::builtin();
        catalog.merge_extra(vec![StyleOption::unillustrated("Pop Art")]);
        assert!(!catalog.can_load_more());
    }

    #[test]
    fn merge_preserves_order() {
        let mut catalog = StyleCatalog::with_entries(vec![
            StyleOption::unillustrated("A"),
            StyleOption::unillustrated("B"),
        ]);
        catalog.merge_extra(vec![
            StyleOption::unillustrated("C"),
            StyleOption::unillustrated("D"),
        ]);
        let names: Vec<_> = catalog.entries().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn full_bundled_merge_reaches_twenty() {
        let mut catalog = StyleCatalog::builtin();
        let added = catalog.merge_extra(source::bundled_extra_styles());
        assert_eq!(added.len(), 9);
        assert_eq!(catalog.len(), 20);
        assert!(!catalog.can_load_more());
    }

    #[test]
    fn style_option_parses_image_url_alias() {
        let parsed: StyleOption =
            serde_json::from_str(r#"{"name": "Fauvism", "imageUrl": "https://x/y.jpg"}"#)
                .expect("parse");
        assert_eq!(parsed.name, "Fauvism");
        assert_eq!(parsed.preview_url.as_deref(), Some("https://x/y.jpg"));
    }
}
