//! Shared data models for the catalog, queries and reviews

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Category id that disables the category axis of a [`Query`]
pub const ALL_CATEGORIES: &str = "all";

/// One playable third-party game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: String,
    /// Not unique: a game cross-listed into two categories has two records with one title
    pub title: String,
    #[serde(default)]
    pub image: String,
    /// May contain duplicates
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: String,
    /// Site-relative play path, e.g. `/play/krunker`
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html5_url: Option<String>,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub trending: bool,
    #[serde(default)]
    pub featured: bool,
}

impl GameRecord {
    /// Record with no tags, no flags and the conventional `/play/<id>` path
    pub fn new(id: impl Into<String>, title: impl Into<String>, category: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            href: format!("/play/{}", id),
            id,
            title: title.into(),
            image: String::new(),
            tags: Vec::new(),
            category: category.into(),
            html5_url: None,
            popular: false,
            trending: false,
            featured: false,
        }
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_html5_url(mut self, url: impl Into<String>) -> Self {
        self.html5_url = Some(url.into());
        self
    }

    pub fn mark_popular(mut self) -> Self {
        self.popular = true;
        self
    }

    pub fn mark_trending(mut self) -> Self {
        self.trending = true;
        self
    }

    pub fn mark_featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// True if any of the landing-page flags is set
    pub fn is_highlighted(&self) -> bool {
        self.popular || self.trending || self.featured
    }

    /// Ranking used by the trending view: trending outweighs featured outweighs popular
    pub fn highlight_score(&self) -> u8 {
        (if self.trending { 4 } else { 0 })
            + (if self.featured { 2 } else { 0 })
            + (if self.popular { 1 } else { 0 })
    }

    /// Ranking used by the recommended view: featured outweighs popular outweighs trending
    pub fn recommended_score(&self) -> u8 {
        (if self.featured { 4 } else { 0 })
            + (if self.popular { 2 } else { 0 })
            + (if self.trending { 1 } else { 0 })
    }
}

/// Static category vocabulary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDescriptor {
    pub id: String,
    /// Display name
    pub name: String,
    pub icon: String,
}

// ============================================================================
// Query
// ============================================================================

/// Current search/filter state of a list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Query {
    pub search_term: String,
    /// A category id, or [`ALL_CATEGORIES`]
    pub category: String,
    pub required_tags: BTreeSet<String>,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: ALL_CATEGORIES.to_string(),
            required_tags: BTreeSet::new(),
        }
    }
}

impl Query {
    pub fn search(term: impl Into<String>) -> Self {
        Self { search_term: term.into(), ..Self::default() }
    }

    pub fn in_category(category: impl Into<String>) -> Self {
        Self { category: category.into(), ..Self::default() }
    }

    pub fn with_tags<I, T>(tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            required_tags: tags.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Select the tag if unselected, deselect it otherwise
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.required_tags.remove(tag) {
            self.required_tags.insert(tag.to_string());
        }
    }

    /// Reset every axis ("Clear All Filters")
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether any axis narrows the catalog
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty()
            || self.category != ALL_CATEGORIES
            || !self.required_tags.is_empty()
    }
}

// ============================================================================
// Reviews
// ============================================================================

/// A player review shown on a game's detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_name: String,
    pub rating: u8,           // 1-5 stars
    pub comment: String,
    /// YYYY-MM-DD
    pub date: String,
    pub likes: u32,
}

/// Review form contents before validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    pub user_name: String,
    /// Unchecked input; `ReviewBook::submit` accepts 1-5 only
    pub rating: i64,
    pub comment: String,
}
