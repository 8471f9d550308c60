//! Landing page sections
//!
//! Flag sections are filled in priority order (most played, recommended,
//! trending). A title claimed by an earlier flag section is never shown in a
//! later one, and each flag section keeps only the first record per title.
//! Category rows are independent and may repeat anything.

use std::collections::HashSet;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::models::GameRecord;

/// Maximum games per landing page section
pub const SECTION_CAP: usize = 8;

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectionKey {
    /// Games flagged `popular`
    MostPlayed,
    /// Games flagged `featured`
    Recommended,
    /// Games flagged `trending`
    Trending,
    Category(String),
}

impl SectionKey {
    pub fn is_flag_section(&self) -> bool {
        !matches!(self, SectionKey::Category(_))
    }

    fn flag_matches(&self, game: &GameRecord) -> bool {
        match self {
            SectionKey::MostPlayed => game.popular,
            SectionKey::Recommended => game.featured,
            SectionKey::Trending => game.trending,
            SectionKey::Category(id) => game.category == *id,
        }
    }

    /// Path of the full list behind the section's "view more" link
    pub fn view_more_href(&self) -> String {
        match self {
            SectionKey::MostPlayed => "/most-played".to_string(),
            SectionKey::Recommended => "/recommended".to_string(),
            SectionKey::Trending => "/trending".to_string(),
            SectionKey::Category(id) => format!("/category/{}", id),
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionKey::MostPlayed => write!(f, "most-played"),
            SectionKey::Recommended => write!(f, "recommended"),
            SectionKey::Trending => write!(f, "trending"),
            SectionKey::Category(id) => write!(f, "category:{}", id),
        }
    }
}

impl Serialize for SectionKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Which category rows to build and how many games each section holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLayout {
    pub cap: usize,
    pub category_rows: Vec<String>,
}

impl Default for SectionLayout {
    fn default() -> Self {
        Self {
            cap: SECTION_CAP,
            category_rows: ["io", "casual", "action", "puzzle", "kids"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl SectionLayout {
    pub fn with_cap(cap: usize) -> Self {
        Self { cap, ..Self::default() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Section<'a> {
    pub key: SectionKey,
    pub games: Vec<&'a GameRecord>,
}

/// Sections in display order; serializes as a key → games map
#[derive(Debug, Clone, Default)]
pub struct Sections<'a> {
    sections: Vec<Section<'a>>,
}

impl<'a> Sections<'a> {
    pub fn get(&self, key: &SectionKey) -> Option<&[&'a GameRecord]> {
        self.sections.iter()
            .find(|s| s.key == *key)
            .map(|s| s.games.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section<'a>> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn into_vec(self) -> Vec<Section<'a>> {
        self.sections
    }
}

impl Serialize for Sections<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.sections.iter().map(|s| (s.key.to_string(), &s.games)))
    }
}

// ============================================================================
// Partitioning
// ============================================================================

/// Partition with the default layout (cap 8, standard category rows)
pub fn partition_sections<'a>(filtered: &[&'a GameRecord]) -> Sections<'a> {
    partition_sections_with(filtered, &SectionLayout::default())
}

pub fn partition_sections_with<'a>(filtered: &[&'a GameRecord], layout: &SectionLayout) -> Sections<'a> {
    let mut used_titles: HashSet<&'a str> = HashSet::new();
    let mut sections = Vec::with_capacity(3 + layout.category_rows.len());

    for key in [SectionKey::MostPlayed, SectionKey::Recommended, SectionKey::Trending] {
        // Every qualifying title is claimed, including ones past the cap
        let mut games: Vec<&'a GameRecord> = filtered.iter()
            .copied()
            .filter(|g| key.flag_matches(g))
            .filter(|&g| used_titles.insert(g.title.as_str()))
            .collect();
        games.truncate(layout.cap);
        sections.push(Section { key, games });
    }

    for category in &layout.category_rows {
        let key = SectionKey::Category(category.clone());
        let games = filtered.iter()
            .copied()
            .filter(|g| key.flag_matches(g))
            .take(layout.cap)
            .collect();
        sections.push(Section { key, games });
    }

    Sections { sections }
}
