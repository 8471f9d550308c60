//! Catalog store: the fixed list of games and the category vocabulary
//!
//! Built once at startup and read-only afterwards.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::models::{CategoryDescriptor, GameRecord, ALL_CATEGORIES};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Related games shown below the player on a detail page
pub const RELATED_LIMIT: usize = 8;

/// On-disk catalog layout
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: Vec<CategoryDescriptor>,
    games: Vec<GameRecord>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    games: Vec<GameRecord>,
    categories: Vec<CategoryDescriptor>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate game ids
    pub fn new(games: Vec<GameRecord>, categories: Vec<CategoryDescriptor>) -> Result<Self> {
        let mut seen = HashSet::new();
        for game in &games {
            if !seen.insert(game.id.as_str()) {
                return Err(CatalogError::InvalidData(format!("duplicate game id: {}", game.id)));
            }
        }
        Ok(Self { games, categories })
    }

    /// The catalog shipped with the site
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.games, file.categories)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| CatalogError::InvalidData(format!("reading {}: {}", path.display(), e)))?;
        Self::from_json(&content)
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    /// Full vocabulary including the `all` entry
    pub fn categories(&self) -> &[CategoryDescriptor] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Look up a game by id; a stale or malformed id is `NotFound`
    pub fn find(&self, id: &str) -> Result<&GameRecord> {
        self.games.iter()
            .find(|g| g.id == id)
            .ok_or_else(|| CatalogError::not_found(id))
    }

    pub fn category(&self, id: &str) -> Result<&CategoryDescriptor> {
        self.categories.iter()
            .find(|c| c.id == id)
            .ok_or_else(|| CatalogError::UnknownCategory(id.to_string()))
    }

    pub fn games_in_category(&self, id: &str) -> Vec<&GameRecord> {
        self.games.iter().filter(|g| g.category == id).collect()
    }

    /// Other games sharing the category or at least one tag, catalog order
    pub fn related(&self, id: &str, limit: usize) -> Result<Vec<&GameRecord>> {
        let game = self.find(id)?;
        Ok(self.games.iter()
            .filter(|g| g.id != game.id)
            .filter(|g| g.category == game.category || g.tags.iter().any(|t| game.has_tag(t)))
            .take(limit)
            .collect())
    }

    /// Games with any flag, highest highlight score first; ties keep catalog order
    pub fn trending_view(&self) -> Vec<&GameRecord> {
        let mut games: Vec<&GameRecord> = self.games.iter().filter(|g| g.is_highlighted()).collect();
        games.sort_by(|a, b| b.highlight_score().cmp(&a.highlight_score()));
        games
    }

    /// Featured games, highest recommended score first; ties keep catalog order
    pub fn recommended_view(&self) -> Vec<&GameRecord> {
        let mut games: Vec<&GameRecord> = self.games.iter().filter(|g| g.featured).collect();
        games.sort_by(|a, b| b.recommended_score().cmp(&a.recommended_score()));
        games
    }

    /// Non-empty category counts over `games`, in vocabulary order
    pub fn category_counts(&self, games: &[&GameRecord]) -> Vec<(&CategoryDescriptor, usize)> {
        self.categories.iter()
            .filter(|c| c.id != ALL_CATEGORIES)
            .map(|c| (c, games.iter().filter(|g| g.category == c.id).count()))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

/// Sorted, deduplicated tags across `games`
pub fn available_tags<'a>(games: impl IntoIterator<Item = &'a GameRecord>) -> Vec<&'a str> {
    games.into_iter()
        .flat_map(|g| g.tags.iter().map(String::as_str))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Count of games per flag, as shown in the list view stats
pub fn flag_counts<'a>(games: impl IntoIterator<Item = &'a GameRecord>) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::from([("popular", 0), ("trending", 0), ("featured", 0)]);
    for game in games {
        for (flag, set) in [("popular", game.popular), ("trending", game.trending), ("featured", game.featured)] {
            if set {
                *counts.entry(flag).or_insert(0) += 1;
            }
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::filter_games;
    use crate::models::Query;

    fn small() -> Catalog {
        Catalog::new(
            vec![
                GameRecord::new("shell", "Shell Shockers", "io").with_tags(["io", "gun"]).mark_popular().mark_featured(),
                GameRecord::new("drift", "Drift Boss", "racing").with_tags(["racing", "driving"]),
                GameRecord::new("krunker", "Krunker", "io").with_tags(["gun"]).mark_featured(),
                GameRecord::new("raven", "Raven Star", "shooter").mark_trending(),
            ],
            vec![
                CategoryDescriptor { id: "all".into(), name: "All Games".into(), icon: "🎮".into() },
                CategoryDescriptor { id: "io".into(), name: "IO Games".into(), icon: "🌐".into() },
                CategoryDescriptor { id: "racing".into(), name: "Racing".into(), icon: "🏎️".into() },
                CategoryDescriptor { id: "puzzle".into(), name: "Puzzle".into(), icon: "🧩".into() },
            ],
        )
        .unwrap()
    }

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.category(ALL_CATEGORIES).is_ok());
        assert!(catalog.find("krunker").is_ok());
    }

    #[test]
    fn builtin_catalog_cross_lists_raven_star() {
        let catalog = Catalog::builtin().unwrap();
        let listings: Vec<&GameRecord> = catalog.games().iter().filter(|g| g.title == "Raven Star").collect();
        assert_eq!(listings.len(), 2);
        assert_ne!(listings[0].id, listings[1].id);
        assert_ne!(listings[0].category, listings[1].category);
    }

    #[test]
    fn empty_query_returns_whole_catalog() {
        let catalog = Catalog::builtin().unwrap();
        let all = filter_games(catalog.games(), &Query::default());
        assert_eq!(all.len(), catalog.len());
        assert!(all.iter().zip(catalog.games()).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn find_unknown_id_is_not_found() {
        let catalog = small();
        let err = catalog.find("nonexistent").unwrap_err();
        assert_eq!(err, CatalogError::NotFound { id: "nonexistent".into() });
        assert!(err.is_not_found());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = Catalog::new(
            vec![GameRecord::new("a", "A", "io"), GameRecord::new("a", "B", "io")],
            vec![],
        );
        assert!(matches!(result, Err(CatalogError::InvalidData(_))));
    }

    #[test]
    fn malformed_json_is_invalid_data() {
        assert!(matches!(Catalog::from_json("{"), Err(CatalogError::InvalidData(_))));
    }

    #[test]
    fn unknown_category_lookup() {
        let catalog = small();
        assert!(matches!(catalog.category("kids"), Err(CatalogError::UnknownCategory(_))));
        assert_eq!(catalog.category("io").unwrap().name, "IO Games");
    }

    #[test]
    fn related_shares_category_or_tag() {
        let catalog = small();
        let related: Vec<&str> = catalog.related("shell", RELATED_LIMIT).unwrap()
            .iter().map(|g| g.id.as_str()).collect();
        assert_eq!(related, ["krunker"]);
        assert!(catalog.related("missing", RELATED_LIMIT).is_err());
    }

    #[test]
    fn trending_view_ranks_by_score_stably() {
        let catalog = small();
        let ids: Vec<&str> = catalog.trending_view().iter().map(|g| g.id.as_str()).collect();
        // raven: 4, shell: 2 + 1, krunker: 2
        assert_eq!(ids, ["raven", "shell", "krunker"]);
    }

    #[test]
    fn recommended_view_keeps_only_featured() {
        let catalog = small();
        let ids: Vec<&str> = catalog.recommended_view().iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, ["shell", "krunker"]);
    }

    #[test]
    fn recommended_view_ranks_popular_featured_first() {
        let catalog = Catalog::new(
            vec![
                GameRecord::new("plain", "Plain", "io").mark_featured(),
                GameRecord::new("hot", "Hot", "io").mark_featured().mark_trending(),
                GameRecord::new("both", "Both", "io").mark_featured().mark_popular(),
                GameRecord::new("plain-2", "Plain 2", "io").mark_featured(),
            ],
            vec![],
        )
        .unwrap();
        let ids: Vec<&str> = catalog.recommended_view().iter().map(|g| g.id.as_str()).collect();
        // both: 4 + 2, hot: 4 + 1, plain and plain-2: 4 in catalog order
        assert_eq!(ids, ["both", "hot", "plain", "plain-2"]);
    }

    #[test]
    fn tags_are_sorted_and_unique() {
        let catalog = small();
        assert_eq!(available_tags(catalog.games()), ["driving", "gun", "io", "racing"]);
        assert_eq!(available_tags(catalog.games_in_category("racing")), ["driving", "racing"]);
    }

    #[test]
    fn category_counts_skip_empty_and_all() {
        let catalog = small();
        let games: Vec<&GameRecord> = catalog.games().iter().collect();
        let counts: Vec<(&str, usize)> = catalog.category_counts(&games)
            .into_iter().map(|(c, n)| (c.id.as_str(), n)).collect();
        assert_eq!(counts, [("io", 2), ("racing", 1)]);
    }

    #[test]
    fn flag_counts_tally_each_flag() {
        let catalog = small();
        let counts = flag_counts(catalog.games());
        assert_eq!(counts["popular"], 1);
        assert_eq!(counts["featured"], 2);
        assert_eq!(counts["trending"], 1);
    }
}
