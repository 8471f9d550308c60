//! Query engine: search term, category and required-tag filtering
//!
//! Axes combine with AND. The search axis is an OR over title, tags and
//! category; the tag axis requires every selected tag. Category pages search
//! title and tags only, since every candidate already shares the category.

use crate::models::{GameRecord, Query, ALL_CATEGORIES};

/// Matching records in catalog order
pub fn filter_games<'a>(catalog: &'a [GameRecord], query: &Query) -> Vec<&'a GameRecord> {
    let term = query.search_term.to_lowercase();
    catalog.iter()
        .filter(|g| matches_lowered(g, &term, query))
        .collect()
}

/// Whether a single record satisfies every active axis of `query`
pub fn matches_query(game: &GameRecord, query: &Query) -> bool {
    matches_lowered(game, &query.search_term.to_lowercase(), query)
}

/// Category page listing: records in `category` whose title or tags match the
/// search term and that carry every required tag. `query.category` is ignored.
pub fn filter_in_category<'a>(catalog: &'a [GameRecord], category: &str, query: &Query) -> Vec<&'a GameRecord> {
    let term = query.search_term.to_lowercase();
    catalog.iter()
        .filter(|g| g.category == category)
        .filter(|g| term.is_empty() || matches_title_or_tags(g, &term))
        .filter(|g| matches_tags(g, query))
        .collect()
}

fn matches_lowered(game: &GameRecord, term: &str, query: &Query) -> bool {
    matches_search(game, term)
        && matches_category(game, &query.category)
        && matches_tags(game, query)
}

/// `term` must already be lowercased. Not trimmed: " " only matches text containing a space.
fn matches_search(game: &GameRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    matches_title_or_tags(game, term) || game.category.to_lowercase().contains(term)
}

fn matches_title_or_tags(game: &GameRecord, term: &str) -> bool {
    game.title.to_lowercase().contains(term)
        || game.tags.iter().any(|tag| tag.to_lowercase().contains(term))
}

fn matches_category(game: &GameRecord, category: &str) -> bool {
    category == ALL_CATEGORIES || game.category == category
}

fn matches_tags(game: &GameRecord, query: &Query) -> bool {
    query.required_tags.iter().all(|tag| game.has_tag(tag))
}
