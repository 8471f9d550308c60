//! Property-based tests for the query engine and section partitioner

use std::collections::HashSet;

use proptest::prelude::*;
use tapthegame_core::{
    filter_games, partition_sections, GameRecord, Query, SectionKey, ALL_CATEGORIES, SECTION_CAP,
};

const TITLES: [&str; 6] = ["Krunker", "Raven Star", "Hole.io", "Drift Boss", "Paper.io 2", "Dogeminer"];
const CATEGORIES: [&str; 4] = ["io", "action", "racing", "clicker"];
const TAGS: [&str; 5] = ["io", "gun", "car", "idle", "battle royale"];

fn game_strategy() -> impl Strategy<Value = (usize, usize, Vec<usize>, bool, bool, bool)> {
    (
        0..TITLES.len(),
        0..CATEGORIES.len(),
        prop::collection::vec(0..TAGS.len(), 0..4),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
}

/// Catalog with unique ids; titles repeat to exercise cross-listing
fn catalog_strategy() -> impl Strategy<Value = Vec<GameRecord>> {
    prop::collection::vec(game_strategy(), 0..30).prop_map(|specs| {
        specs.into_iter()
            .enumerate()
            .map(|(i, (title, category, tags, popular, trending, featured))| {
                let mut game = GameRecord::new(format!("g{}", i), TITLES[title], CATEGORIES[category])
                    .with_tags(tags.into_iter().map(|t| TAGS[t]));
                game.popular = popular;
                game.trending = trending;
                game.featured = featured;
                game
            })
            .collect()
    })
}

fn query_strategy() -> impl Strategy<Value = Query> {
    (
        prop_oneof![Just(String::new()), Just("io".to_string()), Just("STAR".to_string()), Just("r".to_string())],
        prop_oneof![Just(ALL_CATEGORIES.to_string()), Just("io".to_string()), Just("racing".to_string())],
        prop::collection::btree_set(prop_oneof![Just("io"), Just("gun"), Just("car")], 0..3),
    )
        .prop_map(|(search_term, category, tags)| Query {
            search_term,
            category,
            required_tags: tags.into_iter().map(String::from).collect(),
        })
}

fn positions(catalog: &[GameRecord], games: &[&GameRecord]) -> Vec<usize> {
    games.iter()
        .map(|g| catalog.iter().position(|c| std::ptr::eq(c, *g)).expect("result borrows from catalog"))
        .collect()
}

proptest! {
    /// Property: same inputs, same output
    #[test]
    fn prop_filter_is_idempotent(catalog in catalog_strategy(), query in query_strategy()) {
        prop_assert_eq!(filter_games(&catalog, &query), filter_games(&catalog, &query));
    }

    /// Property: results keep catalog order
    #[test]
    fn prop_filter_preserves_order(catalog in catalog_strategy(), query in query_strategy()) {
        let result = filter_games(&catalog, &query);
        let pos = positions(&catalog, &result);
        prop_assert!(pos.windows(2).all(|w| w[0] < w[1]), "out of order: {:?}", pos);
    }

    /// Property: a multi-axis query equals the intersection of its single-axis queries
    #[test]
    fn prop_axes_compose_by_intersection(catalog in catalog_strategy(), query in query_strategy()) {
        let search = positions(&catalog, &filter_games(&catalog, &Query::search(query.search_term.clone())));
        let category = positions(&catalog, &filter_games(&catalog, &Query::in_category(query.category.clone())));
        let tags = positions(&catalog, &filter_games(&catalog, &Query::with_tags(query.required_tags.clone())));

        let expected: Vec<usize> = search.into_iter()
            .filter(|i| category.contains(i) && tags.contains(i))
            .collect();
        prop_assert_eq!(positions(&catalog, &filter_games(&catalog, &query)), expected);
    }

    /// Property: the empty query is the identity
    #[test]
    fn prop_empty_query_is_identity(catalog in catalog_strategy()) {
        let result = filter_games(&catalog, &Query::default());
        prop_assert_eq!(positions(&catalog, &result), (0..catalog.len()).collect::<Vec<_>>());
    }

    /// Property: no title appears in two flag sections, or twice in one
    #[test]
    fn prop_flag_sections_never_repeat_a_title(catalog in catalog_strategy()) {
        let filtered = filter_games(&catalog, &Query::default());
        let sections = partition_sections(&filtered);

        let mut seen = HashSet::new();
        for key in [SectionKey::MostPlayed, SectionKey::Recommended, SectionKey::Trending] {
            let games = sections.get(&key).unwrap();
            prop_assert!(games.len() <= SECTION_CAP);
            for game in games {
                prop_assert!(seen.insert(game.title.clone()), "{} repeated in {}", game.title, key);
            }
        }
    }

    /// Property: every section is a capped, in-order subset of its predicate
    #[test]
    fn prop_sections_are_ordered_subsets(catalog in catalog_strategy()) {
        let filtered = filter_games(&catalog, &Query::default());
        for section in partition_sections(&filtered).iter() {
            prop_assert!(section.games.len() <= SECTION_CAP);
            let pos = positions(&catalog, &section.games);
            prop_assert!(pos.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
