//! Core catalog types and logic for TapTheGame
//! 
//! This crate contains:
//! - Game and category models
//! - The catalog store and its lookup/view operations
//! - The query engine and landing-page section partitioner
//! - Reviews and theme preference over a narrow key-value store
//! - The game player embedding contract
//! - Error types

pub mod models;
pub mod error;
pub mod catalog;
pub mod query;
pub mod sections;
pub mod category_info;
pub mod storage;
pub mod reviews;
pub mod theme;
pub mod player;

pub use models::*;
pub use error::*;
pub use catalog::{available_tags, flag_counts, Catalog, RELATED_LIMIT};
pub use query::{filter_games, filter_in_category, matches_query};
pub use sections::{partition_sections, partition_sections_with, Section, SectionKey, SectionLayout, Sections, SECTION_CAP};
pub use category_info::{category_info, CategoryInfo};
pub use storage::{KeyValueStore, MemoryStore};
pub use reviews::{average_rating, ReviewBook};
pub use theme::Theme;
pub use player::{choose_fullscreen, play_url, FullscreenMethod, FULLSCREEN_FALLBACK, IFRAME_ALLOW, IFRAME_SANDBOX};
