//! REST API routes

use axum::{
    extract::{rejection::JsonRejection, Path, Query as QueryParams, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, MutexGuard};
use tapthegame_core::{
    available_tags, category_info, filter_games, filter_in_category, flag_counts, matches_query, partition_sections_with,
    play_url, average_rating, Catalog, CatalogError, CategoryDescriptor, CategoryInfo, GameRecord, KeyValueStore,
    Query, Review, ReviewBook, ReviewDraft, SectionKey, ALL_CATEGORIES, IFRAME_ALLOW, IFRAME_SANDBOX,
    RELATED_LIMIT,
};
use crate::AppState;

type ApiError = (StatusCode, Json<serde_json::Value>);
type ApiResult<T> = Result<Json<T>, ApiError>;

/// Map a core error onto an HTTP status with a JSON error body
fn error_response(e: CatalogError) -> ApiError {
    let status = match &e {
        CatalogError::NotFound { .. }
        | CatalogError::ReviewNotFound { .. }
        | CatalogError::UnknownCategory(_) => StatusCode::NOT_FOUND,
        CatalogError::InvalidReview(_) => StatusCode::BAD_REQUEST,
        CatalogError::Storage(_) | CatalogError::InvalidData(_) => {
            tracing::error!("Internal error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(serde_json::json!({"error": e.to_string()})))
}

fn cloned(games: &[&GameRecord]) -> Vec<GameRecord> {
    games.iter().map(|g| (*g).clone()).collect()
}

// ============================================================================
// Filter parameters
// ============================================================================

/// `?q=&category=&tags=a,b`
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
}

impl FilterParams {
    pub fn into_query(self) -> Query {
        Query {
            search_term: self.q.unwrap_or_default(),
            category: self.category
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| ALL_CATEGORIES.to_string()),
            required_tags: self.tags
                .map(|tags| {
                    tags.split(',')
                        .filter(|t| !t.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

#[derive(Serialize)]
pub struct GameList {
    pub query: Query,
    pub total: usize,
    pub games: Vec<GameRecord>,
}

impl GameList {
    fn new(query: Query, games: &[&GameRecord]) -> Self {
        Self { query, total: games.len(), games: cloned(games) }
    }
}

// ============================================================================
// Catalog endpoints
// ============================================================================

pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<CategoryDescriptor>> {
    Json(state.catalog.categories().to_vec())
}

#[derive(Serialize)]
pub struct CategoryPage {
    pub category: CategoryDescriptor,
    pub info: CategoryInfo,
    /// Size of the category before search/tag filtering
    pub category_total: usize,
    pub tags: Vec<String>,
    pub results: GameList,
}

pub async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    QueryParams(params): QueryParams<FilterParams>,
) -> ApiResult<CategoryPage> {
    let category = state.catalog.category(&id).map_err(error_response)?.clone();
    let in_category = state.catalog.games_in_category(&id);

    let mut query = params.into_query();
    query.category = id.clone();
    let games = filter_in_category(state.catalog.games(), &id, &query);

    Ok(Json(CategoryPage {
        category,
        info: category_info(&id),
        category_total: in_category.len(),
        tags: available_tags(in_category).into_iter().map(String::from).collect(),
        results: GameList::new(query, &games),
    }))
}

pub async fn list_tags(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<String>> {
    Json(available_tags(state.catalog.games()).into_iter().map(String::from).collect())
}

pub async fn search_games(
    State(state): State<Arc<AppState>>,
    QueryParams(params): QueryParams<FilterParams>,
) -> Json<GameList> {
    let query = params.into_query();
    let games = filter_games(state.catalog.games(), &query);
    tracing::debug!(term = %query.search_term, category = %query.category, matches = games.len(), "Catalog search");
    Json(GameList::new(query, &games))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDetail {
    pub game: GameRecord,
    pub play_url: String,
    pub sandbox: &'static str,
    pub allow: &'static str,
    pub related: Vec<GameRecord>,
}

pub async fn get_game(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<GameDetail> {
    let game = state.catalog.find(&id).map_err(error_response)?;
    let related = state.catalog.related(&id, RELATED_LIMIT).map_err(error_response)?;

    Ok(Json(GameDetail {
        play_url: play_url(game),
        game: game.clone(),
        sandbox: IFRAME_SANDBOX,
        allow: IFRAME_ALLOW,
        related: cloned(&related),
    }))
}

#[derive(Serialize)]
pub struct SectionView {
    pub key: SectionKey,
    /// Flag sections dedup titles; category rows do not
    pub flag: bool,
    pub href: String,
    pub games: Vec<GameRecord>,
}

/// Landing page sections over the unfiltered catalog
pub async fn get_sections(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<SectionView>> {
    let filtered = filter_games(state.catalog.games(), &Query::default());
    let sections = partition_sections_with(&filtered, &state.section_layout);

    Json(sections.into_vec()
        .into_iter()
        .map(|s| SectionView {
            flag: s.key.is_flag_section(),
            href: s.key.view_more_href(),
            games: cloned(&s.games),
            key: s.key,
        })
        .collect())
}

#[derive(Serialize)]
pub struct CategoryCount {
    pub category: CategoryDescriptor,
    pub count: usize,
}

#[derive(Serialize)]
pub struct HighlightList {
    pub results: GameList,
    pub tags: Vec<String>,
    pub flag_counts: std::collections::BTreeMap<&'static str, usize>,
    pub category_counts: Vec<CategoryCount>,
}

fn highlight_list(catalog: &Catalog, view: Vec<&GameRecord>, params: FilterParams) -> HighlightList {
    let query = params.into_query();
    let games: Vec<&GameRecord> = view.iter().copied().filter(|g| matches_query(g, &query)).collect();
    HighlightList {
        tags: available_tags(view.iter().copied()).into_iter().map(String::from).collect(),
        flag_counts: flag_counts(view.iter().copied()),
        category_counts: catalog.category_counts(&view)
            .into_iter()
            .map(|(category, count)| CategoryCount { category: category.clone(), count })
            .collect(),
        results: GameList::new(query, &games),
    }
}

/// Flagged games ranked trending, then featured, then popular
pub async fn get_trending(
    State(state): State<Arc<AppState>>,
    QueryParams(params): QueryParams<FilterParams>,
) -> Json<HighlightList> {
    Json(highlight_list(&state.catalog, state.catalog.trending_view(), params))
}

pub async fn get_recommended(
    State(state): State<Arc<AppState>>,
    QueryParams(params): QueryParams<FilterParams>,
) -> Json<HighlightList> {
    Json(highlight_list(&state.catalog, state.catalog.recommended_view(), params))
}

// ============================================================================
// Review endpoints
// ============================================================================

fn lock_reviews(
    state: &AppState,
) -> Result<MutexGuard<'_, ReviewBook<Box<dyn KeyValueStore + Send>>>, ApiError> {
    state.reviews.lock()
        .map_err(|_| error_response(CatalogError::Storage("review store lock poisoned".to_string())))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub average_rating: f32,
    pub count: usize,
    pub reviews: Vec<Review>,
}

pub async fn list_reviews(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<ReviewSummary> {
    state.catalog.find(&id).map_err(error_response)?;
    let reviews = lock_reviews(&state)?.list(&id).map_err(error_response)?;

    Ok(Json(ReviewSummary {
        average_rating: average_rating(&reviews),
        count: reviews.len(),
        reviews,
    }))
}

pub async fn submit_review(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<ReviewDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    state.catalog.find(&id).map_err(error_response)?;
    let Json(draft) = payload.map_err(|rejection| {
        error_response(CatalogError::InvalidReview(rejection.body_text()))
    })?;
    let review = lock_reviews(&state)?
        .submit(&id, draft, chrono::Utc::now())
        .map_err(error_response)?;

    tracing::info!(
        game_id = %id,
        review_id = %review.id,
        rating = %review.rating,
        "Review submitted"
    );

    Ok((StatusCode::CREATED, Json(review)))
}

pub async fn like_review(
    State(state): State<Arc<AppState>>,
    Path((id, review_id)): Path<(String, String)>,
) -> ApiResult<Review> {
    state.catalog.find(&id).map_err(error_response)?;
    let review = lock_reviews(&state)?
        .like(&id, &review_id)
        .map_err(error_response)?;
    Ok(Json(review))
}
