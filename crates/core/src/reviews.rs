//! Per-game review list
//!
//! Three sample reviews are always shown first. Player reviews are stored as a
//! JSON array under `reviews-<game id>`; the samples are never written.

use chrono::{DateTime, Utc};

use crate::error::{CatalogError, Result};
use crate::models::{Review, ReviewDraft};
use crate::storage::KeyValueStore;

const SEED_IDS: [&str; 3] = ["1", "2", "3"];

/// Sample reviews shown on every game page
pub fn seed_reviews() -> Vec<Review> {
    vec![
        Review {
            id: SEED_IDS[0].to_string(),
            user_name: "GamePlayer2023".to_string(),
            rating: 5,
            comment: "Amazing game! Beautiful graphics, smooth controls, highly recommended!".to_string(),
            date: "2024-01-15".to_string(),
            likes: 12,
        },
        Review {
            id: SEED_IDS[1].to_string(),
            user_name: "GameMaster".to_string(),
            rating: 4,
            comment: "Great game with interesting gameplay, but a bit challenging.".to_string(),
            date: "2024-01-10".to_string(),
            likes: 8,
        },
        Review {
            id: SEED_IDS[2].to_string(),
            user_name: "CasualPlayer".to_string(),
            rating: 4,
            comment: "Perfect for casual gaming, very relaxing.".to_string(),
            date: "2024-01-08".to_string(),
            likes: 5,
        },
    ]
}

/// Mean rating rounded to one decimal, 0.0 when there are no reviews
pub fn average_rating(reviews: &[Review]) -> f32 {
    if reviews.is_empty() {
        return 0.0;
    }
    let sum: u32 = reviews.iter().map(|r| r.rating as u32).sum();
    let avg = sum as f32 / reviews.len() as f32;
    (avg * 10.0).round() / 10.0
}

pub struct ReviewBook<S> {
    store: S,
}

impl<S: KeyValueStore> ReviewBook<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn key(game_id: &str) -> String {
        format!("reviews-{}", game_id)
    }

    fn stored(&self, game_id: &str) -> Result<Vec<Review>> {
        match self.store.get(&Self::key(game_id))? {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| CatalogError::Storage(format!("corrupt reviews for {}: {}", game_id, e))),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, game_id: &str, reviews: &[Review]) -> Result<()> {
        let json = serde_json::to_string(reviews)?;
        self.store.set(&Self::key(game_id), &json)
    }

    /// Sample reviews followed by stored player reviews in submission order
    pub fn list(&self, game_id: &str) -> Result<Vec<Review>> {
        let mut reviews = seed_reviews();
        reviews.extend(self.stored(game_id)?);
        Ok(reviews)
    }

    /// Validate and persist a new review. Name and comment are trimmed.
    pub fn submit(&mut self, game_id: &str, draft: ReviewDraft, now: DateTime<Utc>) -> Result<Review> {
        let user_name = draft.user_name.trim();
        let comment = draft.comment.trim();
        if user_name.is_empty() || comment.is_empty() || draft.rating == 0 {
            return Err(CatalogError::InvalidReview("Please fill in all the evaluation information".to_string()));
        }
        let rating = u8::try_from(draft.rating)
            .ok()
            .filter(|r| (1..=5).contains(r))
            .ok_or_else(|| CatalogError::InvalidReview("Rating must be between 1 and 5".to_string()))?;

        let mut stored = self.stored(game_id)?;
        let mut id = now.timestamp_millis();
        while SEED_IDS.contains(&id.to_string().as_str()) || stored.iter().any(|r| r.id == id.to_string()) {
            id += 1;
        }

        let review = Review {
            id: id.to_string(),
            user_name: user_name.to_string(),
            rating,
            comment: comment.to_string(),
            date: now.format("%Y-%m-%d").to_string(),
            likes: 0,
        };
        stored.push(review.clone());
        self.save(game_id, &stored)?;
        Ok(review)
    }

    /// Add a like. Player reviews persist the count; sample reviews return
    /// the bumped copy without storing it.
    pub fn like(&mut self, game_id: &str, review_id: &str) -> Result<Review> {
        if let Some(mut seed) = seed_reviews().into_iter().find(|r| r.id == review_id) {
            seed.likes += 1;
            return Ok(seed);
        }

        let mut stored = self.stored(game_id)?;
        let review = stored.iter_mut()
            .find(|r| r.id == review_id)
            .ok_or_else(|| CatalogError::ReviewNotFound { id: review_id.to_string() })?;
        review.likes += 1;
        let liked = review.clone();
        self.save(game_id, &stored)?;
        Ok(liked)
    }
}
