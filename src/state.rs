use sqlx::PgPool;
use std::sync::Arc;

use crate::{config::Config, db::rating::RatingStore};

#[derive(Clone)]
pub struct AppState {
    pub postgres: PgPool,
    pub ratings: SharedRatingStore,
    pub config: Arc<Config>,
}

pub type SharedRatingStore = Arc<dyn RatingStore>;
