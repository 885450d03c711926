use axum::Router;
use tower_http::trace::TraceLayer;

use crate::db::{SkillStore, SqlitePool, UserSkillStore, UserStore};
use crate::handlers::{skills, user_skills, users};

/// Stores handed to the per-table routers. Each holds a clone of one pool.
#[derive(Clone)]
pub struct RecapState {
    pub users: UserStore,
    pub skills: SkillStore,
    pub user_skills: UserSkillStore,
}

impl RecapState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            users: UserStore::new(pool.clone()),
            skills: SkillStore::new(pool.clone()),
            user_skills: UserSkillStore::new(pool),
        }
    }
}

pub fn recap_router(state: RecapState) -> Router {
    Router::new()
        .merge(users::router(state.users))
        .merge(skills::router(state.skills))
        .merge(user_skills::router(state.user_skills))
        .layer(TraceLayer::new_for_http())
}
