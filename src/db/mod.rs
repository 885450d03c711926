//! Database module: row types, schema and one store per table.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows (and their JSON shape)
//! - `schema.rs`: table names and SQL DDL for bootstrapping an empty database
//! - `pool.rs`: opening the sqlx pool
//! - `users.rs`, `skills.rs`, `user_skills.rs`: one statement per operation

pub mod models;
pub mod pool;
pub mod schema;
pub mod skills;
pub mod user_skills;
pub mod users;

pub use models::{Skill, User, UserSkill, UserSummary};
pub use pool::{SqlitePool, connect, connect_in_memory};
pub use skills::SkillStore;
pub use user_skills::UserSkillStore;
pub use users::UserStore;

use crate::error::RecapError;

/// Row absence becomes `NotFound(id)`; everything else stays a driver error.
pub(crate) fn not_found_for(id: i64) -> impl FnOnce(sqlx::Error) -> RecapError {
    move |e| match e {
        sqlx::Error::RowNotFound => RecapError::NotFound(id.to_string()),
        other => RecapError::Database(other),
    }
}
