use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Missing fields in a request body fall back to `Default`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, FromRow)]
#[serde(default)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
}

/// User projection returned by joins; the password column is never selected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, FromRow)]
#[serde(default)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, FromRow)]
#[serde(default)]
pub struct UserSkill {
    pub user_id: i64,
    pub skill_id: i64,
}

