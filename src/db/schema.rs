//! Table names and SQL DDL for the three tables.
//!
//! Table names are interpolated into statements, so they must stay constants.

pub const USER_TABLE: &str = "user";
pub const SKILL_TABLE: &str = "skill";
pub const USER_SKILL_TABLE: &str = "user_skill";

/// SQLite schema:
/// - `user` and `skill` get generated integer ids
/// - `user_skill` is keyed by the (user_id, skill_id) pair with no foreign keys
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS user (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL DEFAULT '',
    password TEXT NOT NULL DEFAULT ''
);

CREATE TABLE IF NOT EXISTS skill (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL DEFAULT '',
    version TEXT NOT NULL DEFAULT ''
);

CREATE TABLE IF NOT EXISTS user_skill (
    user_id INTEGER NOT NULL,
    skill_id INTEGER NOT NULL,
    PRIMARY KEY (user_id, skill_id)
);

CREATE INDEX IF NOT EXISTS idx_user_skill_skill_id ON user_skill(skill_id);
"#;
