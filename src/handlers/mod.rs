//! HTTP handlers, one module per table. Each module builds its own router
//! around the store it is given.

pub mod skills;
pub mod user_skills;
pub mod users;

/// Parse a numeric path segment. `None` means no row can carry this id, so
/// callers answer as they would for an id that does not exist.
pub(crate) fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
