use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::{delete, get},
};
use tracing::info;

use crate::db::{UserSkill, UserSkillStore};
use crate::error::RecapError;
use crate::handlers::parse_id;
use crate::middleware::LenientJson;
use crate::server::response::{alive, json_response, ok_result};

pub fn router(store: UserSkillStore) -> Router {
    Router::new()
        .route("/userskill/alive", get(alive))
        .route("/userskill", get(get_user_skills).post(insert_user_skill))
        .route("/userskill/skills/{user_id}", get(get_skills_by_user))
        .route("/userskill/users/{skill_id}", get(get_users_by_skill))
        .route("/userskill/{user_id}/{skill_id}", delete(delete_user_skill))
        .with_state(store)
}

pub async fn get_user_skills(
    State(store): State<UserSkillStore>,
) -> Result<Response, RecapError> {
    let links = store
        .find_all()
        .await
        .map_err(|e| e.context("Error invoking findAll"))?;
    Ok(json_response(StatusCode::OK, links))
}

/// An empty join result is reported as not found, same as a missing row.
pub async fn get_skills_by_user(
    State(store): State<UserSkillStore>,
    Path(raw_id): Path<String>,
) -> Result<Response, RecapError> {
    let user_id = parse_id(&raw_id).ok_or_else(|| RecapError::NotFound(raw_id.clone()))?;
    let skills = store
        .find_skills_by_user(user_id)
        .await
        .map_err(RecapError::into_lookup)?;
    if skills.is_empty() {
        return Err(RecapError::NotFound(user_id.to_string()));
    }
    Ok(json_response(StatusCode::OK, skills))
}

/// An empty join result is reported as not found, same as a missing row.
pub async fn get_users_by_skill(
    State(store): State<UserSkillStore>,
    Path(raw_id): Path<String>,
) -> Result<Response, RecapError> {
    let skill_id = parse_id(&raw_id).ok_or_else(|| RecapError::NotFound(raw_id.clone()))?;
    let users = store
        .find_users_by_skill(skill_id)
        .await
        .map_err(RecapError::into_lookup)?;
    if users.is_empty() {
        return Err(RecapError::NotFound(skill_id.to_string()));
    }
    Ok(json_response(StatusCode::OK, users))
}

pub async fn insert_user_skill(
    State(store): State<UserSkillStore>,
    LenientJson(link): LenientJson<UserSkill>,
) -> Result<Response, RecapError> {
    store
        .insert(&link)
        .await
        .map_err(|e| e.context("Error while inserting new userSkill"))?;
    info!(user_id = link.user_id, skill_id = link.skill_id, "user skill linked");
    Ok(ok_result())
}

pub async fn delete_user_skill(
    State(store): State<UserSkillStore>,
    Path((raw_user_id, raw_skill_id)): Path<(String, String)>,
) -> Result<Response, RecapError> {
    let (Some(user_id), Some(skill_id)) = (parse_id(&raw_user_id), parse_id(&raw_skill_id)) else {
        return Ok(ok_result());
    };
    store
        .delete(user_id, skill_id)
        .await
        .map_err(|e| e.context("Error while deleting userSkill"))?;
    Ok(ok_result())
}
