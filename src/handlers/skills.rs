use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::get,
};
use tracing::info;

use crate::db::{Skill, SkillStore};
use crate::error::RecapError;
use crate::handlers::parse_id;
use crate::middleware::LenientJson;
use crate::server::response::{alive, json_response};

pub fn router(store: SkillStore) -> Router {
    Router::new()
        .route("/skills/alive", get(alive))
        .route("/skills", get(get_skills).post(insert_skill))
        .route(
            "/skills/{id}",
            get(get_skill).put(update_skill).delete(delete_skill),
        )
        .with_state(store)
}

pub async fn get_skills(State(store): State<SkillStore>) -> Result<Response, RecapError> {
    let skills = store
        .find_all()
        .await
        .map_err(|e| e.context("Error invoking findAll"))?;
    Ok(json_response(StatusCode::OK, skills))
}

pub async fn get_skill(
    State(store): State<SkillStore>,
    Path(raw_id): Path<String>,
) -> Result<Response, RecapError> {
    let id = parse_id(&raw_id).ok_or_else(|| RecapError::NotFound(raw_id.clone()))?;
    let skill = store.find_by_id(id).await.map_err(RecapError::into_lookup)?;
    Ok(json_response(StatusCode::OK, skill))
}

pub async fn insert_skill(
    State(store): State<SkillStore>,
    LenientJson(skill): LenientJson<Skill>,
) -> Result<Response, RecapError> {
    let id = store
        .insert(&skill)
        .await
        .map_err(|e| e.context("Error while inserting new skill"))?;
    info!(id, name = %skill.name, "skill created");
    Ok(json_response(StatusCode::OK, id))
}

pub async fn update_skill(
    State(store): State<SkillStore>,
    Path(raw_id): Path<String>,
    LenientJson(skill): LenientJson<Skill>,
) -> Result<Response, RecapError> {
    let Some(id) = parse_id(&raw_id) else {
        return Ok(json_response(StatusCode::OK, 0u64));
    };
    let affected = store
        .update(id, &skill)
        .await
        .map_err(|e| e.context(format!("Error while updating skill id {id}")))?;
    Ok(json_response(StatusCode::OK, affected))
}

pub async fn delete_skill(
    State(store): State<SkillStore>,
    Path(raw_id): Path<String>,
) -> Result<Response, RecapError> {
    let Some(id) = parse_id(&raw_id) else {
        return Ok(json_response(StatusCode::OK, 0u64));
    };
    let affected = store
        .delete(id)
        .await
        .map_err(|e| e.context(format!("Error while deleting skill id {id}")))?;
    Ok(json_response(StatusCode::OK, affected))
}
