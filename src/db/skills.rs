use crate::db::models::Skill;
use crate::db::not_found_for;
use crate::db::pool::SqlitePool;
use crate::db::schema::SKILL_TABLE;
use crate::error::RecapError;

#[derive(Clone)]
pub struct SkillStore {
    pool: SqlitePool,
}

impl SkillStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Skill>, RecapError> {
        let sql = format!("SELECT id, name, version FROM {SKILL_TABLE} ORDER BY id");
        sqlx::query_as::<_, Skill>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(RecapError::from)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Skill, RecapError> {
        let sql = format!("SELECT id, name, version FROM {SKILL_TABLE} WHERE id = ?");
        sqlx::query_as::<_, Skill>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(not_found_for(id))
    }

    pub async fn insert(&self, skill: &Skill) -> Result<i64, RecapError> {
        let sql = format!("INSERT INTO {SKILL_TABLE} (name, version) VALUES (?, ?)");
        let result = sqlx::query(&sql)
            .bind(&skill.name)
            .bind(&skill.version)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn update(&self, id: i64, skill: &Skill) -> Result<u64, RecapError> {
        let sql = format!("UPDATE {SKILL_TABLE} SET name = ?, version = ? WHERE id = ?");
        let result = sqlx::query(&sql)
            .bind(&skill.name)
            .bind(&skill.version)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i64) -> Result<u64, RecapError> {
        let sql = format!("DELETE FROM {SKILL_TABLE} WHERE id = ?");
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::connect_in_memory;

    fn skill(name: &str, version: &str) -> Skill {
        Skill {
            id: 0,
            name: name.to_string(),
            version: version.to_string(),
        }
    }

    #[tokio::test]
    async fn round_trips_submitted_fields() {
        let store = SkillStore::new(connect_in_memory().await.unwrap());
        let id = store.insert(&skill("Go", "1.0")).await.unwrap();
        assert_eq!(
            store.find_by_id(id).await.unwrap(),
            Skill {
                id,
                name: "Go".into(),
                version: "1.0".into()
            }
        );
    }

    #[tokio::test]
    async fn find_all_orders_by_id() {
        let store = SkillStore::new(connect_in_memory().await.unwrap());
        assert!(store.find_all().await.unwrap().is_empty());

        let a = store.insert(&skill("Rust", "1.80")).await.unwrap();
        let b = store.insert(&skill("SQL", "")).await.unwrap();
        let ids: Vec<i64> = store.find_all().await.unwrap().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[tokio::test]
    async fn delete_twice_drops_count_to_zero() {
        let store = SkillStore::new(connect_in_memory().await.unwrap());
        let id = store.insert(&skill("Go", "1.0")).await.unwrap();
        assert_eq!(store.delete(id).await.unwrap(), 1);
        assert_eq!(store.delete(id).await.unwrap(), 0);
        assert!(matches!(
            store.find_by_id(id).await,
            Err(RecapError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn driver_failures_are_returned_untagged() {
        let pool = connect_in_memory().await.unwrap();
        let store = SkillStore::new(pool.clone());
        pool.close().await;

        assert!(matches!(store.find_all().await, Err(RecapError::Database(_))));
        assert!(matches!(store.find_by_id(1).await, Err(RecapError::Database(_))));
        assert!(matches!(store.delete(1).await, Err(RecapError::Database(_))));
    }
}
