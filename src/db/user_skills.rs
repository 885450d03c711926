use crate::db::models::{Skill, UserSkill, UserSummary};
use crate::db::pool::SqlitePool;
use crate::db::schema::{SKILL_TABLE, USER_SKILL_TABLE, USER_TABLE};
use crate::error::RecapError;

#[derive(Clone)]
pub struct UserSkillStore {
    pool: SqlitePool,
}

impl UserSkillStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<UserSkill>, RecapError> {
        let sql = format!(
            "SELECT user_id, skill_id FROM {USER_SKILL_TABLE} ORDER BY user_id, skill_id"
        );
        sqlx::query_as::<_, UserSkill>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(RecapError::from)
    }

    /// Skills linked to `user_id`; empty when the user has none (or does not exist).
    pub async fn find_skills_by_user(&self, user_id: i64) -> Result<Vec<Skill>, RecapError> {
        let sql = format!(
            "SELECT s.id, s.name, s.version FROM {USER_SKILL_TABLE} us \
             JOIN {SKILL_TABLE} s ON us.skill_id = s.id \
             WHERE us.user_id = ? ORDER BY s.id"
        );
        sqlx::query_as::<_, Skill>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(RecapError::from)
    }

    /// Users linked to `skill_id`, without their passwords.
    pub async fn find_users_by_skill(
        &self,
        skill_id: i64,
    ) -> Result<Vec<UserSummary>, RecapError> {
        let sql = format!(
            "SELECT u.id, u.username FROM {USER_SKILL_TABLE} us \
             JOIN {USER_TABLE} u ON us.user_id = u.id \
             WHERE us.skill_id = ? ORDER BY u.id"
        );
        sqlx::query_as::<_, UserSummary>(&sql)
            .bind(skill_id)
            .fetch_all(&self.pool)
            .await
            .map_err(RecapError::from)
    }

    pub async fn insert(&self, link: &UserSkill) -> Result<(), RecapError> {
        let sql = format!("INSERT INTO {USER_SKILL_TABLE} (user_id, skill_id) VALUES (?, ?)");
        sqlx::query(&sql)
            .bind(link.user_id)
            .bind(link.skill_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Succeeds whether or not the pair existed.
    pub async fn delete(&self, user_id: i64, skill_id: i64) -> Result<(), RecapError> {
        let sql = format!("DELETE FROM {USER_SKILL_TABLE} WHERE user_id = ? AND skill_id = ?");
        sqlx::query(&sql)
            .bind(user_id)
            .bind(skill_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::User;
    use crate::db::pool::connect_in_memory;
    use crate::db::{SkillStore, UserStore};

    struct Fixture {
        users: UserStore,
        skills: SkillStore,
        links: UserSkillStore,
    }

    async fn fixture() -> Fixture {
        let pool = connect_in_memory().await.unwrap();
        Fixture {
            users: UserStore::new(pool.clone()),
            skills: SkillStore::new(pool.clone()),
            links: UserSkillStore::new(pool),
        }
    }

    async fn add_user(f: &Fixture, name: &str) -> i64 {
        f.users
            .insert(&User {
                id: 0,
                username: name.into(),
                password: "pw".into(),
            })
            .await
            .unwrap()
    }

    async fn add_skill(f: &Fixture, name: &str) -> i64 {
        f.skills
            .insert(&Skill {
                id: 0,
                name: name.into(),
                version: "1".into(),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn joins_follow_the_link_table() {
        let f = fixture().await;
        let alice = add_user(&f, "alice").await;
        let bob = add_user(&f, "bob").await;
        let go = add_skill(&f, "Go").await;
        let rust = add_skill(&f, "Rust").await;

        for (user_id, skill_id) in [(alice, go), (alice, rust), (bob, rust)] {
            f.links.insert(&UserSkill { user_id, skill_id }).await.unwrap();
        }

        let alice_skills: Vec<String> = f
            .links
            .find_skills_by_user(alice)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(alice_skills, vec!["Go", "Rust"]);

        let rust_users = f.links.find_users_by_skill(rust).await.unwrap();
        assert_eq!(
            rust_users,
            vec![
                UserSummary {
                    id: alice,
                    username: "alice".into()
                },
                UserSummary {
                    id: bob,
                    username: "bob".into()
                },
            ]
        );

        assert!(f.links.find_users_by_skill(9999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_pair_is_rejected() {
        let f = fixture().await;
        let link = UserSkill {
            user_id: 1,
            skill_id: 2,
        };
        f.links.insert(&link).await.unwrap();
        assert!(matches!(
            f.links.insert(&link).await,
            Err(RecapError::Database(_))
        ));
    }

    #[tokio::test]
    async fn delete_removes_only_the_pair() {
        let f = fixture().await;
        f.links
            .insert(&UserSkill {
                user_id: 1,
                skill_id: 2,
            })
            .await
            .unwrap();
        f.links
            .insert(&UserSkill {
                user_id: 1,
                skill_id: 3,
            })
            .await
            .unwrap();

        f.links.delete(1, 2).await.unwrap();
        f.links.delete(1, 2).await.unwrap();

        assert_eq!(
            f.links.find_all().await.unwrap(),
            vec![UserSkill {
                user_id: 1,
                skill_id: 3
            }]
        );
    }
}
