use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String, // argon2 hash, not exposed in JSON
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_user_never_contains_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Ann".into(),
            email: "a@x.com".into(),
            password_hash: "$argon2id$v=19$secret".into(),
            created_at: OffsetDateTime::now_utc(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("a@x.com"));
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("argon2id"));
    }
}
