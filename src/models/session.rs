use crate::schema::sessions;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use rocket::serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which credential space a session belongs to. User and admin sessions are
/// never interchangeable.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActorKind {
    User,
    Admin,
}

impl ActorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorKind::User => "user",
            ActorKind::Admin => "admin",
        }
    }
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(ActorKind::User),
            "admin" => Ok(ActorKind::Admin),
            other => Err(format!("unknown actor kind '{other}'")),
        }
    }
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = sessions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Session {
    pub id: i32,
    pub token: String,
    pub actor_kind: String,
    pub actor_id: i32,
    pub created_at: NaiveDateTime,
    pub expires_at: Option<NaiveDateTime>,
    pub is_active: bool,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = sessions)]
pub struct NewSession {
    pub token: String,
    pub actor_kind: String,
    pub actor_id: i32,
    pub created_at: NaiveDateTime,
    pub expires_at: Option<NaiveDateTime>,
    pub is_active: bool,
}

impl NewSession {
    pub fn new(actor_kind: ActorKind, actor_id: i32) -> Self {
        let token = uuid::Uuid::new_v4().to_string();
        let now = chrono::Utc::now().naive_utc();
        let expires_at = now + chrono::Duration::days(30);

        Self {
            token,
            actor_kind: actor_kind.to_string(),
            actor_id,
            created_at: now,
            expires_at: Some(expires_at),
            is_active: true,
        }
    }
}

impl Session {
    pub fn is_expired(&self, now: NaiveDateTime) -> bool {
        matches!(self.expires_at, Some(expires_at) if now > expires_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sessions_are_active_and_expiring() {
        let session = NewSession::new(ActorKind::User, 7);
        assert!(session.is_active);
        assert_eq!(session.actor_kind, "user");
        assert!(session.expires_at.unwrap() > session.created_at);
        // Tokens are unique per sign-in.
        assert_ne!(session.token, NewSession::new(ActorKind::User, 7).token);
    }
}
