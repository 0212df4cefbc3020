use super::connection::{DbPool, get_connection_with_retry, pool_error};
use crate::models::session::{ActorKind, NewSession, Session};
use crate::schema::sessions;
use diesel::prelude::*;

/// Session token database operations
pub struct SessionOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> SessionOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Creates a fresh session row for a sign-in. Existing sessions for the
    /// same actor are left alone; each device holds its own token.
    pub fn create(
        &self,
        actor_kind: ActorKind,
        actor_id: i32,
    ) -> Result<Session, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(pool_error)?;

        diesel::insert_into(sessions::table)
            .values(&NewSession::new(actor_kind, actor_id))
            .returning(Session::as_returning())
            .get_result(&mut conn)
    }

    /// Finds an active session by token within one credential space.
    pub fn find_active(
        &self,
        token: &str,
        actor_kind: ActorKind,
    ) -> Result<Option<Session>, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(pool_error)?;

        sessions::table
            .filter(sessions::token.eq(token))
            .filter(sessions::actor_kind.eq(actor_kind.as_str()))
            .filter(sessions::is_active.eq(true))
            .first::<Session>(&mut conn)
            .optional()
    }

    /// Deactivates a token. Idempotent; unknown tokens are a no-op.
    pub fn revoke(&self, token: &str) -> Result<(), diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(pool_error)?;

        diesel::update(sessions::table.filter(sessions::token.eq(token)))
            .set(sessions::is_active.eq(false))
            .execute(&mut conn)?;

        Ok(())
    }

    /// Deactivates every session an actor holds. Used when a session
    /// resolves to an actor record that no longer exists.
    pub fn revoke_for_actor(
        &self,
        actor_kind: ActorKind,
        actor_id: i32,
    ) -> Result<(), diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(pool_error)?;

        diesel::update(
            sessions::table
                .filter(sessions::actor_kind.eq(actor_kind.as_str()))
                .filter(sessions::actor_id.eq(actor_id)),
        )
        .set(sessions::is_active.eq(false))
        .execute(&mut conn)?;

        Ok(())
    }
}
