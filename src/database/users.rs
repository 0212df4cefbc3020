use super::connection::{DbPool, get_connection_with_retry, pool_error};
use crate::models::profile::{NewRefugeeProfile, NewVolunteerProfile, UserType};
use crate::models::user::{NewUser, User};
use crate::schema::{refugee_profiles, users, volunteer_profiles};
use diesel::prelude::*;

/// User account database operations
pub struct UserOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> UserOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Case-sensitive exact match, mirroring the unique column.
    pub fn find_by_email(&self, email: &str) -> Result<Option<User>, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(pool_error)?;

        users::table
            .filter(users::email.eq(email))
            .first::<User>(&mut conn)
            .optional()
    }

    pub fn find_by_id(&self, id: i32) -> Result<Option<User>, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(pool_error)?;

        users::table.find(id).first::<User>(&mut conn).optional()
    }

    /// Inserts the account and its type-matching profile row atomically, so
    /// no account can exist without a profile.
    pub fn create_with_profile(
        &self,
        new_user: NewUser,
        user_type: UserType,
    ) -> Result<User, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(pool_error)?;

        conn.transaction(|conn| {
            let user = diesel::insert_into(users::table)
                .values(&new_user)
                .returning(User::as_returning())
                .get_result::<User>(conn)?;

            match user_type {
                UserType::Volunteer => {
                    diesel::insert_into(volunteer_profiles::table)
                        .values(&NewVolunteerProfile::new(user.id))
                        .execute(conn)?;
                }
                UserType::Refugee => {
                    diesel::insert_into(refugee_profiles::table)
                        .values(&NewRefugeeProfile::new(user.id))
                        .execute(conn)?;
                }
            }

            Ok(user)
        })
    }
}
