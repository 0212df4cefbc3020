use super::connection::{DbPool, get_connection_with_retry, pool_error};
use crate::models::profile::*;
use crate::schema::{refugee_profiles, volunteer_profiles};
use diesel::prelude::*;

/// Profile database operations. Every method dispatches on the [`UserType`]
/// tag to one of the two concrete tables; no string-keyed table selection.
pub struct ProfileOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> ProfileOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    pub fn get(
        &self,
        user_id: i32,
        user_type: UserType,
    ) -> Result<Option<Profile>, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(pool_error)?;

        match user_type {
            UserType::Volunteer => Ok(volunteer_profiles::table
                .filter(volunteer_profiles::user_id.eq(user_id))
                .first::<VolunteerProfile>(&mut conn)
                .optional()?
                .map(Profile::Volunteer)),
            UserType::Refugee => Ok(refugee_profiles::table
                .filter(refugee_profiles::user_id.eq(user_id))
                .first::<RefugeeProfile>(&mut conn)
                .optional()?
                .map(Profile::Refugee)),
        }
    }

    /// Partial update keyed by user id. Fields belonging to the other
    /// profile kind have already been dropped by the changeset split.
    pub fn update(
        &self,
        user_id: i32,
        user_type: UserType,
        changes: &UpdateProfileRequest,
    ) -> Result<Profile, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(pool_error)?;

        match user_type {
            UserType::Volunteer => diesel::update(
                volunteer_profiles::table.filter(volunteer_profiles::user_id.eq(user_id)),
            )
            .set(&changes.volunteer_changes())
            .returning(VolunteerProfile::as_returning())
            .get_result(&mut conn)
            .map(Profile::Volunteer),
            UserType::Refugee => diesel::update(
                refugee_profiles::table.filter(refugee_profiles::user_id.eq(user_id)),
            )
            .set(&changes.refugee_changes())
            .returning(RefugeeProfile::as_returning())
            .get_result(&mut conn)
            .map(Profile::Refugee),
        }
    }
}
