use super::connection::{DbPool, get_connection_with_retry, pool_error};
use crate::models::admin::{Admin, NewAdmin};
use crate::schema::admins;
use diesel::prelude::*;

/// Admin account database operations
pub struct AdminOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> AdminOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    pub fn find_by_email(&self, email: &str) -> Result<Option<Admin>, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(pool_error)?;

        admins::table
            .filter(admins::email.eq(email))
            .first::<Admin>(&mut conn)
            .optional()
    }

    pub fn find_by_id(&self, id: i32) -> Result<Option<Admin>, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(pool_error)?;

        admins::table.find(id).first::<Admin>(&mut conn).optional()
    }

    pub fn create(&self, new_admin: NewAdmin) -> Result<Admin, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(pool_error)?;

        diesel::insert_into(admins::table)
            .values(&new_admin)
            .returning(Admin::as_returning())
            .get_result(&mut conn)
    }

    pub fn count(&self) -> Result<i64, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(pool_error)?;

        admins::table.count().get_result(&mut conn)
    }
}
