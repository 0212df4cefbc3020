use super::connection::{DbPool, get_connection_with_retry, pool_error};
use crate::models::camp::*;
use crate::schema::camps;
use diesel::prelude::*;

/// Camp-related database operations
pub struct CampOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> CampOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// All camps, ordered by name ascending.
    pub fn list(&self) -> Result<Vec<Camp>, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(pool_error)?;

        camps::table.order(camps::name.asc()).load::<Camp>(&mut conn)
    }

    pub fn get(&self, id: i32) -> Result<Option<Camp>, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(pool_error)?;

        camps::table.find(id).first::<Camp>(&mut conn).optional()
    }

    pub fn create(&self, new_camp: NewCamp) -> Result<Camp, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(pool_error)?;

        diesel::insert_into(camps::table)
            .values(&new_camp)
            .returning(Camp::as_returning())
            .get_result(&mut conn)
    }

    /// Partial update by id; `None` fields keep their stored value.
    pub fn update(&self, id: i32, changes: UpdateCamp) -> Result<Camp, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(pool_error)?;

        diesel::update(camps::table.find(id))
            .set(&changes)
            .returning(Camp::as_returning())
            .get_result(&mut conn)
    }

    /// Active camps still below their volunteer staffing target.
    pub fn list_needing_volunteers(&self) -> Result<Vec<Camp>, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(pool_error)?;

        camps::table
            .filter(camps::current_volunteers.lt(camps::volunteers_needed))
            .filter(camps::status.eq(CampStatus::Active.as_str()))
            .order(camps::name.asc())
            .load::<Camp>(&mut conn)
    }

    /// Active camps with room left for new arrivals.
    pub fn list_with_availability(&self) -> Result<Vec<Camp>, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(pool_error)?;

        camps::table
            .filter(camps::current_occupancy.lt(camps::capacity))
            .filter(camps::status.eq(CampStatus::Active.as_str()))
            .order(camps::name.asc())
            .load::<Camp>(&mut conn)
    }
}
