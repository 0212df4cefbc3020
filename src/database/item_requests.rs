use super::connection::{DbPool, get_connection_with_retry, pool_error};
use crate::models::camp::Camp;
use crate::models::item_request::*;
use crate::schema::{camps, item_requests};
use diesel::prelude::*;

/// Item-request database operations
pub struct ItemRequestOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> ItemRequestOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// All item requests joined with their owning camp, newest first.
    pub fn list(&self) -> Result<Vec<ItemRequestWithCamp>, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(pool_error)?;

        let rows = item_requests::table
            .inner_join(camps::table)
            .order(item_requests::created_at.desc())
            .load::<(ItemRequest, Camp)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(request, camp)| ItemRequestWithCamp { request, camp })
            .collect())
    }

    /// Requests for one camp, newest first.
    pub fn list_by_camp(&self, camp_id: i32) -> Result<Vec<ItemRequest>, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(pool_error)?;

        item_requests::table
            .filter(item_requests::camp_id.eq(camp_id))
            .order(item_requests::created_at.desc())
            .load::<ItemRequest>(&mut conn)
    }

    pub fn create(
        &self,
        new_request: NewItemRequest,
    ) -> Result<ItemRequest, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(pool_error)?;

        diesel::insert_into(item_requests::table)
            .values(&new_request)
            .returning(ItemRequest::as_returning())
            .get_result(&mut conn)
    }

    pub fn update(
        &self,
        id: i32,
        changes: UpdateItemRequest,
    ) -> Result<ItemRequest, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(pool_error)?;

        diesel::update(item_requests::table.find(id))
            .set(&changes)
            .returning(ItemRequest::as_returning())
            .get_result(&mut conn)
    }
}
