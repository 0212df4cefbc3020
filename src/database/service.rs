use super::admins::AdminOperations;
use super::camps::CampOperations;
use super::connection::{DbConnection, DbPool, create_pool, get_connection_with_retry};
use super::item_requests::ItemRequestOperations;
use super::profiles::ProfileOperations;
use super::sessions::SessionOperations;
use super::users::UserOperations;
use crate::models::admin::{Admin, NewAdmin};
use crate::models::camp::{Camp, NewCamp, UpdateCamp};
use crate::models::item_request::{
    ItemRequest, ItemRequestWithCamp, NewItemRequest, UpdateItemRequest,
};
use crate::models::profile::{Profile, UpdateProfileRequest, UserType};
use crate::models::session::{ActorKind, Session};
use crate::models::user::{NewUser, User};

/// Unified interface over the per-entity operation structs. All methods
/// return `Result` — failures are values, nothing panics past this boundary.
#[derive(Debug)]
pub struct DatabaseService {
    pub pool: DbPool,
}

impl DatabaseService {
    pub fn new(database_url: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let pool = create_pool(database_url)?;
        Ok(Self { pool })
    }

    pub fn get_connection(&self) -> Result<DbConnection, diesel::r2d2::Error> {
        get_connection_with_retry(&self.pool)
    }

    // Camp operations
    pub fn list_camps(&self) -> Result<Vec<Camp>, diesel::result::Error> {
        CampOperations::new(&self.pool).list()
    }

    pub fn get_camp(&self, id: i32) -> Result<Option<Camp>, diesel::result::Error> {
        CampOperations::new(&self.pool).get(id)
    }

    pub fn create_camp(&self, new_camp: NewCamp) -> Result<Camp, diesel::result::Error> {
        CampOperations::new(&self.pool).create(new_camp)
    }

    pub fn update_camp(
        &self,
        id: i32,
        changes: UpdateCamp,
    ) -> Result<Camp, diesel::result::Error> {
        CampOperations::new(&self.pool).update(id, changes)
    }

    pub fn list_camps_needing_volunteers(&self) -> Result<Vec<Camp>, diesel::result::Error> {
        CampOperations::new(&self.pool).list_needing_volunteers()
    }

    pub fn list_camps_with_availability(&self) -> Result<Vec<Camp>, diesel::result::Error> {
        CampOperations::new(&self.pool).list_with_availability()
    }

    // Item request operations
    pub fn list_item_requests(&self) -> Result<Vec<ItemRequestWithCamp>, diesel::result::Error> {
        ItemRequestOperations::new(&self.pool).list()
    }

    pub fn list_item_requests_by_camp(
        &self,
        camp_id: i32,
    ) -> Result<Vec<ItemRequest>, diesel::result::Error> {
        ItemRequestOperations::new(&self.pool).list_by_camp(camp_id)
    }

    pub fn create_item_request(
        &self,
        new_request: NewItemRequest,
    ) -> Result<ItemRequest, diesel::result::Error> {
        ItemRequestOperations::new(&self.pool).create(new_request)
    }

    pub fn update_item_request(
        &self,
        id: i32,
        changes: UpdateItemRequest,
    ) -> Result<ItemRequest, diesel::result::Error> {
        ItemRequestOperations::new(&self.pool).update(id, changes)
    }

    // User operations
    pub fn find_user_by_email(&self, email: &str) -> Result<Option<User>, diesel::result::Error> {
        UserOperations::new(&self.pool).find_by_email(email)
    }

    pub fn find_user_by_id(&self, id: i32) -> Result<Option<User>, diesel::result::Error> {
        UserOperations::new(&self.pool).find_by_id(id)
    }

    pub fn create_user_with_profile(
        &self,
        new_user: NewUser,
        user_type: UserType,
    ) -> Result<User, diesel::result::Error> {
        UserOperations::new(&self.pool).create_with_profile(new_user, user_type)
    }

    // Admin operations
    pub fn find_admin_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Admin>, diesel::result::Error> {
        AdminOperations::new(&self.pool).find_by_email(email)
    }

    pub fn find_admin_by_id(&self, id: i32) -> Result<Option<Admin>, diesel::result::Error> {
        AdminOperations::new(&self.pool).find_by_id(id)
    }

    pub fn create_admin(&self, new_admin: NewAdmin) -> Result<Admin, diesel::result::Error> {
        AdminOperations::new(&self.pool).create(new_admin)
    }

    pub fn count_admins(&self) -> Result<i64, diesel::result::Error> {
        AdminOperations::new(&self.pool).count()
    }

    // Profile operations
    pub fn get_profile(
        &self,
        user_id: i32,
        user_type: UserType,
    ) -> Result<Option<Profile>, diesel::result::Error> {
        ProfileOperations::new(&self.pool).get(user_id, user_type)
    }

    pub fn update_profile(
        &self,
        user_id: i32,
        user_type: UserType,
        changes: &UpdateProfileRequest,
    ) -> Result<Profile, diesel::result::Error> {
        ProfileOperations::new(&self.pool).update(user_id, user_type, changes)
    }

    // Session operations
    pub fn create_session(
        &self,
        actor_kind: ActorKind,
        actor_id: i32,
    ) -> Result<Session, diesel::result::Error> {
        SessionOperations::new(&self.pool).create(actor_kind, actor_id)
    }

    pub fn find_active_session(
        &self,
        token: &str,
        actor_kind: ActorKind,
    ) -> Result<Option<Session>, diesel::result::Error> {
        SessionOperations::new(&self.pool).find_active(token, actor_kind)
    }

    pub fn revoke_session(&self, token: &str) -> Result<(), diesel::result::Error> {
        SessionOperations::new(&self.pool).revoke(token)
    }

    pub fn revoke_sessions_for_actor(
        &self,
        actor_kind: ActorKind,
        actor_id: i32,
    ) -> Result<(), diesel::result::Error> {
        SessionOperations::new(&self.pool).revoke_for_actor(actor_kind, actor_id)
    }
}
