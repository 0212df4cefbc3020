use crate::error::ApiError;
use crate::models::{
    AuthenticatedAdmin, AuthenticatedUser, CreateItemRequestRequest, ItemRequest,
    ItemRequestWithCamp, UpdateItemRequestRequest,
};
use crate::state::AppState;
use log::warn;
use rocket::serde::json::Json;
use rocket::{State, get, post, put};

#[get("/api/v1/item-requests")]
pub async fn list_item_requests(state: &State<AppState>) -> Json<Vec<ItemRequestWithCamp>> {
    match state.database.list_item_requests() {
        Ok(requests) => Json(requests),
        Err(e) => {
            warn!("Failed to list item requests: {e}");
            Json(Vec::new())
        }
    }
}

#[get("/api/v1/camps/<camp_id>/item-requests")]
pub async fn list_item_requests_by_camp(
    camp_id: i32,
    state: &State<AppState>,
) -> Json<Vec<ItemRequest>> {
    match state.database.list_item_requests_by_camp(camp_id) {
        Ok(requests) => Json(requests),
        Err(e) => {
            warn!("Failed to list item requests for camp {camp_id}: {e}");
            Json(Vec::new())
        }
    }
}

#[post("/api/v1/item-requests", data = "<request>")]
pub async fn create_item_request(
    request: Json<CreateItemRequestRequest>,
    user: AuthenticatedUser,
    state: &State<AppState>,
) -> Result<Json<ItemRequest>, ApiError> {
    let mut request = request.into_inner();

    if request.quantity_needed <= 0 {
        return Err(ApiError::BadRequest(
            "Requested quantity must be positive".to_string(),
        ));
    }

    if request.requested_by.is_none() {
        request.requested_by = Some(user.user.full_name.clone());
    }

    let item_request = state
        .database
        .create_item_request(request.into())
        .map_err(|e| match e {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                _,
            ) => ApiError::BadRequest("Unknown camp".to_string()),
            e => ApiError::InternalServerError(format!("Failed to create item request: {e}")),
        })?;

    Ok(Json(item_request))
}

#[put("/api/v1/item-requests/<id>", data = "<request>")]
pub async fn update_item_request(
    id: i32,
    request: Json<UpdateItemRequestRequest>,
    _admin: AuthenticatedAdmin,
    state: &State<AppState>,
) -> Result<Json<ItemRequest>, ApiError> {
    let request = request.into_inner();

    if request.is_empty() {
        return Err(ApiError::BadRequest("No fields to update".to_string()));
    }

    let item_request = state
        .database
        .update_item_request(id, request.into())
        .map_err(|e| match e {
            diesel::result::Error::NotFound => {
                ApiError::NotFound(format!("Item request {id} not found"))
            }
            e => ApiError::InternalServerError(format!("Failed to update item request: {e}")),
        })?;

    Ok(Json(item_request))
}
