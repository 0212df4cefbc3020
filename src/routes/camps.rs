use crate::error::ApiError;
use crate::models::{AuthenticatedAdmin, Camp, CreateCampRequest, UpdateCampRequest};
use crate::state::AppState;
use log::warn;
use rocket::serde::json::Json;
use rocket::{State, get, post, put};

// Collection reads degrade to an empty list on a store failure; dashboards
// render empty state instead of an error page.
#[get("/api/v1/camps")]
pub async fn list_camps(state: &State<AppState>) -> Json<Vec<Camp>> {
    match state.database.list_camps() {
        Ok(camps) => Json(camps),
        Err(e) => {
            warn!("Failed to list camps: {e}");
            Json(Vec::new())
        }
    }
}

#[get("/api/v1/camps/needing-volunteers")]
pub async fn list_camps_needing_volunteers(state: &State<AppState>) -> Json<Vec<Camp>> {
    match state.database.list_camps_needing_volunteers() {
        Ok(camps) => Json(camps),
        Err(e) => {
            warn!("Failed to list camps needing volunteers: {e}");
            Json(Vec::new())
        }
    }
}

#[get("/api/v1/camps/availability")]
pub async fn list_camps_with_availability(state: &State<AppState>) -> Json<Vec<Camp>> {
    match state.database.list_camps_with_availability() {
        Ok(camps) => Json(camps),
        Err(e) => {
            warn!("Failed to list camps with availability: {e}");
            Json(Vec::new())
        }
    }
}

#[get("/api/v1/camps/<id>")]
pub async fn get_camp(id: i32, state: &State<AppState>) -> Result<Json<Camp>, ApiError> {
    let camp = state
        .database
        .get_camp(id)
        .map_err(|e| ApiError::InternalServerError(format!("Failed to fetch camp: {e}")))?;

    camp.map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Camp {id} not found")))
}

#[post("/api/v1/camps", data = "<request>")]
pub async fn create_camp(
    request: Json<CreateCampRequest>,
    _admin: AuthenticatedAdmin,
    state: &State<AppState>,
) -> Result<Json<Camp>, ApiError> {
    let request = request.into_inner();

    if request.capacity <= 0 {
        return Err(ApiError::BadRequest(
            "Camp capacity must be positive".to_string(),
        ));
    }
    if request.volunteers_needed < 0 || request.current_volunteers < 0 || request.current_occupancy < 0
    {
        return Err(ApiError::BadRequest(
            "Camp counters cannot be negative".to_string(),
        ));
    }

    let camp = state
        .database
        .create_camp(request.into())
        .map_err(|e| ApiError::InternalServerError(format!("Failed to create camp: {e}")))?;

    Ok(Json(camp))
}

#[put("/api/v1/camps/<id>", data = "<request>")]
pub async fn update_camp(
    id: i32,
    request: Json<UpdateCampRequest>,
    _admin: AuthenticatedAdmin,
    state: &State<AppState>,
) -> Result<Json<Camp>, ApiError> {
    let request = request.into_inner();

    if request.is_empty() {
        return Err(ApiError::BadRequest("No fields to update".to_string()));
    }

    let camp = state
        .database
        .update_camp(id, request.into())
        .map_err(|e| match e {
            diesel::result::Error::NotFound => ApiError::NotFound(format!("Camp {id} not found")),
            e => ApiError::InternalServerError(format!("Failed to update camp: {e}")),
        })?;

    Ok(Json(camp))
}
