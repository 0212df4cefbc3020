use rocket::get;
use rocket::serde::json::Json;

// Health check endpoint
#[get("/api/v1/health")]
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok"
    }))
}
