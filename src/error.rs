use rocket::response::{Responder, Response};
use rocket::{Request, http::Status};
use std::io::Cursor;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    InternalServerError(String),
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _: &'r Request<'_>) -> rocket::response::Result<'static> {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (Status::BadRequest, msg),
            ApiError::Unauthorized(msg) => (Status::Unauthorized, msg),
            ApiError::NotFound(msg) => (Status::NotFound, msg),
            ApiError::Conflict(msg) => (Status::Conflict, msg),
            ApiError::InternalServerError(msg) => (Status::InternalServerError, msg),
        };

        let body = serde_json::json!({ "ok": false, "error": message }).to_string();

        Response::build()
            .status(status)
            .header(rocket::http::ContentType::JSON)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}
