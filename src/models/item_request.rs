use crate::models::camp::Camp;
use crate::schema::item_requests;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use rocket::serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RequestPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl RequestPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestPriority::Low => "low",
            RequestPriority::Medium => "medium",
            RequestPriority::High => "high",
            RequestPriority::Urgent => "urgent",
        }
    }
}

impl fmt::Display for RequestPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Fulfilled,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Fulfilled => "fulfilled",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = item_requests)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ItemRequest {
    pub id: i32,
    pub camp_id: i32,
    pub item_name: String,
    pub quantity_needed: i32,
    pub priority: String,
    pub status: String,
    pub description: Option<String>,
    pub requested_by: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Item request together with its owning camp, as listed on dashboards.
#[derive(Serialize, Debug, Clone)]
pub struct ItemRequestWithCamp {
    #[serde(flatten)]
    pub request: ItemRequest,
    pub camp: Camp,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = item_requests)]
pub struct NewItemRequest {
    pub camp_id: i32,
    pub item_name: String,
    pub quantity_needed: i32,
    pub priority: String,
    pub status: String,
    pub description: Option<String>,
    pub requested_by: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Deserialize, Debug)]
pub struct CreateItemRequestRequest {
    pub camp_id: i32,
    pub item_name: String,
    pub quantity_needed: i32,
    pub priority: RequestPriority,
    pub status: Option<RequestStatus>,
    pub description: Option<String>,
    pub requested_by: Option<String>,
}

impl From<CreateItemRequestRequest> for NewItemRequest {
    fn from(req: CreateItemRequestRequest) -> Self {
        Self {
            camp_id: req.camp_id,
            item_name: req.item_name,
            quantity_needed: req.quantity_needed,
            priority: req.priority.to_string(),
            status: req.status.unwrap_or(RequestStatus::Pending).to_string(),
            description: req.description,
            requested_by: req.requested_by,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

#[derive(AsChangeset, Debug)]
#[diesel(table_name = item_requests)]
pub struct UpdateItemRequest {
    pub item_name: Option<String>,
    pub quantity_needed: Option<i32>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub requested_by: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct UpdateItemRequestRequest {
    pub item_name: Option<String>,
    pub quantity_needed: Option<i32>,
    pub priority: Option<RequestPriority>,
    pub status: Option<RequestStatus>,
    pub description: Option<String>,
    pub requested_by: Option<String>,
}

impl UpdateItemRequestRequest {
    pub fn is_empty(&self) -> bool {
        self.item_name.is_none()
            && self.quantity_needed.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.description.is_none()
            && self.requested_by.is_none()
    }
}

impl From<UpdateItemRequestRequest> for UpdateItemRequest {
    fn from(req: UpdateItemRequestRequest) -> Self {
        Self {
            item_name: req.item_name,
            quantity_needed: req.quantity_needed,
            priority: req.priority.map(|p| p.to_string()),
            status: req.status.map(|s| s.to_string()),
            description: req.description,
            requested_by: req.requested_by,
        }
    }
}
