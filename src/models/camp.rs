use crate::schema::camps;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use rocket::serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CampStatus {
    Active,
    Full,
    Closed,
}

impl CampStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampStatus::Active => "active",
            CampStatus::Full => "full",
            CampStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for CampStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = camps)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Camp {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub capacity: i32,
    /// Display field maintained through admin updates only; nothing in this
    /// service increments it when people arrive or leave.
    pub current_occupancy: i32,
    pub volunteers_needed: i32,
    /// Same caveat as `current_occupancy`.
    pub current_volunteers: i32,
    pub status: String,
    pub description: Option<String>,
    pub facilities: Option<String>,
    pub contact_person: Option<String>,
    pub contact_phone: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = camps)]
pub struct NewCamp {
    pub name: String,
    pub location: String,
    pub capacity: i32,
    pub current_occupancy: i32,
    pub volunteers_needed: i32,
    pub current_volunteers: i32,
    pub status: String,
    pub description: Option<String>,
    pub facilities: Option<String>,
    pub contact_person: Option<String>,
    pub contact_phone: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Deserialize, Debug)]
pub struct CreateCampRequest {
    pub name: String,
    pub location: String,
    pub capacity: i32,
    #[serde(default)]
    pub current_occupancy: i32,
    #[serde(default)]
    pub volunteers_needed: i32,
    #[serde(default)]
    pub current_volunteers: i32,
    pub status: Option<CampStatus>,
    pub description: Option<String>,
    pub facilities: Option<String>,
    pub contact_person: Option<String>,
    pub contact_phone: Option<String>,
}

impl From<CreateCampRequest> for NewCamp {
    fn from(req: CreateCampRequest) -> Self {
        Self {
            name: req.name,
            location: req.location,
            capacity: req.capacity,
            current_occupancy: req.current_occupancy,
            volunteers_needed: req.volunteers_needed,
            current_volunteers: req.current_volunteers,
            status: req.status.unwrap_or(CampStatus::Active).to_string(),
            description: req.description,
            facilities: req.facilities,
            contact_person: req.contact_person,
            contact_phone: req.contact_phone,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

/// Partial camp update; `None` fields are left untouched. Concurrent updates
/// to the same camp are last-write-wins, there is no version column.
#[derive(AsChangeset, Debug)]
#[diesel(table_name = camps)]
pub struct UpdateCamp {
    pub name: Option<String>,
    pub location: Option<String>,
    pub capacity: Option<i32>,
    pub current_occupancy: Option<i32>,
    pub volunteers_needed: Option<i32>,
    pub current_volunteers: Option<i32>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub facilities: Option<String>,
    pub contact_person: Option<String>,
    pub contact_phone: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct UpdateCampRequest {
    pub name: Option<String>,
    pub location: Option<String>,
    pub capacity: Option<i32>,
    pub current_occupancy: Option<i32>,
    pub volunteers_needed: Option<i32>,
    pub current_volunteers: Option<i32>,
    pub status: Option<CampStatus>,
    pub description: Option<String>,
    pub facilities: Option<String>,
    pub contact_person: Option<String>,
    pub contact_phone: Option<String>,
}

impl UpdateCampRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.location.is_none()
            && self.capacity.is_none()
            && self.current_occupancy.is_none()
            && self.volunteers_needed.is_none()
            && self.current_volunteers.is_none()
            && self.status.is_none()
            && self.description.is_none()
            && self.facilities.is_none()
            && self.contact_person.is_none()
            && self.contact_phone.is_none()
    }
}

impl From<UpdateCampRequest> for UpdateCamp {
    fn from(req: UpdateCampRequest) -> Self {
        Self {
            name: req.name,
            location: req.location,
            capacity: req.capacity,
            current_occupancy: req.current_occupancy,
            volunteers_needed: req.volunteers_needed,
            current_volunteers: req.current_volunteers,
            status: req.status.map(|s| s.to_string()),
            description: req.description,
            facilities: req.facilities,
            contact_person: req.contact_person,
            contact_phone: req.contact_phone,
        }
    }
}
