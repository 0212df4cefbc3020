use crate::schema::{refugee_profiles, volunteer_profiles};
use diesel::prelude::*;
use rocket::serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which of the two profile shapes an account carries. Stored as text in the
/// `users` table, dispatched on as a tag everywhere else.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Volunteer,
    Refugee,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Volunteer => "volunteer",
            UserType::Refugee => "refugee",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "volunteer" => Ok(UserType::Volunteer),
            "refugee" => Ok(UserType::Refugee),
            other => Err(format!("unknown user type '{other}'")),
        }
    }
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = volunteer_profiles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct VolunteerProfile {
    pub id: i32,
    pub user_id: i32,
    pub skills: Option<String>,
    pub availability: Option<String>,
    pub active: bool,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = volunteer_profiles)]
pub struct NewVolunteerProfile {
    pub user_id: i32,
    pub active: bool,
}

impl NewVolunteerProfile {
    pub fn new(user_id: i32) -> Self {
        // Volunteers start out active at signup.
        Self {
            user_id,
            active: true,
        }
    }
}

#[derive(AsChangeset, Debug)]
#[diesel(table_name = volunteer_profiles)]
pub struct UpdateVolunteerProfile {
    pub skills: Option<String>,
    pub availability: Option<String>,
    pub active: Option<bool>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = refugee_profiles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RefugeeProfile {
    pub id: i32,
    pub user_id: i32,
    pub family_size: i32,
    pub situation: Option<String>,
    pub needs: Option<String>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = refugee_profiles)]
pub struct NewRefugeeProfile {
    pub user_id: i32,
    pub family_size: i32,
}

impl NewRefugeeProfile {
    pub fn new(user_id: i32) -> Self {
        // A fresh refugee account counts itself until told otherwise.
        Self {
            user_id,
            family_size: 1,
        }
    }
}

#[derive(AsChangeset, Debug)]
#[diesel(table_name = refugee_profiles)]
pub struct UpdateRefugeeProfile {
    pub family_size: Option<i32>,
    pub situation: Option<String>,
    pub needs: Option<String>,
}

/// One-of-two profile shapes, tagged so API consumers can tell them apart.
#[derive(Serialize, Debug, Clone)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Profile {
    Volunteer(VolunteerProfile),
    Refugee(RefugeeProfile),
}

/// Partial profile update as sent by clients. Fields that do not belong to
/// the caller's profile kind are ignored by the data-access layer.
#[derive(Deserialize, Debug, Default)]
pub struct UpdateProfileRequest {
    pub skills: Option<String>,
    pub availability: Option<String>,
    pub active: Option<bool>,
    pub family_size: Option<i32>,
    pub situation: Option<String>,
    pub needs: Option<String>,
}

impl UpdateProfileRequest {
    pub fn volunteer_changes(&self) -> UpdateVolunteerProfile {
        UpdateVolunteerProfile {
            skills: self.skills.clone(),
            availability: self.availability.clone(),
            active: self.active,
        }
    }

    pub fn refugee_changes(&self) -> UpdateRefugeeProfile {
        UpdateRefugeeProfile {
            family_size: self.family_size,
            situation: self.situation.clone(),
            needs: self.needs.clone(),
        }
    }

    pub fn is_empty_for(&self, user_type: UserType) -> bool {
        match user_type {
            UserType::Volunteer => {
                self.skills.is_none() && self.availability.is_none() && self.active.is_none()
            }
            UserType::Refugee => {
                self.family_size.is_none() && self.situation.is_none() && self.needs.is_none()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_type_round_trips_through_text() {
        assert_eq!("volunteer".parse::<UserType>(), Ok(UserType::Volunteer));
        assert_eq!("refugee".parse::<UserType>(), Ok(UserType::Refugee));
        assert!("staff".parse::<UserType>().is_err());
        assert_eq!(UserType::Volunteer.to_string(), "volunteer");
    }

    #[test]
    fn empty_update_is_detected_per_kind() {
        let req = UpdateProfileRequest {
            family_size: Some(4),
            ..Default::default()
        };
        // A family-size change is a no-op for a volunteer profile.
        assert!(req.is_empty_for(UserType::Volunteer));
        assert!(!req.is_empty_for(UserType::Refugee));
    }
}
