use crate::schema::admins;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use rocket::serde::{Deserialize, Serialize};

// Admins are a separate credential space from users on purpose: an email may
// exist in both tables with unrelated passwords.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = admins)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Admin {
    pub id: i32,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = admins)]
pub struct NewAdmin {
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub created_at: NaiveDateTime,
}

impl NewAdmin {
    pub fn new(
        email: String,
        password: &str,
        full_name: String,
    ) -> Result<Self, bcrypt::BcryptError> {
        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

        Ok(Self {
            email,
            password_hash,
            full_name,
            created_at: chrono::Utc::now().naive_utc(),
        })
    }
}

impl Admin {
    pub fn verify_password(&self, password: &str) -> Result<bool, bcrypt::BcryptError> {
        bcrypt::verify(password, &self.password_hash)
    }
}
