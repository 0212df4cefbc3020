use crate::models::profile::UserType;
use crate::schema::users;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use rocket::serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct User {
    pub id: i32,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
    pub user_type: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
    pub user_type: String,
    pub created_at: NaiveDateTime,
}

impl NewUser {
    pub fn new(
        email: String,
        password: &str,
        full_name: String,
        phone: Option<String>,
        address: Option<String>,
        emergency_contact: Option<String>,
        user_type: UserType,
    ) -> Result<Self, bcrypt::BcryptError> {
        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

        Ok(Self {
            email,
            password_hash,
            full_name,
            phone,
            address,
            emergency_contact,
            user_type: user_type.as_str().to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        })
    }
}

impl User {
    pub fn verify_password(&self, password: &str) -> Result<bool, bcrypt::BcryptError> {
        bcrypt::verify(password, &self.password_hash)
    }

    /// The profile kind this account was registered with. The column is
    /// constrained to the two known values at registration time.
    pub fn profile_kind(&self) -> Result<UserType, String> {
        self.user_type.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_hashes_password() {
        let user = NewUser::new(
            "alice@example.com".to_string(),
            "hunter2",
            "Alice Example".to_string(),
            None,
            None,
            None,
            UserType::Volunteer,
        )
        .expect("hashing should succeed");

        assert_ne!(user.password_hash, "hunter2");
        assert!(bcrypt::verify("hunter2", &user.password_hash).unwrap());
        assert_eq!(user.user_type, "volunteer");
    }
}
