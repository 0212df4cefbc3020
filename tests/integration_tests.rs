use floodaid::{AppConfig, AppState, AuthService, DatabaseService};
use rocket::Config;
use rocket::http::{ContentType, Header, Status};
use rocket::local::blocking::Client;
use rocket_cors::{AllowedOrigins, CorsOptions};
use serial_test::serial;
use std::env;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use tempfile::TempDir;

static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

struct TestRocket {
    rocket: rocket::Rocket<rocket::Build>,
    _temp_dir: TempDir, // Keep alive for cleanup
}

fn create_test_rocket() -> TestRocket {
    // Clear any environment variables that might interfere with tests
    unsafe {
        env::remove_var("FLOODAID_PORT");
        env::remove_var("FLOODAID_HOST");
        env::remove_var("FLOODAID_DATA_DIR");
        env::remove_var("FLOODAID_DATABASE_URL");
        env::remove_var("FLOODAID_ADMIN_EMAIL");
        env::remove_var("FLOODAID_ADMIN_PASSWORD");
    }

    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    unsafe {
        env::set_var(
            "FLOODAID_DATA_DIR",
            temp_dir.path().to_string_lossy().as_ref(),
        );
    }

    let config = AppConfig::from_env();

    // Unique database file per test
    let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    let database_url = format!("{}/test_{}.db", config.data_dir, test_id);
    let database =
        Arc::new(DatabaseService::new(&database_url).expect("Failed to initialize database"));

    AuthService::ensure_bootstrap_admin(&database, &config).expect("Failed to seed admin");

    let state = AppState { config, database };

    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::all())
        .to_cors()
        .expect("Failed to create CORS configuration");

    let rocket_config = Config {
        port: state.config.port,
        address: state.config.host.parse().expect("Invalid host address"),
        ..Config::default()
    };

    let rocket = rocket::custom(&rocket_config)
        .manage(state)
        .attach(cors)
        .attach(floodaid::RequestLogger)
        .mount("/", floodaid::routes::get_routes());

    TestRocket {
        rocket,
        _temp_dir: temp_dir,
    }
}

fn bearer(token: &str) -> Header<'static> {
    Header::new("Authorization", format!("Bearer {token}"))
}

fn register_user(client: &Client, email: &str, full_name: &str, user_type: &str) {
    let body = serde_json::json!({
        "email": email,
        "password": "secret123",
        "full_name": full_name,
        "user_type": user_type,
    });
    let response = client
        .post("/api/v1/auth/register")
        .header(ContentType::JSON)
        .body(body.to_string())
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
}

fn login_user(client: &Client, email: &str, password: &str) -> String {
    let body = serde_json::json!({ "email": email, "password": password });
    let response = client
        .post("/api/v1/auth/login")
        .header(ContentType::JSON)
        .body(body.to_string())
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let json: serde_json::Value =
        serde_json::from_str(&response.into_string().expect("Response body")).expect("Valid JSON");
    json["token"].as_str().expect("token").to_string()
}

fn login_admin(client: &Client) -> String {
    let body = serde_json::json!({ "email": "admin@floodaid.com", "password": "admin123" });
    let response = client
        .post("/api/v1/admin/login")
        .header(ContentType::JSON)
        .body(body.to_string())
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let json: serde_json::Value =
        serde_json::from_str(&response.into_string().expect("Response body")).expect("Valid JSON");
    json["token"].as_str().expect("token").to_string()
}

fn create_camp(client: &Client, admin_token: &str, camp: serde_json::Value) -> serde_json::Value {
    let response = client
        .post("/api/v1/camps")
        .header(ContentType::JSON)
        .header(bearer(admin_token))
        .body(camp.to_string())
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    serde_json::from_str(&response.into_string().expect("Response body")).expect("Valid JSON")
}

#[test]
#[serial]
fn test_health_check() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");
    let response = client.get("/api/v1/health").dispatch();

    assert_eq!(response.status(), Status::Ok);
    let body = response.into_string().expect("Response body");
    let json: serde_json::Value = serde_json::from_str(&body).expect("Valid JSON");
    assert_eq!(json["status"], "ok");
}

#[test]
#[serial]
fn test_register_creates_volunteer_profile() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");

    register_user(&client, "alice@example.com", "Alice Walker", "volunteer");
    let token = login_user(&client, "alice@example.com", "secret123");

    let response = client
        .get("/api/v1/profile")
        .header(bearer(&token))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    let json: serde_json::Value =
        serde_json::from_str(&response.into_string().expect("Response body")).expect("Valid JSON");
    assert_eq!(json["kind"], "volunteer");
    assert_eq!(json["active"], true);
}

#[test]
#[serial]
fn test_register_creates_refugee_profile_with_family_of_one() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");

    register_user(&client, "rana@example.com", "Rana Haddad", "refugee");
    let token = login_user(&client, "rana@example.com", "secret123");

    let response = client
        .get("/api/v1/profile")
        .header(bearer(&token))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    let json: serde_json::Value =
        serde_json::from_str(&response.into_string().expect("Response body")).expect("Valid JSON");
    assert_eq!(json["kind"], "refugee");
    assert_eq!(json["family_size"], 1);
}

#[test]
#[serial]
fn test_register_duplicate_email_rejected() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");

    register_user(&client, "bob@example.com", "Bob One", "volunteer");

    let body = serde_json::json!({
        "email": "bob@example.com",
        "password": "another",
        "full_name": "Bob Two",
        "user_type": "refugee",
    });
    let response = client
        .post("/api/v1/auth/register")
        .header(ContentType::JSON)
        .body(body.to_string())
        .dispatch();

    assert_eq!(response.status(), Status::Conflict);
    let body = response.into_string().expect("Response body");
    assert!(body.contains("User with this email already exists"));
}

#[test]
#[serial]
fn test_login_wrong_password() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");

    register_user(&client, "carol@example.com", "Carol Day", "volunteer");

    let body = serde_json::json!({ "email": "carol@example.com", "password": "wrong" });
    let response = client
        .post("/api/v1/auth/login")
        .header(ContentType::JSON)
        .body(body.to_string())
        .dispatch();

    assert_eq!(response.status(), Status::Unauthorized);
    let body = response.into_string().expect("Response body");
    assert!(body.contains("Invalid email or password"));
}

#[test]
#[serial]
fn test_login_unknown_email_same_message() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");

    let body = serde_json::json!({ "email": "nobody@example.com", "password": "whatever" });
    let response = client
        .post("/api/v1/auth/login")
        .header(ContentType::JSON)
        .body(body.to_string())
        .dispatch();

    assert_eq!(response.status(), Status::Unauthorized);
    let body = response.into_string().expect("Response body");
    assert!(body.contains("Invalid email or password"));
}

#[test]
#[serial]
fn test_me_then_logout_then_me_fails() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");

    register_user(&client, "dave@example.com", "Dave Lin", "volunteer");
    let token = login_user(&client, "dave@example.com", "secret123");

    let response = client
        .get("/api/v1/auth/me")
        .header(bearer(&token))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let json: serde_json::Value =
        serde_json::from_str(&response.into_string().expect("Response body")).expect("Valid JSON");
    assert_eq!(json["email"], "dave@example.com");
    // Password hashes never leave the service.
    assert!(json.get("password_hash").is_none());

    let response = client
        .post("/api/v1/auth/logout")
        .header(bearer(&token))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    let response = client
        .get("/api/v1/auth/me")
        .header(bearer(&token))
        .dispatch();
    assert_eq!(response.status(), Status::Unauthorized);
}

#[test]
#[serial]
fn test_logout_twice_still_succeeds() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");

    register_user(&client, "erin@example.com", "Erin Moss", "volunteer");
    let token = login_user(&client, "erin@example.com", "secret123");

    for _ in 0..2 {
        let response = client
            .post("/api/v1/auth/logout")
            .header(bearer(&token))
            .dispatch();
        assert_eq!(response.status(), Status::Ok);
    }
}

#[test]
#[serial]
fn test_admin_bootstrap_login_and_separate_session_space() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");

    let admin_token = login_admin(&client);

    let response = client
        .get("/api/v1/admin/me")
        .header(bearer(&admin_token))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let json: serde_json::Value =
        serde_json::from_str(&response.into_string().expect("Response body")).expect("Valid JSON");
    assert_eq!(json["email"], "admin@floodaid.com");

    // An admin token is not a user token.
    let response = client
        .get("/api/v1/auth/me")
        .header(bearer(&admin_token))
        .dispatch();
    assert_eq!(response.status(), Status::Unauthorized);
}

#[test]
#[serial]
fn test_admin_login_wrong_password() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");

    let body = serde_json::json!({ "email": "admin@floodaid.com", "password": "nope" });
    let response = client
        .post("/api/v1/admin/login")
        .header(ContentType::JSON)
        .body(body.to_string())
        .dispatch();

    assert_eq!(response.status(), Status::Unauthorized);
    let body = response.into_string().expect("Response body");
    assert!(body.contains("Invalid admin credentials"));
}

#[test]
#[serial]
fn test_create_camp_then_get_returns_equal_record() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");
    let admin_token = login_admin(&client);

    let payload = serde_json::json!({
        "name": "Riverside Shelter",
        "location": "North District",
        "capacity": 120,
        "current_occupancy": 45,
        "volunteers_needed": 12,
        "current_volunteers": 3,
        "description": "School building converted to shelter",
        "contact_person": "Maria Santos",
        "contact_phone": "+1-555-0101",
    });
    let created = create_camp(&client, &admin_token, payload);
    let id = created["id"].as_i64().expect("camp id");
    assert_eq!(created["status"], "active");

    let response = client.get(format!("/api/v1/camps/{id}")).dispatch();
    assert_eq!(response.status(), Status::Ok);
    let fetched: serde_json::Value =
        serde_json::from_str(&response.into_string().expect("Response body")).expect("Valid JSON");

    assert_eq!(fetched, created);
    assert_eq!(fetched["name"], "Riverside Shelter");
    assert_eq!(fetched["capacity"], 120);
}

#[test]
#[serial]
fn test_get_unknown_camp_is_404() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");

    let response = client.get("/api/v1/camps/9999").dispatch();
    assert_eq!(response.status(), Status::NotFound);
}

#[test]
#[serial]
fn test_camp_creation_requires_admin() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");

    register_user(&client, "frank@example.com", "Frank Ito", "volunteer");
    let user_token = login_user(&client, "frank@example.com", "secret123");

    let payload = serde_json::json!({
        "name": "Rogue Camp",
        "location": "Nowhere",
        "capacity": 10,
    });

    let response = client
        .post("/api/v1/camps")
        .header(ContentType::JSON)
        .header(bearer(&user_token))
        .body(payload.to_string())
        .dispatch();
    assert_eq!(response.status(), Status::Unauthorized);

    let response = client
        .post("/api/v1/camps")
        .header(ContentType::JSON)
        .body(payload.to_string())
        .dispatch();
    assert_eq!(response.status(), Status::Unauthorized);
}

#[test]
#[serial]
fn test_camp_filters() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");
    let admin_token = login_admin(&client);

    // Active, understaffed, no room left.
    create_camp(
        &client,
        &admin_token,
        serde_json::json!({
            "name": "Alpha", "location": "East", "capacity": 100,
            "current_occupancy": 100, "volunteers_needed": 10, "current_volunteers": 2,
        }),
    );
    // Active, fully staffed, room available.
    create_camp(
        &client,
        &admin_token,
        serde_json::json!({
            "name": "Bravo", "location": "West", "capacity": 50,
            "current_occupancy": 10, "volunteers_needed": 5, "current_volunteers": 5,
        }),
    );
    // Closed camp never shows up in either filter.
    create_camp(
        &client,
        &admin_token,
        serde_json::json!({
            "name": "Charlie", "location": "South", "capacity": 100,
            "current_occupancy": 0, "volunteers_needed": 10, "current_volunteers": 0,
            "status": "closed",
        }),
    );

    let response = client.get("/api/v1/camps/needing-volunteers").dispatch();
    assert_eq!(response.status(), Status::Ok);
    let json: serde_json::Value =
        serde_json::from_str(&response.into_string().expect("Response body")).expect("Valid JSON");
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Alpha"]);

    let response = client.get("/api/v1/camps/availability").dispatch();
    assert_eq!(response.status(), Status::Ok);
    let json: serde_json::Value =
        serde_json::from_str(&response.into_string().expect("Response body")).expect("Valid JSON");
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Bravo"]);

    // Full listing is ordered by name.
    let response = client.get("/api/v1/camps").dispatch();
    assert_eq!(response.status(), Status::Ok);
    let json: serde_json::Value =
        serde_json::from_str(&response.into_string().expect("Response body")).expect("Valid JSON");
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Alpha", "Bravo", "Charlie"]);
}

#[test]
#[serial]
fn test_camp_partial_update_leaves_other_fields() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");
    let admin_token = login_admin(&client);

    let created = create_camp(
        &client,
        &admin_token,
        serde_json::json!({
            "name": "Delta", "location": "Harbor", "capacity": 80,
            "current_occupancy": 20, "volunteers_needed": 8, "current_volunteers": 1,
        }),
    );
    let id = created["id"].as_i64().expect("camp id");

    let response = client
        .put(format!("/api/v1/camps/{id}"))
        .header(ContentType::JSON)
        .header(bearer(&admin_token))
        .body(serde_json::json!({ "status": "full" }).to_string())
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    let updated: serde_json::Value =
        serde_json::from_str(&response.into_string().expect("Response body")).expect("Valid JSON");
    assert_eq!(updated["status"], "full");
    assert_eq!(updated["name"], "Delta");
    assert_eq!(updated["capacity"], 80);
    assert_eq!(updated["current_occupancy"], 20);
}

#[test]
#[serial]
fn test_camp_update_with_empty_body_rejected() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");
    let admin_token = login_admin(&client);

    let created = create_camp(
        &client,
        &admin_token,
        serde_json::json!({ "name": "Echo", "location": "Hills", "capacity": 30 }),
    );
    let id = created["id"].as_i64().expect("camp id");

    let response = client
        .put(format!("/api/v1/camps/{id}"))
        .header(ContentType::JSON)
        .header(bearer(&admin_token))
        .body("{}")
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
}

#[test]
#[serial]
fn test_item_request_lifecycle() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");
    let admin_token = login_admin(&client);

    register_user(&client, "grace@example.com", "Grace Okafor", "volunteer");
    let user_token = login_user(&client, "grace@example.com", "secret123");

    let camp = create_camp(
        &client,
        &admin_token,
        serde_json::json!({ "name": "Foxtrot", "location": "Plains", "capacity": 60 }),
    );
    let camp_id = camp["id"].as_i64().expect("camp id");

    let response = client
        .post("/api/v1/item-requests")
        .header(ContentType::JSON)
        .header(bearer(&user_token))
        .body(
            serde_json::json!({
                "camp_id": camp_id,
                "item_name": "Blankets",
                "quantity_needed": 200,
                "priority": "urgent",
            })
            .to_string(),
        )
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let first: serde_json::Value =
        serde_json::from_str(&response.into_string().expect("Response body")).expect("Valid JSON");
    // Defaults: pending status, requester filled from the session.
    assert_eq!(first["status"], "pending");
    assert_eq!(first["requested_by"], "Grace Okafor");

    std::thread::sleep(std::time::Duration::from_millis(20));

    let response = client
        .post("/api/v1/item-requests")
        .header(ContentType::JSON)
        .header(bearer(&user_token))
        .body(
            serde_json::json!({
                "camp_id": camp_id,
                "item_name": "Water purifiers",
                "quantity_needed": 15,
                "priority": "high",
            })
            .to_string(),
        )
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    // Per-camp listing, newest first.
    let response = client
        .get(format!("/api/v1/camps/{camp_id}/item-requests"))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let json: serde_json::Value =
        serde_json::from_str(&response.into_string().expect("Response body")).expect("Valid JSON");
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["item_name"], "Water purifiers");
    assert_eq!(items[1]["item_name"], "Blankets");

    // Global listing carries the owning camp.
    let response = client.get("/api/v1/item-requests").dispatch();
    assert_eq!(response.status(), Status::Ok);
    let json: serde_json::Value =
        serde_json::from_str(&response.into_string().expect("Response body")).expect("Valid JSON");
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["camp"]["name"], "Foxtrot");

    // Admin approves the first request.
    let request_id = first["id"].as_i64().expect("request id");
    let response = client
        .put(format!("/api/v1/item-requests/{request_id}"))
        .header(ContentType::JSON)
        .header(bearer(&admin_token))
        .body(serde_json::json!({ "status": "approved" }).to_string())
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let updated: serde_json::Value =
        serde_json::from_str(&response.into_string().expect("Response body")).expect("Valid JSON");
    assert_eq!(updated["status"], "approved");
    assert_eq!(updated["item_name"], "Blankets");
}

#[test]
#[serial]
fn test_item_request_validation() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");
    let admin_token = login_admin(&client);

    register_user(&client, "hana@example.com", "Hana Said", "refugee");
    let user_token = login_user(&client, "hana@example.com", "secret123");

    let camp = create_camp(
        &client,
        &admin_token,
        serde_json::json!({ "name": "Golf", "location": "Coast", "capacity": 40 }),
    );
    let camp_id = camp["id"].as_i64().expect("camp id");

    // Zero quantity is rejected.
    let response = client
        .post("/api/v1/item-requests")
        .header(ContentType::JSON)
        .header(bearer(&user_token))
        .body(
            serde_json::json!({
                "camp_id": camp_id,
                "item_name": "Tents",
                "quantity_needed": 0,
                "priority": "low",
            })
            .to_string(),
        )
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);

    // Unknown camp is rejected.
    let response = client
        .post("/api/v1/item-requests")
        .header(ContentType::JSON)
        .header(bearer(&user_token))
        .body(
            serde_json::json!({
                "camp_id": 424242,
                "item_name": "Tents",
                "quantity_needed": 5,
                "priority": "low",
            })
            .to_string(),
        )
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
}

#[test]
#[serial]
fn test_profile_update_routed_by_user_type() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");

    register_user(&client, "ivan@example.com", "Ivan Petrov", "refugee");
    let token = login_user(&client, "ivan@example.com", "secret123");

    let response = client
        .put("/api/v1/profile")
        .header(ContentType::JSON)
        .header(bearer(&token))
        .body(
            serde_json::json!({
                "family_size": 5,
                "situation": "Displaced by the river flood",
            })
            .to_string(),
        )
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let json: serde_json::Value =
        serde_json::from_str(&response.into_string().expect("Response body")).expect("Valid JSON");
    assert_eq!(json["kind"], "refugee");
    assert_eq!(json["family_size"], 5);

    // Volunteer-only fields are a no-op for a refugee profile.
    let response = client
        .put("/api/v1/profile")
        .header(ContentType::JSON)
        .header(bearer(&token))
        .body(serde_json::json!({ "skills": "first aid" }).to_string())
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
}
