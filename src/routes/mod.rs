pub mod admin;
pub mod api;
pub mod auth;
pub mod camps;
pub mod item_requests;
pub mod profile;

use rocket::routes;

pub fn get_routes() -> Vec<rocket::Route> {
    routes![
        api::health_check,
        // Camp routes
        camps::list_camps,
        camps::list_camps_needing_volunteers,
        camps::list_camps_with_availability,
        camps::get_camp,
        camps::create_camp,
        camps::update_camp,
        // Item request routes
        item_requests::list_item_requests,
        item_requests::list_item_requests_by_camp,
        item_requests::create_item_request,
        item_requests::update_item_request,
        // User auth routes
        auth::register,
        auth::login,
        auth::logout,
        auth::me,
        // Admin auth routes
        admin::admin_login,
        admin::admin_logout,
        admin::admin_me,
        // Profile routes
        profile::get_profile,
        profile::update_profile,
    ]
}
