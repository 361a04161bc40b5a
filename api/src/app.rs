//! Application factory
//!
//! Builds the Actix-web application around an already wired `AppState`.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use ed_core::repositories::SchoolDataRepository;
use ed_core::services::verification::{NotificationSenderTrait, VerificationStoreTrait};
use ed_shared::{ApiResponse, HealthResponse};

use crate::routes::reset::{confirm_reset, send_otp, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<S, V, R>(
    app_state: web::Data<AppState<S, V, R>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: NotificationSenderTrait + 'static,
    V: VerificationStoreTrait + 'static,
    R: SchoolDataRepository + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(|err, _req| {
            let response = HttpResponse::BadRequest()
                .json(ApiResponse::<()>::error("VALIDATION_ERROR", err.to_string()));
            actix_web::error::InternalError::from_response(err, response).into()
        }))
        .wrap(Logger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/reset")
                        .route("/send-otp", web::post().to(send_otp::<S, V, R>))
                        .route("/confirm", web::post().to(confirm_reset::<S, V, R>)),
                )
                .route("/", web::get().to(api_documentation)),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        "edudesk-api",
        env!("CARGO_PKG_VERSION"),
    ))
}

/// API documentation endpoint
async fn api_documentation() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "EduDesk API v1",
        "endpoints": {
            "health": "/health",
            "reset": {
                "send_otp": {
                    "path": "/api/v1/reset/send-otp",
                    "method": "POST",
                    "description": "Send the factory reset confirmation code via SMS",
                    "request_body": { "phone": "string (E.164, 8-16 chars)" },
                    "responses": {
                        "200": "Code sent",
                        "400": "Invalid phone number",
                        "503": "Code could not be delivered"
                    }
                },
                "confirm": {
                    "path": "/api/v1/reset/confirm",
                    "method": "POST",
                    "description": "Confirm the code and wipe all school data",
                    "request_body": { "code": "string (exactly 6 digits)" },
                    "responses": {
                        "200": "Reset performed",
                        "400": "Malformed or wrong code",
                        "404": "No code outstanding",
                        "410": "Code expired",
                        "503": "Verification store unavailable"
                    }
                }
            }
        }
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::error(
        "NOT_FOUND",
        "The requested resource was not found",
    ))
}
