use actix_web::{web, HttpResponse};
use validator::Validate;

use ed_core::repositories::SchoolDataRepository;
use ed_core::services::verification::{NotificationSenderTrait, VerificationStoreTrait};
use ed_core::VerificationFailure;
use ed_shared::phone::{mask_phone_number, normalize_phone_number};
use ed_shared::ApiResponse;

use super::AppState;
use crate::dto::reset::{SendOtpRequest, SendOtpResponse};
use crate::handlers::ApiError;

/// Handler for POST /api/v1/reset/send-otp
///
/// Sends a factory reset confirmation code to the administrator's phone.
///
/// # Request Body
///
/// ```json
/// { "phone": "+923001234567" }
/// ```
///
/// # Responses
///
/// * `200` - Code sent; `data.expires_in_minutes` gives the window
/// * `400` - Invalid phone number
/// * `503` - The code could not be delivered
pub async fn send_otp<S, V, R>(
    state: web::Data<AppState<S, V, R>>,
    request: web::Json<SendOtpRequest>,
) -> Result<HttpResponse, ApiError>
where
    S: NotificationSenderTrait + 'static,
    V: VerificationStoreTrait + 'static,
    R: SchoolDataRepository + 'static,
{
    request.validate()?;

    let phone = normalize_phone_number(&request.phone);
    tracing::info!(phone = %mask_phone_number(&phone), "Processing send-otp request");

    let result = state
        .reset_service
        .request_reset(&phone, &state.delivery_config)
        .await?;

    if !result.success {
        let failure = result
            .failure
            .unwrap_or_else(|| VerificationFailure::delivery(result.message.clone()));
        return Err(ApiError::Verification(failure));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        result.message.clone(),
        Some(SendOtpResponse {
            message: result.message,
            expires_in_minutes: state.expiration_minutes,
        }),
    )))
}
