use actix_web::{web, HttpResponse};
use validator::Validate;

use ed_core::repositories::SchoolDataRepository;
use ed_core::services::verification::{NotificationSenderTrait, VerificationStoreTrait};
use ed_shared::ApiResponse;

use super::AppState;
use crate::dto::reset::ConfirmResetRequest;
use crate::handlers::ApiError;

/// Handler for POST /api/v1/reset/confirm
///
/// Verifies the submitted code and, only if it is accepted, wipes all school
/// data.
///
/// # Request Body
///
/// ```json
/// { "code": "123456" }
/// ```
///
/// # Responses
///
/// * `200` - Reset performed; `data` is the reset outcome with deletion counts
/// * `400` - Malformed or wrong code
/// * `404` - No code is outstanding
/// * `410` - The code expired and must be requested again
/// * `503` - The verification store is unavailable
/// * `500` - The code was accepted but the purge failed
pub async fn confirm_reset<S, V, R>(
    state: web::Data<AppState<S, V, R>>,
    request: web::Json<ConfirmResetRequest>,
) -> Result<HttpResponse, ApiError>
where
    S: NotificationSenderTrait + 'static,
    V: VerificationStoreTrait + 'static,
    R: SchoolDataRepository + 'static,
{
    request.validate()?;

    let outcome = state.reset_service.confirm_reset(&request.code).await?;

    if !outcome.reset_performed {
        return Err(match outcome.failure {
            Some(failure) => ApiError::Verification(failure),
            None => ApiError::Internal(outcome.message),
        });
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(outcome.message.clone(), Some(outcome))))
}
