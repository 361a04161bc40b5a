mod common;

use actix_web::{http::StatusCode, test};
use chrono::Duration;
use serde_json::Value;

use ed_api::app::create_app;
use ed_api::dto::reset::{ConfirmResetRequest, SendOtpRequest};

use common::{create_test_context, PHONE};

fn send_otp_request() -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/v1/reset/send-otp")
        .set_json(&SendOtpRequest {
            phone: PHONE.to_string(),
        })
}

fn confirm_request(code: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/v1/reset/confirm")
        .set_json(&ConfirmResetRequest {
            code: code.to_string(),
        })
}

#[actix_web::test]
async fn test_confirm_performs_reset() {
    let ctx = create_test_context().await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let resp = test::call_service(&app, send_otp_request().to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(&app, confirm_request(&ctx.last_code()).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["reset_performed"], true);
    assert_eq!(body["data"]["purged"]["collections"]["fees"], 1500);
    assert_eq!(ctx.repository.total_records().await, 0);
}

#[actix_web::test]
async fn test_confirm_replay_is_not_found() {
    let ctx = create_test_context().await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    test::call_service(&app, send_otp_request().to_request()).await;
    let code = ctx.last_code();
    let resp = test::call_service(&app, confirm_request(&code).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(&app, confirm_request(&code).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NO_ACTIVE_CODE");
    assert_eq!(
        body["message"],
        "No OTP has been sent or it has already been used."
    );
}

#[actix_web::test]
async fn test_confirm_wrong_code_keeps_data() {
    let ctx = create_test_context().await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    test::call_service(&app, send_otp_request().to_request()).await;
    let code = ctx.last_code();
    let wrong = if code == "123456" { "654321" } else { "123456" };

    let resp = test::call_service(&app, confirm_request(wrong).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "CODE_MISMATCH");
    assert_eq!(ctx.repository.total_records().await, 2030);

    // The live code survives a wrong guess
    let resp = test::call_service(&app, confirm_request(&code).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_confirm_expired_code_is_gone() {
    let ctx = create_test_context().await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    test::call_service(&app, send_otp_request().to_request()).await;
    let code = ctx.last_code();
    ctx.clock.advance(Duration::minutes(5) + Duration::seconds(1));

    let resp = test::call_service(&app, confirm_request(&code).to_request()).await;
    assert_eq!(resp.status(), StatusCode::GONE);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "CODE_EXPIRED");

    let resp = test::call_service(&app, confirm_request(&code).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(ctx.repository.total_records().await, 2030);
}

#[actix_web::test]
async fn test_confirm_without_code_sent() {
    let ctx = create_test_context().await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let resp = test::call_service(&app, confirm_request("482913").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_confirm_malformed_code() {
    let ctx = create_test_context().await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    for code in ["12345", "1234567", "12ab56"] {
        let resp = test::call_service(&app, confirm_request(code).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "code {}", code);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }
}
