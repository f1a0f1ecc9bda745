use actix_web::http::{Method, StatusCode};
use actix_web::{App, test, web};
use mock_auth_api::application::auth_service::AuthService;
use mock_auth_api::data::user_directory::InMemoryUserDirectory;
use mock_auth_api::infrastructure::config::AppConfig;
use mock_auth_api::infrastructure::security::{Argon2Verifier, PasswordVerifier, PlainTextVerifier};
use mock_auth_api::presentation::handlers::AppState;
use mock_auth_api::presentation::routes::{API_PREFIX, api_cors, configure_routes};
use serde_json::{Value, json};
use std::sync::Arc;

macro_rules! setup_api_test {
    ($verifier:expr) => {{
        let verifier: Arc<dyn PasswordVerifier> = Arc::new($verifier);
        let directory = InMemoryUserDirectory::seeded(verifier.as_ref()).unwrap();
        let auth_service = AuthService::new(Arc::new(directory), verifier);
        let state = web::Data::new(AppState { auth_service });
        let origins = AppConfig::default().cors_origins;

        test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(configure_routes)
                .service(
                    web::scope(API_PREFIX)
                        .wrap(api_cors(&origins))
                        .configure(configure_routes),
                ),
        )
        .await
    }};
}

#[actix_web::test]
async fn test_api_prefix_serves_same_contract() {
    let app = setup_api_test!(PlainTextVerifier);

    let req = test::TestRequest::get().uri("/api/example").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Hello from Flask!");

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "login": "val.osipova@gmail.com", "password": "1234" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["name"], "Валерия");
    assert_eq!(body["token"], "dummy_token_for_example");

    let req = test::TestRequest::post()
        .uri("/api/emailConfirm")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_preflight_from_allowed_origin() {
    let app = setup_api_test!(PlainTextVerifier);

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/register")
        .insert_header(("Origin", "http://localhost:5173"))
        .insert_header(("Access-Control-Request-Method", "POST"))
        .insert_header(("Access-Control-Request-Headers", "content-type"))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .unwrap()
            .to_str()
            .unwrap(),
        "http://localhost:5173"
    );
}

#[actix_web::test]
async fn test_simple_request_from_allowed_origin_gets_cors_header() {
    let app = setup_api_test!(PlainTextVerifier);

    let req = test::TestRequest::post()
        .uri("/api/emailConfirm")
        .insert_header(("Origin", "http://localhost:3000"))
        .set_json(json!({ "code": "123456" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .unwrap()
            .to_str()
            .unwrap(),
        "http://localhost:3000"
    );
}

#[actix_web::test]
async fn test_preflight_from_disallowed_origin_is_rejected() {
    let app = setup_api_test!(PlainTextVerifier);

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/login")
        .insert_header(("Origin", "https://evil.example"))
        .insert_header(("Access-Control-Request-Method", "POST"))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(!resp.headers().contains_key("access-control-allow-origin"));
}

#[actix_web::test]
async fn test_simple_request_from_disallowed_origin_is_rejected() {
    let app = setup_api_test!(PlainTextVerifier);

    let req = test::TestRequest::post()
        .uri("/api/login")
        .insert_header(("Origin", "https://evil.example"))
        .set_json(json!({ "login": "user1@example.com", "password": "user" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
    assert!(!resp.headers().contains_key("access-control-allow-origin"));
}

#[actix_web::test]
async fn test_login_under_argon2_scheme() {
    let app = setup_api_test!(Argon2Verifier);

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "login": "user1@example.com", "password": "user" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["name"], "Иван");

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "login": "user1@example.com", "password": "wrong" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
