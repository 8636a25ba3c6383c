#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the SafeT location safety application.
//!
//! Serves `GET /api/safety` (synthetic safety score, nearby emergency
//! services, and recommendations for a clicked map point), the signup/login
//! session flow under `/api/auth`, and the built frontend from a static
//! directory. All state is in memory.

pub mod config;
mod error;
mod handlers;
pub mod interactive;

use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use safet_auth::AuthService;
use safet_safety::entropy::{EntropySource, ThreadRngEntropy};

pub use config::ServerConfig;
pub use error::ApiError;
pub use handlers::SESSION_COOKIE;

/// Shared application state.
pub struct AppState {
    /// Randomness for the safety scorer.
    pub entropy: Arc<dyn EntropySource>,
    /// User directory and sessions.
    pub auth: AuthService,
    /// Whether session cookies carry the `Secure` flag.
    pub secure_cookies: bool,
}

impl AppState {
    /// Creates state with an empty user directory.
    #[must_use]
    pub fn new(entropy: Arc<dyn EntropySource>, secure_cookies: bool) -> Self {
        Self {
            entropy,
            auth: AuthService::default(),
            secure_cookies,
        }
    }
}

/// Registers the `/api` routes and the extractor error handlers.
///
/// Malformed JSON bodies and query strings are answered with a 400 and the
/// standard `{"error": ...}` body.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected request body: {err}");
        ApiError::BadRequest(error::INVALID_BODY_MESSAGE.to_string()).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected query string: {err}");
        ApiError::BadRequest(error::INVALID_BODY_MESSAGE.to_string()).into()
    }))
    .service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/safety", web::get().to(handlers::safety))
            .service(
                web::scope("/auth")
                    .route("/signup", web::post().to(handlers::signup))
                    .route("/register", web::post().to(handlers::signup))
                    .route("/login", web::post().to(handlers::login))
                    .route("/me", web::get().to(handlers::me))
                    .route("/logout", web::post().to(handlers::logout)),
            ),
    );
}

/// Starts the SafeT API server.
///
/// This is a regular async function; the caller provides the runtime
/// (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    let state = web::Data::new(AppState::new(
        Arc::new(ThreadRngEntropy),
        config.secure_cookies,
    ));

    let static_dir = config.static_dir.clone();
    let serve_static = static_dir.is_dir();
    if serve_static {
        log::info!("Serving frontend from {}", static_dir.display());
    } else {
        log::warn!(
            "Static directory {} not found, serving API only",
            static_dir.display()
        );
    }

    log::info!("Starting server on {}:{}", config.bind_addr, config.port);

    HttpServer::new(move || {
        let app = App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure);

        if serve_static {
            app.service(Files::new("/", static_dir.clone()).index_file("index.html"))
        } else {
            app
        }
    })
    .bind((config.bind_addr, config.port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::test::{self, TestRequest};
    use safet_safety::entropy::FixedEntropy;
    use serde_json::{Value, json};

    use super::*;

    fn state() -> web::Data<AppState> {
        web::Data::new(AppState::new(Arc::new(FixedEntropy::zero()), false))
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(App::new().app_data($state.clone()).configure(configure)).await
        };
    }

    fn signup(name: &str, email: &str, password: &str) -> TestRequest {
        TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(json!({ "name": name, "email": email, "password": password }))
    }

    fn login(email: &str, password: &str) -> TestRequest {
        TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": email, "password": password }))
    }

    #[actix_web::test]
    async fn health_reports_version() {
        let state = state();
        let app = app!(state);
        let req = TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["healthy"], true);
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[actix_web::test]
    async fn safety_returns_centers_at_fixed_offsets() {
        let state = state();
        let app = app!(state);
        let req = TestRequest::get()
            .uri("/api/safety?lat=28.6139&lng=77.2090")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;

        let centers = body["emergencyCenters"].as_array().unwrap();
        assert_eq!(centers.len(), 3);
        let expected = [
            ("hospital", 28.6139 + 0.01, 77.2090 + 0.01),
            ("police", 28.6139 - 0.005, 77.2090 + 0.005),
            ("fire", 28.6139 + 0.015, 77.2090 - 0.01),
        ];
        for (center, (kind, lat, lng)) in centers.iter().zip(expected) {
            assert_eq!(center["type"], kind);
            assert!((center["lat"].as_f64().unwrap() - lat).abs() < 1e-12);
            assert!((center["lng"].as_f64().unwrap() - lng).abs() < 1e-12);
        }

        assert_eq!(body["location"]["address"], "28.6139, 77.2090");
        assert_eq!(body["safety"]["crimeRate"], 16);
        assert_eq!(body["safety"]["accidentRate"], 13);
        assert_eq!(body["safety"]["overallSafety"], 86);
        assert_eq!(body["safety"]["riskLevel"], "LOW");
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 2);
        assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[actix_web::test]
    async fn safety_echoes_address() {
        let state = state();
        let app = app!(state);
        let req = TestRequest::get()
            .uri("/api/safety?lat=40.7128&lng=-74.006&address=Times%20Square")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["location"]["address"], "Times Square");
    }

    #[actix_web::test]
    async fn safety_zero_coordinates_rejected() {
        let state = state();
        let app = app!(state);
        for uri in [
            "/api/safety?lat=0&lng=0",
            "/api/safety?lat=0&lng=77.2",
            "/api/safety?lat=28.6&lng=0",
        ] {
            let resp = test::call_service(&app, TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "Latitude and longitude are required");
        }
    }

    #[actix_web::test]
    async fn safety_missing_or_invalid_rejected() {
        let state = state();
        let app = app!(state);
        for uri in [
            "/api/safety",
            "/api/safety?lat=12.5",
            "/api/safety?lat=abc&lng=1",
            "/api/safety?lat=NaN&lng=1",
            "/api/safety?lat=95&lng=10",
        ] {
            let resp = test::call_service(&app, TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
            let body: Value = test::read_body_json(resp).await;
            assert!(body["error"].is_string());
        }
    }

    #[actix_web::test]
    async fn signup_password_length() {
        let state = state();
        let app = app!(state);

        let resp = test::call_service(
            &app,
            signup("Asha", "asha@example.com", "1234567").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = test::call_service(
            &app,
            signup("Asha", "asha@example.com", "12345678").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.response().cookies().any(|c| c.name() == SESSION_COOKIE));
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["user"]["name"], "Asha");
        assert_eq!(body["user"]["email"], "asha@example.com");
        assert!(!body["token"].as_str().unwrap().is_empty());

        let resp = test::call_service(&app, login("asha@example.com", "12345678").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn signup_missing_fields() {
        let state = state();
        let app = app!(state);
        let req = TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(json!({ "email": "asha@example.com", "password": "12345678" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Name, email, and password are required");
    }

    #[actix_web::test]
    async fn duplicate_signup_conflicts() {
        let state = state();
        let app = app!(state);
        let resp = test::call_service(
            &app,
            signup("Asha", "asha@example.com", "password1").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({ "name": "Other", "email": "asha@example.com", "password": "password2" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn login_failures_share_message() {
        let state = state();
        let app = app!(state);
        test::call_service(
            &app,
            signup("Asha", "asha@example.com", "password1").to_request(),
        )
        .await;

        let resp = test::call_service(&app, login("asha@example.com", "wrong-pass").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let wrong_password: Value = test::read_body_json(resp).await;

        let resp = test::call_service(&app, login("nobody@example.com", "password1").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let unknown_email: Value = test::read_body_json(resp).await;

        assert_eq!(wrong_password, unknown_email);
        assert_eq!(wrong_password["error"], "Invalid email or password");
    }

    #[actix_web::test]
    async fn login_missing_fields() {
        let state = state();
        let app = app!(state);
        let req = TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "asha@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn malformed_body_is_bad_request() {
        let state = state();
        let app = app!(state);
        let req = TestRequest::post()
            .uri("/api/auth/login")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid request body");
    }

    #[actix_web::test]
    async fn session_cookie_flow() {
        let state = state();
        let app = app!(state);
        test::call_service(
            &app,
            signup("Asha", "asha@example.com", "password1").to_request(),
        )
        .await;

        let resp = test::call_service(&app, login("asha@example.com", "password1").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .map(Cookie::into_owned)
            .unwrap();
        assert_eq!(cookie.http_only(), Some(true));
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["user"]["email"], "asha@example.com");
        assert!(body.get("token").is_none());

        let session = Cookie::new(SESSION_COOKIE, cookie.value().to_string());

        let req = TestRequest::get()
            .uri("/api/auth/me")
            .cookie(session.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["user"]["name"], "Asha");

        let req = TestRequest::post()
            .uri("/api/auth/logout")
            .cookie(session.clone())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);

        let req = TestRequest::get()
            .uri("/api/auth/me")
            .cookie(session)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn me_without_cookie_is_unauthorized() {
        let state = state();
        let app = app!(state);
        let resp =
            test::call_service(&app, TestRequest::get().uri("/api/auth/me").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Not authenticated");
    }
}
