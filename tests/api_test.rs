//! Integration tests for API endpoints.
//!
//! The router runs over real JSON stores in a temporary directory; only the
//! barcode API is replaced by a stub.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use trainhub::api::{create_router, AppState};
use trainhub::config::Config;
use trainhub::errors::{AppError, AppResult};
use trainhub::infra::{BarcodeClient, BarcodeProduct, TrainingStore, UserRepository, UserStore};
use trainhub::services::{LocalUploads, Services};

// =============================================================================
// Test Harness
// =============================================================================

const KNOWN_UPC: &str = "012345678905";

/// Barcode client that knows a single product
struct StubBarcodeClient;

#[async_trait]
impl BarcodeClient for StubBarcodeClient {
    async fn lookup(&self, upc: &str) -> AppResult<BarcodeProduct> {
        if upc == KNOWN_UPC {
            Ok(BarcodeProduct {
                upc: upc.to_string(),
                description: "Safety Glasses".to_string(),
                brand: "Acme".to_string(),
                model: String::new(),
                category: "PPE".to_string(),
            })
        } else {
            Err(AppError::not_found("barcode"))
        }
    }
}

struct TestApp {
    router: Router,
    config: Config,
    _dir: TempDir,
}

impl TestApp {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_data_dir(dir.path());

        let services = Services::new(
            Arc::new(UserStore::open(config.users_file())),
            Arc::new(TrainingStore::open(config.trainings_file())),
            Arc::new(LocalUploads::new(&config.upload_dir).unwrap()),
            Arc::new(StubBarcodeClient),
        );
        let router = create_router(AppState::new(Arc::new(services)), &config);

        Self {
            router,
            config,
            _dir: dir,
        }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn signup(&self, name: &str, email: &str) {
        let (status, _) = self
            .post(
                "/api/signup",
                json!({"name": name, "email": email, "password": "secret1"}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    /// Create a training and return its id
    async fn create_training(&self, email: &str, title: &str) -> String {
        let (status, body) = self
            .post(
                &format!("/api/trainings?email={}", email),
                json!({"title": title, "description": "Intro"}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["training"]["id"].as_str().unwrap().to_string()
    }
}

fn multipart_request(uri: &str, field: &str, file_name: &str, content_type: &str) -> Request<Body> {
    let boundary = "trainhub-test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
         Content-Type: {content_type}\r\n\r\n\
         fake media bytes\r\n\
         --{boundary}--\r\n"
    );

    Request::post(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap()
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_reports_store_counts() {
    let app = TestApp::new();
    app.signup("Alice", "alice@x.com").await;
    app.create_training("alice@x.com", "Forklift safety").await;

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stores"], json!({"users": 1, "trainings": 1}));
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn test_signup_and_login() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            "/api/signup",
            json!({"name": "  Alice ", "email": " Alice@X.com ", "password": "secret1"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["ok"], true);
    assert_eq!(body["user"], json!({"name": "Alice", "email": "alice@x.com"}));

    let (status, body) = app
        .post(
            "/api/login",
            json!({"email": "ALICE@x.com", "password": "secret1"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "alice@x.com");
}

#[tokio::test]
async fn test_signup_duplicate_email_is_conflict() {
    let app = TestApp::new();
    app.signup("Alice", "alice@x.com").await;

    let (status, body) = app
        .post(
            "/api/signup",
            json!({"name": "Other", "email": "ALICE@x.com", "password": "secret2"}),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["ok"], false);
    assert_eq!(body["code"], "ALREADY_EXISTS");
}

#[tokio::test]
async fn test_signup_validation() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            "/api/signup",
            json!({"name": "Alice", "email": "alice@x.com", "password": "123"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, _) = app
        .post(
            "/api/signup",
            json!({"name": "Alice", "email": "not-an-email", "password": "secret1"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_failures_look_the_same() {
    let app = TestApp::new();
    app.signup("Alice", "alice@x.com").await;

    let (wrong_status, wrong_body) = app
        .post("/api/login", json!({"email": "alice@x.com", "password": "nope123"}))
        .await;
    let (missing_status, missing_body) = app
        .post("/api/login", json!({"email": "ghost@x.com", "password": "nope123"}))
        .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_status, missing_status);
    assert_eq!(wrong_body, missing_body);
}

// =============================================================================
// Users and inventories
// =============================================================================

#[tokio::test]
async fn test_inventory_update_and_listing() {
    let app = TestApp::new();
    app.signup("Alice", "alice@x.com").await;

    let (status, body) = app
        .post(
            "/api/user",
            json!({
                "email": "alice@x.com",
                "inventory": ["Hammer", {"name": "Gloves", "quantity": 2}],
                "deleted_inventory": []
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ok": true}));

    let (status, body) = app.get("/api/user?email=Alice@x.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["user"]["inventory"],
        json!(["Hammer", {"name": "Gloves", "quantity": 2}])
    );
    assert!(body["user"].get("hashed_password").is_none());

    let (status, body) = app.get("/api/inventories").await;
    assert_eq!(status, StatusCode::OK);
    let inventories = body["inventories"].as_array().unwrap();
    assert_eq!(inventories.len(), 1);
    assert_eq!(inventories[0]["inventory"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_inventory_errors() {
    let app = TestApp::new();
    app.signup("Alice", "alice@x.com").await;

    let (status, _) = app.get("/api/user").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.get("/api/user?email=ghost@x.com").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let too_many: Vec<String> = (0..1001).map(|i| format!("item-{}", i)).collect();
    let (status, body) = app
        .post(
            "/api/user",
            json!({"email": "alice@x.com", "inventory": too_many}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("1000"));
}

// =============================================================================
// Trainings
// =============================================================================

#[tokio::test]
async fn test_training_lifecycle_with_ownership() {
    let app = TestApp::new();
    let id = app.create_training("alice@x.com", "Forklift safety").await;
    let action = |email: &str| json!({"id": id, "email": email});

    // Someone else cannot trash it
    let (status, body) = app.post("/api/training/delete", action("bob@x.com")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "you can only delete your own trainings");

    let (status, _) = app.post("/api/training/delete", action("alice@x.com")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get("/api/trainings").await;
    assert!(body["trainings"].as_array().unwrap().is_empty());

    let (_, body) = app.get("/api/trainings/deleted?email=bob@x.com").await;
    assert!(body["trainings"].as_array().unwrap().is_empty());

    let (_, body) = app.get("/api/trainings/deleted?email=alice@x.com").await;
    assert_eq!(body["trainings"][0]["id"], id.as_str());
    assert!(body["trainings"][0]["deleted_at"].is_string());

    let (status, _) = app.post("/api/training/restore", action("bob@x.com")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.post("/api/training/restore", action("alice@x.com")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get("/api/trainings").await;
    assert_eq!(body["trainings"][0]["id"], id.as_str());
    assert!(body["trainings"][0].get("deleted_at").is_none());

    let (status, _) = app
        .post("/api/training/permanent-delete", action("alice@x.com"))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.get(&format!("/api/training?id={}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "training not found");
}

#[tokio::test]
async fn test_training_update() {
    let app = TestApp::new();
    let id = app.create_training("alice@x.com", "Draft").await;

    let (status, body) = app
        .post(
            "/api/training/update",
            json!({
                "id": id,
                "email": "alice@x.com",
                "title": "  Final  ",
                "description": "",
                "blocks": [{"id": "b1", "type": "text", "order": 0, "content": {"text": "Hi"}}]
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["training"]["title"], "Final");
    assert_eq!(body["training"]["description"], "Intro");
    assert_eq!(body["training"]["blocks"][0]["type"], "text");

    let (status, _) = app
        .post(
            "/api/training/update",
            json!({"id": id, "email": "bob@x.com", "title": "Hijacked"}),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (_, body) = app.get(&format!("/api/training?id={}", id)).await;
    assert_eq!(body["training"]["title"], "Final");
}

#[tokio::test]
async fn test_training_create_validation() {
    let app = TestApp::new();

    let (status, _) = app
        .post("/api/trainings", json!({"title": "No owner"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post("/api/trainings?email=alice@x.com", json!({"title": "   "}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post(
            "/api/trainings?email=alice@x.com",
            json!({"title": "x".repeat(201)}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_training_survives_restart() {
    let app = TestApp::new();
    app.signup("Alice", "alice@x.com").await;
    let id = app.create_training("alice@x.com", "Persisted").await;

    let users = UserStore::open(app.config.users_file());
    assert!(users.find_by_email("alice@x.com").is_some());

    let raw = std::fs::read_to_string(app.config.trainings_file()).unwrap();
    let stored: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored[&id]["title"], "Persisted");
}

// =============================================================================
// Uploads
// =============================================================================

#[tokio::test]
async fn test_video_upload_is_served_back() {
    let app = TestApp::new();

    let (status, body) = app
        .send(multipart_request(
            "/api/upload-video",
            "video",
            "intro clip.mp4",
            "video/mp4",
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    let url = body["video_url"].as_str().unwrap().to_string();
    assert!(url.starts_with("/uploads/videos/"));
    assert!(url.ends_with("_intro_clip.mp4"));

    let response = app
        .router
        .clone()
        .oneshot(Request::get(url.as_str()).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"fake media bytes");
}

#[tokio::test]
async fn test_upload_rejections() {
    let app = TestApp::new();

    let (status, body) = app
        .send(multipart_request(
            "/api/upload-image",
            "image",
            "vector.svg",
            "image/svg+xml",
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["ok"], false);

    let (status, body) = app
        .send(multipart_request(
            "/api/upload-video",
            "attachment",
            "intro.mp4",
            "video/mp4",
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "no file uploaded");

    let (status, body) = app
        .send(multipart_request(
            "/api/upload-image",
            "image",
            "cover.png",
            "image/png",
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["image_url"]
        .as_str()
        .unwrap()
        .starts_with("/uploads/images/"));
}

// =============================================================================
// Barcode lookup
// =============================================================================

#[tokio::test]
async fn test_barcode_lookup() {
    let app = TestApp::new();

    let (status, body) = app
        .get(&format!("/api/barcode-lookup?upc={}", KNOWN_UPC))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product"]["brand"], "Acme");

    let (status, _) = app.get("/api/barcode-lookup?upc=999999999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get("/api/barcode-lookup?upc=12%2F34").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.get("/api/barcode-lookup").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
