//! Common test utilities for integration tests.
//!
//! Spins up an in-process mock of the backend REST API on an ephemeral
//! port. State lives in memory; request counters and scripted failures
//! let tests assert on retry behavior.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::{TimeZone, Utc};
use domain::models::{LocationRecord, Notification, Pet, Session};
use fake::faker::name::en::FirstName;
use fake::Fake;
use serde_json::{json, Value};

use persistence::SessionStore;
use pettrack_client::api::ApiClient;
use pettrack_client::config::Config;

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_USER_ID: &str = "u-1";
pub const TEST_EMAIL: &str = "ana@example.com";
pub const TEST_PASSWORD: &str = "secret";

/// In-memory backend state shared with the test body.
pub struct MockState {
    pub pets: Mutex<Vec<Pet>>,
    pub locations: Mutex<Vec<LocationRecord>>,
    pub notifications: Mutex<Vec<Notification>>,
    pub scans: Mutex<Vec<(String, Value)>>,

    /// Requests seen by `GET /users/{id}/pets`.
    pub pets_requests: AtomicUsize,
    /// Requests seen by `GET /users/{id}/locations`.
    pub locations_requests: AtomicUsize,
    /// Requests seen by `GET /users/{id}/notifications/count`.
    pub count_requests: AtomicUsize,

    /// Statuses to fail the next pets requests with, in order.
    pets_failures: Mutex<VecDeque<u16>>,
    /// Statuses to fail the next locations requests with, in order.
    locations_failures: Mutex<VecDeque<u16>>,
    /// Statuses to fail the next count requests with, in order.
    count_failures: Mutex<VecDeque<u16>>,

    next_id: AtomicUsize,
}

impl MockState {
    fn new() -> Self {
        Self {
            pets: Mutex::new(Vec::new()),
            locations: Mutex::new(Vec::new()),
            notifications: Mutex::new(Vec::new()),
            scans: Mutex::new(Vec::new()),
            pets_requests: AtomicUsize::new(0),
            locations_requests: AtomicUsize::new(0),
            count_requests: AtomicUsize::new(0),
            pets_failures: Mutex::new(VecDeque::new()),
            locations_failures: Mutex::new(VecDeque::new()),
            count_failures: Mutex::new(VecDeque::new()),
            next_id: AtomicUsize::new(1),
        }
    }

    /// Scripts the next pets requests to fail with the given statuses.
    pub fn fail_pets_with(&self, statuses: &[u16]) {
        self.pets_failures.lock().unwrap().extend(statuses);
    }

    /// Scripts the next locations requests to fail with the given statuses.
    pub fn fail_locations_with(&self, statuses: &[u16]) {
        self.locations_failures.lock().unwrap().extend(statuses);
    }

    /// Scripts the next count requests to fail with the given statuses.
    pub fn fail_count_with(&self, statuses: &[u16]) {
        self.count_failures.lock().unwrap().extend(statuses);
    }

    pub fn add_pet(&self, name: &str) -> Pet {
        let pet = Pet {
            id: self.fresh_id("p"),
            name: name.to_string(),
            photo: None,
            qr_content: None,
        };
        self.pets.lock().unwrap().push(pet.clone());
        pet
    }

    pub fn add_location(&self, pet_id: &str, pet_name: &str, hour: u32) -> LocationRecord {
        let record = LocationRecord {
            pet_id: pet_id.to_string(),
            pet_name: pet_name.to_string(),
            latitude: -35.4,
            longitude: -71.6,
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, hour, 0, 0).unwrap(),
        };
        self.locations.lock().unwrap().push(record.clone());
        record
    }

    pub fn add_notification(&self, message: &str, read: bool) -> Notification {
        let notification = Notification {
            id: self.fresh_id("n"),
            message: message.to_string(),
            created_at: Utc::now(),
            leido: read,
            latitude: None,
            longitude: None,
            location_info: None,
            user_message: None,
        };
        self.notifications.lock().unwrap().push(notification.clone());
        notification
    }

    pub fn unread(&self) -> u32 {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| !n.leido)
            .count() as u32
    }

    fn fresh_id(&self, prefix: &str) -> String {
        format!("{prefix}-{}", self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    fn pop_failure(failures: &Mutex<VecDeque<u16>>) -> Option<StatusCode> {
        failures
            .lock()
            .unwrap()
            .pop_front()
            .and_then(|status| StatusCode::from_u16(status).ok())
    }
}

type Shared = Arc<MockState>;

/// A running mock backend.
pub struct MockBackend {
    pub base_url: String,
    pub state: Shared,
}

/// Binds the mock backend on an ephemeral port and serves it in the
/// background for the rest of the test.
pub async fn spawn_backend() -> MockBackend {
    let state = Arc::new(MockState::new());
    let router = router(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Mock backend crashed");
    });

    MockBackend {
        base_url: format!("http://{addr}"),
        state,
    }
}

/// Builds a client against the mock backend with a throwaway session
/// file. Retries are kept at the default three attempts but with a short
/// delay so tests stay fast.
pub fn test_client(backend: &MockBackend, dir: &tempfile::TempDir) -> (ApiClient, Config) {
    let mut config = Config::default();
    config.backend.base_url = backend.base_url.clone();
    config.retry.delay_ms = 10;
    config.dashboard.reconcile_delay_ms = 10;

    let sessions = SessionStore::at_path(dir.path().join("session.json"));
    let api = ApiClient::new(&config, sessions).expect("Failed to build client");
    (api, config)
}

/// A persisted session matching the mock backend's credentials.
pub fn logged_in(api: &ApiClient) {
    api.sessions()
        .save(&Session {
            user_id: TEST_USER_ID.to_string(),
            nombre: fake_name(),
            email: TEST_EMAIL.to_string(),
            token: TEST_TOKEN.to_string(),
        })
        .expect("Failed to seed session");
}

pub fn fake_name() -> String {
    FirstName().fake()
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/users/:user_id/pets", get(list_pets).post(create_pet))
        .route("/pets/:pet_id", get(get_pet))
        .route("/users/:user_id/locations", get(list_locations))
        .route("/scan/:pet_id", post(submit_scan))
        .route("/users/:user_id/notifications", get(list_notifications))
        .route("/users/:user_id/notifications/count", get(unread_count))
        .route(
            "/users/:user_id/notifications/mark-all-read",
            put(mark_all_read),
        )
        .route("/users/:user_id/notifications/:id", put(mark_read))
        .route(
            "/users/:user_id/profile",
            get(get_profile).put(update_profile),
        )
        .route("/users/:user_id/password", put(change_password))
        .with_state(state)
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {TEST_TOKEN}"))
        .unwrap_or(false)
}

fn error_response(status: StatusCode) -> Response {
    let message = match status {
        StatusCode::UNAUTHORIZED => "Unauthorized",
        StatusCode::NOT_FOUND => "User not found",
        _ => "Internal server error",
    };
    (status, Json(json!({ "error": message }))).into_response()
}

fn unauthorized() -> Response {
    error_response(StatusCode::UNAUTHORIZED)
}

fn session_body() -> Value {
    json!({
        "user_id": TEST_USER_ID,
        "nombre": "Ana",
        "email": TEST_EMAIL,
        "token": TEST_TOKEN,
    })
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["password"] == TEST_PASSWORD {
        Json(session_body()).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid email or password" })),
        )
            .into_response()
    }
}

async fn register(Json(_body): Json<Value>) -> Response {
    (StatusCode::CREATED, Json(session_body())).into_response()
}

async fn list_pets(State(state): State<Shared>, headers: HeaderMap) -> Response {
    state.pets_requests.fetch_add(1, Ordering::SeqCst);
    if let Some(status) = MockState::pop_failure(&state.pets_failures) {
        return error_response(status);
    }
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(state.pets.lock().unwrap().clone()).into_response()
}

async fn create_pet(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let pet = state.add_pet(body["name"].as_str().unwrap_or_default());
    (StatusCode::CREATED, Json(pet)).into_response()
}

async fn get_pet(State(state): State<Shared>, Path(pet_id): Path<String>) -> Response {
    let pets = state.pets.lock().unwrap();
    match pets.iter().find(|p| p.id == pet_id) {
        Some(pet) => Json(pet.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Pet not found" })),
        )
            .into_response(),
    }
}

async fn list_locations(State(state): State<Shared>, headers: HeaderMap) -> Response {
    state.locations_requests.fetch_add(1, Ordering::SeqCst);
    if let Some(status) = MockState::pop_failure(&state.locations_failures) {
        return error_response(status);
    }
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(state.locations.lock().unwrap().clone()).into_response()
}

async fn submit_scan(
    State(state): State<Shared>,
    Path(pet_id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let pet_name = state
        .pets
        .lock()
        .unwrap()
        .iter()
        .find(|p| p.id == pet_id)
        .map(|p| p.name.clone())
        .unwrap_or_default();

    state.locations.lock().unwrap().push(LocationRecord {
        pet_id: pet_id.clone(),
        pet_name,
        latitude: body["latitude"].as_f64().unwrap_or_default(),
        longitude: body["longitude"].as_f64().unwrap_or_default(),
        created_at: Utc::now(),
    });
    state.add_notification("Your pet was scanned", false);
    state.scans.lock().unwrap().push((pet_id, body));

    (StatusCode::CREATED, Json(json!({ "status": "ok" }))).into_response()
}

async fn list_notifications(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let notifications = state.notifications.lock().unwrap().clone();
    let unread = state.unread();
    Json(json!({ "notifications": notifications, "unread_count": unread })).into_response()
}

async fn unread_count(State(state): State<Shared>, headers: HeaderMap) -> Response {
    state.count_requests.fetch_add(1, Ordering::SeqCst);
    if let Some(status) = MockState::pop_failure(&state.count_failures) {
        return error_response(status);
    }
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({ "unread_count": state.unread() })).into_response()
}

async fn mark_read(
    State(state): State<Shared>,
    Path((_user_id, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let mut notifications = state.notifications.lock().unwrap();
    match notifications.iter_mut().find(|n| n.id == id) {
        Some(notification) => {
            notification.leido = true;
            Json(json!({ "status": "ok" })).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Notification not found" })),
        )
            .into_response(),
    }
}

async fn mark_all_read(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    for notification in state.notifications.lock().unwrap().iter_mut() {
        notification.leido = true;
    }
    Json(json!({ "status": "ok" })).into_response()
}

async fn get_profile(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({ "email": TEST_EMAIL, "phone": "+56912345678" })).into_response()
}

async fn update_profile(headers: HeaderMap, Json(_body): Json<Value>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({ "status": "ok" })).into_response()
}

async fn change_password(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    if body["currentPassword"] != TEST_PASSWORD {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Current password is incorrect" })),
        )
            .into_response();
    }
    Json(json!({ "status": "ok" })).into_response()
}
