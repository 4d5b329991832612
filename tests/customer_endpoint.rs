//! Customer Endpoint Tests
//!
//! Drives the full router (`/v1/customers/:customer_id`) through
//! `tower::ServiceExt::oneshot`:
//! - Found records return 200 with the wire representation
//! - Missing records return 404 with an empty body
//! - Rejected ids return 400 with the validation message verbatim
//! - Store faults return a generic 500

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{DateTime, TimeZone, Utc};
use customer_lookup::customer::{
    CustomerRecord, CustomerService, CustomerTranslator, MemoryRecordStore, RecordStore,
    StoreError, StoreFuture,
};
use customer_lookup::http_server::{CustomerState, HttpServer, HttpServerConfig};
use serde_json::Value;
use tower::ServiceExt;

// =============================================================================
// Test Utilities
// =============================================================================

/// Store that returns a fixed record for one id and counts lookups
struct FixedStore {
    record: Option<CustomerRecord>,
    calls: AtomicUsize,
}

impl FixedStore {
    fn with(record: Option<CustomerRecord>) -> Arc<Self> {
        Arc::new(Self {
            record,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RecordStore for FixedStore {
    fn find_by_id(&self, id: i32) -> StoreFuture<'_> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let found = self.record.clone().filter(|r| r.id == Some(id));
        Box::pin(async move { Ok(found) })
    }
}

/// Store that is always down
struct UnavailableStore;

impl RecordStore for UnavailableStore {
    fn find_by_id(&self, _id: i32) -> StoreFuture<'_> {
        Box::pin(async { Err(StoreError::Unavailable("connection refused".to_string())) })
    }
}

fn router_with(store: Arc<dyn RecordStore>) -> Router {
    let service = CustomerService::new(store);
    let customers = CustomerState::new(service, CustomerTranslator::new());
    HttpServer::new(HttpServerConfig::default(), customers).router()
}

fn last_read() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()
}

async fn get(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

// =============================================================================
// Found / Absent
// =============================================================================

/// A stored customer is returned as its wire representation.
#[tokio::test]
async fn test_found_returns_wire_record() {
    let store = FixedStore::with(Some(
        CustomerRecord::new(42, "Jane Doe")
            .with_street_address("1 Main St")
            .with_last_read_timestamp(last_read()),
    ));
    let router = router_with(store.clone());

    let (status, body) = get(router, "/v1/customers/42").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["id"], 42);
    assert_eq!(json["fullName"], "Jane Doe");
    let timestamp: DateTime<Utc> =
        serde_json::from_value(json["lastReadTimestamp"].clone()).unwrap();
    assert_eq!(timestamp, last_read());
    assert!(json.get("streetAddress").is_none());
    assert_eq!(store.calls(), 1);
}

/// A record with no name or timestamp serializes those fields as null.
#[tokio::test]
async fn test_found_with_null_fields() {
    let store = FixedStore::with(Some(CustomerRecord {
        id: Some(9),
        ..Default::default()
    }));

    let (status, body) = get(router_with(store), "/v1/customers/9").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["id"], 9);
    assert!(json["fullName"].is_null());
    assert!(json["lastReadTimestamp"].is_null());
}

/// A valid id with no matching record is a 404 with no body.
#[tokio::test]
async fn test_absent_returns_not_found() {
    let store = FixedStore::with(None);

    let (status, body) = get(router_with(store.clone()), "/v1/customers/42").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
    assert_eq!(store.calls(), 1);
}

// =============================================================================
// Validation
// =============================================================================

/// Negative ids are rejected with the exact message.
#[tokio::test]
async fn test_negative_id_is_bad_request() {
    let store = FixedStore::with(None);

    let (status, body) = get(router_with(store.clone()), "/v1/customers/-5").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(String::from_utf8(body).unwrap(), "Invalid customer ID [-5].");
    assert_eq!(store.calls(), 0);
}

/// Zero is rejected with the exact message.
#[tokio::test]
async fn test_zero_id_is_bad_request() {
    let store = FixedStore::with(None);

    let (status, body) = get(router_with(store.clone()), "/v1/customers/0").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(String::from_utf8(body).unwrap(), "Invalid customer ID [0].");
    assert_eq!(store.calls(), 0);
}

/// Non-numeric ids never reach the service.
#[tokio::test]
async fn test_unparsable_id_rejected_by_transport() {
    let store = FixedStore::with(None);

    let (status, _body) = get(router_with(store.clone()), "/v1/customers/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(store.calls(), 0);
}

// =============================================================================
// Faults
// =============================================================================

/// Store failures are not reported as validation errors.
#[tokio::test]
async fn test_store_failure_is_server_error() {
    let (status, body) = get(router_with(Arc::new(UnavailableStore)), "/v1/customers/7").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.is_empty());
}

// =============================================================================
// In-memory store, end to end
// =============================================================================

/// Reads through the in-memory store stamp the last-read time.
#[tokio::test]
async fn test_memory_store_stamps_last_read() {
    let store = MemoryRecordStore::new();
    store
        .insert(CustomerRecord::new(1, "Ada Lovelace").with_street_address("12 St James's Sq"))
        .unwrap();
    let router = router_with(Arc::new(store));

    let before = Utc::now();
    let (status, body) = get(router, "/v1/customers/1").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["fullName"], "Ada Lovelace");
    let timestamp: DateTime<Utc> =
        serde_json::from_value(json["lastReadTimestamp"].clone()).unwrap();
    assert!(timestamp >= before);
}

/// Concurrent requests are independent of each other.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests() {
    let store = MemoryRecordStore::new();
    for id in 1..=20 {
        store
            .insert(CustomerRecord::new(id, format!("Customer {}", id)))
            .unwrap();
    }
    let router = router_with(Arc::new(store));

    let mut tasks = tokio::task::JoinSet::new();
    for id in -5..=25 {
        let router = router.clone();
        tasks.spawn(async move {
            let (status, _) = get(router, &format!("/v1/customers/{}", id)).await;
            (id, status)
        });
    }

    while let Some(result) = tasks.join_next().await {
        let (id, status) = result.unwrap();
        let expected = match id {
            i32::MIN..=0 => StatusCode::BAD_REQUEST,
            1..=20 => StatusCode::OK,
            _ => StatusCode::NOT_FOUND,
        };
        assert_eq!(status, expected, "customer id {}", id);
    }
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let (status, body) = get(router_with(FixedStore::with(None)), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
}
