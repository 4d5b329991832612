//! Customer HTTP Routes
//!
//! Read-only customer endpoints backed by `CustomerService`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::debug;

use crate::customer::{CustomerLookup, CustomerService, CustomerTranslator};

use super::errors::ApiError;

// ==================
// Shared State
// ==================

/// Customer state shared across handlers
#[derive(Debug, Clone)]
pub struct CustomerState {
    pub service: CustomerService,
    pub translator: CustomerTranslator,
}

impl CustomerState {
    pub fn new(service: CustomerService, translator: CustomerTranslator) -> Self {
        Self {
            service,
            translator,
        }
    }
}

// ==================
// Customer Routes
// ==================

/// Create customer routes
pub fn customer_routes(state: Arc<CustomerState>) -> Router {
    Router::new()
        .route("/customers/:customer_id", get(get_customer_handler))
        .with_state(state)
}

/// Return the customer with the given id.
///
/// 200 with the wire record, 404 with no body when nothing matches, 400
/// when the id is rejected.
async fn get_customer_handler(
    State(state): State<Arc<CustomerState>>,
    Path(customer_id): Path<i32>,
) -> Result<Response, ApiError> {
    match state.service.get_customer(Some(customer_id)).await? {
        CustomerLookup::Found(record) => {
            debug!(customer_id, "customer found");
            Ok((StatusCode::OK, Json(state.translator.to_wire(&record))).into_response())
        }
        CustomerLookup::Absent => {
            debug!(customer_id, "customer not found");
            Ok(StatusCode::NOT_FOUND.into_response())
        }
        CustomerLookup::Invalid(err) => Err(err.into()),
    }
}
