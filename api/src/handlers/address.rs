//! Address handlers
//!
//! `GET /v1/address?zipcode=...` and the controller that turns the derive
//! address use case result into a status code and JSON body.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::adapters::AddressPresenter;
use crate::app::{
    DeriveAddressInput, DeriveAddressInteractor, DeriveAddressOutput, DeriveAddressUseCase,
};
use crate::domain::ports::AddressLookup;
use crate::error::{AppError, ErrorResponse};
use crate::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for address lookup
#[derive(Debug, Deserialize)]
pub struct AddressQuery {
    /// 7-digit postal code
    pub zipcode: Option<String>,
}

/// Body produced by the controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ControllerBody {
    Address(DeriveAddressOutput),
    Error(ErrorResponse),
}

/// Status code and body decided by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerResponse {
    pub status: StatusCode,
    pub body: ControllerBody,
}

impl IntoResponse for ControllerResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

// ============================================================================
// Controller
// ============================================================================

pub struct DeriveAddressController<U: DeriveAddressUseCase> {
    usecase: U,
}

impl<U: DeriveAddressUseCase> DeriveAddressController<U> {
    pub fn new(usecase: U) -> Self {
        Self { usecase }
    }

    /// Run the use case and map its outcome to an HTTP status
    pub async fn execute(&self, input: DeriveAddressInput) -> ControllerResponse {
        match self.usecase.execute(input).await {
            Ok(output) => ControllerResponse {
                status: StatusCode::OK,
                body: ControllerBody::Address(output),
            },
            Err(failure) => ControllerResponse {
                status: failure.error.kind().status_code(),
                body: ControllerBody::Error(ErrorResponse::new(failure.error.to_string())),
            },
        }
    }
}

type AddressController =
    DeriveAddressController<DeriveAddressInteractor<AddressPresenter, Arc<dyn AddressLookup>>>;

/// Assemble the per-request chain around the shared lookup adapter
fn build_controller(state: &AppState) -> AddressController {
    let usecase = DeriveAddressInteractor::new(AddressPresenter, state.address_lookup.clone());
    DeriveAddressController::new(usecase)
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /v1/address
///
/// Look up the address for a zipcode.
pub async fn get_address(
    State(state): State<AppState>,
    Query(query): Query<AddressQuery>,
) -> Result<ControllerResponse, AppError> {
    let zipcode = query
        .zipcode
        .ok_or_else(|| AppError::BadRequest("zipcode query parameter is required".to_string()))?;

    let controller = build_controller(&state);
    let response = controller.execute(DeriveAddressInput { zipcode }).await;

    if response.status.is_server_error() {
        if let ControllerBody::Error(ref body) = response.body {
            tracing::warn!(status = %response.status, "Address lookup failed: {}", body.error);
        }
    }

    Ok(response)
}
