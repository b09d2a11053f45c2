//! HTTP handlers for the INPI lookup API
//!
//! Wire field names follow the web UI's contract (Portuguese keys).

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use inpi_core::{BatchEntry, CaseRecord, InpiError, SearchMode};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::AppState;

/// Status shown for a brand whose lookup failed in batch mode
pub const BATCH_FAILURE_STATUS: &str = "Falha na comunicação com o INPI.";

const INVALID_INPUT: &str = "Dados inválidos.";

/// Body of `POST /api/verificar-lote`
///
/// Elements are kept as raw JSON so a non-string brand fails on its own row
/// instead of rejecting the whole batch.
#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub marcas: Vec<Value>,
}

/// Body of `POST /api/buscar-completa`
#[derive(Debug, Deserialize)]
pub struct FullSearchRequest {
    pub marca: String,
    #[serde(rename = "tipoBusca")]
    pub tipo_busca: SearchMode,
}

/// Registration flag: `true`, `false` or `"erro"`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registered {
    Yes,
    No,
    Error,
}

impl Serialize for Registered {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Registered::Yes => serializer.serialize_bool(true),
            Registered::No => serializer.serialize_bool(false),
            Registered::Error => serializer.serialize_str("erro"),
        }
    }
}

/// One row of the batch verification response
#[derive(Debug, Serialize)]
pub struct BatchItem {
    pub marca_pesquisada: String,
    pub registrada: Registered,
    pub status: String,
    pub titular: Option<String>,
    pub marca_encontrada: String,
    pub total_encontrado: Option<u32>,
}

impl From<BatchEntry> for BatchItem {
    fn from(entry: BatchEntry) -> Self {
        match entry {
            BatchEntry::Verified(result) => Self {
                marca_pesquisada: result.queried_brand,
                registrada: if result.has_active_registration {
                    Registered::Yes
                } else {
                    Registered::No
                },
                status: result.status,
                titular: result.matched_holder,
                marca_encontrada: result.matched_mark.unwrap_or_else(|| "-".to_string()),
                total_encontrado: Some(result.total_matches),
            },
            // Details stay in the log; the table only says the lookup failed
            BatchEntry::Failed { queried_brand, .. } => Self {
                marca_pesquisada: queried_brand,
                registrada: Registered::Error,
                status: BATCH_FAILURE_STATUS.to_string(),
                titular: None,
                marca_encontrada: "-".to_string(),
                total_encontrado: None,
            },
        }
    }
}

/// Error response rendered as `{"error": "..."}`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn invalid_input() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: INVALID_INPUT.to_string(),
        }
    }
}

impl From<InpiError> for ApiError {
    fn from(error: InpiError) -> Self {
        match error {
            InpiError::InvalidInput(_) => Self::invalid_input(),
            error => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: error.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}

/// `POST /api/verificar-lote`
///
/// Verifies each brand in order with a radical search. Individual failures
/// become `"erro"` rows; only a malformed body fails the request.
pub async fn verify_batch(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> Result<Json<Vec<BatchItem>>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected batch request");
        ApiError::invalid_input()
    })?;

    tracing::info!(brands = request.marcas.len(), "batch verification requested");

    let brands: Vec<String> = request
        .marcas
        .iter()
        .filter_map(|value| value.as_str().map(str::to_string))
        .collect();

    let verified = match state.credentials() {
        Ok(credentials) => state.scraper.verify_batch(credentials, &brands).await,
        Err(_) => {
            tracing::warn!("batch verification without configured credentials");
            brands
                .into_iter()
                .map(|brand| BatchEntry::Failed {
                    queried_brand: brand,
                    error: InpiError::MissingCredentials,
                })
                .collect()
        }
    };

    // One verified entry per string element, in the same order
    let mut verified = verified.into_iter();
    let entries: Vec<BatchItem> = request
        .marcas
        .into_iter()
        .filter_map(|value| match value {
            Value::String(_) => verified.next(),
            other => {
                tracing::warn!(value = %other, "batch element is not a brand string");
                Some(BatchEntry::Failed {
                    queried_brand: other.to_string(),
                    error: InpiError::InvalidInput(format!("brand must be a string, got {other}")),
                })
            }
        })
        .map(BatchItem::from)
        .collect();

    Ok(Json(entries))
}

/// `POST /api/buscar-completa`
///
/// Returns every record of the first results page for one brand.
pub async fn full_search(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<FullSearchRequest>, JsonRejection>,
) -> Result<Json<Vec<CaseRecord>>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected full search request");
        ApiError::invalid_input()
    })?;

    if request.marca.trim().is_empty() {
        return Err(ApiError::invalid_input());
    }

    let credentials = state.credentials()?;
    let outcome = state
        .scraper
        .search(credentials, &request.marca, request.tipo_busca)
        .await
        .inspect_err(|error| {
            tracing::error!(marca = %request.marca, %error, "full search failed");
        })?;

    Ok(Json(outcome.records))
}
