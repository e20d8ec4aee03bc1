//! Handler for batch tracking lookups.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::error;

use crate::api::dto::tracking::TrackingResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Message returned to callers when any lookup of a batch fails.
pub const BATCH_ERROR_MESSAGE: &str = "Error retrieving tracking numbers.";

/// Splits the raw path segment into tracking numbers.
///
/// The whole segment is trimmed before splitting on `;`; individual tokens are
/// kept as-is.
pub fn split_tracking_numbers(raw: &str) -> Vec<String> {
    raw.trim().split(';').map(str::to_string).collect()
}

/// Looks up a batch of tracking numbers.
///
/// # Endpoint
///
/// `GET /tracking_numbers/{tracking_numbers}`
///
/// `{tracking_numbers}` is a `;`-separated list, e.g.
/// `/tracking_numbers/XX1233FF;PN848933136BR`.
///
/// # Response
///
/// One record per tracking number, in no particular order. Numbers unknown to
/// the carrier carry a non-empty `erro`.
///
/// ```json
/// {
///   "objetos": [
///     {
///       "numero": "PN848933136BR",
///       "erro": "",
///       "nome": "ENCOMENDA PAC",
///       "evento": { "data": "20/02/2017", "hora": "15:43", "descricao": "Objeto entregue" }
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 500 Internal Server Error with `{"error": "Error retrieving tracking numbers."}`
/// if any lookup fails at the transport or protocol level. Which number failed,
/// and why, is only logged.
pub async fn tracking_numbers_handler(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<TrackingResponse>, AppError> {
    let tracking_numbers = split_tracking_numbers(&raw);

    let records = state
        .tracking_service
        .run_batch(tracking_numbers)
        .await
        .map_err(|err| {
            error!(error = %err, "Failed to retrieve tracking numbers");
            AppError::internal(BATCH_ERROR_MESSAGE)
        })?;

    Ok(Json(TrackingResponse::from(records)))
}

/// Fallback for unknown routes.
pub async fn not_found_handler() -> AppError {
    AppError::not_found("Resource not found")
}
