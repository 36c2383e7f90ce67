use axum::{extract::rejection::QueryRejection, Json};
use tracing::debug;

use crate::error::RequestError;
use crate::operations::{divide, Operation, OperationResponse};
use crate::routes::parameters::{Params, QueryPairs};

/// Division by zero still answers 200; callers detect it by the `error` field.
pub async fn handler(
    query: Result<QueryPairs, QueryRejection>,
) -> Result<Json<OperationResponse<f64>>, RequestError> {
    let operands = Params::from_query(Operation::Division, query)?
        .operands(Operation::Division)?;
    debug!(a = operands.a, b = operands.b, "Division handler is run");

    let response = match divide(operands.a, operands.b) {
        Ok(result) => OperationResponse::success(Operation::Division, result),
        Err(e) => OperationResponse::failure(Operation::Division, e.to_string()),
    };
    Ok(Json(response))
}
