use axum::{extract::rejection::QueryRejection, Json};
use tracing::debug;

use crate::error::RequestError;
use crate::operations::{multiply, Operation, OperationResponse};
use crate::routes::parameters::{Params, QueryPairs};

pub async fn handler(
    query: Result<QueryPairs, QueryRejection>,
) -> Result<Json<OperationResponse<i128>>, RequestError> {
    let operands = Params::from_query(Operation::Multiplication, query)?
        .operands(Operation::Multiplication)?;
    debug!(a = operands.a, b = operands.b, "Multiplication handler is run");

    Ok(Json(OperationResponse::success(
        Operation::Multiplication,
        multiply(operands.a, operands.b),
    )))
}
