use serde::Serialize;
use thiserror::Error;

pub const DIVIDE_BY_ZERO_MESSAGE: &str = "Cannot divide by zero";

/// The arithmetic operation a service exposes on its single route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Division,
    Multiplication,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Division => "division",
            Operation::Multiplication => "multiplication",
        }
    }

    pub fn service_name(self) -> &'static str {
        match self {
            Operation::Division => "div-service",
            Operation::Multiplication => "mul-service",
        }
    }

    /// Values substituted for `a` and `b` when they are absent from the query.
    pub fn defaults(self) -> (i64, i64) {
        match self {
            Operation::Division => (0, 1),
            Operation::Multiplication => (0, 0),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{}", DIVIDE_BY_ZERO_MESSAGE)]
pub struct DivisionByZero;

/// Real-valued division of two integers in `f64`. Operands beyond 2^53 are
/// rounded to the nearest `f64` before dividing, so the last bit of the
/// quotient may differ from a correctly rounded rational division.
pub fn divide(a: i64, b: i64) -> Result<f64, DivisionByZero> {
    if b == 0 {
        return Err(DivisionByZero);
    }
    Ok(a as f64 / b as f64)
}

/// Exact product; 128 bits hold the product of any two `i64`.
pub fn multiply(a: i64, b: i64) -> i128 {
    i128::from(a) * i128::from(b)
}

/// JSON body returned by both services. Exactly one of `result` and `error`
/// is present.
#[derive(Debug, Serialize, PartialEq)]
pub struct OperationResponse<T> {
    pub operation: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> OperationResponse<T> {
    pub fn success(operation: Operation, result: T) -> Self {
        Self {
            operation: operation.name(),
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(operation: Operation, error: impl Into<String>) -> Self {
        Self {
            operation: operation.name(),
            result: None,
            error: Some(error.into()),
        }
    }
}
