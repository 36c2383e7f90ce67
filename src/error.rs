use std::net::SocketAddr;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::config::ConfigError;
use crate::operations::{Operation, OperationResponse};

/// Failures that stop a service from starting or keep it from running.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server error")]
    Serve(#[source] std::io::Error),
    #[error("lambda runtime error")]
    Lambda(#[source] lambda_http::Error),
}

/// Failures tied to a single request, rendered as the operation's JSON payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("Invalid value for parameter '{name}': '{value}' is not an integer")]
    InvalidParameter {
        operation: Operation,
        name: &'static str,
        value: String,
    },
    #[error("Invalid query string: {message}")]
    InvalidQuery {
        operation: Operation,
        message: String,
    },
}

impl RequestError {
    fn operation(&self) -> Operation {
        match self {
            RequestError::InvalidParameter { operation, .. }
            | RequestError::InvalidQuery { operation, .. } => *operation,
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let status = match self {
            RequestError::InvalidParameter { .. } | RequestError::InvalidQuery { .. } => {
                StatusCode::BAD_REQUEST
            }
        };
        let body = OperationResponse::<()>::failure(self.operation(), self.to_string());
        (status, Json(body)).into_response()
    }
}
