use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use std::fmt;

use crate::constants::{
    CODE_INTERNAL_ERROR, CODE_VALIDATION_FAILED, ERR_BAD_REQUEST, ERR_FORBIDDEN, ERR_INTERNAL,
    ERR_METHOD_NOT_ALLOWED, ERR_RESOURCE_NOT_FOUND, ERR_UNAUTHORIZED, ERR_UNPROCESSABLE,
};
use crate::models::ErrorResponse;
use crate::repositories::RepositoryError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest { code: String, message: String },
    Unauthorized { code: String, message: String },
    Forbidden { code: String, message: String },
    NotFound { code: String, message: String },
    MethodNotAllowed { code: String, message: String },
    Unprocessable { code: String, message: String },
    InternalServerError { code: String, message: String },
    ValidationError { code: String, errors: Vec<String> },
}

impl ApiError {
    pub fn bad_request(code: &str) -> Self {
        ApiError::BadRequest {
            code: code.to_string(),
            message: ERR_BAD_REQUEST.to_string(),
        }
    }

    pub fn unauthorized(code: &str) -> Self {
        ApiError::Unauthorized {
            code: code.to_string(),
            message: ERR_UNAUTHORIZED.to_string(),
        }
    }

    pub fn forbidden(code: &str) -> Self {
        ApiError::Forbidden {
            code: code.to_string(),
            message: ERR_FORBIDDEN.to_string(),
        }
    }

    pub fn not_found(code: &str) -> Self {
        ApiError::NotFound {
            code: code.to_string(),
            message: ERR_RESOURCE_NOT_FOUND.to_string(),
        }
    }

    pub fn method_not_allowed(code: &str) -> Self {
        ApiError::MethodNotAllowed {
            code: code.to_string(),
            message: ERR_METHOD_NOT_ALLOWED.to_string(),
        }
    }

    pub fn unprocessable(code: &str) -> Self {
        ApiError::Unprocessable {
            code: code.to_string(),
            message: ERR_UNPROCESSABLE.to_string(),
        }
    }

    pub fn validation(errors: Vec<String>) -> Self {
        ApiError::ValidationError {
            code: CODE_VALIDATION_FAILED.to_string(),
            errors,
        }
    }

    pub fn code(&self) -> &str {
        match self {
            ApiError::BadRequest { code, .. }
            | ApiError::Unauthorized { code, .. }
            | ApiError::Forbidden { code, .. }
            | ApiError::NotFound { code, .. }
            | ApiError::MethodNotAllowed { code, .. }
            | ApiError::Unprocessable { code, .. }
            | ApiError::InternalServerError { code, .. }
            | ApiError::ValidationError { code, .. } => code,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::BadRequest { message, .. }
            | ApiError::Unauthorized { message, .. }
            | ApiError::Forbidden { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::MethodNotAllowed { message, .. }
            | ApiError::Unprocessable { message, .. }
            | ApiError::InternalServerError { message, .. } => message,
            ApiError::ValidationError { .. } => ERR_UNPROCESSABLE,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest { code, message } => {
                write!(f, "Bad Request [{}]: {}", code, message)
            }
            ApiError::Unauthorized { code, message } => {
                write!(f, "Unauthorized [{}]: {}", code, message)
            }
            ApiError::Forbidden { code, message } => {
                write!(f, "Forbidden [{}]: {}", code, message)
            }
            ApiError::NotFound { code, message } => {
                write!(f, "Not Found [{}]: {}", code, message)
            }
            ApiError::MethodNotAllowed { code, message } => {
                write!(f, "Method Not Allowed [{}]: {}", code, message)
            }
            ApiError::Unprocessable { code, message } => {
                write!(f, "Unprocessable [{}]: {}", code, message)
            }
            ApiError::InternalServerError { code, message } => {
                write!(f, "Internal Server Error [{}]: {}", code, message)
            }
            ApiError::ValidationError { code, errors } => {
                write!(f, "Validation Error [{}]: {:?}", code, errors)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable { .. } | ApiError::ValidationError { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let errors = match self {
            ApiError::ValidationError { errors, .. } => Some(errors.clone()),
            _ => None,
        };

        HttpResponse::build(status).json(ErrorResponse {
            success: false,
            error: status.as_u16(),
            code: self.code().to_string(),
            message: self.message().to_string(),
            errors,
        })
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        error!("Repository failure: {}", err);
        ApiError::InternalServerError {
            code: CODE_INTERNAL_ERROR.to_string(),
            message: ERR_INTERNAL.to_string(),
        }
    }
}
