use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::errors::{ErrorCode, GameError};

#[derive(Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
}

/// Application-level error: a game rejection or an operational failure.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Game(#[from] GameError),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    fn code(&self) -> ErrorCode {
        match self {
            AppError::Game(err) => err.code(),
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Internal { .. } => ErrorCode::Internal,
        }
    }

    fn detail(&self) -> String {
        match self {
            AppError::Game(err) => err.user_message(),
            AppError::Config { detail } | AppError::Internal { detail } => detail.clone(),
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Game(GameError::NoActiveSession) => StatusCode::NOT_FOUND,
            AppError::Game(GameError::SessionExists) => StatusCode::CONFLICT,
            AppError::Game(_) => StatusCode::BAD_REQUEST,
            AppError::Config { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code().as_str().to_string();

        let problem_details = ProblemDetails {
            type_: format!("https://imposter.bot/errors/{code}"),
            title: Self::humanize_code(&code),
            status: status.as_u16(),
            detail: self.detail(),
            code,
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .json(problem_details)
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;
    use crate::errors::GameError;
    use actix_web::http::StatusCode;

    #[test]
    fn game_rejections_map_to_client_statuses() {
        assert_eq!(
            AppError::from(GameError::NotHost).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(GameError::NoActiveSession).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(GameError::SessionExists).status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn humanize_code_title_cases_words() {
        assert_eq!(AppError::humanize_code("NOT_YOUR_TURN"), "Not Your Turn");
    }
}
