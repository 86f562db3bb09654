//! Unified application error type.
//! All modules (jalali, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Event source
    // ---------------------------
    #[error("Invalid events JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Events file not found: {0}")]
    EventsNotFound(String),

    #[error("Reference file not found: {0}")]
    ReferenceNotFound(String),

    #[error("Invalid reference JSON in {0}")]
    InvalidReference(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid month format: {0}")]
    InvalidMonth(String),

    // ---------------------------
    // Calendar errors
    // ---------------------------
    #[error("Date outside the supported Jalali range: {0}")]
    JalaliRange(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
