//! The module contains the errors the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidAmount`] thrown when an amount cannot be parsed.
//! - [`InvalidDescription`] thrown when a bill has a blank description.
//! - [`MissingDatabase`] thrown when the [`Engine`] is built without a connection.
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidDescription`]: EngineError::InvalidDescription
//!  [`MissingDatabase`]: EngineError::MissingDatabase
//!  [`Engine`]: super::Engine
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid description: {0}")]
    InvalidDescription(String),
    #[error("database connection not configured")]
    MissingDatabase,
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidDescription(a), Self::InvalidDescription(b)) => a == b,
            (Self::MissingDatabase, Self::MissingDatabase) => true,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
