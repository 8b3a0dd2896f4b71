//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business rules and authorization so route handlers can
//! stay focused on transport translation. Services are stateless coordinators:
//! each holds only its injected persistence port and is cheaply `Clone`, so a
//! single instance is safely shared across concurrent requests.

pub mod account;
pub mod message;

use crate::store::StoreError;

/// Failure taxonomy reported to the transport layer. Every variant is a
/// recoverable outcome; mapping to status codes is the handlers' job and no
/// transport concern is encoded here.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Malformed input data.
    #[error("invalid input: {0}")]
    Validation(String),
    /// Caller not permitted to perform this mutation.
    #[error("not authorized: {0}")]
    Authorization(String),
    /// Referenced entity absent.
    #[error("not found: {0}")]
    NotFound(String),
    /// Uniqueness violation.
    #[error("conflict: {0}")]
    Conflict(String),
    /// Underlying persistence fault, rewrapped with the original attached.
    #[error("error accessing the database: {0}")]
    Access(#[from] StoreError),
}
