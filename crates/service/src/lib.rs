//! Service boundary around the [`gauss`] solver.
//!
//! A web front end collects the matrix cell by cell ([`form`]), hands an [`EquationRequest`] to
//! a [`SolverClient`] which applies the caller's deadline, and the [`SolverServer`] answers with
//! an [`EquationResponse`]. [`Reply`] turns the result into the message and status code shown
//! to the user.

use std::{path::PathBuf, time::Duration};

use thiserror::Error;

mod client;
mod config;
pub mod form;
mod message;
mod reply;
mod server;

pub use client::{SolverClient, DEFAULT_MAX_IN_FLIGHT};
pub use config::ServiceConfig;
pub use message::{EquationRequest, EquationResponse};
pub use reply::Reply;
pub use server::{Solver, SolverServer};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid matrix size")]
    InvalidSize,

    #[error("Invalid matrix values")]
    InvalidMatrixValues,

    #[error("Invalid constants values")]
    InvalidConstantsValues,

    /// The solver answered with a populated error message.
    #[error("Solver error: {0}")]
    Solver(String),

    #[error(transparent)]
    Gauss(#[from] gauss::Error),

    /// The call did not complete within the caller's deadline; its result is discarded.
    #[error("deadline of {deadline:?} exceeded")]
    DeadlineExceeded { deadline: Duration },

    /// Too many workers are still running, including ones whose deadline already passed.
    #[error("too many solves in flight ({limit})")]
    Busy { limit: usize },

    #[error("solver worker went away without answering")]
    Disconnected,

    #[error("failed to spawn solver worker")]
    Spawn(#[source] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("failed to read config {path:?}")]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// `true` for failures of the request itself, `false` for failures of getting it solved.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidSize
                | Error::InvalidMatrixValues
                | Error::InvalidConstantsValues
                | Error::Solver(_)
                | Error::Gauss(_)
        )
    }
}
