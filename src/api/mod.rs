//! HTTP API module for the pay stub engine.
//!
//! This module provides the REST endpoint for previewing pay stubs.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    ElectionsRequest, JurisdictionRequest, PreviewRequest, ScheduleRequest, WorkerRequest,
};
pub use response::{ApiError, PreviewResponse};
pub use state::AppState;
