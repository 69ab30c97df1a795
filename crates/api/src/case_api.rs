// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The contract with the external case store.

use et3_respond_domain::{Application, ApplicationState, CaseSnapshot, Response, ResponseFlags};
use thiserror::Error;

/// Failures reported by the case store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UpstreamError {
    /// The case does not exist.
    #[error("Case {case_id} not found")]
    NotFound { case_id: String },

    /// The store refused the change.
    #[error("Case store rejected the request: {message}")]
    Rejected { message: String },

    /// The store could not be reached or returned garbage.
    #[error("Case store unavailable: {0}")]
    Unavailable(String),
}

/// Reads and writes cases held by the external case store.
///
/// Every call may fail; callers decide whether a failure aborts the page.
#[allow(async_fn_in_trait)]
pub trait CaseApi {
    /// Loads a snapshot of the case.
    async fn fetch_case(&self, case_id: &str) -> Result<CaseSnapshot, UpstreamError>;

    /// Appends a new application, returning it as stored.
    async fn submit_application(
        &self,
        case_id: &str,
        application: Application,
    ) -> Result<Application, UpstreamError>;

    /// Appends a response to an existing application and stores its updated
    /// response flags alongside it.
    async fn submit_response(
        &self,
        case_id: &str,
        application_id: &str,
        response: Response,
        flags: ResponseFlags,
    ) -> Result<(), UpstreamError>;

    /// Records one user's state for an application.
    async fn update_application_status(
        &self,
        case_id: &str,
        application_id: &str,
        user_id: &str,
        state: ApplicationState,
    ) -> Result<(), UpstreamError>;
}
