// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod case_api;
mod details;
mod error;
mod request_response;
mod service;
mod translations;

#[cfg(test)]
mod tests;

pub use case_api::{CaseApi, UpstreamError};
pub use details::{
    ApplicationDetailsPage, DocumentLinkBase, DocumentLinks, RowValue, SummaryRow,
    admin_response_rows, application_rows, decision_rows, details_page, display_date,
    party_response_rows, response_rows,
};
pub use error::{ApiError, translate_core_error, translate_domain_error, translate_upstream_error};
pub use request_response::{
    ApplicationListsResponse, RespondToApplicationRequest, RespondToApplicationResponse,
    SubmitApplicationResponse,
};
pub use service::RespondService;
pub use translations::{Translate, TranslationTable};
