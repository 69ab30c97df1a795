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
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod application_state;
mod error;
mod party;
pub mod registry;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use application_state::{ApplicationState, StateEvent};
pub use error::DomainError;
pub use party::{
    CurrentUser, Party, PartySelection, Viewer, YesOrNo, is_same_party, is_yes, resolve_viewer,
    selection_includes,
};
pub use registry::{ApplicationCategory, ApplicationTypeDescriptor};
pub use types::{
    AdminDecision, Application, ApplicationDraft, CaseSnapshot, CmoOrRequest, DocumentRef,
    PartyViewState, RespondentParty, Response, ResponseFlags, StoredApplication,
};
pub use validation::{
    RESPONSE_WINDOW_DAYS, parse_case_date, response_due_date, validate_applicant,
    validate_application_draft,
};
