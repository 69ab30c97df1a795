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

mod error;
mod notifications;
mod status;
mod submission;
mod summaries;
mod visibility;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use error::CoreError;
pub use notifications::{
    Notifications, RaisedBy, RequestNotification, STORED_APPLICATION_PATH,
    StoredApplicationReminder, SubmitNotification, collect_notifications, request_notification,
    stored_application_reminders, submit_notification, submitter_name,
};
pub use status::{
    CLOSED_STATUS, current_state, initial_state, is_response_to_tribunal_required,
    party_has_pending_request, party_members, pending_tribunal_request, record_admin_decision, record_admin_response,
    record_party_response, record_view, view_transition,
};
pub use submission::{OPEN_STATUS, ResponseInput, build_application, build_party_response};
pub use summaries::{
    APPLICATION_DETAILS_PATH, ApplicationSummary, application_type_label, claimant_applications,
    other_respondents_applications, shared_applications, summarize, your_applications,
};
pub use visibility::{
    VisibleApplication, filter_application, find_visible_application, is_application_visible,
    is_excluded_from_sharing, is_own_application, last_notification_index, visible_applications,
    visible_decisions, visible_responses,
};
