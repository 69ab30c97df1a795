// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Banner notifications for the case overview page.
//!
//! Each application produces at most one request notification or one submit
//! notification, never both: a submit notification is only raised when no
//! response to the tribunal is currently required.

use et3_respond_domain::registry::find_by_code;
use et3_respond_domain::{
    ApplicationCategory, Application, CaseSnapshot, Party, Viewer, is_same_party,
};
use serde::Serialize;
use tracing::debug;

use crate::status::{current_state, is_response_to_tribunal_required, pending_tribunal_request};
use crate::visibility::{is_application_visible, is_own_application};

/// Path of the stored application page; the application id is appended.
pub const STORED_APPLICATION_PATH: &str = "/stored-application-details";

/// Who raised an application, relative to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RaisedBy {
    Viewer,
    Claimant,
    Respondent,
    Tribunal,
}

impl RaisedBy {
    /// Classifies the application's creator relative to the viewer.
    #[must_use]
    pub fn of(application: &Application, viewer: &Viewer) -> Self {
        if is_own_application(application, viewer) {
            return Self::Viewer;
        }
        match application.applicant {
            Party::Claimant => Self::Claimant,
            Party::Respondent => Self::Respondent,
            Party::Admin => Self::Tribunal,
        }
    }

    /// Returns the translation key for the possessive label
    /// ("your", "the claimant's", ...).
    #[must_use]
    pub const fn translation_key(&self) -> &'static str {
        match self {
            Self::Viewer => "your",
            Self::Claimant => "theClaimants",
            Self::Respondent => "theRespondents",
            Self::Tribunal => "theTribunals",
        }
    }
}

/// The tribunal is waiting for the viewer to respond.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestNotification {
    pub application_id: String,
    pub application_type: String,
    pub raised_by: RaisedBy,
    /// Index of the tribunal response asking for the reply.
    pub request_index: usize,
}

/// Another party submitted an application the viewer has not responded to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitNotification {
    pub application_id: String,
    pub application_type: String,
    pub category: ApplicationCategory,
    pub submitted_by: Party,
    /// Display name of the submitter, when the roster has one.
    pub submitter_name: Option<String>,
    pub date: String,
    pub due_date: Option<String>,
}

/// An application the viewer saved but has not yet submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredApplicationReminder {
    pub application_id: String,
    pub application_type: String,
    pub date: String,
    pub link: String,
}

/// All notifications for one viewer on one case.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notifications {
    pub requests: Vec<RequestNotification>,
    pub submissions: Vec<SubmitNotification>,
    pub stored: Vec<StoredApplicationReminder>,
}

impl Notifications {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty() && self.submissions.is_empty() && self.stored.is_empty()
    }
}

/// Returns the request notification for an application, if the viewer must
/// respond to the tribunal now.
#[must_use]
pub fn request_notification(
    application: &Application,
    viewer: &Viewer,
) -> Option<RequestNotification> {
    if !is_application_visible(application, viewer)
        || current_state(application, viewer).is_terminal()
    {
        return None;
    }

    let request_index: usize = pending_tribunal_request(application, viewer)?;
    Some(RequestNotification {
        application_id: application.id.clone(),
        application_type: application.type_code.clone(),
        raised_by: RaisedBy::of(application, viewer),
        request_index,
    })
}

/// Returns the display name of an application's creator.
#[must_use]
pub fn submitter_name(application: &Application, case: &CaseSnapshot) -> Option<String> {
    match application.applicant {
        Party::Claimant => case.claimant_name.clone(),
        Party::Respondent => application
            .applicant_id
            .as_deref()
            .and_then(|id| case.respondent_by_identity(id))
            .map(|r| r.name.clone()),
        Party::Admin => None,
    }
}

/// Returns the submit notification for an application, if another party
/// raised it and the viewer has neither responded nor been asked to.
///
/// Applications raised by the tribunal are included; they carry no
/// submitter name.
#[must_use]
pub fn submit_notification(
    application: &Application,
    case: &CaseSnapshot,
    viewer: &Viewer,
) -> Option<SubmitNotification> {
    if is_own_application(application, viewer)
        || !is_application_visible(application, viewer)
        || is_response_to_tribunal_required(application, viewer)
        || current_state(application, viewer).is_terminal()
    {
        return None;
    }

    let has_responded: bool = application
        .responses
        .iter()
        .any(|r| is_same_party(r.from, r.from_id.as_deref(), viewer));
    if has_responded {
        return None;
    }

    let Some(descriptor) = find_by_code(&application.type_code) else {
        debug!(
            application_id = %application.id,
            application_type = %application.type_code,
            "Skipping submit notification for unregistered application type"
        );
        return None;
    };

    Some(SubmitNotification {
        application_id: application.id.clone(),
        application_type: application.type_code.clone(),
        category: descriptor.category,
        submitted_by: application.applicant,
        submitter_name: submitter_name(application, case),
        date: application.date.clone(),
        due_date: application.due_date.clone(),
    })
}

/// Returns reminders for the viewer's own stored applications.
#[must_use]
pub fn stored_application_reminders(
    case: &CaseSnapshot,
    viewer: &Viewer,
) -> Vec<StoredApplicationReminder> {
    case.stored_applications
        .iter()
        .filter(|s| is_same_party(s.applicant, s.applicant_id.as_deref(), viewer))
        .map(|s| StoredApplicationReminder {
            application_id: s.id.clone(),
            application_type: s.type_code.clone(),
            date: s.date.clone(),
            link: format!("{STORED_APPLICATION_PATH}/{}", s.id),
        })
        .collect()
}

/// Scans every application on the case and builds the viewer's
/// notifications, preserving stored order.
///
/// The tribunal receives no notifications.
#[must_use]
pub fn collect_notifications(case: &CaseSnapshot, viewer: &Viewer) -> Notifications {
    if viewer.is_admin() {
        return Notifications::default();
    }

    let requests: Vec<RequestNotification> = case
        .applications
        .iter()
        .filter_map(|application| request_notification(application, viewer))
        .collect();

    let submissions: Vec<SubmitNotification> = case
        .applications
        .iter()
        .filter_map(|application| submit_notification(application, case, viewer))
        .collect();

    Notifications {
        requests,
        submissions,
        stored: stored_application_reminders(case, viewer),
    }
}
