// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One-line summaries for the application list pages.

use et3_respond_domain::registry::claimant_label;
use et3_respond_domain::{Application, ApplicationState, CaseSnapshot, Party, Viewer};
use serde::Serialize;

use crate::status::current_state;
use crate::visibility::{is_application_visible, is_own_application};

/// Path of the application details page; the application id is appended.
pub const APPLICATION_DETAILS_PATH: &str = "/application-details";

/// An application as it appears in a list, annotated with the viewer's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSummary {
    pub id: String,
    pub application_type: String,
    pub applicant: Party,
    pub date: String,
    pub due_date: Option<String>,
    pub state: ApplicationState,
    pub tag_class: &'static str,
    pub link: String,
}

/// Returns the label for an application's type.
///
/// Claimant applications use the claimant-facing label; everything else
/// uses the type code.
#[must_use]
pub fn application_type_label(application: &Application) -> String {
    match application.applicant {
        Party::Claimant => claimant_label(&application.type_code).to_string(),
        Party::Respondent | Party::Admin => application.type_code.clone(),
    }
}

/// Summarises one application for the viewer.
#[must_use]
pub fn summarize(application: &Application, viewer: &Viewer) -> ApplicationSummary {
    let state: ApplicationState = current_state(application, viewer);
    ApplicationSummary {
        id: application.id.clone(),
        application_type: application_type_label(application),
        applicant: application.applicant,
        date: application.date.clone(),
        due_date: application.due_date.clone(),
        state,
        tag_class: state.tag_class(),
        link: format!("{APPLICATION_DETAILS_PATH}/{}", application.id),
    }
}

fn summarize_where(
    case: &CaseSnapshot,
    viewer: &Viewer,
    include: impl Fn(&Application) -> bool,
) -> Vec<ApplicationSummary> {
    case.applications
        .iter()
        .filter(|application| include(*application))
        .map(|application| summarize(application, viewer))
        .collect()
}

/// The viewer's own applications.
#[must_use]
pub fn your_applications(case: &CaseSnapshot, viewer: &Viewer) -> Vec<ApplicationSummary> {
    summarize_where(case, viewer, |application| {
        is_own_application(application, viewer)
    })
}

/// Claimant applications the viewer may see.
#[must_use]
pub fn claimant_applications(case: &CaseSnapshot, viewer: &Viewer) -> Vec<ApplicationSummary> {
    summarize_where(case, viewer, |application| {
        application.applicant == Party::Claimant
            && !is_own_application(application, viewer)
            && is_application_visible(application, viewer)
    })
}

/// Applications raised by other respondents that the viewer may see.
#[must_use]
pub fn other_respondents_applications(
    case: &CaseSnapshot,
    viewer: &Viewer,
) -> Vec<ApplicationSummary> {
    summarize_where(case, viewer, |application| {
        application.applicant == Party::Respondent
            && !is_own_application(application, viewer)
            && is_application_visible(application, viewer)
    })
}

/// Every application raised by someone else that has been shared with the
/// viewer.
#[must_use]
pub fn shared_applications(case: &CaseSnapshot, viewer: &Viewer) -> Vec<ApplicationSummary> {
    summarize_where(case, viewer, |application| {
        !is_own_application(application, viewer) && is_application_visible(application, viewer)
    })
}
