// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Decides which applications, responses and decisions a party may see.
//!
//! Application visibility, in priority order:
//! 1. The tribunal sees everything.
//! 2. The creator always sees their own application.
//! 3. Types excluded from sharing are never shown to anyone else.
//! 4. Anyone else sees it if the creator copied the other party, or if any
//!    tribunal response notified their party.
//!
//! Responses from the other side become visible once the tribunal notifies
//! the viewer's party: everything before the last such notification is
//! disclosed, everything after it stays hidden unless it was copied.

use et3_respond_domain::registry::find_by_code;
use et3_respond_domain::{
    AdminDecision, Application, CaseSnapshot, Party, Response, Viewer, is_same_party, is_yes,
};
use tracing::debug;

/// An application filtered down to what one viewer may see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleApplication<'a> {
    pub application: &'a Application,
    /// Visible responses, in stored order.
    pub responses: Vec<&'a Response>,
    /// Visible decisions, in stored order.
    pub decisions: Vec<&'a AdminDecision>,
}

/// Returns true if the viewer raised the application.
#[must_use]
pub fn is_own_application(application: &Application, viewer: &Viewer) -> bool {
    is_same_party(
        application.applicant,
        application.applicant_id.as_deref(),
        viewer,
    )
}

/// Returns true if the application's type may never be shown to anyone but
/// its creator and the tribunal.
#[must_use]
pub fn is_excluded_from_sharing(application: &Application) -> bool {
    find_by_code(&application.type_code).is_some_and(|d| d.excluded_from_sharing())
}

/// Returns the index of the last tribunal response that notified `party`.
#[must_use]
pub fn last_notification_index(responses: &[Response], party: Party) -> Option<usize> {
    responses.iter().rposition(|r| r.notifies(party))
}

/// Returns true if the viewer may see the application at all.
#[must_use]
pub fn is_application_visible(application: &Application, viewer: &Viewer) -> bool {
    if viewer.is_admin() || is_own_application(application, viewer) {
        return true;
    }

    if is_excluded_from_sharing(application) {
        return false;
    }

    is_yes(application.copy_to_other_party)
        || last_notification_index(&application.responses, viewer.party).is_some()
}

fn is_response_visible(
    response: &Response,
    index: usize,
    disclosed_before: Option<usize>,
    viewer: &Viewer,
) -> bool {
    if response.is_from_admin() {
        return response.notifies(viewer.party);
    }

    if is_same_party(response.from, response.from_id.as_deref(), viewer) {
        return true;
    }

    is_yes(response.copy_to_other_party) || disclosed_before.is_some_and(|boundary| index < boundary)
}

/// Returns the responses the viewer may see, in stored order.
///
/// Does not check whether the application itself is visible.
#[must_use]
pub fn visible_responses<'a>(application: &'a Application, viewer: &Viewer) -> Vec<&'a Response> {
    if viewer.is_admin() {
        return application.responses.iter().collect();
    }

    let disclosed_before: Option<usize> =
        last_notification_index(&application.responses, viewer.party);

    application
        .responses
        .iter()
        .enumerate()
        .filter(|(index, response)| {
            is_response_visible(response, *index, disclosed_before, viewer)
        })
        .map(|(_, response)| response)
        .collect()
}

/// Returns the decisions the viewer may see, in stored order.
#[must_use]
pub fn visible_decisions<'a>(
    application: &'a Application,
    viewer: &Viewer,
) -> Vec<&'a AdminDecision> {
    application
        .decisions
        .iter()
        .filter(|d| viewer.is_admin() || d.notifies(viewer.party))
        .collect()
}

/// Filters an application for a viewer.
///
/// Returns `None` if the application is not visible to the viewer; callers
/// must treat that as "not found".
#[must_use]
pub fn filter_application<'a>(
    application: &'a Application,
    viewer: &Viewer,
) -> Option<VisibleApplication<'a>> {
    if !is_application_visible(application, viewer) {
        debug!(
            application_id = %application.id,
            party = %viewer.party,
            "Application hidden from viewer"
        );
        return None;
    }

    Some(VisibleApplication {
        application,
        responses: visible_responses(application, viewer),
        decisions: visible_decisions(application, viewer),
    })
}

/// Finds an application by id and filters it for the viewer.
///
/// Missing and hidden applications are indistinguishable to the caller.
#[must_use]
pub fn find_visible_application<'a>(
    case: &'a CaseSnapshot,
    application_id: &str,
    viewer: &Viewer,
) -> Option<VisibleApplication<'a>> {
    case.application(application_id)
        .and_then(|application| filter_application(application, viewer))
}

/// Returns every application the viewer may see, in stored order.
#[must_use]
pub fn visible_applications<'a>(
    case: &'a CaseSnapshot,
    viewer: &Viewer,
) -> Vec<VisibleApplication<'a>> {
    case.applications
        .iter()
        .filter_map(|application| filter_application(application, viewer))
        .collect()
}
