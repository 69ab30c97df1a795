// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resolves each party member's lifecycle state for an application.
//!
//! A stored view state always wins. Without one, the state is derived:
//! the creator and anyone with an unanswered tribunal request are
//! `InProgress`, everyone else is `NotStartedYet`. The application-level
//! response flag alone does not make an application `InProgress`.
//!
//! The `record_*` functions return updated copies of an application; they
//! never mutate their input.

use et3_respond_domain::{
    AdminDecision, Application, ApplicationState, CaseSnapshot, Party, Response, StateEvent,
    Viewer, YesOrNo, is_same_party,
};

use crate::visibility::is_own_application;

/// Status label written to an application once the tribunal closes it.
pub const CLOSED_STATUS: &str = "Closed";

/// Returns the index of the tribunal request the viewer still has to answer.
///
/// This is the last tribunal response that requires a response from the
/// viewer's party, provided the viewer has not responded after it.
#[must_use]
pub fn pending_tribunal_request(application: &Application, viewer: &Viewer) -> Option<usize> {
    if viewer.is_admin() {
        return None;
    }

    let request_index: usize = application
        .responses
        .iter()
        .rposition(|r| r.requests_response_from(viewer.party))?;

    let answered: bool = application
        .responses
        .iter()
        .skip(request_index + 1)
        .any(|r| is_same_party(r.from, r.from_id.as_deref(), viewer));

    if answered { None } else { Some(request_index) }
}

/// Returns the state a party member has before any view state is stored.
#[must_use]
pub fn initial_state(application: &Application, viewer: &Viewer) -> ApplicationState {
    if is_own_application(application, viewer)
        || pending_tribunal_request(application, viewer).is_some()
    {
        ApplicationState::InProgress
    } else {
        ApplicationState::NotStartedYet
    }
}

/// Returns the viewer's current state for the application.
#[must_use]
pub fn current_state(application: &Application, viewer: &Viewer) -> ApplicationState {
    viewer
        .id()
        .and_then(|id| application.view_state_for(id))
        .unwrap_or_else(|| initial_state(application, viewer))
}

/// Returns true if the viewer must respond to the tribunal now.
#[must_use]
pub fn is_response_to_tribunal_required(application: &Application, viewer: &Viewer) -> bool {
    pending_tribunal_request(application, viewer).is_some()
        && !current_state(application, viewer).is_terminal()
}

/// Returns the state the viewer moves to by opening the application, or
/// `None` if opening it changes nothing.
#[must_use]
pub fn view_transition(application: &Application, viewer: &Viewer) -> Option<ApplicationState> {
    current_state(application, viewer).on(StateEvent::Viewed {
        response_owed: application.response_required_for(viewer.party),
    })
}

/// Applies a view event, returning the updated application if the viewer's
/// state changed.
///
/// Viewers without an identity have no state to update.
#[must_use]
pub fn record_view(application: &Application, viewer: &Viewer) -> Option<Application> {
    let id: &str = viewer.id()?;
    let next: ApplicationState = view_transition(application, viewer)?;
    Some(application.with_view_state(id, next))
}

/// Returns the identities of the members of a party on the case.
#[must_use]
pub fn party_members(case: &CaseSnapshot, party: Party) -> Vec<&str> {
    match party {
        Party::Claimant => case.claimant_id.as_deref().into_iter().collect(),
        Party::Respondent => case
            .respondents
            .iter()
            .filter_map(|r| r.idam_id.as_deref())
            .collect(),
        Party::Admin => Vec::new(),
    }
}

fn apply_event_to_party(
    application: Application,
    case: &CaseSnapshot,
    party: Party,
    event: StateEvent,
) -> Application {
    party_members(case, party)
        .into_iter()
        .fold(application, |app, member| {
            let viewer: Viewer = Viewer::new(member, party);
            match current_state(&app, &viewer).on(event) {
                Some(next) => app.with_view_state(member, next),
                None => app,
            }
        })
}

/// Appends a tribunal response and marks every notified party member's
/// state as `Updated`.
///
/// A response that requires a party to respond also sets that party's
/// response flag.
#[must_use]
pub fn record_admin_response(
    application: &Application,
    response: Response,
    case: &CaseSnapshot,
) -> Application {
    let mut updated: Application = application.clone();

    if response.requests_response_from(Party::Claimant) {
        updated.claimant_response_required = Some(YesOrNo::Yes);
    }
    if response.requests_response_from(Party::Respondent) {
        updated.respondent_response_required = Some(YesOrNo::Yes);
    }

    let notified: Vec<Party> = [Party::Claimant, Party::Respondent]
        .into_iter()
        .filter(|party| response.notifies(*party))
        .collect();
    updated.responses.push(response);

    notified.into_iter().fold(updated, |app, party| {
        apply_event_to_party(app, case, party, StateEvent::TribunalUpdated)
    })
}

/// Appends a tribunal decision and updates every notified party member.
///
/// A decision that closes the application moves them to `Completed` and
/// marks the application closed; any other decision moves them to `Updated`.
#[must_use]
pub fn record_admin_decision(
    application: &Application,
    decision: AdminDecision,
    case: &CaseSnapshot,
    closes_application: bool,
) -> Application {
    let event: StateEvent = if closes_application {
        StateEvent::Decided
    } else {
        StateEvent::TribunalUpdated
    };

    let mut updated: Application = application.clone();
    let notified: Vec<Party> = [Party::Claimant, Party::Respondent]
        .into_iter()
        .filter(|party| decision.notifies(*party))
        .collect();
    updated.decisions.push(decision);
    if closes_application {
        updated.status = Some(String::from(CLOSED_STATUS));
    }

    notified.into_iter().fold(updated, |app, party| {
        apply_event_to_party(app, case, party, event)
    })
}

/// Returns true if any member of `party` still has an unanswered tribunal
/// request on the application.
#[must_use]
pub fn party_has_pending_request(
    application: &Application,
    case: &CaseSnapshot,
    party: Party,
) -> bool {
    party_members(case, party)
        .into_iter()
        .any(|member| pending_tribunal_request(application, &Viewer::new(member, party)).is_some())
}

/// Appends the viewer's own response and moves them to `WaitingForTribunal`.
///
/// The party's response flag is cleared once no member of the party has an
/// unanswered tribunal request left; a co-respondent who has not yet
/// answered keeps it set.
#[must_use]
pub fn record_party_response(
    application: &Application,
    response: Response,
    viewer: &Viewer,
    case: &CaseSnapshot,
) -> Application {
    let mut updated: Application = application.clone();
    updated.responses.push(response);

    if !party_has_pending_request(&updated, case, viewer.party) {
        match viewer.party {
            Party::Claimant => updated.claimant_response_required = Some(YesOrNo::No),
            Party::Respondent => updated.respondent_response_required = Some(YesOrNo::No),
            Party::Admin => {}
        }
    }

    let Some(id) = viewer.id() else {
        return updated;
    };
    match current_state(&updated, viewer).on(StateEvent::PartyResponded) {
        Some(next) => updated.with_view_state(id, next),
        None => updated,
    }
}
