// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::application_state::ApplicationState;
use crate::party::{Party, PartySelection, YesOrNo, is_yes, selection_includes};
use serde::{Deserialize, Serialize};

/// A reference to a document held by the document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    /// The document's metadata URL.
    pub document_url: String,
    /// The document's binary URL.
    pub document_binary_url: String,
    /// The original file name.
    pub document_filename: String,
}

impl DocumentRef {
    #[must_use]
    pub fn new(document_url: &str, document_filename: &str) -> Self {
        Self {
            document_url: document_url.to_string(),
            document_binary_url: format!("{document_url}/binary"),
            document_filename: document_filename.to_string(),
        }
    }

    /// Returns the document store id: the last path segment of the
    /// document URL.
    #[must_use]
    pub fn id(&self) -> &str {
        self.document_url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default()
    }
}

/// Whether an admin response is a case management order or a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CmoOrRequest {
    #[serde(rename = "Case management order")]
    CaseManagementOrder,
    #[serde(rename = "Request")]
    Request,
}

impl CmoOrRequest {
    /// Returns the translation key for this kind.
    #[must_use]
    pub const fn translation_key(&self) -> &'static str {
        match self {
            Self::CaseManagementOrder => "caseManagementOrder",
            Self::Request => "request",
        }
    }
}

/// One entry in an application's response collection.
///
/// Party responses use only the common fields. Admin responses also carry
/// the tribunal's party selections and order details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub from: Party,
    pub from_id: Option<String>,
    pub date: String,
    pub response: Option<String>,
    #[serde(default)]
    pub supporting_material: Vec<DocumentRef>,
    pub copy_to_other_party: Option<YesOrNo>,
    pub select_party_respond: Option<PartySelection>,
    pub select_party_notify: Option<PartySelection>,
    pub is_response_required: Option<YesOrNo>,
    pub is_cmo_or_request: Option<CmoOrRequest>,
    pub enter_response_title: Option<String>,
    pub additional_information: Option<String>,
    #[serde(default)]
    pub add_document: Vec<DocumentRef>,
    /// Who made the order or request (admin responses only).
    pub made_by: Option<String>,
}

impl Response {
    /// Creates a response with only the sender and date set.
    #[must_use]
    pub fn new(from: Party, from_id: Option<&str>, date: &str) -> Self {
        Self {
            from,
            from_id: from_id.map(str::to_string),
            date: date.to_string(),
            response: None,
            supporting_material: Vec::new(),
            copy_to_other_party: None,
            select_party_respond: None,
            select_party_notify: None,
            is_response_required: None,
            is_cmo_or_request: None,
            enter_response_title: None,
            additional_information: None,
            add_document: Vec::new(),
            made_by: None,
        }
    }

    /// Returns true if the tribunal sent this response.
    #[must_use]
    pub const fn is_from_admin(&self) -> bool {
        matches!(self.from, Party::Admin)
    }

    /// Returns true if this is an admin response that notifies `party`.
    #[must_use]
    pub const fn notifies(&self, party: Party) -> bool {
        self.is_from_admin() && selection_includes(self.select_party_notify, party)
    }

    /// Returns true if this is an admin response asking `party` to respond.
    #[must_use]
    pub const fn requests_response_from(&self, party: Party) -> bool {
        self.is_from_admin()
            && is_yes(self.is_response_required)
            && selection_includes(self.select_party_respond, party)
    }
}

/// A tribunal decision on an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDecision {
    pub date: String,
    pub enter_notification_title: Option<String>,
    pub decision: Option<String>,
    pub decision_made_by: Option<String>,
    pub type_of_decision: Option<String>,
    pub select_party_notify: Option<PartySelection>,
    #[serde(default)]
    pub response_required_doc: Vec<DocumentRef>,
    pub additional_information: Option<String>,
}

impl AdminDecision {
    #[must_use]
    pub fn new(date: &str, select_party_notify: Option<PartySelection>) -> Self {
        Self {
            date: date.to_string(),
            enter_notification_title: None,
            decision: None,
            decision_made_by: None,
            type_of_decision: None,
            select_party_notify,
            response_required_doc: Vec::new(),
            additional_information: None,
        }
    }

    /// Returns true if this decision notifies `party`.
    #[must_use]
    pub const fn notifies(&self, party: Party) -> bool {
        selection_includes(self.select_party_notify, party)
    }
}

/// The lifecycle state of an application for one party member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyViewState {
    #[serde(rename = "userIdamId")]
    pub user_id: String,
    #[serde(rename = "applicationState")]
    pub state: ApplicationState,
}

/// The per-party "response required" flags of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseFlags {
    pub claimant: Option<YesOrNo>,
    pub respondent: Option<YesOrNo>,
}

/// A tribunal application: a request, order or correspondence item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub applicant: Party,
    pub applicant_id: Option<String>,
    /// Key into the application type registry.
    #[serde(rename = "type")]
    pub type_code: String,
    pub date: String,
    pub details: Option<String>,
    pub document_upload: Option<DocumentRef>,
    pub copy_to_other_party: Option<YesOrNo>,
    pub copy_to_other_party_text: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<String>,
    pub respondent_response_required: Option<YesOrNo>,
    pub claimant_response_required: Option<YesOrNo>,
    #[serde(default, rename = "respondCollection")]
    pub responses: Vec<Response>,
    #[serde(default, rename = "adminDecision")]
    pub decisions: Vec<AdminDecision>,
    #[serde(default, rename = "respondentState")]
    pub view_states: Vec<PartyViewState>,
}

impl Application {
    /// Creates an application with no optional fields set.
    #[must_use]
    pub fn new(
        id: &str,
        applicant: Party,
        applicant_id: Option<&str>,
        type_code: &str,
        date: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            applicant,
            applicant_id: applicant_id.map(str::to_string),
            type_code: type_code.to_string(),
            date: date.to_string(),
            details: None,
            document_upload: None,
            copy_to_other_party: None,
            copy_to_other_party_text: None,
            status: None,
            due_date: None,
            respondent_response_required: None,
            claimant_response_required: None,
            responses: Vec::new(),
            decisions: Vec::new(),
            view_states: Vec::new(),
        }
    }

    /// Returns the response-required flag for the given party.
    #[must_use]
    pub const fn response_required_for(&self, party: Party) -> bool {
        match party {
            Party::Claimant => is_yes(self.claimant_response_required),
            Party::Respondent => is_yes(self.respondent_response_required),
            Party::Admin => false,
        }
    }

    /// Returns both parties' response-required flags.
    #[must_use]
    pub const fn response_flags(&self) -> ResponseFlags {
        ResponseFlags {
            claimant: self.claimant_response_required,
            respondent: self.respondent_response_required,
        }
    }

    /// Overwrites both parties' response-required flags.
    pub const fn set_response_flags(&mut self, flags: ResponseFlags) {
        self.claimant_response_required = flags.claimant;
        self.respondent_response_required = flags.respondent;
    }

    /// Returns the stored view state for a party member.
    #[must_use]
    pub fn view_state_for(&self, user_id: &str) -> Option<ApplicationState> {
        self.view_states
            .iter()
            .find(|s| s.user_id == user_id)
            .map(|s| s.state)
    }

    /// Returns a copy of this application with the party member's view state
    /// set, creating the entry if none exists.
    #[must_use]
    pub fn with_view_state(&self, user_id: &str, state: ApplicationState) -> Self {
        let mut updated: Self = self.clone();
        match updated.view_states.iter_mut().find(|s| s.user_id == user_id) {
            Some(existing) => existing.state = state,
            None => updated.view_states.push(PartyViewState {
                user_id: user_id.to_string(),
                state,
            }),
        }
        updated
    }
}

/// An application the viewer saved without submitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredApplication {
    pub id: String,
    pub applicant: Party,
    pub applicant_id: Option<String>,
    #[serde(rename = "type")]
    pub type_code: String,
    pub date: String,
    pub details: Option<String>,
}

/// A respondent on the case roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RespondentParty {
    /// The roster entry id.
    pub id: String,
    /// The identity of the user representing this respondent, once linked.
    pub idam_id: Option<String>,
    /// The respondent's name as it appears on the claim.
    pub name: String,
}

/// The case record loaded once per request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseSnapshot {
    pub id: String,
    pub claimant_id: Option<String>,
    pub claimant_name: Option<String>,
    #[serde(default)]
    pub respondents: Vec<RespondentParty>,
    #[serde(default, rename = "genericTseApplicationCollection")]
    pub applications: Vec<Application>,
    #[serde(default, rename = "tseRespondentStoredCollection")]
    pub stored_applications: Vec<StoredApplication>,
}

impl CaseSnapshot {
    /// Finds the respondent linked to a user identity.
    #[must_use]
    pub fn respondent_by_identity(&self, idam_id: &str) -> Option<&RespondentParty> {
        self.respondents
            .iter()
            .find(|r| r.idam_id.as_deref() == Some(idam_id))
    }

    /// Finds an application by id.
    #[must_use]
    pub fn application(&self, id: &str) -> Option<&Application> {
        self.applications.iter().find(|a| a.id == id)
    }

    /// Returns a copy of this case with one application replaced.
    ///
    /// Applications with other ids are untouched. If no application has the
    /// replacement's id the case is returned unchanged.
    #[must_use]
    pub fn with_application(&self, application: Application) -> Self {
        let mut updated: Self = self.clone();
        if let Some(slot) = updated
            .applications
            .iter_mut()
            .find(|a| a.id == application.id)
        {
            *slot = application;
        }
        updated
    }
}

/// The payload a respondent submits from the application journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDraft {
    #[serde(rename = "type")]
    pub type_code: String,
    pub details: Option<String>,
    pub document_upload: Option<DocumentRef>,
    pub copy_to_other_party: Option<YesOrNo>,
    pub copy_to_other_party_text: Option<String>,
}
