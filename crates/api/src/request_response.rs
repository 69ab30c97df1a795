// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use et3_respond::ApplicationSummary;
use et3_respond_domain::{ApplicationState, DocumentRef, YesOrNo};
use serde::{Deserialize, Serialize};

/// The three application lists shown to a respondent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationListsResponse {
    /// Applications the viewer raised.
    pub your_applications: Vec<ApplicationSummary>,
    /// Claimant applications shared with the viewer.
    pub claimant_applications: Vec<ApplicationSummary>,
    /// Applications from other respondents shared with the viewer.
    pub other_respondents_applications: Vec<ApplicationSummary>,
}

/// API response for a successful application submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitApplicationResponse {
    /// The id of the stored application.
    pub application_id: String,
    /// The date the other party must respond by, if they were copied.
    pub due_date: Option<String>,
    /// A success message.
    pub message: String,
}

/// API request to respond to an application.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RespondToApplicationRequest {
    pub application_id: String,
    pub response: Option<String>,
    #[serde(default)]
    pub supporting_material: Vec<DocumentRef>,
    pub copy_to_other_party: Option<YesOrNo>,
}

/// API response for a successful response submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RespondToApplicationResponse {
    pub application_id: String,
    /// The responder's state after responding.
    pub state: ApplicationState,
    /// A success message.
    pub message: String,
}
