// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Builds the records a respondent submits: new applications and responses
//! to existing ones.

use et3_respond_domain::{
    Application, ApplicationDraft, ApplicationState, ApplicationTypeDescriptor, DocumentRef,
    Party, PartyViewState, Response, Viewer, YesOrNo, is_yes, response_due_date,
    validate_application_draft,
};
use time::Date;

use crate::error::CoreError;
use crate::visibility::is_excluded_from_sharing;

/// Status label of a newly submitted application.
pub const OPEN_STATUS: &str = "Open";

/// Builds a new application from a validated draft.
///
/// The applicant starts `InProgress`. Shared category A and B applications
/// get a due date for the other party's response.
///
/// # Arguments
///
/// * `draft` - The draft from the application journey
/// * `viewer` - The respondent submitting it
/// * `application_id` - The id to assign
/// * `submitted` - The submission date
///
/// # Errors
///
/// Returns an error if:
/// - The viewer is not a respondent, or has no identity
/// - The draft fails validation
pub fn build_application(
    draft: &ApplicationDraft,
    viewer: &Viewer,
    application_id: &str,
    submitted: Date,
) -> Result<Application, CoreError> {
    const ACTION: &str = "submit an application";

    if viewer.party != Party::Respondent {
        return Err(CoreError::NotPermitted {
            action: ACTION,
            party: viewer.party,
        });
    }
    let Some(applicant_id) = viewer.id() else {
        return Err(CoreError::MissingIdentity { action: ACTION });
    };

    let descriptor: &ApplicationTypeDescriptor = validate_application_draft(draft)?;

    let due_date: Option<String> =
        if descriptor.requires_copy_step() && is_yes(draft.copy_to_other_party) {
            Some(response_due_date(submitted)?.to_string())
        } else {
            None
        };

    let mut application: Application = Application::new(
        application_id,
        Party::Respondent,
        Some(applicant_id),
        descriptor.code,
        &submitted.to_string(),
    );
    application.details = draft.details.clone();
    application.document_upload = draft.document_upload.clone();
    application.copy_to_other_party = draft.copy_to_other_party;
    application.copy_to_other_party_text = draft.copy_to_other_party_text.clone();
    application.status = Some(String::from(OPEN_STATUS));
    application.due_date = due_date;
    application.view_states.push(PartyViewState {
        user_id: applicant_id.to_string(),
        state: ApplicationState::InProgress,
    });

    Ok(application)
}

/// What a party typed into the "respond to an application" page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseInput {
    pub response: Option<String>,
    pub supporting_material: Vec<DocumentRef>,
    pub copy_to_other_party: Option<YesOrNo>,
}

/// Builds the viewer's response to an application.
///
/// # Errors
///
/// Returns an error if:
/// - The viewer is the tribunal, or has no identity
/// - The response has neither text nor supporting material
/// - The application may be shared and no copy answer was given
pub fn build_party_response(
    application: &Application,
    input: ResponseInput,
    viewer: &Viewer,
    responded: Date,
) -> Result<Response, CoreError> {
    const ACTION: &str = "respond to an application";

    if viewer.is_admin() {
        return Err(CoreError::NotPermitted {
            action: ACTION,
            party: viewer.party,
        });
    }
    if viewer.id().is_none() {
        return Err(CoreError::MissingIdentity { action: ACTION });
    }

    let has_text: bool = input
        .response
        .as_deref()
        .is_some_and(|t| !t.trim().is_empty());
    if !has_text && input.supporting_material.is_empty() {
        return Err(CoreError::EmptyResponse);
    }

    if input.copy_to_other_party.is_none() && !is_excluded_from_sharing(application) {
        return Err(CoreError::MissingResponseCopyAnswer);
    }

    let mut response: Response = Response::new(viewer.party, viewer.id(), &responded.to_string());
    response.response = input.response;
    response.supporting_material = input.supporting_material;
    response.copy_to_other_party = input.copy_to_other_party;
    Ok(response)
}
