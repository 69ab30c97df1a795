// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Page operations for the respondent journey.
//!
//! Each operation loads one case snapshot, runs the pure rules from the core
//! crate against it, and talks to the case store only to write results back.

use et3_respond::{
    Notifications, ResponseInput, VisibleApplication, build_application, build_party_response,
    claimant_applications, collect_notifications, current_state, find_visible_application,
    other_respondents_applications, record_party_response, record_view, your_applications,
};
use et3_respond_domain::{
    Application, ApplicationDraft, ApplicationState, CaseSnapshot, CurrentUser, Response, Viewer,
    resolve_viewer, validate_applicant,
};
use time::Date;
use tracing::{debug, info, warn};

use crate::case_api::CaseApi;
use crate::details::{ApplicationDetailsPage, DocumentLinkBase, details_page};
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    ApplicationListsResponse, RespondToApplicationRequest, RespondToApplicationResponse,
    SubmitApplicationResponse,
};
use crate::translations::TranslationTable;

fn application_not_found(application_id: &str) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Application"),
        message: format!("Application {application_id} does not exist on this case"),
    }
}

fn new_application_id() -> String {
    format!("{:032x}", rand::random::<u128>())
}

/// Serves the respondent pages for cases held by a [`CaseApi`].
pub struct RespondService<C: CaseApi> {
    case_api: C,
    translations: TranslationTable,
    links: DocumentLinkBase,
}

// The case store decides whether its futures are Send.
#[allow(clippy::future_not_send)]
impl<C: CaseApi> RespondService<C> {
    /// Creates a new service.
    ///
    /// # Arguments
    ///
    /// * `case_api` - The case store
    /// * `translations` - Labels for rendered rows
    /// * `links` - Where document links point
    #[must_use]
    pub const fn new(case_api: C, translations: TranslationTable, links: DocumentLinkBase) -> Self {
        Self {
            case_api,
            translations,
            links,
        }
    }

    #[must_use]
    pub const fn case_api(&self) -> &C {
        &self.case_api
    }

    async fn load(
        &self,
        case_id: &str,
        user: &CurrentUser,
    ) -> Result<(CaseSnapshot, Viewer), ApiError> {
        let case: CaseSnapshot = self.case_api.fetch_case(case_id).await?;
        let viewer: Viewer = resolve_viewer(user, &case);
        if viewer.id().is_none() && user.id.is_some() {
            debug!(
                case_id,
                party = %viewer.party,
                "User is not on the case roster; treating as anonymous"
            );
        }
        Ok((case, viewer))
    }

    /// Writes the viewer's new state back to the case store.
    ///
    /// A failure is logged and otherwise ignored: the page is still rendered
    /// from the snapshot already loaded.
    async fn push_state(
        &self,
        case_id: &str,
        application_id: &str,
        viewer: &Viewer,
        state: ApplicationState,
    ) {
        let Some(user_id) = viewer.id() else {
            return;
        };
        if let Err(err) = self
            .case_api
            .update_application_status(case_id, application_id, user_id, state)
            .await
        {
            warn!(
                case_id,
                application_id,
                state = %state,
                error = %err,
                "Failed to record application state"
            );
        }
    }

    /// Renders one application for the current user, recording that they
    /// viewed it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The case cannot be loaded
    /// - The application does not exist or is not visible to the user
    pub async fn application_details(
        &self,
        case_id: &str,
        user: &CurrentUser,
        application_id: &str,
    ) -> Result<ApplicationDetailsPage, ApiError> {
        let (case, viewer) = self.load(case_id, user).await?;

        let Some(visible) = find_visible_application(&case, application_id, &viewer) else {
            debug!(case_id, application_id, party = %viewer.party, "Application not visible");
            return Err(application_not_found(application_id));
        };
        let application: &Application = visible.application;

        let state: ApplicationState = match record_view(application, &viewer) {
            Some(viewed) => {
                let next: ApplicationState = current_state(&viewed, &viewer);
                self.push_state(case_id, application_id, &viewer, next).await;
                next
            }
            None => current_state(application, &viewer),
        };

        Ok(details_page(&visible, state, &self.translations, &self.links))
    }

    /// Builds the case overview banners for the current user.
    ///
    /// # Errors
    ///
    /// Returns an error if the case cannot be loaded.
    pub async fn notifications(
        &self,
        case_id: &str,
        user: &CurrentUser,
    ) -> Result<Notifications, ApiError> {
        let (case, viewer) = self.load(case_id, user).await?;
        Ok(collect_notifications(&case, &viewer))
    }

    /// Lists the applications the current user may see, split by who raised
    /// them.
    ///
    /// # Errors
    ///
    /// Returns an error if the case cannot be loaded.
    pub async fn list_applications(
        &self,
        case_id: &str,
        user: &CurrentUser,
    ) -> Result<ApplicationListsResponse, ApiError> {
        let (case, viewer) = self.load(case_id, user).await?;
        Ok(ApplicationListsResponse {
            your_applications: your_applications(&case, &viewer),
            claimant_applications: claimant_applications(&case, &viewer),
            other_respondents_applications: other_respondents_applications(&case, &viewer),
        })
    }

    /// Validates a draft and submits it as a new application.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The case cannot be loaded
    /// - The user is not a respondent on the case
    /// - The draft fails validation
    /// - The case store rejects the application
    pub async fn submit_application(
        &self,
        case_id: &str,
        user: &CurrentUser,
        draft: &ApplicationDraft,
        today: Date,
    ) -> Result<SubmitApplicationResponse, ApiError> {
        let (case, viewer) = self.load(case_id, user).await?;

        let application: Application =
            build_application(draft, &viewer, &new_application_id(), today)
                .map_err(translate_core_error)?;
        validate_applicant(&application, &case).map_err(translate_domain_error)?;

        let stored: Application = self
            .case_api
            .submit_application(case_id, application)
            .await?;

        info!(
            case_id,
            application_id = %stored.id,
            application_type = %stored.type_code,
            due_date = ?stored.due_date,
            "Submitted application"
        );

        Ok(SubmitApplicationResponse {
            message: format!("Submitted '{}' application", stored.type_code),
            application_id: stored.id,
            due_date: stored.due_date,
        })
    }

    /// Records the current user's response to an application they can see.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The case cannot be loaded
    /// - The application does not exist or is not visible to the user
    /// - The response is incomplete, or the user may not respond
    /// - The case store rejects the response
    pub async fn respond_to_application(
        &self,
        case_id: &str,
        user: &CurrentUser,
        request: RespondToApplicationRequest,
        today: Date,
    ) -> Result<RespondToApplicationResponse, ApiError> {
        let (case, viewer) = self.load(case_id, user).await?;

        let Some(VisibleApplication { application, .. }) =
            find_visible_application(&case, &request.application_id, &viewer)
        else {
            return Err(application_not_found(&request.application_id));
        };

        let input: ResponseInput = ResponseInput {
            response: request.response,
            supporting_material: request.supporting_material,
            copy_to_other_party: request.copy_to_other_party,
        };
        let response: Response =
            build_party_response(application, input, &viewer, today).map_err(translate_core_error)?;

        let updated: Application =
            record_party_response(application, response.clone(), &viewer, &case);
        self.case_api
            .submit_response(case_id, &application.id, response, updated.response_flags())
            .await?;

        let state: ApplicationState = current_state(&updated, &viewer);
        self.push_state(case_id, &application.id, &viewer, state).await;

        info!(
            case_id,
            application_id = %application.id,
            party = %viewer.party,
            "Recorded response"
        );

        Ok(RespondToApplicationResponse {
            application_id: application.id.clone(),
            state,
            message: format!("Response to '{}' recorded", application.type_code),
        })
    }
}
