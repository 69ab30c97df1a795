// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::collections::HashMap;
use std::sync::Mutex;

use et3_respond_domain::{
    Application, ApplicationState, CaseSnapshot, CurrentUser, Party, RespondentParty, Response,
    ResponseFlags, YesOrNo,
};

use crate::{CaseApi, DocumentLinkBase, RespondService, TranslationTable, UpstreamError};

pub const CASE_ID: &str = "1700000000000001";
pub const CLAIMANT_ID: &str = "claimant-idam";
pub const RESPONDENT_ID: &str = "resp-idam-1";
pub const OTHER_RESPONDENT_ID: &str = "resp-idam-2";

pub const AMEND: &str = "Amend response";
pub const POSTPONE: &str = "Postpone a hearing";
pub const WITNESS: &str = "Order a witness to attend to give evidence";

/// A status update as seen by the case store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub application_id: String,
    pub user_id: String,
    pub state: ApplicationState,
}

/// A case store held in memory.
pub struct InMemoryCaseApi {
    cases: Mutex<HashMap<String, CaseSnapshot>>,
    status_updates: Mutex<Vec<StatusUpdate>>,
    fail_status_updates: bool,
}

impl InMemoryCaseApi {
    pub fn with_case(case: CaseSnapshot) -> Self {
        let mut cases: HashMap<String, CaseSnapshot> = HashMap::new();
        cases.insert(case.id.clone(), case);
        Self {
            cases: Mutex::new(cases),
            status_updates: Mutex::new(Vec::new()),
            fail_status_updates: false,
        }
    }

    pub fn failing_status_updates(mut self) -> Self {
        self.fail_status_updates = true;
        self
    }

    pub fn case(&self, case_id: &str) -> CaseSnapshot {
        self.cases.lock().unwrap().get(case_id).cloned().unwrap()
    }

    /// Overwrites a stored application, as a caseworker update would.
    pub fn replace_application(&self, case_id: &str, application: Application) {
        let mut cases = self.cases.lock().unwrap();
        let stored: &mut Application = cases
            .get_mut(case_id)
            .and_then(|case| case.applications.iter_mut().find(|a| a.id == application.id))
            .unwrap();
        *stored = application;
    }

    pub fn status_updates(&self) -> Vec<StatusUpdate> {
        self.status_updates.lock().unwrap().clone()
    }
}

impl CaseApi for InMemoryCaseApi {
    async fn fetch_case(&self, case_id: &str) -> Result<CaseSnapshot, UpstreamError> {
        self.cases
            .lock()
            .unwrap()
            .get(case_id)
            .cloned()
            .ok_or_else(|| UpstreamError::NotFound {
                case_id: case_id.to_string(),
            })
    }

    async fn submit_application(
        &self,
        case_id: &str,
        application: Application,
    ) -> Result<Application, UpstreamError> {
        let mut cases = self.cases.lock().unwrap();
        let case: &mut CaseSnapshot =
            cases.get_mut(case_id).ok_or_else(|| UpstreamError::NotFound {
                case_id: case_id.to_string(),
            })?;
        case.applications.push(application.clone());
        Ok(application)
    }

    async fn submit_response(
        &self,
        case_id: &str,
        application_id: &str,
        response: Response,
        flags: ResponseFlags,
    ) -> Result<(), UpstreamError> {
        let mut cases = self.cases.lock().unwrap();
        let application: &mut Application = cases
            .get_mut(case_id)
            .and_then(|case| case.applications.iter_mut().find(|a| a.id == application_id))
            .ok_or_else(|| UpstreamError::Rejected {
                message: format!("no application {application_id}"),
            })?;
        application.responses.push(response);
        application.set_response_flags(flags);
        Ok(())
    }

    async fn update_application_status(
        &self,
        case_id: &str,
        application_id: &str,
        user_id: &str,
        state: ApplicationState,
    ) -> Result<(), UpstreamError> {
        if self.fail_status_updates {
            return Err(UpstreamError::Unavailable(String::from("timed out")));
        }
        let mut cases = self.cases.lock().unwrap();
        if let Some(application) = cases
            .get_mut(case_id)
            .and_then(|case| case.applications.iter_mut().find(|a| a.id == application_id))
        {
            *application = application.with_view_state(user_id, state);
        }
        self.status_updates.lock().unwrap().push(StatusUpdate {
            application_id: application_id.to_string(),
            user_id: user_id.to_string(),
            state,
        });
        Ok(())
    }
}

pub fn create_test_service(case: CaseSnapshot) -> RespondService<InMemoryCaseApi> {
    RespondService::new(
        InMemoryCaseApi::with_case(case),
        TranslationTable::english(),
        DocumentLinkBase::default(),
    )
}

pub fn create_test_case(applications: Vec<Application>) -> CaseSnapshot {
    CaseSnapshot {
        id: String::from(CASE_ID),
        claimant_id: Some(String::from(CLAIMANT_ID)),
        claimant_name: Some(String::from("Jo Bloggs")),
        respondents: vec![
            RespondentParty {
                id: String::from("r-1"),
                idam_id: Some(String::from(RESPONDENT_ID)),
                name: String::from("Acme Ltd"),
            },
            RespondentParty {
                id: String::from("r-2"),
                idam_id: Some(String::from(OTHER_RESPONDENT_ID)),
                name: String::from("Widget plc"),
            },
        ],
        applications,
        stored_applications: Vec::new(),
    }
}

/// A case with the claimant and a single respondent.
pub fn create_single_respondent_case(applications: Vec<Application>) -> CaseSnapshot {
    let mut case: CaseSnapshot = create_test_case(applications);
    case.respondents.truncate(1);
    case
}

pub fn respondent_user() -> CurrentUser {
    CurrentUser::new(Some(String::from(RESPONDENT_ID)), Party::Respondent)
}

pub fn other_respondent_user() -> CurrentUser {
    CurrentUser::new(Some(String::from(OTHER_RESPONDENT_ID)), Party::Respondent)
}

pub fn claimant_user() -> CurrentUser {
    CurrentUser::new(Some(String::from(CLAIMANT_ID)), Party::Claimant)
}

pub fn shared_claimant_application(id: &str) -> Application {
    let mut application: Application =
        Application::new(id, Party::Claimant, Some(CLAIMANT_ID), AMEND, "2026-03-01");
    application.details = Some(String::from("I want to amend my claim"));
    application.copy_to_other_party = Some(YesOrNo::Yes);
    application
}
