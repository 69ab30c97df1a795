// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use et3_respond::record_admin_response;
use et3_respond_domain::{
    Application, ApplicationDraft, ApplicationState, CaseSnapshot, CurrentUser, Party,
    PartySelection, Response, YesOrNo,
};
use time::macros::date;

use super::helpers::{
    CASE_ID, CLAIMANT_ID, OTHER_RESPONDENT_ID, POSTPONE, RESPONDENT_ID, StatusUpdate, WITNESS,
    claimant_user, create_single_respondent_case, create_test_case, create_test_service,
    other_respondent_user, respondent_user, shared_claimant_application,
};
use crate::{ApiError, RespondToApplicationRequest, RowValue};

fn create_test_draft(copy: Option<YesOrNo>) -> ApplicationDraft {
    ApplicationDraft {
        type_code: String::from(POSTPONE),
        details: Some(String::from("Our witness is unavailable")),
        document_upload: None,
        copy_to_other_party: copy,
        copy_to_other_party_text: None,
    }
}

fn broadcast() -> Response {
    let mut response: Response = Response::new(Party::Admin, None, "2026-03-06");
    response.select_party_notify = Some(PartySelection::BothParties);
    response.enter_response_title = Some(String::from("Listing update"));
    response
}

#[tokio::test]
async fn test_viewing_a_new_application_records_viewed() {
    let application: Application = shared_claimant_application("app-1")
        .with_view_state(RESPONDENT_ID, ApplicationState::NotViewed);
    let service = create_test_service(create_test_case(vec![application]));

    let page = service
        .application_details(CASE_ID, &respondent_user(), "app-1")
        .await
        .unwrap();

    assert_eq!(page.application_type, "Amend my claim");
    assert_eq!(page.state, ApplicationState::Viewed);
    assert_eq!(page.state_label, "Viewed");
    assert_eq!(
        service.case_api().status_updates(),
        vec![StatusUpdate {
            application_id: String::from("app-1"),
            user_id: String::from(RESPONDENT_ID),
            state: ApplicationState::Viewed,
        }]
    );
    assert_eq!(
        service
            .case_api()
            .case(CASE_ID)
            .application("app-1")
            .unwrap()
            .view_state_for(RESPONDENT_ID),
        Some(ApplicationState::Viewed)
    );
}

#[tokio::test]
async fn test_viewing_an_update_with_response_owed_is_in_progress() {
    let mut application: Application = shared_claimant_application("app-1")
        .with_view_state(RESPONDENT_ID, ApplicationState::Updated);
    application.respondent_response_required = Some(YesOrNo::Yes);
    let service = create_test_service(create_test_case(vec![application]));

    let page = service
        .application_details(CASE_ID, &respondent_user(), "app-1")
        .await
        .unwrap();
    assert_eq!(page.state, ApplicationState::InProgress);
}

#[tokio::test]
async fn test_viewing_without_transition_pushes_nothing() {
    let service = create_test_service(create_test_case(vec![shared_claimant_application(
        "app-1",
    )]));

    let page = service
        .application_details(CASE_ID, &respondent_user(), "app-1")
        .await
        .unwrap();
    assert_eq!(page.state, ApplicationState::NotStartedYet);
    assert!(service.case_api().status_updates().is_empty());
}

#[tokio::test]
async fn test_status_push_failure_still_renders_page() {
    let application: Application = shared_claimant_application("app-1")
        .with_view_state(RESPONDENT_ID, ApplicationState::NotViewed);
    let service = crate::RespondService::new(
        super::helpers::InMemoryCaseApi::with_case(create_test_case(vec![application]))
            .failing_status_updates(),
        crate::TranslationTable::english(),
        crate::DocumentLinkBase::default(),
    );

    let page = service
        .application_details(CASE_ID, &respondent_user(), "app-1")
        .await
        .unwrap();
    assert_eq!(page.state, ApplicationState::Viewed);
    assert_eq!(
        service
            .case_api()
            .case(CASE_ID)
            .application("app-1")
            .unwrap()
            .view_state_for(RESPONDENT_ID),
        Some(ApplicationState::NotViewed)
    );
}

#[tokio::test]
async fn test_hidden_and_missing_applications_are_not_found() {
    let mut private: Application = shared_claimant_application("private");
    private.copy_to_other_party = Some(YesOrNo::No);
    let service = create_test_service(create_test_case(vec![private]));

    for id in ["private", "missing"] {
        let result = service
            .application_details(CASE_ID, &respondent_user(), id)
            .await;
        assert!(
            matches!(result, Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Application"),
            "{id}: {result:?}"
        );
    }

    let result = service
        .application_details("no-such-case", &respondent_user(), "private")
        .await;
    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Case"
    ));
}

#[tokio::test]
async fn test_details_show_only_disclosed_responses() {
    let mut application: Application = shared_claimant_application("app-1");
    let mut early: Response = Response::new(Party::Claimant, Some(CLAIMANT_ID), "2026-03-02");
    early.response = Some(String::from("Before the broadcast"));
    let mut late: Response = Response::new(Party::Claimant, Some(CLAIMANT_ID), "2026-03-09");
    late.response = Some(String::from("After the broadcast"));
    late.copy_to_other_party = Some(YesOrNo::No);
    application.responses = vec![early, broadcast(), late];
    let service = create_test_service(create_test_case(vec![application]));

    let page = service
        .application_details(CASE_ID, &respondent_user(), "app-1")
        .await
        .unwrap();

    assert_eq!(page.responses.len(), 2);
    assert_eq!(
        page.responses[0][2].value,
        RowValue::Text {
            text: String::from("Before the broadcast")
        }
    );
    assert_eq!(page.responses[1][0].key, "Response");
}

#[tokio::test]
async fn test_notifications_for_respondent() {
    let service = create_test_service(create_test_case(vec![shared_claimant_application(
        "app-1",
    )]));

    let notifications = service
        .notifications(CASE_ID, &respondent_user())
        .await
        .unwrap();
    assert!(notifications.requests.is_empty());
    assert_eq!(notifications.submissions.len(), 1);
    assert_eq!(
        notifications.submissions[0].submitter_name.as_deref(),
        Some("Jo Bloggs")
    );
}

#[tokio::test]
async fn test_list_applications_splits_by_creator() {
    let mut witness: Application =
        Application::new("w-1", Party::Respondent, Some(RESPONDENT_ID), WITNESS, "2026-03-03");
    witness.details = Some(String::from("Please order Mr Smith to attend"));
    let service = create_test_service(create_test_case(vec![
        shared_claimant_application("app-1"),
        witness,
    ]));

    let lists = service
        .list_applications(CASE_ID, &respondent_user())
        .await
        .unwrap();
    assert_eq!(lists.your_applications.len(), 1);
    assert_eq!(lists.your_applications[0].id, "w-1");
    assert_eq!(lists.claimant_applications.len(), 1);
    assert!(lists.other_respondents_applications.is_empty());

    let lists = service
        .list_applications(CASE_ID, &claimant_user())
        .await
        .unwrap();
    assert_eq!(lists.your_applications.len(), 1);
    assert!(lists.other_respondents_applications.is_empty());
}

#[tokio::test]
async fn test_submit_application_stores_with_due_date() {
    let service = create_test_service(create_test_case(Vec::new()));

    let submitted = service
        .submit_application(
            CASE_ID,
            &respondent_user(),
            &create_test_draft(Some(YesOrNo::Yes)),
            date!(2026 - 03 - 27),
        )
        .await
        .unwrap();

    assert_eq!(submitted.due_date.as_deref(), Some("2026-04-03"));
    let stored = service.case_api().case(CASE_ID);
    let application: &Application = stored.application(&submitted.application_id).unwrap();
    assert_eq!(application.applicant_id.as_deref(), Some(RESPONDENT_ID));
    assert_eq!(
        application.view_state_for(RESPONDENT_ID),
        Some(ApplicationState::InProgress)
    );
}

#[tokio::test]
async fn test_submit_application_rejects_bad_input() {
    let service = create_test_service(create_test_case(Vec::new()));

    let result = service
        .submit_application(
            CASE_ID,
            &respondent_user(),
            &create_test_draft(None),
            date!(2026 - 03 - 27),
        )
        .await;
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "copy_to_other_party"
    ));

    let result = service
        .submit_application(
            CASE_ID,
            &claimant_user(),
            &create_test_draft(Some(YesOrNo::Yes)),
            date!(2026 - 03 - 27),
        )
        .await;
    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));

    let stranger: CurrentUser = CurrentUser::new(Some(String::from("stranger")), Party::Respondent);
    let result = service
        .submit_application(
            CASE_ID,
            &stranger,
            &create_test_draft(Some(YesOrNo::Yes)),
            date!(2026 - 03 - 27),
        )
        .await;
    assert!(matches!(result, Err(ApiError::AuthenticationFailed { .. })));

    assert!(service.case_api().case(CASE_ID).applications.is_empty());
}

#[tokio::test]
async fn test_respond_to_application_waits_for_tribunal() {
    let service = create_test_service(create_test_case(vec![shared_claimant_application(
        "app-1",
    )]));

    let request: RespondToApplicationRequest = RespondToApplicationRequest {
        application_id: String::from("app-1"),
        response: Some(String::from("We oppose the amendment")),
        copy_to_other_party: Some(YesOrNo::Yes),
        ..RespondToApplicationRequest::default()
    };
    let responded = service
        .respond_to_application(CASE_ID, &respondent_user(), request, date!(2026 - 03 - 28))
        .await
        .unwrap();

    assert_eq!(responded.state, ApplicationState::WaitingForTribunal);
    let stored = service.case_api().case(CASE_ID);
    let application: &Application = stored.application("app-1").unwrap();
    assert_eq!(application.responses.len(), 1);
    assert_eq!(
        application.view_state_for(RESPONDENT_ID),
        Some(ApplicationState::WaitingForTribunal)
    );

    let notifications = service
        .notifications(CASE_ID, &respondent_user())
        .await
        .unwrap();
    assert!(notifications.submissions.is_empty());
}

fn tribunal_request() -> Response {
    let mut request: Response = broadcast();
    request.is_response_required = Some(YesOrNo::Yes);
    request.select_party_respond = Some(PartySelection::RespondentOnly);
    request
}

fn respond_request() -> RespondToApplicationRequest {
    RespondToApplicationRequest {
        application_id: String::from("app-1"),
        response: Some(String::from("Our witness list is attached")),
        copy_to_other_party: Some(YesOrNo::Yes),
        ..RespondToApplicationRequest::default()
    }
}

#[tokio::test]
async fn test_answering_tribunal_request_clears_stored_flag() {
    let mut application: Application = shared_claimant_application("app-1");
    application.responses.push(tribunal_request());
    application.respondent_response_required = Some(YesOrNo::Yes);
    let case: CaseSnapshot = create_single_respondent_case(vec![application]);
    let service = create_test_service(case.clone());

    let responded = service
        .respond_to_application(
            CASE_ID,
            &respondent_user(),
            respond_request(),
            date!(2026 - 03 - 28),
        )
        .await
        .unwrap();
    assert_eq!(responded.state, ApplicationState::WaitingForTribunal);

    let stored: Application = service
        .case_api()
        .case(CASE_ID)
        .application("app-1")
        .cloned()
        .unwrap();
    assert_eq!(stored.respondent_response_required, Some(YesOrNo::No));

    // An FYI update afterwards must not put the respondent back in progress.
    let updated: Application = record_admin_response(&stored, broadcast(), &case);
    assert_eq!(
        updated.view_state_for(RESPONDENT_ID),
        Some(ApplicationState::Updated)
    );
    service.case_api().replace_application(CASE_ID, updated);

    let page = service
        .application_details(CASE_ID, &respondent_user(), "app-1")
        .await
        .unwrap();
    assert_eq!(page.state, ApplicationState::WaitingForTribunal);
}

#[tokio::test]
async fn test_flag_stays_set_until_every_respondent_answers() {
    let mut application: Application = shared_claimant_application("app-1");
    application.responses.push(tribunal_request());
    application.respondent_response_required = Some(YesOrNo::Yes);
    let service = create_test_service(create_test_case(vec![application]));

    service
        .respond_to_application(
            CASE_ID,
            &respondent_user(),
            respond_request(),
            date!(2026 - 03 - 28),
        )
        .await
        .unwrap();
    let stored = service.case_api().case(CASE_ID);
    assert_eq!(
        stored.application("app-1").unwrap().respondent_response_required,
        Some(YesOrNo::Yes)
    );

    let notifications = service
        .notifications(CASE_ID, &other_respondent_user())
        .await
        .unwrap();
    assert_eq!(notifications.requests.len(), 1);

    service
        .respond_to_application(
            CASE_ID,
            &other_respondent_user(),
            respond_request(),
            date!(2026 - 03 - 29),
        )
        .await
        .unwrap();
    let stored = service.case_api().case(CASE_ID);
    let application: &Application = stored.application("app-1").unwrap();
    assert_eq!(application.respondent_response_required, Some(YesOrNo::No));
    assert_eq!(
        application.view_state_for(OTHER_RESPONDENT_ID),
        Some(ApplicationState::WaitingForTribunal)
    );
}

#[tokio::test]
async fn test_cannot_respond_to_hidden_application() {
    let mut private: Application = shared_claimant_application("private");
    private.copy_to_other_party = Some(YesOrNo::No);
    let service = create_test_service(create_test_case(vec![private]));

    let request: RespondToApplicationRequest = RespondToApplicationRequest {
        application_id: String::from("private"),
        response: Some(String::from("Noted")),
        copy_to_other_party: Some(YesOrNo::Yes),
        ..RespondToApplicationRequest::default()
    };
    let result = service
        .respond_to_application(CASE_ID, &respondent_user(), request, date!(2026 - 03 - 28))
        .await;
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}
