// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use et3_respond_domain::{
    Application, CaseSnapshot, Party, PartySelection, RespondentParty, Response, Viewer, YesOrNo,
};

pub const CLAIMANT_ID: &str = "claimant-idam";
pub const RESPONDENT_ID: &str = "resp-idam-1";
pub const OTHER_RESPONDENT_ID: &str = "resp-idam-2";

pub const AMEND: &str = "Amend response";
pub const POSTPONE: &str = "Postpone a hearing";
pub const WITNESS: &str = "Order a witness to attend to give evidence";

pub fn claimant() -> Viewer {
    Viewer::new(CLAIMANT_ID, Party::Claimant)
}

pub fn respondent() -> Viewer {
    Viewer::new(RESPONDENT_ID, Party::Respondent)
}

pub fn other_respondent() -> Viewer {
    Viewer::new(OTHER_RESPONDENT_ID, Party::Respondent)
}

pub fn tribunal() -> Viewer {
    Viewer::new("caseworker-1", Party::Admin)
}

pub fn create_test_case(applications: Vec<Application>) -> CaseSnapshot {
    CaseSnapshot {
        id: String::from("1700000000000001"),
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

pub fn claimant_application(id: &str, type_code: &str) -> Application {
    Application::new(id, Party::Claimant, Some(CLAIMANT_ID), type_code, "2026-03-01")
}

pub fn respondent_application(id: &str, type_code: &str) -> Application {
    Application::new(
        id,
        Party::Respondent,
        Some(RESPONDENT_ID),
        type_code,
        "2026-03-01",
    )
}

pub fn party_response(from: Party, from_id: &str, copy: Option<YesOrNo>) -> Response {
    let mut response: Response = Response::new(from, Some(from_id), "2026-03-05");
    response.response = Some(String::from("Our reply"));
    response.copy_to_other_party = copy;
    response
}

pub fn admin_response(notify: Option<PartySelection>) -> Response {
    let mut response: Response = Response::new(Party::Admin, None, "2026-03-06");
    response.select_party_notify = notify;
    response.enter_response_title = Some(String::from("Tribunal update"));
    response
}

pub fn admin_request(respond: PartySelection, notify: PartySelection) -> Response {
    let mut response: Response = admin_response(Some(notify));
    response.is_response_required = Some(YesOrNo::Yes);
    response.select_party_respond = Some(respond);
    response
}
