// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Turns a filtered application into the rows of the details page.
//!
//! Nothing here decides visibility. The input is already filtered by
//! [`et3_respond::filter_application`]; this module only orders and labels.

use et3_respond::{VisibleApplication, application_type_label};
use et3_respond_domain::{
    AdminDecision, Application, ApplicationState, DocumentRef, PartySelection, Response, YesOrNo,
    parse_case_date,
};
use serde::Serialize;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::translations::Translate;

const DISPLAY_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[day padding:none] [month repr:long] [year]");

/// A rendered value: plain text or a link to a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RowValue {
    Text { text: String },
    Link { href: String, text: String },
}

/// One label/value row of a summary list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub key: String,
    pub value: RowValue,
}

impl SummaryRow {
    #[must_use]
    pub fn text(key: String, text: impl Into<String>) -> Self {
        Self {
            key,
            value: RowValue::Text { text: text.into() },
        }
    }

    #[must_use]
    pub const fn link(key: String, href: String, text: String) -> Self {
        Self {
            key,
            value: RowValue::Link { href, text },
        }
    }
}

/// Resolves where a stored document can be downloaded from.
pub trait DocumentLinks {
    fn link(&self, document: &DocumentRef) -> String;
}

/// Links documents as `{base}/{document id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLinkBase {
    base: String,
}

impl DocumentLinkBase {
    #[must_use]
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for DocumentLinkBase {
    fn default() -> Self {
        Self::new("/getSupportingMaterial")
    }
}

impl DocumentLinks for DocumentLinkBase {
    fn link(&self, document: &DocumentRef) -> String {
        format!("{}/{}", self.base, document.id())
    }
}

/// The full details page for one application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDetailsPage {
    pub application_id: String,
    pub application_type: String,
    pub state: ApplicationState,
    pub state_label: String,
    pub application: Vec<SummaryRow>,
    /// One block of rows per visible response, in stored order.
    pub responses: Vec<Vec<SummaryRow>>,
    /// One block of rows per visible decision, in stored order.
    pub decisions: Vec<Vec<SummaryRow>>,
}

/// Formats a case date for display, e.g. `2026-03-27` as `27 March 2026`.
///
/// Dates that do not parse are shown as stored.
#[must_use]
pub fn display_date(date: &str) -> String {
    parse_case_date(date)
        .ok()
        .and_then(|parsed| parsed.format(DISPLAY_DATE).ok())
        .unwrap_or_else(|| date.to_string())
}

/// Collects rows, skipping fields that were never filled in.
struct RowBuilder<'t, T: Translate + ?Sized> {
    translations: &'t T,
    rows: Vec<SummaryRow>,
}

impl<'t, T: Translate + ?Sized> RowBuilder<'t, T> {
    const fn new(translations: &'t T) -> Self {
        Self {
            translations,
            rows: Vec::new(),
        }
    }

    fn text(&mut self, key: &str, text: impl Into<String>) -> &mut Self {
        let key: String = self.translations.translate(key);
        self.rows.push(SummaryRow::text(key, text));
        self
    }

    fn optional_text(&mut self, key: &str, text: Option<&str>) -> &mut Self {
        if let Some(text) = text.filter(|t| !t.trim().is_empty()) {
            self.text(key, text);
        }
        self
    }

    fn translated(&mut self, key: &str, value_key: &str) -> &mut Self {
        let value: String = self.translations.translate(value_key);
        self.text(key, value)
    }

    fn answer(&mut self, key: &str, answer: Option<YesOrNo>) -> &mut Self {
        if let Some(answer) = answer {
            self.translated(key, answer.translation_key());
        }
        self
    }

    fn sent_to(&mut self, selection: Option<PartySelection>) -> &mut Self {
        if let Some(selection) = selection {
            self.translated("sentTo", selection.translation_key());
        }
        self
    }

    fn documents<'d>(
        &mut self,
        key: &str,
        documents: impl IntoIterator<Item = &'d DocumentRef>,
        links: &impl DocumentLinks,
    ) -> &mut Self {
        for document in documents {
            let key: String = self.translations.translate(key);
            self.rows.push(SummaryRow::link(
                key,
                links.link(document),
                document.document_filename.clone(),
            ));
        }
        self
    }

    fn finish(&mut self) -> Vec<SummaryRow> {
        std::mem::take(&mut self.rows)
    }
}

/// Rows describing the application itself.
#[must_use]
pub fn application_rows<T: Translate + ?Sized>(
    application: &Application,
    translations: &T,
    links: &impl DocumentLinks,
) -> Vec<SummaryRow> {
    let mut rows = RowBuilder::new(translations);
    rows.translated("applicant", application.applicant.translation_key())
        .text("applicationType", application_type_label(application))
        .text("applicationDate", display_date(&application.date))
        .optional_text("applicationDetails", application.details.as_deref())
        .documents("supportingMaterial", &application.document_upload, links)
        .answer("copyCorrespondence", application.copy_to_other_party);
    if application.copy_to_other_party == Some(YesOrNo::No) {
        rows.optional_text(
            "copyCorrespondenceReason",
            application.copy_to_other_party_text.as_deref(),
        );
    }
    rows.finish()
}

/// Rows for a claimant or respondent response.
#[must_use]
pub fn party_response_rows<T: Translate + ?Sized>(
    response: &Response,
    translations: &T,
    links: &impl DocumentLinks,
) -> Vec<SummaryRow> {
    RowBuilder::new(translations)
        .translated("responseFrom", response.from.translation_key())
        .text("responseDate", display_date(&response.date))
        .optional_text("responseText", response.response.as_deref())
        .documents("supportingMaterial", &response.supporting_material, links)
        .answer("copyCorrespondence", response.copy_to_other_party)
        .finish()
}

/// Rows for a response sent by the tribunal.
#[must_use]
pub fn admin_response_rows<T: Translate + ?Sized>(
    response: &Response,
    translations: &T,
    links: &impl DocumentLinks,
) -> Vec<SummaryRow> {
    let mut rows = RowBuilder::new(translations);
    rows.optional_text("responseTitle", response.enter_response_title.as_deref())
        .text("responseDate", display_date(&response.date))
        .translated("sentBy", "tribunal");
    if let Some(kind) = response.is_cmo_or_request {
        rows.translated("cmoOrRequest", kind.translation_key());
    }
    rows.optional_text("madeBy", response.made_by.as_deref())
        .optional_text("additionalInformation", response.additional_information.as_deref())
        .documents("document", &response.add_document, links)
        .sent_to(response.select_party_notify)
        .finish()
}

/// Rows for any response, branching on who sent it.
#[must_use]
pub fn response_rows<T: Translate + ?Sized>(
    response: &Response,
    translations: &T,
    links: &impl DocumentLinks,
) -> Vec<SummaryRow> {
    if response.is_from_admin() {
        admin_response_rows(response, translations, links)
    } else {
        party_response_rows(response, translations, links)
    }
}

/// Rows for a tribunal decision.
#[must_use]
pub fn decision_rows<T: Translate + ?Sized>(
    decision: &AdminDecision,
    translations: &T,
    links: &impl DocumentLinks,
) -> Vec<SummaryRow> {
    RowBuilder::new(translations)
        .text("decisionDate", display_date(&decision.date))
        .optional_text("decisionTitle", decision.enter_notification_title.as_deref())
        .optional_text("decision", decision.decision.as_deref())
        .optional_text("decisionType", decision.type_of_decision.as_deref())
        .optional_text("decisionMadeBy", decision.decision_made_by.as_deref())
        .optional_text("additionalInformation", decision.additional_information.as_deref())
        .documents("document", &decision.response_required_doc, links)
        .sent_to(decision.select_party_notify)
        .finish()
}

/// Builds the details page from what the viewer may see.
#[must_use]
pub fn details_page<T: Translate + ?Sized>(
    visible: &VisibleApplication<'_>,
    state: ApplicationState,
    translations: &T,
    links: &impl DocumentLinks,
) -> ApplicationDetailsPage {
    ApplicationDetailsPage {
        application_id: visible.application.id.clone(),
        application_type: application_type_label(visible.application),
        state,
        state_label: translations.translate(state.as_str()),
        application: application_rows(visible.application, translations, links),
        responses: visible
            .responses
            .iter()
            .map(|response| response_rows(response, translations, links))
            .collect(),
        decisions: visible
            .decisions
            .iter()
            .map(|decision| decision_rows(decision, translations, links))
            .collect(),
    }
}
