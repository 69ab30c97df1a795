// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::party::{Party, YesOrNo};
use crate::registry::{ApplicationTypeDescriptor, require_by_code};
use crate::types::{Application, ApplicationDraft, CaseSnapshot};
use time::{Date, Duration};

/// Days the other party has to respond to a shared application.
pub const RESPONSE_WINDOW_DAYS: i64 = 7;

/// Validates an application draft before it is submitted.
///
/// # Arguments
///
/// * `draft` - The draft assembled by the application journey
///
/// # Returns
///
/// The registry entry for the draft's type.
///
/// # Errors
///
/// Returns an error if:
/// - The type is not registered, or respondents may not raise it
/// - Neither details nor a document were supplied
/// - A category A or B type has no copy-to-other-party answer
/// - The answer is "no" and no reason was given
pub fn validate_application_draft(
    draft: &ApplicationDraft,
) -> Result<&'static ApplicationTypeDescriptor, DomainError> {
    let descriptor: &'static ApplicationTypeDescriptor = require_by_code(&draft.type_code)?;

    if !descriptor.respondent_may_raise {
        return Err(DomainError::ApplicationTypeNotPermitted {
            code: draft.type_code.clone(),
        });
    }

    let has_details: bool = draft
        .details
        .as_deref()
        .is_some_and(|d| !d.trim().is_empty());
    if !has_details && draft.document_upload.is_none() {
        return Err(DomainError::MissingApplicationContent);
    }

    if descriptor.requires_copy_step() {
        match draft.copy_to_other_party {
            None => {
                return Err(DomainError::MissingCopyToOtherPartyAnswer {
                    code: draft.type_code.clone(),
                });
            }
            Some(YesOrNo::No) => {
                let has_reason: bool = draft
                    .copy_to_other_party_text
                    .as_deref()
                    .is_some_and(|t| !t.trim().is_empty());
                if !has_reason {
                    return Err(DomainError::MissingCopyToOtherPartyReason);
                }
            }
            Some(YesOrNo::Yes) => {}
        }
    }

    Ok(descriptor)
}

/// Validates that a respondent application names a respondent on the roster.
///
/// # Errors
///
/// Returns `DomainError::UnknownRespondent` if the applicant is a respondent
/// whose identity is missing or not linked to any roster entry.
pub fn validate_applicant(application: &Application, case: &CaseSnapshot) -> Result<(), DomainError> {
    if application.applicant != Party::Respondent {
        return Ok(());
    }

    let on_roster: bool = application
        .applicant_id
        .as_deref()
        .is_some_and(|id| case.respondent_by_identity(id).is_some());

    if on_roster {
        Ok(())
    } else {
        Err(DomainError::UnknownRespondent {
            application_id: application.id.clone(),
            applicant_id: application.applicant_id.clone(),
        })
    }
}

/// Parses a case date in ISO 8601 form (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string does not parse.
pub fn parse_case_date(date_string: &str) -> Result<Date, DomainError> {
    Date::parse(
        date_string,
        &time::format_description::well_known::Iso8601::DEFAULT,
    )
    .map_err(|e| DomainError::DateParseError {
        date_string: date_string.to_string(),
        error: e.to_string(),
    })
}

/// Computes the date by which the other party should respond to an
/// application submitted on `submitted`.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the date overflows.
pub fn response_due_date(submitted: Date) -> Result<Date, DomainError> {
    submitted
        .checked_add(Duration::days(RESPONSE_WINDOW_DAYS))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: String::from("computing the response due date"),
        })
}
