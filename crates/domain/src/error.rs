// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Party string does not name a claimant, respondent or admin.
    InvalidParty(String),
    /// Application state string is not a known lifecycle state.
    InvalidApplicationState(String),
    /// Application type code or URL slug is not in the registry.
    UnknownApplicationType(String),
    /// The application type exists but respondents may not raise it.
    ApplicationTypeNotPermitted {
        /// The application type code.
        code: String,
    },
    /// Neither details nor a supporting document was supplied.
    MissingApplicationContent,
    /// A category A or B application has no copy-to-other-party answer.
    MissingCopyToOtherPartyAnswer {
        /// The application type code.
        code: String,
    },
    /// The applicant chose not to copy the other party but gave no reason.
    MissingCopyToOtherPartyReason,
    /// A respondent application names an applicant not on the case roster.
    UnknownRespondent {
        /// The application identifier.
        application_id: String,
        /// The applicant identity, if any.
        applicant_id: Option<String>,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidParty(value) => write!(f, "Invalid party: {value}"),
            Self::InvalidApplicationState(value) => {
                write!(f, "Invalid application state: {value}")
            }
            Self::UnknownApplicationType(value) => {
                write!(f, "Unknown application type: {value}")
            }
            Self::ApplicationTypeNotPermitted { code } => {
                write!(f, "Respondents may not raise an application of type '{code}'")
            }
            Self::MissingApplicationContent => {
                write!(f, "Application must include details or a supporting document")
            }
            Self::MissingCopyToOtherPartyAnswer { code } => {
                write!(
                    f,
                    "Application of type '{code}' requires a copy-to-other-party answer"
                )
            }
            Self::MissingCopyToOtherPartyReason => {
                write!(
                    f,
                    "A reason is required when not copying the application to the other party"
                )
            }
            Self::UnknownRespondent {
                application_id,
                applicant_id,
            } => match applicant_id {
                Some(id) => write!(
                    f,
                    "Application '{application_id}' was raised by '{id}', who is not a respondent on the case"
                ),
                None => write!(
                    f,
                    "Application '{application_id}' was raised by a respondent with no identity"
                ),
            },
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
