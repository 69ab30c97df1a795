// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use et3_respond::CoreError;
use et3_respond_domain::DomainError;

use crate::case_api::UpstreamError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The acting user could not be identified.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The acting user's party may not perform the action.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The party of the acting user.
        party: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found, or is not visible to the user.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The case store failed.
    Upstream {
        /// A description of the failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized { action, party } => {
                write!(f, "Unauthorized: a {party} may not {action}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Upstream { message } => {
                write!(f, "Case store error: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidParty(value) => ApiError::InvalidInput {
            field: String::from("role"),
            message: format!("'{value}' is not a claimant, respondent or tribunal"),
        },
        DomainError::InvalidApplicationState(value) => ApiError::InvalidInput {
            field: String::from("application_state"),
            message: format!("'{value}' is not an application state"),
        },
        DomainError::UnknownApplicationType(value) => ApiError::InvalidInput {
            field: String::from("type"),
            message: format!("Unknown application type '{value}'"),
        },
        DomainError::ApplicationTypeNotPermitted { code } => ApiError::DomainRuleViolation {
            rule: String::from("respondent_application_type"),
            message: format!("Respondents may not make a '{code}' application"),
        },
        DomainError::MissingApplicationContent => ApiError::InvalidInput {
            field: String::from("details"),
            message: String::from("Enter details or upload a document"),
        },
        DomainError::MissingCopyToOtherPartyAnswer { code } => ApiError::InvalidInput {
            field: String::from("copy_to_other_party"),
            message: format!(
                "A '{code}' application must say whether to copy the other party"
            ),
        },
        DomainError::MissingCopyToOtherPartyReason => ApiError::InvalidInput {
            field: String::from("copy_to_other_party_text"),
            message: String::from("Give a reason for not copying the other party"),
        },
        DomainError::UnknownRespondent {
            application_id,
            applicant_id,
        } => ApiError::DomainRuleViolation {
            rule: String::from("known_respondent"),
            message: format!(
                "Application {application_id} names respondent '{}' who is not on the case",
                applicant_id.as_deref().unwrap_or("<none>")
            ),
        },
        DomainError::DateArithmeticOverflow { operation } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Date arithmetic overflow while {operation}"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::MissingIdentity { action } => ApiError::AuthenticationFailed {
            reason: format!("cannot {action} without a known user identity"),
        },
        CoreError::NotPermitted { action, party } => ApiError::Unauthorized {
            action: action.to_string(),
            party: party.to_string(),
        },
        CoreError::EmptyResponse => ApiError::InvalidInput {
            field: String::from("response"),
            message: String::from("Enter a response or upload supporting material"),
        },
        CoreError::MissingResponseCopyAnswer => ApiError::InvalidInput {
            field: String::from("copy_to_other_party"),
            message: String::from("Say whether to copy this response to the other party"),
        },
    }
}

/// Translates a case store failure into an API error.
#[must_use]
pub fn translate_upstream_error(err: UpstreamError) -> ApiError {
    match err {
        UpstreamError::NotFound { case_id } => ApiError::ResourceNotFound {
            resource_type: String::from("Case"),
            message: format!("Case {case_id} does not exist"),
        },
        UpstreamError::Rejected { .. } | UpstreamError::Unavailable(_) => ApiError::Upstream {
            message: err.to_string(),
        },
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        translate_upstream_error(err)
    }
}
