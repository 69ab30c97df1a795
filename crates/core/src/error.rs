// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use et3_respond_domain::{DomainError, Party};

/// Errors that can occur while building submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The acting user has no established identity.
    MissingIdentity {
        /// The action that was attempted.
        action: &'static str,
    },
    /// The acting user's party may not perform the action.
    NotPermitted {
        /// The action that was attempted.
        action: &'static str,
        /// The acting user's party.
        party: Party,
    },
    /// A response has neither text nor supporting material.
    EmptyResponse,
    /// A response to a shareable application has no copy-to-other-party
    /// answer.
    MissingResponseCopyAnswer,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::MissingIdentity { action } => {
                write!(f, "Cannot {action}: user identity is unknown")
            }
            Self::NotPermitted { action, party } => {
                write!(f, "A {party} may not {action}")
            }
            Self::EmptyResponse => {
                write!(f, "Response must include text or supporting material")
            }
            Self::MissingResponseCopyAnswer => {
                write!(f, "Response requires a copy-to-other-party answer")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
