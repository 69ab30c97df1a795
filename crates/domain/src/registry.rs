// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Static catalogue of tribunal application types.
//!
//! The table is immutable and lives for the whole process. Lookups are by the
//! canonical code stored on an application, or by the URL slug used in the
//! "contact the tribunal" journey.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Application category.
///
/// Categories A and B ask the applicant whether to copy the other party.
/// Category C applications are never shared with the other party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationCategory {
    A,
    B,
    C,
}

impl ApplicationCategory {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }

    /// Returns true if the journey must ask about copying the other party.
    #[must_use]
    pub const fn requires_copy_step(&self) -> bool {
        matches!(self, Self::A | Self::B)
    }

    /// Returns true if applications in this category are never visible to
    /// the other party, whatever their sharing flags say.
    #[must_use]
    pub const fn excluded_from_sharing(&self) -> bool {
        matches!(self, Self::C)
    }
}

/// One entry in the application type registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicationTypeDescriptor {
    /// Canonical code stored on the case.
    pub code: &'static str,
    /// Label shown to a claimant.
    pub claimant_label: &'static str,
    /// Label shown to a claimant's legal representative.
    pub claimant_legal_rep_label: &'static str,
    /// Category governing the copy-to-other-party step.
    pub category: ApplicationCategory,
    /// URL slug for the application journey.
    pub url: &'static str,
    /// Whether a respondent may raise this type.
    pub respondent_may_raise: bool,
}

impl ApplicationTypeDescriptor {
    /// Returns true if the journey must ask about copying the other party.
    #[must_use]
    pub const fn requires_copy_step(&self) -> bool {
        self.category.requires_copy_step()
    }

    /// Returns true if applications of this type are never shared.
    #[must_use]
    pub const fn excluded_from_sharing(&self) -> bool {
        self.category.excluded_from_sharing()
    }
}

/// Every application type known to the service.
pub static APPLICATION_TYPES: &[ApplicationTypeDescriptor] = &[
    ApplicationTypeDescriptor {
        code: "Amend response",
        claimant_label: "Amend my claim",
        claimant_legal_rep_label: "Amend claim",
        category: ApplicationCategory::A,
        url: "amend-response",
        respondent_may_raise: true,
    },
    ApplicationTypeDescriptor {
        code: "Change personal details",
        claimant_label: "Change my personal details",
        claimant_legal_rep_label: "Change personal details",
        category: ApplicationCategory::B,
        url: "change-personal-details",
        respondent_may_raise: true,
    },
    ApplicationTypeDescriptor {
        code: "Claimant not complied",
        claimant_label: "Tell the tribunal the respondent has not complied with an order",
        claimant_legal_rep_label: "Respondent not complied",
        category: ApplicationCategory::B,
        url: "claimant-not-complied",
        respondent_may_raise: true,
    },
    ApplicationTypeDescriptor {
        code: "Consider a decision afresh",
        claimant_label: "Ask for a judge to consider a decision afresh",
        claimant_legal_rep_label: "Consider a decision afresh",
        category: ApplicationCategory::B,
        url: "consider-decision-afresh",
        respondent_may_raise: true,
    },
    ApplicationTypeDescriptor {
        code: "Contact about something else",
        claimant_label: "Contact the tribunal about something else",
        claimant_legal_rep_label: "Contact about something else",
        category: ApplicationCategory::B,
        url: "contact-about-something-else",
        respondent_may_raise: true,
    },
    ApplicationTypeDescriptor {
        code: "Order a witness to attend to give evidence",
        claimant_label: "Order a witness to attend to give evidence",
        claimant_legal_rep_label: "Order a witness to attend to give evidence",
        category: ApplicationCategory::C,
        url: "order-witness-attend",
        respondent_may_raise: true,
    },
    ApplicationTypeDescriptor {
        code: "Order other party",
        claimant_label: "Order the respondent to do something",
        claimant_legal_rep_label: "Order other party",
        category: ApplicationCategory::A,
        url: "order-other-party",
        respondent_may_raise: true,
    },
    ApplicationTypeDescriptor {
        code: "Postpone a hearing",
        claimant_label: "Postpone a hearing",
        claimant_legal_rep_label: "Postpone a hearing",
        category: ApplicationCategory::A,
        url: "postpone-hearing",
        respondent_may_raise: true,
    },
    ApplicationTypeDescriptor {
        code: "Reconsider judgement",
        claimant_label: "Ask for a judgment to be reconsidered",
        claimant_legal_rep_label: "Reconsider judgment",
        category: ApplicationCategory::B,
        url: "reconsider-judgement",
        respondent_may_raise: true,
    },
    ApplicationTypeDescriptor {
        code: "Restrict publicity",
        claimant_label: "Restrict publicity",
        claimant_legal_rep_label: "Restrict publicity",
        category: ApplicationCategory::A,
        url: "restrict-publicity",
        respondent_may_raise: true,
    },
    ApplicationTypeDescriptor {
        code: "Strike out all or part of a claim",
        claimant_label: "Strike out all or part of the response",
        claimant_legal_rep_label: "Strike out all or part of the response",
        category: ApplicationCategory::A,
        url: "strike-out-claim",
        respondent_may_raise: true,
    },
    ApplicationTypeDescriptor {
        code: "Vary or revoke an order",
        claimant_label: "Vary or revoke an order",
        claimant_legal_rep_label: "Vary or revoke an order",
        category: ApplicationCategory::A,
        url: "vary-or-revoke-order",
        respondent_may_raise: true,
    },
    ApplicationTypeDescriptor {
        code: "Withdraw all or part of claim",
        claimant_label: "Withdraw all or part of my claim",
        claimant_legal_rep_label: "Withdraw all or part of claim",
        category: ApplicationCategory::B,
        url: "withdraw-claim",
        respondent_may_raise: false,
    },
];

/// Looks up an application type by its canonical code.
#[must_use]
pub fn find_by_code(code: &str) -> Option<&'static ApplicationTypeDescriptor> {
    APPLICATION_TYPES.iter().find(|d| d.code == code)
}

/// Looks up an application type by its URL slug.
#[must_use]
pub fn find_by_url(url: &str) -> Option<&'static ApplicationTypeDescriptor> {
    APPLICATION_TYPES.iter().find(|d| d.url == url)
}

/// Looks up an application type by code, failing if it is not registered.
///
/// # Errors
///
/// Returns `DomainError::UnknownApplicationType` if the code is not known.
pub fn require_by_code(code: &str) -> Result<&'static ApplicationTypeDescriptor, DomainError> {
    find_by_code(code).ok_or_else(|| DomainError::UnknownApplicationType(code.to_string()))
}

/// Returns the application types a respondent may raise, in display order.
pub fn respondent_application_types() -> impl Iterator<Item = &'static ApplicationTypeDescriptor>
{
    APPLICATION_TYPES.iter().filter(|d| d.respondent_may_raise)
}

/// Returns the claimant-facing label for a type code, falling back to the
/// raw code for unregistered types.
#[must_use]
pub fn claimant_label(code: &str) -> &str {
    find_by_code(code).map_or(code, |d| d.claimant_label)
}
