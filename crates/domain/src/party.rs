// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parties, identities and the party-selection flags set by the tribunal.
//!
//! Every visibility rule takes a [`Viewer`] as input. A viewer whose identity
//! is unknown is never treated as the owner of anything: ownership checks
//! return `false` rather than failing.

use crate::error::DomainError;
use crate::types::CaseSnapshot;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A party to a tribunal case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    /// The claimant who brought the claim.
    Claimant,
    /// One of the respondents answering the claim.
    Respondent,
    /// The tribunal, or an admin acting for it.
    Admin,
}

impl Party {
    /// Returns the string representation used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Claimant => "Claimant",
            Self::Respondent => "Respondent",
            Self::Admin => "Admin",
        }
    }

    /// Returns the translation key naming this party.
    #[must_use]
    pub const fn translation_key(&self) -> &'static str {
        match self {
            Self::Claimant => "claimant",
            Self::Respondent => "respondent",
            Self::Admin => "tribunal",
        }
    }
}

impl FromStr for Party {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "claimant" => Ok(Self::Claimant),
            "respondent" => Ok(Self::Respondent),
            "admin" | "tribunal" => Ok(Self::Admin),
            _ => Err(DomainError::InvalidParty(s.to_string())),
        }
    }
}

impl std::fmt::Display for Party {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A yes/no answer. Unset answers are modelled as `Option<YesOrNo>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesOrNo {
    Yes,
    No,
}

impl YesOrNo {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }

    #[must_use]
    pub const fn translation_key(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

/// Returns true only for an explicit `Yes`.
#[must_use]
pub const fn is_yes(answer: Option<YesOrNo>) -> bool {
    matches!(answer, Some(YesOrNo::Yes))
}

/// The parties an admin response or decision is addressed to.
///
/// Used for both `selectPartyNotify` and `selectPartyRespond`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartySelection {
    #[serde(rename = "Both parties")]
    BothParties,
    #[serde(rename = "Claimant only")]
    ClaimantOnly,
    #[serde(rename = "Respondent only")]
    RespondentOnly,
}

impl PartySelection {
    /// Returns the string representation used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BothParties => "Both parties",
            Self::ClaimantOnly => "Claimant only",
            Self::RespondentOnly => "Respondent only",
        }
    }

    /// Returns the translation key for the "sent to" label.
    #[must_use]
    pub const fn translation_key(&self) -> &'static str {
        match self {
            Self::BothParties => "bothParties",
            Self::ClaimantOnly => "claimantOnly",
            Self::RespondentOnly => "respondentOnly",
        }
    }

    /// Returns true if this selection addresses the given party.
    ///
    /// The tribunal is never addressed by its own selection.
    #[must_use]
    pub const fn includes(&self, party: Party) -> bool {
        matches!(
            (self, party),
            (Self::BothParties, Party::Claimant | Party::Respondent)
                | (Self::ClaimantOnly, Party::Claimant)
                | (Self::RespondentOnly, Party::Respondent)
        )
    }
}

/// Returns true if an optional selection addresses the given party.
#[must_use]
pub const fn selection_includes(selection: Option<PartySelection>, party: Party) -> bool {
    match selection {
        Some(selection) => selection.includes(party),
        None => false,
    }
}

/// The identity and claimed role of the signed-in user, as supplied by the
/// session layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// The identity provider's user id, if the session carries one.
    pub id: Option<String>,
    /// The role the session claims for this user.
    pub role: Party,
}

impl CurrentUser {
    #[must_use]
    pub const fn new(id: Option<String>, role: Party) -> Self {
        Self { id, role }
    }
}

/// The party member on whose behalf visibility is being computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    /// The viewer's identity. `None` means the identity could not be
    /// established and the viewer owns nothing.
    pub id: Option<String>,
    /// The viewer's party.
    pub party: Party,
}

impl Viewer {
    /// Creates a viewer with a known identity.
    #[must_use]
    pub fn new(id: impl Into<String>, party: Party) -> Self {
        Self {
            id: Some(id.into()),
            party,
        }
    }

    /// Creates a viewer whose identity is unknown.
    #[must_use]
    pub const fn anonymous(party: Party) -> Self {
        Self { id: None, party }
    }

    /// Returns the viewer's identity, if known.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns true if the viewer is the tribunal.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.party, Party::Admin)
    }
}

/// Returns true if an item owned by `owner_party`/`owner_id` belongs to the
/// viewer.
///
/// Both identities must be present and equal. A missing identity on either
/// side is "not yours".
#[must_use]
pub fn is_same_party(owner_party: Party, owner_id: Option<&str>, viewer: &Viewer) -> bool {
    if owner_party != viewer.party {
        return false;
    }
    match (owner_id, viewer.id()) {
        (Some(owner), Some(user)) => !owner.is_empty() && owner == user,
        _ => false,
    }
}

/// Resolves the role the signed-in user actually holds on a case.
///
/// The session's claimed role is checked against the case roster. A claimant
/// or respondent whose identity is not on the roster keeps their claimed
/// party but loses their identity, so they see only what is shared.
#[must_use]
pub fn resolve_viewer(user: &CurrentUser, case: &CaseSnapshot) -> Viewer {
    let Some(id) = user.id.as_deref().filter(|id| !id.is_empty()) else {
        return Viewer::anonymous(user.role);
    };

    let on_roster: bool = match user.role {
        Party::Admin => true,
        Party::Claimant => case.claimant_id.as_deref() == Some(id),
        Party::Respondent => case.respondent_by_identity(id).is_some(),
    };

    if on_roster {
        Viewer::new(id, user.role)
    } else {
        Viewer::anonymous(user.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_party_parse_is_case_insensitive() {
        assert_eq!("claimant".parse::<Party>(), Ok(Party::Claimant));
        assert_eq!("Respondent".parse::<Party>(), Ok(Party::Respondent));
        assert_eq!("TRIBUNAL".parse::<Party>(), Ok(Party::Admin));
        assert!("judge".parse::<Party>().is_err());
    }

    #[test]
    fn test_selection_includes() {
        assert!(PartySelection::BothParties.includes(Party::Claimant));
        assert!(PartySelection::BothParties.includes(Party::Respondent));
        assert!(!PartySelection::BothParties.includes(Party::Admin));
        assert!(PartySelection::ClaimantOnly.includes(Party::Claimant));
        assert!(!PartySelection::ClaimantOnly.includes(Party::Respondent));
        assert!(PartySelection::RespondentOnly.includes(Party::Respondent));
        assert!(!PartySelection::RespondentOnly.includes(Party::Claimant));
        assert!(!selection_includes(None, Party::Claimant));
    }

    #[test]
    fn test_same_party_requires_both_identities() {
        let viewer: Viewer = Viewer::new("resp-1", Party::Respondent);
        assert!(is_same_party(Party::Respondent, Some("resp-1"), &viewer));
        assert!(!is_same_party(Party::Respondent, Some("resp-2"), &viewer));
        assert!(!is_same_party(Party::Claimant, Some("resp-1"), &viewer));
        assert!(!is_same_party(Party::Respondent, None, &viewer));

        let anonymous: Viewer = Viewer::anonymous(Party::Respondent);
        assert!(!is_same_party(Party::Respondent, Some("resp-1"), &anonymous));
        assert!(!is_same_party(Party::Respondent, None, &anonymous));
    }

    #[test]
    fn test_same_party_rejects_empty_identity() {
        let viewer: Viewer = Viewer::new("", Party::Claimant);
        assert!(!is_same_party(Party::Claimant, Some(""), &viewer));
    }
}
