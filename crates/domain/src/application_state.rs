// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-party application lifecycle states and their transition table.
//!
//! A state is tracked per application, per party member. The transition
//! function is deliberately narrow: an event that has no entry in the table
//! yields `None`, and callers must leave the stored state untouched.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The lifecycle state of an application as seen by one party member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApplicationState {
    /// Nothing has happened that concerns this party member yet.
    NotStartedYet,
    /// Newly relevant, but the details page has not been opened.
    NotViewed,
    /// Opened, no action taken.
    Viewed,
    /// The tribunal added something since the last view.
    Updated,
    /// The party member owns the next action.
    InProgress,
    /// The party member has responded; the tribunal owns the next action.
    WaitingForTribunal,
    /// A final decision has been issued.
    Completed,
}

/// Something that happened to an application, from one party member's point
/// of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateEvent {
    /// The party member opened the application details page.
    Viewed {
        /// Whether the application's response flag for the viewer's party is
        /// set to yes.
        response_owed: bool,
    },
    /// A tribunal response or decision addressed to the party was added.
    TribunalUpdated,
    /// The party member submitted a response.
    PartyResponded,
    /// The tribunal closed the application with a final decision.
    Decided,
}

impl ApplicationState {
    /// Every state, in lifecycle order.
    pub const ALL: [Self; 7] = [
        Self::NotStartedYet,
        Self::NotViewed,
        Self::Viewed,
        Self::Updated,
        Self::InProgress,
        Self::WaitingForTribunal,
        Self::Completed,
    ];

    /// Returns the string representation used on the wire and as the
    /// translation key for the state label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotStartedYet => "notStartedYet",
            Self::NotViewed => "notViewed",
            Self::Viewed => "viewed",
            Self::Updated => "updated",
            Self::InProgress => "inProgress",
            Self::WaitingForTribunal => "waitingForTribunal",
            Self::Completed => "completed",
        }
    }

    /// Returns the GOV.UK tag class used to colour the state label.
    #[must_use]
    pub const fn tag_class(&self) -> &'static str {
        match self {
            Self::NotStartedYet => "govuk-tag--grey",
            Self::NotViewed => "govuk-tag--red",
            Self::Viewed => "govuk-tag--turquoise",
            Self::Updated => "govuk-tag--blue",
            Self::InProgress => "govuk-tag--yellow",
            Self::WaitingForTribunal => "govuk-tag--purple",
            Self::Completed => "govuk-tag--green",
        }
    }

    /// Returns true if no event moves the application out of this state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Applies an event to this state.
    ///
    /// Returns the new state, or `None` when the table has no entry for
    /// `(self, event)`.
    ///
    /// | state      | `Viewed` (owed) | `Viewed` (not owed)  | `TribunalUpdated` | `PartyResponded`     | `Decided`   |
    /// |------------|-----------------|----------------------|-------------------|----------------------|-------------|
    /// | `NotViewed` | Viewed          | Viewed               | Updated           | `WaitingForTribunal` | Completed   |
    /// | Updated    | `InProgress`    | `WaitingForTribunal` | Updated           | `WaitingForTribunal` | Completed   |
    /// | Completed  | -               | -                    | -                 | -                    | -           |
    /// | others     | -               | -                    | Updated           | `WaitingForTribunal` | Completed   |
    #[must_use]
    pub const fn on(self, event: StateEvent) -> Option<Self> {
        match (self, event) {
            (Self::Completed, _) => None,

            (Self::NotViewed, StateEvent::Viewed { .. }) => Some(Self::Viewed),
            (
                Self::Updated,
                StateEvent::Viewed {
                    response_owed: true,
                },
            ) => Some(Self::InProgress),
            (
                Self::Updated,
                StateEvent::Viewed {
                    response_owed: false,
                },
            ) => Some(Self::WaitingForTribunal),
            (
                Self::NotStartedYet | Self::Viewed | Self::InProgress | Self::WaitingForTribunal,
                StateEvent::Viewed { .. },
            ) => None,

            (_, StateEvent::TribunalUpdated) => Some(Self::Updated),
            (_, StateEvent::PartyResponded) => Some(Self::WaitingForTribunal),
            (_, StateEvent::Decided) => Some(Self::Completed),
        }
    }
}

impl FromStr for ApplicationState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| DomainError::InvalidApplicationState(s.to_string()))
    }
}

impl std::fmt::Display for ApplicationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
