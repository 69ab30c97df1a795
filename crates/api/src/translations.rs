// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Label lookup for rendered pages.
//!
//! Everything that turns a key into display text goes through [`Translate`].
//! A missing key never fails: the key itself is shown instead.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A key to display-text lookup.
pub trait Translate {
    /// Returns the text for `key`, if the table has one.
    fn lookup(&self, key: &str) -> Option<&str>;

    /// Returns the text for `key`, falling back to the key itself.
    fn translate(&self, key: &str) -> String {
        self.lookup(key).unwrap_or(key).to_string()
    }
}

const ENGLISH: &[(&str, &str)] = &[
    ("applicant", "Applicant"),
    ("applicationType", "Type of application"),
    ("applicationDate", "Application date"),
    ("applicationDetails", "What do you want to tell or ask the tribunal?"),
    ("supportingMaterial", "Supporting material"),
    ("copyCorrespondence", "Do you want to copy this correspondence to the other party?"),
    ("copyCorrespondenceReason", "Reason for not copying"),
    ("responseFrom", "Response from"),
    ("responseDate", "Response date"),
    ("responseText", "What's your response to the application?"),
    ("responseTitle", "Response"),
    ("sentBy", "Sent by"),
    ("cmoOrRequest", "Case management order or request?"),
    ("madeBy", "Made by"),
    ("additionalInformation", "Additional information"),
    ("document", "Document"),
    ("sentTo", "Sent to"),
    ("decisionDate", "Date"),
    ("decisionTitle", "Notification"),
    ("decision", "Decision"),
    ("decisionType", "Type of decision"),
    ("decisionMadeBy", "Decision made by"),
    ("claimant", "Claimant"),
    ("respondent", "Respondent"),
    ("tribunal", "Tribunal"),
    ("yes", "Yes"),
    ("no", "No"),
    ("bothParties", "Both parties"),
    ("claimantOnly", "Claimant only"),
    ("respondentOnly", "Respondent only"),
    ("caseManagementOrder", "Case management order"),
    ("request", "Request"),
    ("your", "your"),
    ("theClaimants", "the claimant's"),
    ("theRespondents", "the respondent's"),
    ("theTribunals", "the tribunal's"),
    ("notStartedYet", "Not started yet"),
    ("notViewed", "Not viewed"),
    ("viewed", "Viewed"),
    ("updated", "Updated"),
    ("inProgress", "In progress"),
    ("waitingForTribunal", "Waiting for the tribunal"),
    ("completed", "Completed"),
];

/// A flat translation table, read from a JSON object of key to text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    /// Creates an empty table. Every lookup falls back to the key.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the built-in English table.
    #[must_use]
    pub fn english() -> Self {
        Self {
            entries: ENGLISH
                .iter()
                .map(|(key, text)| ((*key).to_string(), (*text).to_string()))
                .collect(),
        }
    }

    /// Parses a table from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a JSON object of strings.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Returns this table with every entry of `overrides` laid on top.
    #[must_use]
    pub fn merged_with(mut self, overrides: Self) -> Self {
        self.entries.extend(overrides.entries);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translate for TranslationTable {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}
