//! Answer set schema - the accumulated user input, keyed by question

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Well-known answer keys.
///
/// Multi-select steps write one boolean per option under `"{prefix}{option}"`.
pub mod keys {
    pub const MAIN_SERVICE: &str = "main-service";
    pub const LIVE_TYPE: &str = "live-type";
    pub const HIRE_ROLE: &str = "hire-role";
    pub const HIRE_DETAILS: &str = "hire-details";
    pub const EVENT_TYPE: &str = "event-type";
    pub const HAS_LIVE_MUSIC: &str = "has-live-music";
    pub const PERFORMERS: &str = "performers";
    pub const INSTRUMENT_PREFIX: &str = "instrument-";
    pub const EQUIPMENT_PREFIX: &str = "equip-";
    pub const LOCATION_NAME: &str = "loc-name";
    pub const EVENT_DATE: &str = "event-date";
    pub const EVENT_DETAILS: &str = "event-details";
    pub const STUDIO_TYPE: &str = "studio-type";
    pub const STUDIO_DETAILS: &str = "studio-details";
    pub const NABEWERKING_TYPE: &str = "nabewerking-type";
    pub const NABEWERKING_DETAILS: &str = "nabewerking-details";
    pub const ADVIES_WHO: &str = "advies-who";
    pub const ADVIES_GOAL: &str = "advies-goal";
    pub const ADVIES_RUIMTE: &str = "advies-ruimte";
    pub const ADVIES_DOEL: &str = "advies-doel";
    pub const ADVIES_METHODE: &str = "advies-methode";
    pub const ADVIES_GEBRUIK: &str = "advies-gebruik";
    pub const ADVIES_KOPEN_DETAILS: &str = "advies-kopen-details";
    pub const KOPEN_TYPE_PREFIX: &str = "kopen-type-";
    pub const ANDERS_DETAILS: &str = "anders-details";
    pub const CONTACT_NAME: &str = "contact-name";
    pub const CONTACT_EMAIL: &str = "contact-email";
    pub const CONTACT_PHONE: &str = "contact-phone";
    pub const CONTACT_PREF: &str = "contact-pref";
}

/// A single answer: free text / a chosen option, or a checkbox flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Flag(bool),
}

impl AnswerValue {
    /// Whether the value counts as "filled in": non-empty text or a set flag.
    pub fn is_present(&self) -> bool {
        match self {
            AnswerValue::Text(text) => !text.is_empty(),
            AnswerValue::Flag(flag) => *flag,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(text) => Some(text),
            AnswerValue::Flag(_) => None,
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(value)
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        AnswerValue::Flag(value)
    }
}

/// How the client wants to be contacted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContactPreference {
    #[default]
    Email,
    Telefoon,
    Whatsapp,
}

impl ContactPreference {
    pub const ALL: [ContactPreference; 3] = [
        ContactPreference::Email,
        ContactPreference::Telefoon,
        ContactPreference::Whatsapp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContactPreference::Email => "email",
            ContactPreference::Telefoon => "telefoon",
            ContactPreference::Whatsapp => "whatsapp",
        }
    }

    /// Label shown in the contact step
    pub fn label(self) -> &'static str {
        match self {
            ContactPreference::Email => "E-mail",
            ContactPreference::Telefoon => "Bellen",
            ContactPreference::Whatsapp => "WhatsApp",
        }
    }
}

impl std::fmt::Display for ContactPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContactPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(ContactPreference::Email),
            "telefoon" => Ok(ContactPreference::Telefoon),
            "whatsapp" => Ok(ContactPreference::Whatsapp),
            _ => Err(format!("Unknown contact preference: {}", s)),
        }
    }
}

/// Mapping from question key to answer.
///
/// Keys are never removed individually; a session reset replaces the whole set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    values: BTreeMap<String, AnswerValue>,
}

impl AnswerSet {
    /// Create an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the answer set a fresh session starts with: only the contact
    /// preference is preset.
    pub fn with_defaults(preference: ContactPreference) -> Self {
        let mut answers = Self::new();
        answers.set(keys::CONTACT_PREF, preference.as_str());
        answers
    }

    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.values.get(key)
    }

    /// Text answer for `key`, if one is stored.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AnswerValue::as_text)
    }

    /// Whether `key` holds a present (non-empty / true) answer.
    pub fn is_present(&self, key: &str) -> bool {
        self.get(key).is_some_and(AnswerValue::is_present)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AnswerValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Flip a checkbox answer. Absent or non-flag values become `true`.
    pub fn toggle(&mut self, key: &str) -> bool {
        let next = !matches!(self.get(key), Some(AnswerValue::Flag(true)));
        self.set(key, next);
        next
    }

    /// Options under a multi-select prefix that are currently checked.
    pub fn checked_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.values.iter().filter_map(move |(key, value)| {
            key.strip_prefix(prefix)
                .filter(|_| value.is_present())
        })
    }

    /// The stored contact preference, falling back to e-mail.
    pub fn contact_preference(&self) -> ContactPreference {
        self.text(keys::CONTACT_PREF)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }
}
