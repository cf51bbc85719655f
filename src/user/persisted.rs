//! Persisted profile schema
//!
//! Pool files may have been written by older builds that lacked some fields.
//! [`PersistedProfile`] mirrors [`ProfileRecord`] with every field optional;
//! restoring a record starts from a freshly fabricated placeholder and
//! overwrites it field by field with whatever the file provided.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use crate::types::{Gender, Persona, UserId};
use crate::user::{Address, Platforms, ProfileRecord};

/// One profile as read from a pool file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedProfile {
    /// User id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    /// Gender code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Given name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Age in whole years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Full display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Login name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Shopping persona
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<Persona>,
    /// Assigned traits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traits: Option<BTreeMap<String, serde_json::Value>>,
    /// Platform identifiers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Platforms>,
    /// Postal addresses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<Address>>,
    /// Keys this build does not know about; never copied onto a record
    #[serde(flatten)]
    pub unknown: BTreeMap<String, serde_json::Value>,
}

impl From<&ProfileRecord> for PersistedProfile {
    fn from(record: &ProfileRecord) -> Self {
        Self {
            id: Some(record.id),
            gender: Some(record.gender),
            first_name: Some(record.first_name.clone()),
            last_name: Some(record.last_name.clone()),
            email: Some(record.email.clone()),
            age: Some(record.age),
            name: Some(record.name.clone()),
            username: Some(record.username.clone()),
            persona: Some(record.persona),
            traits: Some(record.traits.clone()),
            platforms: Some(record.platforms.clone()),
            addresses: Some(record.addresses.clone()),
            unknown: BTreeMap::new(),
        }
    }
}

impl PersistedProfile {
    /// Names of the known fields missing from this entry
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let present = [
            ("id", self.id.is_some()),
            ("gender", self.gender.is_some()),
            ("first_name", self.first_name.is_some()),
            ("last_name", self.last_name.is_some()),
            ("email", self.email.is_some()),
            ("age", self.age.is_some()),
            ("name", self.name.is_some()),
            ("username", self.username.is_some()),
            ("persona", self.persona.is_some()),
            ("traits", self.traits.is_some()),
            ("platforms", self.platforms.is_some()),
            ("addresses", self.addresses.is_some()),
        ];

        present.iter().filter(|(_, is_present)| !is_present).map(|(field, _)| *field).collect()
    }
}

impl ProfileRecord {
    /// Overwrite every field present in `persisted`
    ///
    /// Absent fields keep their current value. Unknown keys are logged and
    /// dropped.
    pub fn merge(&mut self, persisted: PersistedProfile) {
        let PersistedProfile {
            id,
            gender,
            first_name,
            last_name,
            email,
            age,
            name,
            username,
            persona,
            traits,
            platforms,
            addresses,
            unknown,
        } = persisted;

        if let Some(value) = id {
            self.id = value;
        }
        if let Some(value) = gender {
            self.gender = value;
        }
        if let Some(value) = first_name {
            self.first_name = value;
        }
        if let Some(value) = last_name {
            self.last_name = value;
        }
        if let Some(value) = email {
            self.email = value;
        }
        if let Some(value) = age {
            self.age = value;
        }
        if let Some(value) = name {
            self.name = value;
        }
        if let Some(value) = username {
            self.username = value;
        }
        if let Some(value) = persona {
            self.persona = value;
        }
        if let Some(value) = traits {
            self.traits = value;
        }
        if let Some(value) = platforms {
            self.platforms = value;
        }
        if let Some(value) = addresses {
            self.addresses = value;
        }

        for key in unknown.keys() {
            warn!(user_id = %self.id, field = %key, "Ignoring unknown profile field");
        }
    }
}
