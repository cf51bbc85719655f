//! Synthetic user profile records
//!
//! A [`ProfileRecord`] is one fabricated retail shopper. Every field except
//! `traits` is fixed once the record is created; traits are layered on later
//! by [`ProfileRecord::assign_traits`].
//!
//! Records checked out of a pool are handed around as [`SharedProfile`]
//! handles. All handles to the same record see the same data, so traits
//! assigned through one handle are visible through every other handle.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use tracing::warn;

use crate::types::{Gender, Persona, Platform, TraitOptions, UserId};

/// Shared, mutable handle to a profile record
pub type SharedProfile = Rc<RefCell<ProfileRecord>>;

/// Wrap a record in a fresh shared handle
pub fn share(record: ProfileRecord) -> SharedProfile {
    Rc::new(RefCell::new(record))
}

/// Postal address attached to a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Recipient first name
    pub first_name: String,
    /// Recipient last name
    pub last_name: String,
    /// Street line
    pub address1: String,
    /// Secondary line, usually empty
    pub address2: String,
    /// ISO country code
    pub country: String,
    /// City name
    pub city: String,
    /// State or territory abbreviation
    pub state: String,
    /// Five digit zipcode inside `state`
    pub zipcode: String,
    /// Whether this is the profile's default address
    #[serde(rename = "default")]
    pub is_default: bool,
}

/// Identifiers of one device platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceProfile {
    /// Analytics anonymous id (UUID v4)
    pub anonymous_id: String,
    /// Advertising id (UUID v4), absent on web
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advertising_id: Option<String>,
    /// User agent or platform token
    pub user_agent: String,
    /// Device model, iOS only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// OS version, mobile platforms only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Identifiers for every platform a profile can appear on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platforms {
    /// iOS app identifiers
    pub ios: DeviceProfile,
    /// Android app identifiers
    pub android: DeviceProfile,
    /// Browser identifiers
    pub web: DeviceProfile,
}

impl Platforms {
    /// Identifiers for one platform
    pub fn get(&self, platform: Platform) -> &DeviceProfile {
        match platform {
            Platform::Ios => &self.ios,
            Platform::Android => &self.android,
            Platform::Web => &self.web,
        }
    }
}

/// One synthetic user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileRecord {
    pub(crate) id: UserId,
    pub(crate) gender: Gender,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) email: String,
    pub(crate) age: u32,
    pub(crate) name: String,
    pub(crate) username: String,
    pub(crate) persona: Persona,
    pub(crate) traits: BTreeMap<String, Value>,
    pub(crate) platforms: Platforms,
    pub(crate) addresses: Vec<Address>,
}

impl ProfileRecord {
    /// Unique user id
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Gender
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Given name
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Full display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Login name
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Email address
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Age in whole years
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Shopping persona
    pub fn persona(&self) -> Persona {
        self.persona
    }

    /// Assigned traits
    pub fn traits(&self) -> &BTreeMap<String, Value> {
        &self.traits
    }

    /// Value currently assigned to one trait
    pub fn trait_value(&self, name: &str) -> Option<&Value> {
        self.traits.get(name)
    }

    /// Identifiers for every platform
    pub fn platforms(&self) -> &Platforms {
        &self.platforms
    }

    /// Identifiers for one platform
    pub fn platform(&self, platform: Platform) -> &DeviceProfile {
        self.platforms.get(platform)
    }

    /// All addresses, in order
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    /// The address flagged as default, if any
    pub fn default_address(&self) -> Option<&Address> {
        self.addresses.iter().find(|address| address.is_default)
    }

    /// Pick one candidate per trait and store it, replacing earlier values
    ///
    /// Keys not mentioned in `trait_options` keep their current value.
    /// Passing `None` or an empty map leaves the record untouched.
    pub fn assign_traits<R: Rng + ?Sized>(
        &mut self,
        trait_options: Option<&TraitOptions>,
        rng: &mut R,
    ) {
        let Some(options) = trait_options else {
            return;
        };

        for (name, candidates) in options {
            match candidates.choose(&mut *rng) {
                Some(value) => {
                    self.traits.insert(name.clone(), value.clone());
                }
                None => {
                    warn!(
                        user_id = %self.id,
                        trait_name = %name,
                        "Trait has no candidates; skipping"
                    );
                }
            }
        }
    }

    /// Compact JSON representation
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GeneratorConfig;
    use crate::user::ProfileFactory;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn sample_record() -> ProfileRecord {
        let mut factory = ProfileFactory::with_seed(GeneratorConfig::default(), 5).unwrap();
        factory.create()
    }

    fn color_options() -> TraitOptions {
        let mut options = TraitOptions::new();
        options.insert("favorite_color".to_string(), vec![json!("red"), json!("blue")]);
        options
    }

    #[test]
    fn test_assign_traits_picks_a_candidate() {
        let mut record = sample_record();
        let mut rng = StdRng::seed_from_u64(1);
        let options = color_options();

        for _ in 0..2 {
            record.assign_traits(Some(&options), &mut rng);
            let value = record.trait_value("favorite_color").unwrap();
            assert!(*value == "red" || *value == "blue");
        }
        assert_eq!(record.traits().len(), 1);
    }

    #[test]
    fn test_assign_traits_keeps_unrelated_keys() {
        let mut record = sample_record();
        let mut rng = StdRng::seed_from_u64(2);

        let mut first = TraitOptions::new();
        first.insert("shoe_size".to_string(), vec![json!(9)]);
        record.assign_traits(Some(&first), &mut rng);

        record.assign_traits(Some(&color_options()), &mut rng);

        assert_eq!(record.trait_value("shoe_size"), Some(&json!(9)));
        assert!(record.trait_value("favorite_color").is_some());
    }

    #[test]
    fn test_assign_traits_none_or_empty_is_noop() {
        let mut record = sample_record();
        let before = record.clone();
        let mut rng = StdRng::seed_from_u64(3);

        record.assign_traits(None, &mut rng);
        record.assign_traits(Some(&TraitOptions::new()), &mut rng);

        assert_eq!(record, before);
    }

    #[test]
    fn test_non_string_candidates_keep_their_type() {
        let mut record = sample_record();
        let mut rng = StdRng::seed_from_u64(6);

        let mut options = TraitOptions::new();
        options.insert("size".to_string(), vec![json!(10)]);
        options.insert("newsletter".to_string(), vec![json!(true)]);
        record.assign_traits(Some(&options), &mut rng);

        let value: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
        assert_eq!(value["traits"]["size"], json!(10));
        assert_eq!(value["traits"]["newsletter"], json!(true));
    }

    #[test]
    fn test_shared_handles_observe_trait_mutation() {
        let handle = share(sample_record());
        let other = Rc::clone(&handle);
        let mut rng = StdRng::seed_from_u64(4);

        handle.borrow_mut().assign_traits(Some(&color_options()), &mut rng);

        assert_eq!(
            other.borrow().trait_value("favorite_color"),
            handle.borrow().trait_value("favorite_color")
        );
        assert!(other.borrow().trait_value("favorite_color").is_some());
    }

    #[test]
    fn test_serialized_field_names() {
        let record = sample_record();
        let value: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();

        for field in [
            "id", "gender", "first_name", "last_name", "email", "age", "name", "username",
            "persona", "traits", "platforms", "addresses",
        ] {
            assert!(value.get(field).is_some(), "missing field {}", field);
        }

        let platforms = &value["platforms"];
        assert!(platforms["ios"]["model"].is_string());
        assert!(platforms["android"]["advertising_id"].is_string());
        assert!(platforms["web"].get("advertising_id").is_none());

        let addresses = value["addresses"].as_array().unwrap();
        assert_eq!(addresses.len(), 1);
        assert_eq!(addresses[0]["default"], serde_json::Value::Bool(true));
    }

    #[test]
    fn test_platform_lookup() {
        let record = sample_record();
        assert!(record.platform(Platform::Ios).user_agent.contains("like Mac OS X"));
        assert!(record.platform(Platform::Android).user_agent.starts_with("Android "));
        assert!(record.platform(Platform::Web).model.is_none());
    }
}
