//! Profile fabrication
//!
//! This module contains the [`ProfileFactory`], which turns a validated
//! [`GeneratorConfig`] into fully populated [`ProfileRecord`]s.

use rand::{Rng, RngCore};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, trace};
use uuid::Uuid;

use crate::types::{
    ConfigValidationError, Gender, GeneratorConfig, PlatformTemplates, UserId, USER_ID_RANGE,
};
use crate::user::corpus::{
    CITY_PREFIXES, CITY_SUFFIXES, FEMALE_FIRST_NAMES, LAST_NAMES, MALE_FIRST_NAMES,
    STATE_ZIP_RANGES, STREET_SUFFIXES,
};
use crate::user::{Address, DeviceProfile, PersistedProfile, Platforms, ProfileRecord};

/// Generator for synthetic user profiles
pub struct ProfileFactory {
    config: GeneratorConfig,
    rng: Box<dyn RngCore>,
    issued_ids: HashSet<UserId>,
}

impl fmt::Debug for ProfileFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileFactory")
            .field("config", &self.config)
            .field("issued_ids", &self.issued_ids.len())
            .finish()
    }
}

impl ProfileFactory {
    /// Create a new factory, seeded from `config.seed` when present
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigValidationError> {
        match config.seed {
            Some(seed) => Self::with_seed(config, seed),
            None => {
                config.validate()?;
                Ok(Self::with_rng(config, Box::new(rand::thread_rng())))
            }
        }
    }

    /// Create a new factory with a specific seed for reproducible results
    pub fn with_seed(config: GeneratorConfig, seed: u64) -> Result<Self, ConfigValidationError> {
        use rand::SeedableRng;
        config.validate()?;
        Ok(Self::with_rng(config, Box::new(rand::rngs::StdRng::seed_from_u64(seed))))
    }

    fn with_rng(config: GeneratorConfig, rng: Box<dyn RngCore>) -> Self {
        debug!(seed = ?config.seed, "Profile factory ready");
        Self { config, rng, issued_ids: HashSet::new() }
    }

    /// Configuration this factory fabricates with
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Random source shared with the owning pool
    pub fn rng(&mut self) -> &mut dyn RngCore {
        &mut *self.rng
    }

    /// Number of ids issued or reserved so far
    pub fn issued_count(&self) -> usize {
        self.issued_ids.len()
    }

    /// Mark an id as taken so it is never issued again
    ///
    /// Returns `false` when the id was already known.
    pub fn reserve_id(&mut self, id: UserId) -> bool {
        self.issued_ids.insert(id)
    }

    /// Fabricate one fully populated profile with a fresh id
    pub fn create(&mut self) -> ProfileRecord {
        let id = self.fresh_id();
        let gender = self.choose_gender();

        let first_name = match gender {
            Gender::Female => pick(&mut *self.rng, FEMALE_FIRST_NAMES),
            Gender::Male => pick(&mut *self.rng, MALE_FIRST_NAMES),
        }
        .to_string();
        let last_name = pick(&mut *self.rng, LAST_NAMES).to_string();

        let email = format!(
            "{}.{}@{}",
            first_name.replace(' ', "").to_lowercase(),
            last_name.replace(' ', "").to_lowercase(),
            self.config.email_domain
        );
        let age = self.config.age.sample(&mut *self.rng);
        let persona = *pick(&mut *self.rng, &self.config.personas);
        let platforms = self.fabricate_platforms();
        let address = self.fabricate_address(&first_name, &last_name);

        trace!(user_id = %id, %persona, age, "Fabricated profile");

        ProfileRecord {
            id,
            gender,
            name: format!("{} {}", first_name, last_name),
            username: format!("user{}", id),
            first_name,
            last_name,
            email,
            age,
            persona,
            traits: Default::default(),
            platforms,
            addresses: vec![address],
        }
    }

    /// Rebuild a record from its persisted form
    ///
    /// A placeholder is fabricated first and then overwritten by every field
    /// the entry carries; fields missing from the entry keep placeholder
    /// values. The placeholder id is released again when the entry carries
    /// its own.
    pub fn restore(&mut self, persisted: PersistedProfile) -> ProfileRecord {
        let missing = persisted.missing_fields();
        if !missing.is_empty() {
            debug!(?missing, "Persisted profile lacks fields; keeping generated values");
        }

        let mut record = self.create();
        let placeholder_id = record.id;
        record.merge(persisted);

        if record.id != placeholder_id {
            self.issued_ids.remove(&placeholder_id);
            self.issued_ids.insert(record.id);
        }
        record
    }

    fn fresh_id(&mut self) -> UserId {
        loop {
            let id = UserId::new(self.rng.gen_range(USER_ID_RANGE));
            if self.issued_ids.insert(id) {
                return id;
            }
            debug!(user_id = %id, "User id collision; drawing again");
        }
    }

    fn choose_gender(&mut self) -> Gender {
        if self.rng.gen_bool(self.config.female_ratio) {
            Gender::Female
        } else {
            Gender::Male
        }
    }

    fn fabricate_platforms(&mut self) -> Platforms {
        let templates: &PlatformTemplates = &self.config.platforms;
        let rng = &mut *self.rng;

        let device = pick(rng, &templates.apple_devices).clone();
        let ios_version = format!(
            "{}_{}",
            rng.gen_range(templates.ios_min_major..=templates.ios_max_major),
            rng.gen_range(0..=templates.ios_max_minor)
        );
        let ios_token = format!("{0}; CPU {0} OS {1} like Mac OS X", device, ios_version);

        let android_version = pick(rng, &templates.android_versions).clone();
        let android_token = format!("Android {}", android_version);

        let web_agent = pick(rng, &templates.web_user_agents).clone();

        Platforms {
            ios: DeviceProfile {
                anonymous_id: Uuid::new_v4().to_string(),
                advertising_id: Some(Uuid::new_v4().to_string()),
                user_agent: ios_token,
                model: Some(device),
                version: Some(ios_version),
            },
            android: DeviceProfile {
                anonymous_id: Uuid::new_v4().to_string(),
                advertising_id: Some(Uuid::new_v4().to_string()),
                user_agent: android_token,
                model: None,
                version: Some(android_version),
            },
            web: DeviceProfile {
                anonymous_id: Uuid::new_v4().to_string(),
                advertising_id: None,
                user_agent: web_agent,
                model: None,
                version: None,
            },
        }
    }

    fn fabricate_address(&mut self, first_name: &str, last_name: &str) -> Address {
        let rng = &mut *self.rng;

        let building_number = match rng.gen_range(0..3) {
            0 => rng.gen_range(100..1_000),
            1 => rng.gen_range(1_000..10_000),
            _ => rng.gen_range(10_000..100_000),
        };
        let street_root = if rng.gen_bool(0.5) {
            pick(rng, LAST_NAMES)
        } else {
            pick(rng, MALE_FIRST_NAMES)
        };
        let address1 =
            format!("{} {} {}", building_number, street_root, pick(rng, STREET_SUFFIXES));

        let city_root = pick(rng, FEMALE_FIRST_NAMES).replace(' ', "");
        let city = if rng.gen_bool(0.3) {
            format!("{} {}{}", pick(rng, CITY_PREFIXES), city_root, pick(rng, CITY_SUFFIXES))
        } else {
            format!("{}{}", city_root, pick(rng, CITY_SUFFIXES))
        };

        let (state, zip_low, zip_high) = *pick(rng, STATE_ZIP_RANGES);
        let zipcode = format!("{:05}", rng.gen_range(zip_low..=zip_high));

        Address {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            address1,
            address2: String::new(),
            country: self.config.country.clone(),
            city,
            state: state.to_string(),
            zipcode,
            is_default: true,
        }
    }
}

/// Uniform choice from a slice that configuration validation keeps non-empty
fn pick<'a, T>(rng: &mut dyn RngCore, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}
