//! The user pool
//!
//! A [`UserPool`] partitions its profile records into an *available* set and an
//! *active* set, and mirrors the union of both into a single JSON file.
//! Records only ever move from available to active.

use rand::Rng;
use std::cell::Ref;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, info, warn};

use crate::pool::{PoolError, PoolResult, PoolStatistics};
use crate::types::{TraitOptions, UserId};
use crate::user::{share, PersistedProfile, ProfileFactory, ProfileRecord, SharedProfile};
use crate::{perf_span, pool_event};

/// Pool of synthetic users backed by a file
#[derive(Debug)]
pub struct UserPool {
    file: PathBuf,
    available: Vec<SharedProfile>,
    active: Vec<SharedProfile>,
    factory: ProfileFactory,
}

impl UserPool {
    /// Load a pool from `path`
    ///
    /// Every persisted record becomes available and the active set starts
    /// empty. The file must exist and hold a JSON array of profiles, possibly
    /// empty.
    pub fn load(path: impl AsRef<Path>, mut factory: ProfileFactory) -> PoolResult<Self> {
        let path = path.as_ref();
        let _span = perf_span!("load_pool", path = %path.display()).entered();

        let file = File::open(path).map_err(|e| PoolError::load_error(path, e))?;
        let entries: Vec<PersistedProfile> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| PoolError::load_error(path, e))?;

        let mut available = Vec::with_capacity(entries.len());
        for entry in entries {
            if let Some(id) = entry.id {
                if !factory.reserve_id(id) {
                    warn!(user_id = %id, path = %path.display(), "Duplicate user id in pool file");
                }
            }
            available.push(share(factory.restore(entry)));
        }

        pool_event!(info, "User pool loaded", path = %path.display(), users = available.len());

        Ok(Self { file: path.to_path_buf(), available, active: Vec::new(), factory })
    }

    /// Create `path` holding an empty pool unless it already exists
    ///
    /// Returns `true` when the file was created.
    pub fn initialize_file(path: impl AsRef<Path>) -> PoolResult<bool> {
        let path = path.as_ref();
        if path.exists() {
            debug!(path = %path.display(), "Pool file already present");
            return Ok(false);
        }

        fs::write(path, "[]").map_err(|e| PoolError::persistence_error(path, e))?;
        info!(path = %path.display(), "Created empty pool file");
        Ok(true)
    }

    /// Total number of users, available and active
    pub fn size(&self) -> usize {
        self.available.len() + self.active.len()
    }

    /// Number of checked out users
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Number of users not yet checked out
    pub fn available_count(&self) -> usize {
        self.available.len()
    }

    /// Backing file of this pool
    pub fn file_path(&self) -> &Path {
        &self.file
    }

    /// Fabricate `count` new users and make them available
    ///
    /// Nothing is written to disk.
    pub fn grow_pool(&mut self, count: usize) {
        let _span = perf_span!("grow_pool", count = count).entered();

        self.available.reserve(count);
        for _ in 0..count {
            self.available.push(share(self.factory.create()));
        }

        pool_event!(
            info,
            "User pool grown",
            added = count,
            available = self.available.len(),
            total = self.size()
        );
    }

    /// Hand out one user
    ///
    /// When no user is available the pool first grows by the configured batch
    /// size and rewrites its backing file. With `select_active` set and at
    /// least one user already active, a random active user is returned and
    /// stays active. Otherwise a random available user moves to the active set.
    ///
    /// The returned handle shares its record with the pool, so trait changes
    /// made through it are seen by every other holder.
    pub fn checkout(&mut self, select_active: bool) -> PoolResult<SharedProfile> {
        if self.available.is_empty() {
            let batch = self.factory.config().growth_batch_size;
            pool_event!(info, "No users available; growing pool", batch = batch);
            self.grow_pool(batch);
            self.persist()?;
        }

        if select_active && !self.active.is_empty() {
            let index = self.factory.rng().gen_range(0..self.active.len());
            let record = Rc::clone(&self.active[index]);
            debug!(user_id = %record.borrow().id(), "Reusing active user");
            return Ok(record);
        }

        if self.available.is_empty() {
            return Err(PoolError::configuration_error(
                "growth batch size produced no available users",
            ));
        }

        let index = self.factory.rng().gen_range(0..self.available.len());
        let record = self.available.swap_remove(index);
        self.active.push(Rc::clone(&record));

        debug!(
            user_id = %record.borrow().id(),
            active = self.active.len(),
            available = self.available.len(),
            "Checked out user"
        );
        Ok(record)
    }

    /// Write every user to `path`, available users first
    ///
    /// Existing content is replaced. On failure the in-memory pool is left as
    /// it was.
    pub fn save(&self, path: impl AsRef<Path>) -> PoolResult<()> {
        let path = path.as_ref();
        let _span = perf_span!("save_pool", path = %path.display()).entered();

        let borrowed: Vec<Ref<'_, ProfileRecord>> =
            self.available.iter().chain(self.active.iter()).map(|record| record.borrow()).collect();
        let records: Vec<&ProfileRecord> = borrowed.iter().map(|record| &**record).collect();

        let payload =
            serde_json::to_vec(&records).map_err(|e| PoolError::persistence_error(path, e))?;

        let file = File::create(path).map_err(|e| PoolError::persistence_error(path, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(&payload)
            .and_then(|_| writer.flush())
            .map_err(|e| PoolError::persistence_error(path, e))?;

        pool_event!(info, "User pool saved", path = %path.display(), users = records.len());
        Ok(())
    }

    /// Write every user to the pool's own backing file
    pub fn persist(&self) -> PoolResult<()> {
        self.save(&self.file)
    }

    /// Assign traits to a handed out user using the pool's random source
    pub fn assign_traits(&mut self, record: &SharedProfile, trait_options: Option<&TraitOptions>) {
        record.borrow_mut().assign_traits(trait_options, self.factory.rng());
    }

    /// Ids of every user in the pool
    pub fn user_ids(&self) -> HashSet<UserId> {
        collect_ids(self.available.iter().chain(self.active.iter()))
    }

    /// Ids of checked out users
    pub fn active_ids(&self) -> HashSet<UserId> {
        collect_ids(self.active.iter())
    }

    /// Ids of users not yet checked out
    pub fn available_ids(&self) -> HashSet<UserId> {
        collect_ids(self.available.iter())
    }

    /// Snapshot statistics of the pool
    pub fn statistics(&self) -> PoolStatistics {
        let available: Vec<_> = self.available.iter().map(|record| record.borrow()).collect();
        let active: Vec<_> = self.active.iter().map(|record| record.borrow()).collect();
        PoolStatistics::collect(
            available.iter().map(|record| &**record),
            active.iter().map(|record| &**record),
        )
    }
}

fn collect_ids<'a>(records: impl Iterator<Item = &'a SharedProfile>) -> HashSet<UserId> {
    records.map(|record| record.borrow().id()).collect()
}
