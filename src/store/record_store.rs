//! # Record Store
//!
//! A single JSON file holding the whole [`Document`], guarded by one
//! process-wide read/write lock.
//!
//! Every operation loads the document fresh from disk. Mutations hold the
//! write lock across load, id assignment and persist, so ids assigned as
//! `count + 1` stay unique under concurrent writers. Persisting writes a
//! sibling temp file, fsyncs it and renames it over the backing file; readers
//! never see a partial document.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::document::{Chirp, Document, RecordId, UserPublic, UserRecord};
use super::errors::{StoreError, StoreResult};
use crate::auth::{hash_password, verify_password};
use crate::observability::{log_event_with_fields, Event};

/// File-backed store for chirps and users
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl RecordStore {
    /// Open the store at `path`, creating an empty file (and parent
    /// directories) if it does not exist. Content is not read here.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        if path.file_name().is_none() {
            return Err(StoreError::StorageUnavailable(format!(
                "Database path has no file name: {}",
                path.display()
            )));
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| StoreError::io("Failed to create database directory", e))
                .map_err(report)?;
        }

        // append(true) so an existing database is never truncated
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| StoreError::io("Failed to open database file", e))
            .map_err(report)?;

        log_event_with_fields(
            Event::StoreOpened,
            &[("path", path.display().to_string().as_str())],
        );

        Ok(Self {
            path,
            lock: RwLock::new(()),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ==================
    // Chirps
    // ==================

    /// Store a new chirp. The body must already be validated and filtered.
    pub fn create_chirp(&self, body: &str) -> StoreResult<Chirp> {
        self.mutate(|doc| {
            let chirp = Chirp {
                id: doc.next_chirp_id(),
                body: body.to_string(),
            };
            doc.chirps.insert(chirp.id, chirp.clone());
            Ok(chirp)
        })
    }

    /// All chirps. Callers must not rely on the order.
    pub fn list_chirps(&self) -> StoreResult<Vec<Chirp>> {
        self.read(|doc| Ok(doc.chirps.values().cloned().collect()))
    }

    /// One chirp by id
    pub fn get_chirp(&self, id: RecordId) -> StoreResult<Chirp> {
        self.read(|doc| {
            doc.chirps
                .get(&id)
                .cloned()
                .ok_or_else(|| StoreError::NotFound(format!("Chirp {}", id)))
        })
    }

    pub fn chirp_count(&self) -> StoreResult<usize> {
        self.read(|doc| Ok(doc.chirps.len()))
    }

    // ==================
    // Users
    // ==================

    /// Register a user. Returns the public view; the hash stays on disk.
    pub fn create_user(&self, email: &str, password: &str) -> StoreResult<UserPublic> {
        // Hashing is slow and needs no document state, so it runs before the
        // write lock is taken. Id assignment still happens under the lock.
        let password_hash = hash_password(password).map_err(StoreError::from).map_err(report)?;

        self.mutate(|doc| {
            let user = UserRecord {
                id: doc.next_user_id(),
                email: email.to_string(),
                password_hash,
            };
            let public = UserPublic::from(&user);
            doc.users.insert(user.id, user);
            Ok(public)
        })
    }

    /// Check an email/password pair
    ///
    /// `NotFound` when no user has the email, `InvalidCredentials` when the
    /// password does not match.
    pub fn authenticate(&self, email: &str, password: &str) -> StoreResult<UserPublic> {
        let user = self.read(|doc| {
            doc.find_user_by_email(email)
                .cloned()
                .ok_or_else(|| StoreError::NotFound(format!("User {}", email)))
        })?;

        if verify_password(password, &user.password_hash)
            .map_err(StoreError::from)
            .map_err(report)?
        {
            Ok(UserPublic::from(&user))
        } else {
            Err(StoreError::InvalidCredentials)
        }
    }

    pub fn user_count(&self) -> StoreResult<usize> {
        self.read(|doc| Ok(doc.users.len()))
    }

    // ==================
    // Locking
    // ==================

    /// Run `f` against a fresh load under the shared lock
    fn read<T>(&self, f: impl FnOnce(&Document) -> StoreResult<T>) -> StoreResult<T> {
        let _guard = self.lock.read().map_err(|_| StoreError::lock_poisoned())?;
        let doc = self.load()?;
        f(&doc)
    }

    /// Load, apply `f`, persist; all under the exclusive lock
    ///
    /// Nothing is written if `f` fails.
    fn mutate<T>(&self, f: impl FnOnce(&mut Document) -> StoreResult<T>) -> StoreResult<T> {
        let _guard = self.lock.write().map_err(|_| StoreError::lock_poisoned())?;
        let mut doc = self.load()?;
        let result = f(&mut doc)?;
        self.persist(&doc)?;
        Ok(result)
    }

    // ==================
    // Disk I/O (caller holds the lock)
    // ==================

    fn load(&self) -> StoreResult<Document> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::io("Failed to read database", e))
            .map_err(report)?;

        if content.trim().is_empty() {
            return Ok(Document::default());
        }

        // A literal `null` document is treated like an empty file
        serde_json::from_str::<Option<Document>>(&content)
            .map(Option::unwrap_or_default)
            .map_err(|e| StoreError::json("Failed to parse database", e))
            .map_err(report)
    }

    fn persist(&self, doc: &Document) -> StoreResult<()> {
        let json = serde_json::to_vec(doc)
            .map_err(|e| StoreError::json("Failed to serialize database", e))
            .map_err(report)?;

        let tmp_path = self.tmp_path();
        write_synced(&tmp_path, &json).map_err(report)?;

        fs::rename(&tmp_path, &self.path)
            .map_err(|e| StoreError::io("Failed to replace database file", e))
            .map_err(report)?;

        sync_parent_dir(&self.path).map_err(report)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Write `data` to a fresh file at `path` and fsync it
fn write_synced(path: &Path, data: &[u8]) -> StoreResult<()> {
    let mut file =
        File::create(path).map_err(|e| StoreError::io("Failed to create temp database", e))?;

    file.write_all(data)
        .map_err(|e| StoreError::io("Failed to write temp database", e))?;

    file.sync_all()
        .map_err(|e| StoreError::io("Failed to fsync temp database", e))
}

/// fsync the directory holding `path` so a rename inside it is durable
#[cfg(unix)]
fn sync_parent_dir(path: &Path) -> StoreResult<()> {
    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(p) => p,
        None => Path::new("."),
    };

    let dir = OpenOptions::new()
        .read(true)
        .open(parent)
        .map_err(|e| StoreError::io("Failed to open database directory", e))?;

    dir.sync_all()
        .map_err(|e| StoreError::io("Failed to fsync database directory", e))
}

#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) -> StoreResult<()> {
    Ok(())
}

/// Log a storage failure and pass it through
fn report(err: StoreError) -> StoreError {
    if !err.is_client_error() {
        log_event_with_fields(Event::StorageFailure, &[("error", err.to_string().as_str())]);
    }
    err
}
