//! Record Store Invariant Tests
//!
//! - Ids are dense from 1 and unique, also under concurrent writers
//! - Reads are repeatable with no intervening write
//! - Acknowledged writes survive reopening the file
//! - Credentials verify without the hash ever leaving the store

use std::collections::HashSet;
use std::fs;
use std::sync::Arc;
use std::thread;

use chirpy::store::{RecordStore, StoreError, UserPublic};
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

fn create_store() -> (TempDir, RecordStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = RecordStore::open(temp_dir.path().join("database.json"))
        .expect("Failed to open store");
    (temp_dir, store)
}

// =============================================================================
// Id Assignment
// =============================================================================

#[test]
fn test_sequential_ids_are_dense_from_one() {
    let (_temp, store) = create_store();

    let ids: Vec<u64> = (0..10)
        .map(|i| store.create_chirp(&format!("chirp {}", i)).unwrap().id)
        .collect();

    assert_eq!(ids, (1..=10).collect::<Vec<u64>>());
}

#[test]
fn test_chirp_and_user_ids_are_independent() {
    let (_temp, store) = create_store();

    store.create_chirp("one").unwrap();
    store.create_chirp("two").unwrap();
    let user = store.create_user("a@b.com", "secret").unwrap();

    assert_eq!(user.id, 1);
    assert_eq!(store.create_chirp("three").unwrap().id, 3);
}

#[test]
fn test_concurrent_creates_assign_unique_dense_ids() {
    const WRITERS: usize = 16;
    const PER_WRITER: usize = 5;

    let (_temp, store) = create_store();
    let store = Arc::new(store);

    let handles: Vec<_> = (0..WRITERS)
        .map(|w| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..PER_WRITER)
                    .map(|i| store.create_chirp(&format!("w{} c{}", w, i)).unwrap().id)
                    .collect::<Vec<u64>>()
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.extend(handle.join().unwrap());
    }

    let total = (WRITERS * PER_WRITER) as u64;
    let unique: HashSet<u64> = ids.iter().copied().collect();
    assert_eq!(ids.len() as u64, total, "every create must succeed");
    assert_eq!(
        unique,
        (1..=total).collect::<HashSet<u64>>(),
        "ids must be exactly 1..=M"
    );
    assert_eq!(store.chirp_count().unwrap() as u64, total);
}

#[test]
fn test_mixed_concurrent_writers_keep_both_sequences_dense() {
    const WRITERS: u64 = 4;

    let (_temp, store) = create_store();
    let store = Arc::new(store);

    let handles: Vec<_> = (0..WRITERS)
        .map(|w| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let user = store
                    .create_user(&format!("user{}@example.com", w), "pw")
                    .unwrap();
                let chirp = store.create_chirp(&format!("from {}", w)).unwrap();
                (user.id, chirp.id)
            })
        })
        .collect();

    let (user_ids, chirp_ids): (HashSet<u64>, HashSet<u64>) =
        handles.into_iter().map(|h| h.join().unwrap()).unzip();

    let expected: HashSet<u64> = (1..=WRITERS).collect();
    assert_eq!(user_ids, expected);
    assert_eq!(chirp_ids, expected);
    assert_eq!(store.user_count().unwrap(), WRITERS as usize);

    // Every concurrently hashed password still verifies
    for w in 0..WRITERS {
        store
            .authenticate(&format!("user{}@example.com", w), "pw")
            .unwrap();
    }
}

#[test]
fn test_concurrent_readers_and_writers() {
    let (_temp, store) = create_store();
    let store = Arc::new(store);

    thread::scope(|s| {
        for _ in 0..4 {
            let store = Arc::clone(&store);
            s.spawn(move || {
                for i in 0..10 {
                    store.create_chirp(&format!("c{}", i)).unwrap();
                }
            });
        }
        for _ in 0..4 {
            let store = Arc::clone(&store);
            s.spawn(move || {
                for _ in 0..20 {
                    // Never a partial document
                    let chirps = store.list_chirps().unwrap();
                    assert!(chirps.len() <= 40);
                }
            });
        }
    });

    assert_eq!(store.chirp_count().unwrap(), 40);
}

// =============================================================================
// Reads
// =============================================================================

#[test]
fn test_round_trip() {
    let (_temp, store) = create_store();

    let created = store.create_chirp("hello world").unwrap();
    let fetched = store.get_chirp(created.id).unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.body, "hello world");
}

#[test]
fn test_list_is_repeatable() {
    let (_temp, store) = create_store();
    for body in ["a", "b", "c"] {
        store.create_chirp(body).unwrap();
    }

    let mut first = store.list_chirps().unwrap();
    let mut second = store.list_chirps().unwrap();
    first.sort_by_key(|c| c.id);
    second.sort_by_key(|c| c.id);

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn test_list_empty_store_is_not_an_error() {
    let (_temp, store) = create_store();
    assert_eq!(store.list_chirps().unwrap(), vec![]);
}

#[test]
fn test_get_unknown_chirp_is_not_found() {
    let (_temp, store) = create_store();
    store.create_chirp("only").unwrap();

    assert!(matches!(store.get_chirp(2), Err(StoreError::NotFound(_))));
    assert!(matches!(store.get_chirp(0), Err(StoreError::NotFound(_))));
}

// =============================================================================
// Durability
// =============================================================================

#[test]
fn test_acknowledged_chirp_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("database.json");

    let created = {
        let store = RecordStore::open(&path).unwrap();
        store.create_chirp("durable").unwrap()
    };

    let reopened = RecordStore::open(&path).unwrap();
    assert_eq!(reopened.get_chirp(created.id).unwrap(), created);
}

#[test]
fn test_file_is_always_a_complete_document() {
    let (_temp, store) = create_store();

    for i in 0..5 {
        store.create_chirp(&format!("chirp {}", i)).unwrap();
        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&raw).expect("file must always parse");
        assert_eq!(value["chirps"].as_object().unwrap().len(), i + 1);
    }
}

#[test]
fn test_unreadable_document_is_storage_unavailable() {
    let (_temp, store) = create_store();
    fs::write(store.path(), "[1, 2").unwrap();

    assert!(matches!(
        store.get_chirp(1),
        Err(StoreError::StorageUnavailable(_))
    ));
    assert!(matches!(
        store.authenticate("a@b.com", "x"),
        Err(StoreError::StorageUnavailable(_))
    ));
}

// =============================================================================
// Credentials
// =============================================================================

#[test]
fn test_auth_round_trip() {
    let (_temp, store) = create_store();

    let created = store.create_user("a@b.com", "secret").unwrap();
    let authed = store.authenticate("a@b.com", "secret").unwrap();

    assert_eq!(
        authed,
        UserPublic {
            id: created.id,
            email: "a@b.com".to_string()
        }
    );

    let json = serde_json::to_string(&authed).unwrap();
    assert!(!json.contains("password"));
    assert!(!json.contains("argon2"));
}

#[test]
fn test_wrong_password_is_invalid_credentials() {
    let (_temp, store) = create_store();
    store.create_user("a@b.com", "secret").unwrap();

    assert_eq!(
        store.authenticate("a@b.com", "wrong"),
        Err(StoreError::InvalidCredentials)
    );
}

#[test]
fn test_unknown_email_is_not_found() {
    let (_temp, store) = create_store();
    store.create_user("a@b.com", "secret").unwrap();

    assert!(matches!(
        store.authenticate("nobody@x.com", "x"),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn test_email_match_is_exact() {
    let (_temp, store) = create_store();
    store.create_user("a@b.com", "secret").unwrap();

    assert!(matches!(
        store.authenticate("A@B.COM", "secret"),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn test_users_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("database.json");

    RecordStore::open(&path)
        .unwrap()
        .create_user("a@b.com", "secret")
        .unwrap();

    let reopened = RecordStore::open(&path).unwrap();
    assert_eq!(reopened.authenticate("a@b.com", "secret").unwrap().id, 1);
    assert_eq!(reopened.user_count().unwrap(), 1);
}
