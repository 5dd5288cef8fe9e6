//! Centralized access to browser local storage.
//!
//! Every page reads and writes session-scoped state through [`SessionStore`]
//! signals; nothing else touches the raw keys. Malformed or missing payloads
//! decode to the empty value instead of surfacing an error.

use std::collections::BTreeMap;

use leptos::prelude::*;
use shared_types::StoredUser;

use crate::hooks::optimistic::{EngagementKind, EngagementLedger};

pub const USER_KEY: &str = "user";
pub const PENDING_VERIFICATION_KEY: &str = "pendingVerificationEmail";
pub const CAPSULE_LIKES_KEY: &str = "user_capsule_likes";
pub const CAPSULE_BOOKMARKS_KEY: &str = "user_capsule_bookmarks";

fn storage_get(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_namespace = localStorage)]
            fn getItem(key: &str) -> Option<String>;
        }

        getItem(key)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

fn storage_set(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_namespace = localStorage)]
            fn setItem(key: &str, value: &str);
        }

        setItem(key, value);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

fn storage_remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_namespace = localStorage)]
            fn removeItem(key: &str);
        }

        removeItem(key);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

fn decode_user(raw: Option<String>) -> Option<StoredUser> {
    raw.and_then(|raw| serde_json::from_str(&raw).ok())
}

/// Engagement payloads are a JSON object keyed by user id, each slot holding
/// that user's item ids. Anything unparseable reads as empty.
fn decode_engagement(raw: Option<&str>, user_id: i64) -> Vec<i64> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    let map: BTreeMap<String, Vec<i64>> = serde_json::from_str(raw).unwrap_or_default();
    map.get(&user_id.to_string()).cloned().unwrap_or_default()
}

/// Rewrites one user's slot, leaving other users' entries untouched.
fn encode_engagement(raw: Option<&str>, user_id: i64, ledger: &EngagementLedger) -> String {
    let mut map: BTreeMap<String, Vec<i64>> = raw
        .and_then(|raw| serde_json::from_str(raw).ok())
        .unwrap_or_default();
    map.insert(user_id.to_string(), ledger.ids_sorted());
    serde_json::to_string(&map).unwrap_or_else(|_| "{}".to_string())
}

#[derive(Clone, Copy)]
pub struct SessionStore {
    user: RwSignal<Option<StoredUser>>,
    pending_verification_email: RwSignal<Option<String>>,
    capsule_likes: RwSignal<EngagementLedger>,
    capsule_bookmarks: RwSignal<EngagementLedger>,
}

pub fn provide_session() -> SessionStore {
    let store = SessionStore {
        user: RwSignal::new(None),
        pending_verification_email: RwSignal::new(None),
        capsule_likes: RwSignal::new(EngagementLedger::default()),
        capsule_bookmarks: RwSignal::new(EngagementLedger::default()),
    };
    provide_context(store);

    // Hydrate the signals from storage once the client mounts.
    Effect::new(move |_| store.load_from_storage());

    store
}

pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

impl SessionStore {
    fn load_from_storage(&self) {
        if let Some(user) = decode_user(storage_get(USER_KEY)) {
            self.capsule_likes.set(EngagementLedger::from_ids(
                decode_engagement(storage_get(CAPSULE_LIKES_KEY).as_deref(), user.id),
            ));
            self.capsule_bookmarks.set(EngagementLedger::from_ids(
                decode_engagement(storage_get(CAPSULE_BOOKMARKS_KEY).as_deref(), user.id),
            ));
            self.user.set(Some(user));
        }
        self.pending_verification_email
            .set(storage_get(PENDING_VERIFICATION_KEY).filter(|email| !email.is_empty()));
    }

    pub fn current_user(&self) -> Option<StoredUser> {
        self.user.get()
    }

    pub fn current_user_untracked(&self) -> Option<StoredUser> {
        self.user.get_untracked()
    }

    pub fn sign_in(&self, user: StoredUser) {
        if let Ok(raw) = serde_json::to_string(&user) {
            storage_set(USER_KEY, &raw);
        }
        self.capsule_likes.set(EngagementLedger::from_ids(
            decode_engagement(storage_get(CAPSULE_LIKES_KEY).as_deref(), user.id),
        ));
        self.capsule_bookmarks.set(EngagementLedger::from_ids(
            decode_engagement(storage_get(CAPSULE_BOOKMARKS_KEY).as_deref(), user.id),
        ));
        self.user.set(Some(user));
        self.clear_pending_verification();
    }

    pub fn sign_out(&self) {
        storage_remove(USER_KEY);
        self.user.set(None);
        self.capsule_likes.set(EngagementLedger::default());
        self.capsule_bookmarks.set(EngagementLedger::default());
    }

    pub fn pending_verification_email(&self) -> Option<String> {
        self.pending_verification_email.get()
    }

    pub fn set_pending_verification(&self, email: &str) {
        storage_set(PENDING_VERIFICATION_KEY, email);
        self.pending_verification_email.set(Some(email.to_string()));
    }

    pub fn clear_pending_verification(&self) {
        storage_remove(PENDING_VERIFICATION_KEY);
        self.pending_verification_email.set(None);
    }

    pub fn engagement(&self, kind: EngagementKind) -> RwSignal<EngagementLedger> {
        match kind {
            EngagementKind::Like => self.capsule_likes,
            EngagementKind::Bookmark => self.capsule_bookmarks,
        }
    }

    /// Writes the given ledger back to its storage key under the signed-in
    /// user's slot. A signed-out session has nothing to persist.
    pub fn persist_engagement(&self, kind: EngagementKind) {
        let Some(user) = self.user.get_untracked() else {
            return;
        };
        let key = match kind {
            EngagementKind::Like => CAPSULE_LIKES_KEY,
            EngagementKind::Bookmark => CAPSULE_BOOKMARKS_KEY,
        };
        let ledger = self.engagement(kind).get_untracked();
        let raw = storage_get(key);
        storage_set(key, &encode_engagement(raw.as_deref(), user.id, &ledger));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Role;

    #[test]
    fn malformed_engagement_payload_reads_as_empty() {
        assert!(decode_engagement(Some("definitely not json"), 1).is_empty());
        assert!(decode_engagement(Some("{\"1\": \"oops\"}"), 1).is_empty());
        assert!(decode_engagement(None, 1).is_empty());
    }

    #[test]
    fn engagement_roundtrip_preserves_other_users() {
        let existing = r#"{"2":[5,6]}"#;
        let ledger = EngagementLedger::from_ids([9, 3]);
        let encoded = encode_engagement(Some(existing), 1, &ledger);

        assert_eq!(decode_engagement(Some(&encoded), 1), vec![3, 9]);
        assert_eq!(decode_engagement(Some(&encoded), 2), vec![5, 6]);
    }

    #[test]
    fn encode_over_garbage_starts_fresh() {
        let ledger = EngagementLedger::from_ids([4]);
        let encoded = encode_engagement(Some("[broken"), 7, &ledger);
        assert_eq!(decode_engagement(Some(&encoded), 7), vec![4]);
    }

    #[test]
    fn malformed_user_payload_reads_as_absent() {
        assert!(decode_user(Some("{not json".to_string())).is_none());
        assert!(decode_user(None).is_none());
    }

    #[test]
    fn stored_user_roundtrip() {
        let user = StoredUser {
            id: 11,
            name: "Rosa Vane".to_string(),
            email: "rosa@example.edu".to_string(),
            role: Role::Student,
            company: None,
        };
        let raw = serde_json::to_string(&user).expect("serializes");
        assert_eq!(decode_user(Some(raw)), Some(user));
    }
}
