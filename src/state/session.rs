//! Session and browser identity for analytics records.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use uuid::Uuid;

use crate::util::storage::KeyValueStore;

const SUFFIX_LEN: usize = 9;

/// Identifiers attached to every event record.
///
/// `session_id` is fresh on every page load; `user_id` is minted once per
/// browser profile and persisted indefinitely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionIdentity {
    pub session_id: String,
    pub user_id: String,
}

impl SessionIdentity {
    /// Mint a session id for this load and read (or mint and persist) the user id.
    pub fn establish(store: &impl KeyValueStore, user_key: &str, now_ms: u64) -> Self {
        let session_id = format!("session_{now_ms}_{}", random_suffix());
        let user_id = match store.get(user_key).filter(|id| !id.is_empty()) {
            Some(existing) => existing,
            None => {
                let minted = format!("anonymous_{}", random_suffix());
                store.set(user_key, &minted);
                log::debug!("assigned new user id {minted}");
                minted
            }
        };
        Self { session_id, user_id }
    }
}

fn random_suffix() -> String {
    let mut suffix = Uuid::new_v4().simple().to_string();
    suffix.truncate(SUFFIX_LEN);
    suffix
}
