//! Shared, memoised profile lookup.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use super::LanguageProfile;
use super::builtin::{builtin, normalise};

/// Hands out shared [`LanguageProfile`] instances keyed by language id.
///
/// Built-in profiles are created on first request and reused afterwards.
/// Hosts may [`register`](Self::register) their own profiles, which take
/// precedence over the built-in table.
#[derive(Debug, Default)]
pub struct ProfileRegistry {
    profiles: Mutex<HashMap<String, Arc<LanguageProfile>>>,
}

impl ProfileRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the profile for `id`, building the built-in one on first use.
    ///
    /// Identifiers are matched case-insensitively after trimming. Unknown
    /// identifiers resolve to the plain-text profile.
    #[must_use]
    pub fn get(&self, id: &str) -> Arc<LanguageProfile> {
        let key = normalise(id);
        let mut profiles = self.profiles.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(profiles.entry(key).or_insert_with_key(|key| {
            debug!(language = %key, "building language profile");
            Arc::new(builtin(key))
        }))
    }

    /// Registers `profile` under its own identifier, replacing any existing
    /// entry. Returns the replaced profile.
    pub fn register(&self, profile: LanguageProfile) -> Option<Arc<LanguageProfile>> {
        let key = normalise(profile.id());
        debug!(language = %key, "registering custom language profile");
        self.profiles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, Arc::new(profile))
    }

    /// Returns how many profiles are cached.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns whether no profile has been built or registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
