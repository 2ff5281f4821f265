use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::input::NavKey;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Physical key bindings for held-key navigation.
///
/// Keys are matched by position (`"KeyW"`), not by printed character, so
/// non-QWERTY layouts get the same physical arrangement.
pub struct KeybindingOptions {
    /// Maps key string → navigation direction (e.g. `"KeyW"` → `Forward`).
    pub bindings: FxHashMap<String, NavKey>,
    /// Key that slows movement down while held.
    pub slower: String,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = [
            ("ArrowUp", NavKey::Forward),
            ("ArrowDown", NavKey::Back),
            ("ArrowRight", NavKey::Right),
            ("ArrowLeft", NavKey::Left),
            ("KeyW", NavKey::Forward),
            ("KeyS", NavKey::Back),
            ("KeyD", NavKey::Right),
            ("KeyA", NavKey::Left),
            ("KeyE", NavKey::Up),
            ("KeyQ", NavKey::Down),
        ]
        .into_iter()
        .map(|(key, dir)| (key.to_owned(), dir))
        .collect();

        Self {
            bindings,
            slower: "Space".into(),
        }
    }
}

impl KeybindingOptions {
    /// Look up the navigation direction for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<NavKey> {
        self.bindings.get(key).copied()
    }

    /// Whether `key` is the slow-down key.
    #[must_use]
    pub fn is_slower(&self, key: &str) -> bool {
        self.slower == key
    }
}
