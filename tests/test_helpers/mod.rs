//! Scoped environment overrides for configuration tests.

use std::env;
use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Holds the process environment lock and restores overridden variables on
/// drop.
pub struct ScopedEnv {
    saved: Vec<(&'static str, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl ScopedEnv {
    /// Applies `overrides`; `None` removes the variable.
    pub fn apply(overrides: &[(&'static str, Option<&str>)]) -> Self {
        let lock = ENV_MUTEX
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let saved = overrides
            .iter()
            .map(|(key, value)| {
                let previous = env::var(key).ok();
                // SAFETY: ENV_MUTEX serialises every environment mutation in this binary.
                unsafe {
                    match value {
                        Some(new_value) => env::set_var(key, new_value),
                        None => env::remove_var(key),
                    }
                }
                (*key, previous)
            })
            .collect();

        Self { saved, _lock: lock }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (key, previous) in self.saved.drain(..).rev() {
            // SAFETY: the lock is still held while restoring.
            unsafe {
                match previous {
                    Some(value) => env::set_var(key, value),
                    None => env::remove_var(key),
                }
            }
        }
    }
}
