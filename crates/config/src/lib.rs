//! Configuration management for keyprobe.
//!
//! This crate provides the constants, types and loader used to decide which
//! endpoint is probed, how long each probe may take, and which response
//! contract decides whether a key works.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{Config, EndpointConfig, ResponseContract};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
