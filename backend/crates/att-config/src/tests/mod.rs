mod config;

use std::env;

use tempfile::TempDir;

pub(crate) const TEST_SECRET: &str = "0123456789abcdef0123456789abcdef";

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory and point ATT_CONFIG_DIR at it
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("ATT_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Minimal environment that passes validation: jwt sessions, in-memory policy, token key
pub(crate) fn valid_env() -> Vec<EnvGuard> {
    vec![
        EnvGuard::set("ATT_AUTH_MODE", "jwt"),
        EnvGuard::set("ATT_AUTH_JWT_SECRET", TEST_SECRET),
        EnvGuard::set("ATT_POLICY_MODE", "memory"),
        EnvGuard::set("ATT_TOKEN_SIGNING_SECRET", TEST_SECRET),
    ]
}
