use std::env;

/// Shared secret guarding the admin endpoints.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    api_key: Option<String>,
}

impl AdminConfig {
    /// Load admin configuration from environment variables
    ///
    /// Environment variables:
    /// - ADMIN_API_KEY: expected `X-Api-Key` header value. When unset, every
    ///   admin request is rejected.
    pub fn from_env() -> Self {
        Self::new(env::var("ADMIN_API_KEY").ok())
    }

    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Compares in constant time for keys of equal length.
    pub fn accepts(&self, candidate: &str) -> bool {
        let Some(expected) = &self.api_key else {
            return false;
        };
        let (expected, candidate) = (expected.as_bytes(), candidate.as_bytes());
        expected.len() == candidate.len()
            && expected
                .iter()
                .zip(candidate)
                .fold(0u8, |diff, (a, b)| diff | (a ^ b))
                == 0
    }
}
