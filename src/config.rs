//! System Configuration
//!
//! Mailbox capacities for the three actors, loaded from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `ORDER_DESK_CUSTOMER_BUFFER` | 32 |
//! | `ORDER_DESK_PRODUCT_BUFFER` | 32 |
//! | `ORDER_DESK_ORDER_BUFFER` | 32 |
//!
//! Unset or blank variables fall back to the default; anything else must parse as a
//! capacity greater than zero.

use thiserror::Error;

/// Mailbox capacity used when nothing is configured.
pub const DEFAULT_BUFFER_SIZE: usize = 32;

pub const CUSTOMER_BUFFER_VAR: &str = "ORDER_DESK_CUSTOMER_BUFFER";
pub const PRODUCT_BUFFER_VAR: &str = "ORDER_DESK_PRODUCT_BUFFER";
pub const ORDER_BUFFER_VAR: &str = "ORDER_DESK_ORDER_BUFFER";

/// Channel capacities of the actor mailboxes. Senders wait while a mailbox is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemConfig {
    pub customer_buffer: usize,
    pub product_buffer: usize,
    pub order_buffer: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            customer_buffer: DEFAULT_BUFFER_SIZE,
            product_buffer: DEFAULT_BUFFER_SIZE,
            order_buffer: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl SystemConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set to something other than a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            customer_buffer: parse_env_capacity(&lookup, CUSTOMER_BUFFER_VAR)?,
            product_buffer: parse_env_capacity(&lookup, PRODUCT_BUFFER_VAR)?,
            order_buffer: parse_env_capacity(&lookup, ORDER_BUFFER_VAR)?,
        })
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Environment variable is not an integer.
    #[error("environment variable {key} is not a valid capacity: {value:?}")]
    InvalidValue { key: String, value: String },
    /// Environment variable is zero; tokio channels need room for one message.
    #[error("environment variable {0} must be greater than zero")]
    ZeroCapacity(String),
}

fn parse_env_capacity(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<usize, ConfigError> {
    let Some(raw) = lookup(key).filter(|v| !v.trim().is_empty()) else {
        return Ok(DEFAULT_BUFFER_SIZE);
    };
    let capacity: usize = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: raw.clone(),
    })?;
    if capacity == 0 {
        return Err(ConfigError::ZeroCapacity(key.to_string()));
    }
    Ok(capacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let vars: HashMap<&str, &str> = vars.iter().copied().collect();
        move |key: &str| vars.get(key).map(|v| v.to_string())
    }

    #[test]
    fn defaults_when_unset() {
        let config = SystemConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SystemConfig::default());
        assert_eq!(config.order_buffer, 32);
    }

    #[test]
    fn reads_each_capacity() {
        let config = SystemConfig::from_lookup(lookup(&[
            (CUSTOMER_BUFFER_VAR, "4"),
            (PRODUCT_BUFFER_VAR, " 128 "),
            (ORDER_BUFFER_VAR, ""),
        ]))
        .unwrap();
        assert_eq!(config.customer_buffer, 4);
        assert_eq!(config.product_buffer, 128);
        assert_eq!(config.order_buffer, DEFAULT_BUFFER_SIZE);
    }

    #[test]
    fn rejects_zero_and_garbage() {
        assert_eq!(
            SystemConfig::from_lookup(lookup(&[(PRODUCT_BUFFER_VAR, "0")])),
            Err(ConfigError::ZeroCapacity(PRODUCT_BUFFER_VAR.to_string()))
        );
        assert!(matches!(
            SystemConfig::from_lookup(lookup(&[(ORDER_BUFFER_VAR, "-1")])),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
