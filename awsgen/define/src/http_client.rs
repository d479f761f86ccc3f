//! Retry configuration carried into generated clients.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::errors::DefinitionError;

/// What a generated client does with a modeled error that has no override.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RetryBehavior {
    Retry,
    #[default]
    Fail,
}

impl RetryBehavior {
    /// The boolean a retry predicate returns under this behavior.
    pub fn is_retriable(self) -> bool {
        matches!(self, RetryBehavior::Retry)
    }
}

/// Retry policy for one service's generated client.
///
/// `retriable_unknown_errors` is only consulted when the default is
/// [`RetryBehavior::Fail`], and `unretriable_unknown_errors` only when it is
/// [`RetryBehavior::Retry`]. [`HttpClientConfiguration::validate`] rejects
/// configurations that put an identity in the set the default never reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpClientConfiguration {
    pub retry_on_unknown_error: bool,
    pub known_errors_default_retry_behavior: RetryBehavior,
    #[serde(default)]
    pub unretriable_unknown_errors: BTreeSet<String>,
    #[serde(default)]
    pub retriable_unknown_errors: BTreeSet<String>,
}

impl HttpClientConfiguration {
    /// Creates a configuration with no overrides.
    pub fn new(retry_on_unknown_error: bool, default_behavior: RetryBehavior) -> Self {
        Self {
            retry_on_unknown_error,
            known_errors_default_retry_behavior: default_behavior,
            unretriable_unknown_errors: BTreeSet::new(),
            retriable_unknown_errors: BTreeSet::new(),
        }
    }

    /// Adds identities that are retried despite a `Fail` default.
    pub fn with_retriable<'a>(mut self, names: impl IntoIterator<Item = &'a str>) -> Self {
        self.retriable_unknown_errors
            .extend(names.into_iter().map(str::to_string));
        self
    }

    /// Adds identities that fail despite a `Retry` default.
    pub fn with_unretriable<'a>(mut self, names: impl IntoIterator<Item = &'a str>) -> Self {
        self.unretriable_unknown_errors
            .extend(names.into_iter().map(str::to_string));
        self
    }

    /// The override set consulted under the configured default.
    pub fn active_overrides(&self) -> &BTreeSet<String> {
        match self.known_errors_default_retry_behavior {
            RetryBehavior::Fail => &self.retriable_unknown_errors,
            RetryBehavior::Retry => &self.unretriable_unknown_errors,
        }
    }

    /// Rejects ambiguous or silently ignored overrides.
    ///
    /// ## Errors
    ///
    /// - `DefinitionError::ConflictingRetryOverride` if an identity is in both sets
    /// - `DefinitionError::InertRetryOverride` if an identity is in the set that
    ///   the configured default never consults
    pub fn validate(&self) -> Result<(), DefinitionError> {
        if let Some(name) = self
            .retriable_unknown_errors
            .intersection(&self.unretriable_unknown_errors)
            .next()
        {
            return Err(DefinitionError::ConflictingRetryOverride(name.clone()));
        }

        let inert = match self.known_errors_default_retry_behavior {
            RetryBehavior::Fail => &self.unretriable_unknown_errors,
            RetryBehavior::Retry => &self.retriable_unknown_errors,
        };
        if let Some(name) = inert.iter().next() {
            return Err(DefinitionError::InertRetryOverride {
                identity: name.clone(),
                default_behavior: self.known_errors_default_retry_behavior,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_is_valid() {
        assert!(HttpClientConfiguration::default().validate().is_ok());
    }

    #[test]
    fn active_overrides_follow_default() {
        let config = HttpClientConfiguration::new(true, RetryBehavior::Fail)
            .with_retriable(["ThrottlingException"]);
        assert!(config.active_overrides().contains("ThrottlingException"));

        let config = HttpClientConfiguration::new(true, RetryBehavior::Retry)
            .with_unretriable(["ValidationError"]);
        assert!(config.active_overrides().contains("ValidationError"));
    }

    #[test]
    fn validate_rejects_identity_in_both_sets() {
        let config = HttpClientConfiguration::new(true, RetryBehavior::Fail)
            .with_retriable(["Throttling"])
            .with_unretriable(["Throttling"]);

        assert!(matches!(
            config.validate(),
            Err(DefinitionError::ConflictingRetryOverride(name)) if name == "Throttling"
        ));
    }

    #[test]
    fn validate_rejects_override_the_default_never_reads() {
        let config = HttpClientConfiguration::new(false, RetryBehavior::Retry)
            .with_retriable(["Throttling"]);

        assert!(matches!(
            config.validate(),
            Err(DefinitionError::InertRetryOverride { identity, default_behavior: RetryBehavior::Retry })
                if identity == "Throttling"
        ));
    }

    #[test]
    fn retry_behavior_booleans() {
        assert!(RetryBehavior::Retry.is_retriable());
        assert!(!RetryBehavior::Fail.is_retriable());
    }
}
