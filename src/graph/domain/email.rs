//! Validated e-mail address.

use super::GraphDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Plausible e-mail address: one `@`, a non-empty local part, and a dotted
/// domain, without whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validates and wraps an address.
    ///
    /// # Errors
    ///
    /// Returns [`GraphDomainError::InvalidEmailAddress`] when the value is
    /// not plausible.
    pub fn new(value: impl Into<String>) -> Result<Self, GraphDomainError> {
        let address = value.into().trim().to_owned();
        if is_plausible(&address) {
            Ok(Self(address))
        } else {
            Err(GraphDomainError::InvalidEmailAddress(address))
        }
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_plausible(address: &str) -> bool {
    if address.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        && !domain.ends_with('.')
}

impl TryFrom<String> for EmailAddress {
    type Error = GraphDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}
