use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::LookupError;

/// A trimmed, non-empty postal code that is safe to place in a query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalCode(String);

fn postal_code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 -]{0,11}$").expect("valid regex"))
}

impl PostalCode {
    /// Validates user input.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidInput`] when the input is blank or
    /// contains anything other than letters, digits, spaces and `-`.
    pub fn parse(input: &str) -> Result<Self, LookupError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(LookupError::InvalidInput("postal code is required".to_string()));
        }
        if !postal_code_pattern().is_match(trimmed) {
            return Err(LookupError::InvalidInput(format!("'{trimmed}' is not a postal code")));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.0)
    }
}
