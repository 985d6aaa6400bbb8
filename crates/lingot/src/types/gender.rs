use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The grammatical gender a message is written for.
///
/// Parsed case-insensitively from `male`/`m` and `female`/`f`, and serialized
/// as `"male"` / `"female"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
}

/// Returned when a token is not a recognized gender.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid gender '{0}': expected one of male, m, female, f")]
pub struct InvalidGender(pub String);

impl Gender {
    /// Parse a gender token, returning `None` for anything else.
    ///
    /// ```
    /// use lingot::Gender;
    ///
    /// assert_eq!(Gender::parse("F"), Some(Gender::Female));
    /// assert_eq!(Gender::parse("Male"), Some(Gender::Male));
    /// assert_eq!(Gender::parse("x"), None);
    /// ```
    pub fn parse(token: &str) -> Option<Gender> {
        if token.eq_ignore_ascii_case("male") || token.eq_ignore_ascii_case("m") {
            Some(Gender::Male)
        } else if token.eq_ignore_ascii_case("female") || token.eq_ignore_ascii_case("f") {
            Some(Gender::Female)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = InvalidGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::parse(s.trim()).ok_or_else(|| InvalidGender(s.to_string()))
    }
}

impl TryFrom<String> for Gender {
    type Error = InvalidGender;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Gender> for String {
    fn from(gender: Gender) -> Self {
        gender.as_str().to_string()
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
