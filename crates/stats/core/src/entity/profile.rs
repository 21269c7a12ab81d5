//! Profile enums attached to players, teams and games.

use core::fmt;
use core::str::FromStr;

use crate::validation::ValidationError;

/// Division a player competes in.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum PlayerCategory {
    Men,
    Women,
}

/// Division a team is registered in.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum TeamCategory {
    Men,
    Women,
    Mixed,
}

/// Court position.
///
/// `Any` is only meaningful for a single game (casual matches); a player's
/// profile always names a concrete position.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Position {
    #[strum(serialize = "OH")]
    #[cfg_attr(feature = "serde", serde(rename = "OH"))]
    OutsideHitter,
    #[strum(serialize = "S")]
    #[cfg_attr(feature = "serde", serde(rename = "S"))]
    Setter,
    #[strum(serialize = "MB")]
    #[cfg_attr(feature = "serde", serde(rename = "MB"))]
    MiddleBlocker,
    #[strum(serialize = "L")]
    #[cfg_attr(feature = "serde", serde(rename = "L"))]
    Libero,
    #[strum(serialize = "O")]
    #[cfg_attr(feature = "serde", serde(rename = "O"))]
    Opposite,
    #[strum(serialize = "ANY")]
    #[cfg_attr(feature = "serde", serde(rename = "ANY"))]
    Any,
}

impl Position {
    pub const fn is_specific(self) -> bool {
        !matches!(self, Self::Any)
    }
}

/// Shirt number worn in a game, or `ANY` for casual matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Jersey {
    Any,
    Number(u32),
}

impl fmt::Display for Jersey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("ANY"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for Jersey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("any") {
            return Ok(Self::Any);
        }
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::invalid("jersey number", value));
        }
        value
            .parse()
            .map(Self::Number)
            .map_err(|_| ValidationError::invalid("jersey number", value))
    }
}

impl TryFrom<String> for Jersey {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Jersey> for String {
    fn from(value: Jersey) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_parse_from_short_codes() {
        assert_eq!("oh".parse::<Position>().unwrap(), Position::OutsideHitter);
        assert_eq!("MB".parse::<Position>().unwrap(), Position::MiddleBlocker);
        assert_eq!(Position::Libero.to_string(), "L");
        assert!(!Position::Any.is_specific());
        assert!("X".parse::<Position>().is_err());
    }

    #[test]
    fn jersey_accepts_digits_or_any() {
        assert_eq!("any".parse::<Jersey>().unwrap(), Jersey::Any);
        assert_eq!(" 12 ".parse::<Jersey>().unwrap(), Jersey::Number(12));
        assert!("-3".parse::<Jersey>().is_err());
        assert!("".parse::<Jersey>().is_err());
        assert_eq!(Jersey::Number(7).to_string(), "7");
    }

    #[test]
    fn categories_are_case_insensitive() {
        assert_eq!("women".parse::<PlayerCategory>().unwrap(), PlayerCategory::Women);
        assert_eq!("MIXED".parse::<TeamCategory>().unwrap(), TeamCategory::Mixed);
        assert!("mixed".parse::<PlayerCategory>().is_err());
    }
}
