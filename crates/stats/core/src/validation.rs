//! Field-level validation of creation requests.
//!
//! Text fields are trimmed and title-cased before length checks, so
//! `"  los   angeles "` is stored as `"Los   Angeles"`.

use crate::entity::{Jersey, PlayerCategory, Position, TeamCategory};

/// A request field that failed validation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {field}: {value:?}")]
pub struct ValidationError {
    pub field: &'static str,
    pub value: String,
}

impl ValidationError {
    pub fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

pub type Result<T> = core::result::Result<T, ValidationError>;

/// Uppercases the first letter of every word and lowercases the rest.
///
/// A word starts after any non-alphabetic character, so `"o'neil-smith"`
/// becomes `"O'Neil-Smith"`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_alpha = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

/// Trims, title-cases and length-checks a text field (lengths in characters).
pub fn normalize_text(field: &'static str, value: &str, min: usize, max: usize) -> Result<String> {
    let normalized = title_case(value.trim());
    let len = normalized.chars().count();
    if len < min || len > max {
        return Err(ValidationError::invalid(field, value));
    }
    Ok(normalized)
}

/// Accepts `local@domain.tld` with a 2–7 letter top-level domain.
pub fn validate_email(value: &str) -> Result<String> {
    let email = value.trim();
    let invalid = || ValidationError::invalid("email", value);

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c));
    let (host, tld) = domain.rsplit_once('.').ok_or_else(invalid)?;
    let host_ok = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    let tld_ok = (2..=7).contains(&tld.len()) && tld.chars().all(|c| c.is_ascii_alphabetic());

    if local_ok && host_ok && tld_ok {
        Ok(email.to_string())
    } else {
        Err(invalid())
    }
}

fn parse_field<T: core::str::FromStr>(field: &'static str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| ValidationError::invalid(field, value))
}

/// Validated profile of a player about to be registered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPlayer {
    pub first_name: String,
    pub last_name: String,
    pub category: PlayerCategory,
    pub position: Position,
    pub email: String,
}

impl NewPlayer {
    pub fn new(
        first_name: &str,
        last_name: &str,
        category: &str,
        position: &str,
        email: &str,
    ) -> Result<Self> {
        let position: Position = parse_field("position", position)?;
        if !position.is_specific() {
            return Err(ValidationError::invalid("position", position.as_ref()));
        }
        Ok(Self {
            first_name: normalize_text("first name", first_name, 1, 30)?,
            last_name: normalize_text("last name", last_name, 1, 30)?,
            category: parse_field("category", category)?,
            position,
            email: validate_email(email)?,
        })
    }
}

/// Validated request to register a team.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTeam {
    pub name: String,
    pub category: TeamCategory,
}

impl NewTeam {
    pub fn new(name: &str, category: &str) -> Result<Self> {
        Ok(Self {
            name: team_name(name)?,
            category: parse_field("team category", category)?,
        })
    }
}

/// Normalizes a team name (used for creation and renames).
pub fn team_name(name: &str) -> Result<String> {
    normalize_text("team name", name, 1, usize::MAX)
}

/// Validated request to start a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewGame {
    pub country: String,
    pub city: String,
    /// `"Random"` by convention for casual games.
    pub opponent: String,
    pub position: Position,
    pub jersey: Jersey,
}

impl NewGame {
    pub fn new(
        country: &str,
        city: &str,
        opponent: &str,
        position: &str,
        jersey: &str,
    ) -> Result<Self> {
        Ok(Self {
            country: normalize_text("country", country, 4, usize::MAX)?,
            city: normalize_text("city", city, 1, usize::MAX)?,
            opponent: normalize_text("opponent team", opponent, 1, usize::MAX)?,
            position: parse_field("position", position)?,
            jersey: jersey.parse()?,
        })
    }
}
