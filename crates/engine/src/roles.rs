//! Column-role guessing and designation.
//!
//! The guess is a pure function of the current headers, so callers can
//! re-derive or override roles after header renames without touching row
//! data.

use regex::Regex;

use crate::error::EngineError;

const MARK_PATTERN: &str = r"(?i)mark|component|item|part";
const QUANTITY_PATTERN: &str = r"(?i)qty|pcs|amount|count";

/// A guessed role column plus how it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyGuess {
    pub column: String,
    /// False when the guess fell back to a positional default.
    pub by_keyword: bool,
}

/// First header matching the mark keyword set; positional fallback: first.
pub fn guess_mark_column(headers: &[String]) -> Option<KeyGuess> {
    guess(headers, MARK_PATTERN, 0)
}

/// First header matching the quantity keyword set; positional fallback: last.
pub fn guess_quantity_column(headers: &[String]) -> Option<KeyGuess> {
    guess(headers, QUANTITY_PATTERN, headers.len().saturating_sub(1))
}

fn guess(headers: &[String], pattern: &str, fallback: usize) -> Option<KeyGuess> {
    if headers.is_empty() {
        return None;
    }
    let re = Regex::new(pattern).unwrap();
    for header in headers {
        if re.is_match(header) {
            return Some(KeyGuess { column: header.clone(), by_keyword: true });
        }
    }
    headers.get(fallback).map(|h| KeyGuess { column: h.clone(), by_keyword: false })
}

/// Designated identifier and quantity columns.
#[derive(Debug, Clone, Default)]
pub struct ColumnRoles {
    pub mark: Option<String>,
    pub quantity: Option<String>,
}

impl ColumnRoles {
    /// Guess both roles from the current headers.
    pub fn guess(headers: &[String]) -> Self {
        Self {
            mark: guess_mark_column(headers).map(|g| g.column),
            quantity: guess_quantity_column(headers).map(|g| g.column),
        }
    }

    /// Guess, then apply manual overrides. An overridden name must exist in
    /// the headers.
    pub fn with_overrides(
        headers: &[String],
        mark: Option<String>,
        quantity: Option<String>,
    ) -> Result<Self, EngineError> {
        let mut roles = Self::guess(headers);
        if let Some(column) = mark {
            if !headers.contains(&column) {
                return Err(EngineError::UnknownColumn { role: "mark", column });
            }
            roles.mark = Some(column);
        }
        if let Some(column) = quantity {
            if !headers.contains(&column) {
                return Err(EngineError::UnknownColumn { role: "quantity", column });
            }
            roles.quantity = Some(column);
        }
        Ok(roles)
    }

    /// Both designated columns, or a fail-fast error naming the missing one.
    pub fn resolved(&self) -> Result<(&str, &str), EngineError> {
        let mark = self
            .mark
            .as_deref()
            .ok_or(EngineError::UnresolvedRole { role: "mark" })?;
        let quantity = self
            .quantity
            .as_deref()
            .ok_or(EngineError::UnresolvedRole { role: "quantity" })?;
        Ok((mark, quantity))
    }
}
