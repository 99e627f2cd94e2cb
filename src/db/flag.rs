// src/db/flag.rs
//
// Two-state columns (balcon, disponible)
//
// Encoding on write and decoding on read both live here so the repositories
// can never drift apart. Reads accept either representation, so switching the
// configured encoding does not make existing rows unreadable.

use std::str::FromStr;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, Value, ValueRef};
use serde::{Deserialize, Serialize};

/// How a boolean is persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagEncoding {
    /// INTEGER 1 / 0
    #[default]
    Numeric,
    /// TEXT 'true' / 'false'
    Text,
}

impl FlagEncoding {
    pub fn encode(self, flag: bool) -> Value {
        match self {
            FlagEncoding::Numeric => Value::Integer(i64::from(flag)),
            FlagEncoding::Text => Value::Text(if flag { "true" } else { "false" }.to_string()),
        }
    }
}

impl FromStr for FlagEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "numeric" => Ok(FlagEncoding::Numeric),
            "text" => Ok(FlagEncoding::Text),
            other => Err(format!(
                "Invalid flag encoding '{}' (expected 'numeric' or 'text')",
                other
            )),
        }
    }
}

impl std::fmt::Display for FlagEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlagEncoding::Numeric => write!(f, "numeric"),
            FlagEncoding::Text => write!(f, "text"),
        }
    }
}

/// A boolean read back from a flag column, whatever its stored form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag(pub bool);

/// Text forms read as true. SQL filters and the decoder both use this list.
const TRUE_TEXT: [&str; 5] = ["1", "true", "si", "sí", "s"];
const FALSE_TEXT: [&str; 4] = ["0", "false", "no", "n"];

impl Flag {
    /// SQL condition that holds exactly for the rows whose `column` decodes
    /// to `Flag(true)`, whichever encoding wrote them.
    pub fn true_condition(column: &str) -> String {
        let texts = TRUE_TEXT
            .iter()
            .map(|t| format!("'{}'", t))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "(CASE typeof({c}) \
             WHEN 'integer' THEN {c} <> 0 \
             WHEN 'real' THEN {c} <> 0 \
             WHEN 'text' THEN lower(trim({c})) IN ({texts}) \
             ELSE 0 END)",
            c = column,
            texts = texts
        )
    }
}

impl FromSql for Flag {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Integer(i) => Ok(Flag(i != 0)),
            ValueRef::Real(r) => Ok(Flag(r != 0.0)),
            ValueRef::Text(bytes) => {
                let text = std::str::from_utf8(bytes).map_err(|e| FromSqlError::Other(Box::new(e)))?;
                let text = text.trim().to_ascii_lowercase();
                if TRUE_TEXT.contains(&text.as_str()) {
                    Ok(Flag(true))
                } else if FALSE_TEXT.contains(&text.as_str()) {
                    Ok(Flag(false))
                } else {
                    Err(FromSqlError::InvalidType)
                }
            }
            ValueRef::Null | ValueRef::Blob(_) => Err(FromSqlError::InvalidType),
        }
    }
}
