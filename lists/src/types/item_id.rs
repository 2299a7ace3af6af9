// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          sync::Arc};

/// Canonical identifier of a row.
///
/// Some backends key rows by a numeric id, others (Strapi 5) by an opaque document id
/// that lives alongside the numeric one. Rather than checking two hardcoded field names
/// everywhere, each pipeline is configured with a single [`IdentityFn`] that maps a row
/// to one of these, and that value is used consistently for selection and removal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemId {
    Numeric(u64),
    Document(String),
}

/// Maps a row to its canonical [`ItemId`].
pub type IdentityFn<T> = Arc<dyn Fn(&T) -> ItemId + Send + Sync>;

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ItemId::Numeric(id) => write!(f, "{id}"),
            ItemId::Document(id) => write!(f, "{id}"),
        }
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self { Self::Numeric(id) }
}

/// Text made only of ascii digits becomes [`ItemId::Numeric`], anything else is a
/// document id. This is how ids typed on the command line are interpreted.
impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        match id.parse::<u64>() {
            Ok(numeric) if id.bytes().all(|it| it.is_ascii_digit()) => {
                Self::Numeric(numeric)
            }
            _ => Self::Document(id.to_owned()),
        }
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self { Self::from(id.as_str()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("42", ItemId::Numeric(42))]
    #[test_case("abc123xyz", ItemId::Document("abc123xyz".into()))]
    #[test_case("+42", ItemId::Document("+42".into()))]
    #[test_case("", ItemId::Document(String::new()))]
    fn test_parse_from_str(input: &str, expected: ItemId) {
        assert_eq!(ItemId::from(input), expected);
    }

    #[test]
    fn test_display() {
        assert_eq!(ItemId::Numeric(7).to_string(), "7");
        assert_eq!(ItemId::Document("doc-7".into()).to_string(), "doc-7");
    }
}
