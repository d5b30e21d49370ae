//! Todo text rules.
//!
//! A todo's text is trimmed on the way in and must not be empty afterwards.
//! [`NewTodo`] is the only way to hand text to the store, so an invalid
//! record cannot be constructed.

use crate::error::CoreError;

/// Validated input for creating a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    text: String,
}

impl NewTodo {
    /// Trim `raw` and reject it if nothing is left.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        normalize_text(raw)
            .map(|text| Self { text })
            .ok_or_else(|| CoreError::Validation("text must not be empty".to_string()))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Trim surrounding whitespace, returning `None` for blank input.
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parse_keeps_plain_text_unchanged() {
        let todo = NewTodo::parse("buy milk").unwrap();
        assert_eq!(todo.text(), "buy milk");
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let todo = NewTodo::parse("  walk the dog \n").unwrap();
        assert_eq!(todo.text(), "walk the dog");
    }

    #[test]
    fn parse_keeps_inner_whitespace() {
        let todo = NewTodo::parse(" a  b ").unwrap();
        assert_eq!(todo.into_text(), "a  b");
    }

    #[test]
    fn parse_rejects_empty() {
        assert_matches!(NewTodo::parse(""), Err(CoreError::Validation(_)));
    }

    #[test]
    fn parse_rejects_whitespace_only() {
        for raw in [" ", "\t", "\n\r", "   \t  "] {
            assert_matches!(
                NewTodo::parse(raw),
                Err(CoreError::Validation(_)),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn normalize_text_blank_is_none() {
        assert_eq!(normalize_text("  "), None);
        assert_eq!(normalize_text(" x "), Some("x".to_string()));
    }
}
