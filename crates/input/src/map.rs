//! Mapping from typed driver input to menu codes.

use crate::types::MenuAction;

/// One parsed line of driver input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// A numeric code, or an action name mapped to its code. Unknown numbers
    /// are passed through; the engine reports them as invalid.
    Code(i64),
    /// Blank line; the driver just prompts again.
    Blank,
    /// Anything else, trimmed. Echoed back in the driver's error message.
    Unrecognized(String),
}

/// Parse one line: a menu number (`"2"`) or an action name (`"reserve"`).
pub fn parse_choice(line: &str) -> Choice {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Choice::Blank;
    }
    if let Ok(code) = trimmed.parse::<i64>() {
        return Choice::Code(code);
    }
    match MenuAction::from_str(trimmed) {
        Some(action) => Choice::Code(action.code()),
        None => Choice::Unrecognized(trimmed.to_string()),
    }
}
