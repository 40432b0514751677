//! Static menu text.

use crate::types::{MenuAction, TRIPLE_SWAP_DEPTH};

pub const BANNER: &str = "=== Piece Manager (Circular Queue + Reserve Stack) ===";

pub const PROMPT: &str = "Choice: ";

/// Menu label for an action.
pub fn label(action: MenuAction) -> String {
    match action {
        MenuAction::PlayFront => "Play the front piece of the queue".to_string(),
        MenuAction::Reserve => "Move the front piece to the reserve stack".to_string(),
        MenuAction::UseReserved => "Use the piece on top of the reserve stack".to_string(),
        MenuAction::SwapFrontTop => "Swap the queue front with the stack top".to_string(),
        MenuAction::TripleSwap => format!(
            "Swap the first {n} queue pieces with the top {n} stack pieces",
            n = TRIPLE_SWAP_DEPTH
        ),
        MenuAction::ShowState => "Show state".to_string(),
        MenuAction::Quit => "Quit".to_string(),
    }
}

/// Options list followed by the prompt (no trailing newline).
pub fn render_menu(out: &mut String) {
    out.push_str("\nOptions:\n");
    for action in MenuAction::MENU {
        out.push_str(&format!("{}) {}\n", action.code(), label(action)));
    }
    out.push_str(PROMPT);
}
