//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core containers, action engine, text view, JSON driver).
//!
//! # Capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Upcoming pieces kept in the circular queue |
//! | `STACK_CAPACITY` | 3 | Reserved pieces kept on the stack |
//! | `TRIPLE_SWAP_DEPTH` | 3 | Pieces exchanged by a triple swap |
//!
//! # Examples
//!
//! ```
//! use tetris_reserve_types::{MenuAction, Piece, Shape, QUEUE_CAPACITY};
//!
//! let piece = Piece::new(Shape::T, 7);
//! assert_eq!(piece.to_string(), "[T 7]");
//!
//! assert_eq!(Shape::from_index(1), Shape::O);
//! assert_eq!(MenuAction::from_code(2), Some(MenuAction::Reserve));
//! assert_eq!(QUEUE_CAPACITY, 5);
//! ```

use std::fmt;

/// Capacity of the upcoming-piece queue
pub const QUEUE_CAPACITY: usize = 5;

/// Capacity of the reserve stack
pub const STACK_CAPACITY: usize = 3;

/// Number of queue/stack pairs exchanged by [`MenuAction::TripleSwap`]
pub const TRIPLE_SWAP_DEPTH: usize = 3;

/// The four piece shapes handed out by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    I,
    O,
    T,
    L,
}

impl Shape {
    /// Every shape, in generator index order
    pub const ALL: [Shape; 4] = [Shape::I, Shape::O, Shape::T, Shape::L];

    /// Shape at `index` in [`Shape::ALL`], wrapping around
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Single-letter symbol used in listings
    pub fn symbol(&self) -> char {
        match self {
            Shape::I => 'I',
            Shape::O => 'O',
            Shape::T => 'T',
            Shape::L => 'L',
        }
    }

    /// Uppercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::I => "I",
            Shape::O => "O",
            Shape::T => "T",
            Shape::L => "L",
        }
    }
}

/// A generated piece.
///
/// Pieces are plain values: they move between containers by copy and are
/// never mutated after the generator hands them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub id: u64,
}

impl Piece {
    pub const fn new(shape: Shape, id: u64) -> Self {
        Self { shape, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.shape.symbol(), self.id)
    }
}

/// Menu actions the driver can request, keyed by their numeric code
///
/// Codes match the text menu: `0` quits, `1`..=`6` are the game actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Stop issuing actions (code 0)
    Quit,
    /// Play the queue front and refill the queue (code 1)
    PlayFront,
    /// Move the queue front onto the reserve stack and refill the queue (code 2)
    Reserve,
    /// Pop and use the reserved piece on top of the stack (code 3)
    UseReserved,
    /// Exchange queue front with stack top (code 4)
    SwapFrontTop,
    /// Exchange the first three queue pieces with the top three stack pieces (code 5)
    TripleSwap,
    /// Show the current state (code 6)
    ShowState,
}

impl MenuAction {
    /// All actions in menu order (1..=6, then quit)
    pub const MENU: [MenuAction; 7] = [
        MenuAction::PlayFront,
        MenuAction::Reserve,
        MenuAction::UseReserved,
        MenuAction::SwapFrontTop,
        MenuAction::TripleSwap,
        MenuAction::ShowState,
        MenuAction::Quit,
    ];

    /// Look up an action by menu code
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_reserve_types::MenuAction;
    ///
    /// assert_eq!(MenuAction::from_code(0), Some(MenuAction::Quit));
    /// assert_eq!(MenuAction::from_code(5), Some(MenuAction::TripleSwap));
    /// assert_eq!(MenuAction::from_code(7), None);
    /// assert_eq!(MenuAction::from_code(-1), None);
    /// ```
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(MenuAction::Quit),
            1 => Some(MenuAction::PlayFront),
            2 => Some(MenuAction::Reserve),
            3 => Some(MenuAction::UseReserved),
            4 => Some(MenuAction::SwapFrontTop),
            5 => Some(MenuAction::TripleSwap),
            6 => Some(MenuAction::ShowState),
            _ => None,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            MenuAction::Quit => 0,
            MenuAction::PlayFront => 1,
            MenuAction::Reserve => 2,
            MenuAction::UseReserved => 3,
            MenuAction::SwapFrontTop => 4,
            MenuAction::TripleSwap => 5,
            MenuAction::ShowState => 6,
        }
    }

    /// Parse action from its name (case-insensitive)
    ///
    /// Accepts the protocol name plus a few short aliases.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "quit" | "exit" | "q" => Some(MenuAction::Quit),
            "play" | "p" => Some(MenuAction::PlayFront),
            "reserve" | "r" => Some(MenuAction::Reserve),
            "use" | "u" => Some(MenuAction::UseReserved),
            "swap" | "s" => Some(MenuAction::SwapFrontTop),
            "triple" | "t" => Some(MenuAction::TripleSwap),
            "show" | "state" | "v" => Some(MenuAction::ShowState),
            _ => None,
        }
    }

    /// Protocol name
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuAction::Quit => "quit",
            MenuAction::PlayFront => "play",
            MenuAction::Reserve => "reserve",
            MenuAction::UseReserved => "use",
            MenuAction::SwapFrontTop => "swap",
            MenuAction::TripleSwap => "triple",
            MenuAction::ShowState => "show",
        }
    }
}
