//! Adapter module - line-delimited JSON for scripted drivers
//!
//! Besides the interactive text menu, the driver can speak JSON: it still
//! reads one action code (or action name) per line on stdin, but answers each
//! request with two JSON lines on stdout instead of the text view.
//!
//! # Message Types
//!
//! - **result**: outcome of the request (code, action name, success flag,
//!   message, stable failure identifier, pieces generated by refills, warning)
//! - **observation**: queue front→back and stack top→base after the request
//!
//! # Example Flow
//!
//! ```text
//! stdin : 1
//! stdout: {"type":"result","seq":1,"code":1,"action":"play","success":true,"message":"Played: [I 0]","failure":null,"generated":[{"shape":"T","id":5}],"warning":null}
//! stdout: {"type":"observation","seq":1,"queue":[...],"stack":[],"queue_len":5,"stack_len":0}
//! ```
//!
//! # Journal
//!
//! When a journal path is configured the same messages are appended to that
//! file, one per line (see [`journal`]).

pub mod journal;
pub mod protocol;

pub use tetris_reserve_core as core;
pub use tetris_reserve_engine as engine;
pub use tetris_reserve_types as types;

pub use journal::Journal;
pub use protocol::*;
