//! Core containers module - pure, deterministic, and testable
//!
//! This crate holds the two bounded piece containers and the piece generator.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same piece sequence
//! - **Testable**: Containers are generic and can be exercised with plain integers
//! - **Allocation-free**: Fixed-size storage for both containers and snapshots
//!
//! # Module Structure
//!
//! - [`queue`]: circular FIFO of upcoming pieces (capacity 5)
//! - [`stack`]: LIFO of reserved pieces (capacity 3)
//! - [`exchange`]: positional queue↔stack exchanges used by the swap actions
//! - [`rng`]: small LCG used to pick shapes
//! - [`generator`]: piece generators (random and scripted) with monotonic ids
//! - [`snapshot`]: settled view of both containers
//!
//! # Example
//!
//! ```
//! use tetris_reserve_core::{exchange_front_top, PieceGenerator, ReserveStack, UpcomingQueue};
//!
//! let mut gen = PieceGenerator::new(12345);
//! let mut queue = UpcomingQueue::new();
//! let mut stack = ReserveStack::new();
//!
//! while queue.enqueue(gen.next()) {}
//! assert!(queue.is_full());
//!
//! let front = queue.dequeue().unwrap();
//! assert!(stack.push(front));
//! assert!(queue.enqueue(gen.next()));
//!
//! assert!(exchange_front_top(&mut queue, &mut stack));
//! assert_eq!(queue.peek_front(), Some(&front));
//! ```

pub mod exchange;
pub mod generator;
pub mod queue;
pub mod rng;
pub mod snapshot;
pub mod stack;

pub use tetris_reserve_types as types;

// Re-export commonly used types for convenience
pub use exchange::{exchange_front_top, exchange_prefix};
pub use generator::{PieceGenerator, PieceSource, ScriptedGenerator};
pub use queue::{BoundedQueue, UpcomingQueue};
pub use rng::SimpleRng;
pub use snapshot::Snapshot;
pub use stack::{BoundedStack, ReserveStack};
