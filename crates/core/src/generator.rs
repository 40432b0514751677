//! Piece generation
//!
//! Every generator owns its own id counter: ids start at 0 and advance by
//! exactly one per piece, so they are unique and strictly increasing for the
//! lifetime of the generator. There is no reset.

use crate::rng::SimpleRng;
use crate::types::{Piece, Shape};

/// Source of fresh pieces.
///
/// The engine is generic over this so tests can inject a fixed sequence.
pub trait PieceSource {
    fn next_piece(&mut self) -> Piece;

    /// Id the next piece will carry.
    fn next_id(&self) -> u64;
}

/// Monotonic id counter
///
/// 64 bits wide: a session would need centuries of input to exhaust it, so
/// ids never wrap and are never reused.
#[derive(Debug, Clone, Default)]
struct IdCounter {
    next: u64,
}

impl IdCounter {
    fn take(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Random generator: uniform shape, sequential id
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
    ids: IdCounter,
}

impl PieceGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            ids: IdCounter::default(),
        }
    }

    pub fn next(&mut self) -> Piece {
        let shape = self.rng.next_shape();
        Piece::new(shape, self.ids.take())
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for PieceGenerator {
    fn next_piece(&mut self) -> Piece {
        self.next()
    }

    fn next_id(&self) -> u64 {
        self.ids.next
    }
}

/// Deterministic generator that cycles through a fixed shape script.
#[derive(Debug, Clone)]
pub struct ScriptedGenerator {
    script: Vec<Shape>,
    cursor: usize,
    ids: IdCounter,
}

impl ScriptedGenerator {
    /// An empty script falls back to `Shape::I` for every piece.
    pub fn new(script: &[Shape]) -> Self {
        Self {
            script: script.to_vec(),
            cursor: 0,
            ids: IdCounter::default(),
        }
    }
}

impl PieceSource for ScriptedGenerator {
    fn next_piece(&mut self) -> Piece {
        let shape = if self.script.is_empty() {
            Shape::I
        } else {
            self.script[self.cursor % self.script.len()]
        };
        self.cursor += 1;
        Piece::new(shape, self.ids.take())
    }

    fn next_id(&self) -> u64 {
        self.ids.next
    }
}

impl<G: PieceSource + ?Sized> PieceSource for &mut G {
    fn next_piece(&mut self) -> Piece {
        (**self).next_piece()
    }

    fn next_id(&self) -> u64 {
        (**self).next_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_start_at_zero_and_increase() {
        let mut gen = PieceGenerator::new(12345);
        assert_eq!(gen.next_id(), 0);
        let ids: Vec<u64> = (0..50).map(|_| gen.next().id).collect();
        assert_eq!(ids, (0..50).collect::<Vec<_>>());
        assert_eq!(gen.next_id(), 50);
    }

    #[test]
    fn test_ids_continue_past_u32_range() {
        let mut ids = IdCounter {
            next: u32::MAX as u64,
        };
        assert_eq!(ids.take(), u32::MAX as u64);
        assert_eq!(ids.take(), u32::MAX as u64 + 1);
        assert_eq!(ids.next, u32::MAX as u64 + 2);
    }

    #[test]
    fn test_same_seed_same_shapes() {
        let mut a = PieceGenerator::new(9);
        let mut b = PieceGenerator::new(9);
        for _ in 0..20 {
            assert_eq!(a.next(), b.next());
        }
    }

    #[test]
    fn test_scripted_cycles() {
        let mut gen = ScriptedGenerator::new(&[Shape::T, Shape::O]);
        let pieces: Vec<Piece> = (0..3).map(|_| gen.next_piece()).collect();
        assert_eq!(
            pieces,
            vec![
                Piece::new(Shape::T, 0),
                Piece::new(Shape::O, 1),
                Piece::new(Shape::T, 2)
            ]
        );
    }

    #[test]
    fn test_scripted_empty_script() {
        let mut gen = ScriptedGenerator::new(&[]);
        assert_eq!(gen.next_piece(), Piece::new(Shape::I, 0));
        assert_eq!(gen.next_piece(), Piece::new(Shape::I, 1));
    }

    #[test]
    fn test_mut_ref_is_a_source() {
        fn draw(mut src: impl PieceSource) -> Piece {
            src.next_piece()
        }
        let mut gen = ScriptedGenerator::new(&[Shape::L]);
        draw(&mut gen);
        assert_eq!(gen.next_id(), 1);
    }
}
