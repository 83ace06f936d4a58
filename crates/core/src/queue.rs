//! Queue module - the blocks currently offered to the player
//!
//! The queue holds between one and `HAND_SIZE` blocks. Taking the last block refills it
//! with `HAND_SIZE` freshly drawn blocks before `take` returns, so callers never observe
//! an empty queue. Draws are independent: duplicates are allowed.

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;

use crate::shapes::{draw_random_shape, Shape};
use crate::types::HAND_SIZE;

/// A block offered to the player
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Block {
    shape: Shape,
}

impl Block {
    pub fn new(shape: Shape) -> Self {
        Self { shape }
    }

    /// Draw a block with a random catalog shape
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(draw_random_shape(rng))
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn into_shape(self) -> Shape {
        self.shape
    }
}

impl From<Shape> for Block {
    fn from(shape: Shape) -> Self {
        Self::new(shape)
    }
}

/// Offered blocks plus the random source they are drawn from
#[derive(Debug, Clone)]
pub struct BlockQueue<R = StdRng> {
    blocks: ArrayVec<Block, HAND_SIZE>,
    rng: R,
}

impl<R: Rng> BlockQueue<R> {
    /// Create a queue holding `HAND_SIZE` freshly drawn blocks
    pub fn new(rng: R) -> Self {
        let mut queue = Self {
            blocks: ArrayVec::new(),
            rng,
        };
        queue.refill();
        queue
    }

    /// Create a queue with preset blocks
    ///
    /// At most `HAND_SIZE` blocks are kept. An empty input is refilled immediately.
    pub fn from_blocks<I>(blocks: I, rng: R) -> Self
    where
        I: IntoIterator<Item = Block>,
    {
        let mut queue = Self {
            blocks: blocks.into_iter().take(HAND_SIZE).collect(),
            rng,
        };
        if queue.blocks.is_empty() {
            queue.refill();
        }
        queue
    }

    /// Replace the contents with `HAND_SIZE` fresh blocks
    fn refill(&mut self) {
        self.blocks.clear();
        while !self.blocks.is_full() {
            self.blocks.push(Block::draw(&mut self.rng));
        }
    }

    /// Discard every offered block and draw a fresh hand
    pub fn reset(&mut self) {
        self.refill();
    }

    /// Remove and return the block at `index`
    ///
    /// Returns None if `index` is out of range. If the queue becomes empty it is
    /// refilled before returning.
    pub fn take(&mut self, index: usize) -> Option<Block> {
        if index >= self.blocks.len() {
            return None;
        }
        let block = self.blocks.remove(index);
        if self.blocks.is_empty() {
            self.refill();
        }
        Some(block)
    }

    /// Offered blocks, in order
    pub fn peek(&self) -> &[Block] {
        &self.blocks
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeKind;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(12345)
    }

    #[test]
    fn test_queue_starts_full() {
        let queue = BlockQueue::new(rng());
        assert_eq!(queue.len(), HAND_SIZE);
    }

    #[test]
    fn test_queue_deterministic_for_seed() {
        let a = BlockQueue::new(rng());
        let b = BlockQueue::new(rng());
        assert_eq!(a.peek(), b.peek());
    }

    #[test]
    fn test_take_keeps_order() {
        let blocks = [ShapeKind::Single, ShapeKind::Square, ShapeKind::Tee]
            .map(|k| Block::new(Shape::from_kind(k)));
        let mut queue = BlockQueue::from_blocks(blocks.clone(), rng());

        assert_eq!(queue.take(1), Some(blocks[1].clone()));
        assert_eq!(queue.peek(), &[blocks[0].clone(), blocks[2].clone()]);
    }

    #[test]
    fn test_take_last_refills() {
        let single = Block::new(Shape::from_kind(ShapeKind::Single));
        let mut queue = BlockQueue::from_blocks([single.clone()], rng());
        assert_eq!(queue.len(), 1);

        assert_eq!(queue.take(0), Some(single));
        assert_eq!(queue.len(), HAND_SIZE);
    }

    #[test]
    fn test_take_out_of_range() {
        let mut queue = BlockQueue::new(rng());
        assert_eq!(queue.take(HAND_SIZE), None);
        assert_eq!(queue.len(), HAND_SIZE);
    }

    #[test]
    fn test_from_blocks_truncates_and_refills_empty() {
        let many = (0..5).map(|_| Block::new(Shape::from_kind(ShapeKind::Single)));
        assert_eq!(BlockQueue::from_blocks(many, rng()).len(), HAND_SIZE);
        assert_eq!(
            BlockQueue::from_blocks(Vec::new(), rng()).len(),
            HAND_SIZE
        );
    }
}
