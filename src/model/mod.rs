pub mod generator;
pub mod piece;
pub mod queues;
pub mod stack;

use crate::model::piece::Piece;
use crate::model::queues::BoundedQueue;
use crate::model::stack::BoundedStack;

pub const QUEUE_CAPACITY: usize = 5;
pub const RESERVE_CAPACITY: usize = 3;

/// The upcoming-pieces preview.
pub type PreviewQueue = BoundedQueue<Piece, QUEUE_CAPACITY>;
/// The held-back pieces.
pub type ReserveStack = BoundedStack<Piece, RESERVE_CAPACITY>;
