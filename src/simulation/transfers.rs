// src/simulation/transfers.rs

use crate::error::{Container, PieceError};
use crate::model::generator::PieceGenerator;
use crate::model::piece::Piece;
use crate::model::{PreviewQueue, ReserveStack, RESERVE_CAPACITY};
use crate::simulation::refill::refill_to_full;
use rand::Rng;

/// Number of slots exchanged by [`swap_triple`].
pub const TRIPLE: usize = 3;

/// Plays the front piece, then backfills the queue.
pub fn play_from_queue<R: Rng>(
    queue: &mut PreviewQueue,
    generator: &mut PieceGenerator<R>,
    on_refill: impl FnMut(Piece),
) -> Result<Piece, PieceError> {
    let played = queue.dequeue()?;
    refill_to_full(queue, generator, on_refill);
    Ok(played)
}

/// Moves the front piece onto the reserve, then backfills the queue.
///
/// A full reserve is reported before an empty queue.
pub fn reserve_from_queue<R: Rng>(
    queue: &mut PreviewQueue,
    stack: &mut ReserveStack,
    generator: &mut PieceGenerator<R>,
    on_refill: impl FnMut(Piece),
) -> Result<Piece, PieceError> {
    if stack.is_full() {
        return Err(PieceError::CapacityExceeded(Container::Reserve));
    }
    let reserved = queue.dequeue()?;
    stack.push(reserved)?;
    refill_to_full(queue, generator, on_refill);
    Ok(reserved)
}

/// Takes the most recently reserved piece. The queue is not touched.
pub fn use_reserved(stack: &mut ReserveStack) -> Result<Piece, PieceError> {
    stack.pop()
}

/// Exchanges the queue's front with the reserve's top, in place.
pub fn swap_front_with_top(
    queue: &mut PreviewQueue,
    stack: &mut ReserveStack,
) -> Result<(), PieceError> {
    let front = queue
        .peek_front()
        .ok_or(PieceError::Underflow(Container::Queue))?;
    let top = stack
        .peek_top()
        .ok_or(PieceError::Underflow(Container::Reserve))?;

    queue.replace_at(0, top)?;
    stack.replace_at(stack.len() - 1, front)?;
    Ok(())
}

/// Exchanges the first three queued pieces with the three reserved ones.
///
/// Queue offset `i` pairs with reserve index `i` counted from the base, so
/// the reserve's base-to-top order lines up with the queue's front-to-back
/// order. Requires a full reserve and at least three queued pieces.
pub fn swap_triple(queue: &mut PreviewQueue, stack: &mut ReserveStack) -> Result<(), PieceError> {
    if stack.len() != RESERVE_CAPACITY || queue.len() < TRIPLE {
        return Err(PieceError::PreconditionFailed);
    }

    let queued: [Option<Piece>; TRIPLE] = std::array::from_fn(|offset| queue.get(offset));
    let reserved: [Option<Piece>; TRIPLE] = std::array::from_fn(|index| stack.get(index));

    for (offset, pair) in queued.into_iter().zip(reserved).enumerate() {
        if let (Some(from_queue), Some(from_reserve)) = pair {
            queue.replace_at(offset, from_reserve)?;
            stack.replace_at(offset, from_queue)?;
        }
    }
    Ok(())
}
