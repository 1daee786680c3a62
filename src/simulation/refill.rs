// src/simulation/refill.rs

use crate::model::generator::PieceGenerator;
use crate::model::piece::Piece;
use crate::model::queues::BoundedQueue;
use rand::Rng;

/// Tops the queue up to capacity with freshly generated pieces.
///
/// Each inserted piece is handed to `on_insert` before the next one is
/// generated. Returns how many pieces were added, which is always
/// `capacity - len` at entry.
pub fn refill_to_full<R: Rng, const N: usize>(
    queue: &mut BoundedQueue<Piece, N>,
    generator: &mut PieceGenerator<R>,
    mut on_insert: impl FnMut(Piece),
) -> usize {
    let mut added = 0;
    while !queue.is_full() {
        let piece = generator.generate();
        // The loop condition guarantees a free slot.
        if queue.enqueue(piece).is_err() {
            break;
        }
        on_insert(piece);
        added += 1;
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PreviewQueue;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn fills_an_empty_queue() {
        let mut queue = PreviewQueue::new();
        let mut generator = PieceGenerator::new(StdRng::seed_from_u64(1));
        let mut reported = Vec::new();

        let added = refill_to_full(&mut queue, &mut generator, |p| reported.push(p));

        assert_eq!(added, 5);
        assert!(queue.is_full());
        assert_eq!(reported, queue.iter().collect::<Vec<_>>());
    }

    #[test]
    fn only_adds_the_missing_pieces() {
        let mut queue = PreviewQueue::new();
        let mut generator = PieceGenerator::new(StdRng::seed_from_u64(2));
        refill_to_full(&mut queue, &mut generator, |_| {});
        let highest_before = queue.iter().map(|p| p.id).max().unwrap();

        queue.dequeue().unwrap();
        queue.dequeue().unwrap();
        let mut reported = Vec::new();
        let added = refill_to_full(&mut queue, &mut generator, |p| reported.push(p));

        assert_eq!(added, 2);
        assert_eq!(queue.len(), 5);
        assert!(reported.iter().all(|p| p.id > highest_before));
    }

    #[test]
    fn full_queue_is_left_alone() {
        let mut queue = PreviewQueue::new();
        let mut generator = PieceGenerator::new(StdRng::seed_from_u64(3));
        refill_to_full(&mut queue, &mut generator, |_| {});
        let next_id = generator.next_id();

        assert_eq!(refill_to_full(&mut queue, &mut generator, |_| {}), 0);
        assert_eq!(generator.next_id(), next_id);
    }
}
