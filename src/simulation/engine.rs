// src/simulation/engine.rs

use crate::error::{Container, PieceError};
use crate::model::generator::PieceGenerator;
use crate::model::piece::Piece;
use crate::model::{PreviewQueue, ReserveStack};
use crate::simulation::config::Tier;
use crate::simulation::refill::refill_to_full;
use crate::simulation::transfers;
use rand::Rng;
use serde::Serialize;

/// One executed command, written to CSV when the session ends.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRecord {
    pub turn: usize,
    pub command: String,
    pub outcome: String,
    pub queue: String,
    pub reserve: String,
}

/// A piece that left the queue, plus the pieces that backfilled it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub piece: Piece,
    pub refilled: Vec<Piece>,
}

/// Owns both containers and the generator for one interactive run.
///
/// Every operation takes `&mut self`, so a swap is never observable halfway.
pub struct Session<R> {
    tier: Tier,
    queue: PreviewQueue,
    reserve: ReserveStack,
    generator: PieceGenerator<R>,
    turn: usize,
    pub history: Vec<HistoryRecord>,
}

impl<R: Rng> Session<R> {
    /// Starts a session with the queue already filled to capacity.
    pub fn new(tier: Tier, rng: R) -> Self {
        let mut queue = PreviewQueue::new();
        let mut generator = PieceGenerator::new(rng);
        refill_to_full(&mut queue, &mut generator, |_| {});
        Self::from_parts(tier, queue, ReserveStack::new(), generator)
    }

    /// Assembles a session around existing containers, as-is.
    pub fn from_parts(
        tier: Tier,
        queue: PreviewQueue,
        reserve: ReserveStack,
        generator: PieceGenerator<R>,
    ) -> Self {
        Self {
            tier,
            queue,
            reserve,
            generator,
            turn: 0,
            history: Vec::new(),
        }
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn queue(&self) -> &PreviewQueue {
        &self.queue
    }

    pub fn reserve(&self) -> &ReserveStack {
        &self.reserve
    }

    /// The id the next minted piece will carry.
    pub fn next_id(&self) -> u64 {
        self.generator.next_id()
    }

    pub fn play(&mut self) -> Result<Transfer, PieceError> {
        let mut refilled = Vec::new();
        let piece = transfers::play_from_queue(&mut self.queue, &mut self.generator, |p| {
            refilled.push(p)
        })?;
        Ok(Transfer { piece, refilled })
    }

    pub fn reserve_front(&mut self) -> Result<Transfer, PieceError> {
        let mut refilled = Vec::new();
        let piece = transfers::reserve_from_queue(
            &mut self.queue,
            &mut self.reserve,
            &mut self.generator,
            |p| refilled.push(p),
        )?;
        Ok(Transfer { piece, refilled })
    }

    /// Appends one fresh piece without removing anything. No id is spent
    /// when the queue is already full.
    pub fn insert_fresh(&mut self) -> Result<Piece, PieceError> {
        if self.queue.is_full() {
            return Err(PieceError::CapacityExceeded(Container::Queue));
        }
        let piece = self.generator.generate();
        self.queue.enqueue(piece)?;
        Ok(piece)
    }

    pub fn use_reserved(&mut self) -> Result<Piece, PieceError> {
        transfers::use_reserved(&mut self.reserve)
    }

    pub fn swap_front_with_top(&mut self) -> Result<(), PieceError> {
        transfers::swap_front_with_top(&mut self.queue, &mut self.reserve)
    }

    pub fn swap_triple(&mut self) -> Result<(), PieceError> {
        transfers::swap_triple(&mut self.queue, &mut self.reserve)
    }

    /// Appends a history row with the containers as they are now.
    pub fn record(&mut self, command: &str, outcome: &str) {
        self.turn += 1;
        self.history.push(HistoryRecord {
            turn: self.turn,
            command: command.to_string(),
            outcome: outcome.to_string(),
            queue: snapshot(self.queue.iter()),
            reserve: snapshot(self.reserve.iter()),
        });
    }
}

fn snapshot(pieces: impl Iterator<Item = Piece>) -> String {
    pieces
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
