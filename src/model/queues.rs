// src/model/queues.rs

#![allow(dead_code /* API. */)]

use crate::error::{Container, PieceError};

/// Fixed-capacity FIFO ring buffer.
///
/// Slots live in an inline array addressed by a front index and an element
/// count, so enqueue and dequeue never shift anything.
#[derive(Debug, Clone)]
pub struct BoundedQueue<T, const N: usize> {
    slots: [Option<T>; N],
    front: usize,
    len: usize,
}

impl<T: Copy, const N: usize> BoundedQueue<T, N> {
    pub fn new() -> Self {
        Self {
            slots: [None; N],
            front: 0,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Appends at the back.
    pub fn enqueue(&mut self, item: T) -> Result<(), PieceError> {
        if self.is_full() {
            return Err(PieceError::CapacityExceeded(Container::Queue));
        }
        let back = self.slot_index(self.len);
        self.slots[back] = Some(item);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the front element.
    pub fn dequeue(&mut self) -> Result<T, PieceError> {
        if self.is_empty() {
            return Err(PieceError::Underflow(Container::Queue));
        }
        let item = self.slots[self.front]
            .take()
            .ok_or(PieceError::Underflow(Container::Queue))?;
        self.front = (self.front + 1) % N;
        self.len -= 1;
        Ok(item)
    }

    pub fn peek_front(&self) -> Option<T> {
        self.get(0)
    }

    /// Reads the element `offset` places behind the front.
    pub fn get(&self, offset: usize) -> Option<T> {
        if offset >= self.len {
            return None;
        }
        self.slots[self.slot_index(offset)]
    }

    /// Overwrites the element `offset` places behind the front, returning the
    /// value it held. Order and length are unchanged.
    pub fn replace_at(&mut self, offset: usize, item: T) -> Result<T, PieceError> {
        if offset >= self.len {
            return Err(PieceError::OutOfRange {
                offset,
                len: self.len,
            });
        }
        let index = self.slot_index(offset);
        self.slots[index]
            .replace(item)
            .ok_or(PieceError::OutOfRange {
                offset,
                len: self.len,
            })
    }

    /// Front-to-back iteration.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.len).filter_map(move |offset| self.slots[self.slot_index(offset)])
    }

    fn slot_index(&self, offset: usize) -> usize {
        (self.front + offset) % N
    }
}

impl<T: Copy, const N: usize> Default for BoundedQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
