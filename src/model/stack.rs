// src/model/stack.rs

#![allow(dead_code /* API. */)]

use crate::error::{Container, PieceError};

/// Fixed-capacity LIFO stack stored in an inline array.
/// Index 0 is the base; `len - 1` is the top.
#[derive(Debug, Clone)]
pub struct BoundedStack<T, const N: usize> {
    slots: [Option<T>; N],
    len: usize,
}

impl<T: Copy, const N: usize> BoundedStack<T, N> {
    pub fn new() -> Self {
        Self {
            slots: [None; N],
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

    pub fn push(&mut self, item: T) -> Result<(), PieceError> {
        if self.is_full() {
            return Err(PieceError::CapacityExceeded(Container::Reserve));
        }
        self.slots[self.len] = Some(item);
        self.len += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T, PieceError> {
        if self.is_empty() {
            return Err(PieceError::Underflow(Container::Reserve));
        }
        let item = self.slots[self.len - 1]
            .take()
            .ok_or(PieceError::Underflow(Container::Reserve))?;
        self.len -= 1;
        Ok(item)
    }

    pub fn peek_top(&self) -> Option<T> {
        self.len.checked_sub(1).and_then(|top| self.get(top))
    }

    pub fn get(&self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        self.slots[index]
    }

    /// Overwrites the slot at `index` (counted from the base) and returns the
    /// previous value.
    pub fn replace_at(&mut self, index: usize, item: T) -> Result<T, PieceError> {
        let out_of_range = PieceError::OutOfRange {
            offset: index,
            len: self.len,
        };
        if index >= self.len {
            return Err(out_of_range);
        }
        self.slots[index].replace(item).ok_or(out_of_range)
    }

    /// Base-to-top iteration.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.slots[..self.len].iter().filter_map(|slot| *slot)
    }
}

impl<T: Copy, const N: usize> Default for BoundedStack<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
