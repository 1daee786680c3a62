// src/model/piece.rs

use std::fmt;

/// The shape tag carried by every piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    I,
    O,
    T,
    L,
}

impl Category {
    /// Every category, in the order the generator indexes them.
    pub const ALL: [Category; 4] = [Category::I, Category::O, Category::T, Category::L];

    pub fn symbol(self) -> char {
        match self {
            Category::I => 'I',
            Category::O => 'O',
            Category::T => 'T',
            Category::L => 'L',
        }
    }
}

/// A single piece. Only the generator creates these; containers move copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub category: Category,
    pub id: u64,
}

impl Piece {
    pub fn new(category: Category, id: u64) -> Self {
        Self { category, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.category.symbol(), self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_symbol_and_id() {
        assert_eq!(Piece::new(Category::T, 7).to_string(), "[T 7]");
        assert_eq!(Piece::new(Category::L, 0).to_string(), "[L 0]");
    }
}
