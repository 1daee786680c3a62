// src/io/display.rs

use std::io::{self, Write};

use crate::model::piece::Piece;
use crate::model::{PreviewQueue, ReserveStack};

const EMPTY: &str = "(empty)";

/// Renders the queue front to back.
pub fn write_queue<W: Write>(out: &mut W, queue: &PreviewQueue) -> io::Result<()> {
    writeln!(out, "\n=== Queue (front -> back) ===")?;
    if queue.is_empty() {
        return writeln!(out, "{EMPTY}");
    }
    writeln!(out, "{}", join(queue.iter()))
}

/// Renders the reserve base to top, marking the top.
pub fn write_reserve<W: Write>(out: &mut W, reserve: &ReserveStack) -> io::Result<()> {
    writeln!(out, "=== Reserve (base -> top) ===")?;
    if reserve.is_empty() {
        return writeln!(out, "{EMPTY}");
    }
    writeln!(out, "{} <- top", join(reserve.iter()))
}

fn join(pieces: impl Iterator<Item = Piece>) -> String {
    pieces
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::piece::Category;

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn queue_layout() {
        let mut queue = PreviewQueue::new();
        assert_eq!(
            rendered(|out| write_queue(out, &queue)),
            "\n=== Queue (front -> back) ===\n(empty)\n"
        );

        queue.enqueue(Piece::new(Category::I, 0)).unwrap();
        queue.enqueue(Piece::new(Category::O, 1)).unwrap();
        assert_eq!(
            rendered(|out| write_queue(out, &queue)),
            "\n=== Queue (front -> back) ===\n[I 0] [O 1]\n"
        );
    }

    #[test]
    fn reserve_layout_marks_top() {
        let mut reserve = ReserveStack::new();
        assert_eq!(
            rendered(|out| write_reserve(out, &reserve)),
            "=== Reserve (base -> top) ===\n(empty)\n"
        );

        reserve.push(Piece::new(Category::T, 2)).unwrap();
        reserve.push(Piece::new(Category::L, 3)).unwrap();
        assert_eq!(
            rendered(|out| write_reserve(out, &reserve)),
            "=== Reserve (base -> top) ===\n[T 2] [L 3] <- top\n"
        );
    }
}
