//! File name comparators used to order folder inputs.
//!
//! Platform directory listings come back in arbitrary order and native sort
//! rules differ between systems, so the resolver always sorts with one of
//! these explicit comparators.

use std::cmp::Ordering;

/// Boxed comparator over file names.
pub type NameComparator = Box<dyn Fn(&str, &str) -> Ordering + Send + Sync>;

/// Case-insensitive lexicographic order.
///
/// Names that differ only in case are ordered case-sensitively afterwards so
/// the result is a total order.
///
/// ```
/// use pdfmerge::resolve::order::case_insensitive;
///
/// let mut names = vec!["B.pdf", "a.PDF", "C.pdf"];
/// names.sort_by(|a, b| case_insensitive(a, b));
/// assert_eq!(names, ["a.PDF", "B.pdf", "C.pdf"]);
/// ```
pub fn case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Natural order: runs of digits compare by numeric value, everything else
/// case-insensitively, so `page2.pdf` sorts before `page10.pdf`.
pub fn natural(a: &str, b: &str) -> Ordering {
    let mut left = Chunks::new(a);
    let mut right = Chunks::new(b);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return case_insensitive(a, b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = compare_chunks(x, y);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

fn compare_chunks(a: Chunk<'_>, b: Chunk<'_>) -> Ordering {
    match (a, b) {
        (Chunk::Digits(x), Chunk::Digits(y)) => {
            let x = x.trim_start_matches('0');
            let y = y.trim_start_matches('0');
            x.len().cmp(&y.len()).then_with(|| x.cmp(y))
        }
        (Chunk::Digits(_), Chunk::Text(_)) => Ordering::Less,
        (Chunk::Text(_), Chunk::Digits(_)) => Ordering::Greater,
        (Chunk::Text(x), Chunk::Text(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
    }
}

/// Splits a name into alternating digit and non-digit runs.
struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map(|(i, _)| i)
            .unwrap_or(self.rest.len());

        let (head, tail) = self.rest.split_at(end);
        self.rest = tail;

        Some(if digits {
            Chunk::Digits(head)
        } else {
            Chunk::Text(head)
        })
    }
}
