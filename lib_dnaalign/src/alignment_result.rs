use std::{fmt::Display, ops::Range};

use alignment::Alignment;

use crate::score::Score;

pub mod alignment;

/// The symbol used for gaps in aligned strings.
pub const GAP_SYMBOL: char = '-';

/// The type of a single alignment column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlignmentType {
    /// A symbol of seq2 aligned against a gap in seq1.
    Insertion,
    /// A symbol of seq1 aligned against a gap in seq2.
    Deletion,
    /// Two different symbols.
    Substitution,
    /// Two equal symbols.
    Match,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct AlignmentResult {
    score: Score,
    aligned1: String,
    aligned2: String,
    cigar: String,
    alignment: Alignment,
    seq1_range: Range<usize>,
    seq2_range: Range<usize>,
}

impl AlignmentType {
    pub fn consumes_seq1(&self) -> bool {
        !matches!(self, Self::Insertion)
    }

    pub fn consumes_seq2(&self) -> bool {
        !matches!(self, Self::Deletion)
    }
}

impl AlignmentResult {
    /// Builds a result from the alignment columns and the aligned ranges of both sequences.
    ///
    /// The aligned strings are reconstructed from the sequences.
    pub fn new<Symbol: Copy + Into<char>>(
        score: Score,
        alignment: Alignment,
        seq1: &[Symbol],
        seq2: &[Symbol],
        seq1_range: Range<usize>,
        seq2_range: Range<usize>,
    ) -> Self {
        let mut seq1_symbols = seq1[seq1_range.clone()].iter().copied();
        let mut seq2_symbols = seq2[seq2_range.clone()].iter().copied();
        let mut aligned1 = String::with_capacity(alignment.len());
        let mut aligned2 = String::with_capacity(alignment.len());

        for alignment_type in alignment.iter_flat() {
            let symbol1 = alignment_type
                .consumes_seq1()
                .then(|| seq1_symbols.next())
                .flatten();
            let symbol2 = alignment_type
                .consumes_seq2()
                .then(|| seq2_symbols.next())
                .flatten();
            debug_assert_eq!(symbol1.is_some(), alignment_type.consumes_seq1());
            debug_assert_eq!(symbol2.is_some(), alignment_type.consumes_seq2());

            aligned1.push(symbol1.map(Into::into).unwrap_or(GAP_SYMBOL));
            aligned2.push(symbol2.map(Into::into).unwrap_or(GAP_SYMBOL));
        }
        debug_assert!(seq1_symbols.next().is_none());
        debug_assert!(seq2_symbols.next().is_none());

        Self {
            score,
            aligned1,
            aligned2,
            cigar: alignment.cigar(),
            alignment,
            seq1_range,
            seq2_range,
        }
    }

    /// An alignment without any columns.
    pub fn empty(score: Score) -> Self {
        Self {
            score,
            aligned1: String::new(),
            aligned2: String::new(),
            cigar: String::new(),
            alignment: Alignment::new(),
            seq1_range: 0..0,
            seq2_range: 0..0,
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn aligned1(&self) -> &str {
        &self.aligned1
    }

    pub fn aligned2(&self) -> &str {
        &self.aligned2
    }

    pub fn alignment(&self) -> &Alignment {
        &self.alignment
    }

    pub fn cigar(&self) -> &str {
        &self.cigar
    }

    /// The half-open range of seq1 covered by the alignment.
    pub fn seq1_range(&self) -> Range<usize> {
        self.seq1_range.clone()
    }

    /// The half-open range of seq2 covered by the alignment.
    pub fn seq2_range(&self) -> Range<usize> {
        self.seq2_range.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.alignment.is_empty()
    }
}

impl Display for AlignmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlignmentType::Insertion => write!(f, "I"),
            AlignmentType::Deletion => write!(f, "D"),
            AlignmentType::Substitution => write!(f, "S"),
            AlignmentType::Match => write!(f, "M"),
        }
    }
}

impl Display for AlignmentResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Score: {}", self.score)?;
        writeln!(f, "{}", self.aligned1)?;
        writeln!(f, "{}", self.aligned2)?;
        write!(f, "CIGAR: {}", self.cigar)
    }
}
