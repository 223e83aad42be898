use std::{fmt::Display, iter};

use super::AlignmentType;

/// Alignment columns in left-to-right order, run-length encoded.
///
/// Consecutive columns of the same type are always merged,
/// so each gap entry is a maximal gap run.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    alignment: Vec<(usize, AlignmentType)>,
}

impl Alignment {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn push(&mut self, alignment_type: AlignmentType) {
        if let Some((multiplicity, last_alignment_type)) = self.alignment.last_mut() {
            if *last_alignment_type == alignment_type {
                *multiplicity += 1;
            } else {
                self.alignment.push((1, alignment_type));
            }
        } else {
            self.alignment.push((1, alignment_type));
        }
    }

    /// The number of columns.
    pub fn len(&self) -> usize {
        self.alignment
            .iter()
            .map(|(multiplicity, _)| multiplicity)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.alignment.is_empty()
    }

    pub fn iter_compact(&self) -> impl Iterator<Item = &(usize, AlignmentType)> {
        self.alignment.iter()
    }

    pub fn iter_flat(&self) -> impl Iterator<Item = AlignmentType> + '_ {
        self.alignment
            .iter()
            .flat_map(|&(multiplicity, alignment_type)| {
                iter::repeat_n(alignment_type, multiplicity)
            })
    }

    /// The number of symbols of seq1 and seq2 covered by the alignment.
    pub fn consumed_lengths(&self) -> (usize, usize) {
        self.alignment.iter().fold(
            (0, 0),
            |(seq1_length, seq2_length), &(multiplicity, alignment_type)| {
                (
                    seq1_length + usize::from(alignment_type.consumes_seq1()) * multiplicity,
                    seq2_length + usize::from(alignment_type.consumes_seq2()) * multiplicity,
                )
            },
        )
    }

    pub fn cigar(&self) -> String {
        let mut result = String::new();
        self.write_cigar(&mut result)
            .unwrap_or_else(|_| unreachable!("writing to a string does not fail"));
        result
    }

    pub fn write_cigar(&self, writer: &mut impl std::fmt::Write) -> std::fmt::Result {
        for (amount, alignment_type) in &self.alignment {
            write!(writer, "{amount}{alignment_type}")?;
        }

        Ok(())
    }

    /// Reverses the column order, e.g. after collecting columns during a traceback.
    pub fn reverse(&mut self) {
        self.alignment.reverse();
    }
}

impl From<Vec<(usize, AlignmentType)>> for Alignment {
    fn from(value: Vec<(usize, AlignmentType)>) -> Self {
        let mut result = Self::new();
        for (multiplicity, alignment_type) in value {
            for _ in 0..multiplicity {
                result.push(alignment_type);
            }
        }
        result
    }
}

impl Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_cigar(f)
    }
}
