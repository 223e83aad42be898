use std::ops::{Index, IndexMut};

use ndarray::Array2;

use crate::alignment_result::AlignmentType;

pub mod iterators;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlignmentMatrixIndex {
    pub(crate) seq1_index: usize,
    pub(crate) seq2_index: usize,
}

impl AlignmentMatrixIndex {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(seq1_index: usize, seq2_index: usize) -> Self {
        Self {
            seq1_index,
            seq2_index,
        }
    }

    pub fn seq1_index(&self) -> usize {
        self.seq1_index
    }

    pub fn seq2_index(&self) -> usize {
        self.seq2_index
    }

    pub fn is_origin(&self) -> bool {
        *self == Self::ORIGIN
    }

    pub fn insertion_predecessor(&self) -> Self {
        debug_assert!(self.seq2_index > 0);

        Self {
            seq1_index: self.seq1_index,
            seq2_index: self.seq2_index - 1,
        }
    }

    pub fn deletion_predecessor(&self) -> Self {
        debug_assert!(self.seq1_index > 0);

        Self {
            seq1_index: self.seq1_index - 1,
            seq2_index: self.seq2_index,
        }
    }

    pub fn match_or_substitution_predecessor(&self) -> Self {
        debug_assert!(self.seq1_index > 0);
        debug_assert!(self.seq2_index > 0);

        Self {
            seq1_index: self.seq1_index - 1,
            seq2_index: self.seq2_index - 1,
        }
    }

    pub fn predecessor(&self, alignment_type: AlignmentType) -> Self {
        match alignment_type {
            AlignmentType::Insertion => self.insertion_predecessor(),
            AlignmentType::Deletion => self.deletion_predecessor(),
            AlignmentType::Match | AlignmentType::Substitution => {
                self.match_or_substitution_predecessor()
            }
        }
    }
}

impl<T> Index<AlignmentMatrixIndex> for Array2<T> {
    type Output = <Array2<T> as Index<[usize; 2]>>::Output;

    fn index(&self, index: AlignmentMatrixIndex) -> &Self::Output {
        &self[[index.seq1_index, index.seq2_index]]
    }
}

impl<T> IndexMut<AlignmentMatrixIndex> for Array2<T> {
    fn index_mut(&mut self, index: AlignmentMatrixIndex) -> &mut Self::Output {
        &mut self[[index.seq1_index, index.seq2_index]]
    }
}
