use std::ops::{Index, IndexMut};

use index::{
    AlignmentMatrixIndex,
    iterators::{
        AlignmentMatrixInnerIterator, AlignmentMatrixRowMajorIterator, AlignmentMatrixSeq1Iterator,
        AlignmentMatrixSeq2Iterator,
    },
};
use ndarray::Array2;

pub mod index;

/// A dynamic programming table with one row per prefix of seq1 and one column per prefix of seq2.
///
/// Cell `[i, j]` belongs to the first `i` symbols of seq1 and the first `j` symbols of seq2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentMatrix<Entry> {
    matrix: Array2<Entry>,
}

impl<Entry: Clone> AlignmentMatrix<Entry> {
    pub fn new(seq1_length: usize, seq2_length: usize, initial_entry: Entry) -> Self {
        Self {
            matrix: Array2::from_elem((seq1_length + 1, seq2_length + 1), initial_entry),
        }
    }
}

impl<Entry> AlignmentMatrix<Entry> {
    /// The number of rows and columns, i.e. one more than the sequence lengths.
    pub fn dim(&self) -> AlignmentMatrixIndex {
        AlignmentMatrixIndex::new(self.matrix.dim().0, self.matrix.dim().1)
    }

    /// The cell that covers both sequences completely.
    pub fn last_index(&self) -> AlignmentMatrixIndex {
        AlignmentMatrixIndex::new(self.matrix.dim().0 - 1, self.matrix.dim().1 - 1)
    }

    /// Iterates over column `seq2_index`, from row zero downwards.
    pub fn seq1_index_iter(&self, seq2_index: usize) -> AlignmentMatrixSeq1Iterator {
        AlignmentMatrixSeq1Iterator::new(seq2_index, self.matrix.dim().0)
    }

    /// Iterates over row `seq1_index`, from column zero rightwards.
    pub fn seq2_index_iter(&self, seq1_index: usize) -> AlignmentMatrixSeq2Iterator {
        AlignmentMatrixSeq2Iterator::new(seq1_index, self.matrix.dim().1)
    }

    pub fn inner_index_iter(&self) -> AlignmentMatrixInnerIterator {
        AlignmentMatrixInnerIterator::new(self.dim())
    }

    pub fn row_major_index_iter(&self) -> AlignmentMatrixRowMajorIterator {
        AlignmentMatrixRowMajorIterator::new(self.dim())
    }
}

impl<Entry> Index<AlignmentMatrixIndex> for AlignmentMatrix<Entry> {
    type Output = Entry;

    fn index(&self, index: AlignmentMatrixIndex) -> &Self::Output {
        &self.matrix[index]
    }
}

impl<Entry> IndexMut<AlignmentMatrixIndex> for AlignmentMatrix<Entry> {
    fn index_mut(&mut self, index: AlignmentMatrixIndex) -> &mut Self::Output {
        &mut self.matrix[index]
    }
}
