use super::AlignmentMatrixIndex;

pub struct AlignmentMatrixSeq1Iterator {
    index: AlignmentMatrixIndex,
    limit: usize,
}

pub struct AlignmentMatrixSeq2Iterator {
    index: AlignmentMatrixIndex,
    limit: usize,
}

/// An iterator over the alignment matrix indices skipping row and column zero.
///
/// The iterator is row-major, i.e. it increments the seq2 position every iteration, and increments the seq1 position only after reaching the limit of seq2.
/// Hence the match, deletion and insertion predecessors of each index are yielded before the index itself.
pub struct AlignmentMatrixInnerIterator {
    index: AlignmentMatrixIndex,
    limit: AlignmentMatrixIndex,
}

/// A row-major iterator over all alignment matrix indices, starting at the origin.
pub struct AlignmentMatrixRowMajorIterator {
    index: AlignmentMatrixIndex,
    limit: AlignmentMatrixIndex,
}

impl AlignmentMatrixSeq1Iterator {
    pub(in crate::alignment_matrix) fn new(seq2_index: usize, limit: usize) -> Self {
        Self {
            index: AlignmentMatrixIndex::new(0, seq2_index),
            limit,
        }
    }
}

impl AlignmentMatrixSeq2Iterator {
    pub(in crate::alignment_matrix) fn new(seq1_index: usize, limit: usize) -> Self {
        Self {
            index: AlignmentMatrixIndex::new(seq1_index, 0),
            limit,
        }
    }
}

impl AlignmentMatrixInnerIterator {
    pub(in crate::alignment_matrix) fn new(limit: AlignmentMatrixIndex) -> Self {
        debug_assert!(limit.seq1_index > 0);
        debug_assert!(limit.seq2_index > 0);

        Self {
            index: if limit.seq1_index > 1 && limit.seq2_index > 1 {
                AlignmentMatrixIndex::new(1, 1)
            } else {
                limit
            },
            limit,
        }
    }
}

impl AlignmentMatrixRowMajorIterator {
    pub(in crate::alignment_matrix) fn new(limit: AlignmentMatrixIndex) -> Self {
        debug_assert!(limit.seq1_index > 0);
        debug_assert!(limit.seq2_index > 0);

        Self {
            index: AlignmentMatrixIndex::ORIGIN,
            limit,
        }
    }
}

impl Iterator for AlignmentMatrixSeq1Iterator {
    type Item = AlignmentMatrixIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index.seq1_index < self.limit {
            let result = self.index;
            self.index.seq1_index += 1;
            Some(result)
        } else {
            None
        }
    }
}

impl Iterator for AlignmentMatrixSeq2Iterator {
    type Item = AlignmentMatrixIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index.seq2_index < self.limit {
            let result = self.index;
            self.index.seq2_index += 1;
            Some(result)
        } else {
            None
        }
    }
}

impl Iterator for AlignmentMatrixInnerIterator {
    type Item = AlignmentMatrixIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index.seq1_index < self.limit.seq1_index
            && self.index.seq2_index < self.limit.seq2_index
        {
            let result = self.index;
            self.index.seq2_index += 1;
            if self.index.seq2_index == self.limit.seq2_index {
                self.index.seq2_index = 1;
                self.index.seq1_index += 1;
            }
            Some(result)
        } else {
            None
        }
    }
}

impl Iterator for AlignmentMatrixRowMajorIterator {
    type Item = AlignmentMatrixIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index.seq1_index < self.limit.seq1_index {
            let result = self.index;
            self.index.seq2_index += 1;
            if self.index.seq2_index == self.limit.seq2_index {
                self.index.seq2_index = 0;
                self.index.seq1_index += 1;
            }
            Some(result)
        } else {
            None
        }
    }
}
