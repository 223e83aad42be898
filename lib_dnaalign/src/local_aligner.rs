//! Local alignment with linear gap costs after Smith and Waterman.

use log::{debug, trace};

use crate::{
    alignment_matrix::{AlignmentMatrix, index::AlignmentMatrixIndex},
    alignment_result::{AlignmentResult, AlignmentType, alignment::Alignment},
    error::Result,
    score::Score,
    scoring::{LinearScoring, ScoringScheme},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalAlignmentMatrix {
    matrix: AlignmentMatrix<LocalAlignmentMatrixEntry>,
    scoring: LinearScoring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalAlignmentMatrixEntry {
    pub score: Score,
    /// The column that led to this cell, or `None` if a local alignment starts here.
    pub alignment_type: Option<AlignmentType>,
}

/// Computes an optimal local alignment of `seq1` and `seq2` with linear gap costs.
///
/// Runs in `O(n * m)` time and space.
pub fn align_local<Symbol: Copy + Eq + Into<char>>(
    seq1: &[Symbol],
    seq2: &[Symbol],
    scoring: &LinearScoring,
) -> Result<AlignmentResult> {
    scoring.check_score_range(seq1.len(), seq2.len())?;

    let mut matrix = LocalAlignmentMatrix::new(*scoring, seq1.len(), seq2.len());
    matrix.align(seq1, seq2);
    trace!("Local alignment matrix:\n{matrix}");
    Ok(matrix.traceback(seq1, seq2))
}

impl LocalAlignmentMatrix {
    pub fn new(scoring: LinearScoring, seq1_length: usize, seq2_length: usize) -> Self {
        debug!(
            "Allocating local alignment matrix of dimension {}x{}",
            seq1_length + 1,
            seq2_length + 1
        );

        Self {
            matrix: AlignmentMatrix::new(
                seq1_length,
                seq2_length,
                LocalAlignmentMatrixEntry::default(),
            ),
            scoring,
        }
    }

    /// Fills the matrix and returns the best score of any cell.
    ///
    /// Row and column zero keep their initial score of zero.
    pub fn align<Symbol: Copy + Eq>(&mut self, seq1: &[Symbol], seq2: &[Symbol]) -> Score {
        debug_assert_eq!(
            self.matrix.dim(),
            AlignmentMatrixIndex::new(seq1.len() + 1, seq2.len() + 1)
        );

        for index in self.matrix.inner_index_iter() {
            self.set_max_score(index, seq1, seq2);
        }

        self.matrix[self.best_index()].score
    }

    fn set_max_score<Symbol: Copy + Eq>(
        &mut self,
        index: AlignmentMatrixIndex,
        seq1: &[Symbol],
        seq2: &[Symbol],
    ) {
        // Handle matches and substitutions.
        let mut entry = self.compute_match_or_substitution_entry(index, seq1, seq2);

        // Handle deletions.
        let deletion_entry = self.compute_gap_entry(index, AlignmentType::Deletion);
        if deletion_entry.score > entry.score {
            entry = deletion_entry;
        }

        // Handle insertions.
        let insertion_entry = self.compute_gap_entry(index, AlignmentType::Insertion);
        if insertion_entry.score > entry.score {
            entry = insertion_entry;
        }

        // Start a new local alignment.
        if Score::ZERO > entry.score {
            entry = LocalAlignmentMatrixEntry::default();
        }

        self.matrix[index] = entry;
    }

    fn compute_match_or_substitution_entry<Symbol: Copy + Eq>(
        &self,
        index: AlignmentMatrixIndex,
        seq1: &[Symbol],
        seq2: &[Symbol],
    ) -> LocalAlignmentMatrixEntry {
        let predecessor = index.match_or_substitution_predecessor();
        let (a, b) = (seq1[predecessor.seq1_index], seq2[predecessor.seq2_index]);
        let alignment_type = if a == b {
            AlignmentType::Match
        } else {
            AlignmentType::Substitution
        };

        LocalAlignmentMatrixEntry {
            score: self.matrix[predecessor].score + self.scoring.substitution(a, b),
            alignment_type: Some(alignment_type),
        }
    }

    fn compute_gap_entry(
        &self,
        index: AlignmentMatrixIndex,
        alignment_type: AlignmentType,
    ) -> LocalAlignmentMatrixEntry {
        let predecessor_score = self.matrix[index.predecessor(alignment_type)].score;

        LocalAlignmentMatrixEntry {
            score: predecessor_score - Score::from(self.scoring.indel_penalty()),
            alignment_type: Some(alignment_type),
        }
    }

    /// The first cell in row-major order that holds the maximum score.
    pub fn best_index(&self) -> AlignmentMatrixIndex {
        let mut best_index = AlignmentMatrixIndex::ORIGIN;
        for index in self.matrix.row_major_index_iter() {
            if self.matrix[index].score > self.matrix[best_index].score {
                best_index = index;
            }
        }
        best_index
    }

    /// Reconstructs an optimal local alignment from the filled matrix.
    ///
    /// If no cell has a positive score, the alignment is empty.
    pub fn traceback<Symbol: Copy + Eq + Into<char>>(
        &self,
        seq1: &[Symbol],
        seq2: &[Symbol],
    ) -> AlignmentResult {
        let end = self.best_index();
        let score = self.matrix[end].score;
        if score == Score::ZERO {
            debug!("No positive-scoring local alignment exists");
            return AlignmentResult::empty(score);
        }

        let mut index = end;
        let mut alignment = Alignment::new();
        while let Some(alignment_type) = self.matrix[index].alignment_type {
            alignment.push(alignment_type);
            index = index.predecessor(alignment_type);
        }
        debug!("Local alignment score {score} from {index:?} to {end:?}");

        alignment.reverse();
        AlignmentResult::new(
            score,
            alignment,
            seq1,
            seq2,
            index.seq1_index..end.seq1_index,
            index.seq2_index..end.seq2_index,
        )
    }
}

impl Default for LocalAlignmentMatrixEntry {
    fn default() -> Self {
        Self {
            score: Score::ZERO,
            alignment_type: None,
        }
    }
}

impl core::fmt::Display for LocalAlignmentMatrix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let dim = self.matrix.dim();
        let mut score_column_widths = vec![1; dim.seq2_index];
        for index in self.matrix.row_major_index_iter() {
            let score_column_width = &mut score_column_widths[index.seq2_index];
            *score_column_width =
                (*score_column_width).max(self.matrix[index].score.as_i64().to_string().len());
        }

        for seq1_index in 0..dim.seq1_index {
            write!(f, "[ ")?;
            for index in self.matrix.seq2_index_iter(seq1_index) {
                let entry = &self.matrix[index];
                write!(
                    f,
                    "{: >width$}",
                    entry.score.as_i64(),
                    width = score_column_widths[index.seq2_index],
                )?;
                write!(
                    f,
                    "{} ",
                    match entry.alignment_type {
                        None => "N",
                        Some(AlignmentType::Insertion) => "I",
                        Some(AlignmentType::Deletion) => "D",
                        Some(AlignmentType::Match) => "M",
                        Some(AlignmentType::Substitution) => "S",
                    }
                )?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        alignment_matrix::index::AlignmentMatrixIndex, alignment_result::AlignmentType,
        score::Score, scoring::LinearScoring,
    };

    use super::{LocalAlignmentMatrix, LocalAlignmentMatrixEntry, align_local};

    impl LocalAlignmentMatrix {
        fn manual_debug_fill(
            &mut self,
            entries: impl IntoIterator<Item = LocalAlignmentMatrixEntry>,
        ) {
            let mut entries = entries.into_iter();
            for index in self.matrix.inner_index_iter() {
                self.matrix[index] = entries.next().unwrap();
            }
            assert!(entries.next().is_none());
        }
    }

    #[test]
    fn test_simple_matrix() {
        let scoring = LinearScoring::new(1, 1, 1).unwrap();
        let mut matrix = LocalAlignmentMatrix::new(scoring, 3, 4);
        assert_eq!(matrix.align(b"ACG", b"TACG"), Score::from(3));

        let mut manual_matrix = matrix.clone();
        manual_matrix.manual_debug_fill(
            [
                (0, None),
                (1, Some(AlignmentType::Match)),
                (0, Some(AlignmentType::Insertion)),
                (0, None),
                (0, None),
                (0, Some(AlignmentType::Deletion)),
                (2, Some(AlignmentType::Match)),
                (1, Some(AlignmentType::Insertion)),
                (0, None),
                (0, None),
                (1, Some(AlignmentType::Deletion)),
                (3, Some(AlignmentType::Match)),
            ]
            .into_iter()
            .map(|(score, alignment_type)| LocalAlignmentMatrixEntry {
                score: score.into(),
                alignment_type,
            }),
        );
        assert_eq!(
            matrix, manual_matrix,
            "matrix:\n{matrix}\nmanual_matrix:\n{manual_matrix}"
        );
        assert_eq!(matrix.best_index(), AlignmentMatrixIndex::new(3, 4));
        assert_eq!(
            matrix.to_string(),
            "[ 0N 0N 0N 0N 0N ]\n[ 0N 0N 1M 0I 0N ]\n[ 0N 0N 0D 2M 1I ]\n[ 0N 0N 0N 1D 3M ]\n"
        );
    }

    #[test]
    fn classic_example() {
        let scoring = LinearScoring::new(1, 1, 1).unwrap();
        let result = align_local(b"GATTACA", b"GCATGCU", &scoring).unwrap();

        assert_eq!(result.score(), Score::from(2));
        assert_eq!(result.aligned1(), "G-AT");
        assert_eq!(result.aligned2(), "GCAT");
        assert_eq!(result.seq1_range(), 0..3);
        assert_eq!(result.seq2_range(), 0..4);
    }

    #[test]
    fn finds_embedded_match() {
        let scoring = LinearScoring::new(2, 1, 1).unwrap();
        let result = align_local(b"ACGT", b"TTACGTAA", &scoring).unwrap();

        assert_eq!(result.score(), Score::from(8));
        assert_eq!(result.aligned1(), "ACGT");
        assert_eq!(result.aligned2(), "ACGT");
        assert_eq!(result.seq1_range(), 0..4);
        assert_eq!(result.seq2_range(), 2..6);
    }

    #[test]
    fn gapped_local_alignment() {
        let scoring = LinearScoring::new(1, 2, 1).unwrap();
        let result = align_local(b"TTACGGTT", b"ACGTT", &scoring).unwrap();

        assert_eq!(result.score(), Score::from(4));
        assert_eq!(result.aligned1(), "ACGGTT");
        assert_eq!(result.aligned2(), "AC-GTT");
        assert_eq!(result.cigar(), "2M1D3M");
        assert_eq!(result.seq1_range(), 2..8);
        assert_eq!(result.seq2_range(), 0..5);
    }

    #[test]
    fn no_common_symbols() {
        let scoring = LinearScoring::new(1, 1, 1).unwrap();
        let result = align_local(b"AAAA", b"CCCC", &scoring).unwrap();

        assert_eq!(result.score(), Score::ZERO);
        assert!(result.is_empty());
        assert_eq!(result.aligned1(), "");
        assert_eq!(result.aligned2(), "");
    }
}
