//! Global alignment with affine gap costs after Gotoh.
//!
//! Three matrices are filled in lockstep.
//! The match matrix holds the best score of any alignment of a pair of prefixes,
//! which ends either in a substitution column or in one of the two gap states.
//! The deletion matrix (`Ix`) holds the best score of alignments ending with a symbol of seq1 against a gap,
//! the insertion matrix (`Iy`) of alignments ending with a symbol of seq2 against a gap.
//!
//! Ties are broken as follows:
//!  * gap states prefer extending the current gap run over opening a new one,
//!  * the match state prefers the diagonal over entering the deletion state, and that over entering the insertion state.

use log::debug;

use crate::{
    alignment_matrix::{AlignmentMatrix, index::AlignmentMatrixIndex},
    alignment_result::{AlignmentResult, AlignmentType, alignment::Alignment},
    error::Result,
    score::Score,
    scoring::{AffineScoring, ScoringScheme},
};

/// The state of the traceback, i.e. the matrix a cell is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GapType {
    /// The match matrix.
    None,
    /// The insertion matrix, a gap in seq1.
    Insertion,
    /// The deletion matrix, a gap in seq2.
    Deletion,
}

/// How the score of a cell was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Predecessor {
    /// The matrix origin, or an unreachable cell.
    None,
    /// A substitution column following the match state of the diagonal predecessor.
    Diagonal,
    /// The same cell in the given gap state.
    Gap(GapType),
    /// The first column of a gap run, following the match state of the predecessor.
    GapOpen,
    /// A further column of a gap run, following the same gap state of the predecessor.
    GapExtend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    score: Score,
    predecessor: Predecessor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapAffineAlignmentMatrix {
    match_matrix: AlignmentMatrix<Entry>,
    insertion_matrix: AlignmentMatrix<Entry>,
    deletion_matrix: AlignmentMatrix<Entry>,
    scoring: AffineScoring,
}

/// Computes an optimal global alignment of `seq1` and `seq2` with affine gap costs.
///
/// Runs in `O(n * m)` time and space.
pub fn align_global<Symbol: Copy + Eq + Into<char>>(
    seq1: &[Symbol],
    seq2: &[Symbol],
    scoring: &AffineScoring,
) -> Result<AlignmentResult> {
    scoring.check_score_range(seq1.len(), seq2.len())?;

    let mut matrix = GapAffineAlignmentMatrix::new(*scoring, seq1.len(), seq2.len());
    matrix.align(seq1, seq2);
    Ok(matrix.traceback(seq1, seq2))
}

impl GapAffineAlignmentMatrix {
    pub fn new(scoring: AffineScoring, seq1_length: usize, seq2_length: usize) -> Self {
        debug!(
            "Allocating three gap-affine alignment matrices of dimension {}x{}",
            seq1_length + 1,
            seq2_length + 1
        );

        Self {
            match_matrix: AlignmentMatrix::new(seq1_length, seq2_length, Entry::default()),
            insertion_matrix: AlignmentMatrix::new(seq1_length, seq2_length, Entry::default()),
            deletion_matrix: AlignmentMatrix::new(seq1_length, seq2_length, Entry::default()),
            scoring,
        }
    }

    /// Fills the matrices and returns the optimal score.
    pub fn align<Symbol: Copy + Eq>(&mut self, seq1: &[Symbol], seq2: &[Symbol]) -> Score {
        debug_assert_eq!(
            self.match_matrix.dim(),
            AlignmentMatrixIndex::new(seq1.len() + 1, seq2.len() + 1)
        );

        self.initialise();
        self.align_inner(seq1, seq2);
        self.final_entry().0
    }

    fn initialise(&mut self) {
        // Initialise matrix origin.
        self.match_matrix[AlignmentMatrixIndex::ORIGIN] = Entry {
            score: Score::ZERO,
            predecessor: Predecessor::None,
        };

        // Initialise matrix edges.
        for index in self.match_matrix.seq1_index_iter(0).skip(1) {
            self.deletion_matrix[index] = self.compute_deletion_entry(index);
            self.match_matrix[index] = Entry {
                score: self.deletion_matrix[index].score,
                predecessor: Predecessor::Gap(GapType::Deletion),
            };
        }
        for index in self.match_matrix.seq2_index_iter(0).skip(1) {
            self.insertion_matrix[index] = self.compute_insertion_entry(index);
            self.match_matrix[index] = Entry {
                score: self.insertion_matrix[index].score,
                predecessor: Predecessor::Gap(GapType::Insertion),
            };
        }
    }

    fn align_inner<Symbol: Copy + Eq>(&mut self, seq1: &[Symbol], seq2: &[Symbol]) {
        for index in self.match_matrix.inner_index_iter() {
            self.deletion_matrix[index] = self.compute_deletion_entry(index);
            self.insertion_matrix[index] = self.compute_insertion_entry(index);
            self.set_max_score(index, seq1, seq2);
        }
    }

    fn set_max_score<Symbol: Copy + Eq>(
        &mut self,
        index: AlignmentMatrixIndex,
        seq1: &[Symbol],
        seq2: &[Symbol],
    ) {
        // Handle matches and substitutions.
        let predecessor = index.match_or_substitution_predecessor();
        let mut entry = Entry {
            score: self.match_matrix[predecessor].score
                + self
                    .scoring
                    .substitution(seq1[predecessor.seq1_index], seq2[predecessor.seq2_index]),
            predecessor: Predecessor::Diagonal,
        };

        // Handle deletions.
        let deletion_score = self.deletion_matrix[index].score;
        if deletion_score > entry.score {
            entry = Entry {
                score: deletion_score,
                predecessor: Predecessor::Gap(GapType::Deletion),
            };
        }

        // Handle insertions.
        let insertion_score = self.insertion_matrix[index].score;
        if insertion_score > entry.score {
            entry = Entry {
                score: insertion_score,
                predecessor: Predecessor::Gap(GapType::Insertion),
            };
        }

        self.match_matrix[index] = entry;
    }

    fn compute_deletion_entry(&self, index: AlignmentMatrixIndex) -> Entry {
        let predecessor = index.deletion_predecessor();
        self.compute_gap_entry(
            self.deletion_matrix[predecessor].score,
            self.match_matrix[predecessor].score,
        )
    }

    fn compute_insertion_entry(&self, index: AlignmentMatrixIndex) -> Entry {
        let predecessor = index.insertion_predecessor();
        self.compute_gap_entry(
            self.insertion_matrix[predecessor].score,
            self.match_matrix[predecessor].score,
        )
    }

    fn compute_gap_entry(
        &self,
        gap_predecessor_score: Score,
        match_predecessor_score: Score,
    ) -> Entry {
        let extend_score = gap_predecessor_score - Score::from(self.scoring.gap_extend());
        let open_score = match_predecessor_score - self.scoring.gap_open_extend();

        if open_score > extend_score {
            Entry {
                score: open_score,
                predecessor: Predecessor::GapOpen,
            }
        } else if extend_score.is_unreachable() {
            Entry::default()
        } else {
            Entry {
                score: extend_score,
                predecessor: Predecessor::GapExtend,
            }
        }
    }

    /// The optimal score and the state it is achieved in, preferring the match state on ties.
    fn final_entry(&self) -> (Score, GapType) {
        let index = self.match_matrix.last_index();
        let mut result = (self.match_matrix[index].score, GapType::None);

        for (matrix, gap_type) in [
            (&self.deletion_matrix, GapType::Deletion),
            (&self.insertion_matrix, GapType::Insertion),
        ] {
            if matrix[index].score > result.0 {
                result = (matrix[index].score, gap_type);
            }
        }

        result
    }

    fn matrix(&self, gap_type: GapType) -> &AlignmentMatrix<Entry> {
        match gap_type {
            GapType::None => &self.match_matrix,
            GapType::Insertion => &self.insertion_matrix,
            GapType::Deletion => &self.deletion_matrix,
        }
    }

    /// Reconstructs an optimal alignment from the filled matrices.
    pub fn traceback<Symbol: Copy + Eq + Into<char>>(
        &self,
        seq1: &[Symbol],
        seq2: &[Symbol],
    ) -> AlignmentResult {
        let (score, mut gap_type) = self.final_entry();
        let end = self.match_matrix.last_index();
        debug!("Global alignment score {score}, traceback starts in state {gap_type:?}");

        let mut index = end;
        let mut alignment = Alignment::new();

        while !index.is_origin() {
            let predecessor = self.matrix(gap_type)[index].predecessor;

            let alignment_type = match (gap_type, predecessor) {
                (GapType::None, Predecessor::Diagonal) => {
                    let predecessor = index.match_or_substitution_predecessor();
                    if seq1[predecessor.seq1_index] == seq2[predecessor.seq2_index] {
                        AlignmentType::Match
                    } else {
                        AlignmentType::Substitution
                    }
                }
                (GapType::None, Predecessor::Gap(next_gap_type)) => {
                    gap_type = next_gap_type;
                    continue;
                }
                (GapType::Insertion, Predecessor::GapOpen | Predecessor::GapExtend) => {
                    AlignmentType::Insertion
                }
                (GapType::Deletion, Predecessor::GapOpen | Predecessor::GapExtend) => {
                    AlignmentType::Deletion
                }
                (gap_type, predecessor) => unreachable!(
                    "Unreachable traceback transition at {index:?} in state {gap_type:?} via {predecessor:?}"
                ),
            };

            alignment.push(alignment_type);
            index = index.predecessor(alignment_type);
            if predecessor == Predecessor::GapOpen {
                gap_type = GapType::None;
            }
        }

        alignment.reverse();
        AlignmentResult::new(
            score,
            alignment,
            seq1,
            seq2,
            0..end.seq1_index,
            0..end.seq2_index,
        )
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self {
            score: Score::MIN,
            predecessor: Predecessor::None,
        }
    }
}
