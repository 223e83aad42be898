use crate::{
    alignment_result::{AlignmentType, alignment::Alignment},
    error::{Error, Result},
    score::Score,
};

/// Scores a column of two real symbols.
///
/// Penalties are stored as non-negative magnitudes and subtracted when scoring.
pub trait ScoringScheme {
    fn match_reward(&self) -> i64;

    fn mismatch_penalty(&self) -> i64;

    /// The largest score magnitude a single alignment column can contribute.
    fn max_column_magnitude(&self) -> i64;

    fn substitution<Symbol: Eq>(&self, a: Symbol, b: Symbol) -> Score {
        if a == b {
            self.match_reward().into()
        } else {
            -Score::from(self.mismatch_penalty())
        }
    }

    /// Fails if aligning sequences of the given lengths could leave the score range.
    fn check_score_range(&self, seq1_length: usize, seq2_length: usize) -> Result<()> {
        let overflow = Error::ScoreOverflow {
            seq1_length,
            seq2_length,
        };

        let columns = seq1_length
            .checked_add(seq2_length)
            .and_then(|columns| columns.checked_add(1))
            .and_then(|columns| i64::try_from(columns).ok())
            .ok_or_else(|| overflow.clone())?;
        match columns.checked_mul(self.max_column_magnitude()) {
            Some(bound) if bound <= i64::MAX / 2 => Ok(()),
            _ => Err(overflow),
        }
    }
}

/// Scoring for global alignments with affine gap costs.
///
/// A gap run of length `k` costs `gap_open + k * gap_extend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffineScoring {
    match_reward: i64,
    mismatch_penalty: i64,
    gap_open: i64,
    gap_extend: i64,
}

/// Scoring for local alignments with linear gap costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearScoring {
    match_reward: i64,
    mismatch_penalty: i64,
    indel_penalty: i64,
}

impl AffineScoring {
    pub fn new(
        match_reward: i64,
        mismatch_penalty: i64,
        gap_open: i64,
        gap_extend: i64,
    ) -> Result<Self> {
        check_positive("match_reward", match_reward)?;
        check_non_negative("mismatch_penalty", mismatch_penalty)?;
        check_non_negative("gap_open", gap_open)?;
        check_non_negative("gap_extend", gap_extend)?;
        if gap_open.checked_add(gap_extend).is_none() {
            return Err(Error::InvalidConfig {
                parameter: "gap_open + gap_extend",
                constraint: "representable as a 64-bit integer",
                value: gap_open,
            });
        }

        Ok(Self {
            match_reward,
            mismatch_penalty,
            gap_open,
            gap_extend,
        })
    }

    pub fn gap_open(&self) -> i64 {
        self.gap_open
    }

    pub fn gap_extend(&self) -> i64 {
        self.gap_extend
    }

    /// The cost of the first character of a gap run.
    pub fn gap_open_extend(&self) -> Score {
        (self.gap_open + self.gap_extend).into()
    }

    /// Recomputes the score of an alignment, charging each maximal gap run separately.
    pub fn score_alignment(&self, alignment: &Alignment) -> Score {
        alignment
            .iter_compact()
            .map(|&(multiplicity, alignment_type)| {
                let multiplicity = multiplicity as i64;
                match alignment_type {
                    AlignmentType::Match => Score::from(multiplicity * self.match_reward),
                    AlignmentType::Substitution => {
                        -Score::from(multiplicity * self.mismatch_penalty)
                    }
                    AlignmentType::Insertion | AlignmentType::Deletion => {
                        -Score::from(self.gap_open + multiplicity * self.gap_extend)
                    }
                }
            })
            .sum()
    }
}

impl LinearScoring {
    pub fn new(match_reward: i64, mismatch_penalty: i64, indel_penalty: i64) -> Result<Self> {
        check_positive("match_reward", match_reward)?;
        check_non_negative("mismatch_penalty", mismatch_penalty)?;
        check_non_negative("indel_penalty", indel_penalty)?;

        Ok(Self {
            match_reward,
            mismatch_penalty,
            indel_penalty,
        })
    }

    pub fn indel_penalty(&self) -> i64 {
        self.indel_penalty
    }

    /// Recomputes the score of an alignment, charging every gap column separately.
    pub fn score_alignment(&self, alignment: &Alignment) -> Score {
        alignment
            .iter_compact()
            .map(|&(multiplicity, alignment_type)| {
                let multiplicity = multiplicity as i64;
                match alignment_type {
                    AlignmentType::Match => Score::from(multiplicity * self.match_reward),
                    AlignmentType::Substitution => {
                        -Score::from(multiplicity * self.mismatch_penalty)
                    }
                    AlignmentType::Insertion | AlignmentType::Deletion => {
                        -Score::from(multiplicity * self.indel_penalty)
                    }
                }
            })
            .sum()
    }
}

impl ScoringScheme for AffineScoring {
    fn match_reward(&self) -> i64 {
        self.match_reward
    }

    fn mismatch_penalty(&self) -> i64 {
        self.mismatch_penalty
    }

    fn max_column_magnitude(&self) -> i64 {
        self.match_reward
            .max(self.mismatch_penalty)
            .max(self.gap_open + self.gap_extend)
    }
}

impl ScoringScheme for LinearScoring {
    fn match_reward(&self) -> i64 {
        self.match_reward
    }

    fn mismatch_penalty(&self) -> i64 {
        self.mismatch_penalty
    }

    fn max_column_magnitude(&self) -> i64 {
        self.match_reward
            .max(self.mismatch_penalty)
            .max(self.indel_penalty)
    }
}

impl Default for AffineScoring {
    fn default() -> Self {
        Self {
            match_reward: 1,
            mismatch_penalty: 1,
            gap_open: 2,
            gap_extend: 1,
        }
    }
}

impl Default for LinearScoring {
    fn default() -> Self {
        Self {
            match_reward: 1,
            mismatch_penalty: 1,
            indel_penalty: 1,
        }
    }
}

fn check_positive(parameter: &'static str, value: i64) -> Result<()> {
    if value > 0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig {
            parameter,
            constraint: "positive",
            value,
        })
    }
}

fn check_non_negative(parameter: &'static str, value: i64) -> Result<()> {
    if value >= 0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig {
            parameter,
            constraint: "non-negative",
            value,
        })
    }
}
