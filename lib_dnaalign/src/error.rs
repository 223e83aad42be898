use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid scoring configuration: {parameter} must be {constraint}, but is {value}.")]
    InvalidConfig {
        parameter: &'static str,
        constraint: &'static str,
        value: i64,
    },

    #[error("Invalid input: {0}.")]
    InvalidInput(String),

    #[error(
        "Aligning sequences of lengths {seq1_length} and {seq2_length} may overflow the score range under the given scoring."
    )]
    ScoreOverflow {
        seq1_length: usize,
        seq2_length: usize,
    },
}
