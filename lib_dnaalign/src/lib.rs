pub mod alignment_matrix;
pub mod alignment_result;
pub mod error;
pub mod global_aligner;
pub mod io;
pub mod local_aligner;
pub mod score;
pub mod scoring;

pub use global_aligner::align_global;
pub use local_aligner::align_local;
