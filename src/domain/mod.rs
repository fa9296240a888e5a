//! Core domain types for version derivation.

pub mod candidate;
pub mod describe;

pub use candidate::CandidateVersion;
pub use describe::TagDescription;
