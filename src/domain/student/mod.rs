//! Student domain
//!
//! Profile snapshots and the directory trait used to look them up.

mod directory;
mod entity;

pub use directory::UserDirectory;
pub use entity::{
    FeeStructure, Payment, SemesterResult, StudentId, StudentProfile, UnitResult,
};

#[cfg(test)]
pub use directory::MockUserDirectory;
