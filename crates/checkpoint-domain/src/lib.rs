//! Case domain types shared across the checkpoint suite
//!
//! This crate provides the canonical models for alcohol-checkpoint cases:
//! - CaseRecord: a detention case with its required fields plus an
//!   extension table for department-specific attributes
//! - CaseStage: the department currently holding the case
//! - Validation: field checks run before a case is registered

pub mod case;
pub mod stage;
pub mod validation;

pub use case::*;
pub use stage::*;
pub use validation::*;
