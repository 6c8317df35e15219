//! Workflow stage of a case

use serde::{Deserialize, Serialize};

/// Department currently responsible for a case.
///
/// Cases move forward only: Comptroller → Traffic → PublicSecurity → Courts → Closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStage {
    #[default]
    Comptroller,
    Traffic,
    PublicSecurity,
    Courts,
    Closed,
}

impl CaseStage {
    /// The stage a case moves to once the current department signs off.
    /// Returns `None` for closed cases.
    pub fn next(self) -> Option<CaseStage> {
        match self {
            CaseStage::Comptroller => Some(CaseStage::Traffic),
            CaseStage::Traffic => Some(CaseStage::PublicSecurity),
            CaseStage::PublicSecurity => Some(CaseStage::Courts),
            CaseStage::Courts => Some(CaseStage::Closed),
            CaseStage::Closed => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CaseStage::Comptroller => "Comptroller's Office",
            CaseStage::Traffic => "Traffic and Roadway",
            CaseStage::PublicSecurity => "Public Security",
            CaseStage::Courts => "Courts",
            CaseStage::Closed => "Closed",
        }
    }

    pub fn is_closed(self) -> bool {
        matches!(self, CaseStage::Closed)
    }
}
