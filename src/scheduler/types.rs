use crate::calendar::ServicePattern;
use crate::model::{PersonId, Role};
use thiserror::Error;

/// Options d'assignation
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignOptions {
    /// Graine du mélange initial ; `None` = entropie du système.
    pub seed: Option<u64>,
    pub pattern: ServicePattern,
}

impl AssignOptions {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    Recurring,
    Specific,
}

/// Indisponibilité d'une personne affectée à une date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub person: PersonId,
    pub role: Role,
    pub kind: ConflictKind,
    pub reason: String,
}

impl Conflict {
    /// Fragment `"<Rôle>: <motif>"`.
    pub fn describe(&self) -> String {
        format!("{}: {}", self.role.label(), self.reason)
    }
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("no leaders available: at least one leader is required")]
    NoLeaders,
    #[error("invalid month {month} for year {year} (expected 0..=11)")]
    InvalidMonth { month: u32, year: i32 },
    #[error("invalid weekday {0} (expected 0..=6, 0 = Sunday)")]
    InvalidWeekday(u8),
    #[error("unknown person: {0}")]
    UnknownPerson(String),
    #[error("member already exists: {0}")]
    DuplicateMember(String),
    #[error(
        "not enough members: need at least {min_leaders} leaders and {min_participants} participants (have {leaders} and {participants})"
    )]
    Headcount {
        leaders: usize,
        participants: usize,
        min_leaders: usize,
        min_participants: usize,
    },
}
