use super::{Conflict, ConflictKind};
use crate::model::{Assignment, Person, Roster};
use chrono::NaiveDate;

/// Conflit de `person` à `date`. Le motif ponctuel prime sur le récurrent.
pub fn conflict_for(person: &Person, date: NaiveDate) -> Option<Conflict> {
    let (kind, reason) = if let Some(d) = person.unavailable_dates.iter().find(|d| d.matches(date)) {
        (ConflictKind::Specific, &d.reason)
    } else {
        let d = person.unavailable_days.iter().find(|d| d.matches(date))?;
        (ConflictKind::Recurring, &d.reason)
    };
    Some(Conflict {
        person: person.id.clone(),
        role: person.role,
        kind,
        reason: reason.clone(),
    })
}

pub(super) fn is_available(person: &Person, date: NaiveDate) -> bool {
    !person.unavailable_days.iter().any(|d| d.matches(date))
        && !person.unavailable_dates.iter().any(|d| d.matches(date))
}

/// Concatène les fragments dans l'ordre donné (leader puis auxiliaire).
pub fn conflict_reason(conflicts: &[Conflict]) -> Option<String> {
    if conflicts.is_empty() {
        return None;
    }
    let parts: Vec<String> = conflicts.iter().map(Conflict::describe).collect();
    Some(parts.join(", "))
}

/// Revérifie des affectations contre l'état courant du roster
/// (par ex. après l'ajout d'une indisponibilité).
pub(super) fn detect_conflicts(assignments: &[Assignment], roster: &Roster) -> Vec<Conflict> {
    assignments
        .iter()
        .flat_map(|a| {
            a.covered_by
                .iter()
                .filter_map(move |id| roster.find_person_by_id(id))
                .filter_map(move |p| conflict_for(p, a.date))
        })
        .collect()
}
