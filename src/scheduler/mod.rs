mod assignment;
mod conflicts;
mod rotation;
mod types;

pub use conflicts::{conflict_for, conflict_reason};
pub use types::{AssignOptions, Conflict, ConflictKind, SchedError};

use crate::calendar;
use crate::model::{Assignment, MonthlySchedule, Person, Roster};
use chrono::NaiveDate;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// Assigne un leader (et un auxiliaire s'il y en a) à chaque jour, dans l'ordre.
///
/// Les deux pools sont mélangés avec `rng` puis tournent indépendamment :
/// chacun sert une fois avant toute répétition, sauf repli forcé quand
/// personne n'est disponible. Échoue uniquement si aucun leader n'existe.
pub fn assign_rotation<R: Rng + ?Sized>(
    days: &[NaiveDate],
    people: &[Person],
    rng: &mut R,
) -> Result<Vec<Assignment>, SchedError> {
    assignment::assign_rotation(days, people, rng)
}

/// Génère les affectations du mois `month` (0..=11).
pub fn generate_schedule(
    month: u32,
    year: i32,
    people: &[Person],
    opts: AssignOptions,
) -> Result<MonthlySchedule, SchedError> {
    let days = calendar::service_days_with(opts.pattern, month, year)?;
    let mut rng = match opts.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let assignments = assign_rotation(&days, people, &mut rng)?;

    let schedule = MonthlySchedule {
        month,
        year,
        assignments,
    };
    info!(
        month,
        year,
        days = schedule.assignments.len(),
        conflicts = schedule.conflict_count(),
        "schedule generated"
    );
    Ok(schedule)
}

/// Détecte les conflits d'un planning existant vis-à-vis du roster courant.
pub fn detect_conflicts(schedule: &MonthlySchedule, roster: &Roster) -> Vec<Conflict> {
    conflicts::detect_conflicts(&schedule.assignments, roster)
}
