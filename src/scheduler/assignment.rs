use super::rotation::{Pick, RotationQueue};
use super::{conflicts, types::SchedError, Conflict};
use crate::model::{Assignment, Person, Role};
use chrono::NaiveDate;
use rand::Rng;
use tracing::{debug, warn};

pub(super) fn assign_rotation<R: Rng + ?Sized>(
    days: &[NaiveDate],
    people: &[Person],
    rng: &mut R,
) -> Result<Vec<Assignment>, SchedError> {
    let (leaders, participants): (Vec<&Person>, Vec<&Person>) =
        people.iter().partition(|p| p.role == Role::Leader);
    if leaders.is_empty() {
        return Err(SchedError::NoLeaders);
    }

    let mut leader_queue = RotationQueue::shuffled(leaders, &mut *rng);
    let mut participant_queue = RotationQueue::shuffled(participants, &mut *rng);
    let mut out = Vec::with_capacity(days.len());

    for &date in days {
        let leader = leader_queue.next_for(date).ok_or(SchedError::NoLeaders)?;
        // Sans auxiliaire, le mois est couvert par les leaders seuls.
        let participant = if participant_queue.is_empty() {
            None
        } else {
            participant_queue.next_for(date)
        };

        for pick in std::iter::once(leader).chain(participant) {
            log_pick(pick, date);
        }

        // Revérifie le choix final : le repli forcé peut avoir retenu une personne indisponible.
        let found: Vec<Conflict> = std::iter::once(leader.person)
            .chain(participant.map(|p| p.person))
            .filter_map(|p| conflicts::conflict_for(p, date))
            .collect();

        let mut covered_by = vec![leader.person.id.clone()];
        covered_by.extend(participant.map(|p| p.person.id.clone()));

        out.push(Assignment {
            date,
            covered_by,
            has_conflict: !found.is_empty(),
            conflict_reason: conflicts::conflict_reason(&found),
        });
    }

    Ok(out)
}

fn log_pick(pick: Pick<'_>, date: NaiveDate) {
    if pick.forced {
        warn!(
            %date,
            person = %pick.person.name,
            role = pick.person.role.label(),
            "nobody available, forced fallback"
        );
    } else {
        debug!(%date, person = %pick.person.name, role = pick.person.role.label(), "picked");
    }
}
