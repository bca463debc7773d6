#![forbid(unsafe_code)]
use chrono::{Datelike, NaiveDate, Weekday};
use escala::{assign_rotation, service_days, Person, PersonId};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SERVICE_WEEKDAYS: [Weekday; 3] = [Weekday::Sun, Weekday::Wed, Weekday::Sat];

fn roster(leaders: usize, participants: usize) -> Vec<Person> {
    (0..leaders)
        .map(|i| Person::leader(format!("L{i}")))
        .chain((0..participants).map(|i| Person::participant(format!("P{i}"))))
        .collect()
}

/// Chaque membre reçoit un sous-ensemble des jours de service (masque 3 bits)
/// et éventuellement une date ponctuelle du mois.
fn with_unavailability(mut people: Vec<Person>, masks: &[(u8, Option<u32>)]) -> Vec<Person> {
    for (p, (mask, day)) in people.iter_mut().zip(masks) {
        for (bit, wd) in SERVICE_WEEKDAYS.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                *p = p.clone().busy_every(*wd, format!("rec-{bit}"));
            }
        }
        if let Some(day) = day {
            let date = NaiveDate::from_ymd_opt(2024, 2, *day).unwrap();
            *p = p.clone().busy_on(date, "one-off");
        }
    }
    people
}

fn unavailable(p: &Person, date: NaiveDate) -> bool {
    let weekday = date.weekday().num_days_from_sunday() as u8;
    p.unavailable_days.iter().any(|u| u.day_of_week == weekday)
        || p.unavailable_dates.iter().any(|u| u.date == date)
}

fn find<'a>(people: &'a [Person], id: &PersonId) -> &'a Person {
    people.iter().find(|p| &p.id == id).unwrap()
}

proptest! {
    #[test]
    fn service_days_are_ordered_and_on_service_weekdays(month in 0u32..12, year in 1900i32..2200) {
        let days = service_days(month, year).unwrap();
        prop_assert!(!days.is_empty());
        prop_assert!(days.windows(2).all(|w| w[0] < w[1]));
        for day in &days {
            prop_assert_eq!(day.month0(), month);
            prop_assert!([0, 3, 6].contains(&day.weekday().num_days_from_sunday()));
        }
        prop_assert_eq!(service_days(month, year).unwrap(), days);
    }

    #[test]
    fn one_assignment_per_day_with_round_robin(
        leaders in 1usize..8,
        participants in 0usize..6,
        month in 0u32..12,
        seed in any::<u64>(),
    ) {
        let people = roster(leaders, participants);
        let days = service_days(month, 2024).unwrap();
        let out = assign_rotation(&days, &people, &mut ChaCha8Rng::seed_from_u64(seed)).unwrap();

        prop_assert_eq!(out.len(), days.len());
        for (a, day) in out.iter().zip(&days) {
            prop_assert_eq!(a.date, *day);
            prop_assert_eq!(a.covered_by.len(), if participants == 0 { 1 } else { 2 });
            prop_assert!(!a.has_conflict);
        }

        let opening = leaders.min(days.len());
        let mut firsts: Vec<_> = out
            .iter()
            .take(opening)
            .filter_map(|a| a.leader().cloned())
            .collect();
        firsts.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        firsts.dedup();
        prop_assert_eq!(firsts.len(), opening);

        for p in people.iter().filter(|p| p.is_leader()) {
            let served = out.iter().filter(|a| a.leader() == Some(&p.id)).count();
            prop_assert!(served >= days.len() / leaders);
        }
    }

    #[test]
    fn has_conflict_matches_selected_members(
        masks in prop::collection::vec((0u8..8, prop::option::of(1u32..29)), 8),
        leaders in 1usize..5,
        seed in any::<u64>(),
    ) {
        let people = with_unavailability(roster(leaders, 8 - leaders), &masks);
        let days = service_days(1, 2024).unwrap();
        let out = assign_rotation(&days, &people, &mut ChaCha8Rng::seed_from_u64(seed)).unwrap();

        for a in &out {
            let team: Vec<&Person> = a.covered_by.iter().map(|id| find(&people, id)).collect();
            prop_assert_eq!(a.has_conflict, team.iter().any(|p| unavailable(p, a.date)));
            prop_assert_eq!(a.has_conflict, a.conflict_reason.is_some());
        }
    }
}
