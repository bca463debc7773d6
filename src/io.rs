use crate::model::{Person, Role, UnavailableDate, UnavailableDay, DEFAULT_REASON};
use anyhow::{bail, Context};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use std::path::Path;

/// Import de membres depuis CSV: header `name,role[,unavailable_days][,unavailable_dates]`
///
/// - `role` : `leader`/`líder`/`lider` ou `participant`/`auxiliar`
/// - `unavailable_days` : `0:Diaconato;3` (jour 0..=6, motif optionnel)
/// - `unavailable_dates` : `2024-02-10:Viagem;2024-02-14`
pub fn import_people_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Person>> {
    let path = path.as_ref();
    let rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_people(rdr)
}

/// Même format que [`import_people_csv`], depuis n'importe quel lecteur.
pub fn read_people_csv<R: std::io::Read>(reader: R) -> anyhow::Result<Vec<Person>> {
    let rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    read_people(rdr)
}

fn read_people<R: std::io::Read>(mut rdr: csv::Reader<R>) -> anyhow::Result<Vec<Person>> {
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        let role = rec.get(1).context("missing role")?.trim();
        if name.is_empty() {
            bail!("invalid member row (empty name)");
        }
        let role = parse_role(role).with_context(|| format!("invalid role for {name}"))?;
        let mut person = Person::new(name, role);
        if let Some(days) = rec.get(2).map(str::trim).filter(|s| !s.is_empty()) {
            person.unavailable_days = parse_days(days)
                .with_context(|| format!("invalid unavailable_days for {name}"))?;
        }
        if let Some(dates) = rec.get(3).map(str::trim).filter(|s| !s.is_empty()) {
            person.unavailable_dates = parse_dates(dates)
                .with_context(|| format!("invalid unavailable_dates for {name}"))?;
        }
        out.push(person);
    }
    Ok(out)
}

fn parse_role(s: &str) -> anyhow::Result<Role> {
    match s.to_lowercase().as_str() {
        "leader" | "líder" | "lider" => Ok(Role::Leader),
        "participant" | "auxiliar" => Ok(Role::Participant),
        other => bail!("expected leader or participant, got {other:?}"),
    }
}

fn split_reason(chunk: &str) -> (&str, &str) {
    match chunk.split_once(':') {
        Some((value, reason)) if !reason.trim().is_empty() => (value.trim(), reason.trim()),
        Some((value, _)) => (value.trim(), DEFAULT_REASON),
        None => (chunk.trim(), DEFAULT_REASON),
    }
}

fn parse_days(raw: &str) -> anyhow::Result<Vec<UnavailableDay>> {
    raw.split(';')
        .filter(|chunk| !chunk.trim().is_empty())
        .map(|chunk| -> anyhow::Result<UnavailableDay> {
            let (day, reason) = split_reason(chunk);
            let day: u8 = day
                .parse()
                .with_context(|| format!("invalid weekday: {day}"))?;
            Ok(UnavailableDay::new(day, reason)?)
        })
        .collect()
}

fn parse_dates(raw: &str) -> anyhow::Result<Vec<UnavailableDate>> {
    raw.split(';')
        .filter(|chunk| !chunk.trim().is_empty())
        .map(|chunk| -> anyhow::Result<UnavailableDate> {
            let (date, reason) = split_reason(chunk);
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .with_context(|| format!("invalid date: {date}"))?;
            Ok(UnavailableDate {
                date,
                reason: reason.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_roles_and_unavailability() {
        let data = "name,role,unavailable_days,unavailable_dates\n\
                    Marcos,líder,3:Diaconato;0,\n\
                    Milena,auxiliar,,2024-02-10:Viagem\n";
        let people = read_people_csv(data.as_bytes()).unwrap();
        assert_eq!(people.len(), 2);

        assert_eq!(people[0].role, Role::Leader);
        assert_eq!(people[0].unavailable_days.len(), 2);
        assert_eq!(people[0].unavailable_days[0].reason, "Diaconato");
        assert_eq!(people[0].unavailable_days[1].reason, DEFAULT_REASON);

        assert_eq!(people[1].role, Role::Participant);
        assert_eq!(
            people[1].unavailable_dates[0].date,
            NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()
        );
    }

    #[test]
    fn short_rows_are_accepted() {
        let people = read_people_csv("name,role\nAna,leader\n".as_bytes()).unwrap();
        assert_eq!(people[0].name, "Ana");
        assert!(people[0].unavailable_days.is_empty());
    }

    #[test]
    fn rejects_bad_weekday_and_role() {
        assert!(read_people_csv("name,role,unavailable_days\nAna,leader,9\n".as_bytes()).is_err());
        assert!(read_people_csv("name,role\nAna,boss\n".as_bytes()).is_err());
    }
}
