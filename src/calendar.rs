//! Calcul des jours de service d'un mois.
//!
//! Les mois sont indexés à partir de 0 (janvier = 0, décembre = 11).

use crate::scheduler::SchedError;
use chrono::{Datelike, NaiveDate, Weekday};

/// Jours de semaine couverts par l'équipe. Par défaut : dimanche, mercredi, samedi.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServicePattern {
    days: [bool; 7],
}

impl Default for ServicePattern {
    fn default() -> Self {
        Self::from_weekdays(&[Weekday::Sun, Weekday::Wed, Weekday::Sat])
    }
}

impl ServicePattern {
    pub fn from_weekdays(weekdays: &[Weekday]) -> Self {
        let mut days = [false; 7];
        for wd in weekdays {
            days[wd.num_days_from_sunday() as usize] = true;
        }
        Self { days }
    }

    pub fn includes(&self, date: NaiveDate) -> bool {
        self.days[date.weekday().num_days_from_sunday() as usize]
    }
}

/// Toutes les dates du mois, dans l'ordre.
pub fn month_dates(month: u32, year: i32) -> Result<Vec<NaiveDate>, SchedError> {
    if month > 11 {
        return Err(SchedError::InvalidMonth { month, year });
    }
    let first = NaiveDate::from_ymd_opt(year, month + 1, 1)
        .ok_or(SchedError::InvalidMonth { month, year })?;
    Ok(first
        .iter_days()
        .take_while(|d| d.month() == first.month())
        .collect())
}

/// Jours de service du mois selon le motif par défaut.
pub fn service_days(month: u32, year: i32) -> Result<Vec<NaiveDate>, SchedError> {
    service_days_with(ServicePattern::default(), month, year)
}

pub fn service_days_with(
    pattern: ServicePattern,
    month: u32,
    year: i32,
) -> Result<Vec<NaiveDate>, SchedError> {
    let mut days = month_dates(month, year)?;
    days.retain(|d| pattern.includes(*d));
    Ok(days)
}
