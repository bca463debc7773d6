//! Rendu texte d'une escala (liste ou grille mensuelle).

use crate::calendar;
use crate::model::{weekday_index, Assignment, MonthlySchedule, Roster};
use chrono::Datelike;

/// Abréviations des jours, dimanche en premier.
pub const WEEK_DAYS: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

/// Permet de customiser le rendu (terminal, page, etc.).
pub trait ScheduleRenderer {
    fn render(&self, schedule: &MonthlySchedule, roster: &Roster) -> String;
}

/// Une ligne par jour de service : `2024-02-03 Sáb | Ana + Rui | ! Líder: Viagem`
#[derive(Debug, Default, Clone, Copy)]
pub struct ListRenderer;

impl ScheduleRenderer for ListRenderer {
    fn render(&self, schedule: &MonthlySchedule, roster: &Roster) -> String {
        if schedule.assignments.is_empty() {
            return "Nenhuma escala gerada.\n".to_string();
        }
        let mut out = String::new();
        for a in &schedule.assignments {
            out.push_str(&format!(
                "{} {} | {}",
                a.date,
                WEEK_DAYS[weekday_index(a.date) as usize],
                team_names(a, roster)
            ));
            if let Some(reason) = &a.conflict_reason {
                out.push_str(&format!(" | ! {reason}"));
            }
            out.push('\n');
        }
        out
    }
}

/// Grille du mois : `*` jour couvert, `!` jour couvert avec conflit.
#[derive(Debug, Default, Clone, Copy)]
pub struct GridRenderer;

impl ScheduleRenderer for GridRenderer {
    fn render(&self, schedule: &MonthlySchedule, _roster: &Roster) -> String {
        let dates = calendar::month_dates(schedule.month, schedule.year).unwrap_or_default();
        let Some(first) = dates.first() else {
            return String::new();
        };

        let header: String = WEEK_DAYS.iter().map(|d| format!("{d:>3} ")).collect();
        let mut out = format!("{}\n", header.trim_end());
        let mut line = "    ".repeat(weekday_index(*first) as usize);

        for date in &dates {
            let mark = match schedule.assignments.iter().find(|a| a.date == *date) {
                Some(a) if a.has_conflict => '!',
                Some(_) => '*',
                None => ' ',
            };
            line.push_str(&format!("{:>3}{}", date.day(), mark));
            if weekday_index(*date) == 6 {
                out.push_str(line.trim_end());
                out.push('\n');
                line.clear();
            }
        }
        if !line.is_empty() {
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

fn team_names(assignment: &Assignment, roster: &Roster) -> String {
    let names: Vec<&str> = assignment
        .covered_by
        .iter()
        .map(|id| {
            roster
                .find_person_by_id(id)
                .map(|p| p.name.as_str())
                .unwrap_or("?")
        })
        .collect();
    names.join(" + ")
}
