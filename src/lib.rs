#![forbid(unsafe_code)]
//! Escala — génération de l'escala mensuelle de l'équipe de son (sans BD).
//!
//! - Jours de service : dimanche, mercredi, samedi.
//! - Rotation round-robin indépendante des leaders et des auxiliaires.
//! - Indisponibilités récurrentes (jour de semaine) ou ponctuelles (date).
//! - Repli forcé signalé en ligne (`has_conflict`), jamais en erreur.
//! - Stockage fichier (JSON) ; import CSV des membres.

pub mod calendar;
pub mod display;
pub mod io;
pub mod model;
pub mod policy;
pub mod scheduler;
pub mod storage;

pub use calendar::{month_dates, service_days, service_days_with, ServicePattern};
pub use display::{GridRenderer, ListRenderer, ScheduleRenderer};
pub use model::{
    Assignment, MonthlySchedule, Person, PersonId, Role, Roster, UnavailableDate, UnavailableDay,
};
pub use policy::HeadcountPolicy;
pub use scheduler::{
    assign_rotation, detect_conflicts, generate_schedule, AssignOptions, Conflict, ConflictKind,
    SchedError,
};
pub use storage::{JsonStorage, Storage};
