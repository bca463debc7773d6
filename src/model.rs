use crate::scheduler::SchedError;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Motif par défaut d'une indisponibilité récurrente ajoutée sans précision.
pub const DEFAULT_REASON: &str = "Ocupado";

/// Couleurs attribuées aux leaders (dans l'ordre d'ajout).
pub const LEADER_PALETTE: [&str; 8] = [
    "#6366f1", "#10b981", "#f59e0b", "#f43f5e", "#8b5cf6", "#06b6d4", "#ec4899", "#f97316",
];

/// Identifiant fort pour Person
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonId(String);

impl PersonId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Rôle dans l'équipe de son. Fixé à la création, jamais modifié par le moteur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Leader,
    Participant,
}

impl Role {
    /// Libellé affiché dans les motifs de conflit.
    pub fn label(self) -> &'static str {
        match self {
            Role::Leader => "Líder",
            Role::Participant => "Auxiliar",
        }
    }
}

/// Indice du jour de semaine, 0 = dimanche … 6 = samedi.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Indisponibilité récurrente (tous les `day_of_week`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnavailableDay {
    pub day_of_week: u8,
    pub reason: String,
}

impl UnavailableDay {
    /// Crée une indisponibilité en validant `day_of_week <= 6`.
    pub fn new<R: Into<String>>(day_of_week: u8, reason: R) -> Result<Self, SchedError> {
        if day_of_week > 6 {
            return Err(SchedError::InvalidWeekday(day_of_week));
        }
        Ok(Self {
            day_of_week,
            reason: reason.into(),
        })
    }

    pub fn matches(&self, date: NaiveDate) -> bool {
        self.day_of_week == weekday_index(date)
    }
}

/// Indisponibilité ponctuelle, pour une date précise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnavailableDate {
    pub date: NaiveDate,
    pub reason: String,
}

impl UnavailableDate {
    pub fn matches(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}

/// Membre de l'équipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unavailable_days: Vec<UnavailableDay>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unavailable_dates: Vec<UnavailableDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Person {
    pub fn new<N: Into<String>>(name: N, role: Role) -> Self {
        Self {
            id: PersonId::random(),
            name: name.into(),
            role,
            unavailable_days: Vec::new(),
            unavailable_dates: Vec::new(),
            color: None,
        }
    }

    pub fn leader<N: Into<String>>(name: N) -> Self {
        Self::new(name, Role::Leader)
    }

    pub fn participant<N: Into<String>>(name: N) -> Self {
        Self::new(name, Role::Participant)
    }

    /// Ajoute une indisponibilité récurrente (builder).
    pub fn busy_every<R: Into<String>>(mut self, weekday: Weekday, reason: R) -> Self {
        self.unavailable_days.push(UnavailableDay {
            day_of_week: weekday.num_days_from_sunday() as u8,
            reason: reason.into(),
        });
        self
    }

    /// Ajoute une indisponibilité ponctuelle (builder).
    pub fn busy_on<R: Into<String>>(mut self, date: NaiveDate, reason: R) -> Self {
        self.unavailable_dates.push(UnavailableDate {
            date,
            reason: reason.into(),
        });
        self
    }

    pub fn is_leader(&self) -> bool {
        self.role == Role::Leader
    }
}

/// Affectation d'un jour de service : le leader d'abord, puis l'auxiliaire éventuel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub date: NaiveDate,
    pub covered_by: Vec<PersonId>,
    pub has_conflict: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_reason: Option<String>,
}

impl Assignment {
    pub fn leader(&self) -> Option<&PersonId> {
        self.covered_by.first()
    }

    pub fn participant(&self) -> Option<&PersonId> {
        self.covered_by.get(1)
    }
}

/// Résultat d'une génération pour un mois (mois 0..=11).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySchedule {
    pub month: u32,
    pub year: i32,
    pub assignments: Vec<Assignment>,
}

impl MonthlySchedule {
    pub fn conflict_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.has_conflict).count()
    }
}

/// Roster complet (équipe de son)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Roster {
    #[serde(default)]
    pub people: Vec<Person>,
}

impl Roster {
    pub fn find_person_by_name<'a>(&'a self, name: &str) -> Option<&'a Person> {
        self.people.iter().find(|p| p.name == name)
    }
    pub fn find_person_by_id<'a>(&'a self, id: &PersonId) -> Option<&'a Person> {
        self.people.iter().find(|p| &p.id == id)
    }
    pub fn find_person_mut_by_id(&mut self, id: &PersonId) -> Option<&mut Person> {
        self.people.iter_mut().find(|p| &p.id == id)
    }

    pub fn count(&self, role: Role) -> usize {
        self.people.iter().filter(|p| p.role == role).count()
    }

    /// Ajoute un membre ; les leaders reçoivent une couleur de la palette.
    pub fn add_member<N: Into<String>>(&mut self, name: N, role: Role) -> PersonId {
        let mut person = Person::new(name, role);
        self.paint(&mut person);
        let id = person.id.clone();
        self.people.push(person);
        id
    }

    /// Ajoute des membres importés. Tout ou rien : un nom déjà présent
    /// (dans le roster ou dans le lot) rejette l'import entier.
    pub fn import_members(&mut self, people: Vec<Person>) -> Result<usize, SchedError> {
        for (idx, p) in people.iter().enumerate() {
            let repeated = people[..idx].iter().any(|q| q.name == p.name);
            if repeated || self.find_person_by_name(&p.name).is_some() {
                return Err(SchedError::DuplicateMember(p.name.clone()));
            }
        }
        let count = people.len();
        for mut person in people {
            if person.color.is_none() {
                self.paint(&mut person);
            }
            self.people.push(person);
        }
        Ok(count)
    }

    fn paint(&self, person: &mut Person) {
        if person.role == Role::Leader {
            let idx = self.count(Role::Leader) % LEADER_PALETTE.len();
            person.color = Some(LEADER_PALETTE[idx].to_string());
        }
    }

    pub fn remove_member(&mut self, id: &PersonId) -> Option<Person> {
        let pos = self.people.iter().position(|p| &p.id == id)?;
        Some(self.people.remove(pos))
    }

    /// Bascule l'indisponibilité récurrente d'un jour.
    /// Retourne `true` si le membre est désormais indisponible ce jour-là.
    pub fn toggle_unavailable_day(
        &mut self,
        id: &PersonId,
        day_of_week: u8,
    ) -> Result<bool, SchedError> {
        let entry = UnavailableDay::new(day_of_week, DEFAULT_REASON)?;
        let person = self.person_mut(id)?;
        if person
            .unavailable_days
            .iter()
            .any(|d| d.day_of_week == day_of_week)
        {
            person.unavailable_days.retain(|d| d.day_of_week != day_of_week);
            Ok(false)
        } else {
            person.unavailable_days.push(entry);
            Ok(true)
        }
    }

    /// Ajoute une indisponibilité ponctuelle. Une date déjà présente est ignorée (`false`).
    pub fn add_unavailable_date<R: Into<String>>(
        &mut self,
        id: &PersonId,
        date: NaiveDate,
        reason: R,
    ) -> Result<bool, SchedError> {
        let person = self.person_mut(id)?;
        if person.unavailable_dates.iter().any(|d| d.date == date) {
            return Ok(false);
        }
        person.unavailable_dates.push(UnavailableDate {
            date,
            reason: reason.into(),
        });
        Ok(true)
    }

    pub fn remove_unavailable_date(
        &mut self,
        id: &PersonId,
        date: NaiveDate,
    ) -> Result<bool, SchedError> {
        let person = self.person_mut(id)?;
        let before = person.unavailable_dates.len();
        person.unavailable_dates.retain(|d| d.date != date);
        Ok(person.unavailable_dates.len() != before)
    }

    /// Remplace l'équipe par la composition par défaut (6 leaders, 10 auxiliaires).
    pub fn reset_to_default(&mut self) {
        const LEADERS: [&str; 6] = ["Carlos", "Claudinei", "Marcos", "Tamara", "Victor", "Wales"];
        const PARTICIPANTS: [&str; 10] = [
            "Rebeca", "Joabe", "Milena", "Weverson", "Letícia", "Kalebe", "Luis", "Kauan",
            "Edmilson", "Davi",
        ];
        self.people.clear();
        for name in LEADERS {
            self.add_member(name, Role::Leader);
        }
        for name in PARTICIPANTS {
            self.add_member(name, Role::Participant);
        }
    }

    fn person_mut(&mut self, id: &PersonId) -> Result<&mut Person, SchedError> {
        self.find_person_mut_by_id(id)
            .ok_or_else(|| SchedError::UnknownPerson(id.as_str().to_string()))
    }
}
