use super::conflicts;
use crate::model::Person;
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;

/// File de rotation d'un même rôle : le dernier choisi repasse en queue.
#[derive(Debug)]
pub(super) struct RotationQueue<'a> {
    queue: VecDeque<&'a Person>,
}

#[derive(Debug, Clone, Copy)]
pub(super) struct Pick<'a> {
    pub person: &'a Person,
    /// Personne prise en tête de file faute de candidat disponible.
    pub forced: bool,
}

impl<'a> RotationQueue<'a> {
    /// Mélange Fisher–Yates du pool, puis file FIFO.
    pub fn shuffled<R: Rng + ?Sized>(mut pool: Vec<&'a Person>, rng: &mut R) -> Self {
        pool.shuffle(rng);
        Self { queue: pool.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Premier candidat disponible à `date`, sinon la tête de file.
    /// Le candidat retenu passe en fin de file.
    pub fn next_for(&mut self, date: NaiveDate) -> Option<Pick<'a>> {
        let (idx, forced) = match self
            .queue
            .iter()
            .position(|p| conflicts::is_available(p, date))
        {
            Some(idx) => (idx, false),
            None => (0, true),
        };
        let person = self.queue.remove(idx)?;
        self.queue.push_back(person);
        Some(Pick { person, forced })
    }
}
