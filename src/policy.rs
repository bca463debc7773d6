use crate::model::{Role, Roster};
use crate::scheduler::SchedError;

/// Effectif minimal exigé avant de générer une escala.
///
/// Le moteur n'exige qu'un leader ; cette règle relève de l'organisation
/// (par défaut 6 leaders et 4 auxiliaires).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadcountPolicy {
    pub min_leaders: usize,
    pub min_participants: usize,
}

impl Default for HeadcountPolicy {
    fn default() -> Self {
        Self {
            min_leaders: 6,
            min_participants: 4,
        }
    }
}

impl HeadcountPolicy {
    pub fn check(&self, roster: &Roster) -> Result<(), SchedError> {
        let leaders = roster.count(Role::Leader);
        let participants = roster.count(Role::Participant);
        if leaders < self.min_leaders || participants < self.min_participants {
            return Err(SchedError::Headcount {
                leaders,
                participants,
                min_leaders: self.min_leaders,
                min_participants: self.min_participants,
            });
        }
        Ok(())
    }
}
