use crate::action::Position;
use crate::metric::balance_metric;
use crate::model::condition::Metric;
use crate::model::entity::{Points, Skill};
use crate::model::group::{Table, Team};

impl Team {
    /// Leader presence if the member at `index` were replaced by someone with
    /// the given leadership. Members are rescanned positionally.
    fn leader_after_swap(&self, index: usize, incoming_leadership: Skill, threshold: Skill) -> bool {
        self.members.iter().enumerate().any(|(i, m)| {
            let leadership = if i == index { incoming_leadership } else { m.leadership() };
            leadership >= threshold
        })
    }
}

/// Snapshot of per-team totals and leader flags, taken once and reused for
/// every hypothetical swap evaluated against the same table.
pub struct TableCache<'a> {
    table: &'a Table,
    totals: Vec<Points>,
    leaders: Vec<bool>,
    threshold: Skill,
    penalty: Metric,
}

impl<'a> TableCache<'a> {
    pub fn create(table: &'a Table, threshold: Skill, penalty: Metric) -> TableCache<'a> {
        TableCache {
            table,
            totals: table.totals(),
            leaders: table.teams.iter().map(|t| t.has_leader).collect(),
            threshold,
            penalty,
        }
    }

    pub fn metric(&self) -> Metric {
        let missing = self.leaders.iter().filter(|led| !**led).count();
        balance_metric(&self.totals, missing, self.penalty)
    }

    /// Metric the table would have after exchanging the two members. Only the
    /// two touched teams are re-derived; all other teams keep their cached
    /// totals and leader flags.
    ///
    /// Callers pass positions that exist in the table.
    pub fn simulate_swap(&self, a: &Position, b: &Position) -> Metric {
        let team_a = &self.table.teams[a.group_index];
        let team_b = &self.table.teams[b.group_index];
        let member_a = &team_a.members[a.member_index];
        let member_b = &team_b.members[b.member_index];

        let mut totals = self.totals.clone();
        totals[a.group_index] = self.totals[a.group_index] - member_a.score + member_b.score;
        totals[b.group_index] = self.totals[b.group_index] - member_b.score + member_a.score;

        let missing = self
            .leaders
            .iter()
            .enumerate()
            .map(|(i, led)| {
                if i == a.group_index {
                    team_a.leader_after_swap(a.member_index, member_b.leadership(), self.threshold)
                } else if i == b.group_index {
                    team_b.leader_after_swap(b.member_index, member_a.leadership(), self.threshold)
                } else {
                    *led
                }
            })
            .filter(|led| !led)
            .count();

        balance_metric(&totals, missing, self.penalty)
    }
}
