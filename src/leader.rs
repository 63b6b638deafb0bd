//! Leader repair pass.
//!
//! Moves one leader from a donor team (more than one leader) into each
//! leaderless team, in exchange for one of its non-leaders. The donor list is
//! computed once, before any swap, and is not re-validated between swaps: a
//! donor drained down to a single leader can still give that one away to a
//! later leaderless team.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::action::Index;
use crate::model::entity::Skill;
use crate::model::group::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderSwap {
    pub donor: Index,
    pub recipient: Index,
}

/// Outcome of one repair pass. Team indices are positions in the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderReport {
    pub swaps: Vec<LeaderSwap>,
    pub unfixed: Vec<Index>,
}

impl LeaderReport {
    pub fn all_led(&self) -> bool {
        self.unfixed.is_empty()
    }
}

/// Ensures every team has a leader where a donor allows it. Teams that cannot
/// be fixed keep `has_leader == false` and are listed in the report.
pub fn ensure_leader(table: &mut Table, threshold: Skill) -> LeaderReport {
    let mut report = LeaderReport::default();
    if table.is_empty() {
        return report;
    }

    for team in table.teams.iter_mut() {
        team.has_leader = team.members.iter().any(|m| m.is_leader(threshold));
    }

    let missing: Vec<Index> = table
        .teams
        .iter()
        .enumerate()
        .filter(|(_, t)| !t.has_leader)
        .map(|(i, _)| i)
        .collect();
    if missing.is_empty() {
        info!("all teams already have a leader");
        return report;
    }

    let donors: Vec<Index> = table
        .teams
        .iter()
        .enumerate()
        .filter(|(_, t)| t.leader_count(threshold) > 1)
        .map(|(i, _)| i)
        .collect();

    for &recipient in &missing {
        let mut fixed = false;
        for &donor in &donors {
            if donor == recipient {
                continue;
            }
            let Some(leader_pos) = table.teams[donor].members.iter().position(|m| m.is_leader(threshold)) else {
                continue;
            };
            let Some(follower_pos) = table.teams[recipient].members.iter().position(|m| !m.is_leader(threshold)) else {
                continue;
            };

            let (low, high, low_pos, high_pos) = if donor < recipient {
                (donor, recipient, leader_pos, follower_pos)
            } else {
                (recipient, donor, follower_pos, leader_pos)
            };
            let (head, tail) = table.teams.split_at_mut(high);
            std::mem::swap(&mut head[low].members[low_pos], &mut tail[0].members[high_pos]);
            head[low].refresh(threshold);
            tail[0].refresh(threshold);

            info!(donor = donor + 1, recipient = recipient + 1, "swapped a leader between teams");
            report.swaps.push(LeaderSwap { donor, recipient });
            fixed = true;
            break;
        }

        if !fixed {
            warn!(team = recipient + 1, "could not find a leader swap, not enough donors");
            report.unfixed.push(recipient);
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entity::Student;
    use crate::model::group::Team;

    fn team(id: u32, members: &[(&str, i64, Skill)]) -> Team {
        let mut team = Team::empty(id);
        team.members = members
            .iter()
            .map(|(name, score, lead)| Student::with_score(*name, *score, *lead))
            .collect();
        team.recomputed(7)
    }

    #[test]
    fn donor_gives_one_leader_to_leaderless_team() {
        let mut table = Table::new(vec![
            team(1, &[("l1", 10, 9), ("l2", 8, 7), ("f1", 5, 1)]),
            team(2, &[("f2", 6, 2), ("f3", 4, 3)]),
        ]);
        let report = ensure_leader(&mut table, 7);

        assert_eq!(report.swaps, vec![LeaderSwap { donor: 0, recipient: 1 }]);
        assert!(report.all_led());
        assert_eq!(table.teams[0].leader_count(7), 1);
        assert_eq!(table.teams[1].leader_count(7), 1);
        // first leader of the donor replaces first non-leader of the recipient
        assert_eq!(table.teams[1].members[0].name, "l1");
        assert_eq!(table.teams[0].members[0].name, "f2");
        assert_eq!(table.totals(), vec![19, 14]);
        assert!(table.teams.iter().all(|t| t.is_consistent(7)));
    }

    #[test]
    fn stale_flags_are_recomputed_first() {
        let mut table = Table::new(vec![team(1, &[("l", 10, 9)]), team(2, &[("f", 3, 1)])]);
        table.teams[0].has_leader = false;
        table.teams[1].has_leader = true;
        let report = ensure_leader(&mut table, 7);

        assert!(table.teams[0].has_leader);
        assert!(!table.teams[1].has_leader);
        assert_eq!(report.unfixed, vec![1]);
        assert!(report.swaps.is_empty());
    }

    #[test]
    fn drained_donor_is_reused_for_a_later_team() {
        let mut table = Table::new(vec![
            team(1, &[("l1", 10, 9), ("l2", 9, 8)]),
            team(2, &[("f1", 5, 1)]),
            team(3, &[("f2", 4, 2)]),
        ]);
        let report = ensure_leader(&mut table, 7);

        assert_eq!(
            report.swaps,
            vec![LeaderSwap { donor: 0, recipient: 1 }, LeaderSwap { donor: 0, recipient: 2 }]
        );
        assert!(report.all_led());
        // the donor ends up without any leader
        assert!(!table.teams[0].has_leader);
        assert!(table.teams[1].has_leader);
        assert!(table.teams[2].has_leader);
        assert!(table.teams.iter().all(|t| t.is_consistent(7)));
    }

    #[test]
    fn no_donor_leaves_team_leaderless() {
        let mut table = Table::new(vec![
            team(1, &[("l1", 10, 9), ("f1", 2, 0)]),
            team(2, &[("f2", 6, 2)]),
        ]);
        let before = table.clone();
        let report = ensure_leader(&mut table, 7);

        assert_eq!(report.unfixed, vec![1]);
        assert!(!report.all_led());
        assert_eq!(table, before);
    }

    #[test]
    fn empty_recipient_cannot_be_fixed() {
        let mut table = Table::new(vec![team(1, &[("l1", 10, 9), ("l2", 9, 8)]), team(2, &[])]);
        let report = ensure_leader(&mut table, 7);
        assert_eq!(report.unfixed, vec![1]);
        assert_eq!(table.teams[0].leader_count(7), 2);
    }

    #[test]
    fn second_pass_makes_no_swaps() {
        let mut table = Table::new(vec![
            team(1, &[("l1", 10, 9), ("l2", 8, 7), ("l3", 7, 7)]),
            team(2, &[("f2", 6, 2), ("f3", 4, 3)]),
            team(3, &[("f4", 5, 0)]),
        ]);
        ensure_leader(&mut table, 7);
        let after_first = table.clone();
        let report = ensure_leader(&mut table, 7);

        assert!(report.swaps.is_empty());
        assert_eq!(table, after_first);
    }

    #[test]
    fn drained_donor_can_be_refilled_by_a_second_pass() {
        let mut table = Table::new(vec![
            team(1, &[("a1", 9, 9), ("a2", 9, 9)]),
            team(2, &[("b1", 9, 9), ("b2", 9, 9), ("b3", 9, 9)]),
            team(3, &[("c1", 1, 0)]),
            team(4, &[("d1", 1, 0)]),
        ]);
        let first = ensure_leader(&mut table, 7);
        assert_eq!(
            first.swaps,
            vec![LeaderSwap { donor: 0, recipient: 2 }, LeaderSwap { donor: 0, recipient: 3 }]
        );
        assert!(!table.teams[0].has_leader);

        let second = ensure_leader(&mut table, 7);
        assert_eq!(second.swaps, vec![LeaderSwap { donor: 1, recipient: 0 }]);
        assert!(table.all_led());
    }

    #[test]
    fn donor_later_in_table_feeds_earlier_team() {
        let mut table = Table::new(vec![
            team(1, &[("f1", 5, 1)]),
            team(2, &[("l1", 10, 9), ("l2", 9, 8)]),
        ]);
        let report = ensure_leader(&mut table, 7);
        assert_eq!(report.swaps, vec![LeaderSwap { donor: 1, recipient: 0 }]);
        assert_eq!(table.teams[0].members[0].name, "l1");
        assert_eq!(table.teams[1].members[0].name, "f1");
    }

    #[test]
    fn empty_table_is_noop() {
        let mut table = Table::default();
        assert_eq!(ensure_leader(&mut table, 7), LeaderReport::default());
    }
}
