//! Greedy team allocation.
//!
//! Highest remaining score goes to the currently lightest team, the same
//! longest-item-first rule used for load balancing across bins.

use tracing::{debug, info, warn};

use crate::action::Index;
use crate::model::entity::{Skill, Student};
use crate::model::group::{Table, Team, TeamId};

/// Index of the team with the lowest total, ties broken by smaller size,
/// then by lower index. `None` for an empty slice.
pub fn choose_best_team_index(teams: &[Team]) -> Option<Index> {
    teams
        .iter()
        .enumerate()
        .min_by_key(|(index, team)| (team.total_score, team.size, *index))
        .map(|(index, _)| index)
}

/// Index of the first student holding the strictly highest score.
fn highest_scoring(pool: &[Student]) -> Option<Index> {
    let mut best: Option<Index> = None;
    for (index, student) in pool.iter().enumerate() {
        match best {
            Some(b) if pool[b].score >= student.score => {}
            _ => best = Some(index),
        }
    }
    best
}

/// Distributes `students` over `num_teams` fresh teams with ids `1..=num_teams`.
///
/// Zero teams requested yields an empty table. An empty roster yields
/// `num_teams` empty teams.
pub fn allocate(students: &[Student], num_teams: usize, threshold: Skill) -> Table {
    if num_teams == 0 {
        warn!("number of teams must be greater than zero");
        return Table::default();
    }

    let mut teams: Vec<Team> = (1..=num_teams).map(|id| Team::empty(id as TeamId)).collect();

    if students.is_empty() {
        warn!("no students provided");
        return Table::new(teams);
    }

    let mut pool = students.to_vec();
    while let Some(best) = highest_scoring(&pool) {
        // removal order mirrors swap-with-last, which decides later ties
        let student = pool.swap_remove(best);
        let Some(team_index) = choose_best_team_index(&teams) else {
            break;
        };
        let team = &mut teams[team_index];
        debug!(name = %student.name, score = student.score, team = team.id, "assigning student");
        team.has_leader |= student.is_leader(threshold);
        team.total_score += student.score;
        team.members.push(student);
        team.size = team.members.len();
    }

    info!(teams = num_teams, students = students.len(), "team allocation finished");
    Table::new(teams)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(scores: &[i64]) -> Vec<Student> {
        scores
            .iter()
            .enumerate()
            .map(|(i, s)| Student::with_score(format!("s{i}"), *s, 0))
            .collect()
    }

    fn names(team: &Team) -> Vec<&str> {
        team.members.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn two_teams_of_four_students() {
        let students = scored(&[90, 80, 10, 5]);
        let table = allocate(&students, 2, 7);

        assert_eq!(table.len(), 2);
        assert_eq!(names(&table.teams[0]), vec!["s0", "s3"]);
        assert_eq!(names(&table.teams[1]), vec!["s1", "s2"]);
        assert_eq!(table.totals(), vec![95, 90]);
        assert_eq!(table.teams[0].id, 1);
        assert_eq!(table.teams[1].id, 2);
    }

    #[test]
    fn zero_teams_yields_empty_table() {
        let students = scored(&[3, 2, 1]);
        let table = allocate(&students, 0, 7);
        assert!(table.is_empty());
        assert_eq!(students.len(), 3);
    }

    #[test]
    fn empty_roster_yields_empty_teams() {
        let table = allocate(&[], 3, 7);
        assert_eq!(table.len(), 3);
        assert!(table.teams.iter().all(|t| t.members.is_empty() && t.total_score == 0));
        assert_eq!(table.teams.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn ties_go_to_first_occurrence() {
        let students = scored(&[50, 50, 50]);
        let table = allocate(&students, 3, 7);
        // after s0 is taken, swap_remove moves s2 into slot 0
        assert_eq!(names(&table.teams[0]), vec!["s0"]);
        assert_eq!(names(&table.teams[1]), vec!["s2"]);
        assert_eq!(names(&table.teams[2]), vec!["s1"]);
    }

    #[test]
    fn equal_totals_prefer_smaller_team() {
        let mut teams = vec![Team::empty(1), Team::empty(2)];
        teams[0].members = scored(&[0, 0]);
        teams[0].refresh(7);
        assert_eq!(choose_best_team_index(&teams), Some(1));
        assert_eq!(choose_best_team_index(&[]), None);
    }

    #[test]
    fn leader_flag_is_set_during_allocation() {
        let students = vec![
            Student::with_score("lead", 10, 9),
            Student::with_score("follow", 9, 1),
        ];
        let table = allocate(&students, 2, 7);
        assert!(table.teams[0].has_leader);
        assert!(!table.teams[1].has_leader);
        assert!(table.teams.iter().all(|t| t.is_consistent(7)));
    }

    #[test]
    fn more_teams_than_students_leaves_some_empty() {
        let table = allocate(&scored(&[4, 3]), 4, 7);
        assert_eq!(table.teams.iter().filter(|t| t.members.is_empty()).count(), 2);
        assert_eq!(table.member_count(), 2);
    }
}
