//! Interactive session state.
//!
//! Sequences the four core entry points the way an interactive front end
//! drives them: load, score, allocate (with leader repair), suggest, apply.
//! After a suggestion is applied, further suggestions stay locked until the
//! teams are rebuilt or repaired.

use tracing::info;

use crate::action::{self, SwapSuggestion};
use crate::allocate::allocate;
use crate::error::{SessionError, SessionResult};
use crate::leader::{ensure_leader, LeaderReport};
use crate::metric::metric_of;
use crate::model::condition::{Condition, Metric};
use crate::model::entity::Student;
use crate::model::group::Table;
use crate::optimizer::suggest;
use crate::scoring::compute_scores;

#[derive(Debug, Clone, Default)]
pub struct Session {
    condition: Condition,
    students: Vec<Student>,
    table: Table,
    suggestions: Vec<SwapSuggestion>,
    suggestions_locked: bool,
}

impl Session {
    pub fn new(condition: Condition) -> Session {
        Session { condition, ..Session::default() }
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn suggestions(&self) -> &[SwapSuggestion] {
        &self.suggestions
    }

    pub fn suggestions_locked(&self) -> bool {
        self.suggestions_locked
    }

    /// Replaces the roster and drops any teams built from the previous one.
    pub fn load(&mut self, students: Vec<Student>) {
        info!(count = students.len(), "roster replaced");
        self.students = students;
        self.table = Table::default();
        self.suggestions.clear();
        self.suggestions_locked = false;
    }

    pub fn compute_scores(&mut self) -> SessionResult<()> {
        if self.students.is_empty() {
            return Err(SessionError::NoStudents);
        }
        compute_scores(&mut self.students, &self.condition.weights);
        Ok(())
    }

    /// Builds fresh teams and repairs leaders. Scores are computed first when
    /// any student still holds a zero score.
    pub fn allocate(&mut self, num_teams: usize) -> SessionResult<LeaderReport> {
        if num_teams == 0 {
            return Err(SessionError::InvalidTeamCount);
        }
        if self.students.is_empty() {
            return Err(SessionError::NoStudents);
        }
        if self.students.iter().any(|s| s.score == 0) {
            compute_scores(&mut self.students, &self.condition.weights);
        }

        self.table = allocate(&self.students, num_teams, self.condition.leader_threshold);
        let report = ensure_leader(&mut self.table, self.condition.leader_threshold);
        self.suggestions.clear();
        self.suggestions_locked = false;
        Ok(report)
    }

    pub fn fix_leaders(&mut self) -> SessionResult<LeaderReport> {
        if self.table.is_empty() {
            return Err(SessionError::NoTeams);
        }
        let report = ensure_leader(&mut self.table, self.condition.leader_threshold);
        self.suggestions.clear();
        self.suggestions_locked = false;
        Ok(report)
    }

    pub fn suggest(&mut self) -> SessionResult<&[SwapSuggestion]> {
        if self.suggestions_locked {
            return Err(SessionError::SuggestionsLocked);
        }
        self.suggestions = suggest(&self.table, self.condition.max_suggestions, &self.condition);
        Ok(&self.suggestions)
    }

    /// Applies the suggestion at `index` (the first one when out of range),
    /// then clears and locks suggestions.
    pub fn apply(&mut self, index: usize) -> SessionResult<SwapSuggestion> {
        let Some(first) = self.suggestions.first() else {
            return Err(SessionError::NoSuggestions);
        };
        let chosen = *self.suggestions.get(index).unwrap_or(first);
        action::apply(&mut self.table, &chosen, self.condition.leader_threshold)?;
        self.suggestions.clear();
        self.suggestions_locked = true;
        Ok(chosen)
    }

    pub fn metric(&self) -> Metric {
        metric_of(&self.table, self.condition.leader_penalty)
    }
}
