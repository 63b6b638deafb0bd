use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::model::condition::Metric;
use crate::model::entity::Skill;
use crate::model::group::Table;

pub type Index = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub group_index: Index,
    pub member_index: Index,
}

impl Position {
    pub fn new(group_index: Index, member_index: Index) -> Position {
        Position { group_index, member_index }
    }
}

/// A proposed one-for-one exchange between two teams.
///
/// Holds indices only. Any change to team membership or ordering makes it
/// stale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwapSuggestion {
    pub a: Position,
    pub b: Position,
    /// Metric after the exchange minus metric before. Negative is an improvement.
    pub delta: Metric,
}

impl SwapSuggestion {
    pub fn is_improvement(&self) -> bool {
        self.delta < 0.0
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("Invalid position: team {group_index}, member {member_index}")]
    InvalidPosition { group_index: Index, member_index: Index },
    #[error("Both positions refer to team {0}")]
    SameGroup(Index),
}

fn check(table: &Table, position: &Position) -> Result<(), ActionError> {
    table
        .teams
        .get(position.group_index)
        .and_then(|team| team.members.get(position.member_index))
        .map(|_| ())
        .ok_or(ActionError::InvalidPosition {
            group_index: position.group_index,
            member_index: position.member_index,
        })
}

/// Swaps the two referenced students and refreshes exactly the two affected
/// teams. Nothing is mutated on error.
pub fn apply(table: &mut Table, suggestion: &SwapSuggestion, threshold: Skill) -> Result<(), ActionError> {
    let (a, b) = (suggestion.a, suggestion.b);
    check(table, &a)?;
    check(table, &b)?;
    if a.group_index == b.group_index {
        return Err(ActionError::SameGroup(a.group_index));
    }

    let (low, high) = if a.group_index < b.group_index { (a, b) } else { (b, a) };
    let (head, tail) = table.teams.split_at_mut(high.group_index);
    let team_low = &mut head[low.group_index];
    let team_high = &mut tail[0];
    std::mem::swap(
        &mut team_low.members[low.member_index],
        &mut team_high.members[high.member_index],
    );
    team_low.refresh(threshold);
    team_high.refresh(threshold);

    info!(
        team_a = a.group_index + 1,
        team_b = b.group_index + 1,
        delta = suggestion.delta,
        "applied swap suggestion"
    );
    Ok(())
}
