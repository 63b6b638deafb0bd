//! Swap suggestion search.
//!
//! Every cross-team exchange is scored by how it would move the balance metric
//! and the best `max_suggestions` are kept, ascending by delta. The search is
//! exhaustive: O(teams² · members² · teams) metric work per call.

use itertools::Itertools;
use tracing::debug;

use crate::action::{Position, SwapSuggestion};
use crate::cache::TableCache;
use crate::model::condition::Condition;
use crate::model::group::Table;

/// Inserts `suggestion` after every entry with a delta less than or equal to
/// its own, then drops the worst entries beyond `max`.
pub fn insert_sorted(suggestions: &mut Vec<SwapSuggestion>, suggestion: SwapSuggestion, max: usize) {
    let pos = suggestions.partition_point(|s| s.delta <= suggestion.delta);
    if pos >= max {
        return;
    }
    suggestions.insert(pos, suggestion);
    suggestions.truncate(max);
}

/// Best swap suggestions for `table`, ascending by delta, at most
/// `max_suggestions` long. Empty with fewer than two teams.
///
/// Entries with a non-negative delta are kept when there are not enough
/// improving ones; check [`SwapSuggestion::is_improvement`] before applying.
pub fn suggest(table: &Table, max_suggestions: usize, condition: &Condition) -> Vec<SwapSuggestion> {
    let mut suggestions = Vec::new();
    if table.len() < 2 {
        return suggestions;
    }

    let cache = TableCache::create(table, condition.leader_threshold, condition.leader_penalty);
    let base = cache.metric();

    let mut evaluated = 0usize;
    for (team_a, team_b) in (0..table.len()).tuple_combinations() {
        let size_a = table.teams[team_a].members.len();
        let size_b = table.teams[team_b].members.len();
        for (member_a, member_b) in (0..size_a).cartesian_product(0..size_b) {
            let a = Position::new(team_a, member_a);
            let b = Position::new(team_b, member_b);
            let delta = cache.simulate_swap(&a, &b) - base;
            insert_sorted(&mut suggestions, SwapSuggestion { a, b, delta }, max_suggestions);
            evaluated += 1;
        }
    }

    debug!(base, evaluated, kept = suggestions.len(), "generated swap suggestions");
    suggestions
}
