pub mod entity {
    use serde::{Deserialize, Serialize};

    pub type Skill = i32;
    pub type Points = i64;

    /// Raw skill attributes as supplied by ingestion. No range is enforced.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Skills {
        pub english: Skill,
        pub frontend: Skill,
        pub backend: Skill,
        pub security: Skill,
        pub ui: Skill,
        pub leadership: Skill,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Student {
        pub name: String,
        pub skills: Skills,
        /// Aggregate score, written by [`crate::scoring::compute_scores`]. Starts at 0.
        pub score: Points,
    }

    impl Student {
        pub fn new(name: impl Into<String>, skills: Skills) -> Student {
            Student { name: name.into(), skills, score: 0 }
        }

        /// Builds a student with a preset score, skipping the scoring pass.
        pub fn with_score(name: impl Into<String>, score: Points, leadership: Skill) -> Student {
            let skills = Skills { leadership, ..Skills::default() };
            Student { name: name.into(), skills, score }
        }

        pub fn leadership(&self) -> Skill {
            self.skills.leadership
        }

        pub fn is_leader(&self, threshold: Skill) -> bool {
            self.skills.leadership >= threshold
        }
    }
}


pub mod group {
    use serde::{Deserialize, Serialize};
    use super::entity::{Points, Skill, Student};

    pub type TeamId = u32;

    /// A team and its cached statistics.
    ///
    /// `size`, `total_score` and `has_leader` are derived from `members`. Every
    /// mutation path goes through [`Team::refresh`] before the team is observed
    /// again.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Team {
        pub id: TeamId,
        pub members: Vec<Student>,
        pub size: usize,
        pub total_score: Points,
        pub has_leader: bool,
    }

    impl Team {
        pub fn empty(id: TeamId) -> Team {
            Team { id, members: Vec::new(), size: 0, total_score: 0, has_leader: false }
        }

        /// Recomputes every derived field from `members`.
        pub fn refresh(&mut self, threshold: Skill) {
            self.size = self.members.len();
            self.total_score = self.members.iter().map(|m| m.score).sum();
            self.has_leader = self.members.iter().any(|m| m.is_leader(threshold));
        }

        /// Owned form of [`Team::refresh`].
        pub fn recomputed(mut self, threshold: Skill) -> Team {
            self.refresh(threshold);
            self
        }

        pub fn leader_count(&self, threshold: Skill) -> usize {
            self.members.iter().filter(|m| m.is_leader(threshold)).count()
        }

        /// True when the cached fields match a fresh recomputation.
        pub fn is_consistent(&self, threshold: Skill) -> bool {
            self.clone().recomputed(threshold) == *self
        }
    }

    /// The full set of teams produced by one allocation.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Table {
        pub teams: Vec<Team>,
    }

    impl Table {
        pub fn new(teams: Vec<Team>) -> Table {
            Table { teams }
        }

        pub fn len(&self) -> usize {
            self.teams.len()
        }

        pub fn is_empty(&self) -> bool {
            self.teams.is_empty()
        }

        pub fn totals(&self) -> Vec<Points> {
            self.teams.iter().map(|t| t.total_score).collect()
        }

        pub fn missing_leaders(&self) -> usize {
            self.teams.iter().filter(|t| !t.has_leader).count()
        }

        pub fn all_led(&self) -> bool {
            self.teams.iter().all(|t| t.has_leader)
        }

        pub fn member_count(&self) -> usize {
            self.teams.iter().map(|t| t.members.len()).sum()
        }
    }
}

pub mod condition {
    use serde::{Deserialize, Serialize};
    use super::entity::Skill;

    pub type Metric = f64;

    pub const LEADER_THRESHOLD: Skill = 7;
    pub const LEADER_PENALTY: Metric = 1000.0;
    pub const MAX_SUGGESTIONS: usize = 10;

    /// Per-skill weights for the aggregate score. The defaults sum to 1.0.
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct SkillWeights {
        pub english: f64,
        pub frontend: f64,
        pub backend: f64,
        pub security: f64,
        pub ui: f64,
        pub leadership: f64,
    }

    impl Default for SkillWeights {
        fn default() -> Self {
            SkillWeights {
                english: 0.15,
                frontend: 0.20,
                backend: 0.20,
                security: 0.15,
                ui: 0.15,
                leadership: 0.15,
            }
        }
    }

    /// Tunable constants shared by every balancing component.
    ///
    /// # Examples
    ///
    /// ```
    /// use team_balance::model::condition::Condition;
    ///
    /// let condition = Condition::default()
    ///     .with_leader_threshold(8)
    ///     .with_max_suggestions(5);
    /// assert_eq!(condition.leader_penalty, 1000.0);
    /// ```
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Condition {
        pub weights: SkillWeights,
        /// Minimum leadership for a student to count as a leader.
        pub leader_threshold: Skill,
        /// Metric penalty added per leaderless team.
        pub leader_penalty: Metric,
        /// Cap on the suggestion list length.
        pub max_suggestions: usize,
    }

    impl Default for Condition {
        fn default() -> Self {
            Condition {
                weights: SkillWeights::default(),
                leader_threshold: LEADER_THRESHOLD,
                leader_penalty: LEADER_PENALTY,
                max_suggestions: MAX_SUGGESTIONS,
            }
        }
    }

    impl Condition {
        pub fn with_weights(mut self, weights: SkillWeights) -> Self {
            self.weights = weights;
            self
        }

        pub fn with_leader_threshold(mut self, threshold: Skill) -> Self {
            self.leader_threshold = threshold;
            self
        }

        pub fn with_leader_penalty(mut self, penalty: Metric) -> Self {
            self.leader_penalty = penalty;
            self
        }

        pub fn with_max_suggestions(mut self, n: usize) -> Self {
            self.max_suggestions = n;
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::condition::Condition;
    use super::entity::Student;
    use super::group::Team;

    #[test]
    fn refresh_recomputes_all_cached_fields() {
        let mut team = Team::empty(1);
        team.members.push(Student::with_score("a", 40, 8));
        team.members.push(Student::with_score("b", 25, 2));
        team.total_score = 999;
        assert!(!team.is_consistent(7));

        team.refresh(7);
        assert_eq!(team.size, 2);
        assert_eq!(team.total_score, 65);
        assert!(team.has_leader);
        assert!(team.is_consistent(7));
    }

    #[test]
    fn leader_flag_depends_on_threshold() {
        let team = Team {
            members: vec![Student::with_score("a", 10, 7)],
            ..Team::empty(1)
        };
        assert!(team.clone().recomputed(7).has_leader);
        assert!(!team.recomputed(8).has_leader);
    }

    #[test]
    fn default_condition_matches_fixed_constants() {
        let condition = Condition::default();
        let w = condition.weights;
        let sum = w.english + w.frontend + w.backend + w.security + w.ui + w.leadership;
        assert!((sum - 1.0).abs() < 1e-12);
        assert_eq!(condition.leader_threshold, 7);
        assert_eq!(condition.leader_penalty, 1000.0);
        assert_eq!(condition.max_suggestions, 10);
    }
}
