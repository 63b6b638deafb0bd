//! Balanced team allocation.
//!
//! Students carry six skill values and a derived aggregate score. The crate
//! splits them into a fixed number of teams with near-equal total scores,
//! makes sure every team has a leader where the roster allows it, and proposes
//! pairwise exchanges that lower the balance metric.
//!
//! The four entry points, in the order a caller normally uses them:
//!
//! - [`scoring::compute_scores`]
//! - [`allocate::allocate`]
//! - [`leader::ensure_leader`]
//! - [`optimizer::suggest`], then [`action::apply`] for an accepted suggestion
//!
//! All of them are synchronous and deterministic. Callers must serialize
//! mutations of the same [`model::group::Table`].
//!
//! ```
//! use team_balance::model::condition::Condition;
//! use team_balance::{allocate, leader, optimizer, roster, scoring};
//!
//! let condition = Condition::default();
//! let mut students = roster::generate_roster(12, 42);
//! scoring::compute_scores(&mut students, &condition.weights);
//!
//! let mut table = allocate::allocate(&students, 3, condition.leader_threshold);
//! leader::ensure_leader(&mut table, condition.leader_threshold);
//! let suggestions = optimizer::suggest(&table, condition.max_suggestions, &condition);
//! assert!(suggestions.len() <= condition.max_suggestions);
//! ```

pub mod action;
pub mod allocate;
pub mod cache;
pub mod error;
pub mod leader;
pub mod metric;
pub mod model;
pub mod optimizer;
pub mod roster;
pub mod scoring;
pub mod session;

pub use action::{apply, ActionError, Position, SwapSuggestion};
pub use error::{RosterError, SessionError};
pub use leader::LeaderReport;
pub use model::condition::Condition;
pub use model::entity::{Skills, Student};
pub use model::group::{Table, Team};
pub use session::Session;
