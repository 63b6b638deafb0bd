//! Aggregate scoring of individual students.

use tracing::debug;

use crate::model::condition::SkillWeights;
use crate::model::entity::{Points, Skill, Student};

/// Weighted skill sum, truncated toward zero.
pub fn student_score(student: &Student, weights: &SkillWeights) -> Points {
    let s = &student.skills;
    let mut score = 0.0;
    score += f64::from(s.english) * weights.english;
    score += f64::from(s.frontend) * weights.frontend;
    score += f64::from(s.backend) * weights.backend;
    score += f64::from(s.security) * weights.security;
    score += f64::from(s.ui) * weights.ui;
    score += f64::from(s.leadership) * weights.leadership;
    score.trunc() as Points
}

/// Writes a fresh score into every student, in one pass.
pub fn compute_scores(students: &mut [Student], weights: &SkillWeights) {
    for student in students.iter_mut() {
        student.score = student_score(student, weights);
        debug!(name = %student.name, score = student.score, leadership = student.leadership(), "scored student");
    }
    debug!(count = students.len(), "computed scores");
}

pub fn is_leader(student: &Student, threshold: Skill) -> bool {
    student.leadership() >= threshold
}
