//! Roster ingestion.
//!
//! CSV layout: one header line, then
//! `name,leadership,frontend,backend,security,ui,english` per row. Missing or
//! unparsable numbers become 0; they are never an error.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::error::RosterError;
use crate::model::entity::{Skill, Skills, Student};

fn parse_skill(cell: Option<&str>, line_no: usize) -> Skill {
    let Some(cell) = cell.map(str::trim) else {
        return 0;
    };
    if cell.is_empty() {
        return 0;
    }
    cell.parse().unwrap_or_else(|_| {
        warn!(line = line_no, cell, "unparsable skill value, using 0");
        0
    })
}

fn parse_row(line: &str, line_no: usize) -> Student {
    let mut cells = line.split(',');
    let name = cells.next().unwrap_or_default().trim().to_string();
    let leadership = parse_skill(cells.next(), line_no);
    let frontend = parse_skill(cells.next(), line_no);
    let backend = parse_skill(cells.next(), line_no);
    let security = parse_skill(cells.next(), line_no);
    let ui = parse_skill(cells.next(), line_no);
    let english = parse_skill(cells.next(), line_no);
    Student::new(name, Skills { english, frontend, backend, security, ui, leadership })
}

/// Reads students from CSV text. The first line is treated as a header.
pub fn read_roster<R: BufRead>(reader: R) -> Result<Vec<Student>, RosterError> {
    let mut students = Vec::new();
    for (index, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        students.push(parse_row(&line, index + 1));
    }
    Ok(students)
}

/// Loads a roster file. A file without any student rows is an error so that
/// callers do not replace a usable roster with an empty one.
pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<Student>, RosterError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| RosterError::Open { path: path.to_path_buf(), source })?;
    let students = read_roster(BufReader::new(file))?;
    if students.is_empty() {
        return Err(RosterError::Empty(path.to_path_buf()));
    }
    info!(count = students.len(), path = %path.display(), "loaded students");
    Ok(students)
}

/// Deterministic synthetic roster with skills in `0..=10`.
pub fn generate_roster(count: usize, seed: u64) -> Vec<Student> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let skills = Skills {
                english: rng.gen_range(0..=10),
                frontend: rng.gen_range(0..=10),
                backend: rng.gen_range(0..=10),
                security: rng.gen_range(0..=10),
                ui: rng.gen_range(0..=10),
                leadership: rng.gen_range(0..=10),
            };
            Student::new(format!("student-{:03}", i + 1), skills)
        })
        .collect()
}
