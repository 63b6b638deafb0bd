use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use team_balance::model::condition::Condition;
use team_balance::{roster, LeaderReport, Session, SwapSuggestion, Table};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    name = "team-balance",
    about = "Split a student roster into balanced teams with a leader each",
    version
)]
struct Cli {
    /// CSV roster: header, then name,leadership,frontend,backend,security,ui,english
    roster: PathBuf,
    /// Number of teams to build
    #[arg(short, long)]
    teams: usize,
    /// Minimum leadership for a leader
    #[arg(long, default_value_t = team_balance::model::condition::LEADER_THRESHOLD)]
    threshold: i32,
    /// Maximum number of swap suggestions
    #[arg(short, long, default_value_t = team_balance::model::condition::MAX_SUGGESTIONS)]
    suggestions: usize,
    /// Apply the best suggestion when it improves the balance
    #[arg(long)]
    apply_top: bool,
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,
}

#[derive(Serialize)]
struct Report<'a> {
    teams: &'a Table,
    metric: f64,
    leaders: &'a LeaderReport,
    suggestions: &'a [SwapSuggestion],
    applied: Option<SwapSuggestion>,
}

fn print_text(report: &Report<'_>) {
    for team in &report.teams.teams {
        let leader = if team.has_leader { "yes" } else { "NO" };
        println!("Team {} | members: {} | total: {} | leader: {}", team.id, team.size, team.total_score, leader);
        for member in &team.members {
            println!("  - {} (score {}, leadership {})", member.name, member.score, member.leadership());
        }
    }
    for index in &report.leaders.unfixed {
        println!("WARNING: team {} has no leader", index + 1);
    }
    println!("Balance metric: {:.2}", report.metric);
    if let Some(applied) = &report.applied {
        println!(
            "Applied: team {} #{} <-> team {} #{} (delta {:.2})",
            applied.a.group_index + 1,
            applied.a.member_index + 1,
            applied.b.group_index + 1,
            applied.b.member_index + 1,
            applied.delta
        );
    }
    for (i, s) in report.suggestions.iter().enumerate() {
        println!(
            "{}. team {} #{} <-> team {} #{} (delta {:.2})",
            i + 1,
            s.a.group_index + 1,
            s.a.member_index + 1,
            s.b.group_index + 1,
            s.b.member_index + 1,
            s.delta
        );
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("team_balance=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let condition = Condition::default()
        .with_leader_threshold(cli.threshold)
        .with_max_suggestions(cli.suggestions);

    let mut session = Session::new(condition);
    session.load(roster::load_roster(&cli.roster)?);
    session.compute_scores()?;
    let leaders = session.allocate(cli.teams)?;

    let mut applied = None;
    if cli.apply_top {
        let improves = session.suggest()?.first().is_some_and(|s| s.is_improvement());
        if improves {
            applied = Some(session.apply(0)?);
        }
    }
    let suggestions = if session.suggestions_locked() {
        Vec::new()
    } else {
        session.suggest()?.to_vec()
    };

    let report = Report {
        teams: session.table(),
        metric: session.metric(),
        leaders: &leaders,
        suggestions: &suggestions,
        applied,
    };
    match cli.format {
        Format::Text => print_text(&report),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
