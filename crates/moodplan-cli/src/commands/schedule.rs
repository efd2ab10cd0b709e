//! Mood-aware scheduling commands for CLI.

use chrono::{DateTime, Utc};
use clap::Subcommand;

use moodplan_core::{
    preview_schedule, run_schedule, Config, Database, ScheduleRunReport, TaskStatus,
};

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Schedule pending tasks and persist the assigned start times
    Run {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compute the plan without persisting anything
    Preview {
        /// Schedule as if "now" were this RFC3339 timestamp
        #[arg(long)]
        at: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show pending tasks in scheduled order
    Show,
}

pub fn run(action: ScheduleAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let config = Config::load()?;

    match action {
        ScheduleAction::Run { json } => {
            let report = run_schedule(&db, &config, Utc::now())?;
            print_report(&report, json)?;
        }
        ScheduleAction::Preview { at, json } => {
            let now = match at {
                Some(raw) => DateTime::parse_from_rfc3339(&raw)
                    .map_err(|e| format!("invalid timestamp '{raw}': {e}"))?
                    .with_timezone(&Utc),
                None => Utc::now(),
            };
            let report = preview_schedule(&db, &config, now)?;
            print_report(&report, json)?;
        }
        ScheduleAction::Show => {
            let mut tasks = db.list_tasks(Some(TaskStatus::Pending))?;
            // Unscheduled tasks sort last.
            tasks.sort_by_key(|t| (t.scheduled_time.is_none(), t.scheduled_time));
            if tasks.is_empty() {
                println!("No pending tasks.");
            }
            for task in tasks {
                let slot = task
                    .scheduled_time
                    .map(|t| t.format("%H:%M").to_string())
                    .unwrap_or_else(|| "--:--".to_string());
                println!(
                    "{slot}  {} ({}, {}, {}min)",
                    task.title,
                    task.priority.as_str(),
                    task.cognitive_load.as_str(),
                    task.duration_minutes,
                );
            }
        }
    }

    Ok(())
}

fn print_report(report: &ScheduleRunReport, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    println!("Scheduled {} tasks", report.count);
    for item in &report.scheduled {
        println!(
            "{}  {} ({}, {}, {}min)",
            item.scheduled_time.format("%H:%M"),
            item.title,
            item.priority.as_str(),
            item.cognitive_load.as_str(),
            item.duration_minutes,
        );
    }
    Ok(())
}
