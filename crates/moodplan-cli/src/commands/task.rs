//! Task management commands for CLI.

use chrono::DateTime;
use clap::Subcommand;

use moodplan_core::{CognitiveLoad, Config, Database, Priority, Task, TaskStatus};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a new task
    Add {
        /// Task title
        title: String,
        /// Task description
        #[arg(long)]
        description: Option<String>,
        /// Priority: urgent, high, medium, or low
        #[arg(long)]
        priority: Option<String>,
        /// Cognitive load: light, moderate, or heavy
        #[arg(long)]
        load: Option<String>,
        /// Estimated duration in minutes
        #[arg(long)]
        duration: Option<i64>,
        /// Deadline (RFC3339, display only)
        #[arg(long)]
        deadline: Option<String>,
    },
    /// List tasks
    List {
        /// Filter by status (pending, in_progress, completed)
        #[arg(long)]
        status: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get task details
    Get {
        /// Task ID
        id: String,
    },
    /// Mark a task completed
    Done {
        /// Task ID
        id: String,
    },
    /// Mark a completed task pending again
    Reopen {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        TaskAction::Add {
            title,
            description,
            priority,
            load,
            duration,
            deadline,
        } => {
            let config = Config::load()?;
            let mut task = Task::new(title);
            task.description = description;
            task.priority =
                Priority::parse(&priority.unwrap_or_else(|| config.defaults.priority.clone()));
            task.cognitive_load = CognitiveLoad::parse(
                &load.unwrap_or_else(|| config.defaults.cognitive_load.clone()),
            );
            task.duration_minutes = duration.unwrap_or(config.defaults.duration_minutes);
            if task.duration_minutes < 0 {
                return Err("duration must be non-negative".into());
            }
            if let Some(raw) = deadline {
                let parsed = DateTime::parse_from_rfc3339(&raw)
                    .map_err(|e| format!("invalid deadline '{raw}': {e}"))?;
                task.deadline = Some(parsed.with_timezone(&chrono::Utc));
            }
            db.insert_task(&task)?;
            println!("Task added: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::List { status, json } => {
            let filter = status.as_deref().map(TaskStatus::parse);
            let tasks = db.list_tasks(filter)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else if tasks.is_empty() {
                println!("No tasks.");
            } else {
                for task in tasks {
                    let slot = task
                        .scheduled_time
                        .map(|t| t.format(" @ %H:%M").to_string())
                        .unwrap_or_default();
                    println!(
                        "[{}] {} ({}, {}, {}min){}",
                        task.status.as_str(),
                        task.title,
                        task.priority.as_str(),
                        task.cognitive_load.as_str(),
                        task.duration_minutes,
                        slot,
                    );
                    println!("    id: {}", task.id);
                }
            }
        }
        TaskAction::Get { id } => match db.get_task(&id)? {
            Some(task) => println!("{}", serde_json::to_string_pretty(&task)?),
            None => println!("Task not found: {id}"),
        },
        TaskAction::Done { id } => {
            db.set_task_status(&id, TaskStatus::Completed)?;
            println!("Task completed: {id}");
        }
        TaskAction::Reopen { id } => {
            db.set_task_status(&id, TaskStatus::Pending)?;
            println!("Task reopened: {id}");
        }
        TaskAction::Delete { id } => {
            db.delete_task(&id)?;
            println!("Task deleted: {id}");
        }
    }

    Ok(())
}
