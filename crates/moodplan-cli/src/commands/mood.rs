//! Mood check-in commands for CLI.

use clap::Subcommand;

use moodplan_core::{Database, EnergyLevel, MoodCheckin};

#[derive(Subcommand)]
pub enum MoodAction {
    /// Record a mood check-in
    Checkin {
        /// Mood on a 1-10 scale
        #[arg(long)]
        mood: i32,
        /// Energy level: low, medium, or high
        #[arg(long, default_value = "medium")]
        energy: String,
        /// Comma-separated emotion keywords
        #[arg(long)]
        emotions: Option<String>,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Show the latest check-in
    Latest {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show recent check-ins, newest first
    History {
        /// Maximum entries to show
        #[arg(long, default_value = "10")]
        limit: usize,
    },
}

pub fn run(action: MoodAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        MoodAction::Checkin {
            mood,
            energy,
            emotions,
            notes,
        } => {
            let mut checkin = MoodCheckin::new(mood, EnergyLevel::parse(&energy));
            checkin.emotion_keywords = emotions
                .map(|e| e.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_default();
            checkin.notes = notes;
            db.insert_checkin(&checkin)?;
            println!("Mood check-in saved: {}", checkin.id);
            println!(
                "  mood {} / energy {}",
                checkin.mood_scale,
                checkin.energy_level.as_str()
            );
        }
        MoodAction::Latest { json } => match db.latest_checkin()? {
            Some(checkin) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&checkin)?);
                } else {
                    print_checkin(&checkin);
                }
            }
            None => println!("No mood check-ins yet."),
        },
        MoodAction::History { limit } => {
            let checkins = db.checkin_history(limit)?;
            if checkins.is_empty() {
                println!("No mood check-ins yet.");
            }
            for checkin in checkins {
                print_checkin(&checkin);
            }
        }
    }

    Ok(())
}

fn print_checkin(checkin: &MoodCheckin) {
    let keywords = if checkin.emotion_keywords.is_empty() {
        String::new()
    } else {
        format!(" [{}]", checkin.emotion_keywords.join(", "))
    };
    println!(
        "{}  mood {} / energy {}{}",
        checkin.created_at.format("%Y-%m-%d %H:%M"),
        checkin.mood_scale,
        checkin.energy_level.as_str(),
        keywords,
    );
    if let Some(notes) = &checkin.notes {
        println!("    {notes}");
    }
}
