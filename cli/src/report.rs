use anyhow::Result;
use stridelog_core::{split_entry_arg, Workout, WorkoutLog};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use tracing::warn;

#[derive(Tabled)]
struct WorkoutRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Km")]
    km: String,
}

/// Applies `DATE:KM` arguments in order to a fresh log.
///
/// Rejected arguments come back as warnings; the rest still apply.
pub fn build_log(args: &[String]) -> (WorkoutLog, Vec<String>) {
    let mut log = WorkoutLog::new();
    let mut warnings = Vec::new();

    for arg in args {
        let Some((date, km)) = split_entry_arg(arg) else {
            warnings.push(format!("Skipping '{}': expected DATE:KM", arg));
            continue;
        };
        if let Err(e) = log.add(date, km) {
            warnings.push(format!("Skipping '{}': {}", arg, e));
        }
    }

    (log, warnings)
}

pub fn render_table(workouts: &[Workout]) -> String {
    if workouts.is_empty() {
        return "No workouts yet.".to_string();
    }

    let rows = workouts.iter().map(|w| WorkoutRow {
        date: w.date.clone(),
        km: w.km_display(),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table.to_string()
}

pub fn run(args: &[String], json: bool) -> Result<()> {
    let (log, warnings) = build_log(args);
    for w in &warnings {
        warn!("{}", w);
        eprintln!("Warning: {}", w);
    }

    let workouts = log.sorted_descending();
    if json {
        println!("{}", serde_json::to_string_pretty(&workouts)?);
    } else {
        println!("{}", render_table(&workouts));
    }
    Ok(())
}
