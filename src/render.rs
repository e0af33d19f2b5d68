//! Terminal rendering
//!
//! Plain-text tables for the `octofit` CLI.

use crate::models::{Activity, LeaderboardEntry, Team, User, Workout};
use crate::view::FetchResult;
use chrono::{DateTime, NaiveDate};
use serde::Serialize;

/// A record that can be shown as a table row
pub trait Tabular {
    /// Human-readable collection name for headings and empty states
    const TITLE: &'static str;

    fn headers() -> Vec<&'static str>;

    fn row(&self) -> Vec<String>;
}

/// Output format of the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unsupported format: {}. Use: table, json", other)),
        }
    }
}

/// Render a settled view state
///
/// `Err` carries the error panel text for stderr.
pub fn render_state<T: Tabular + Serialize>(
    state: &FetchResult<T>,
    format: OutputFormat,
) -> Result<String, String> {
    match state {
        FetchResult::Loading => Ok(format!("Loading {}...\n", T::TITLE.to_lowercase())),
        FetchResult::Error { message } => Err(format!(
            "Error loading {}: {}\n",
            T::TITLE.to_lowercase(),
            message
        )),
        FetchResult::Ready { items } => match format {
            OutputFormat::Json => serde_json::to_string_pretty(items)
                .map(|mut text| {
                    text.push('\n');
                    text
                })
                .map_err(|e| format!("Failed to encode {}: {}\n", T::TITLE.to_lowercase(), e)),
            OutputFormat::Table if items.is_empty() => {
                Ok(format!("No {} found.\n", T::TITLE.to_lowercase()))
            }
            OutputFormat::Table => Ok(render_table(items)),
        },
    }
}

/// Render records as an aligned table
pub fn render_table<T: Tabular>(items: &[T]) -> String {
    let headers = T::headers();
    let rows: Vec<Vec<String>> = items.iter().map(T::row).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_row(&mut out, headers.iter().map(|h| h.to_string()), &widths);
    let total = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(total));
    out.push('\n');
    for row in rows {
        write_row(&mut out, row.into_iter(), &widths);
    }
    out
}

fn write_row(out: &mut String, cells: impl Iterator<Item = String>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
        .collect();
    out.push_str(line.join(" | ").trim_end());
    out.push('\n');
}

/// Calendar date of an RFC 3339 timestamp, or the input when it is not one
pub fn format_date(value: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    value.to_string()
}

fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

fn number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

impl Tabular for User {
    const TITLE: &'static str = "Users";

    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Email", "Team", "Role"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            or_dash(self.team.as_deref()),
            or_dash(self.role.as_deref()),
        ]
    }
}

impl Tabular for Team {
    const TITLE: &'static str = "Teams";

    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Description", "Members", "Created"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.description.clone(),
            self.member_count().to_string(),
            format_date(&self.created_at),
        ]
    }
}

impl Tabular for Activity {
    const TITLE: &'static str = "Activities";

    fn headers() -> Vec<&'static str> {
        vec!["ID", "User", "Type", "Duration (min)", "Distance (km)", "Calories", "Date"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.user.clone(),
            self.activity_type.clone(),
            number(self.duration),
            number(self.distance),
            number(self.calories),
            format_date(&self.date),
        ]
    }
}

impl Tabular for Workout {
    const TITLE: &'static str = "Workouts";

    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Category", "Duration (min)", "Difficulty", "Calories"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.category.clone(),
            number(self.duration),
            self.difficulty.clone(),
            self.calories_burned.map_or_else(|| "-".to_string(), number),
        ]
    }
}

impl Tabular for LeaderboardEntry {
    const TITLE: &'static str = "Leaderboard entries";

    fn headers() -> Vec<&'static str> {
        vec!["Rank", "User", "Email", "Team", "Calories", "Activities", "Distance (km)", "Minutes"]
    }

    fn row(&self) -> Vec<String> {
        let rank = if self.is_podium() {
            format!("{} *", self.rank)
        } else {
            self.rank.to_string()
        };
        vec![
            rank,
            self.user_name.clone(),
            self.user_email.clone(),
            or_dash(self.team.as_deref()),
            self.total_calories.unwrap_or(0).to_string(),
            self.total_activities.unwrap_or(0).to_string(),
            format!("{:.2}", self.total_distance_km.unwrap_or(0.0)),
            self.total_duration_minutes.unwrap_or(0).to_string(),
        ]
    }
}
