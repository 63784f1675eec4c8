use serde::Serialize;
use time::{Date, format_description};

use crate::types::task::{Task, TaskStatus};

/// Summary served to the dashboard insights panel. Both fields are
/// display-ready strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct InsightSummary {
    #[serde(rename = "optimalHours")]
    pub(crate) optimal_hours: String,
    pub(crate) suggestions: String,
}

/// Derives a focus window and a one-sentence suggestion from the current
/// tasks. Completed tasks never count as due or overdue; due dates that do
/// not parse as `YYYY-MM-DD` are skipped.
pub(crate) fn summarize(tasks: &[Task], today: Date) -> InsightSummary {
    let mut pending = 0usize;
    let mut due_today = 0usize;
    let mut overdue = 0usize;

    for task in tasks {
        if task.status == TaskStatus::Completed {
            continue;
        }
        pending += 1;
        if let Some(due) = parse_due_date(&task.due_date) {
            if due == today {
                due_today += 1;
            } else if due < today {
                overdue += 1;
            }
        }
    }

    let (optimal_hours, suggestions) = if overdue > 0 {
        (
            "09:00-12:00",
            format!(
                "Start with your {} before taking on new work.",
                count_noun(overdue, "overdue task")
            ),
        )
    } else if due_today > 0 {
        (
            "13:00-15:00",
            format!("Focus on the {} due today.", count_noun(due_today, "task")),
        )
    } else if pending > 0 {
        (
            "15:00-17:00",
            format!(
                "No deadlines are pressing; pick one of your {} to move forward.",
                count_noun(pending, "open task")
            ),
        )
    } else {
        (
            "15:00-17:00",
            "Nothing is pending. Add a task to get started.".to_string(),
        )
    };

    InsightSummary {
        optimal_hours: optimal_hours.to_string(),
        suggestions,
    }
}

fn parse_due_date(raw: &str) -> Option<Date> {
    let format = format_description::parse("[year]-[month]-[day]").ok()?;
    Date::parse(raw.trim(), &format).ok()
}

fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
