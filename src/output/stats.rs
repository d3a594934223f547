use crate::error::QueryError;
use crate::model::{Privilege, User};
use crate::service::UserQueryService;
use super::OutputFormat;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Aggregate view over a user list
#[derive(Debug, Serialize)]
struct Summary {
    users: usize,
    average_age: f64,
    most_frequent_last_name: Option<String>,
    last_names: BTreeMap<String, usize>,
    privileges: BTreeMap<Privilege, usize>,
}

fn gather_summary(users: &[User]) -> Summary {
    let service = UserQueryService::new();
    Summary {
        users: users.len(),
        average_age: service.average_age(users),
        most_frequent_last_name: service.most_frequent_last_name(users),
        last_names: service.last_name_counts(users),
        privileges: service.privilege_counts(users),
    }
}

/// Format the summary report in the requested format.
pub fn format_output(users: &[User], format: OutputFormat) -> Result<String, QueryError> {
    let summary = gather_summary(users);
    match format {
        OutputFormat::Plain => format_plain(&summary),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&summary)?),
    }
}

fn format_plain(summary: &Summary) -> Result<String, QueryError> {
    let mut out = String::new();

    writeln!(out, "users: {}  average age: {:.2}", summary.users, summary.average_age)?;
    writeln!(
        out,
        "most frequent last name: {}",
        summary.most_frequent_last_name.as_deref().unwrap_or("none")
    )?;

    if !summary.last_names.is_empty() {
        let names: Vec<String> = summary
            .last_names
            .iter()
            .map(|(name, count)| format!("{}: {}", name, count))
            .collect();
        writeln!(out, "  last names: {}", names.join("  "))?;
    }

    if !summary.privileges.is_empty() {
        let privileges: Vec<String> = summary
            .privileges
            .iter()
            .map(|(privilege, count)| format!("{}: {}", privilege, count))
            .collect();
        writeln!(out, "  privileges: {}", privileges.join("  "))?;
    }

    Ok(out)
}
