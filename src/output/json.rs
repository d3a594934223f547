use crate::error::QueryError;
use crate::model::User;
use serde::Serialize;

#[derive(Serialize)]
struct JsonOutput<'a> {
    users: &'a [User],
}

/// Format users as JSON
pub fn format_output(users: &[User]) -> Result<String, QueryError> {
    let output = JsonOutput { users };
    Ok(serde_json::to_string_pretty(&output)?)
}
