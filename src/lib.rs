mod error;
mod model;
mod output;
mod service;
pub mod frequency;

pub use error::QueryError;
pub use model::{Privilege, User};
pub use output::OutputFormat;
pub use service::{UserPredicate, UserQueryService, EMPTY_AVERAGE_AGE};

/// Options for rendering a user list
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub format: OutputFormat,
    /// Render the summary report instead of the users themselves
    pub stats: bool,
}

/// Render users as text in the requested format
pub fn render(users: &[User], options: RenderOptions) -> Result<String, QueryError> {
    if options.stats {
        output::stats::format_output(users, options.format)
    } else {
        match options.format {
            OutputFormat::Plain => Ok(output::plain::format_output(users)),
            OutputFormat::Json => output::json::format_output(users),
        }
    }
}
