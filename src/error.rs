use thiserror::Error;

use crate::model::Privilege;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Invalid argument: user {user} lists privilege {privilege} more than once")]
    DuplicatePrivilege {
        user: String,
        privilege: Privilege,
    },

    #[error("Invalid argument: unknown privilege '{0}'")]
    UnknownPrivilege(String),

    #[error("Formatting error")]
    Format(#[from] std::fmt::Error),

    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),
}
