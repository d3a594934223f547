use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// Permission tag attached to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Privilege {
    Create,
    Read,
    Update,
    Delete,
}

impl Privilege {
    pub const ALL: [Privilege; 4] = [
        Privilege::Create,
        Privilege::Read,
        Privilege::Update,
        Privilege::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Privilege::Create => "CREATE",
            Privilege::Read => "READ",
            Privilege::Update => "UPDATE",
            Privilege::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Privilege {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Privilege::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| QueryError::UnknownPrivilege(s.to_string()))
    }
}

impl TryFrom<String> for Privilege {
    type Error = QueryError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// An immutable user record.
///
/// Privileges keep the order they were given in and never contain the
/// same value twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserRecord")]
pub struct User {
    first_name: String,
    last_name: String,
    age: u32,
    privileges: Vec<Privilege>,
}

/// Unvalidated shape of a user as it appears in serialized input.
#[derive(Deserialize)]
struct UserRecord {
    first_name: String,
    last_name: String,
    age: u32,
    #[serde(default)]
    privileges: Vec<Privilege>,
}

impl TryFrom<UserRecord> for User {
    type Error = QueryError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        User::new(record.first_name, record.last_name, record.age, record.privileges)
    }
}

impl User {
    /// Build a user, rejecting a privilege list that repeats a value.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        privileges: impl IntoIterator<Item = Privilege>,
    ) -> Result<Self, QueryError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let privileges: Vec<Privilege> = privileges.into_iter().collect();

        if let Some(&privilege) = privileges.iter().duplicates().next() {
            return Err(QueryError::DuplicatePrivilege {
                user: format!("{} {}", first_name, last_name),
                privilege,
            });
        }

        Ok(Self {
            first_name,
            last_name,
            age,
            privileges,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn privileges(&self) -> &[Privilege] {
        &self.privileges
    }

    pub fn has_privilege(&self, privilege: Privilege) -> bool {
        self.privileges.contains(&privilege)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.first_name, self.last_name, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn privilege_parses_upper_case_names() {
        for privilege in Privilege::ALL {
            assert_eq!(privilege.as_str().parse::<Privilege>().unwrap(), privilege);
        }
    }

    #[test]
    fn privilege_parse_is_exact() {
        for name in ["update", "Update", " DELETE "] {
            let err = name.parse::<Privilege>().unwrap_err();
            assert!(matches!(err, QueryError::UnknownPrivilege(ref n) if n == name));
        }
    }

    #[test]
    fn privilege_deserialize_matches_parse() {
        let ok: Vec<Privilege> = serde_json::from_str(r#"["CREATE","DELETE"]"#).unwrap();
        assert_eq!(ok, vec![Privilege::Create, Privilege::Delete]);

        for (json, name) in [(r#"["update"]"#, "update"), (r#"["ADMIN"]"#, "ADMIN")] {
            let err = serde_json::from_str::<Vec<Privilege>>(json).unwrap_err();
            let expected = QueryError::UnknownPrivilege(name.to_string()).to_string();
            assert!(err.to_string().contains(&expected), "{}", err);
        }
    }

    #[test]
    fn user_deserialize_rejects_unknown_privilege() {
        let err = serde_json::from_str::<User>(
            r#"{"first_name":"Ann","last_name":"Lee","age":30,"privileges":["update"]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown privilege 'update'"), "{}", err);
    }

    #[test]
    fn privilege_parse_unknown() {
        let err = "ADMIN".parse::<Privilege>().unwrap_err();
        assert!(err.to_string().contains("unknown privilege 'ADMIN'"));
    }

    #[test]
    fn user_keeps_privilege_order() {
        let user = User::new("Ann", "Lee", 30, [Privilege::Update, Privilege::Read]).unwrap();
        assert_eq!(user.privileges(), &[Privilege::Update, Privilege::Read]);
        assert!(user.has_privilege(Privilege::Read));
        assert!(!user.has_privilege(Privilege::Delete));
    }

    #[test]
    fn user_rejects_duplicate_privilege() {
        let err = User::new("Ann", "Lee", 30, [Privilege::Read, Privilege::Read]).unwrap_err();
        assert!(matches!(
            err,
            QueryError::DuplicatePrivilege { privilege: Privilege::Read, .. }
        ));
        assert!(err.to_string().contains("Ann Lee"));
    }

    #[test]
    fn user_display() {
        let user = User::new("Ann", "Lee", 30, []).unwrap();
        assert_eq!(user.to_string(), "Ann Lee (30)");
    }

    #[test]
    fn user_deserialize_validates() {
        let ok: User = serde_json::from_str(
            r#"{"first_name":"Ann","last_name":"Lee","age":30,"privileges":["READ"]}"#,
        )
        .unwrap();
        assert_eq!(ok.privileges(), &[Privilege::Read]);

        let dup = serde_json::from_str::<User>(
            r#"{"first_name":"Ann","last_name":"Lee","age":30,"privileges":["READ","READ"]}"#,
        );
        assert!(dup.is_err());

        let negative = serde_json::from_str::<User>(
            r#"{"first_name":"Ann","last_name":"Lee","age":-1}"#,
        );
        assert!(negative.is_err());
    }
}
