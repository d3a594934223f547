//! Occurrence counting over user sequences and strict-mode lookup on top of it.

pub mod mode;

use std::collections::BTreeMap;

use tracing::debug;

use crate::model::User;

pub use mode::{resolve, MIN_MODE_OCCURRENCES};

/// Count how many users share each value of `key`.
///
/// Every user contributes exactly one count; an empty slice yields an empty map.
pub fn count_by<K, F>(users: &[User], mut key: F) -> BTreeMap<K, usize>
where
    K: Ord,
    F: FnMut(&User) -> K,
{
    let mut counts: BTreeMap<K, usize> = BTreeMap::new();
    for user in users {
        *counts.entry(key(user)).or_default() += 1;
    }
    counts
}

/// The value of `key` that is strictly more common than every other and
/// appears at least [`MIN_MODE_OCCURRENCES`] times.
pub fn most_frequent_by<K, F>(users: &[User], key: F) -> Option<K>
where
    K: Ord + Clone,
    F: FnMut(&User) -> K,
{
    if users.is_empty() {
        debug!("no users given, nothing is most frequent");
        return None;
    }
    resolve(&count_by(users, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Privilege;

    fn user(first: &str, last: &str, age: u32) -> User {
        User::new(first, last, age, [Privilege::Read]).unwrap()
    }

    #[test]
    fn count_by_empty() {
        let users: Vec<User> = Vec::new();
        let counts = count_by(&users, |u| u.last_name().to_string());
        assert!(counts.is_empty());
    }

    #[test]
    fn count_by_last_name() {
        let users = vec![user("A", "Kim", 1), user("B", "Kim", 2), user("C", "Roe", 3)];
        let counts = count_by(&users, |u| u.last_name().to_string());
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["Kim"], 2);
        assert_eq!(counts["Roe"], 1);
        assert_eq!(counts.values().sum::<usize>(), users.len());
    }

    #[test]
    fn most_frequent_by_other_key() {
        let users = vec![user("A", "Kim", 30), user("B", "Roe", 30), user("C", "Poe", 41)];
        assert_eq!(most_frequent_by(&users, |u| u.age()), Some(30));
    }

    #[test]
    fn most_frequent_by_empty() {
        let users: Vec<User> = Vec::new();
        assert_eq!(most_frequent_by(&users, |u| u.age()), None);
    }
}
