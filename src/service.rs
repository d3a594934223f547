use std::collections::BTreeMap;

use itertools::Itertools;
use tracing::trace;

use crate::frequency;
use crate::model::{Privilege, User};

/// Returned by [`UserQueryService::average_age`] when there are no users.
pub const EMPTY_AVERAGE_AGE: f64 = -1.0;

/// A condition a user must satisfy to survive [`UserQueryService::filter_by`].
pub type UserPredicate<'a> = dyn Fn(&User) -> bool + 'a;

/// Stateless queries over a caller-owned slice of users.
///
/// No operation mutates its input; every returned collection owns clones
/// of the users it contains.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserQueryService;

impl UserQueryService {
    pub fn new() -> Self {
        Self
    }

    /// First names in descending lexicographic order.
    pub fn first_names_reverse_sorted(&self, users: &[User]) -> Vec<String> {
        trace!(users = users.len(), "first_names_reverse_sorted");
        users
            .iter()
            .map(|user| user.first_name().to_string())
            .sorted_by(|a, b| b.cmp(a))
            .collect()
    }

    /// Oldest first; users of equal age ordered by first name.
    pub fn sort_by_age_desc_and_name_asc(&self, users: &[User]) -> Vec<User> {
        trace!(users = users.len(), "sort_by_age_desc_and_name_asc");
        users
            .iter()
            .sorted_by(|a, b| {
                b.age()
                    .cmp(&a.age())
                    .then_with(|| a.first_name().cmp(b.first_name()))
            })
            .cloned()
            .collect()
    }

    /// Every privilege held by any user, once each, in order of first appearance.
    pub fn all_distinct_privileges(&self, users: &[User]) -> Vec<Privilege> {
        trace!(users = users.len(), "all_distinct_privileges");
        users
            .iter()
            .flat_map(|user| user.privileges().iter().copied())
            .unique()
            .collect()
    }

    /// The first user older than `age` who holds [`Privilege::Update`].
    pub fn update_user_older_than(&self, users: &[User], age: u32) -> Option<User> {
        trace!(users = users.len(), age, "update_user_older_than");
        users
            .iter()
            .find(|user| user.age() > age && user.has_privilege(Privilege::Update))
            .cloned()
    }

    pub fn group_by_count_of_privileges(&self, users: &[User]) -> BTreeMap<usize, Vec<User>> {
        trace!(users = users.len(), "group_by_count_of_privileges");
        let mut groups: BTreeMap<usize, Vec<User>> = BTreeMap::new();
        for user in users {
            groups
                .entry(user.privileges().len())
                .or_default()
                .push(user.clone());
        }
        groups
    }

    /// Mean age, or [`EMPTY_AVERAGE_AGE`] when `users` is empty.
    pub fn average_age(&self, users: &[User]) -> f64 {
        trace!(users = users.len(), "average_age");
        if users.is_empty() {
            return EMPTY_AVERAGE_AGE;
        }
        let total: u64 = users.iter().map(|user| u64::from(user.age())).sum();
        total as f64 / users.len() as f64
    }

    /// The last name shared by more users than any other, provided it
    /// appears at least twice and is not tied.
    pub fn most_frequent_last_name(&self, users: &[User]) -> Option<String> {
        trace!(users = users.len(), "most_frequent_last_name");
        frequency::most_frequent_by(users, |user| user.last_name().to_string())
    }

    /// Users satisfying every predicate. No predicates keeps everyone.
    pub fn filter_by(&self, users: &[User], predicates: &[&UserPredicate<'_>]) -> Vec<User> {
        trace!(users = users.len(), predicates = predicates.len(), "filter_by");
        users
            .iter()
            .filter(|&user| predicates.iter().all(|predicate| predicate(user)))
            .cloned()
            .collect()
    }

    /// Map each user to a string and join the results with `delimiter`.
    pub fn convert_to<F>(&self, users: &[User], delimiter: &str, map_fn: F) -> String
    where
        F: FnMut(&User) -> String,
    {
        trace!(users = users.len(), delimiter, "convert_to");
        users.iter().map(map_fn).join(delimiter)
    }

    /// For each privilege, the users holding it in input order. A user
    /// appears under every privilege it holds.
    pub fn group_by_privileges(&self, users: &[User]) -> BTreeMap<Privilege, Vec<User>> {
        trace!(users = users.len(), "group_by_privileges");
        let mut groups: BTreeMap<Privilege, Vec<User>> = BTreeMap::new();
        for user in users {
            for &privilege in user.privileges() {
                groups.entry(privilege).or_default().push(user.clone());
            }
        }
        groups
    }

    /// Number of users holding each privilege. Unheld privileges are absent.
    pub fn privilege_counts(&self, users: &[User]) -> BTreeMap<Privilege, usize> {
        self.group_by_privileges(users)
            .into_iter()
            .map(|(privilege, holders)| (privilege, holders.len()))
            .collect()
    }

    pub fn last_name_counts(&self, users: &[User]) -> BTreeMap<String, usize> {
        trace!(users = users.len(), "last_name_counts");
        frequency::count_by(users, |user| user.last_name().to_string())
    }
}
