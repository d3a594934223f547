#![allow(dead_code)]

use std::fs;

use tracing_subscriber::EnvFilter;
use userquery::{Privilege, User};

const FIXTURE_PATH: &str = "tests/fixtures/users.json";

/// Route library logs to the test output. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn fixture_users() -> Vec<User> {
    let raw = fs::read_to_string(FIXTURE_PATH).unwrap();
    serde_json::from_str(&raw).unwrap()
}

pub fn user(first: &str, last: &str, age: u32, privileges: &[Privilege]) -> User {
    User::new(first, last, age, privileges.iter().copied()).unwrap()
}

pub fn first_names(users: &[User]) -> Vec<&str> {
    users.iter().map(|u| u.first_name()).collect()
}
