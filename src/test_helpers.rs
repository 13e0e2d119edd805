//! Fixture records for tests and downstream experimentation.
//!
//! Compiled for this crate's own tests, and for dependents when the
//! `test-helpers` feature is enabled.

use std::fmt;

use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;

use crate::relation::EagerSet;

/// A related record with a natural display form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: Uuid,
    pub label: String,
}

impl Tag {
    pub fn new(label: impl Into<String>) -> Self {
        Tag {
            id: Uuid::new_v4(),
            label: label.into(),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// A related record with no `Display` of its own; columns must supply a
/// transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Person {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// `"First Last"`, the usual transform target.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An eager accessor over tags with the given labels.
pub fn tag_set(labels: &[&str]) -> EagerSet<Tag> {
    EagerSet::new(labels.iter().map(|label| Tag::new(*label)).collect())
}

/// `count` people with generated names, deterministic per `seed`.
pub fn people(count: usize, seed: u64) -> Vec<Person> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let first: String = FirstName().fake_with_rng(&mut rng);
            let last: String = LastName().fake_with_rng(&mut rng);
            Person::new(first, last)
        })
        .collect()
}
