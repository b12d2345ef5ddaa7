//! Synthetic record generators and the bundled student dataset.
//!
//! # Responsibility
//! - Build user and article records, filling absent fields with fake data.
//! - Load the static student dataset compiled into the crate.
//!
//! # Invariants
//! - Generators never touch the database.
//! - With a seeded RNG and fixed overrides, output is deterministic except
//!   for a defaulted `created_at`.

pub mod dataset;

use crate::model::{Article, ArticleType, Department, User};
use fake::faker::lorem::en::Words;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use mongodb::bson::DateTime;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub use dataset::{parse_students, students, DatasetError, DatasetResult};

const ARTICLE_NAME_WORDS: usize = 3;
const ARTICLE_DESCRIPTION_WORDS: usize = 10;

/// Caller-supplied user fields; `department` has no default.
#[derive(Debug, Clone, PartialEq)]
pub struct UserOverrides {
    pub department: Department,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: Option<DateTime>,
}

impl UserOverrides {
    pub fn new(department: Department) -> Self {
        Self {
            department,
            first_name: None,
            last_name: None,
            created_at: None,
        }
    }
}

/// Caller-supplied article fields; `kind` has no default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleOverrides {
    pub kind: ArticleType,
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl ArticleOverrides {
    pub fn new(kind: ArticleType) -> Self {
        Self {
            kind,
            name: None,
            description: None,
            tags: None,
        }
    }
}

/// Builds a user, generating any name that was not supplied.
///
/// A missing `created_at` becomes the current time.
pub fn generate_user<R: Rng + ?Sized>(overrides: UserOverrides, rng: &mut R) -> User {
    User {
        id: None,
        first_name: overrides
            .first_name
            .unwrap_or_else(|| random_first_name(rng)),
        last_name: overrides
            .last_name
            .unwrap_or_else(|| LastName().fake_with_rng(rng)),
        department: overrides.department,
        created_at: overrides.created_at.unwrap_or_else(DateTime::now),
    }
}

/// Builds an article, generating lorem text for a missing name or
/// description. Missing tags default to an empty list.
pub fn generate_article<R: Rng + ?Sized>(overrides: ArticleOverrides, rng: &mut R) -> Article {
    Article {
        id: None,
        name: overrides
            .name
            .unwrap_or_else(|| lorem_words(ARTICLE_NAME_WORDS, rng)),
        description: overrides
            .description
            .unwrap_or_else(|| lorem_words(ARTICLE_DESCRIPTION_WORDS, rng)),
        kind: overrides.kind,
        tags: overrides.tags.unwrap_or_default(),
    }
}

/// Returns one random first name.
pub fn random_first_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    FirstName().fake_with_rng(rng)
}

/// Returns exactly `count` lorem words joined by single spaces.
pub fn lorem_words<R: Rng + ?Sized>(count: usize, rng: &mut R) -> String {
    let words: Vec<String> = Words(count..count + 1).fake_with_rng(rng);
    words.join(" ")
}

/// RNG for a run: reproducible when `seed` is set, entropy-seeded otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
