//! Seeds MongoDB with synthetic users, articles and students, then runs a
//! fixed tour of CRUD and aggregation queries against them.

pub mod app;
pub mod config;
pub mod db;
pub mod fixtures;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;

pub use app::{run, AppError, AppResult};
pub use config::{AppConfig, ConfigError};
pub use db::{reset_collections, Collections, Connection, DbError, DbResult};
pub use fixtures::{
    generate_article, generate_user, random_first_name, seeded_rng, ArticleOverrides,
    DatasetError, UserOverrides,
};
pub use logging::{default_log_level, flush_logging, init_logging, logging_status};
pub use model::{Article, ArticleType, Department, Score, ScoreType, Student, User};
pub use repo::{
    ArticleRepository, RepoError, RepoResult, StudentRepository, UpdateSummary, UserRepository,
};
pub use service::{ExampleOutcome, ExampleOutput, ExampleStatus, RunReport, Showcase};
