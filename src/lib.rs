//! PostgreSQL `CREATE SCHEMA`, `DROP SCHEMA`, `GRANT` and `REVOKE` statement
//! rendering, with a small runner that executes the statements through `sqlx`.
//!
//! ```
//! use pgddl::StatementBuilder;
//!
//! let builder = StatementBuilder::new();
//! assert_eq!(
//!     builder.build_grant("t1", "role1", "table", "SELECT,INSERT").unwrap(),
//!     r#"GRANT SELECT,INSERT ON TABLE "t1" TO GROUP role1"#
//! );
//! ```

pub mod builder;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod migration;
pub mod progress;
pub mod render;
pub mod validation;

pub use builder::StatementBuilder;
pub use error::StatementError;
