//! Classmine core
//!
//! Course, vocabulary, objective and activity records for teachers, plus the
//! Bordermine company, client, manifest and shipping item records, all
//! listed through one tenant-scoped filtering service.

pub mod common;
pub mod config;
pub mod infra;
pub mod ops;

pub use common::{CoreError, Result};
pub use infra::db::Database;
pub use ops::listing::{
	FilterRequest, FilterResult, ListQuery, ListingCatalog, QueryError, TenantConstraint,
};
