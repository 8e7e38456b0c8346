//! Listing error types

use sea_orm::DbErr;
use thiserror::Error;

/// Errors raised while listing records
#[derive(Error, Debug)]
pub enum QueryError {
	/// The record store failed or could not be reached
	#[error("Database error: {0}")]
	Database(#[from] DbErr),

	/// The tenant constraint is empty or names a column the entity does not have
	#[error("Invalid tenant constraint on {entity}: {reason}")]
	InvalidConstraint { entity: String, reason: String },

	/// A listing declaration names a column the entity does not have
	#[error("Unknown column '{column}' declared for {entity}")]
	UnknownColumn { entity: String, column: String },

	/// A listing declaration names the same column twice
	#[error("Column '{column}' declared twice for {entity}")]
	DuplicateColumn { entity: String, column: String },
}

pub type Result<T> = std::result::Result<T, QueryError>;
