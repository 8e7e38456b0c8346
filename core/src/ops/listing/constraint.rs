//! Tenant constraints

use super::error::{QueryError, Result};
use sea_orm::{ColumnTrait, Condition, EntityTrait, IdenStatic, Value};
use std::str::FromStr;

/// Equality filter isolating one owner's records from everyone else's.
///
/// Column names are resolved against the listed entity when the query runs,
/// so an empty constraint or one naming a foreign column is rejected instead
/// of silently widening the result set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TenantConstraint {
	clauses: Vec<(String, Value)>,
}

impl TenantConstraint {
	pub fn new() -> Self {
		Self::default()
	}

	/// Shorthand for the common single-key constraint
	pub fn by(column: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::new().and(column, value)
	}

	pub fn and(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
		self.clauses.push((column.into(), value.into()));
		self
	}

	pub fn is_empty(&self) -> bool {
		self.clauses.is_empty()
	}

	pub fn clauses(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.clauses.iter().map(|(column, value)| (column.as_str(), value))
	}

	/// Resolve the constraint into a condition on `E`.
	pub fn condition<E: EntityTrait>(&self) -> Result<Condition> {
		let entity = E::default();

		if self.clauses.is_empty() {
			return Err(QueryError::InvalidConstraint {
				entity: entity.as_str().to_string(),
				reason: "no tenant columns given".to_string(),
			});
		}

		self.clauses
			.iter()
			.try_fold(Condition::all(), |condition, (name, value)| {
				let column =
					E::Column::from_str(name).map_err(|_| QueryError::InvalidConstraint {
						entity: entity.as_str().to_string(),
						reason: format!("unknown column '{name}'"),
					})?;

				Ok(condition.add(column.eq(value.clone())))
			})
	}
}
