//! Sorting for list queries
//!
//! Column sorts run in memory on Unicode-lowercased keys. SQLite's `LOWER()`
//! only folds ASCII, so the store is only ever asked for insertion order.

use super::{columns::Field, input::SortDirection};
use sea_orm::{EntityTrait, Iterable, PrimaryKeyToColumn, QueryOrder, Select};
use std::cmp::Ordering;

/// Compare two sort keys.
///
/// Descending swaps the operands instead of reversing the result.
pub fn compare(a: &str, b: &str, dir: SortDirection) -> Ordering {
	match dir {
		SortDirection::Asc => a.cmp(b),
		SortDirection::Desc => b.cmp(a),
	}
}

/// Stable in-memory sort on one column
pub fn sort_models<E: EntityTrait>(
	models: Vec<E::Model>,
	field: &Field<E>,
	dir: SortDirection,
) -> Vec<E::Model> {
	let mut keyed = models
		.into_iter()
		.map(|model| (field.key(&model), model))
		.collect::<Vec<_>>();

	// `sort_by` is stable, equal keys keep their load order
	keyed.sort_by(|(a, _), (b, _)| compare(a, b, dir));

	keyed.into_iter().map(|(_, model)| model).collect()
}

/// Order by primary key, which is insertion order for every listable entity
pub fn insertion_order<E: EntityTrait>(select: Select<E>) -> Select<E> {
	E::PrimaryKey::iter().fold(select, |select, key| {
		select.order_by_asc(key.into_column())
	})
}
