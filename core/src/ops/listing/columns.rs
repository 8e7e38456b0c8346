//! Per-entity column tables
//!
//! Every listable entity declares which of its columns may be sorted on and
//! which are matched by free-text search, each paired with an accessor that
//! reads the value off a loaded model. Names are resolved against the
//! entity's schema when the table is built, so a typo in a declaration fails
//! at startup rather than on the first request that hits it.

use super::error::{QueryError, Result};
use sea_orm::{EntityTrait, IdenStatic};
use std::str::FromStr;

/// Page size used when an entity doesn't declare its own
pub const DEFAULT_PAGE_LIMIT: u64 = 10;

/// Reads a column's value off a loaded model
pub type Accessor<E> = fn(&<E as EntityTrait>::Model) -> Option<String>;

pub struct Field<E: EntityTrait> {
	pub name: &'static str,
	pub col: E::Column,
	pub get: Accessor<E>,
}

impl<E: EntityTrait> Clone for Field<E> {
	fn clone(&self) -> Self {
		Self {
			name: self.name,
			col: self.col,
			get: self.get,
		}
	}
}

impl<E: EntityTrait> Field<E> {
	/// Lower-cased value, with absent values reading as the empty string
	pub fn key(&self, model: &E::Model) -> String {
		(self.get)(model).unwrap_or_default().to_lowercase()
	}
}

/// An entity that can be listed through [`super::ListQuery`]
pub trait Listable: EntityTrait {
	/// Declare the sortable and searchable columns of this entity
	fn columns(table: ColumnTableBuilder<Self>) -> ColumnTableBuilder<Self>;

	/// Build and validate this entity's column table
	fn column_table() -> Result<ColumnTable<Self>> {
		Self::columns(ColumnTable::builder()).build()
	}
}

/// Validated column declarations for one entity
pub struct ColumnTable<E: EntityTrait> {
	sortable: Vec<Field<E>>,
	searchable: Vec<Field<E>>,
	default_limit: u64,
}

impl<E: EntityTrait> ColumnTable<E> {
	pub fn builder() -> ColumnTableBuilder<E> {
		ColumnTableBuilder {
			sortable: Vec::new(),
			searchable: Vec::new(),
			default_limit: DEFAULT_PAGE_LIMIT,
		}
	}

	pub fn sortable(&self, name: &str) -> Option<&Field<E>> {
		self.sortable.iter().find(|field| field.name == name)
	}

	pub fn searchable(&self) -> &[Field<E>] {
		&self.searchable
	}

	pub fn sortable_names(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.sortable.iter().map(|field| field.name)
	}

	pub fn default_limit(&self) -> u64 {
		self.default_limit
	}

	/// Whether `needle` (already lower-cased) occurs in any searchable column
	pub fn matches(&self, model: &E::Model, needle: &str) -> bool {
		self.searchable
			.iter()
			.any(|field| field.key(model).contains(needle))
	}
}

pub struct ColumnTableBuilder<E: EntityTrait> {
	sortable: Vec<(&'static str, Accessor<E>)>,
	searchable: Vec<(&'static str, Accessor<E>)>,
	default_limit: u64,
}

impl<E: EntityTrait> ColumnTableBuilder<E> {
	pub fn sortable(mut self, name: &'static str, get: Accessor<E>) -> Self {
		self.sortable.push((name, get));
		self
	}

	pub fn searchable(mut self, name: &'static str, get: Accessor<E>) -> Self {
		self.searchable.push((name, get));
		self
	}

	/// Shorthand for a column that is both sortable and searchable
	pub fn both(self, name: &'static str, get: Accessor<E>) -> Self {
		self.sortable(name, get).searchable(name, get)
	}

	pub fn default_limit(mut self, limit: u64) -> Self {
		self.default_limit = limit.max(1);
		self
	}

	pub fn build(self) -> Result<ColumnTable<E>> {
		Ok(ColumnTable {
			sortable: resolve::<E>(self.sortable)?,
			searchable: resolve::<E>(self.searchable)?,
			default_limit: self.default_limit,
		})
	}
}

fn resolve<E: EntityTrait>(declared: Vec<(&'static str, Accessor<E>)>) -> Result<Vec<Field<E>>> {
	let entity = E::default();
	let mut fields: Vec<Field<E>> = Vec::with_capacity(declared.len());

	for (name, get) in declared {
		if fields.iter().any(|field| field.name == name) {
			return Err(QueryError::DuplicateColumn {
				entity: entity.as_str().to_string(),
				column: name.to_string(),
			});
		}

		let col = E::Column::from_str(name).map_err(|_| QueryError::UnknownColumn {
			entity: entity.as_str().to_string(),
			column: name.to_string(),
		})?;

		fields.push(Field { name, col, get });
	}

	Ok(fields)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::infra::db::entities::vocabulary_word::{self, Entity as VocabularyWord};

	fn word(word: &str, description: Option<&str>) -> vocabulary_word::Model {
		vocabulary_word::Model {
			id: 1,
			course_id: 1,
			word: word.to_string(),
			definition: None,
			description: description.map(str::to_string),
			part_of_speech: None,
			created_at: chrono::Utc::now(),
		}
	}

	#[test]
	fn declared_tables_resolve() {
		let table = VocabularyWord::column_table().unwrap();

		assert!(table.sortable("word").is_some());
		assert!(table.sortable("description").is_none());
		assert_eq!(table.default_limit(), DEFAULT_PAGE_LIMIT);
	}

	#[test]
	fn unknown_column_is_rejected() {
		let err = ColumnTable::<VocabularyWord>::builder()
			.sortable("spelling", |m| Some(m.word.clone()))
			.build()
			.err()
			.unwrap();

		assert!(matches!(err, QueryError::UnknownColumn { ref column, .. } if column == "spelling"));
	}

	#[test]
	fn duplicate_column_is_rejected() {
		let err = ColumnTable::<VocabularyWord>::builder()
			.searchable("word", |m| Some(m.word.clone()))
			.searchable("word", |m| Some(m.word.clone()))
			.build()
			.err()
			.unwrap();

		assert!(matches!(err, QueryError::DuplicateColumn { .. }));
	}

	#[test]
	fn search_matches_any_column_case_insensitively() {
		let table = VocabularyWord::column_table().unwrap();

		assert!(table.matches(&word("Photo", None), "photo"));
		assert!(table.matches(&word("Camera", Some("A PHOTO device")), "photo"));
		assert!(!table.matches(&word("Tree", None), "photo"));
	}
}
