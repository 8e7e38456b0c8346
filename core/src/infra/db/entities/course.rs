//! Course entity
//!
//! Courses belong to the teacher that created them (`owner_id`).

use crate::ops::listing::{ColumnTableBuilder, Listable};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course")]
pub struct Model {
	#[sea_orm(primary_key)]
	pub id: i32,

	#[sea_orm(indexed)]
	pub owner_id: i32,

	pub name: String,
	pub code: Option<String>,
	pub description: Option<String>,

	pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(has_many = "super::vocabulary_word::Entity")]
	VocabularyWords,

	#[sea_orm(has_many = "super::objective::Entity")]
	Objectives,

	#[sea_orm(has_many = "super::activity::Entity")]
	Activities,
}

impl Related<super::vocabulary_word::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::VocabularyWords.def()
	}
}

impl Related<super::objective::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Objectives.def()
	}
}

impl Related<super::activity::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Activities.def()
	}
}

impl ActiveModelBehavior for ActiveModel {
	fn new() -> Self {
		Self {
			created_at: Set(chrono::Utc::now()),
			..ActiveModelTrait::default()
		}
	}
}

impl Listable for Entity {
	fn columns(table: ColumnTableBuilder<Self>) -> ColumnTableBuilder<Self> {
		table
			.both("name", |m| Some(m.name.clone()))
			.both("code", |m| m.code.clone())
			.searchable("description", |m| m.description.clone())
	}
}
