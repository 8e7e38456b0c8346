//! Learning objective entity

use crate::ops::listing::{ColumnTableBuilder, Listable};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "objective")]
pub struct Model {
	#[sea_orm(primary_key)]
	pub id: i32,

	#[sea_orm(indexed)]
	pub course_id: i32,

	/// Short curriculum reference, e.g. "LO 2.3"
	pub code: Option<String>,
	pub title: String,
	pub description: Option<String>,

	pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(
		belongs_to = "super::course::Entity",
		from = "Column::CourseId",
		to = "super::course::Column::Id",
		on_delete = "Cascade"
	)]
	Course,
}

impl Related<super::course::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Course.def()
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
			.both("code", |m| m.code.clone())
			.both("title", |m| Some(m.title.clone()))
			.searchable("description", |m| m.description.clone())
	}
}
