//! Client entity
//!
//! A customer of a company. Manifests are shipped on a client's behalf.

use crate::ops::listing::{ColumnTableBuilder, Listable};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "client")]
pub struct Model {
	#[sea_orm(primary_key)]
	pub id: i32,

	#[sea_orm(indexed)]
	pub company_id: i32,

	pub name: String,
	pub contact_name: Option<String>,
	pub email: Option<String>,

	pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(
		belongs_to = "super::company::Entity",
		from = "Column::CompanyId",
		to = "super::company::Column::Id",
		on_delete = "Cascade"
	)]
	Company,

	#[sea_orm(has_many = "super::manifest::Entity")]
	Manifests,
}

impl Related<super::company::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Company.def()
	}
}

impl Related<super::manifest::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Manifests.def()
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
			.both("contact_name", |m| m.contact_name.clone())
			.searchable("email", |m| m.email.clone())
	}
}
