//! Company entity
//!
//! Top-level Bordermine tenant, owned by the user that registered it.

use crate::ops::listing::{ColumnTableBuilder, Listable};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company")]
pub struct Model {
	#[sea_orm(primary_key)]
	pub id: i32,

	#[sea_orm(indexed)]
	pub owner_id: i32,

	pub name: String,
	pub email: Option<String>,
	pub city: Option<String>,

	pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(has_many = "super::client::Entity")]
	Clients,

	#[sea_orm(has_many = "super::manifest::Entity")]
	Manifests,
}

impl Related<super::client::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Clients.def()
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
			.both("city", |m| m.city.clone())
			.searchable("email", |m| m.email.clone())
	}
}
