//! Shipping item entity
//!
//! A declared line on a manifest.

use crate::ops::listing::{ColumnTableBuilder, Listable};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shipping_item")]
pub struct Model {
	#[sea_orm(primary_key)]
	pub id: i32,

	#[sea_orm(indexed)]
	pub manifest_id: i32,

	pub description: String,
	pub sku: Option<String>,
	/// ISO 3166-1 alpha-2
	pub origin_country: Option<String>,
	pub quantity: i32,

	pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(
		belongs_to = "super::manifest::Entity",
		from = "Column::ManifestId",
		to = "super::manifest::Column::Id",
		on_delete = "Cascade"
	)]
	Manifest,
}

impl Related<super::manifest::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Manifest.def()
	}
}

impl ActiveModelBehavior for ActiveModel {
	fn new() -> Self {
		Self {
			quantity: Set(1),
			created_at: Set(chrono::Utc::now()),
			..ActiveModelTrait::default()
		}
	}
}

impl Listable for Entity {
	fn columns(table: ColumnTableBuilder<Self>) -> ColumnTableBuilder<Self> {
		table
			.both("description", |m| Some(m.description.clone()))
			.both("sku", |m| m.sku.clone())
			.searchable("origin_country", |m| m.origin_country.clone())
	}
}
