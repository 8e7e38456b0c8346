//! Shipping manifest entity

use crate::ops::listing::{ColumnTableBuilder, Listable};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "manifest")]
pub struct Model {
	#[sea_orm(primary_key)]
	pub id: i32,

	#[sea_orm(indexed)]
	pub company_id: i32,

	#[sea_orm(indexed)]
	pub client_id: i32,

	pub reference: String,
	/// "draft", "submitted", "cleared" or "held"
	pub status: String,
	pub carrier: Option<String>,
	pub notes: Option<String>,

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

	#[sea_orm(
		belongs_to = "super::client::Entity",
		from = "Column::ClientId",
		to = "super::client::Column::Id",
		on_delete = "Cascade"
	)]
	Client,

	#[sea_orm(has_many = "super::shipping_item::Entity")]
	ShippingItems,
}

impl Related<super::company::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Company.def()
	}
}

impl Related<super::client::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Client.def()
	}
}

impl Related<super::shipping_item::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::ShippingItems.def()
	}
}

impl ActiveModelBehavior for ActiveModel {
	fn new() -> Self {
		Self {
			status: Set("draft".to_owned()),
			created_at: Set(chrono::Utc::now()),
			..ActiveModelTrait::default()
		}
	}
}

impl Listable for Entity {
	fn columns(table: ColumnTableBuilder<Self>) -> ColumnTableBuilder<Self> {
		table
			.both("reference", |m| Some(m.reference.clone()))
			.sortable("status", |m| Some(m.status.clone()))
			.both("carrier", |m| m.carrier.clone())
			.searchable("notes", |m| m.notes.clone())
	}
}
