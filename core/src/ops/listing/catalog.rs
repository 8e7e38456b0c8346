//! Startup-validated list queries for every listable entity

use super::{
	constraint::TenantConstraint, error::QueryError, input::FilterRequest, output::FilterResult,
	query::ListQuery,
};
use crate::{
	common::Result,
	infra::db::entities::{
		Activity, Client, Company, Course, Manifest, Objective, ShippingItem, VocabularyWord,
	},
};
use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::info;

/// Every entity that has a list view
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
	Course,
	VocabularyWord,
	Objective,
	Activity,
	Company,
	Client,
	Manifest,
	ShippingItem,
}

impl EntityKind {
	/// Column that ties a record to its owner
	pub fn tenant_column(self) -> &'static str {
		match self {
			Self::Course | Self::Company => "owner_id",
			Self::VocabularyWord | Self::Objective | Self::Activity => "course_id",
			Self::Client | Self::Manifest => "company_id",
			Self::ShippingItem => "manifest_id",
		}
	}
}

pub struct ListingCatalog {
	pub courses: ListQuery<Course>,
	pub vocabulary: ListQuery<VocabularyWord>,
	pub objectives: ListQuery<Objective>,
	pub activities: ListQuery<Activity>,
	pub companies: ListQuery<Company>,
	pub clients: ListQuery<Client>,
	pub manifests: ListQuery<Manifest>,
	pub shipping_items: ListQuery<ShippingItem>,
}

impl ListingCatalog {
	/// Build every entity's column table, failing on the first bad declaration
	pub fn build() -> std::result::Result<Self, QueryError> {
		let catalog = Self {
			courses: ListQuery::new()?,
			vocabulary: ListQuery::new()?,
			objectives: ListQuery::new()?,
			activities: ListQuery::new()?,
			companies: ListQuery::new()?,
			clients: ListQuery::new()?,
			manifests: ListQuery::new()?,
			shipping_items: ListQuery::new()?,
		};

		info!(
			entities = EntityKind::iter().count(),
			"Validated listing declarations"
		);

		Ok(catalog)
	}

	pub fn sortable_columns(&self, kind: EntityKind) -> Vec<&'static str> {
		match kind {
			EntityKind::Course => self.courses.columns().sortable_names().collect(),
			EntityKind::VocabularyWord => self.vocabulary.columns().sortable_names().collect(),
			EntityKind::Objective => self.objectives.columns().sortable_names().collect(),
			EntityKind::Activity => self.activities.columns().sortable_names().collect(),
			EntityKind::Company => self.companies.columns().sortable_names().collect(),
			EntityKind::Client => self.clients.columns().sortable_names().collect(),
			EntityKind::Manifest => self.manifests.columns().sortable_names().collect(),
			EntityKind::ShippingItem => self.shipping_items.columns().sortable_names().collect(),
		}
	}

	/// List any entity by kind, with records rendered as JSON objects
	pub async fn list_json<C>(
		&self,
		kind: EntityKind,
		db: &C,
		tenant: &TenantConstraint,
		request: &FilterRequest,
	) -> Result<FilterResult<serde_json::Value>>
	where
		C: ConnectionTrait,
	{
		match kind {
			EntityKind::Course => to_json(self.courses.filter(db, tenant, request).await?),
			EntityKind::VocabularyWord => {
				to_json(self.vocabulary.filter(db, tenant, request).await?)
			}
			EntityKind::Objective => to_json(self.objectives.filter(db, tenant, request).await?),
			EntityKind::Activity => to_json(self.activities.filter(db, tenant, request).await?),
			EntityKind::Company => to_json(self.companies.filter(db, tenant, request).await?),
			EntityKind::Client => to_json(self.clients.filter(db, tenant, request).await?),
			EntityKind::Manifest => to_json(self.manifests.filter(db, tenant, request).await?),
			EntityKind::ShippingItem => {
				to_json(self.shipping_items.filter(db, tenant, request).await?)
			}
		}
	}
}

fn to_json<T: Serialize>(result: FilterResult<T>) -> Result<FilterResult<serde_json::Value>> {
	let records = result
		.records
		.iter()
		.map(serde_json::to_value)
		.collect::<std::result::Result<Vec<_>, _>>()?;

	Ok(FilterResult {
		records,
		filter: result.filter,
	})
}
