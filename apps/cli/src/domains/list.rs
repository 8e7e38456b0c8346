use anyhow::{Context, Result};
use clap::Args;
use cm_core::{
	config::AppConfig,
	infra::db::Database,
	ops::listing::{
		EntityKind, FilterRequest, FilterResult, ListingCatalog, RecordId, SortDirection,
		TenantConstraint,
	},
};
use comfy_table::{presets::UTF8_BORDERS_ONLY, Table};
use serde_json::Value;
use tracing::debug;

use crate::OutputFormat;

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
	/// Entity to list (e.g. "course", "vocabulary_word", "manifest")
	pub entity: EntityKind,

	/// Owner constraint as column=value; repeat to AND several together
	#[arg(long, value_parser = parse_tenant, required = true)]
	pub tenant: Vec<(String, i32)>,

	/// Case-insensitive substring to look for in searchable columns
	#[arg(long)]
	pub search: Option<String>,

	/// Sortable column to order by
	#[arg(long)]
	pub sort: Option<String>,

	/// Sort direction (asc or desc)
	#[arg(long)]
	pub dir: Option<SortDirection>,

	/// 1-based page number
	#[arg(long)]
	pub page: Option<u64>,

	/// Records per page
	#[arg(long)]
	pub limit: Option<u64>,

	/// Jump to the page holding this record
	#[arg(long)]
	pub page_for: Option<RecordId>,
}

impl ListArgs {
	fn constraint(&self) -> TenantConstraint {
		self.tenant
			.iter()
			.fold(TenantConstraint::new(), |constraint, (column, value)| {
				constraint.and(column.clone(), *value)
			})
	}

	fn request(&self) -> FilterRequest {
		FilterRequest {
			search: self.search.clone(),
			sort: self.sort.clone(),
			dir: self.dir,
			page: self.page,
			limit: self.limit,
			page_for: self.page_for,
		}
	}
}

pub async fn run(config: &AppConfig, format: OutputFormat, args: ListArgs) -> Result<()> {
	let catalog = ListingCatalog::build()?;
	let db = Database::open(&config.database_path(), &config.database)
		.await
		.context("Failed to open the classmine database")?;

	debug!(entity = %args.entity, tenant = ?args.tenant, "Listing records");

	let result = catalog
		.list_json(args.entity, db.conn(), &args.constraint(), &args.request())
		.await?;

	match format {
		OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
		OutputFormat::Human => print_table(args.entity, &result),
	}

	Ok(())
}

fn print_table(entity: EntityKind, result: &FilterResult<Value>) {
	if result.is_empty() {
		println!("No {entity} records found");
		return;
	}

	let columns = result
		.records
		.first()
		.and_then(Value::as_object)
		.map(|object| object.keys().cloned().collect::<Vec<_>>())
		.unwrap_or_default();

	let mut table = Table::new();
	table.load_preset(UTF8_BORDERS_ONLY);
	table.set_header(columns.clone());

	for record in &result.records {
		table.add_row(columns.iter().map(|column| cell(&record[column])));
	}

	println!("{}", table);

	let filter = &result.filter;
	println!(
		"Page {} of {} ({} records)",
		filter.page,
		filter.page_count().max(1),
		filter.total
	);
}

fn cell(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

fn parse_tenant(raw: &str) -> Result<(String, i32), String> {
	let (column, value) = raw
		.split_once('=')
		.ok_or_else(|| format!("expected column=value, got {raw:?}"))?;

	let column = column.trim();
	if column.is_empty() {
		return Err("tenant column is empty".to_string());
	}

	let value = value
		.trim()
		.parse()
		.map_err(|e| format!("invalid tenant id {value:?}: {e}"))?;

	Ok((column.to_string(), value))
}
