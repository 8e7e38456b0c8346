//! List query output types

use super::input::{RecordId, SortDirection, MAX_QUERY_NUMBER};
use serde::{Deserialize, Serialize};

/// The filter that was actually applied, enriched with pagination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedFilter {
	pub search: Option<String>,
	/// Only set when the requested column is sortable
	pub sort: Option<String>,
	pub dir: SortDirection,
	pub page_for: Option<RecordId>,
	pub limit: u64,
	/// Resolved current page, 1-based
	pub page: u64,
	/// Number of records matching the constraint and search
	pub total: u64,
	/// `1..=N`, or `None` when everything fits on one page
	pub pages: Option<Vec<u64>>,
}

impl AppliedFilter {
	pub fn page_count(&self) -> u64 {
		page_count(self.total, self.limit)
	}

	pub fn has_pagination(&self) -> bool {
		self.pages.is_some()
	}
}

/// One page of records plus the filter that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterResult<T> {
	pub records: Vec<T>,
	pub filter: AppliedFilter,
}

impl<T> FilterResult<T> {
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

pub fn page_count(total: u64, limit: u64) -> u64 {
	total.div_ceil(limit.max(1))
}

/// Page numbers to render, suppressed when there is at most one page
pub fn page_numbers(count: u64) -> Option<Vec<u64>> {
	(count > 1).then(|| (1..=count).collect())
}

/// Clamp a requested page into `[1, count]`
pub fn clamp_page(page: Option<u64>, count: u64) -> u64 {
	page.unwrap_or(1).clamp(1, count.max(1))
}

/// Page holding the record at zero-based `index`
pub fn page_of_index(index: usize, limit: u64) -> u64 {
	index as u64 / limit.max(1) + 1
}

pub fn offset(page: u64, limit: u64) -> u64 {
	page.saturating_sub(1)
		.saturating_mul(limit)
		.min(MAX_QUERY_NUMBER)
}
