//! Filter request for list views

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Primary key type shared by every listable entity
pub type RecordId = i32;

/// Largest page or limit handed to the store, which binds them as `i64`
pub const MAX_QUERY_NUMBER: u64 = i64::MAX as u64;

/// Sort direction
#[derive(
	Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortDirection {
	#[default]
	Asc,
	Desc,
}

/// What a list view asked for.
///
/// Built fresh for every request and never mutated afterwards. Fields that
/// were missing or could not be parsed are `None`, which the listing service
/// treats as "no preference".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRequest {
	pub search: Option<String>,
	pub sort: Option<String>,
	pub dir: Option<SortDirection>,
	pub page: Option<u64>,
	pub limit: Option<u64>,
	/// Locate the page holding this record instead of using `page`
	pub page_for: Option<RecordId>,
}

impl FilterRequest {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn search(mut self, search: impl Into<String>) -> Self {
		self.search = Some(search.into());
		self
	}

	pub fn sort(mut self, column: impl Into<String>, dir: SortDirection) -> Self {
		self.sort = Some(column.into());
		self.dir = Some(dir);
		self
	}

	pub fn page(mut self, page: u64) -> Self {
		self.page = Some(page);
		self
	}

	pub fn limit(mut self, limit: u64) -> Self {
		self.limit = Some(limit);
		self
	}

	pub fn page_for(mut self, id: RecordId) -> Self {
		self.page_for = Some(id);
		self
	}

	/// Build a request from raw query-string pairs.
	///
	/// Never fails: unknown keys are ignored and values that don't parse
	/// cleanly are dropped.
	pub fn from_query<I, K, V>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: AsRef<str>,
	{
		let mut request = Self::default();

		for (key, value) in pairs {
			let value = value.as_ref().trim();
			match key.as_ref() {
				"search" => request.search = non_blank(value),
				"sort" => request.sort = non_blank(value),
				"dir" => request.dir = value.parse().ok(),
				"page" => request.page = positive(value),
				"limit" => request.limit = positive(value),
				"pageFor" | "page_for" => {
					request.page_for = value.parse::<RecordId>().ok().filter(|id| *id > 0)
				}
				_ => {}
			}
		}

		request
	}

	/// The search needle, if searching is actually requested
	pub fn search_term(&self) -> Option<&str> {
		self.search.as_deref().filter(|s| !s.trim().is_empty())
	}

	pub fn direction(&self) -> SortDirection {
		self.dir.unwrap_or_default()
	}

	/// Requested limit, or `default` when absent or zero
	pub fn effective_limit(&self, default: u64) -> u64 {
		self.limit
			.filter(|limit| *limit > 0)
			.unwrap_or(default)
			.clamp(1, MAX_QUERY_NUMBER)
	}
}

fn non_blank(value: &str) -> Option<String> {
	(!value.is_empty()).then(|| value.to_owned())
}

fn positive(value: &str) -> Option<u64> {
	value
		.parse::<u64>()
		.ok()
		.filter(|n| *n > 0)
		.map(|n| n.min(MAX_QUERY_NUMBER))
}
