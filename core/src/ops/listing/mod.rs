//! Generic list views: tenant-scoped filtering, search, sorting and pagination
//!
//! Every list page in the application goes through [`ListQuery::filter`]. The
//! tenant constraint is always applied first, client-supplied filter values
//! that don't parse or don't name a declared column are ignored, and the
//! result carries the resolved page plus the page numbers to render.

pub mod catalog;
pub mod columns;
pub mod constraint;
pub mod error;
pub mod input;
pub mod output;
pub mod query;
pub mod sorting;

pub use catalog::{EntityKind, ListingCatalog};
pub use columns::{ColumnTable, ColumnTableBuilder, Listable, DEFAULT_PAGE_LIMIT};
pub use constraint::TenantConstraint;
pub use error::QueryError;
pub use input::{FilterRequest, RecordId, SortDirection, MAX_QUERY_NUMBER};
pub use output::{AppliedFilter, FilterResult};
pub use query::ListQuery;
