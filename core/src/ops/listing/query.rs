//! List query execution

use super::{
	columns::{ColumnTable, Field, Listable},
	constraint::TenantConstraint,
	error::Result,
	input::{FilterRequest, RecordId, SortDirection},
	output::{
		clamp_page, offset, page_count, page_numbers, page_of_index, AppliedFilter, FilterResult,
	},
	sorting::{insertion_order, sort_models},
};
use sea_orm::{
	Condition, ConnectionTrait, EntityTrait, IdenStatic, Iterable, LoaderTrait, ModelTrait,
	PaginatorTrait, PrimaryKeyToColumn, QueryFilter, QuerySelect, Related, Value,
};
use tracing::{debug, warn};

/// Filter, search, sort and paginate the records of one entity.
///
/// Holds the entity's validated column table and nothing else, so one
/// instance can serve every request for that entity.
pub struct ListQuery<E: Listable> {
	columns: ColumnTable<E>,
}

/// A single page as resolved by one of the two execution paths
struct Page<M> {
	records: Vec<M>,
	page: u64,
	total: u64,
}

impl<E> ListQuery<E>
where
	E: Listable,
	E::Model: Sync,
{
	/// Build the query from the entity's own declarations
	pub fn new() -> Result<Self> {
		Ok(Self::with_columns(E::column_table()?))
	}

	pub fn with_columns(columns: ColumnTable<E>) -> Self {
		Self { columns }
	}

	pub fn columns(&self) -> &ColumnTable<E> {
		&self.columns
	}

	/// List one page of `E` records owned by `tenant`.
	///
	/// Without a search term, `page_for` or a sortable column only the
	/// requested page is read from the store, after counting matches there.
	/// Otherwise the whole tenant set is loaded once and searched, sorted and
	/// sliced in memory. Sorting only ever happens in memory, so every request
	/// case-folds values the same way, accented letters included.
	pub async fn filter<C>(
		&self,
		db: &C,
		tenant: &TenantConstraint,
		request: &FilterRequest,
	) -> Result<FilterResult<E::Model>>
	where
		C: ConnectionTrait,
	{
		let entity = E::default();
		let condition = tenant.condition::<E>()?;
		let limit = request.effective_limit(self.columns.default_limit());
		let dir = request.direction();
		let sort = self.sort_field(request);

		let Page {
			records,
			page,
			total,
		} = if request.search_term().is_none() && request.page_for.is_none() && sort.is_none() {
			self.fetch_page(db, condition, request.page, limit).await?
		} else {
			self.fetch_all(db, condition, sort, dir, request, limit)
				.await?
		};

		let count = page_count(total, limit);

		debug!(
			entity = entity.as_str(),
			total,
			page,
			pages = count,
			returned = records.len(),
			"Listed records"
		);

		Ok(FilterResult {
			records,
			filter: AppliedFilter {
				search: request.search_term().map(str::to_string),
				sort: sort.map(|field| field.name.to_string()),
				dir,
				page_for: request.page_for,
				limit,
				page,
				total,
				pages: page_numbers(count),
			},
		})
	}

	/// [`Self::filter`], then load the has-many relation `R` for the page
	pub async fn filter_with_related<R, C>(
		&self,
		db: &C,
		tenant: &TenantConstraint,
		request: &FilterRequest,
	) -> Result<FilterResult<(E::Model, Vec<R::Model>)>>
	where
		C: ConnectionTrait,
		R: EntityTrait,
		R::Model: Send + Sync,
		E: Related<R>,
	{
		let FilterResult { records, filter } = self.filter(db, tenant, request).await?;
		let related: Vec<Vec<R::Model>> = records.load_many(R::default(), db).await?;

		Ok(FilterResult {
			records: records.into_iter().zip(related).collect(),
			filter,
		})
	}

	/// [`Self::filter`], then load the belongs-to relation `R` for the page
	pub async fn filter_with_parent<R, C>(
		&self,
		db: &C,
		tenant: &TenantConstraint,
		request: &FilterRequest,
	) -> Result<FilterResult<(E::Model, Option<R::Model>)>>
	where
		C: ConnectionTrait,
		R: EntityTrait,
		R::Model: Send + Sync,
		E: Related<R>,
	{
		let FilterResult { records, filter } = self.filter(db, tenant, request).await?;
		let parents: Vec<Option<R::Model>> = records.load_one(R::default(), db).await?;

		Ok(FilterResult {
			records: records.into_iter().zip(parents).collect(),
			filter,
		})
	}

	fn sort_field(&self, request: &FilterRequest) -> Option<&Field<E>> {
		let name = request.sort.as_deref()?;
		let field = self.columns.sortable(name);

		if field.is_none() {
			let entity = E::default();
			warn!(
				entity = entity.as_str(),
				column = name,
				"Ignoring sort on a column that isn't sortable"
			);
		}

		field
	}

	async fn fetch_page<C: ConnectionTrait>(
		&self,
		db: &C,
		condition: Condition,
		requested: Option<u64>,
		limit: u64,
	) -> Result<Page<E::Model>> {
		let total = E::find().filter(condition.clone()).count(db).await?;
		let page = clamp_page(requested, page_count(total, limit));

		let records = insertion_order(E::find().filter(condition))
			.offset(offset(page, limit))
			.limit(limit)
			.all(db)
			.await?;

		Ok(Page {
			records,
			page,
			total,
		})
	}

	async fn fetch_all<C: ConnectionTrait>(
		&self,
		db: &C,
		condition: Condition,
		sort: Option<&Field<E>>,
		dir: SortDirection,
		request: &FilterRequest,
		limit: u64,
	) -> Result<Page<E::Model>> {
		let mut models = insertion_order(E::find().filter(condition)).all(db).await?;

		if let Some(term) = request.search_term() {
			let needle = term.to_lowercase();
			models.retain(|model| self.columns.matches(model, &needle));
		}

		if let Some(field) = sort {
			models = sort_models(models, field, dir);
		}

		let total = models.len() as u64;
		let located = request
			.page_for
			.and_then(|id| models.iter().position(|model| is_record::<E>(model, id)));

		let page = match located {
			Some(index) => page_of_index(index, limit),
			None => clamp_page(request.page, page_count(total, limit)),
		};

		let records = models
			.into_iter()
			.skip(offset(page, limit) as usize)
			.take(limit as usize)
			.collect();

		Ok(Page {
			records,
			page,
			total,
		})
	}
}

fn is_record<E: EntityTrait>(model: &E::Model, id: RecordId) -> bool {
	E::PrimaryKey::iter()
		.next()
		.is_some_and(|key| model.get(key.into_column()) == Value::from(id))
}
