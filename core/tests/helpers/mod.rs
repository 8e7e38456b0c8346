//! Test helpers for listing integration tests
//!
//! Each harness owns a fresh SQLite file in a temporary directory with every
//! table created straight from the entity definitions.

#![allow(dead_code)]

use cm_core::{
	config::DatabaseConfig,
	infra::db::{
		entities::{
			activity, client, company, course, manifest, objective, shipping_item,
			vocabulary_word,
		},
		Database,
	},
};
use sea_orm::{
	ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr,
	EntityTrait, Schema, Set,
};
use tempfile::TempDir;

pub struct ListingHarness {
	_dir: TempDir,
	pub db: Database,
}

impl ListingHarness {
	pub async fn new() -> anyhow::Result<Self> {
		let dir = TempDir::new()?;
		let config = DatabaseConfig {
			max_connections: 1,
			..Default::default()
		};

		let db = Database::create(&dir.path().join("classmine.db"), &config).await?;

		let conn = db.conn();
		create_table(conn, course::Entity).await?;
		create_table(conn, vocabulary_word::Entity).await?;
		create_table(conn, objective::Entity).await?;
		create_table(conn, activity::Entity).await?;
		create_table(conn, company::Entity).await?;
		create_table(conn, client::Entity).await?;
		create_table(conn, manifest::Entity).await?;
		create_table(conn, shipping_item::Entity).await?;

		Ok(Self { _dir: dir, db })
	}

	pub fn conn(&self) -> &DatabaseConnection {
		self.db.conn()
	}

	pub async fn course(&self, id: i32, owner_id: i32) -> Result<course::Model, DbErr> {
		course::ActiveModel {
			id: Set(id),
			owner_id: Set(owner_id),
			name: Set(format!("Course {id}")),
			..course::ActiveModel::new()
		}
		.insert(self.conn())
		.await
	}

	pub async fn word(
		&self,
		course_id: i32,
		word: &str,
		description: Option<&str>,
	) -> Result<vocabulary_word::Model, DbErr> {
		vocabulary_word::ActiveModel {
			course_id: Set(course_id),
			word: Set(word.to_string()),
			description: Set(description.map(str::to_string)),
			..vocabulary_word::ActiveModel::new()
		}
		.insert(self.conn())
		.await
	}

	pub async fn objective(
		&self,
		course_id: i32,
		title: &str,
		description: Option<&str>,
	) -> Result<objective::Model, DbErr> {
		objective::ActiveModel {
			course_id: Set(course_id),
			title: Set(title.to_string()),
			description: Set(description.map(str::to_string)),
			..objective::ActiveModel::new()
		}
		.insert(self.conn())
		.await
	}

	pub async fn company(&self, owner_id: i32, name: &str) -> Result<company::Model, DbErr> {
		company::ActiveModel {
			owner_id: Set(owner_id),
			name: Set(name.to_string()),
			..company::ActiveModel::new()
		}
		.insert(self.conn())
		.await
	}

	pub async fn client(&self, company_id: i32, name: &str) -> Result<client::Model, DbErr> {
		client::ActiveModel {
			company_id: Set(company_id),
			name: Set(name.to_string()),
			..client::ActiveModel::new()
		}
		.insert(self.conn())
		.await
	}

	pub async fn manifest(
		&self,
		company_id: i32,
		client_id: i32,
		reference: &str,
	) -> Result<manifest::Model, DbErr> {
		manifest::ActiveModel {
			company_id: Set(company_id),
			client_id: Set(client_id),
			reference: Set(reference.to_string()),
			..manifest::ActiveModel::new()
		}
		.insert(self.conn())
		.await
	}

	/// Course `course_id` (owned by user 1) with `count` words named "word 01", "word 02", ...
	pub async fn numbered_words(&self, course_id: i32, count: usize) -> anyhow::Result<Vec<i32>> {
		self.course(course_id, 1).await?;

		let mut ids = Vec::with_capacity(count);
		for n in 1..=count {
			ids.push(self.word(course_id, &format!("word {n:02}"), None).await?.id);
		}

		Ok(ids)
	}
}

async fn create_table<E: EntityTrait>(conn: &DatabaseConnection, entity: E) -> Result<(), DbErr> {
	let backend = conn.get_database_backend();
	let schema = Schema::new(backend);

	conn.execute(backend.build(&schema.create_table_from_entity(entity)))
		.await?;

	Ok(())
}
