//! Database infrastructure using SeaORM

use crate::config::DatabaseConfig;
use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection, DbErr};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod entities;

/// Database wrapper for Classmine
pub struct Database {
	/// SeaORM database connection
	conn: DatabaseConnection,
}

impl Database {
	/// Create a new database at the specified path
	pub async fn create(path: &Path, config: &DatabaseConfig) -> Result<Self, DbErr> {
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent)
				.map_err(|e| DbErr::Custom(format!("Failed to create directory: {e}")))?;
		}

		let conn = connect(format!("sqlite://{}?mode=rwc", path.display()), config).await?;

		info!("Created new database at {:?}", path);

		Ok(Self { conn })
	}

	/// Open an existing database
	pub async fn open(path: &Path, config: &DatabaseConfig) -> Result<Self, DbErr> {
		if !path.exists() {
			return Err(DbErr::Custom(format!(
				"Database does not exist: {}",
				path.display()
			)));
		}

		let conn = connect(format!("sqlite://{}", path.display()), config).await?;

		info!("Opened database at {:?}", path);

		Ok(Self { conn })
	}

	/// Get the database connection
	pub fn conn(&self) -> &DatabaseConnection {
		&self.conn
	}
}

async fn connect(url: String, config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
	let mut opt = ConnectOptions::new(url);
	opt.max_connections(config.max_connections)
		.min_connections(config.min_connections)
		.connect_timeout(Duration::from_secs(config.connect_timeout_secs))
		.sqlx_logging(config.sqlx_logging);

	SeaDatabase::connect(opt).await
}
