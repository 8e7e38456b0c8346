use anyhow::Result;
use cm_core::config::AppConfig;
use comfy_table::{presets::UTF8_BORDERS_ONLY, Table};

use crate::OutputFormat;

pub fn run(config: &AppConfig, format: OutputFormat) -> Result<()> {
	match format {
		OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
		OutputFormat::Human => {
			let db = &config.database;

			let mut table = Table::new();
			table.load_preset(UTF8_BORDERS_ONLY);
			table.set_header(vec!["Key", "Value"]);

			table.add_row(vec!["version".to_string(), config.version.to_string()]);
			table.add_row(vec![
				"data_dir".to_string(),
				config.data_dir.display().to_string(),
			]);
			table.add_row(vec!["log_level".to_string(), config.log_level.clone()]);
			table.add_row(vec!["database.file_name".to_string(), db.file_name.clone()]);
			table.add_row(vec![
				"database.max_connections".to_string(),
				db.max_connections.to_string(),
			]);
			table.add_row(vec![
				"database.min_connections".to_string(),
				db.min_connections.to_string(),
			]);
			table.add_row(vec![
				"database.connect_timeout_secs".to_string(),
				db.connect_timeout_secs.to_string(),
			]);
			table.add_row(vec![
				"database.sqlx_logging".to_string(),
				db.sqlx_logging.to_string(),
			]);

			println!("{}", table);
			println!();
			println!("Database file: {}", config.database_path().display());
		}
	}

	Ok(())
}
