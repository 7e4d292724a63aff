//! PostgreSQL schema bootstrap for the archive table.
//!
//! Rows are loaded by the ingestion pipeline; this only makes sure the table
//! and the indexes the read paths rely on exist.

use anyhow::{Context, Result};
use historical_news_core::ENTRY_TABLE;
use sqlx::PgPool;

fn create_table_sql() -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {ENTRY_TABLE} (
            id BIGINT PRIMARY KEY,
            date DATE NOT NULL,
            day_month TEXT NOT NULL CHECK (day_month ~ '^[0-3][0-9]-[01][0-9]$'),
            year INTEGER NOT NULL,
            month INTEGER NOT NULL CHECK (month BETWEEN 1 AND 12),
            place TEXT,
            place_corrected TEXT,
            latitude DOUBLE PRECISION,
            longitude DOUBLE PRECISION,
            content TEXT NOT NULL DEFAULT '',
            words TEXT NOT NULL DEFAULT '[]'
        )
        "#
    )
}

/// `(index name, DDL)` for each lookup index.
fn index_sql() -> Vec<(String, String)> {
    [("day_month", "day_month, year"), ("date", "date"), ("year", "year")]
        .into_iter()
        .map(|(suffix, columns)| {
            let name = format!("idx_{ENTRY_TABLE}_{suffix}");
            let ddl = format!("CREATE INDEX IF NOT EXISTS {name} ON {ENTRY_TABLE} ({columns})");
            (name, ddl)
        })
        .collect()
}

/// Create the archive table and its lookup indexes if absent.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<()> {
    sqlx::query(&create_table_sql())
        .execute(pool)
        .await
        .with_context(|| format!("creating table {ENTRY_TABLE}"))?;

    for (name, ddl) in index_sql() {
        sqlx::query(&ddl).execute(pool).await.with_context(|| format!("creating index {name}"))?;
    }

    tracing::info!(table = ENTRY_TABLE, "archive schema ensured");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_ddl_uses_entry_table_name() {
        let sql = create_table_sql();
        assert!(sql.contains(&format!("CREATE TABLE IF NOT EXISTS {ENTRY_TABLE} (")));
    }

    #[test]
    fn indexes_target_entry_table() {
        let indexes = index_sql();
        assert_eq!(indexes.len(), 3);
        assert_eq!(indexes[0].0, "idx_data_day_month");
        assert_eq!(
            indexes[0].1,
            "CREATE INDEX IF NOT EXISTS idx_data_day_month ON data (day_month, year)"
        );
        assert!(indexes.iter().all(|(_, ddl)| ddl.contains(&format!(" ON {ENTRY_TABLE} ("))));
    }
}
