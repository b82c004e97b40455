//! Generic single-table persistence
//!
//! Every write is a single statement on a single row, so no transactions are
//! used. Ids come from SQLite `AUTOINCREMENT` and are never reused.

use ccnotes_common::{Error, Result};
use chrono::NaiveDate;
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Sqlite, SqlitePool};
use std::marker::PhantomData;
use tracing::{debug, info};

/// A value for one mutable column, in `Record::COLUMNS` order
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(Option<i64>),
    Date(Option<NaiveDate>),
}

/// Table description for one entity type
pub trait Record: Sized + Send + Sync + Unpin + 'static {
    /// Full set of mutable fields written by create and update
    type Fields: Send + Sync + 'static;

    const TABLE: &'static str;

    /// Lower-case noun for messages, e.g. "note"
    const KIND: &'static str;

    /// Mutable columns, matching the order of [`Record::values`]
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> i64;

    fn values(fields: &Self::Fields) -> Vec<FieldValue>;

    fn from_row(row: &SqliteRow) -> sqlx::Result<Self>;
}

/// Row ordering for multi-row reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    /// Ascending id (insertion order)
    Id,
    /// Newest first; equal timestamps fall back to id descending
    Latest,
}

impl ListOrder {
    fn sql(self) -> &'static str {
        match self {
            ListOrder::Id => "id ASC",
            ListOrder::Latest => "created_at DESC, id DESC",
        }
    }
}

/// Persistence for one entity type
pub struct RecordStore<T> {
    pool: SqlitePool,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for RecordStore<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: Record> RecordStore<T> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }

    /// Insert a new row and return its id
    pub async fn create(&self, fields: &T::Fields) -> Result<i64> {
        let placeholders = vec!["?"; T::COLUMNS.len() + 1].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}, created_at) VALUES ({})",
            T::TABLE,
            T::COLUMNS.join(", "),
            placeholders
        );

        let query = bind_values(sqlx::query(&sql), T::values(fields)).bind(ccnotes_common::time::now());
        let id = query.execute(&self.pool).await?.last_insert_rowid();

        info!("Created {} {}", T::KIND, id);
        Ok(id)
    }

    pub async fn get(&self, id: i64) -> Result<T> {
        let sql = format!("SELECT * FROM {} WHERE id = ?", T::TABLE);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::not_found(T::KIND, id))?;

        Ok(T::from_row(&row)?)
    }

    pub async fn get_all(&self, order: ListOrder) -> Result<Vec<T>> {
        let sql = format!("SELECT * FROM {} ORDER BY {}", T::TABLE, order.sql());
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        debug!("Fetched {} {} rows", rows.len(), T::KIND);
        decode_rows(&rows)
    }

    /// The `n` most recent rows, newest first
    pub async fn get_latest(&self, n: u32) -> Result<Vec<T>> {
        let sql = format!(
            "SELECT * FROM {} ORDER BY {} LIMIT ?",
            T::TABLE,
            ListOrder::Latest.sql()
        );
        let rows = sqlx::query(&sql)
            .bind(i64::from(n))
            .fetch_all(&self.pool)
            .await?;

        decode_rows(&rows)
    }

    /// Replace every mutable field of an existing row
    pub async fn update(&self, id: i64, fields: &T::Fields) -> Result<()> {
        let assignments = T::COLUMNS
            .iter()
            .map(|column| format!("{} = ?", column))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("UPDATE {} SET {} WHERE id = ?", T::TABLE, assignments);

        let result = bind_values(sqlx::query(&sql), T::values(fields))
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::not_found(T::KIND, id));
        }

        info!("Updated {} {}", T::KIND, id);
        Ok(())
    }

    /// Hard delete; rows referencing this one are left as they are
    pub async fn delete(&self, id: i64) -> Result<()> {
        let sql = format!("DELETE FROM {} WHERE id = ?", T::TABLE);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(Error::not_found(T::KIND, id));
        }

        info!("Deleted {} {}", T::KIND, id);
        Ok(())
    }

    pub async fn exists(&self, id: i64) -> Result<bool> {
        let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = ?)", T::TABLE);
        let exists: bool = sqlx::query_scalar(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    pub async fn count(&self) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", T::TABLE);
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }
}

fn bind_values<'q>(
    mut query: Query<'q, Sqlite, SqliteArguments<'q>>,
    values: Vec<FieldValue>,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    for value in values {
        query = match value {
            FieldValue::Text(text) => query.bind(text),
            FieldValue::Integer(number) => query.bind(number),
            FieldValue::Date(date) => query.bind(date),
        };
    }
    query
}

fn decode_rows<T: Record>(rows: &[SqliteRow]) -> Result<Vec<T>> {
    rows.iter()
        .map(|row| T::from_row(row).map_err(Error::from))
        .collect()
}
