//! PostgreSQL adapter for the store ports.
//!
//! Statements mirror the two-relation layout: `pool` and `salary`, with a
//! cascading foreign key from `salary.pool_id` to `pool.pool_id`. Every
//! statement runs under the configured operation deadline; on expiry the
//! caller sees `StoreError::Timeout`, never partial data.

use crate::ports::{EntryStore, PoolStore};
use async_trait::async_trait;
use shared_types::{
    validate_pool_params, AccessToken, Frequency, Pool, PoolId, RemoteLevel, SalaryEntry,
    SalaryFields, StoreError,
};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;
use tracing::error;

const CREATE_POOL_TABLE: &str = "\
create table if not exists pool (
  pool_id serial primary key,
  public_token varchar(32) not null unique,
  reveal_token varchar(32) not null,
  name varchar(140) not null,
  minsize smallint not null
)";

const CREATE_SALARY_TABLE: &str = "\
create table if not exists salary (
  salary_id serial primary key,
  amount int not null,
  hourswk smallint not null,
  overtime varchar(9) not null,
  overtimepaid bool not null,
  remote varchar(7) not null,
  title varchar(100) not null,
  yearsexperience smallint not null,
  travel varchar(9) not null,
  pool_id integer not null,
  constraint salary_pool_id foreign key (pool_id)
    references pool (pool_id)
    on update cascade on delete cascade
)";

/// Store ports backed by a shared `PgPool`.
///
/// The pool handle is the only shared resource; it is safe for concurrent
/// use and `PgStores` holds no other state.
#[derive(Clone)]
pub struct PgStores {
    pool: PgPool,
    op_deadline: Duration,
}

impl PgStores {
    pub fn new(pool: PgPool, op_deadline: Duration) -> Self {
        Self { pool, op_deadline }
    }

    /// Create the two relations if they do not exist. Idempotent.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        self.with_deadline(sqlx::query(CREATE_POOL_TABLE).execute(&self.pool))
            .await?;
        self.with_deadline(sqlx::query(CREATE_SALARY_TABLE).execute(&self.pool))
            .await?;
        Ok(())
    }

    /// Run one statement under the operation deadline.
    async fn with_deadline<T>(
        &self,
        fut: impl Future<Output = Result<T, sqlx::Error>>,
    ) -> Result<T, StoreError> {
        match timeout(self.op_deadline, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => {
                error!(error = %err, "database operation failed");
                Err(StoreError::Database(err.to_string()))
            }
            Err(_) => Err(StoreError::Timeout),
        }
    }
}

#[async_trait]
impl PoolStore for PgStores {
    async fn create_pool(&self, name: &str, min_size: i16) -> Result<Pool, StoreError> {
        validate_pool_params(name, min_size)?;
        let (public_token, reveal_token) = AccessToken::generate_distinct_pair();

        let row = self
            .with_deadline(
                sqlx::query(
                    "insert into pool (public_token, reveal_token, name, minsize) \
                     values ($1, $2, $3, $4) returning pool_id",
                )
                .bind(public_token.to_string())
                .bind(reveal_token.to_string())
                .bind(name)
                .bind(min_size)
                .fetch_one(&self.pool),
            )
            .await?;
        let id: i32 = row.try_get("pool_id").map_err(column_error)?;

        Ok(Pool {
            id: PoolId(id),
            public_token,
            reveal_token,
            name: name.to_string(),
            min_size,
        })
    }

    async fn pool_by_public_token(&self, token: &AccessToken) -> Result<Pool, StoreError> {
        let row = self
            .with_deadline(
                sqlx::query(
                    "select pool_id, public_token, reveal_token, name, minsize \
                     from pool where public_token = $1",
                )
                .bind(token.to_string())
                .fetch_optional(&self.pool),
            )
            .await?;

        match row {
            Some(row) => pool_from_row(&row),
            None => Err(StoreError::PoolNotFound),
        }
    }
}

#[async_trait]
impl EntryStore for PgStores {
    async fn count_entries(&self, pool: PoolId) -> Result<i64, StoreError> {
        let row = self
            .with_deadline(
                sqlx::query("select count(*) from salary where pool_id = $1")
                    .bind(pool.0)
                    .fetch_one(&self.pool),
            )
            .await?;
        row.try_get(0).map_err(column_error)
    }

    async fn insert_entry(&self, pool: PoolId, fields: &SalaryFields) -> Result<(), StoreError> {
        fields.validate()?;
        self.with_deadline(
            sqlx::query(
                "insert into salary \
                 (amount, hourswk, overtime, overtimepaid, remote, title, \
                  yearsexperience, travel, pool_id) \
                 values ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
            )
            .bind(fields.amount)
            .bind(fields.hours_per_week)
            .bind(fields.overtime.as_str())
            .bind(fields.overtime_paid)
            .bind(fields.remote.as_str())
            .bind(&fields.title)
            .bind(fields.years_experience)
            .bind(fields.travel.as_str())
            .bind(pool.0)
            .execute(&self.pool),
        )
        .await?;
        Ok(())
    }

    async fn list_entries(&self, pool: PoolId) -> Result<Vec<SalaryEntry>, StoreError> {
        let rows = self
            .with_deadline(
                sqlx::query(
                    "select amount, hourswk, overtime, overtimepaid, remote, title, \
                     yearsexperience, travel from salary where pool_id = $1 \
                     order by title asc, amount desc",
                )
                .bind(pool.0)
                .fetch_all(&self.pool),
            )
            .await?;

        rows.iter().map(|row| entry_from_row(pool, row)).collect()
    }
}

fn pool_from_row(row: &PgRow) -> Result<Pool, StoreError> {
    let id: i32 = row.try_get("pool_id").map_err(column_error)?;
    let public: String = row.try_get("public_token").map_err(column_error)?;
    let reveal: String = row.try_get("reveal_token").map_err(column_error)?;
    let name: String = row.try_get("name").map_err(column_error)?;
    let min_size: i16 = row.try_get("minsize").map_err(column_error)?;

    Ok(Pool {
        id: PoolId(id),
        public_token: parse_stored_token(&public)?,
        reveal_token: parse_stored_token(&reveal)?,
        name,
        min_size,
    })
}

fn entry_from_row(pool: PoolId, row: &PgRow) -> Result<SalaryEntry, StoreError> {
    let overtime: String = row.try_get("overtime").map_err(column_error)?;
    let remote: String = row.try_get("remote").map_err(column_error)?;
    let travel: String = row.try_get("travel").map_err(column_error)?;

    Ok(SalaryEntry {
        pool_id: pool,
        fields: SalaryFields {
            amount: row.try_get("amount").map_err(column_error)?,
            hours_per_week: row.try_get("hourswk").map_err(column_error)?,
            overtime: Frequency::parse("overtime", &overtime).map_err(stored_value_error)?,
            overtime_paid: row.try_get("overtimepaid").map_err(column_error)?,
            remote: RemoteLevel::parse("remote", &remote).map_err(stored_value_error)?,
            title: row.try_get("title").map_err(column_error)?,
            years_experience: row.try_get("yearsexperience").map_err(column_error)?,
            travel: Frequency::parse("travel", &travel).map_err(stored_value_error)?,
        },
    })
}

fn column_error(err: sqlx::Error) -> StoreError {
    error!(error = %err, "unexpected row shape");
    StoreError::Database(err.to_string())
}

/// A stored value the typed boundary should have made unrepresentable.
fn stored_value_error(err: shared_types::ValidationError) -> StoreError {
    error!(error = %err, "stored value outside its fixed set");
    StoreError::Database(format!("corrupt stored value: {err}"))
}

fn parse_stored_token(raw: &str) -> Result<AccessToken, StoreError> {
    AccessToken::parse(raw).map_err(|_| {
        error!("stored token is malformed");
        StoreError::Database("stored token is malformed".to_string())
    })
}
