//! Bakery reads and the name update.

use crate::error::AppError;
use crate::models::{BakedGood, Bakery, BakeryResponse};
use sqlx::{SqliteConnection, SqlitePool};
use std::collections::HashMap;

const SELECT_BAKERY: &str = "SELECT id, name, created_at, updated_at FROM bakeries";
const SELECT_BAKED_GOOD: &str =
    "SELECT id, name, price, bakery_id, created_at, updated_at FROM baked_goods";

pub struct BakeryService;

impl BakeryService {
    /// Every bakery (ascending id) with its baked goods. Goods are batch-loaded in one query.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<BakeryResponse>, AppError> {
        let mut conn = pool.acquire().await?;
        let sql = format!("{} ORDER BY id", SELECT_BAKERY);
        tracing::debug!(sql = %sql, "query");
        let bakeries: Vec<Bakery> = sqlx::query_as(&sql).fetch_all(&mut *conn).await?;

        let sql = format!("{} ORDER BY id", SELECT_BAKED_GOOD);
        tracing::debug!(sql = %sql, "query");
        let goods: Vec<BakedGood> = sqlx::query_as(&sql).fetch_all(&mut *conn).await?;

        let mut by_bakery: HashMap<i64, Vec<BakedGood>> = HashMap::new();
        for g in goods {
            by_bakery.entry(g.bakery_id).or_default().push(g);
        }
        Ok(bakeries
            .into_iter()
            .map(|b| {
                let goods = by_bakery.remove(&b.id).unwrap_or_default();
                BakeryResponse::new(b, goods)
            })
            .collect())
    }

    /// One bakery by id with its baked goods, or None.
    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<BakeryResponse>, AppError> {
        let mut conn = pool.acquire().await?;
        load(&mut conn, id).await
    }

    /// Overwrite the name when `name` is Some; None leaves the row as is.
    /// Returns the bakery after the update, or None when it does not exist.
    pub async fn update_name(
        pool: &SqlitePool,
        id: i64,
        name: Option<&str>,
    ) -> Result<Option<BakeryResponse>, AppError> {
        let mut tx = pool.begin().await?;
        if let Some(name) = name {
            let sql = "UPDATE bakeries SET name = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?";
            tracing::debug!(sql = %sql, id, "query (tx)");
            let updated = sqlx::query(sql)
                .bind(name)
                .bind(id)
                .execute(&mut *tx)
                .await?
                .rows_affected();
            if updated == 0 {
                return Ok(None);
            }
            tracing::info!(id, name, "bakery renamed");
        }
        let bakery = load(&mut tx, id).await?;
        tx.commit().await?;
        Ok(bakery)
    }
}

async fn load(conn: &mut SqliteConnection, id: i64) -> Result<Option<BakeryResponse>, AppError> {
    let sql = format!("{} WHERE id = ?", SELECT_BAKERY);
    tracing::debug!(sql = %sql, id, "query");
    let bakery: Option<Bakery> = sqlx::query_as(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    let Some(bakery) = bakery else {
        return Ok(None);
    };

    let sql = format!("{} WHERE bakery_id = ? ORDER BY id", SELECT_BAKED_GOOD);
    tracing::debug!(sql = %sql, bakery_id = id, "query");
    let goods: Vec<BakedGood> = sqlx::query_as(&sql)
        .bind(id)
        .fetch_all(&mut *conn)
        .await?;
    Ok(Some(BakeryResponse::new(bakery, goods)))
}
