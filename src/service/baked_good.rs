//! Baked good creation, price queries and deletion.

use crate::error::{AppError, BAKERY_NOT_FOUND};
use crate::models::{BakedGoodResponse, BakedGoodWithBakery, NewBakedGood};
use sqlx::{SqliteConnection, SqlitePool};

const SELECT_WITH_BAKERY: &str = r#"
    SELECT g.id, g.name, g.price, g.bakery_id, g.created_at, g.updated_at,
           b.name AS bakery_name,
           b.created_at AS bakery_created_at,
           b.updated_at AS bakery_updated_at
    FROM baked_goods g
    JOIN bakeries b ON b.id = g.bakery_id
"#;

pub struct BakedGoodService;

impl BakedGoodService {
    /// Insert one baked good under an existing bakery. Returns the created row.
    /// A NaN or infinite price is a bad request.
    pub async fn create(
        pool: &SqlitePool,
        input: &NewBakedGood,
    ) -> Result<BakedGoodResponse, AppError> {
        if !input.price.is_finite() {
            return Err(AppError::BadRequest(format!(
                "price must be a finite number, got {}",
                input.price
            )));
        }
        let mut tx = pool.begin().await?;
        let bakery: Option<(i64,)> = sqlx::query_as("SELECT id FROM bakeries WHERE id = ?")
            .bind(input.bakery_id)
            .fetch_optional(&mut *tx)
            .await?;
        if bakery.is_none() {
            return Err(AppError::NotFound(BAKERY_NOT_FOUND));
        }

        let sql = "INSERT INTO baked_goods (name, price, bakery_id) VALUES (?, ?, ?)";
        tracing::debug!(sql = %sql, "query (tx)");
        let id = sqlx::query(sql)
            .bind(&input.name)
            .bind(input.price)
            .bind(input.bakery_id)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

        let created = fetch_one(&mut tx, id)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
        tx.commit().await?;
        tracing::info!(id, bakery_id = input.bakery_id, "baked good created");
        Ok(created)
    }

    /// All baked goods, most expensive first. Equal prices keep ascending id order.
    pub async fn list_by_price(pool: &SqlitePool) -> Result<Vec<BakedGoodResponse>, AppError> {
        let sql = format!("{} ORDER BY g.price DESC, g.id ASC", SELECT_WITH_BAKERY);
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<BakedGoodWithBakery> = sqlx::query_as(&sql).fetch_all(pool).await?;
        Ok(rows.into_iter().map(BakedGoodResponse::from).collect())
    }

    /// The baked good with the highest price; the lowest id wins a tie.
    pub async fn most_expensive(pool: &SqlitePool) -> Result<Option<BakedGoodResponse>, AppError> {
        let sql = format!("{} ORDER BY g.price DESC, g.id ASC LIMIT 1", SELECT_WITH_BAKERY);
        tracing::debug!(sql = %sql, "query");
        let row: Option<BakedGoodWithBakery> = sqlx::query_as(&sql).fetch_optional(pool).await?;
        Ok(row.map(BakedGoodResponse::from))
    }

    /// Delete by id. Returns false when no such baked good exists.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let mut tx = pool.begin().await?;
        let sql = "DELETE FROM baked_goods WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query (tx)");
        let deleted = sqlx::query(sql).bind(id).execute(&mut *tx).await?.rows_affected();
        tx.commit().await?;
        if deleted > 0 {
            tracing::info!(id, "baked good deleted");
        }
        Ok(deleted > 0)
    }
}

async fn fetch_one(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<BakedGoodResponse>, AppError> {
    let sql = format!("{} WHERE g.id = ?", SELECT_WITH_BAKERY);
    tracing::debug!(sql = %sql, id, "query");
    let row: Option<BakedGoodWithBakery> = sqlx::query_as(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row.map(BakedGoodResponse::from))
}
