//! Sample data for local development.

use crate::error::AppError;
use sqlx::SqlitePool;

const SAMPLE: &[(&str, &[(&str, f64)])] = &[
    (
        "Delightful donuts",
        &[("Chocolate dipped donut", 2.75), ("Apple-spice filled donut", 3.50)],
    ),
    (
        "Incredible crullers",
        &[("Glazed honey cruller", 3.25), ("Chocolate cruller", 100.0)],
    ),
    ("Bread and butter", &[("Sourdough loaf", 6.00)]),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub bakeries: u64,
    pub baked_goods: u64,
}

/// Insert the sample bakeries and their baked goods, unless any bakery already exists.
pub async fn seed_database(pool: &SqlitePool) -> Result<SeedReport, AppError> {
    let mut tx = pool.begin().await?;
    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bakeries")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        tracing::info!(existing, "bakeries already present, skipping seed");
        return Ok(SeedReport::default());
    }

    let mut report = SeedReport::default();
    for (bakery_name, goods) in SAMPLE {
        let bakery_id = sqlx::query("INSERT INTO bakeries (name) VALUES (?)")
            .bind(*bakery_name)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();
        report.bakeries += 1;
        for (name, price) in goods.iter() {
            sqlx::query("INSERT INTO baked_goods (name, price, bakery_id) VALUES (?, ?, ?)")
                .bind(*name)
                .bind(*price)
                .bind(bakery_id)
                .execute(&mut *tx)
                .await?;
            report.baked_goods += 1;
        }
    }
    tx.commit().await?;
    tracing::info!(bakeries = report.bakeries, baked_goods = report.baked_goods, "database seeded");
    Ok(report)
}
