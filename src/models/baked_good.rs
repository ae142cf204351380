use super::BakerySummary;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One row of `baked_goods`.
#[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct BakedGood {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub bakery_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// A `baked_goods` row joined with the columns of its bakery.
#[derive(Clone, Debug, sqlx::FromRow)]
pub struct BakedGoodWithBakery {
    #[sqlx(flatten)]
    pub good: BakedGood,
    pub bakery_name: String,
    pub bakery_created_at: NaiveDateTime,
    pub bakery_updated_at: Option<NaiveDateTime>,
}

/// Baked good as listed inside its bakery: no back-reference.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BakedGoodSummary {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub bakery_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl From<BakedGood> for BakedGoodSummary {
    fn from(g: BakedGood) -> Self {
        Self {
            id: g.id,
            name: g.name,
            price: g.price,
            bakery_id: g.bakery_id,
            created_at: g.created_at,
            updated_at: g.updated_at,
        }
    }
}

/// Response body of the `/baked_goods` endpoints and of `POST /bakeries`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BakedGoodResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub bakery_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
    pub bakery: BakerySummary,
}

impl From<BakedGoodWithBakery> for BakedGoodResponse {
    fn from(row: BakedGoodWithBakery) -> Self {
        let g = row.good;
        Self {
            bakery: BakerySummary {
                id: g.bakery_id,
                name: row.bakery_name,
                created_at: row.bakery_created_at,
                updated_at: row.bakery_updated_at,
            },
            id: g.id,
            name: g.name,
            price: g.price,
            bakery_id: g.bakery_id,
            created_at: g.created_at,
            updated_at: g.updated_at,
        }
    }
}

/// Form body of `POST /bakeries`.
#[derive(Clone, Debug, Deserialize)]
pub struct NewBakedGood {
    pub name: String,
    pub price: f64,
    pub bakery_id: i64,
}
