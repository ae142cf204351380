use super::{BakedGood, BakedGoodSummary};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One row of `bakeries`.
#[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Bakery {
    pub id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// Bakery as embedded in a baked good: no nested goods.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BakerySummary {
    pub id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl From<&Bakery> for BakerySummary {
    fn from(b: &Bakery) -> Self {
        Self {
            id: b.id,
            name: b.name.clone(),
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

/// Response body of `GET /bakeries`, `GET /bakeries/:id` and `PATCH /bakeries/:id`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BakeryResponse {
    pub id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
    pub baked_goods: Vec<BakedGoodSummary>,
}

impl BakeryResponse {
    pub fn new(bakery: Bakery, baked_goods: Vec<BakedGood>) -> Self {
        Self {
            id: bakery.id,
            name: bakery.name,
            created_at: bakery.created_at,
            updated_at: bakery.updated_at,
            baked_goods: baked_goods.into_iter().map(BakedGoodSummary::from).collect(),
        }
    }
}

/// Form body of `PATCH /bakeries/:id`. An absent `name` leaves the row unchanged.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BakeryUpdate {
    pub name: Option<String>,
}
