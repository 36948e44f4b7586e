use serde::{Deserialize, Serialize};

/// A movie record from the API.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    pub runtime_in_minutes: i64,

    pub budget_in_millions: f64,

    pub box_office_revenue_in_millions: f64,

    pub academy_award_nominations: i64,

    pub academy_award_wins: i64,

    pub rotten_tomatoes_score: f64,
}
