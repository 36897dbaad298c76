use crate::domain::de::{keyed_values, null_default};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReviewStatistics {
    pub average_overall_rating: Option<f64>,
    #[serde(default, deserialize_with = "null_default")]
    pub total_review_count: u32,
    pub overall_rating_range: Option<u32>,
    #[serde(default, deserialize_with = "null_default")]
    pub rating_distribution: Vec<RatingDistribution>,
    pub recommended_count: Option<u32>,
    pub not_recommended_count: Option<u32>,
    pub featured_review_count: Option<u32>,
    pub ratings_only_review_count: Option<u32>,
    pub helpful_vote_count: Option<u32>,
    pub not_helpful_vote_count: Option<u32>,
    pub first_submission_time: Option<DateTime<FixedOffset>>,
    pub last_submission_time: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "keyed_values")]
    pub secondary_ratings_averages: Vec<SecondaryRatingAverage>,
}

impl ReviewStatistics {
    /// Share of recommending reviewers among those who answered, in `0.0..=1.0`.
    pub fn recommended_ratio(&self) -> Option<f64> {
        let yes = self.recommended_count?;
        let total = yes + self.not_recommended_count.unwrap_or(0);
        if total == 0 {
            return None;
        }
        Some(f64::from(yes) / f64::from(total))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RatingDistribution {
    pub rating_value: u32,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SecondaryRatingAverage {
    pub id: String,
    pub average_rating: Option<f64>,
    pub value_range: Option<u32>,
    pub display_type: Option<String>,
    pub min_label: Option<String>,
    pub max_label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QaStatistics {
    #[serde(default, deserialize_with = "null_default")]
    pub total_question_count: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub total_answer_count: u32,
    pub featured_question_count: Option<u32>,
    pub featured_answer_count: Option<u32>,
    pub question_helpful_vote_count: Option<u32>,
    pub question_not_helpful_vote_count: Option<u32>,
    pub answer_helpful_vote_count: Option<u32>,
    pub answer_not_helpful_vote_count: Option<u32>,
    pub first_question_time: Option<DateTime<FixedOffset>>,
    pub last_question_time: Option<DateTime<FixedOffset>>,
    pub first_answer_time: Option<DateTime<FixedOffset>>,
    pub last_answer_time: Option<DateTime<FixedOffset>>,
}

/// Aggregate statistics for one product, as returned by the bulk ratings endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductStatistics {
    pub product_id: String,
    pub review_statistics: Option<ReviewStatistics>,
    pub native_review_statistics: Option<ReviewStatistics>,
}

/// 統計端點的每筆結果都多包一層 `ProductStatistics`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatisticsResult {
    pub product_statistics: ProductStatistics,
}
