use crate::core::product_display::StatsType;
use crate::core::query::{wire_enum, Filter, FilterOperator, QueryParams};
use crate::domain::model::{DisplayResponse, Envelope};
use crate::domain::ports::ConversationsRequest;
use crate::domain::statistics::{ProductStatistics, StatisticsResult};
use crate::utils::error::{ConversationsError, Result};
use std::fmt;
use std::str::FromStr;

/// The statistics endpoint accepts at most this many product ids per call.
pub const MAX_PRODUCT_IDS: usize = 100;

wire_enum! {
    pub enum BulkRatingsFilter {
        ContentLocale => "ContentLocale",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BulkRatingsStats {
    Reviews,
    NativeReviews,
    All,
}

impl BulkRatingsStats {
    pub fn stats_types(&self) -> &'static [StatsType] {
        match self {
            BulkRatingsStats::Reviews => &[StatsType::Reviews],
            BulkRatingsStats::NativeReviews => &[StatsType::NativeReviews],
            BulkRatingsStats::All => &[StatsType::NativeReviews, StatsType::Reviews],
        }
    }
}

impl fmt::Display for BulkRatingsStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.stats_types().iter().map(StatsType::as_str).collect();
        f.write_str(&names.join(","))
    }
}

impl FromStr for BulkRatingsStats {
    type Err = ConversationsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reviews" => Ok(BulkRatingsStats::Reviews),
            "nativereviews" => Ok(BulkRatingsStats::NativeReviews),
            "all" => Ok(BulkRatingsStats::All),
            other => Err(ConversationsError::validation(format!(
                "unknown statistics '{}', expected reviews, nativereviews or all",
                other
            ))),
        }
    }
}

pub type BulkRatingsResponse = DisplayResponse<ProductStatistics>;

/// Aggregate rating statistics for many products in one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkRatingsRequest {
    product_ids: Vec<String>,
    stats: BulkRatingsStats,
    filters: Vec<Filter>,
}

impl BulkRatingsRequest {
    pub fn new<I, S>(product_ids: I, stats: BulkRatingsStats) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            product_ids: product_ids.into_iter().map(Into::into).collect(),
            stats,
            filters: Vec::new(),
        }
    }

    pub fn product_ids(&self) -> &[String] {
        &self.product_ids
    }

    pub fn add_filter<I, V>(mut self, filter: BulkRatingsFilter, operator: FilterOperator, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.filters.push(Filter::new(filter.as_str(), operator, values));
        self
    }
}

impl ConversationsRequest for BulkRatingsRequest {
    type Item = StatisticsResult;
    type Response = BulkRatingsResponse;

    fn endpoint(&self) -> &'static str {
        "statistics.json"
    }

    fn validate(&self) -> Result<()> {
        if self.product_ids.is_empty() {
            return Err(ConversationsError::validation(
                "at least one product id is required",
            ));
        }
        if self.product_ids.len() > MAX_PRODUCT_IDS {
            return Err(ConversationsError::TooManyProducts {
                count: self.product_ids.len(),
                max: MAX_PRODUCT_IDS,
            });
        }
        if self.product_ids.iter().any(|id| id.trim().is_empty()) {
            return Err(ConversationsError::validation("product ids cannot be empty"));
        }
        Ok(())
    }

    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_filters(
            "Filter",
            &[Filter::new(
                "ProductId",
                FilterOperator::EqualTo,
                self.product_ids.iter().map(String::as_str),
            )],
        );
        params.push_filters("Filter", &self.filters);
        params.push("Stats", self.stats);
        params
    }

    fn build_response(&self, envelope: Envelope<StatisticsResult>) -> BulkRatingsResponse {
        let (results, _, page) = envelope.into_parts();
        let stats = results
            .into_iter()
            .map(|result| result.product_statistics)
            .collect();
        DisplayResponse::new(stats, page)
    }
}
