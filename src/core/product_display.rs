use crate::core::query::{wire_enum, Filter, FilterOperator, QueryParams, Sort, SortOrder};
use crate::core::questions::{QuestionFilter, QuestionSort};
use crate::core::reviews::{ReviewFilter, ReviewSort};
use crate::domain::model::Envelope;
use crate::domain::ports::ConversationsRequest;
use crate::domain::product::Product;
use crate::utils::error::Result;
use crate::utils::validation::{require_identifier, require_range};
use serde::Serialize;

pub const MAX_INCLUDED_LIMIT: u32 = 20;

wire_enum! {
    /// Content that can be embedded next to a product.
    pub enum ProductContent {
        Reviews => "Reviews",
        Questions => "Questions",
        Answers => "Answers",
    }
}

wire_enum! {
    pub enum StatsType {
        Reviews => "Reviews",
        NativeReviews => "NativeReviews",
        Questions => "Questions",
        Answers => "Answers",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDisplayPageResponse {
    /// `None` when the product id is unknown to the API.
    pub result: Option<Product>,
    pub locale: Option<String>,
}

/// Everything a product page needs in one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDisplayPageRequest {
    product_id: String,
    includes: Vec<(ProductContent, u32)>,
    stats: Vec<StatsType>,
    review_sorts: Vec<Sort>,
    question_sorts: Vec<Sort>,
    review_filters: Vec<Filter>,
    question_filters: Vec<Filter>,
}

impl ProductDisplayPageRequest {
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            includes: Vec::new(),
            stats: Vec::new(),
            review_sorts: Vec::new(),
            question_sorts: Vec::new(),
            review_filters: Vec::new(),
            question_filters: Vec::new(),
        }
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Embeds up to `limit` items of `content`. A repeated content type keeps
    /// its first position and takes the latest limit.
    pub fn include_content(mut self, content: ProductContent, limit: u32) -> Self {
        match self.includes.iter_mut().find(|(existing, _)| *existing == content) {
            Some(entry) => entry.1 = limit,
            None => self.includes.push((content, limit)),
        }
        self
    }

    pub fn include_statistics(mut self, stats: StatsType) -> Self {
        if !self.stats.contains(&stats) {
            self.stats.push(stats);
        }
        self
    }

    pub fn sort_included_reviews(mut self, sort: ReviewSort, order: SortOrder) -> Self {
        self.review_sorts.push(Sort::new(sort.as_str(), order));
        self
    }

    pub fn sort_included_questions(mut self, sort: QuestionSort, order: SortOrder) -> Self {
        self.question_sorts.push(Sort::new(sort.as_str(), order));
        self
    }

    /// Narrows the embedded reviews (`Filter_Reviews`).
    pub fn filter_included_reviews(
        mut self,
        filter: ReviewFilter,
        operator: FilterOperator,
        value: impl Into<String>,
    ) -> Self {
        self.review_filters
            .push(Filter::new(filter.as_str(), operator, [value.into()]));
        self
    }

    pub fn filter_included_questions(
        mut self,
        filter: QuestionFilter,
        operator: FilterOperator,
        value: impl Into<String>,
    ) -> Self {
        self.question_filters
            .push(Filter::new(filter.as_str(), operator, [value.into()]));
        self
    }
}

impl ConversationsRequest for ProductDisplayPageRequest {
    type Item = Product;
    type Response = ProductDisplayPageResponse;

    fn endpoint(&self) -> &'static str {
        "products.json"
    }

    fn validate(&self) -> Result<()> {
        require_identifier("product_id", &self.product_id)?;
        for (content, limit) in &self.includes {
            require_range(
                &format!("Limit_{}", content),
                *limit,
                1,
                MAX_INCLUDED_LIMIT,
            )?;
        }
        Ok(())
    }

    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_filters(
            "Filter",
            &[Filter::new("Id", FilterOperator::EqualTo, [self.product_id.as_str()])],
        );

        if !self.includes.is_empty() {
            let names: Vec<&str> = self.includes.iter().map(|(c, _)| c.as_str()).collect();
            params.push("Include", names.join(","));
            for (content, limit) in &self.includes {
                params.push(format!("Limit_{}", content), limit);
            }
        }

        if !self.stats.is_empty() {
            let names: Vec<&str> = self.stats.iter().map(StatsType::as_str).collect();
            params.push("Stats", names.join(","));
        }

        params.push_sorts("Sort_Reviews", &self.review_sorts);
        params.push_sorts("Sort_Questions", &self.question_sorts);
        params.push_filters("Filter_Reviews", &self.review_filters);
        params.push_filters("Filter_Questions", &self.question_filters);
        params
    }

    fn build_response(&self, envelope: Envelope<Product>) -> ProductDisplayPageResponse {
        let (products, includes, page) = envelope.into_parts();
        let result = products
            .into_iter()
            .next()
            .map(|product| product.with_included_content(&includes));
        ProductDisplayPageResponse {
            result,
            locale: page.locale,
        }
    }
}
