use crate::core::query::{wire_enum, Filter, FilterOperator, QueryParams, Sort, SortOrder};
use crate::domain::model::{DisplayResponse, Envelope};
use crate::domain::ports::ConversationsRequest;
use crate::domain::review::Review;
use crate::utils::error::Result;
use crate::utils::validation::{require_identifier, require_range};

pub const MAX_LIMIT: u32 = 100;

wire_enum! {
    pub enum ReviewFilter {
        Id => "Id",
        AuthorId => "AuthorId",
        CampaignId => "CampaignId",
        CategoryAncestorId => "CategoryAncestorId",
        ContentLocale => "ContentLocale",
        HasBrandEngageResponses => "HasBrandEngageResponses",
        HasComments => "HasComments",
        HasPhotos => "HasPhotos",
        HasStaffResponses => "HasStaffResponses",
        HasVideos => "HasVideos",
        IsFeatured => "IsFeatured",
        IsRatingsOnly => "IsRatingsOnly",
        IsRecommended => "IsRecommended",
        IsSubjectActive => "IsSubjectActive",
        IsSyndicated => "IsSyndicated",
        LastModeratedTime => "LastModeratedTime",
        LastModificationTime => "LastModificationTime",
        ModeratorCode => "ModeratorCode",
        ProductId => "ProductId",
        Rating => "Rating",
        SubmissionId => "SubmissionId",
        SubmissionTime => "SubmissionTime",
        TotalCommentCount => "TotalCommentCount",
        TotalFeedbackCount => "TotalFeedbackCount",
        TotalNegativeFeedbackCount => "TotalNegativeFeedbackCount",
        TotalPositiveFeedbackCount => "TotalPositiveFeedbackCount",
        UserLocation => "UserLocation",
    }
}

wire_enum! {
    pub enum ReviewSort {
        Id => "Id",
        AuthorId => "AuthorId",
        CampaignId => "CampaignId",
        ContentLocale => "ContentLocale",
        HasPhotos => "HasPhotos",
        HasVideos => "HasVideos",
        Helpfulness => "Helpfulness",
        IsFeatured => "IsFeatured",
        IsRatingsOnly => "IsRatingsOnly",
        IsRecommended => "IsRecommended",
        IsSyndicated => "IsSyndicated",
        LastModeratedTime => "LastModeratedTime",
        LastModificationTime => "LastModificationTime",
        ProductId => "ProductId",
        Rating => "Rating",
        SubmissionId => "SubmissionId",
        SubmissionTime => "SubmissionTime",
        TotalCommentCount => "TotalCommentCount",
        TotalFeedbackCount => "TotalFeedbackCount",
        TotalNegativeFeedbackCount => "TotalNegativeFeedbackCount",
        TotalPositiveFeedbackCount => "TotalPositiveFeedbackCount",
        UserLocation => "UserLocation",
    }
}

pub type ReviewsResponse = DisplayResponse<Review>;

/// Reviews for one product, page by page.
///
/// ```
/// use bvsdk_conversations::{FilterOperator, ReviewFilter, ReviewSort, ReviewsRequest, SortOrder};
///
/// let request = ReviewsRequest::new("test1", 10, 0)
///     .add_sort(ReviewSort::Rating, SortOrder::Ascending)
///     .add_filter(ReviewFilter::HasPhotos, FilterOperator::EqualTo, "true");
/// assert_eq!(request.product_id(), "test1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewsRequest {
    product_id: String,
    limit: u32,
    offset: u32,
    filters: Vec<Filter>,
    sorts: Vec<Sort>,
    search: Option<String>,
    include_products: bool,
}

impl ReviewsRequest {
    pub fn new(product_id: impl Into<String>, limit: u32, offset: u32) -> Self {
        Self {
            product_id: product_id.into(),
            limit,
            offset,
            filters: Vec::new(),
            sorts: Vec::new(),
            search: None,
            include_products: false,
        }
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn add_sort(mut self, sort: ReviewSort, order: SortOrder) -> Self {
        self.sorts.push(Sort::new(sort.as_str(), order));
        self
    }

    pub fn add_filter(
        self,
        filter: ReviewFilter,
        operator: FilterOperator,
        value: impl Into<String>,
    ) -> Self {
        self.add_filter_values(filter, operator, [value.into()])
    }

    pub fn add_filter_values<I, V>(mut self, filter: ReviewFilter, operator: FilterOperator, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.filters.push(Filter::new(filter.as_str(), operator, values));
        self
    }

    /// Filters on a context data dimension, e.g. `Gender`.
    pub fn add_context_data_filter(
        self,
        dimension: &str,
        operator: FilterOperator,
        value: impl Into<String>,
    ) -> Self {
        self.add_context_data_filter_values(dimension, operator, [value.into()])
    }

    pub fn add_context_data_filter_values<I, V>(
        mut self,
        dimension: &str,
        operator: FilterOperator,
        values: I,
    ) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.filters.push(Filter::new(
            format!("ContextDataValue_{}", dimension),
            operator,
            values,
        ));
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// Embeds the reviewed product in every review.
    pub fn include_products(mut self) -> Self {
        self.include_products = true;
        self
    }
}

impl ConversationsRequest for ReviewsRequest {
    type Item = Review;
    type Response = ReviewsResponse;

    fn endpoint(&self) -> &'static str {
        "reviews.json"
    }

    fn validate(&self) -> Result<()> {
        require_identifier("product_id", &self.product_id)?;
        require_range("limit", self.limit, 1, MAX_LIMIT)
    }

    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_filters(
            "Filter",
            &[Filter::new(
                ReviewFilter::ProductId.as_str(),
                FilterOperator::EqualTo,
                [self.product_id.as_str()],
            )],
        );
        params.push_filters("Filter", &self.filters);
        params.push_sorts("Sort", &self.sorts);
        params.push("Limit", self.limit);
        params.push("Offset", self.offset);
        if let Some(search) = &self.search {
            params.push("Search", search);
        }
        if self.include_products {
            params.push("Include", "Products");
        }
        params
    }

    fn build_response(&self, envelope: Envelope<Review>) -> ReviewsResponse {
        let (reviews, includes, page) = envelope.into_parts();
        let reviews = reviews
            .into_iter()
            .map(|review| review.with_product_from(&includes))
            .collect();
        DisplayResponse::new(reviews, page)
    }
}
