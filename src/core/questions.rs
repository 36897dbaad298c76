use crate::core::query::{wire_enum, Filter, FilterOperator, QueryParams, Sort, SortOrder};
use crate::domain::model::{DisplayResponse, Envelope};
use crate::domain::ports::ConversationsRequest;
use crate::domain::question::Question;
use crate::utils::error::Result;
use crate::utils::validation::{require_identifier, require_range};

pub const MAX_LIMIT: u32 = 100;
pub const MAX_ANSWER_LIMIT: u32 = 20;

wire_enum! {
    pub enum QuestionFilter {
        Id => "Id",
        AuthorId => "AuthorId",
        CategoryAncestorId => "CategoryAncestorId",
        ContentLocale => "ContentLocale",
        HasAnswers => "HasAnswers",
        HasBestAnswer => "HasBestAnswer",
        HasBrandAnswers => "HasBrandAnswers",
        HasPhotos => "HasPhotos",
        HasStaffAnswers => "HasStaffAnswers",
        HasVideos => "HasVideos",
        IsFeatured => "IsFeatured",
        IsSubjectActive => "IsSubjectActive",
        LastApprovedAnswerSubmissionTime => "LastApprovedAnswerSubmissionTime",
        LastModeratedTime => "LastModeratedTime",
        LastModificationTime => "LastModificationTime",
        ModeratorCode => "ModeratorCode",
        ProductId => "ProductId",
        SubmissionId => "SubmissionId",
        SubmissionTime => "SubmissionTime",
        Summary => "Summary",
        TotalAnswerCount => "TotalAnswerCount",
        TotalFeedbackCount => "TotalFeedbackCount",
        TotalNegativeFeedbackCount => "TotalNegativeFeedbackCount",
        TotalPositiveFeedbackCount => "TotalPositiveFeedbackCount",
        UserLocation => "UserLocation",
    }
}

wire_enum! {
    pub enum QuestionSort {
        Id => "Id",
        AuthorId => "AuthorId",
        ContentLocale => "ContentLocale",
        HasAnswers => "HasAnswers",
        HasBestAnswer => "HasBestAnswer",
        HasPhotos => "HasPhotos",
        HasVideos => "HasVideos",
        IsFeatured => "IsFeatured",
        LastApprovedAnswerSubmissionTime => "LastApprovedAnswerSubmissionTime",
        LastModeratedTime => "LastModeratedTime",
        LastModificationTime => "LastModificationTime",
        ProductId => "ProductId",
        SubmissionTime => "SubmissionTime",
        Summary => "Summary",
        TotalAnswerCount => "TotalAnswerCount",
        TotalFeedbackCount => "TotalFeedbackCount",
        TotalNegativeFeedbackCount => "TotalNegativeFeedbackCount",
        TotalPositiveFeedbackCount => "TotalPositiveFeedbackCount",
        UserLocation => "UserLocation",
    }
}

wire_enum! {
    pub enum AnswerSort {
        Id => "Id",
        AuthorId => "AuthorId",
        ContentLocale => "ContentLocale",
        HasPhotos => "HasPhotos",
        IsBestAnswer => "IsBestAnswer",
        IsBrandAnswer => "IsBrandAnswer",
        IsFeatured => "IsFeatured",
        LastModeratedTime => "LastModeratedTime",
        LastModificationTime => "LastModificationTime",
        QuestionId => "QuestionId",
        SubmissionTime => "SubmissionTime",
        TotalFeedbackCount => "TotalFeedbackCount",
        TotalNegativeFeedbackCount => "TotalNegativeFeedbackCount",
        TotalPositiveFeedbackCount => "TotalPositiveFeedbackCount",
        UserLocation => "UserLocation",
    }
}

pub type QuestionsAndAnswersResponse = DisplayResponse<Question>;

/// Questions for one product, each with its answers embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionsAndAnswersRequest {
    product_id: String,
    limit: u32,
    offset: u32,
    filters: Vec<Filter>,
    sorts: Vec<Sort>,
    answer_sorts: Vec<Sort>,
    answer_limit: Option<u32>,
    search: Option<String>,
}

impl QuestionsAndAnswersRequest {
    pub fn new(product_id: impl Into<String>, limit: u32, offset: u32) -> Self {
        Self {
            product_id: product_id.into(),
            limit,
            offset,
            filters: Vec::new(),
            sorts: Vec::new(),
            answer_sorts: Vec::new(),
            answer_limit: None,
            search: None,
        }
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn add_sort(mut self, sort: QuestionSort, order: SortOrder) -> Self {
        self.sorts.push(Sort::new(sort.as_str(), order));
        self
    }

    pub fn add_answer_sort(mut self, sort: AnswerSort, order: SortOrder) -> Self {
        self.answer_sorts.push(Sort::new(sort.as_str(), order));
        self
    }

    pub fn add_filter(
        self,
        filter: QuestionFilter,
        operator: FilterOperator,
        value: impl Into<String>,
    ) -> Self {
        self.add_filter_values(filter, operator, [value.into()])
    }

    pub fn add_filter_values<I, V>(
        mut self,
        filter: QuestionFilter,
        operator: FilterOperator,
        values: I,
    ) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.filters.push(Filter::new(filter.as_str(), operator, values));
        self
    }

    /// Caps the number of answers embedded per question.
    pub fn answer_limit(mut self, limit: u32) -> Self {
        self.answer_limit = Some(limit);
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }
}

impl ConversationsRequest for QuestionsAndAnswersRequest {
    type Item = Question;
    type Response = QuestionsAndAnswersResponse;

    fn endpoint(&self) -> &'static str {
        "questions.json"
    }

    fn validate(&self) -> Result<()> {
        require_identifier("product_id", &self.product_id)?;
        require_range("limit", self.limit, 1, MAX_LIMIT)?;
        if let Some(answer_limit) = self.answer_limit {
            require_range("answer_limit", answer_limit, 1, MAX_ANSWER_LIMIT)?;
        }
        Ok(())
    }

    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_filters(
            "Filter",
            &[Filter::new(
                QuestionFilter::ProductId.as_str(),
                FilterOperator::EqualTo,
                [self.product_id.as_str()],
            )],
        );
        params.push_filters("Filter", &self.filters);
        params.push_sorts("Sort", &self.sorts);
        params.push("Include", "Answers");
        params.push_sorts("Sort_Answers", &self.answer_sorts);
        if let Some(answer_limit) = self.answer_limit {
            params.push("Limit_Answers", answer_limit);
        }
        params.push("Limit", self.limit);
        params.push("Offset", self.offset);
        if let Some(search) = &self.search {
            params.push("Search", search);
        }
        params
    }

    fn build_response(&self, envelope: Envelope<Question>) -> QuestionsAndAnswersResponse {
        let (questions, includes, page) = envelope.into_parts();
        let questions = questions
            .into_iter()
            .map(|question| question.with_answers_from(&includes))
            .collect();
        DisplayResponse::new(questions, page)
    }
}
