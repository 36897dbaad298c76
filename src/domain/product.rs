use crate::domain::de::null_default;
use crate::domain::model::Includes;
use crate::domain::question::Question;
use crate::domain::review::Review;
use crate::domain::statistics::{QaStatistics, ReviewStatistics};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Brand {
    pub id: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Product {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub brand: Option<Brand>,
    pub brand_external_id: Option<String>,
    pub image_url: Option<String>,
    pub product_page_url: Option<String>,
    pub category_id: Option<String>,

    #[serde(rename = "EANs", default, deserialize_with = "null_default")]
    pub eans: Vec<String>,
    #[serde(rename = "UPCs", default, deserialize_with = "null_default")]
    pub upcs: Vec<String>,
    #[serde(rename = "ISBNs", default, deserialize_with = "null_default")]
    pub isbns: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub model_numbers: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub manufacturer_part_numbers: Vec<String>,

    #[serde(default, deserialize_with = "null_default")]
    pub active: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub disabled: bool,

    #[serde(default, deserialize_with = "null_default")]
    pub review_ids: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub question_ids: Vec<String>,

    pub review_statistics: Option<ReviewStatistics>,
    #[serde(rename = "QAStatistics")]
    pub qa_statistics: Option<QaStatistics>,

    #[serde(skip_deserializing)]
    pub included_reviews: Vec<Review>,
    #[serde(skip_deserializing)]
    pub included_questions: Vec<Question>,
}

impl Product {
    /// 依 `ReviewIds` / `QuestionIds` 的順序填入 includes 中的內容
    pub(crate) fn with_included_content(mut self, includes: &Includes) -> Self {
        self.included_reviews = includes.reviews_for(&self.review_ids);
        self.included_questions = includes.questions_for(&self.question_ids);
        self
    }
}
