use crate::domain::de::null_default;
use crate::domain::product::Product;
use crate::domain::question::{Answer, Question};
use crate::domain::review::Review;
use crate::utils::error::ApiErrorDetail;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Photo {
    pub id: String,
    pub caption: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub sizes: PhotoSizes,
    #[serde(default, deserialize_with = "null_default")]
    pub sizes_order: Vec<String>,
}

impl Photo {
    pub fn normal_url(&self) -> Option<&str> {
        self.sizes.normal.as_ref().map(|size| size.url.as_str())
    }

    pub fn thumbnail_url(&self) -> Option<&str> {
        self.sizes.thumbnail.as_ref().map(|size| size.url.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotoSizes {
    pub normal: Option<PhotoSize>,
    pub thumbnail: Option<PhotoSize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PhotoSize {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Video {
    pub video_id: Option<String>,
    pub video_host: Option<String>,
    pub caption: Option<String>,
    pub video_url: Option<String>,
    pub video_thumbnail_url: Option<String>,
    pub video_iframe_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadgeType {
    Merit,
    Affiliation,
    Custom,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Badge {
    pub id: String,
    pub badge_type: BadgeType,
    pub content_type: Option<String>,
}

/// 使用者提交時填寫的情境資料，例如性別或年齡層
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContextDataValue {
    pub id: String,
    pub value: Option<String>,
    pub value_label: Option<String>,
    pub dimension_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagDimension {
    pub id: String,
    pub label: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SecondaryRating {
    pub id: String,
    pub label: Option<String>,
    pub value: Option<i32>,
    pub value_range: Option<i32>,
    pub value_label: Option<String>,
    pub min_label: Option<String>,
    pub max_label: Option<String>,
    pub display_type: Option<String>,
}

/// 品牌或客服對評論的公開回覆
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClientResponse {
    pub name: Option<String>,
    pub department: Option<String>,
    pub response: Option<String>,
    pub response_type: Option<String>,
    pub response_source: Option<String>,
    pub date: Option<DateTime<FixedOffset>>,
}

/// Raw `{ "Results": [...], "Includes": {...} }` envelope shared by every display endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Envelope<T> {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub total_results: Option<u32>,
    pub locale: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub has_errors: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub errors: Vec<ApiErrorDetail>,
    pub results: Option<Vec<T>>,
    #[serde(default, deserialize_with = "null_default")]
    pub includes: Includes,
}

impl<T> Envelope<T> {
    /// Moves the results out, keeping the paging fields.
    pub fn into_parts(self) -> (Vec<T>, Includes, PageInfo) {
        let page = PageInfo {
            limit: self.limit,
            offset: self.offset,
            total_results: self.total_results,
            locale: self.locale,
        };
        (self.results.unwrap_or_default(), self.includes, page)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub total_results: Option<u32>,
    pub locale: Option<String>,
}

/// Content embedded next to the results, keyed by identifier.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Includes {
    #[serde(default, deserialize_with = "null_default")]
    pub products: HashMap<String, Product>,
    #[serde(default, deserialize_with = "null_default")]
    pub reviews: HashMap<String, Review>,
    #[serde(default, deserialize_with = "null_default")]
    pub questions: HashMap<String, Question>,
    #[serde(default, deserialize_with = "null_default")]
    pub answers: HashMap<String, Answer>,
}

impl Includes {
    pub fn reviews_for(&self, ids: &[String]) -> Vec<Review> {
        collect_by_id(&self.reviews, ids)
    }

    pub fn answers_for(&self, ids: &[String]) -> Vec<Answer> {
        collect_by_id(&self.answers, ids)
    }

    /// Questions come back with their own answers resolved.
    pub fn questions_for(&self, ids: &[String]) -> Vec<Question> {
        collect_by_id(&self.questions, ids)
            .into_iter()
            .map(|question| question.with_answers_from(self))
            .collect()
    }

    pub fn product(&self, id: &str) -> Option<Product> {
        self.products.get(id).cloned()
    }
}

fn collect_by_id<T: Clone>(source: &HashMap<String, T>, ids: &[String]) -> Vec<T> {
    ids.iter().filter_map(|id| source.get(id).cloned()).collect()
}

/// A page of decoded results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayResponse<T> {
    pub results: Vec<T>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub total_results: Option<u32>,
    pub locale: Option<String>,
}

impl<T> DisplayResponse<T> {
    pub fn new(results: Vec<T>, page: PageInfo) -> Self {
        Self {
            results,
            limit: page.limit,
            offset: page.offset,
            total_results: page.total_results,
            locale: page.locale,
        }
    }
}
