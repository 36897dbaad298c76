use crate::domain::de::{keyed_values, null_default};
use crate::domain::model::{Badge, ContextDataValue, Includes, Photo, TagDimension, Video};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Question {
    pub id: String,
    pub product_id: Option<String>,
    pub category_id: Option<String>,
    pub question_summary: Option<String>,
    pub question_details: Option<String>,
    pub moderation_status: Option<String>,
    pub author_id: Option<String>,
    pub user_nickname: Option<String>,
    pub user_location: Option<String>,
    pub content_locale: Option<String>,

    #[serde(default, deserialize_with = "null_default")]
    pub is_featured: bool,

    pub submission_time: Option<DateTime<FixedOffset>>,
    pub last_moderated_time: Option<DateTime<FixedOffset>>,
    pub last_modification_time: Option<DateTime<FixedOffset>>,

    #[serde(default, deserialize_with = "null_default")]
    pub answer_ids: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub total_answer_count: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub total_feedback_count: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub total_positive_feedback_count: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub total_negative_feedback_count: u32,

    #[serde(default, deserialize_with = "null_default")]
    pub photos: Vec<Photo>,
    #[serde(default, deserialize_with = "null_default")]
    pub videos: Vec<Video>,
    #[serde(default, deserialize_with = "null_default")]
    pub tag_dimensions: HashMap<String, TagDimension>,
    #[serde(default, deserialize_with = "keyed_values")]
    pub context_data_values: Vec<ContextDataValue>,
    #[serde(default, deserialize_with = "keyed_values")]
    pub badges: Vec<Badge>,

    /// Answers listed in `answer_ids` that were part of the response.
    #[serde(skip_deserializing)]
    pub answers: Vec<Answer>,
}

impl Question {
    pub(crate) fn with_answers_from(mut self, includes: &Includes) -> Self {
        self.answers = includes.answers_for(&self.answer_ids);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Answer {
    pub id: String,
    pub question_id: Option<String>,
    pub answer_text: Option<String>,
    pub moderation_status: Option<String>,
    pub author_id: Option<String>,
    pub user_nickname: Option<String>,
    pub user_location: Option<String>,
    pub content_locale: Option<String>,

    #[serde(default, deserialize_with = "null_default")]
    pub is_brand_answer: bool,
    #[serde(rename = "BrandImageLogoURL")]
    pub brand_image_logo_url: Option<String>,

    pub submission_time: Option<DateTime<FixedOffset>>,
    pub last_moderated_time: Option<DateTime<FixedOffset>>,
    pub last_modification_time: Option<DateTime<FixedOffset>>,

    #[serde(default, deserialize_with = "null_default")]
    pub total_feedback_count: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub total_positive_feedback_count: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub total_negative_feedback_count: u32,

    #[serde(default, deserialize_with = "null_default")]
    pub photos: Vec<Photo>,
    #[serde(default, deserialize_with = "null_default")]
    pub videos: Vec<Video>,
    #[serde(default, deserialize_with = "keyed_values")]
    pub badges: Vec<Badge>,
}
