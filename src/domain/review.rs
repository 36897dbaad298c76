use crate::domain::de::{keyed_values, null_default};
use crate::domain::model::{
    Badge, ClientResponse, ContextDataValue, Includes, Photo, SecondaryRating, TagDimension, Video,
};
use crate::domain::product::Product;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Review {
    pub id: String,
    pub product_id: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub rating: u32,
    pub rating_range: Option<u32>,
    pub title: Option<String>,
    pub review_text: Option<String>,
    pub moderation_status: Option<String>,
    pub author_id: Option<String>,
    pub user_nickname: Option<String>,
    pub user_location: Option<String>,
    pub content_locale: Option<String>,
    pub campaign_id: Option<String>,

    #[serde(default, deserialize_with = "null_default")]
    pub is_ratings_only: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub is_featured: bool,
    /// `None` when the reviewer skipped the recommendation question.
    pub is_recommended: Option<bool>,
    #[serde(default, deserialize_with = "null_default")]
    pub is_syndicated: bool,

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
    pub total_comment_count: u32,
    pub helpfulness: Option<f64>,

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
    #[serde(default, deserialize_with = "keyed_values")]
    pub secondary_ratings: Vec<SecondaryRating>,
    #[serde(default, deserialize_with = "null_default")]
    pub client_responses: Vec<ClientResponse>,
    #[serde(default, deserialize_with = "null_default")]
    pub comment_ids: Vec<String>,

    /// Filled only when the request asked for products to be included.
    #[serde(skip_deserializing)]
    pub product: Option<Product>,
}

impl Review {
    pub fn tag_dimension(&self, id: &str) -> Option<&TagDimension> {
        self.tag_dimensions.get(id)
    }

    pub fn context_data_value(&self, id: &str) -> Option<&ContextDataValue> {
        self.context_data_values.iter().find(|cdv| cdv.id == id)
    }

    pub(crate) fn with_product_from(mut self, includes: &Includes) -> Self {
        self.product = self
            .product_id
            .as_deref()
            .and_then(|product_id| includes.product(product_id));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::BadgeType;
    use serde_json::json;

    fn review_json() -> serde_json::Value {
        json!({
            "Id": "191975",
            "ProductId": "test1",
            "Rating": 1,
            "RatingRange": 5,
            "Title": "Morbi nibh risus, mattis id placerat a massa nunc.",
            "ReviewText": "Lorem ipsum dolor sit amet.",
            "ModerationStatus": "APPROVED",
            "AuthorId": "endersgame",
            "UserNickname": "endersgame",
            "UserLocation": "San Fransisco, California",
            "IsRatingsOnly": false,
            "IsFeatured": false,
            "IsRecommended": null,
            "IsSyndicated": null,
            "SubmissionTime": "2011-04-18T17:37:44.000-05:00",
            "LastModificationTime": "2016-06-21T20:30:40.000+00:00",
            "TotalFeedbackCount": 3,
            "TotalPositiveFeedbackCount": 2,
            "TotalNegativeFeedbackCount": 1,
            "TagDimensions": {
                "Pro": {"Id": "Pro", "Label": "Pros", "Values": ["Organic Fabric", "Quality"]}
            },
            "ContextDataValuesOrder": ["Gender", "Age"],
            "ContextDataValues": {
                "Gender": {"Id": "Gender", "Value": "Female", "ValueLabel": "Female", "DimensionLabel": "Gender"},
                "Age": {"Id": "Age", "Value": "25to34", "ValueLabel": "25 to 34", "DimensionLabel": "Age"}
            },
            "BadgesOrder": ["top10Contributor"],
            "Badges": {
                "top10Contributor": {"Id": "top10Contributor", "BadgeType": "Merit", "ContentType": "REVIEW"}
            },
            "SecondaryRatingsOrder": [],
            "SecondaryRatings": {},
            "Photos": [],
            "Videos": null,
            "ClientResponses": [],
            "CommentIds": null
        })
    }

    #[test]
    fn test_decode_review() {
        let review: Review = serde_json::from_value(review_json()).unwrap();

        assert_eq!(review.id, "191975");
        assert_eq!(review.rating, 1);
        assert_eq!(review.rating_range, Some(5));
        assert_eq!(review.moderation_status.as_deref(), Some("APPROVED"));
        assert_eq!(review.user_location.as_deref(), Some("San Fransisco, California"));
        assert!(!review.is_ratings_only);
        assert!(!review.is_featured);
        assert!(!review.is_syndicated);
        assert_eq!(review.is_recommended, None);
        assert!(review.product.is_none());
        assert!(review.videos.is_empty());
        assert!(review.comment_ids.is_empty());
        assert_eq!(review.total_positive_feedback_count, 2);

        let submitted = review.submission_time.unwrap();
        assert_eq!(submitted.to_rfc3339(), "2011-04-18T17:37:44-05:00");
    }

    #[test]
    fn test_keyed_collections() {
        let review: Review = serde_json::from_value(review_json()).unwrap();

        let pro = review.tag_dimension("Pro").unwrap();
        assert_eq!(pro.label.as_deref(), Some("Pros"));
        assert_eq!(pro.values, vec!["Organic Fabric", "Quality"]);

        let ids: Vec<&str> = review
            .context_data_values
            .iter()
            .map(|cdv| cdv.id.as_str())
            .collect();
        assert_eq!(ids, vec!["Gender", "Age"]);
        assert_eq!(
            review.context_data_value("Age").unwrap().value_label.as_deref(),
            Some("25 to 34")
        );

        assert_eq!(review.badges.len(), 1);
        assert_eq!(review.badges[0].badge_type, BadgeType::Merit);
        assert!(review.secondary_ratings.is_empty());
    }

    #[test]
    fn test_product_resolution() {
        let includes: Includes = serde_json::from_value(json!({
            "Products": {
                "test1": {"Id": "test1", "Name": "Dress Shirt"}
            }
        }))
        .unwrap();

        let review: Review = serde_json::from_value(review_json()).unwrap();
        let review = review.with_product_from(&includes);
        assert_eq!(review.product.unwrap().name.as_deref(), Some("Dress Shirt"));

        let review: Review = serde_json::from_value(review_json()).unwrap();
        let review = review.with_product_from(&Includes::default());
        assert!(review.product.is_none());
    }
}
