//! Client for the Bazaarvoice Conversations display API.
//!
//! Each resource has a fluent request builder. A [`ConversationsClient`] turns
//! a builder into one HTTP GET and decodes the JSON envelope into typed models.
//!
//! ```no_run
//! use bvsdk_conversations::{
//!     ClientConfig, ConversationsClient, ProductContent, ProductDisplayPageRequest, StatsType,
//! };
//!
//! # async fn run() -> bvsdk_conversations::Result<()> {
//! let config = ClientConfig::new("apitestcustomer", "your-passkey").staging(true);
//! let client = ConversationsClient::new(&config)?;
//!
//! let request = ProductDisplayPageRequest::new("test1")
//!     .include_content(ProductContent::Reviews, 10)
//!     .include_statistics(StatsType::Reviews);
//! let response = client.load(&request).await?;
//! if let Some(product) = response.result {
//!     println!("{:?} has {} reviews", product.name, product.included_reviews.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::ClientConfig;

pub use crate::core::bulk_ratings::{BulkRatingsFilter, BulkRatingsRequest, BulkRatingsResponse, BulkRatingsStats};
pub use crate::core::client::{ConversationsClient, HttpTransport};
pub use crate::core::product_display::{
    ProductContent, ProductDisplayPageRequest, ProductDisplayPageResponse, StatsType,
};
pub use crate::core::query::{FilterOperator, SortOrder};
pub use crate::core::questions::{
    AnswerSort, QuestionFilter, QuestionSort, QuestionsAndAnswersRequest, QuestionsAndAnswersResponse,
};
pub use crate::core::reviews::{ReviewFilter, ReviewSort, ReviewsRequest, ReviewsResponse};
pub use domain::model::{
    Badge, BadgeType, ClientResponse, ContextDataValue, DisplayResponse, Photo, PhotoSize, PhotoSizes,
    SecondaryRating, TagDimension, Video,
};
pub use domain::ports::{ConfigProvider, ConversationsRequest, Transport, TransportResponse};
pub use domain::product::{Brand, Product};
pub use domain::question::{Answer, Question};
pub use domain::review::Review;
pub use domain::statistics::{ProductStatistics, QaStatistics, RatingDistribution, ReviewStatistics};
pub use utils::error::{ApiErrorDetail, ConversationsError, ErrorCategory, Result};
