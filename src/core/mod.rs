pub mod bulk_ratings;
pub mod client;
pub mod export;
pub mod product_display;
pub mod query;
pub mod questions;
pub mod reviews;

pub use crate::domain::model::{DisplayResponse, Envelope, Includes};
pub use crate::domain::ports::{ConfigProvider, ConversationsRequest, Transport, TransportResponse};
pub use crate::utils::error::Result;
