use crate::core::query::QueryParams;
use crate::domain::model::Envelope;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

pub trait ConfigProvider: Send + Sync {
    fn client_id(&self) -> &str;
    fn api_key(&self) -> &str;
    /// Always ends with `/` so endpoint names can be joined onto it.
    fn base_url(&self) -> String;
    fn api_version(&self) -> &str;
    fn timeout(&self) -> Duration;

    fn app_id(&self) -> Option<&str> {
        None
    }

    fn app_version(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<TransportResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn get(&self, url: &Url) -> Result<TransportResponse> {
        (**self).get(url).await
    }
}

/// A display request: query parameters in, typed response out.
pub trait ConversationsRequest: Send + Sync {
    type Item: DeserializeOwned + Send;
    type Response: Send;

    /// Endpoint file name relative to the data base URL, e.g. `reviews.json`.
    fn endpoint(&self) -> &'static str;

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn query_params(&self) -> QueryParams;

    fn build_response(&self, envelope: Envelope<Self::Item>) -> Self::Response;
}
