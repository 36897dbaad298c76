use crate::core::query::QueryParams;
use crate::domain::model::Envelope;
use crate::domain::ports::{ConfigProvider, ConversationsRequest, Transport, TransportResponse};
use crate::utils::error::{ConversationsError, Result};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// `Transport` backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(format!(
                "bvsdk-conversations/{} ({})",
                SDK_VERSION,
                config.client_id()
            ))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<TransportResponse> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}

/// Issues display requests against the Conversations API.
pub struct ConversationsClient<T: Transport = HttpTransport> {
    base_url: Url,
    common: QueryParams,
    transport: T,
}

impl ConversationsClient<HttpTransport> {
    pub fn new<C: ConfigProvider + Validate>(config: &C) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(config)?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> ConversationsClient<T> {
    /// Fails on an invalid configuration before anything is sent.
    pub fn with_transport<C: ConfigProvider + Validate>(config: &C, transport: T) -> Result<Self> {
        config.validate()?;
        let base_url = Url::parse(&config.base_url())?;

        let mut common = QueryParams::new();
        common.push("apiversion", config.api_version());
        common.push("passkey", config.api_key());
        if let Some(app_id) = config.app_id() {
            common.push("_appId", app_id);
        }
        if let Some(app_version) = config.app_version() {
            common.push("_appVersion", app_version);
        }
        common.push("_bvRustSdkVersion", SDK_VERSION);

        tracing::debug!(
            "Conversations client for {} using {}",
            config.client_id(),
            base_url
        );

        Ok(Self {
            base_url,
            common,
            transport,
        })
    }

    /// Full request URL: common parameters first, then the request's own.
    pub fn url_for<R: ConversationsRequest>(&self, request: &R) -> Result<Url> {
        let mut url = self.base_url.join(request.endpoint())?;
        let params = request.query_params();
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in self.common.iter().chain(params.iter()) {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    pub async fn load<R: ConversationsRequest>(&self, request: &R) -> Result<R::Response> {
        request.validate()?;

        let url = self.url_for(request)?;
        tracing::debug!("GET {}", redact_passkey(&url));

        let response = self.transport.get(&url).await?;
        tracing::debug!("{} responded with status {}", request.endpoint(), response.status);

        let envelope = decode_envelope::<R::Item>(response)?;
        let count = envelope.results.as_ref().map_or(0, Vec::len);
        tracing::info!("{} returned {} result(s)", request.endpoint(), count);

        Ok(request.build_response(envelope))
    }
}

impl<T: Transport + 'static> ConversationsClient<T> {
    /// Runs `load` on the tokio runtime and reports the outcome to `callback`
    /// exactly once, from a runtime worker thread.
    pub fn spawn_load<R, F>(
        self: std::sync::Arc<Self>,
        request: R,
        callback: F,
    ) -> tokio::task::JoinHandle<()>
    where
        R: ConversationsRequest + 'static,
        R::Response: 'static,
        F: FnOnce(Result<R::Response>) + Send + 'static,
    {
        tokio::spawn(async move {
            let result = self.load(&request).await;
            callback(result);
        })
    }
}

fn decode_envelope<I: serde::de::DeserializeOwned>(
    response: TransportResponse,
) -> Result<Envelope<I>> {
    let parsed = serde_json::from_str::<Envelope<I>>(&response.body);

    if !response.is_success() {
        // 錯誤回應若帶有 API 錯誤內容，以 API 錯誤為準
        if let Ok(envelope) = parsed {
            if envelope.has_errors && !envelope.errors.is_empty() {
                return Err(ConversationsError::Api {
                    errors: envelope.errors,
                });
            }
        }
        tracing::warn!("Unexpected HTTP status {}", response.status);
        return Err(ConversationsError::HttpStatus {
            status: response.status,
            body: response.body,
        });
    }

    let envelope = parsed?;
    if envelope.has_errors {
        tracing::warn!("API reported {} error(s)", envelope.errors.len());
        return Err(ConversationsError::Api {
            errors: envelope.errors,
        });
    }
    Ok(envelope)
}

fn redact_passkey(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            if k == "passkey" {
                (k.into_owned(), "***".to_string())
            } else {
                (k.into_owned(), v.into_owned())
            }
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
