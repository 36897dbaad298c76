use crate::config::ClientConfig;
use crate::core::bulk_ratings::{BulkRatingsFilter, BulkRatingsRequest, BulkRatingsStats};
use crate::core::product_display::{ProductContent, ProductDisplayPageRequest, StatsType};
use crate::core::query::{parse_filter_expr, parse_sort_expr, FilterOperator};
use crate::core::questions::{QuestionFilter, QuestionSort, QuestionsAndAnswersRequest};
use crate::core::reviews::{ReviewFilter, ReviewSort, ReviewsRequest};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
    Tsv,
}

#[derive(Debug, Parser)]
#[command(name = "bv-display")]
#[command(about = "Query the Bazaarvoice Conversations display API")]
pub struct CliConfig {
    /// TOML configuration file; otherwise BV_* environment variables are used
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub client_id: Option<String>,

    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// `--staging` or `--staging=false`; unset keeps the file/env value
    #[arg(long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub staging: Option<bool>,

    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, value_enum, default_value = "json", global = true)]
    pub format: OutputFormat,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// One product with embedded reviews, questions and statistics
    Product(ProductArgs),
    /// A page of reviews for a product
    Reviews(ReviewsArgs),
    /// A page of questions, with answers, for a product
    Questions(QuestionsArgs),
    /// Rating statistics for up to 100 products
    Ratings(RatingsArgs),
}

#[derive(Debug, Args)]
pub struct ProductArgs {
    pub product_id: String,

    #[arg(long)]
    pub reviews: Option<u32>,

    #[arg(long)]
    pub questions: Option<u32>,

    #[arg(long)]
    pub answers: Option<u32>,

    /// Statistics to include, e.g. Reviews,Questions
    #[arg(long, value_delimiter = ',')]
    pub stats: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ReviewsArgs {
    pub product_id: String,

    #[arg(long, default_value = "10")]
    pub limit: u32,

    #[arg(long, default_value = "0")]
    pub offset: u32,

    /// Key:asc|desc, repeatable
    #[arg(long = "sort")]
    pub sorts: Vec<String>,

    /// Key:operator:value[,value], repeatable
    #[arg(long = "filter")]
    pub filters: Vec<String>,

    #[arg(long)]
    pub search: Option<String>,

    #[arg(long)]
    pub include_products: bool,
}

#[derive(Debug, Args)]
pub struct QuestionsArgs {
    pub product_id: String,

    #[arg(long, default_value = "10")]
    pub limit: u32,

    #[arg(long, default_value = "0")]
    pub offset: u32,

    #[arg(long = "sort")]
    pub sorts: Vec<String>,

    #[arg(long = "filter")]
    pub filters: Vec<String>,

    #[arg(long)]
    pub answer_limit: Option<u32>,

    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Debug, Args)]
pub struct RatingsArgs {
    #[arg(required = true, value_delimiter = ',')]
    pub product_ids: Vec<String>,

    #[arg(long, default_value = "all")]
    pub stats: String,

    /// Content locales to aggregate over, e.g. en_US
    #[arg(long = "locale", value_delimiter = ',')]
    pub locales: Vec<String>,
}

impl CliConfig {
    /// 合併設定檔/環境變數與命令列參數，命令列優先
    pub fn client_config(&self) -> Result<ClientConfig> {
        self.resolve_config(|name| std::env::var(name).ok())
    }

    /// Without `--config`, every field is the flag if given, else the `BV_*`
    /// variable from `env`.
    fn resolve_config<F>(&self, env: F) -> Result<ClientConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::from_lookup(|name| self.flag_value(name).or_else(|| env(name)))?,
        };

        if let Some(client_id) = &self.client_id {
            config.client_id = client_id.clone();
        }
        if let Some(api_key) = &self.api_key {
            config.api_key = api_key.clone();
        }
        if let Some(staging) = self.staging {
            config.staging = staging;
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = Some(base_url.clone());
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = timeout;
        }

        config.validate()?;
        Ok(config)
    }

    fn flag_value(&self, name: &str) -> Option<String> {
        match name {
            "BV_CLIENT_ID" => self.client_id.clone(),
            "BV_API_KEY_CONVERSATIONS" => self.api_key.clone(),
            "BV_STAGING" => self.staging.map(|s| s.to_string()),
            "BV_BASE_URL" => self.base_url.clone(),
            "BV_TIMEOUT_SECONDS" => self.timeout_seconds.map(|t| t.to_string()),
            _ => None,
        }
    }
}

impl ProductArgs {
    pub fn to_request(&self) -> Result<ProductDisplayPageRequest> {
        let mut request = ProductDisplayPageRequest::new(self.product_id.clone());
        let includes = [
            (ProductContent::Reviews, self.reviews),
            (ProductContent::Questions, self.questions),
            (ProductContent::Answers, self.answers),
        ];
        for (content, limit) in includes {
            if let Some(limit) = limit {
                request = request.include_content(content, limit);
            }
        }
        for stats in &self.stats {
            request = request.include_statistics(stats.parse::<StatsType>()?);
        }
        Ok(request)
    }
}

impl ReviewsArgs {
    pub fn to_request(&self) -> Result<ReviewsRequest> {
        let mut request = ReviewsRequest::new(self.product_id.clone(), self.limit, self.offset);

        for expr in &self.sorts {
            let (key, order) = parse_sort_expr(expr)?;
            request = request.add_sort(key.parse::<ReviewSort>()?, order);
        }
        for expr in &self.filters {
            let (key, operator, values) = parse_filter_expr(expr)?;
            request = match key.strip_prefix("ContextDataValue_") {
                Some(dimension) => {
                    request.add_context_data_filter_values(dimension, operator, values)
                }
                None => request.add_filter_values(key.parse::<ReviewFilter>()?, operator, values),
            };
        }
        if let Some(search) = &self.search {
            request = request.search(search.clone());
        }
        if self.include_products {
            request = request.include_products();
        }
        Ok(request)
    }
}

impl QuestionsArgs {
    pub fn to_request(&self) -> Result<QuestionsAndAnswersRequest> {
        let mut request =
            QuestionsAndAnswersRequest::new(self.product_id.clone(), self.limit, self.offset);

        for expr in &self.sorts {
            let (key, order) = parse_sort_expr(expr)?;
            request = request.add_sort(key.parse::<QuestionSort>()?, order);
        }
        for expr in &self.filters {
            let (key, operator, values) = parse_filter_expr(expr)?;
            request = request.add_filter_values(key.parse::<QuestionFilter>()?, operator, values);
        }
        if let Some(limit) = self.answer_limit {
            request = request.answer_limit(limit);
        }
        if let Some(search) = &self.search {
            request = request.search(search.clone());
        }
        Ok(request)
    }
}

impl RatingsArgs {
    pub fn to_request(&self) -> Result<BulkRatingsRequest> {
        let stats: BulkRatingsStats = self.stats.parse()?;
        let mut request = BulkRatingsRequest::new(self.product_ids.iter().cloned(), stats);
        if !self.locales.is_empty() {
            request = request.add_filter(
                BulkRatingsFilter::ContentLocale,
                FilterOperator::EqualTo,
                self.locales.iter().cloned(),
            );
        }
        Ok(request)
    }
}
