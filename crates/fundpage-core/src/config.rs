//! Page configuration
//!
//! The goal, raised amount and region names live in a `FundraiserConfig`
//! that the host page can embed as JSON:
//!
//! ```html
//! <script type="application/json" id="fundraiser-config">
//!   { "goal": 20000, "raised": 1250, "wallet_address": "0xABC..." }
//! </script>
//! ```
//!
//! Every field is optional; missing fields take the defaults below.

use serde::{Deserialize, Serialize};

use crate::error::{PageError, PageResult};

/// Id of the `<script>` element carrying the JSON config.
pub const CONFIG_ELEMENT_ID: &str = "fundraiser-config";

/// Default fundraising goal in USD
pub const DEFAULT_GOAL: f64 = 20_000.0;

/// Delay before the progress fill width is applied (grow animation)
pub const DEFAULT_FILL_DELAY_MS: u32 = 300;

/// How long a toast stays visible
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;

/// Top-level configuration for one fundraising page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FundraiserConfig {
    /// Fundraising goal (currency units)
    pub goal: f64,
    /// Amount raised so far
    pub raised: f64,
    /// Written into the wallet-address region on mount when set
    pub wallet_address: Option<String>,
    /// Prefix used by currency formatting
    pub currency_symbol: String,
    pub fill_delay_ms: u32,
    pub toast_duration_ms: u32,
    /// Level filter for the page logger (trace, debug, info, warn, error)
    pub log_level: String,
    /// Ids and selectors of the document regions the page consumes
    pub regions: PageRegions,
}

impl Default for FundraiserConfig {
    fn default() -> Self {
        Self {
            goal: DEFAULT_GOAL,
            raised: 0.0,
            wallet_address: None,
            currency_symbol: "$".to_string(),
            fill_delay_ms: DEFAULT_FILL_DELAY_MS,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            log_level: "info".to_string(),
            regions: PageRegions::default(),
        }
    }
}

impl FundraiserConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> PageResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON (used by the CLI to echo a checked config).
    pub fn to_json_pretty(&self) -> PageResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check amounts and log level.
    ///
    /// A zero goal is accepted: the progress display treats it as 0% or 100%
    /// depending on whether anything was raised.
    pub fn validate(&self) -> PageResult<()> {
        if !self.goal.is_finite() || self.goal < 0.0 {
            return Err(PageError::InvalidConfig(format!(
                "goal must be a non-negative number, got {}",
                self.goal
            )));
        }
        if !self.raised.is_finite() || self.raised < 0.0 {
            return Err(PageError::InvalidConfig(format!(
                "raised must be a non-negative number, got {}",
                self.raised
            )));
        }
        if self.goal == 0.0 {
            tracing::warn!("Fundraising goal is 0; progress will show 0% or 100%");
        }
        self.log_level
            .parse::<tracing::Level>()
            .map_err(|_| PageError::InvalidConfig(format!("unknown log level: {}", self.log_level)))?;
        Ok(())
    }

    /// Parsed log level, falling back to INFO.
    pub fn level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

/// Ids (without `#`) and CSS selectors for every consumed region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageRegions {
    pub progress_fill: String,
    pub raised_text: String,
    pub percentage_text: String,
    pub wallet_address: String,
    pub copy_button: String,
    pub toast: String,
    pub toast_message: String,
    /// Selector for the fixed navigation bar
    pub navbar: String,
    pub faq_item: String,
    /// Selector for the question trigger, relative to a FAQ item
    pub faq_question: String,
    pub fade_in: String,
}

impl Default for PageRegions {
    fn default() -> Self {
        Self {
            progress_fill: "progress-fill".to_string(),
            raised_text: "raised-text".to_string(),
            percentage_text: "percentage-text".to_string(),
            wallet_address: "wallet-address".to_string(),
            copy_button: "copy-wallet-btn".to_string(),
            toast: "toast".to_string(),
            toast_message: "toast-message".to_string(),
            navbar: ".navbar".to_string(),
            faq_item: ".faq-item".to_string(),
            faq_question: ".faq-question".to_string(),
            fade_in: ".fade-in".to_string(),
        }
    }
}
