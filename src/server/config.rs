//! Environment-based application configuration.
//!
//! Values are read once at startup, after `.env` has been loaded by `dotenvy`. Variables
//! with a sensible default are optional; the rest fail startup with
//! `ConfigError::MissingEnvVar`.

use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_MEMBER_CODE_PREFIX: &str = "MBH";
const DEFAULT_ASSET_LOCAL_ROOT: &str = "./data/assets";
const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";
const DEFAULT_EMAIL_FROM: &str = "Mbabane Highlanders <noreply@mbabanehighlandersam.co.sz>";
const DEFAULT_PAYFAST_PROCESS_URL: &str = "https://sandbox.payfast.co.za/eng/process";
const DEFAULT_PAYFAST_VALIDATE_URL: &str = "https://sandbox.payfast.co.za/eng/query/validate";
const DEFAULT_SITE_URL: &str = "https://mbabanehighlandersam.co.sz";
const DEFAULT_CARD_LOGO_PATH: &str = "assets/logo.png";
const DEFAULT_CARD_FONT_PATH: &str = "assets/fonts/DejaVuSans.ttf";
const DEFAULT_CARD_BOLD_FONT_PATH: &str = "assets/fonts/DejaVuSans-Bold.ttf";
const DEFAULT_RECONCILE_SCHEDULE: &str = "0 */5 * * * *";

/// Where uploaded and generated assets are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetBackend {
    /// Azure Blob Storage container; account credentials come from `AZURE_*` variables.
    Azure { container: String },
    /// Directory on the local filesystem, served by the API under `/assets`.
    Local { root: PathBuf },
    /// Process memory. Contents are lost on restart.
    Memory,
}

impl AssetBackend {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Azure { .. } => "azure",
            Self::Local { .. } => "local",
            Self::Memory => "memory",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssetConfig {
    pub backend: AssetBackend,
    /// Base URL stored objects are publicly reachable at.
    pub public_base_url: String,
}

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub api_url: String,
    pub api_key: String,
    pub from: String,
}

#[derive(Debug, Clone)]
pub struct PayFastConfig {
    pub merchant_id: String,
    pub merchant_key: String,
    /// Hosted checkout URL the payer is redirected to.
    pub process_url: String,
    /// Endpoint notifications are posted back to for validation.
    pub validate_url: String,
    /// Whether notifications are validated with PayFast before being trusted.
    pub verify: bool,
    pub return_url: String,
    pub cancel_url: String,
    pub member_notify_url: String,
    pub order_notify_url: String,
}

#[derive(Debug, Clone)]
pub struct CardConfig {
    pub logo_path: PathBuf,
    pub font_path: PathBuf,
    pub bold_font_path: PathBuf,
}

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// Allowed CORS origin; any origin is allowed when unset.
    pub cors_allowed_origin: Option<String>,
    pub member_code_prefix: String,
    pub assets: AssetConfig,
    pub email: EmailConfig,
    pub payfast: PayFastConfig,
    pub card: CardConfig,
    /// Cron expression (with seconds) for the fulfilment resumption job.
    pub reconcile_schedule: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let site_url = optional("SITE_URL", DEFAULT_SITE_URL);
        let site_url = site_url.trim_end_matches('/');
        let public_api_url = required("PUBLIC_API_URL")?;
        let public_api_url = public_api_url.trim_end_matches('/');

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN").ok(),
            member_code_prefix: optional("MEMBER_CODE_PREFIX", DEFAULT_MEMBER_CODE_PREFIX),
            assets: AssetConfig {
                backend: asset_backend()?,
                public_base_url: required("ASSET_PUBLIC_URL")?,
            },
            email: EmailConfig {
                api_url: optional("RESEND_API_URL", DEFAULT_RESEND_API_URL),
                api_key: required("RESEND_API_KEY")?,
                from: optional("EMAIL_FROM", DEFAULT_EMAIL_FROM),
            },
            payfast: PayFastConfig {
                merchant_id: required("PAYFAST_MERCHANT_ID")?,
                merchant_key: required("PAYFAST_MERCHANT_KEY")?,
                process_url: optional("PAYFAST_PROCESS_URL", DEFAULT_PAYFAST_PROCESS_URL),
                validate_url: optional("PAYFAST_VALIDATE_URL", DEFAULT_PAYFAST_VALIDATE_URL),
                verify: flag("PAYFAST_VERIFY", true)?,
                return_url: format!("{}/success", site_url),
                cancel_url: format!("{}/failed", site_url),
                member_notify_url: format!("{}/api/members/notify", public_api_url),
                order_notify_url: format!("{}/api/orders/payfast-notify", public_api_url),
            },
            card: CardConfig {
                logo_path: optional("CARD_LOGO_PATH", DEFAULT_CARD_LOGO_PATH).into(),
                font_path: optional("CARD_FONT_PATH", DEFAULT_CARD_FONT_PATH).into(),
                bold_font_path: optional("CARD_BOLD_FONT_PATH", DEFAULT_CARD_BOLD_FONT_PATH)
                    .into(),
            },
            reconcile_schedule: optional("RECONCILE_SCHEDULE", DEFAULT_RECONCILE_SCHEDULE),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn flag(name: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(name) {
        Err(_) => Ok(default),
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            _ => Err(ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: format!("expected true or false, got '{}'", value),
            }),
        },
    }
}

fn asset_backend() -> Result<AssetBackend, ConfigError> {
    match optional("ASSET_STORE", "local").to_ascii_lowercase().as_str() {
        "azure" => Ok(AssetBackend::Azure {
            container: required("AZURE_STORAGE_CONTAINER")?,
        }),
        "local" => Ok(AssetBackend::Local {
            root: optional("ASSET_LOCAL_ROOT", DEFAULT_ASSET_LOCAL_ROOT).into(),
        }),
        "memory" => Ok(AssetBackend::Memory),
        other => Err(ConfigError::InvalidEnvVar {
            name: "ASSET_STORE".to_string(),
            reason: format!("expected azure, local or memory, got '{}'", other),
        }),
    }
}
