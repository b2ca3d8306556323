//! PayFast hosted checkout and instant payment notification validation.

use async_trait::async_trait;
use url::Url;

use crate::server::{
    config::PayFastConfig,
    error::provider::ProviderError,
    model::payment::{CheckoutRequest, PaymentNotification, PaymentSubject},
    util::money,
};

/// Payment gateway capability used by registration, ordering and reconciliation.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Builds the URL the payer is redirected to in order to pay.
    fn checkout_url(&self, request: &CheckoutRequest) -> Result<String, ProviderError>;

    /// Confirms that a notification really originated from the gateway.
    ///
    /// # Returns
    /// - `Ok(true)` - Notification verified, or verification is disabled
    /// - `Ok(false)` - Gateway did not vouch for the notification
    /// - `Err(ProviderError)` - Gateway could not be reached
    async fn verify(&self, notification: &PaymentNotification) -> Result<bool, ProviderError>;
}

/// PayFast implementation of `PaymentGateway`.
pub struct PayFastGateway {
    http_client: reqwest::Client,
    config: PayFastConfig,
}

impl PayFastGateway {
    pub fn new(http_client: reqwest::Client, config: PayFastConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    fn notify_url(&self, subject: PaymentSubject) -> &str {
        match subject {
            PaymentSubject::Member => &self.config.member_notify_url,
            PaymentSubject::Order => &self.config.order_notify_url,
        }
    }
}

#[async_trait]
impl PaymentGateway for PayFastGateway {
    fn checkout_url(&self, request: &CheckoutRequest) -> Result<String, ProviderError> {
        let amount = money::format_amount(request.amount);

        let mut params: Vec<(&str, &str)> = vec![
            ("merchant_id", self.config.merchant_id.as_str()),
            ("merchant_key", self.config.merchant_key.as_str()),
            ("return_url", self.config.return_url.as_str()),
            ("cancel_url", self.config.cancel_url.as_str()),
            ("notify_url", self.notify_url(request.subject)),
            ("amount", amount.as_str()),
            ("item_name", request.item_name.as_str()),
        ];
        if let Some(name_first) = request.name_first.as_deref() {
            params.push(("name_first", name_first));
        }
        params.push(("email_address", request.email_address.as_str()));

        let url = Url::parse_with_params(&self.config.process_url, params)?;

        Ok(url.into())
    }

    async fn verify(&self, notification: &PaymentNotification) -> Result<bool, ProviderError> {
        if !self.config.verify {
            return Ok(true);
        }

        let response = self
            .http_client
            .post(&self.config.validate_url)
            .form(notification.fields())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ProviderError::Rejected {
                provider: "payfast",
                status: status.as_u16(),
                body,
            });
        }

        let valid = body.trim() == "VALID";
        if !valid {
            tracing::warn!(
                "PayFast did not validate notification for '{}': {}",
                notification.item_name(),
                body.trim()
            );
        }

        Ok(valid)
    }
}
