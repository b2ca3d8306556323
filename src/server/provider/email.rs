//! Transactional email through the Resend HTTP API.

use async_trait::async_trait;
use serde::Serialize;

use crate::server::{
    error::provider::ProviderError,
    model::{member::Member, order::Order},
    util::money,
};

/// Outbound email with an HTML body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
}

impl EmailMessage {
    /// Email inviting an accepted member to download their card.
    pub fn membership_card(member: &Member, card_url: &str) -> Self {
        Self {
            to: member.email.clone(),
            subject: "Membership card".to_string(),
            html: format!(
                "<p>Thank you {} for signing up for the Mbabane Highlanders membership. \
                 Below is a link to download your membership card.</p>\
                 <a href='{}'>Click here to download your membership card</a>",
                escape_html(&member.full_name),
                escape_html(card_url)
            ),
        }
    }

    /// Confirmation sent once an order's payment is received.
    pub fn order_confirmation(order: &Order) -> Self {
        let items = order
            .items
            .iter()
            .map(|item| {
                format!(
                    "- {} (Size: {}, Qty: {}) E{}",
                    escape_html(&item.product_name),
                    escape_html(&item.size),
                    item.quantity,
                    money::format_amount(item.line_total)
                )
            })
            .collect::<Vec<_>>()
            .join("<br/>");

        let html = format!(
            "<p>Dear {name},</p>\
             <p>Thank you for your order with <strong>Mbabane Highlanders</strong>! Your payment \
             has been received and your order is now being processed.</p>\
             <p><strong>Order Code:</strong> {code}</p>\
             <p><strong>Shipping Address:</strong><br/>{address}</p>\
             <p><strong>Order Summary:</strong><br/>{items}</p>\
             <p><strong>Total Paid:</strong> E{total}</p>\
             <p>We will notify you once your order ships. If you have any questions, feel free \
             to reply to this email.</p>\
             <p>Highlanders forever,<br/>Mbabane Highlanders Store Team</p>",
            name = escape_html(&order.customer_full_name),
            code = escape_html(&order.order_code),
            address = escape_html(&order.shipping_address),
            items = items,
            total = money::format_amount(order.total_amount),
        );

        Self {
            to: order.customer_email.clone(),
            subject: format!("Order Confirmation – {}", order.order_code),
            html,
        }
    }
}

/// Escapes customer-supplied text for interpolation into an HTML body or attribute.
fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Delivers an email. Returning `Ok` means the provider accepted the message.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: EmailMessage) -> Result<(), ProviderError>;
}

#[derive(Serialize)]
struct ResendEmail<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

/// `Notifier` posting to Resend's `/emails` endpoint.
pub struct ResendNotifier {
    http_client: reqwest::Client,
    api_url: String,
    api_key: String,
    from: String,
}

impl ResendNotifier {
    /// # Arguments
    /// - `http_client` - Shared HTTP client (carries the request timeout)
    /// - `api_url` - API base URL, e.g. `https://api.resend.com`
    /// - `api_key` - Resend API key sent as a bearer token
    /// - `from` - Sender address, e.g. `Club <noreply@example.com>`
    pub fn new(
        http_client: reqwest::Client,
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        from: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            from: from.into(),
        }
    }
}

#[async_trait]
impl Notifier for ResendNotifier {
    async fn send(&self, message: EmailMessage) -> Result<(), ProviderError> {
        let response = self
            .http_client
            .post(format!("{}/emails", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&ResendEmail {
                from: &self.from,
                to: [&message.to],
                subject: &message.subject,
                html: &message.html,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Rejected {
                provider: "resend",
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!("Sent email '{}' to {}", message.subject, message.to);

        Ok(())
    }
}
