//! Payment gateway notifications and checkout requests.

/// `payment_status` value the gateway sends for a settled payment. Compared case-sensitively.
pub const PAYMENT_COMPLETE: &str = "COMPLETE";

/// Kind of record a payment refers to, recovered from the notification's `item_name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentSubject {
    Member,
    Order,
}

impl PaymentSubject {
    /// `item_name` sent to the gateway at checkout for a record with `code`.
    pub fn item_name(self, code: &str) -> String {
        match self {
            Self::Member => format!("Member #{}", code),
            Self::Order => format!("Order {}", code),
        }
    }

    /// Recovers the business code from a notification's `item_name`.
    ///
    /// Members drop every `Member #` and then every `Member` marker, orders drop every
    /// `Order ` marker, and the remainder is trimmed.
    ///
    /// # Returns
    /// - `Some(code)` - Non-empty code
    /// - `None` - Nothing remains once the markers are removed
    pub fn extract_code(self, item_name: &str) -> Option<String> {
        let code = match self {
            Self::Member => item_name.replace("Member #", "").replace("Member", ""),
            Self::Order => item_name.replace("Order ", ""),
        };
        let code = code.trim();

        (!code.is_empty()).then(|| code.to_string())
    }

    pub fn missing_code_message(self) -> &'static str {
        match self {
            Self::Member => "Missing member code.",
            Self::Order => "Missing order code.",
        }
    }

    pub fn not_found_message(self) -> &'static str {
        match self {
            Self::Member => "Member not found.",
            Self::Order => "Order not found.",
        }
    }
}

/// Form fields of an instant payment notification, in the order they were received.
///
/// The order matters when the notification is posted back to the gateway for validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentNotification {
    fields: Vec<(String, String)>,
}

impl PaymentNotification {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// First value submitted for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn item_name(&self) -> &str {
        self.get("item_name").unwrap_or_default()
    }

    pub fn payment_status(&self) -> &str {
        self.get("payment_status").unwrap_or_default()
    }

    /// Whether the gateway reports the payment as settled.
    pub fn is_complete(&self) -> bool {
        self.payment_status() == PAYMENT_COMPLETE
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }
}

/// Data needed to send a payer to the gateway's hosted checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    /// Record kind the payment settles; selects the notification endpoint.
    pub subject: PaymentSubject,
    /// `Member #<code>` or `Order <code>`.
    pub item_name: String,
    /// Amount due in minor units.
    pub amount: i64,
    pub name_first: Option<String>,
    pub email_address: String,
}

/// Result of processing one notification, reported in logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// `payment_status` was not the success token.
    NotComplete,
    /// The gateway did not confirm the notification.
    Unverified,
    /// The record is in a status a payment may not override (rejected or cancelled).
    Refused,
    /// Every fulfilment stage had already been completed.
    AlreadyFulfilled,
    /// Fulfilment ran to completion during this call.
    Fulfilled,
}
