//! Card tokenization against the vault.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ContentType, Description, Operation};
use crate::clients::HttpMethod;
use crate::config::Endpoint;

/// Exchanges raw card details for a single-use token.
///
/// Targets the vault, so it is authorized with the public key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateToken {
    /// Sent as `card[...]`.
    pub card: TokenCard,
}

impl Operation for CreateToken {
    fn describe(&self) -> Description {
        Description::new(Endpoint::VAULT, HttpMethod::Post, "/tokens")
            .with_content_type(ContentType::Form)
    }
}

/// Card details submitted for tokenization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCard {
    /// Cardholder name.
    pub name: String,
    /// Full card number.
    pub number: String,
    /// Expiration month, `1` to `12`.
    pub expiration_month: u8,
    /// Four-digit expiration year.
    pub expiration_year: u16,
    /// CVV; omitted when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_code: Option<String>,
    /// Billing city; omitted when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Billing postal code; omitted when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// A card token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Always `token`.
    pub object: String,
    /// Token identifier (`tokn_...`).
    pub id: String,
    /// Whether the token was created with live keys.
    pub livemode: bool,
    /// Whether the token has been consumed by a charge.
    pub used: bool,
    /// The tokenized card.
    pub card: Card,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// Card summary attached to a token. Never carries the full number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Always `card`.
    pub object: String,
    /// Card identifier (`card_...`).
    pub id: String,
    /// Card network, e.g. `Visa`.
    pub brand: String,
    /// Last four digits of the number.
    pub last_digits: String,
    /// Expiration month.
    pub expiration_month: u8,
    /// Expiration year.
    pub expiration_year: u16,
}
