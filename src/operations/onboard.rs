//! Merchant onboarding submission.
//!
//! Onboarding is form-encoded. Each detail group becomes a bracketed
//! namespace (`account_details[legal_name]`) and the uploaded document ids
//! are repeated as `document_ids[]`.

use serde::{Deserialize, Serialize};

use super::{ContentType, Description, Operation};
use crate::clients::HttpMethod;
use crate::config::Endpoint;

/// Submits a merchant onboarding application.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOnboard {
    /// Display name of the merchant.
    pub name: String,
    /// Whether the merchant accepted the service agreement.
    pub agreement_accepted: bool,
    /// Ids of documents previously sent with
    /// [`UploadDocument`](super::UploadDocument).
    pub document_ids: Vec<String>,
    /// Sent as `account_details[...]`.
    pub account_details: AccountDetails,
    /// Sent as `business_details[...]`.
    pub business_details: BusinessDetails,
    /// Sent as `statement_details[...]`.
    pub statement_details: StatementDetails,
    /// Sent as `transfer_details[...]`.
    pub transfer_details: TransferDetails,
    /// Sent as `policy_acceptance_details[...]`.
    pub policy_acceptance_details: PolicyAcceptanceDetails,
}

impl Operation for CreateOnboard {
    fn describe(&self) -> Description {
        Description::new(Endpoint::API_STAGING, HttpMethod::Post, "/onboard")
            .with_content_type(ContentType::Form)
    }
}

/// Company information, or business information for individuals.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDetails {
    /// `company` or `individual`.
    pub entity_type: String,
    /// Registered legal name.
    pub legal_name: String,
    /// Tax identification number.
    pub tax_id: String,
    /// Registered address.
    pub address: String,
    /// Branch name, sent as `branch`.
    #[serde(rename = "branch")]
    pub branch_name: String,
    /// Postal code of the registered address.
    pub postal_code: String,
    /// Website where payments are taken.
    pub website_url: String,
    /// Notes on the website, e.g. login details for review.
    pub website_notes: String,
    /// Signing authority (companies) or contact (individuals).
    pub full_name: String,
    /// Birth date of the contact, `YYYY-MM-DD`.
    pub birth_date: String,
    /// Landline number.
    pub phone: String,
    /// Mobile number.
    pub mobile: String,
}

/// What the merchant sells and how.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessDetails {
    /// Merchant category code, sent as `merchant_category_id`.
    #[serde(rename = "merchant_category_id")]
    pub merchant_category: String,
    /// Description of the goods or services.
    pub description: String,
    /// Other payment methods already accepted.
    pub other_payment: String,
    /// How long the business has operated.
    pub business_age: String,
    /// Expected monthly transaction volume.
    pub approximate_transaction: String,
    /// Average order value.
    pub basket_size: String,
    /// How goods reach the customer.
    pub delivery_method: String,
    /// Refund terms offered to customers.
    pub refund_policy: String,
}

/// How charges appear on card statements.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementDetails {
    /// Descriptor printed on the cardholder statement.
    pub statement_name: String,
}

/// Bank account receiving transfers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferDetails {
    /// Bank code, e.g. `bbl`.
    pub bank_account_brand: String,
    /// Account number.
    pub bank_account_number: String,
    /// Account holder name.
    pub bank_account_name: String,
}

/// Policy acknowledgements required to onboard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyAcceptanceDetails {
    /// Terms and conditions accepted.
    pub terms_and_conditions_accepted: bool,
    /// Privacy policy accepted.
    pub privacy_policy_accepted: bool,
    /// Data protection policy accepted.
    pub data_protection_policy_accepted: bool,
    /// Refund policy accepted.
    pub refund_policy_accepted: bool,
}

/// Onboarding application state returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Onboard {
    /// Always `onboard`.
    pub object: String,
    /// Application identifier.
    pub id: String,
    /// Review state, e.g. `pending`.
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::encode_form;

    #[test]
    fn test_form_uses_bracketed_groups() {
        let op = CreateOnboard {
            name: "Acme".to_string(),
            account_details: AccountDetails {
                branch_name: "HQ".to_string(),
                ..AccountDetails::default()
            },
            business_details: BusinessDetails {
                merchant_category: "5411".to_string(),
                ..BusinessDetails::default()
            },
            ..CreateOnboard::default()
        };

        let form = encode_form(&op).unwrap();
        assert!(form.starts_with("name=Acme&agreement_accepted=false&"));
        assert!(form.contains("account_details%5Bbranch%5D=HQ"));
        assert!(form.contains("business_details%5Bmerchant_category_id%5D=5411"));
        assert!(form.contains("policy_acceptance_details%5Brefund_policy_accepted%5D=false"));
    }

    #[test]
    fn test_document_ids_repeat_with_bracket_suffix() {
        let op = CreateOnboard {
            document_ids: vec!["docu_1".to_string(), "docu_2".to_string()],
            ..CreateOnboard::default()
        };

        let form = encode_form(&op).unwrap();
        assert!(form.contains("document_ids%5B%5D=docu_1&document_ids%5B%5D=docu_2"));
    }
}
