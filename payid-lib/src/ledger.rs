//! Ledger transaction status.
//!
//! Projects the two transaction-status shapes a ledger node can return into a
//! single [`RawTransactionStatus`]. This module only decodes and projects
//! data; it never talks to a ledger.
//!
//! # Example
//!
//! ```rust
//! use payid_lib::ledger::{GetTxResponse, RawTransactionStatus};
//!
//! let response: GetTxResponse = serde_json::from_str(r#"{
//!     "validated": true,
//!     "meta": { "transactionResult": { "result": "tesSUCCESS" } },
//!     "transaction": { "lastLedgerSequence": 42, "flags": 0, "payment": {} }
//! }"#)?;
//!
//! let status = RawTransactionStatus::from(&response);
//! assert!(status.is_full_payment());
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

/// Transaction flag marking a partial payment.
pub const TF_PARTIAL_PAYMENT: u32 = 0x0002_0000;

/// Whether `flag` is set in `flags`.
pub fn check_flag(flag: u32, flags: u32) -> bool {
    flags & flag == flag
}

/// Status record as reported by a transaction-status query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStatus {
    #[serde(default)]
    pub validated: bool,
    #[serde(default)]
    pub transaction_status_code: String,
    #[serde(default)]
    pub last_ledger_sequence: u32,
}

/// Response to a transaction lookup.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTxResponse {
    #[serde(default)]
    pub validated: bool,
    #[serde(default)]
    pub meta: TransactionMeta,
    #[serde(default)]
    pub transaction: Transaction,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMeta {
    #[serde(default)]
    pub transaction_result: TransactionResult,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResult {
    /// Engine result code such as `tesSUCCESS`.
    #[serde(default)]
    pub result: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default)]
    pub last_ledger_sequence: u32,
    #[serde(default)]
    pub flags: u32,
    /// Payment fields, present only when the transaction is a payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<serde_json::Value>,
}

impl Transaction {
    /// Whether this transaction carries a payment.
    pub fn is_payment(&self) -> bool {
        self.payment.is_some()
    }

    /// Whether the partial-payment flag is set.
    pub fn is_partial_payment(&self) -> bool {
        check_flag(TF_PARTIAL_PAYMENT, self.flags)
    }
}

/// Normalized transaction status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTransactionStatus {
    validated: bool,
    transaction_status_code: String,
    last_ledger_sequence: u32,
    is_full_payment: bool,
}

impl RawTransactionStatus {
    /// Whether the transaction has been validated.
    pub fn validated(&self) -> bool {
        self.validated
    }

    /// The transaction status code.
    pub fn transaction_status_code(&self) -> &str {
        &self.transaction_status_code
    }

    /// Last ledger sequence the transaction is valid for.
    pub fn last_ledger_sequence(&self) -> u32 {
        self.last_ledger_sequence
    }

    /// Whether the transaction is a payment that delivers the full amount.
    pub fn is_full_payment(&self) -> bool {
        self.is_full_payment
    }
}

impl From<&TransactionStatus> for RawTransactionStatus {
    /// Status records carry no payment details and count as full payments.
    fn from(status: &TransactionStatus) -> Self {
        Self {
            validated: status.validated,
            transaction_status_code: status.transaction_status_code.clone(),
            last_ledger_sequence: status.last_ledger_sequence,
            is_full_payment: true,
        }
    }
}

impl From<&GetTxResponse> for RawTransactionStatus {
    fn from(response: &GetTxResponse) -> Self {
        let transaction = &response.transaction;
        Self {
            validated: response.validated,
            transaction_status_code: response.meta.transaction_result.result.clone(),
            last_ledger_sequence: transaction.last_ledger_sequence,
            is_full_payment: transaction.is_payment() && !transaction.is_partial_payment(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tx_response(flags: u32, payment: bool) -> GetTxResponse {
        let mut value = json!({
            "validated": true,
            "meta": { "transactionResult": { "result": "tesSUCCESS" } },
            "transaction": { "lastLedgerSequence": 1200, "flags": flags }
        });
        if payment {
            value["transaction"]["payment"] = json!({ "destination": "rDest" });
        }
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_from_transaction_status() {
        let status: TransactionStatus = serde_json::from_value(json!({
            "validated": false,
            "transactionStatusCode": "tecPATH_DRY",
            "lastLedgerSequence": 77
        }))
        .unwrap();

        let raw = RawTransactionStatus::from(&status);
        assert!(!raw.validated());
        assert_eq!(raw.transaction_status_code(), "tecPATH_DRY");
        assert_eq!(raw.last_ledger_sequence(), 77);
        assert!(raw.is_full_payment());
    }

    #[test]
    fn test_full_payment() {
        let raw = RawTransactionStatus::from(&tx_response(0, true));
        assert!(raw.validated());
        assert_eq!(raw.transaction_status_code(), "tesSUCCESS");
        assert_eq!(raw.last_ledger_sequence(), 1200);
        assert!(raw.is_full_payment());
    }

    #[test]
    fn test_partial_payment_flag() {
        let raw = RawTransactionStatus::from(&tx_response(TF_PARTIAL_PAYMENT, true));
        assert!(!raw.is_full_payment());

        // Other flags alongside partial payment
        let raw = RawTransactionStatus::from(&tx_response(TF_PARTIAL_PAYMENT | 0x8000_0000, true));
        assert!(!raw.is_full_payment());

        let raw = RawTransactionStatus::from(&tx_response(0x8000_0000, true));
        assert!(raw.is_full_payment());
    }

    #[test]
    fn test_non_payment_is_not_full_payment() {
        let raw = RawTransactionStatus::from(&tx_response(0, false));
        assert!(!raw.is_full_payment());
    }

    #[test]
    fn test_missing_members_default() {
        let response: GetTxResponse = serde_json::from_str("{}").unwrap();
        let raw = RawTransactionStatus::from(&response);
        assert!(!raw.validated());
        assert_eq!(raw.transaction_status_code(), "");
        assert!(!raw.is_full_payment());
    }
}
