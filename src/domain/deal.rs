//! Deal - Real-estate Transaction Records
//!
//! Typed records for the dashboard. Tables consume them as [`Row`]s.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::row::Row;
use crate::error::{Error, Result};
use crate::guards::narrow_success_response;

/// Transaction type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    Purchase,
    Listing,
    #[serde(rename = "Lease Listing")]
    LeaseListing,
    Lease,
}

/// Transaction status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    #[serde(rename = "Pre-contract")]
    PreContract,
    #[serde(rename = "Under Contract")]
    UnderContract,
    Closed,
}

/// Wire names of every transaction type
pub const TRANSACTION_TYPES: &[&str] = &["Purchase", "Listing", "Lease Listing", "Lease"];

/// Wire names of every transaction status
pub const TRANSACTION_STATUSES: &[&str] = &["Pre-contract", "Under Contract", "Closed"];

/// A real-estate deal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub client_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    pub price: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub status: TransactionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mls_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lost_deals: Option<f64>,
}

/// A file attached to a deal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub modified_date: String,
    /// Size in kilobytes, as sent by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_by: Option<String>,
}

/// A person involved in a deal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
}

impl Party {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One recipient of a commission split
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionParty {
    pub id: String,
    pub name: String,
    pub role: String,
    pub percentage: f64,
    pub amount: f64,
}

/// Commission split for a deal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionSplit {
    pub total_commission: f64,
    pub parties: Vec<CommissionParty>,
}

/// Everything the dashboard shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeskData {
    pub transactions: Vec<Transaction>,
    pub documents: Vec<Document>,
    pub parties: Vec<Party>,
    pub commission: CommissionSplit,
}

/// Sample payload bundled with the app
const SAMPLE_PAYLOAD: &str = include_str!("fixtures/deals.json");

impl DeskData {
    /// Parse an API envelope carrying desk data
    pub fn from_envelope(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        narrow_success_response(&value)
    }

    /// The bundled sample data
    pub fn sample() -> Result<Self> {
        Self::from_envelope(SAMPLE_PAYLOAD)
    }
}

/// Convert a typed record into a table row
pub fn to_row<T: Serialize>(record: &T) -> Result<Row> {
    Row::from_value(serde_json::to_value(record)?).ok_or(Error::Shape {
        expected: "object record",
    })
}

/// Convert typed records into table rows
pub fn to_rows<T: Serialize>(records: &[T]) -> Result<Vec<Row>> {
    records.iter().map(to_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guards::{is_email, is_enum_value, is_phone_number};
    use serde_json::json;

    #[test]
    fn test_sample_parses() {
        let data = DeskData::sample().expect("sample data");
        assert_eq!(data.transactions.len(), 5);
        assert_eq!(data.transactions[3].kind, TransactionType::LeaseListing);
        assert_eq!(data.commission.parties.len(), 2);
    }

    #[test]
    fn test_sample_rows_pass_guards() {
        let data = DeskData::sample().expect("sample data");
        for row in to_rows(&data.transactions).expect("rows") {
            assert!(is_enum_value(row.value("status"), TRANSACTION_STATUSES));
            assert!(is_enum_value(row.value("type"), TRANSACTION_TYPES));
        }
        for row in to_rows(&data.parties).expect("rows") {
            assert!(is_email(row.value("email")));
            assert!(is_phone_number(row.value("phone")));
        }
    }

    #[test]
    fn test_to_row_uses_wire_names() {
        let party = CommissionParty {
            id: "C-9".into(),
            name: "Ann".into(),
            role: "Agent".into(),
            percentage: 0.0,
            amount: 12.5,
        };
        let row = to_row(&party).expect("row");
        assert_eq!(row.id("id"), "C-9");
        assert_eq!(row.value("amount"), &json!(12.5));
        assert!(to_row(&"not a record").is_err());
    }

    #[test]
    fn test_failed_envelope_is_rejected() {
        let result = DeskData::from_envelope(
            r#"{"success": false, "error": {"code": "DOWN", "message": "offline"}}"#,
        );
        assert!(matches!(result, Err(Error::Shape { .. })));
    }
}
