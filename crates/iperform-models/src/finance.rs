//! Bursar records: fee accounts, payments against them, and school expenses.

use iperform_core::serde::{lenient_f64, lenient_i64, lenient_opt_string, lenient_string};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A student's fee position for one term.
///
/// `balance` is `total_fees - amount_paid` and `status` is one of
/// `"Paid"`, `"Partial"`, `"Unpaid"`; both are maintained by the inference
/// service when payments are recorded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeAccount {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub student_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub student_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub class_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub term: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_fees: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub amount_paid: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub balance: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub fee_account_id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub student_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub student_name: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub amount: f64,
    /// `"Cash"`, `"Bank Transfer"`, `"Mobile Money"`, or `"Cheque"`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub method: String,
    /// `"Tuition"`, `"Boarding"`, `"Exam"`, `"Transport"`, or `"Other"`.
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub reference: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub receipt_number: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub paid_at: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub received_by: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,
    /// `"Salaries"`, `"Supplies"`, `"Maintenance"`, `"Utilities"`,
    /// `"Events"`, `"Tax"`, or `"Other"`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub amount: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub recorded_by: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fee_account_amounts_coerce() {
        let account: FeeAccount = serde_json::from_value(json!({
            "id": 1,
            "totalFees": "50000",
            "amountPaid": 30000,
            "balance": "20000",
            "status": "Partial"
        }))
        .unwrap();
        assert_eq!(account.total_fees, 50000.0);
        assert_eq!(account.balance, 20000.0);
    }
}
