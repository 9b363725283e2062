// Data structures persisted in the session store. Field names and enum
// values are pinned to the stored JSON format: camelCase keys, lowercase
// statuses, "1-person"/"full_year"/"credit_card" style variants.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::RoomKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum RequestStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "approved")]
    Approved,
    #[serde(rename = "rejected")]
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum StayDuration {
    #[serde(rename = "semester")]
    Semester,
    #[serde(rename = "full_year")]
    FullYear,
}

impl StayDuration {
    // Billing rule: a full year at the room's listed price, a semester at half.
    pub fn price_for(&self, room_price: u32) -> u32 {
        match self {
            StayDuration::Semester => room_price / 2,
            StayDuration::FullYear => room_price,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum PaymentMethod {
    #[serde(rename = "credit_card")]
    CreditCard,
    #[serde(rename = "bank_transfer")]
    BankTransfer,
    #[serde(rename = "ussd")]
    Ussd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum PaymentStatus {
    #[serde(rename = "completed")]
    Completed,
}

// A user's claim on a specific room, pending payment confirmation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationRequest {
    pub id: String,
    pub hostel_id: String,
    pub hostel_name: String,
    pub room_id: String,
    pub room_type: RoomKind,
    pub duration: StayDuration,
    pub price: u32,
    pub status: RequestStatus,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub amount: u32,
    pub accommodation_id: String,
    pub payment_method: PaymentMethod,
    pub status: PaymentStatus,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub matric_number: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

static LAST_ID: AtomicI64 = AtomicI64::new(0);

// Time-derived record id: epoch milliseconds, bumped past the previous id
// so two records created in the same millisecond stay distinct.
pub fn next_id() -> String {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_ID.load(Ordering::SeqCst);
    loop {
        let candidate = now.max(last + 1);
        match LAST_ID.compare_exchange(last, candidate, Ordering::SeqCst, Ordering::SeqCst) {
            Ok(_) => return candidate.to_string(),
            Err(observed) => last = observed,
        }
    }
}

// Current instant as an ISO-8601 string with millisecond precision,
// matching the format already present in stored records.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
