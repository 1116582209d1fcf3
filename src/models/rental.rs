// Rental data models
//
// Field names on the wire follow the dashboard's stored JSON so data written
// by earlier versions keeps loading.
use super::coerce::{lenient_opt_u32, lenient_opt_u64, lenient_text, lenient_u32, lenient_u64};
use crate::utils::{end_instant, seconds_remaining};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type RentalId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RentalStatus {
    #[default]
    Normal,
    UnderRepair,
    Expired,
}

impl RentalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RentalStatus::Normal => "Normal",
            RentalStatus::UnderRepair => "Perbaikan",
            RentalStatus::Expired => "Waktu Habis",
        }
    }
}

impl From<String> for RentalStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Perbaikan" | "UnderRepair" => RentalStatus::UnderRepair,
            "Waktu Habis" | "Expired" => RentalStatus::Expired,
            _ => RentalStatus::Normal,
        }
    }
}

impl From<RentalStatus> for String {
    fn from(value: RentalStatus) -> Self {
        value.label().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Transfer,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Tunai",
            PaymentMethod::Transfer => "Transfer",
        }
    }
}

impl From<String> for PaymentMethod {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Transfer" => PaymentMethod::Transfer,
            _ => PaymentMethod::Cash,
        }
    }
}

impl From<PaymentMethod> for String {
    fn from(value: PaymentMethod) -> Self {
        value.label().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    pub id: RentalId,
    #[serde(rename = "nama", default)]
    pub customer_name: String,
    #[serde(rename = "jenis", default)]
    pub item_type: String,
    /// Optional contact (usually an email); stored as an empty string when absent
    #[serde(rename = "gmail", default)]
    pub contact: String,
    #[serde(rename = "harga", default, deserialize_with = "lenient_u64")]
    pub price: u64,
    #[serde(rename = "metode", default)]
    pub payment_method: PaymentMethod,
    #[serde(rename = "durasiDays", default, deserialize_with = "lenient_u32")]
    pub duration_days: u32,
    #[serde(rename = "startISO")]
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub status: RentalStatus,
}

impl Rental {
    pub fn end(&self) -> DateTime<Utc> {
        end_instant(self.start, self.duration_days)
    }

    pub fn seconds_remaining(&self, now: DateTime<Utc>) -> u64 {
        seconds_remaining(self.start, self.duration_days, now)
    }

    /// Still running at `now`. A rental ending exactly at `now` is not active.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.seconds_remaining(now) > 0
    }
}

/// Raw "Input Data" form payload. Numeric fields are kept as text and
/// coerced when the rental is created.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RentalInput {
    #[serde(rename = "nama", default)]
    pub customer_name: String,
    #[serde(rename = "jenis", default)]
    pub item_type: String,
    #[serde(rename = "gmail", default)]
    pub contact: Option<String>,
    #[serde(rename = "harga", default, deserialize_with = "lenient_text")]
    pub price: Option<String>,
    #[serde(rename = "metode", default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(rename = "durasiDays", default, deserialize_with = "lenient_text")]
    pub duration_days: Option<String>,
}

impl RentalInput {
    pub fn new(
        customer_name: impl Into<String>,
        item_type: impl Into<String>,
        price: impl ToString,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            item_type: item_type.into(),
            price: Some(price.to_string()),
            ..Default::default()
        }
    }

    pub fn contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(contact.into());
        self
    }

    pub fn payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = Some(method);
        self
    }

    pub fn duration_days(mut self, days: impl ToString) -> Self {
        self.duration_days = Some(days.to_string());
        self
    }
}

/// Partial update for an existing rental; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RentalPatch {
    #[serde(rename = "nama", default)]
    pub customer_name: Option<String>,
    #[serde(rename = "jenis", default)]
    pub item_type: Option<String>,
    #[serde(rename = "gmail", default)]
    pub contact: Option<String>,
    #[serde(rename = "harga", default, deserialize_with = "lenient_opt_u64")]
    pub price: Option<u64>,
    #[serde(rename = "metode", default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(rename = "durasiDays", default, deserialize_with = "lenient_opt_u32")]
    pub duration_days: Option<u32>,
    #[serde(default)]
    pub status: Option<RentalStatus>,
}

impl RentalPatch {
    pub fn status(status: RentalStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn apply(self, rental: &mut Rental) {
        if let Some(customer_name) = self.customer_name {
            rental.customer_name = customer_name;
        }
        if let Some(item_type) = self.item_type {
            rental.item_type = item_type;
        }
        if let Some(contact) = self.contact {
            rental.contact = contact;
        }
        if let Some(price) = self.price {
            rental.price = price;
        }
        if let Some(payment_method) = self.payment_method {
            rental.payment_method = payment_method;
        }
        if let Some(duration_days) = self.duration_days {
            rental.duration_days = duration_days;
        }
        if let Some(status) = self.status {
            rental.status = status;
        }
    }
}
