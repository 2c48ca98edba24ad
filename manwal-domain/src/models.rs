use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Travel class of a single traveler
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SeatClass {
    #[default]
    Economy,
    Business,
    First,
}

impl SeatClass {
    /// Parse a stored value; anything outside the enumeration falls back
    /// to Economy rather than failing.
    pub fn parse(value: &str) -> Self {
        match value {
            "business" => SeatClass::Business,
            "first" => SeatClass::First,
            _ => SeatClass::Economy,
        }
    }

    /// Fixed display label for the printed document
    pub fn label(&self) -> &'static str {
        match self {
            SeatClass::Economy => "الاقتصادية",
            SeatClass::Business => "رجال الأعمال",
            SeatClass::First => "الدرجة الأولى",
        }
    }
}

impl From<String> for SeatClass {
    fn from(value: String) -> Self {
        SeatClass::parse(&value)
    }
}

/// One passenger line item on a document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Traveler {
    pub id: Uuid,
    pub name: String,
    pub age: String,
    pub luggage_weight: String,
    pub seat_class: SeatClass,
}

impl Traveler {
    /// A fresh traveler with empty fields and a stable id
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            age: String::new(),
            luggage_weight: String::new(),
            seat_class: SeatClass::Economy,
        }
    }
}

impl Default for Traveler {
    fn default() -> Self {
        Self::new()
    }
}

/// Which of the two rendering branches a document uses
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceType {
    #[default]
    Invoice,
    Receipt,
}

/// Flight fields, meaningful only in invoice mode. All free text; dates are
/// entered by the operator and printed as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct FlightDetails {
    pub departure_date: String,
    pub return_date: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub flight_number: String,
    pub airline: String,
}

/// Payment fields, meaningful only in receipt mode
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ReceiptDetails {
    pub amount_received: String,
    pub remaining_amount: String,
    pub receipt_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_class_tolerant_default() {
        assert_eq!(SeatClass::parse("vip"), SeatClass::Economy);
        assert_eq!(SeatClass::parse(""), SeatClass::Economy);
        assert_eq!(SeatClass::parse("business"), SeatClass::Business);
        assert_eq!(SeatClass::parse("first"), SeatClass::First);
    }

    #[test]
    fn test_seat_class_deserializes_unknown_as_economy() {
        let traveler: Traveler =
            serde_json::from_str(r#"{"name": "Test", "seat_class": "vip"}"#).unwrap();
        assert_eq!(traveler.seat_class, SeatClass::Economy);
        assert_eq!(traveler.seat_class.label(), "الاقتصادية");
    }

    #[test]
    fn test_traveler_ids_are_unique() {
        let a = Traveler::new();
        let b = Traveler::new();
        assert_ne!(a.id, b.id);
    }
}
