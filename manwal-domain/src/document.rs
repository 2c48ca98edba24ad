use crate::models::{FlightDetails, InvoiceType, ReceiptDetails, Traveler};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The single in-progress invoice or receipt backing the editing session.
///
/// Both detail sets are stored regardless of `invoice_type`; switching the
/// type only changes which branch the renderer sees, it never clears the
/// other branch's fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Document {
    /// Generated once at creation, stable for the session
    pub invoice_number: String,
    pub invoice_type: InvoiceType,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    /// Grand total for invoices, total amount for receipts. Free-text
    /// currency amount, printed as entered.
    pub price: String,
    pub notes: String,
    pub flight: FlightDetails,
    pub receipt: ReceiptDetails,
    /// Insertion order determines the printed row numbers. Never shorter
    /// than one entry.
    pub travelers: Vec<Traveler>,
}

/// Tagged view over the branch that is relevant for the document's type.
/// The renderer branches on this, never on the flat fields.
#[derive(Debug)]
pub enum DocumentBody<'a> {
    Invoice(&'a FlightDetails),
    Receipt(&'a ReceiptDetails),
}

impl Document {
    /// A blank document with a generated number and a single empty traveler
    pub fn new() -> Self {
        Self {
            invoice_number: format!("INV-{}", Utc::now().timestamp_millis()),
            invoice_type: InvoiceType::Invoice,
            customer_name: String::new(),
            customer_phone: String::new(),
            customer_address: String::new(),
            price: String::new(),
            notes: String::new(),
            flight: FlightDetails::default(),
            receipt: ReceiptDetails::default(),
            travelers: vec![Traveler::new()],
        }
    }

    /// Load a document from its JSON form. Missing fields take their
    /// defaults; an empty traveler list is normalized back to one entry so
    /// the minimum-length invariant holds for any input.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let mut document: Document = serde_json::from_str(json)?;
        if document.travelers.is_empty() {
            document.travelers.push(Traveler::new());
        }
        Ok(document)
    }

    /// Switch the rendering branch, preserving both branches' fields
    pub fn set_invoice_type(&mut self, invoice_type: InvoiceType) {
        self.invoice_type = invoice_type;
    }

    /// The branch the renderer should print for this document
    pub fn body(&self) -> DocumentBody<'_> {
        match self.invoice_type {
            InvoiceType::Invoice => DocumentBody::Invoice(&self.flight),
            InvoiceType::Receipt => DocumentBody::Receipt(&self.receipt),
        }
    }

    /// Append a defaulted traveler and return its id
    pub fn add_traveler(&mut self) -> Uuid {
        let traveler = Traveler::new();
        let id = traveler.id;
        self.travelers.push(traveler);
        id
    }

    /// Remove a traveler by id. A no-op when only one traveler remains or
    /// the id is unknown; returns whether a row was removed.
    pub fn remove_traveler(&mut self, id: &Uuid) -> bool {
        if self.travelers.len() <= 1 {
            return false;
        }
        let before = self.travelers.len();
        self.travelers.retain(|t| &t.id != id);
        self.travelers.len() < before
    }

    /// Mutable access to one traveler for field-level updates
    pub fn traveler_mut(&mut self, id: &Uuid) -> Option<&mut Traveler> {
        self.travelers.iter_mut().find(|t| &t.id == id)
    }

    /// Gate for the create-document action: name, phone and price must be
    /// filled in before a document is announced as ready.
    pub fn validate_for_generation(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.customer_name.is_empty() {
            missing.push("customer_name");
        }
        if self.customer_phone.is_empty() {
            missing.push("customer_phone");
        }
        if self.price.is_empty() {
            missing.push("price");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }

    /// Gate for print/export dispatch: name and price must be filled in,
    /// otherwise no document is produced at all.
    pub fn validate_for_print(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.customer_name.is_empty() {
            missing.push("customer_name");
        }
        if self.price.is_empty() {
            missing.push("price");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("invalid document data: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("required fields missing: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeatClass;

    #[test]
    fn test_new_document_has_one_traveler_and_a_number() {
        let document = Document::new();
        assert_eq!(document.travelers.len(), 1);
        assert!(document.invoice_number.starts_with("INV-"));
        assert_eq!(document.invoice_type, InvoiceType::Invoice);
    }

    #[test]
    fn test_removal_never_drops_below_one_traveler() {
        let mut document = Document::new();
        let only = document.travelers[0].id;

        assert!(!document.remove_traveler(&only));
        assert_eq!(document.travelers.len(), 1);

        // Still refused after repeated attempts
        assert!(!document.remove_traveler(&only));
        assert_eq!(document.travelers.len(), 1);
    }

    #[test]
    fn test_remove_by_id_preserves_order_of_the_rest() {
        let mut document = Document::new();
        let first = document.travelers[0].id;
        let second = document.add_traveler();
        let third = document.add_traveler();
        let fourth = document.add_traveler();

        assert!(document.remove_traveler(&second));
        let remaining: Vec<_> = document.travelers.iter().map(|t| t.id).collect();
        assert_eq!(remaining, vec![first, third, fourth]);
    }

    #[test]
    fn test_remove_unknown_id_is_a_noop() {
        let mut document = Document::new();
        document.add_traveler();
        assert!(!document.remove_traveler(&Uuid::new_v4()));
        assert_eq!(document.travelers.len(), 2);
    }

    #[test]
    fn test_traveler_field_update_by_id() {
        let mut document = Document::new();
        let id = document.add_traveler();

        let traveler = document.traveler_mut(&id).unwrap();
        traveler.name = "Test".to_string();
        traveler.seat_class = SeatClass::Business;

        assert_eq!(document.traveler_mut(&id).unwrap().name, "Test");
        assert_eq!(document.travelers[0].name, "");
    }

    #[test]
    fn test_type_switch_preserves_both_branches() {
        let mut document = Document::new();
        document.flight.flight_number = "EK123".to_string();
        document.flight.airline = "Emirates".to_string();
        document.receipt.amount_received = "500".to_string();
        document.receipt.receipt_message = "first installment".to_string();

        document.set_invoice_type(InvoiceType::Receipt);
        document.set_invoice_type(InvoiceType::Invoice);

        assert_eq!(document.flight.flight_number, "EK123");
        assert_eq!(document.flight.airline, "Emirates");
        assert_eq!(document.receipt.amount_received, "500");
        assert_eq!(document.receipt.receipt_message, "first installment");
    }

    #[test]
    fn test_body_follows_the_type_tag() {
        let mut document = Document::new();
        assert!(matches!(document.body(), DocumentBody::Invoice(_)));
        document.set_invoice_type(InvoiceType::Receipt);
        assert!(matches!(document.body(), DocumentBody::Receipt(_)));
    }

    #[test]
    fn test_generation_refused_without_customer_name() {
        let mut document = Document::new();
        document.customer_phone = "0910000000".to_string();
        document.price = "100".to_string();

        let err = document.validate_for_generation().unwrap_err();
        assert_eq!(err, ValidationError::MissingFields(vec!["customer_name"]));
    }

    #[test]
    fn test_print_gate_only_requires_name_and_price() {
        let mut document = Document::new();
        document.customer_name = "Customer".to_string();
        document.price = "100".to_string();

        assert!(document.validate_for_print().is_ok());
        // Generation is stricter: it also wants the phone
        assert!(document.validate_for_generation().is_err());
    }

    #[test]
    fn test_from_json_normalizes_empty_traveler_list() {
        let document = Document::from_json(r#"{"customer_name": "X", "travelers": []}"#).unwrap();
        assert_eq!(document.travelers.len(), 1);
    }

    #[test]
    fn test_json_round_trip() {
        let mut document = Document::new();
        document.customer_name = "Customer".to_string();
        document.receipt.amount_received = "500".to_string();

        let json = serde_json::to_string(&document).unwrap();
        let back = Document::from_json(&json).unwrap();
        assert_eq!(back, document);
    }
}
