pub mod document;
pub mod models;

pub use document::{Document, DocumentBody, DocumentError, ValidationError};
pub use models::{FlightDetails, InvoiceType, ReceiptDetails, SeatClass, Traveler};
