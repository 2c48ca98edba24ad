//! End-to-end flow: login, edit a document, dispatch it to a presenter,
//! log out.

use async_trait::async_trait;
use manwal_auth::{
    AuthState, LoginService, MemorySessionStore, SessionGuard, StaticCredentials,
};
use manwal_domain::{Document, InvoiceType};
use manwal_print::{DocumentPresenter, PresentationError, PrintDispatcher};
use manwal_render::DocumentRenderer;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Default)]
struct RecordingPresenter {
    presented: Mutex<Vec<String>>,
}

#[async_trait]
impl DocumentPresenter for RecordingPresenter {
    async fn present(&self, html: &str) -> Result<(), PresentationError> {
        self.presented.lock().unwrap().push(html.to_string());
        Ok(())
    }
}

#[tokio::test]
async fn test_login_edit_print_logout() {
    let store = Arc::new(MemorySessionStore::new());
    let login = LoginService::new(Arc::new(StaticCredentials::builtin()), store.clone())
        .with_delay(Duration::ZERO);
    let guard = SessionGuard::new(store.clone());

    // Gate: no session yet
    assert_eq!(guard.check().unwrap(), AuthState::Unauthenticated);

    // Sign in with the built-in pair
    login.login("Ayoub", "11223344").await.unwrap();
    let AuthState::Authenticated(session) = guard.check().unwrap() else {
        panic!("expected an authenticated session after login");
    };
    assert_eq!(session.username, "Ayoub");

    // Fill in a receipt with one traveler
    let mut document = Document::new();
    document.set_invoice_type(InvoiceType::Receipt);
    document.customer_name = "سالم أحمد".to_string();
    document.customer_phone = "0910000000".to_string();
    document.price = "500".to_string();
    document.receipt.amount_received = "500".to_string();
    document.receipt.remaining_amount = "0".to_string();
    document.travelers[0].name = "Test".to_string();

    // Dispatch to the recording surface
    let presenter = Arc::new(RecordingPresenter::default());
    let dispatcher = PrintDispatcher::new(DocumentRenderer::new(), presenter.clone());
    dispatcher.dispatch(&document).await.unwrap();

    let documents = presenter.presented.lock().unwrap().clone();
    assert_eq!(documents.len(), 1);
    let html = &documents[0];
    assert!(html.contains("تفاصيل الاستلام"));
    assert!(html.contains("500 د.ل"));
    assert!(html.contains("Test"));
    assert!(!html.contains("تفاصيل الرحلة"));

    // Log out: gate closes again
    login.logout().unwrap();
    assert_eq!(guard.check().unwrap(), AuthState::Unauthenticated);
}

#[tokio::test]
async fn test_incomplete_document_produces_nothing() {
    let presenter = Arc::new(RecordingPresenter::default());
    let dispatcher = PrintDispatcher::new(DocumentRenderer::new(), presenter.clone());

    let mut document = Document::new();
    document.customer_phone = "0910000000".to_string();
    document.price = "100".to_string();

    assert!(dispatcher.dispatch(&document).await.is_err());
    assert!(presenter.presented.lock().unwrap().is_empty());
}
