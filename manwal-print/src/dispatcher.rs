use crate::presenter::{DocumentPresenter, PresentationError};
use manwal_domain::{Document, ValidationError};
use manwal_render::DocumentRenderer;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Presentation(#[from] PresentationError),
}

/// Validate → render → present. Validation runs first so no partial
/// document is ever produced for an incomplete form.
pub struct PrintDispatcher {
    renderer: DocumentRenderer,
    presenter: Arc<dyn DocumentPresenter>,
}

impl PrintDispatcher {
    pub fn new(renderer: DocumentRenderer, presenter: Arc<dyn DocumentPresenter>) -> Self {
        Self { renderer, presenter }
    }

    pub async fn dispatch(&self, document: &Document) -> Result<(), DispatchError> {
        if let Err(e) = document.validate_for_print() {
            warn!(error = %e, "Dispatch refused");
            return Err(e.into());
        }

        let html = self.renderer.render(document);
        self.presenter.present(&html).await?;
        Ok(())
    }
}
