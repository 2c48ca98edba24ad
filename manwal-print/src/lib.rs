pub mod dispatcher;
pub mod presenter;

pub use dispatcher::{DispatchError, PrintDispatcher};
pub use presenter::{BrowserPresenter, DocumentPresenter, FilePresenter, PresentationError};
