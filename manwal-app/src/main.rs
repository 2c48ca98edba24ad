use anyhow::{bail, Context, Result};
use chrono::DateTime;
use manwal_auth::{
    AuthState, FileSessionStore, LoginService, SessionGuard, StaticCredentials,
};
use manwal_domain::Document;
use manwal_print::{BrowserPresenter, DocumentPresenter, FilePresenter, PrintDispatcher};
use manwal_render::DocumentRenderer;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "\
manwal - نظام فواتير شركة المنوال للسفر والسياحة

Usage:
  manwal-app login <username> <password>
  manwal-app logout
  manwal-app status
  manwal-app render <document.json> [output.html]
  manwal-app print <document.json>
";

fn session_store() -> FileSessionStore {
    let dir = dirs::data_local_dir().unwrap_or_else(std::env::temp_dir);
    FileSessionStore::new(dir.join("manwal").join("session.json"))
}

fn require_session(store: Arc<FileSessionStore>) -> Result<()> {
    let guard = SessionGuard::new(store);
    match guard.check()? {
        AuthState::Authenticated(session) => {
            tracing::debug!(username = %session.username, "Session accepted");
            Ok(())
        }
        AuthState::Unauthenticated => bail!("يرجى تسجيل الدخول أولاً"),
    }
}

fn load_document(path: &Path) -> Result<Document> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    Ok(Document::from_json(&json)?)
}

async fn dispatch(document: &Document, presenter: Arc<dyn DocumentPresenter>) -> Result<()> {
    let dispatcher = PrintDispatcher::new(DocumentRenderer::new(), presenter);
    if let Err(e) = dispatcher.dispatch(document).await {
        match e {
            manwal_print::DispatchError::Validation(_) => {
                bail!("يرجى ملء البيانات المطلوبة قبل التحميل")
            }
            other => return Err(other.into()),
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "manwal_app=info,manwal_auth=info,manwal_print=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let store = Arc::new(session_store());

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["login", username, password] => {
            let service =
                LoginService::new(Arc::new(StaticCredentials::builtin()), store.clone());
            match service.login(username, password).await {
                Ok(session) => {
                    println!("تم تسجيل الدخول بنجاح، مرحباً {}", session.username);
                }
                Err(manwal_auth::AuthError::InvalidCredentials) => {
                    bail!("اسم المستخدم أو كلمة المرور غير صحيحة");
                }
                Err(e) => return Err(e.into()),
            }
        }
        ["logout"] => {
            let service =
                LoginService::new(Arc::new(StaticCredentials::builtin()), store.clone());
            service.logout()?;
            println!("تم تسجيل الخروج");
        }
        ["status"] => {
            let guard = SessionGuard::new(store.clone());
            match guard.check()? {
                AuthState::Authenticated(session) => {
                    let until = DateTime::from_timestamp_millis(session.expiry)
                        .map(|t| t.to_rfc3339())
                        .unwrap_or_else(|| session.expiry.to_string());
                    println!("مسجل الدخول: {} (حتى {})", session.username, until);
                }
                AuthState::Unauthenticated => println!("غير مسجل الدخول"),
            }
        }
        ["render", input, ..] => {
            require_session(store.clone())?;
            let input_path = PathBuf::from(input);
            let output = args
                .get(2)
                .map(PathBuf::from)
                .unwrap_or_else(|| input_path.with_extension("html"));
            let document = load_document(&input_path)?;
            if document.validate_for_generation().is_err() {
                bail!("يرجى ملء جميع الحقول المطلوبة (الاسم، الهاتف، المبلغ)");
            }
            dispatch(&document, Arc::new(FilePresenter::new(&output))).await?;
            println!("تم إنشاء {} في {}", document.invoice_number, output.display());
        }
        ["print", input] => {
            require_session(store.clone())?;
            let document = load_document(Path::new(input))?;
            dispatch(&document, Arc::new(BrowserPresenter::new())).await?;
            println!("جاري فتح نافذة الطباعة...");
        }
        _ => {
            eprint!("{USAGE}");
            std::process::exit(2);
        }
    }

    Ok(())
}
