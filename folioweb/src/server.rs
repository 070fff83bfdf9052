//! Web server module for folioweb.
//!
//! Serves the portfolio page with the current image mappings applied, the
//! admin upload form, the multipart upload endpoint, and the static assets
//! under `public/` (uploads included) as the router fallback. Handlers
//! share an `AppState` holding the mapping store and the asset root.
//!
use std::{path::PathBuf, sync::Arc};

use axum::{
    Router,
    body::Bytes,
    extract::{DefaultBodyLimit, Multipart, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::{
    config::CONFIG,
    html::{ADMIN_PAGE, apply_image_map},
};
use foliostore::{naming, store::ImageMapStore};

/// Slot recorded when the upload form omits the target field
const DEFAULT_TARGET: &str = "hero";

/// Application state shared by all handlers
pub(crate) struct AppState {
    /// Slot mapping store backed by the JSON data file
    pub(crate) store: ImageMapStore,
    /// Static asset root; uploads land in `uploads/` beneath it
    pub(crate) public_dir: PathBuf,
}

impl AppState {
    fn template_path(&self) -> PathBuf {
        self.public_dir.join("index.html")
    }

    fn uploads_dir(&self) -> PathBuf {
        self.public_dir.join("uploads")
    }
}

/// Start the web server on the configured port
pub async fn run() {
    let state = Arc::new(AppState {
        store: ImageMapStore::new(CONFIG.data_file.clone()),
        public_dir: CONFIG.public_dir.clone(),
    });

    let app = app(state);

    let addr = format!("0.0.0.0:{}", CONFIG.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind address");

    info!("server running on http://localhost:{}", CONFIG.port);

    axum::serve(listener, app).await.expect("server error");
}

/// Build the router. Dynamic routes are registered before the static
/// fallback so the rendered `/` shadows the raw template on disk.
fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/admin", get(admin_page))
        .route("/upload", post(upload_image).layer(DefaultBodyLimit::disable()))
        .fallback_service(ServeDir::new(state.public_dir.clone()))
        .with_state(state)
}

/// Serve the portfolio page, re-read from disk on every request, with the
/// current slot mappings substituted
async fn index_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, StatusCode> {
    let template = tokio::fs::read_to_string(state.template_path())
        .await
        .map_err(|err| {
            warn!(error = %err, "portfolio template unreadable");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Html(apply_image_map(&template, &state.store.read())))
}

/// Serve the static admin upload form
async fn admin_page() -> Html<&'static str> {
    Html(ADMIN_PAGE)
}

/// Accept a multipart upload, persist the file under the uploads directory,
/// and record its web path under the requested slot
async fn upload_image(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut target: Option<String> = None;
    let mut image: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::BadRequest(err.to_string()))?
    {
        // Copy the name out: the field is consumed when its body is read.
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("target") => {
                target = Some(
                    field
                        .text()
                        .await
                        .map_err(|err| ApiError::BadRequest(err.to_string()))?,
                );
            }
            Some("image") => {
                let original = field.file_name().unwrap_or("image").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|err| ApiError::BadRequest(err.to_string()))?;
                image = Some((original, bytes));
            }
            _ => {}
        }
    }

    let Some((original, bytes)) = image else {
        return Err(ApiError::BadRequest("No file uploaded".into()));
    };
    // An empty target string counts as absent, like the form posting an
    // unselected <select>.
    let target = target
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_TARGET.to_string());

    let file_name = naming::stamped_upload_name(&original);
    let uploads_dir = state.uploads_dir();
    tokio::fs::create_dir_all(&uploads_dir)
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;
    tokio::fs::write(uploads_dir.join(&file_name), &bytes)
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    // Read-modify-write with no lock: concurrent uploads race on the whole
    // file, last writer wins.
    let web_path = format!("/uploads/{file_name}");
    let mut map = state.store.read();
    map.insert(target.clone(), web_path.clone());
    state
        .store
        .write(&map)
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    info!(slot = %target, path = %web_path, "image uploaded");

    Ok((StatusCode::FOUND, [(header::LOCATION, "/")]).into_response())
}

/// Error responses for the upload endpoint
enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
        }
    }
}
