use axum::{
    http::{header, StatusCode, Uri},
    response::IntoResponse,
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "ui/dist"]
struct SiteAssets;

pub struct UiHandler;

impl UiHandler {
    /// Serves the embedded site. Unknown paths fall back to `index.html`
    /// so the client-side router can resolve them.
    pub async fn serve(uri: Uri) -> impl IntoResponse {
        let requested = uri.path().trim_start_matches('/');
        let path = if requested.is_empty() {
            "index.html"
        } else {
            requested
        };

        if let Some(asset) = SiteAssets::get(path) {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            return ([(header::CONTENT_TYPE, mime.as_ref())], asset.data).into_response();
        }

        match SiteAssets::get("index.html") {
            Some(index) => ([(header::CONTENT_TYPE, "text/html")], index.data).into_response(),
            None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
        }
    }
}
