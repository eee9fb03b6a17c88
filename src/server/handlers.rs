//! Request handlers for the site pages.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use axum::extract::{Query, Request, State};
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::middleware::Next;
use axum::response::{Html, IntoResponse, Response};

use crate::error::AppError;
use crate::forms::{shared, SearchArray, SearchContext, SearchRow, TextBox};
use crate::git_info::GitInfo;

use super::templates;
use super::AppState;

/// The seminar search form, built once and reused across requests.
fn seminar_search_array() -> &'static SearchArray {
    static ARRAY: OnceLock<SearchArray> = OnceLock::new();
    ARRAY.get_or_init(|| {
        let speaker = shared(TextBox::new("speaker", "Speaker"));
        let title = shared(TextBox::new("title", "Title"));
        let count = shared(TextBox::new("count", "Results to display").example("50"));

        let browse = vec![
            SearchRow::Fields(vec![speaker.clone()]),
            SearchRow::Fields(vec![title.clone()]),
            SearchRow::Fields(vec![count.clone()]),
        ];
        let refine = vec![SearchRow::Fields(vec![speaker, title, count])];

        SearchArray::new(browse, refine).expect("seminar search form fields are named")
    })
}

/// Landing page; with query parameters present it becomes the search
/// results view with the form in refine mode.
pub(super) async fn index(Query(params): Query<BTreeMap<String, String>>) -> Html<String> {
    let array = seminar_search_array();

    if params.is_empty() {
        let body = templates::browse_page(&array.html(None));
        return Html(templates::base_template("Beantheory", &body));
    }

    let ctx = SearchContext::from_pairs(params);
    let recognized: Vec<(String, String)> = array
        .fields()
        .iter()
        .filter_map(|field| {
            let name = &field.core().name;
            ctx.get(name).map(|value| (name.clone(), value.to_string()))
        })
        .collect();
    let body = templates::results_page(&ctx, &recognized, &array.html(Some(&ctx)));
    Html(templates::base_template("Search results", &body))
}

pub(super) async fn about() -> Html<String> {
    Html(templates::base_template(
        "About Beantheory",
        &templates::about_page(),
    ))
}

pub(super) async fn acknowledgment() -> Html<String> {
    Html(templates::base_template(
        "Acknowledgments",
        &templates::acknowledgment_page(),
    ))
}

// geeky pages have humans.txt
pub(super) async fn humans_txt() -> Html<String> {
    acknowledgment().await
}

pub(super) async fn contact() -> Html<String> {
    Html(templates::base_template(
        "Contact and Feedback",
        &templates::contact_page(),
    ))
}

pub(super) async fn editorial_board() -> Html<String> {
    Html(templates::base_template(
        "Editorial Board",
        &templates::management_page(),
    ))
}

pub(super) async fn search() -> Html<String> {
    Html(templates::base_template(
        "Search Beantheory",
        &templates::search_page(),
    ))
}

/// A basic health check.
pub(super) async fn alive(State(state): State<AppState>) -> Result<&'static str, AppError> {
    if state.db.is_alive().await {
        Ok("Beantheory!")
    } else {
        Err(AppError::DatabaseOffline)
    }
}

/// Host, database and git metadata as a single preformatted page.
pub(super) async fn info(State(state): State<AppState>) -> Html<String> {
    let host = hostname::get()
        .map(|h| h.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "-".to_string());

    let mut output = String::new();
    output.push_str(&format!("HOSTNAME = {}\n\n", host));
    output.push_str("# PostgreSQL info\n");
    if state.db.is_alive().await {
        output.push_str(&state.db.summary());
        output.push('\n');
    } else {
        output.push_str("db is offline\n");
    }
    output.push_str("\n# GIT info\n");
    output.push_str(&GitInfo::cached().summary);
    output.push_str("\n\n");

    Html(output.replace('\n', "<br>"))
}

/// Serve the real robots.txt only on the canonical host; everything
/// else (staging, beta, direct IPs) gets a disallow-all default.
pub(super) async fn robots_txt(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let host = header_str(&headers, header::HOST.as_str()).to_lowercase();
    if host.contains(&state.settings.canonical_host.to_lowercase()) {
        let path = state.settings.static_dir.join("robots.txt");
        if let Ok(body) = tokio::fs::read_to_string(&path).await {
            return ([(header::CONTENT_TYPE, "text/plain")], body).into_response();
        }
    }
    (
        [(header::CONTENT_TYPE, "text/plain")],
        "User-agent: *\nDisallow: / \n",
    )
        .into_response()
}

pub(super) async fn favicon(State(state): State<AppState>) -> Result<Response, AppError> {
    let path = state.settings.static_dir.join("favicon.ico");
    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            Ok(([(header::CONTENT_TYPE, mime.to_string())], bytes).into_response())
        }
        Err(_) => Err(AppError::StaticFileMissing("favicon.ico".to_string())),
    }
}

/// The rendered stylesheet. Not cached in debug mode.
pub(super) async fn css(State(state): State<AppState>) -> Response {
    let cache_control = if state.settings.debug {
        "no-cache, no-store"
    } else {
        "public, max-age=600"
    };
    (
        [
            (header::CONTENT_TYPE, "text/css"),
            (header::CACHE_CONTROL, cache_control),
        ],
        templates::CSS,
    )
        .into_response()
}

/// Listing of all navigable routes, sorted by path.
pub(super) async fn sitemap() -> Html<String> {
    let mut links = super::ROUTES.to_vec();
    links.sort_by_key(|(path, _)| *path);
    Html(templates::sitemap_page(&links))
}

/// Fallback for unmatched paths.
pub(super) async fn not_found(uri: Uri) -> (StatusCode, Html<String>) {
    tracing::info!("404 error for URL {}", uri);
    let messages = [format!("{} is not a valid route.", uri.path())];
    (
        StatusCode::NOT_FOUND,
        Html(templates::not_found_404(&messages)),
    )
}

/// 301 plain-HTTP requests for the canonical host over to https.
///
/// The site runs behind a TLS-terminating proxy, so the original scheme
/// arrives in X-Forwarded-Proto.
pub(super) async fn canonical_redirect(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let host = header_str(request.headers(), header::HOST.as_str());
    let proto = header_str(request.headers(), "x-forwarded-proto");
    let proto = if proto.is_empty() { "http" } else { proto };

    if host.eq_ignore_ascii_case(&state.settings.canonical_host) && proto != "https" {
        let target = format!("https://{}{}", host, request.uri());
        return (
            StatusCode::MOVED_PERMANENTLY,
            [(header::LOCATION, target)],
        )
            .into_response();
    }

    next.run(request).await
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
}
