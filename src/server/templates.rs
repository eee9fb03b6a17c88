//! HTML page templates for the Beantheory site.
//!
//! Pages are assembled by hand: `format!` over raw strings with explicit
//! escaping. Search-form tables come pre-rendered from `crate::forms`.

use chrono::{DateTime, Utc};

use crate::forms::{html_escape, SearchContext};
use crate::git_info::GitInfo;
use crate::BEANTHEORY_VERSION;

/// Meta description for every page.
pub const META_DESCRIPTION: &str =
    "Welcome to Beantheory, a listing of mathematical research seminars and conferences.";

/// Feedback form linked from the footer.
pub const FEEDBACK_URL: &str =
    "https://docs.google.com/spreadsheet/viewform?formkey=dDJXYXBleU1BMTFERFFIdjVXVmJqdlE6MQ";

/// Base page shell: header navigation, title block, footer with the
/// funding line, release string and git banner.
pub fn base_template(title: &str, content: &str) -> String {
    let git = GitInfo::cached();
    let thanks = r#"This project is supported by <a href="/acknowledgment#sponsors">grants</a> from the US National Science Foundation, the UK Engineering and Physical Sciences Research Council, and the Simons Foundation."#;

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="description" content="{meta}">
    <title>{title} - Beantheory</title>
    <link rel="stylesheet" href="/style.css">
</head>
<body>
    <header id="main-header">
        <nav>
            <a href="/" class="logo">Beantheory</a>
            <a href="/about">about</a>
            <a href="/search">search</a>
            <a href="/contact">contact</a>
        </nav>
    </header>
    <main>
        <h1>{title}</h1>
        {content}
    </main>
    <footer>
        <p>{thanks}</p>
        <p>{version} &middot; {source} &middot; {changeset} &middot; <a href="{feedback}">Feedback</a></p>
    </footer>
</body>
</html>"#,
        meta = META_DESCRIPTION,
        title = html_escape(title),
        content = content,
        thanks = thanks,
        version = BEANTHEORY_VERSION,
        source = git.source_link(),
        changeset = git.changeset_link(),
        feedback = FEEDBACK_URL,
    )
}

/// The landing page: intro line plus the browse-mode search form.
pub fn browse_page(form_html: &str) -> String {
    format!(
        r#"
    <p>{meta}</p>
    <form method="get" action="/">
{form}
      <button type="submit">Search</button>
    </form>
    "#,
        meta = META_DESCRIPTION,
        form = form_html,
    )
}

/// The results view: the recognized query echoed back, plus the form in
/// refine mode for narrowing further.
///
/// The result listing itself is produced by the query layer, which is
/// not wired up here.
pub fn results_page(ctx: &SearchContext, recognized: &[(String, String)], form_html: &str) -> String {
    let mut items = String::new();
    for (name, value) in recognized {
        items.push_str(&format!(
            "\n        <li><strong>{}</strong>: {}</li>",
            html_escape(name),
            html_escape(value)
        ));
    }
    let params = if items.is_empty() {
        "<p>No recognized search parameters.</p>".to_string()
    } else {
        format!("<ul class=\"query-params\">{items}\n    </ul>")
    };
    let ignored = ctx
        .iter()
        .filter(|(name, _)| !recognized.iter().any(|(r, _)| r == name))
        .map(|(name, _)| html_escape(name))
        .collect::<Vec<_>>()
        .join(", ");
    let ignored_note = if ignored.is_empty() {
        String::new()
    } else {
        format!("<p class=\"muted\">Ignored parameters: {ignored}</p>")
    };

    format!(
        r#"
    {params}
    {ignored_note}
    <h2>Refine search</h2>
    <form method="get" action="/">
{form}
      <button type="submit">Refine</button>
    </form>
    "#,
        params = params,
        ignored_note = ignored_note,
        form = form_html,
    )
}

/// About page body.
pub fn about_page() -> String {
    r#"
    <p>Beantheory is a listing of mathematical research seminars and
    conferences, collected so that talks are easy to find wherever they
    are hosted.</p>
    <p>The site is developed in the open; see the source and changeset
    links in the footer.</p>
    "#
    .to_string()
}

/// Acknowledgments page body; also served as /humans.txt.
pub fn acknowledgment_page() -> String {
    r#"
    <p>Beantheory exists thanks to the seminar organizers who keep their
    listings current, and to everyone filing corrections through the
    feedback form.</p>
    <h2 id="sponsors">Sponsors</h2>
    <p>This project is supported by grants from the US National Science
    Foundation, the UK Engineering and Physical Sciences Research
    Council, and the Simons Foundation.</p>
    "#
    .to_string()
}

/// Contact page body.
pub fn contact_page() -> String {
    format!(
        r#"
    <p>Questions, corrections and suggestions are all welcome.</p>
    <ul>
        <li>Use the <a href="{FEEDBACK_URL}">feedback form</a> for listing corrections.</li>
        <li>For everything else, contact the <a href="/editorial-board">editorial board</a>.</li>
    </ul>
    "#
    )
}

/// Editorial board page body.
pub fn management_page() -> String {
    r#"
    <p>The editorial board reviews new seminar listings and arbitrates
    content disputes. Board membership is listed with the project
    governance documents.</p>
    "#
    .to_string()
}

/// Site search page body (external search over the site's pages).
pub fn search_page() -> String {
    r#"
    <p>Search the Beantheory site:</p>
    <form method="get" action="https://www.google.com/search">
      <input type="hidden" name="sitesearch" value="beantheory.org">
      <input type="text" name="q" size=30>
      <button type="submit">Search</button>
    </form>
    "#
    .to_string()
}

/// Sitemap listing of all navigable routes. Served bare, without the
/// page shell.
pub fn sitemap_page(links: &[(&str, &str)]) -> String {
    let items = links
        .iter()
        .map(|(path, endpoint)| format!(r#"<li><a href="{path}">{endpoint}</a></li>"#))
        .collect::<Vec<_>>()
        .join("\n");
    format!("<ul>\n{items}\n</ul>")
}

/// 404 page with the offending messages listed.
pub fn not_found_404(messages: &[String]) -> String {
    let mut items = String::new();
    for msg in messages {
        items.push_str(&format!("\n        <li>{}</li>", html_escape(msg)));
    }
    let body = format!(
        r#"
    <p>The page you asked for does not exist.</p>
    <ul>{items}
    </ul>
    <p><a href="/">Back to the seminar listing</a></p>
    "#
    );
    base_template("Page Not Found", &body)
}

/// 500 page.
pub fn error_500() -> String {
    base_template(
        "Error",
        r#"
    <p>Something went wrong serving this page. The error has been
    logged; trying again in a moment usually helps.</p>
    "#,
    )
}

/// 503 page shown when the database handle is down.
pub fn error_503() -> String {
    base_template(
        "Temporarily Unavailable",
        r#"
    <p>The seminar database is currently unavailable. The listing will
    be back as soon as the database answers again.</p>
    "#,
    )
}

/// Format a datetime the way listing pages show them; `-` when absent.
pub fn fmt_datetime(value: Option<DateTime<Utc>>) -> String {
    match value {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "-".to_string(),
    }
}

/// Turn newlines in a string into HTML line breaks.
pub fn nl2br(s: &str) -> String {
    s.replace('\n', "<br/>\n")
}

/// Encode (name, value) pairs into a query string.
pub fn urlencode_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .into_iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Site stylesheet, served at /style.css.
pub const CSS: &str = r#"
:root {
    --bg: #fff;
    --text: #222;
    --text-muted: #666;
    --link: #0066cc;
    --link-hover: #004499;
    --border: #ccc;
    --highlight: #fffbcc;
}

@media (prefers-color-scheme: dark) {
    :root {
        --bg: #1a1a1a;
        --text: #e0e0e0;
        --text-muted: #888;
        --link: #6ab0ff;
        --link-hover: #8dc4ff;
        --border: #444;
        --highlight: #3a3520;
    }
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: Georgia, 'Times New Roman', serif;
    font-size: 15px;
    background: var(--bg);
    color: var(--text);
    line-height: 1.5;
}

a { color: var(--link); text-decoration: none; }
a:hover { color: var(--link-hover); text-decoration: underline; }

#main-header {
    border-bottom: 1px solid var(--border);
    padding: 0.5rem 1rem;
}

#main-header nav {
    display: flex;
    gap: 1.5rem;
    align-items: center;
}

#main-header .logo {
    font-weight: bold;
    letter-spacing: 1px;
}

main {
    max-width: 900px;
    margin: 0 auto;
    padding: 1rem;
}

h1 {
    font-size: 20px;
    margin-bottom: 1rem;
    border-bottom: 1px solid var(--border);
    padding-bottom: 0.5rem;
}

h2 { font-size: 16px; margin: 1rem 0 0.5rem; }

footer {
    max-width: 900px;
    margin: 2rem auto 1rem;
    padding: 0.5rem 1rem;
    border-top: 1px solid var(--border);
    font-size: 12px;
    color: var(--text-muted);
}

/* Search form table */
table[border] td {
    padding: 0.25rem 0.5rem;
    vertical-align: middle;
}

input[type="text"], select {
    font-family: inherit;
    font-size: 14px;
    padding: 2px 4px;
    border: 1px solid var(--border);
    background: var(--bg);
    color: var(--text);
}

button[type="submit"] {
    margin: 0.5rem 0 0 0.5rem;
    padding: 0.25rem 1rem;
    font-family: inherit;
    cursor: pointer;
}

.formexample {
    font-size: 12px;
    color: var(--text-muted);
}

.float-right { float: right; }

/* Advanced-only cells are hidden until the toggle enables them */
td.advanced { display: none; }

.query-params { padding-left: 1.5rem; }

.muted {
    font-size: 12px;
    color: var(--text-muted);
}
"#;
