//! Cache-Control headers for static files, chosen by file extension.
//!
//! HTML is always revalidated so a redeploy is picked up immediately; this
//! includes `index.html` served for client-side routes.

use axum::{
    extract::Request,
    http::{
        HeaderValue,
        header::{CACHE_CONTROL, CONTENT_TYPE},
    },
    middleware::Next,
    response::Response,
};

const HTML_POLICY: &str = "no-cache";
const JSON_POLICY: &str = "public, max-age=300";
const CODE_POLICY: &str = "public, max-age=3600";
const IMAGE_POLICY: &str = "public, max-age=86400";
const DEFAULT_POLICY: &str = "public, max-age=3600";

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "svg", "webp"];

/// Policy for a request path.
pub fn cache_policy(path: &str) -> &'static str {
    let file = path.rsplit('/').next().unwrap_or_default();
    let Some((_, ext)) = file.rsplit_once('.') else {
        return DEFAULT_POLICY;
    };
    let ext = ext.to_ascii_lowercase();

    match ext.as_str() {
        "html" | "htm" => HTML_POLICY,
        "json" => JSON_POLICY,
        "css" | "js" => CODE_POLICY,
        e if IMAGE_EXTENSIONS.contains(&e) => IMAGE_POLICY,
        _ => DEFAULT_POLICY,
    }
}

/// Middleware setting `Cache-Control` on successful static responses.
pub async fn static_cache_control(request: Request, next: Next) -> Response {
    let policy = cache_policy(request.uri().path());
    let mut response = next.run(request).await;
    let policy = if is_html(&response) { HTML_POLICY } else { policy };

    if response.status().is_success() {
        response
            .headers_mut()
            .insert(CACHE_CONTROL, HeaderValue::from_static(policy));
    }
    response
}

fn is_html(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("text/html"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/data/social.stats.json", "public, max-age=300")]
    #[case("/styles/main.css", "public, max-age=3600")]
    #[case("/app.js", "public, max-age=3600")]
    #[case("/img/avatar.PNG", "public, max-age=86400")]
    #[case("/img/logo.svg", "public, max-age=86400")]
    #[case("/img/banner.webp", "public, max-age=86400")]
    #[case("/index.html", "no-cache")]
    #[case("/about.HTM", "no-cache")]
    #[case("/", "public, max-age=3600")]
    #[case("/links", "public, max-age=3600")]
    #[case("/v1.2/readme", "public, max-age=3600")]
    fn policy_by_extension(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(cache_policy(path), expected);
    }
}
