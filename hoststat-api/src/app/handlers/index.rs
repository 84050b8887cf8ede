use axum::response::Html;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>System Info API</title></head>
<body>
<h1>System Info API</h1>
<p>Available endpoints:</p>
<ul>
    <li><a href="/api/system">/api/system</a> - Full system info</li>
    <li><a href="/api/ram">/api/ram</a> - RAM info only</li>
    <li><a href="/api/cpu">/api/cpu</a> - CPU info only</li>
    <li><a href="/api/storage">/api/storage</a> - Storage info only</li>
</ul>
</body>
</html>
"#;

/// Human-facing discovery page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
