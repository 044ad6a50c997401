use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Staged page name, Trunk's default output for `index.html`
const STAGED_HTML: &str = "index.html";

const BUNDLE_FILES: [&str; 2] = ["glyph-render-engine.js", "glyph-render-engine_bg.wasm"];

fn main() -> io::Result<()> {
    //  Environment variable parameter - the distributed directory
    let staging_dir = env::var("TRUNK_STAGING_DIR")
        .map_err(|err| io::Error::new(io::ErrorKind::NotFound, format!("TRUNK_STAGING_DIR: {err}")))?;
    let staged_html_path = PathBuf::from(staging_dir).join(STAGED_HTML);

    let html = fs::read_to_string(&staged_html_path)?;
    fs::write(&staged_html_path, relativise_bundle_paths(&html))
}

/// Point the wasm bundle references at the page's own directory so the
/// build can be served from any sub-path.
fn relativise_bundle_paths(html: &str) -> String {
    BUNDLE_FILES.iter().fold(html.to_string(), |html, file| {
        html.replace(&format!("/{file}"), &format!("./{file}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_absolute_bundle_paths_only() {
        let html = r#"<link rel="modulepreload" href="/glyph-render-engine.js">
<script type="module">import init from '/glyph-render-engine.js';init('/glyph-render-engine_bg.wasm');</script>
<link rel="icon" href="/favicon.ico">"#;

        let rewritten = relativise_bundle_paths(html);

        assert!(!rewritten.contains("\"/glyph-render-engine.js"));
        assert!(rewritten.contains("'./glyph-render-engine.js'"));
        assert!(rewritten.contains("'./glyph-render-engine_bg.wasm'"));
        assert!(rewritten.contains("href=\"/favicon.ico\""));
    }
}
