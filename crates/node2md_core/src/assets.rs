use node2md_logging::export_trace;

/// Storage-scheme marker for managed public files.
pub const DEFAULT_STORAGE_SCHEME: &str = "public://";
/// Web-rooted prefix that replaces the storage scheme in cover paths.
pub const DEFAULT_COVER_PREFIX: &str = "/assets/";

/// Rewrites managed-file URIs into paths usable from the exported site.
///
/// Covers become web-rooted (`public://img/a.jpg` -> `/assets/img/a.jpg`),
/// gallery entries become bare relative paths (`img/a.jpg`). URIs that do not
/// start with the storage scheme are returned unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRewriter {
    storage_scheme: String,
    cover_prefix: String,
}

impl Default for AssetRewriter {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_SCHEME, DEFAULT_COVER_PREFIX)
    }
}

impl AssetRewriter {
    pub fn new(storage_scheme: impl Into<String>, cover_prefix: impl Into<String>) -> Self {
        Self {
            storage_scheme: storage_scheme.into(),
            cover_prefix: cover_prefix.into(),
        }
    }

    pub fn rewrite_cover_uri(&self, uri: &str) -> String {
        match uri.strip_prefix(self.storage_scheme.as_str()) {
            Some(rest) => format!("{}{}", self.cover_prefix, rest),
            None => {
                export_trace!("cover uri without storage scheme left as-is: {}", uri);
                uri.to_string()
            }
        }
    }

    pub fn rewrite_gallery_uri(&self, uri: &str) -> String {
        match uri.strip_prefix(self.storage_scheme.as_str()) {
            Some(rest) => rest.to_string(),
            None => {
                export_trace!("gallery uri without storage scheme left as-is: {}", uri);
                uri.to_string()
            }
        }
    }
}

/// Strip every literal `<site_url>/files/` from `html`, leaving the rest of
/// each URL as a relative reference.
///
/// This is plain substring replacement. A trailing `/` on `site_files_base_url`
/// is ignored.
///
/// An empty base URL disables the rewrite entirely: a bare `/files/` is not
/// stripped, so root-relative links to other site paths are never mangled
/// when no site is configured.
pub fn rewrite_body_references(html: &str, site_files_base_url: &str) -> String {
    let base = site_files_base_url.trim_end_matches('/');
    if base.is_empty() {
        return html.to_string();
    }
    let needle = format!("{base}/files/");
    html.replace(&needle, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_gets_web_rooted_prefix() {
        let rewriter = AssetRewriter::default();
        assert_eq!(
            rewriter.rewrite_cover_uri("public://img/a.jpg"),
            "/assets/img/a.jpg"
        );
    }

    #[test]
    fn gallery_scheme_is_stripped() {
        let rewriter = AssetRewriter::default();
        assert_eq!(rewriter.rewrite_gallery_uri("public://img/a.jpg"), "img/a.jpg");
    }

    #[test]
    fn only_leading_scheme_is_rewritten() {
        let rewriter = AssetRewriter::default();
        assert_eq!(
            rewriter.rewrite_cover_uri("private://public://x.png"),
            "private://public://x.png"
        );
        assert_eq!(
            rewriter.rewrite_gallery_uri("public://a/public://b.png"),
            "a/public://b.png"
        );
    }

    #[test]
    fn custom_scheme_and_prefix() {
        let rewriter = AssetRewriter::new("s3://bucket/", "/media/");
        assert_eq!(rewriter.rewrite_cover_uri("s3://bucket/c.png"), "/media/c.png");
        assert_eq!(rewriter.rewrite_gallery_uri("s3://bucket/c.png"), "c.png");
    }

    #[test]
    fn body_references_lose_site_files_prefix() {
        assert_eq!(
            rewrite_body_references(
                "<img src='https://example.com/files/x.png'>",
                "https://example.com"
            ),
            "<img src='x.png'>"
        );
    }

    #[test]
    fn every_occurrence_is_replaced() {
        let html = r#"<a href="https://example.com/files/a.pdf">a</a> https://example.com/files/b/c.png"#;
        assert_eq!(
            rewrite_body_references(html, "https://example.com/"),
            r#"<a href="a.pdf">a</a> b/c.png"#
        );
    }

    #[test]
    fn other_hosts_and_empty_base_are_untouched() {
        let html = "<img src='https://other.org/files/x.png'><img src='/files/y.png'>";
        assert_eq!(rewrite_body_references(html, "https://example.com"), html);
        assert_eq!(rewrite_body_references(html, ""), html);
    }
}
