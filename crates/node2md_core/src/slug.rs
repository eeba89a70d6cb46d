/// Deterministic filename slug: ASCII-lowercase the title, then collapse every
/// run of characters outside `[a-z0-9]` into a single `-`.
///
/// Leading and trailing dashes are kept, so `"Hello, World!"` becomes
/// `"hello-world-"`. Distinct titles can map to the same slug; nothing here
/// disambiguates them.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_separator_run = false;
    for c in title.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
            in_separator_run = false;
        } else {
            if !in_separator_run {
                slug.push('-');
            }
            in_separator_run = true;
        }
    }
    slug
}

/// `{slug}.md`
pub fn file_name_for(title: &str) -> String {
    format!("{}.md", slugify(title))
}
