pub trait Converter: Send + Sync {
    fn to_markdown(&self, html: &str) -> String;

    /// Absent or empty HTML stays absent instead of becoming an empty document.
    fn to_markdown_opt(&self, html: Option<&str>) -> Option<String> {
        match html {
            Some(html) if !html.is_empty() => Some(self.to_markdown(html)),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Html2MdConverter;

impl Converter for Html2MdConverter {
    fn to_markdown(&self, html: &str) -> String {
        html2md::parse_html(html)
    }
}
