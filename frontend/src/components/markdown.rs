use leptos::*;
use pulldown_cmark::{html, Event, Options, Parser, Tag};

fn is_unsafe_url(url: &str) -> bool {
    let url = url.trim().to_ascii_lowercase();
    ["javascript:", "vbscript:", "data:"]
        .iter()
        .any(|scheme| url.starts_with(scheme))
}

/// Renders markdown to HTML. Raw HTML in the source is emitted as text and
/// script-like link targets are neutralised.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        Event::Start(Tag::Link(kind, dest, title)) if is_unsafe_url(&dest) => {
            Event::Start(Tag::Link(kind, "#".into(), title))
        }
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Renders markdown content as HTML
#[component]
pub fn MarkdownView(
    /// The markdown content to render
    content: String,
) -> impl IntoView {
    let html_content = render_markdown(&content);

    view! {
        <div class="markdown-content" inner_html=html_content></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_inline_markup() {
        assert_eq!(
            render_markdown("Back **soon**"),
            "<p>Back <strong>soon</strong></p>\n"
        );
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let output = render_markdown("<script>alert(1)</script>");
        assert!(!output.contains("<script>"));
        assert!(output.contains("&lt;script&gt;"));

        let inline = render_markdown("hello <b onclick=\"x()\">there</b>");
        assert!(!inline.contains("<b "));
    }

    #[test]
    fn test_script_links_neutralised() {
        let output = render_markdown("[click](javascript:alert(1))");
        assert!(output.contains("href=\"#\""));
        assert!(!output.contains("javascript:"));

        let safe = render_markdown("[notes](https://example.com/notes)");
        assert!(safe.contains("href=\"https://example.com/notes\""));
    }
}
