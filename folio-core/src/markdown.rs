//! Markdown rendering for blog posts, pitches and the about page.
//!
//! pulldown-cmark with the GFM-ish extensions the posts use. Headings get
//! `id` anchors so posts can link to their own sections.

use std::collections::HashMap;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html::push_html};

use crate::utils::slugify;

fn options() -> Options {
    Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_TASKLISTS
}

/// Render markdown to an HTML fragment.
pub fn render_markdown(content: &str) -> String {
    let parser = Parser::new_ext(content, options());
    let events = inject_heading_anchors(parser);

    let mut html = String::with_capacity(content.len() * 2);
    push_html(&mut html, events.into_iter());
    html
}

/// Plain text of the first paragraph, used when a post has no summary.
pub fn first_paragraph(content: &str) -> Option<String> {
    let mut text = String::new();
    let mut inside = false;

    for event in Parser::new_ext(content, options()) {
        match event {
            Event::Start(Tag::Paragraph) => inside = true,
            Event::End(TagEnd::Paragraph) if inside => break,
            Event::Text(t) | Event::Code(t) if inside => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak if inside => text.push(' '),
            _ => {}
        }
    }

    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Give every heading without an explicit `{#id}` a slug id.
/// Repeated headings get `-1`, `-2`, ... suffixes.
fn inject_heading_anchors(parser: Parser<'_>) -> Vec<Event<'_>> {
    let mut events: Vec<Event> = parser.collect();
    let mut used: HashMap<String, usize> = HashMap::new();

    let mut i = 0;
    while i < events.len() {
        if matches!(&events[i], Event::Start(Tag::Heading { id: None, .. })) {
            let mut text = String::new();
            let mut j = i + 1;
            while j < events.len() && !matches!(events[j], Event::End(TagEnd::Heading(_))) {
                if let Event::Text(t) | Event::Code(t) = &events[j] {
                    text.push_str(t);
                }
                j += 1;
            }

            let base = slugify(&text);
            let seen = used.entry(base.clone()).or_insert(0);
            let anchor = if *seen == 0 {
                base
            } else {
                format!("{base}-{seen}")
            };
            *seen += 1;

            if let Event::Start(Tag::Heading { id, .. }) = &mut events[i] {
                *id = Some(anchor.into());
            }
            i = j;
        }
        i += 1;
    }

    events
}
