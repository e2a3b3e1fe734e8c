//! Document → HTML fragment. All text is escaped; the markup carries only
//! class hooks, the stylesheet lives with the snapshot exporter.

use std::fmt::Write;

use crate::preview::{Block, Document, TextStyle};

pub fn to_html(doc: &Document) -> String {
    let mut out = String::from("<div class=\"resume\">\n");
    for block in &doc.blocks {
        write_block(&mut out, block, 1);
    }
    out.push_str("</div>\n");
    out
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn style_class(style: TextStyle) -> &'static str {
    match style {
        TextStyle::Normal => "",
        TextStyle::Muted => " class=\"muted\"",
        TextStyle::Placeholder => " class=\"placeholder\"",
    }
}

fn write_block(out: &mut String, block: &Block, depth: usize) {
    let pad = "  ".repeat(depth);
    // Writing into a String cannot fail.
    let _ = match block {
        Block::Heading { level, text, style } => {
            let level = (*level).clamp(1, 6);
            writeln!(
                out,
                "{pad}<h{level}{}>{}</h{level}>",
                style_class(*style),
                escape(text)
            )
        }
        Block::Paragraph { text, style } => {
            writeln!(out, "{pad}<p{}>{}</p>", style_class(*style), escape(text))
        }
        Block::List { items } => {
            let _ = writeln!(out, "{pad}<ul>");
            for item in items {
                let _ = writeln!(out, "{pad}  <li>{}</li>", escape(item));
            }
            writeln!(out, "{pad}</ul>")
        }
        Block::TagGroup { label, tags } => {
            let _ = writeln!(out, "{pad}<div class=\"tags\">");
            if let Some(label) = label {
                let _ = writeln!(out, "{pad}  <h4>{}</h4>", escape(label));
            }
            for tag in tags {
                let _ = writeln!(out, "{pad}  <span class=\"tag\">{}</span>", escape(tag));
            }
            writeln!(out, "{pad}</div>")
        }
        Block::Section {
            kind,
            title,
            blocks,
        } => {
            let kind = serde_json::to_value(kind)
                .ok()
                .and_then(|v| v.as_str().map(String::from))
                .unwrap_or_default();
            let _ = writeln!(out, "{pad}<section data-kind=\"{}\">", escape(&kind));
            let _ = writeln!(out, "{pad}  <h2>{}</h2>", escape(title));
            for inner in blocks {
                write_block(out, inner, depth + 1);
            }
            writeln!(out, "{pad}</section>")
        }
        Block::Placeholder { title, hint } => writeln!(
            out,
            "{pad}<div class=\"empty-state\">\n{pad}  <h3>{}</h3>\n{pad}  <p>{}</p>\n{pad}</div>",
            escape(title),
            escape(hint)
        ),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ResumeRecord;
    use crate::preview::{render, RenderOptions};

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"R&D"</b> 'x'"#),
            "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt; &#39;x&#39;"
        );
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut record = ResumeRecord::empty();
        record.personal_info.name = "<script>alert(1)</script>".into();
        let html = to_html(&render(&record, &RenderOptions::default()));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_sections_carry_kind_and_title() {
        let html = to_html(&render(&ResumeRecord::example(), &RenderOptions::default()));
        assert!(html.contains("<section data-kind=\"work_experience\">"));
        assert!(html.contains("<h2>Work Experience</h2>"));
        assert!(html.contains("<span class=\"tag\">Python</span>"));
    }

    #[test]
    fn test_empty_state_markup() {
        let html = to_html(&render(&ResumeRecord::empty(), &RenderOptions::default()));
        assert!(html.contains("class=\"empty-state\""));
        assert!(html.contains("Resume is empty"));
    }
}
