//! Download page.
//!
//! A plugin window listing one download link per generated file, followed
//! by the warnings of the run. The CLI writes the same page as `index.html`.

use crate::Output;

/// Height of one link or warning row, in pixels.
const ROW_HEIGHT: u32 = 40;

const PAGE_STYLE: &str = r#"<style>
a {
  text-decoration: none;
  color: inherit;
  font-family: monospace;
  display: flex;
  padding: 10px;
  justify-content: space-between;
  position: relative;
}
a:not(:last-child) {
  border-bottom: 1px solid color-mix(in srgb, currentColor 10%, transparent);
}
a::after {
  content: '↓';
  transition: transform 0.3s ease;
  transform-origin: bottom;
  transform: scaleY(0);
}
a:hover::after {
  transform: scaleY(1);
  transform-origin: top;
}
.warnings {
  padding: 30px 10px 0 10px;
  opacity: 0.5;
  font-family: monospace;
}
ul {
  padding-left: 20px;
}
</style>
"#;

/// Rendered page plus the window height that fits it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadPage {
    pub html: String,
    pub height: u32,
}

pub fn render_download_page(output: &Output) -> DownloadPage {
    let mut html = String::from("<div style=\"display: grid\">\n");
    for file in &output.files {
        let name = escape_html(&file.file_name);
        html.push_str(&format!(
            "  <a href=\"{}\" download=\"{name}\">📄 {name}</a>\n",
            file.data_uri()
        ));
    }
    html.push_str("</div>\n");

    if !output.warnings.is_empty() {
        html.push_str("<div class=\"warnings\">Warnings:\n<ul>\n");
        for warning in &output.warnings {
            html.push_str(&format!("  <li>{}</li>\n", escape_html(&warning.to_string())));
        }
        html.push_str("</ul></div>\n");
    }
    html.push_str(PAGE_STYLE);

    let warning_rows = match output.warnings.len() {
        0 => 0,
        n => n + 1,
    };
    let rows = (output.files.len() + warning_rows) as u32;

    DownloadPage {
        html,
        height: rows * ROW_HEIGHT + 20,
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
