//! Index Page
//!
//! Server-rendered HTML for the todo list. The store never knows about the
//! viewer; login state is supplied here by the adapter.

use todo_core::Item;

/// Who is looking at the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewer {
    display_name: Option<String>,
}

impl Viewer {
    /// An empty name counts as logged out
    pub fn new(display_name: Option<String>) -> Self {
        Self {
            display_name: display_name.filter(|name| !name.is_empty()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn logged_in(&self) -> bool {
        self.display_name.is_some()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn render_item(index: usize, item: &Item) -> String {
    let (class, label) = if item.done {
        (" class=\"done\"", "Undo")
    } else {
        ("", "Done")
    };

    format!(
        r#"      <li{class}>
        <form method="post" action="/toggle">
          <input type="hidden" name="index" value="{index}">
          <span class="text">{text}</span>
          <button type="submit">{label}</button>
        </form>
      </li>
"#,
        class = class,
        index = index,
        text = escape_html(item.text()),
        label = label,
    )
}

fn render_header(viewer: &Viewer) -> String {
    match viewer.display_name() {
        Some(name) => format!(
            "    <p class=\"user\">Logged in as <strong>{}</strong></p>\n",
            escape_html(name)
        ),
        None => "    <p class=\"user\">Not logged in</p>\n".to_string(),
    }
}

/// Render the full page for the current snapshot
pub fn render_index(items: &[Item], viewer: &Viewer) -> String {
    let mut html = String::from(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Todo List</title>
    <link rel="stylesheet" href="/static/style.css">
  </head>
  <body>
    <h1>Todo List</h1>
"#,
    );

    html.push_str(&render_header(viewer));

    html.push_str(
        r#"    <form method="post" action="/add">
      <input type="text" name="todo" placeholder="What needs doing?">
      <button type="submit">Add</button>
    </form>
"#,
    );

    if items.is_empty() {
        html.push_str("    <p class=\"empty\">Nothing to do.</p>\n");
    } else {
        html.push_str("    <ul class=\"todos\">\n");
        for (index, item) in items.iter().enumerate() {
            html.push_str(&render_item(index, item));
        }
        html.push_str("    </ul>\n");
    }

    html.push_str("  </body>\n</html>\n");
    html
}
