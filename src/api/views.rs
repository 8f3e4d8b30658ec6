//! Server-rendered HTML for the notes page

use crate::notes::Note;
use html_escape::{encode_double_quoted_attribute, encode_text};

/// Render the index page: the create form followed by every note.
pub fn render_index(notes: &[Note]) -> String {
    let items = if notes.is_empty() {
        r#"<p class="empty">No notes yet.</p>"#.to_string()
    } else {
        let rows: Vec<String> = notes.iter().map(render_note).collect();
        format!("<ul class=\"notes\">\n{}\n</ul>", rows.join("\n"))
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Notes</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <h1>Notes</h1>
    <form id="note-form" method="post" action="/">
        <input type="number" name="no" placeholder="No.">
        <input type="text" name="title" placeholder="Title">
        <textarea name="desc" placeholder="Description"></textarea>
        <label><input type="checkbox" name="important"> Important</label>
        <button type="submit">Add note</button>
    </form>
    <script>
        document.getElementById("note-form").addEventListener("submit", async (event) => {{
            event.preventDefault();
            const body = new URLSearchParams(new FormData(event.target));
            const resp = await fetch("/", {{ method: "POST", body }});
            if (resp.ok) {{
                window.location.reload();
            }} else {{
                const err = await resp.json().catch(() => ({{ error: resp.statusText }}));
                alert(err.error);
            }}
        }});
    </script>
    {}
</body>
</html>"#,
        items
    )
}

fn render_note(note: &Note) -> String {
    let class = if note.imp { "note important" } else { "note" };
    format!(
        r#"    <li class="{}" data-id="{}">
        <span class="no">{}</span>
        <h2>{}</h2>
        <p>{}</p>
    </li>"#,
        class,
        encode_double_quoted_attribute(&note.id),
        note.no,
        encode_text(&note.title),
        encode_text(&note.desc),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str, no: i64, title: &str, imp: bool) -> Note {
        Note {
            id: id.into(),
            no,
            title: title.into(),
            desc: format!("{} desc", title),
            imp,
        }
    }

    #[test]
    fn test_render_empty() {
        let html = render_index(&[]);
        assert!(html.contains("No notes yet."));
        assert!(!html.contains("<ul class=\"notes\">"));
        assert!(html.contains("name=\"important\""));
    }

    #[test]
    fn test_render_notes_in_order() {
        let html = render_index(&[note("a", 2, "Second", false), note("b", 1, "First", true)]);
        let second = html.find("Second").unwrap();
        let first = html.find("First").unwrap();
        assert!(second < first);
        assert!(html.contains(r#"<li class="note important" data-id="b">"#));
        assert!(html.contains(r#"<li class="note" data-id="a">"#));
        assert!(html.contains(r#"<span class="no">2</span>"#));
    }

    #[test]
    fn test_render_escapes_user_text() {
        let mut n = note("x\"y", 0, "<script>alert(1)</script>", false);
        n.desc = "a & b".into();
        let html = render_index(&[n]);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(html.contains("data-id=\"x&quot;y\""));
    }
}
