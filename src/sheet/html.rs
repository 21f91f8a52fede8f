use std::fmt::Write;

use html_escape::encode_text;

use super::compose::SheetDocument;

const PRINT_STYLE: &str = "\
body { font-family: sans-serif; margin: 16mm; }
.print-title { font-size: 20pt; margin: 0 0 4pt; }
.print-subtitle { color: #555; margin: 0 0 12pt; }
.word-table { width: 100%; border-collapse: collapse; }
.word-table th, .word-table td { border: 1px solid #333; padding: 4pt 6pt; text-align: left; }
.no-col { width: 3em; text-align: center; }
.blank-col { min-width: 12em; }
tr { page-break-inside: avoid; }
";

/// Renders the sheet as a standalone page for the browser's print dialog.
pub fn render_html(document: &SheetDocument) -> String {
    let [no, word, meaning] = document.headers();
    let mut html = String::new();

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>\n{PRINT_STYLE}</style>\n</head>\n<body>\n",
        title = encode_text(&document.title),
    );
    let _ = writeln!(html, "<h1 class=\"print-title\">{}</h1>", encode_text(&document.title));
    let _ = writeln!(html, "<p class=\"print-subtitle\">{}</p>", encode_text(&document.subtitle));

    html.push_str("<table class=\"word-table\">\n<thead>\n<tr>");
    let _ = write!(
        html,
        "<th class=\"no-col\">{}</th><th class=\"word-col\">{}</th><th class=\"meaning-col\">{}</th>",
        encode_text(&no),
        encode_text(&word),
        encode_text(&meaning),
    );
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in &document.rows {
        let _ = write!(html, "<tr><td class=\"no-col\">{}</td>", row.number);
        push_cell(&mut html, "word-col", row.word.as_deref());
        push_cell(&mut html, "meaning-col", row.meaning.as_deref());
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}

fn push_cell(html: &mut String, class: &str, value: Option<&str>) {
    match value {
        Some(text) => {
            let _ = write!(html, "<td class=\"{class}\">{}</td>", encode_text(text));
        }
        None => {
            let _ = write!(html, "<td class=\"{class} blank-col\"></td>");
        }
    }
}
