//! HTML rendering for list pages
//!
//! The rendering seam: takes a page title and an item sequence and produces
//! a complete HTML document. Form field names (`newItem`, `newList`, `list`,
//! `checkbox`, `listTitle`) are the wire contract with the POST handlers.

use axum::response::Html;

use crate::db::Item;

/// Render a list page: title heading, one delete form per item, an add-item
/// form bound to this page's title, and the new-list form.
pub fn list_page(title: &str, items: &[Item]) -> Html<String> {
    let escaped_title = escape_html(title);

    let mut page = String::with_capacity(1024);
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n");
    page.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    page.push_str("<title>To-Do List</title>\n");
    page.push_str("</head>\n<body>\n");

    page.push_str("<div class=\"box\" id=\"heading\">\n<h1>");
    page.push_str(&escaped_title);
    page.push_str("</h1>\n</div>\n");

    page.push_str("<div class=\"box\">\n");
    for item in items {
        page.push_str("<form class=\"item\" action=\"/delete\" method=\"post\">\n");
        page.push_str(
            "<input type=\"checkbox\" name=\"checkbox\" onchange=\"this.form.submit()\" value=\"",
        );
        page.push_str(&item.id.to_string());
        page.push_str("\">\n<p>");
        page.push_str(&escape_html(&item.content));
        page.push_str("</p>\n<input type=\"hidden\" name=\"listTitle\" value=\"");
        page.push_str(&escaped_title);
        page.push_str("\">\n</form>\n");
    }

    page.push_str("<form class=\"item\" action=\"/\" method=\"post\">\n");
    page.push_str(
        "<input type=\"text\" name=\"newItem\" placeholder=\"New Item\" autocomplete=\"off\" required>\n",
    );
    page.push_str("<button type=\"submit\" name=\"list\" value=\"");
    page.push_str(&escaped_title);
    page.push_str("\">+</button>\n</form>\n</div>\n");

    page.push_str("<form class=\"new-list\" action=\"/\" method=\"post\">\n");
    page.push_str(
        "<input type=\"text\" name=\"newList\" placeholder=\"New List\" autocomplete=\"off\">\n",
    );
    page.push_str("<button type=\"submit\">Go</button>\n</form>\n");

    page.push_str("</body>\n</html>\n");

    Html(page)
}

/// Escape text for interpolation into HTML content and attribute values.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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
