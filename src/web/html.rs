use std::fmt::Write;
use url::form_urlencoded;

use crate::model::{DepartmentSummary, Id};
use crate::web::paging::{detail_href, PageControls};

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

pub fn price(amount: f64) -> String {
    format!("${:.2}", amount)
}

fn placeholder_image(size: u32, name: Option<&str>) -> String {
    let text: String =
        form_urlencoded::byte_serialize(name.unwrap_or("No Name").as_bytes()).collect();
    format!("https://via.placeholder.com/{}?text={}", size, text)
}

pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | My E-Commerce Store</title>
    <link rel="stylesheet" href="/static/app.css">
</head>
<body>
    <div class="app-container">
        <header class="app-header">
            <h1><a href="/" style="color: inherit; text-decoration: none;">My E-Commerce Store</a></h1>
        </header>
        <main>
{body}
        </main>
        <footer class="app-footer">
            <p>&copy; 2025 E-Commerce</p>
        </footer>
    </div>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

pub fn error_banner(message: &str) -> String {
    format!(r#"<div class="error">{}</div>"#, escape(message))
}

/// Link bar over every department; `active` is the department being shown,
/// `None` on the catalog-wide list.
pub fn department_nav(departments: &[DepartmentSummary], active: Option<Id>) -> String {
    let mut out = String::from(r#"<nav class="department-nav"><strong>Filter by Department:</strong>"#);

    let all_class = if active.is_none() { r#" class="active""# } else { "" };
    let _ = write!(out, r#"<a href="/"{}>All Products</a>"#, all_class);

    for dept in departments {
        let class = if active == Some(dept.id) { r#" class="active""# } else { "" };
        let _ = write!(
            out,
            r#"<a href="/departments/{}"{}>{} ({})</a>"#,
            dept.id,
            class,
            escape(&dept.name),
            dept.product_count
        );
    }

    out.push_str("</nav>");
    out
}

pub fn department_nav_error() -> String {
    r#"<div class="department-nav error">Could not load departments.</div>"#.to_string()
}

/// What a grid card needs, whichever listing it came from.
pub struct Card<'a> {
    pub id: Id,
    pub name: Option<&'a str>,
    pub brand: Option<&'a str>,
    pub retail_price: f64,
}

pub fn product_grid<'a>(cards: impl IntoIterator<Item = Card<'a>>, return_path: &str) -> String {
    let mut out = String::from(r#"<div class="product-grid">"#);
    for card in cards {
        let name = card.name.unwrap_or("Untitled Product");
        let _ = write!(
            out,
            r#"<div class="product-card"><img src="{img}" alt="{alt}" class="product-image"><h3 class="product-name">{name}</h3><p class="product-brand">{brand}</p><p class="product-price">{price}</p><a href="{href}" class="btn-view-details">View Details</a></div>"#,
            img = escape(&placeholder_image(150, card.name)),
            alt = escape(name),
            name = escape(name),
            brand = escape(card.brand.unwrap_or("")),
            price = price(card.retail_price),
            href = escape(&detail_href(card.id, return_path)),
        );
    }
    out.push_str("</div>");
    out
}

pub fn pagination_controls(controls: &PageControls) -> String {
    let prev = match controls.prev_href() {
        Some(href) => format!(r#"<a href="{}">&larr; Previous</a>"#, escape(&href)),
        None => r#"<span class="disabled">&larr; Previous</span>"#.to_string(),
    };
    let next = match controls.next_href() {
        Some(href) => format!(r#"<a href="{}">Next &rarr;</a>"#, escape(&href)),
        None => r#"<span class="disabled">Next &rarr;</span>"#.to_string(),
    };

    format!(
        r#"<div class="pagination-controls">{}<span>Page {}</span>{}</div>"#,
        prev, controls.page, next
    )
}

pub fn product_detail_image(name: Option<&str>) -> String {
    escape(&placeholder_image(300, name))
}
