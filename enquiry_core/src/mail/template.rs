//! HTML body and subject line for forwarded enquiries

use crate::models::enquiry::Enquiry;
use std::fmt::Write;

const ACCENT_COLOR: &str = "#c2a165";

pub fn enquiry_subject(name: &str, brand: &str) -> String {
    format!("[{}] Enquiry from {}", brand, name)
}

pub fn render_enquiry_html(enquiry: &Enquiry, brand: &str) -> String {
    let mut html = String::with_capacity(1024);

    html.push_str("<div style=\"font-family:Arial,sans-serif;line-height:1.5\">\n");
    let _ = writeln!(
        html,
        "  <h2 style=\"color:{};margin-bottom:8px\">New Contact from {}</h2>",
        ACCENT_COLOR,
        escape_html(brand)
    );

    push_row(&mut html, "Name", &enquiry.name);
    push_row(&mut html, "Company", enquiry.company_or_placeholder());
    push_row(&mut html, "Email", &enquiry.email);
    push_row(&mut html, "Topic", &enquiry.topic);
    push_row(&mut html, "Volume", &format!("{} MT", enquiry.volume_or_placeholder()));
    push_row(&mut html, "Budget", &format!("{} USD", enquiry.budget_or_placeholder()));
    if let Some(destination) = &enquiry.destination {
        push_row(&mut html, "Incoterm", &enquiry.incoterm.to_string());
        push_row(&mut html, "Destination", destination);
    }

    html.push_str("  <hr style=\"margin:16px 0;border:none;border-top:1px solid #eee\"/>\n");
    let _ = writeln!(
        html,
        "  <p style=\"white-space:pre-wrap\">{}</p>",
        escape_html(&enquiry.message)
    );
    html.push_str("</div>\n");

    html
}

fn push_row(html: &mut String, label: &str, value: &str) {
    let _ = writeln!(html, "  <p><b>{}:</b> {}</p>", label, escape_html(value));
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
