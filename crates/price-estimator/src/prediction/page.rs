//! HTML rendering for the estimation form.

use std::fmt::Write;

use super::domain::LOCATION_PLACEHOLDER;
use super::validation::Field;
use super::view::FormView;

const STYLE: &str = "body{font-family:sans-serif;max-width:36rem;margin:2rem auto;padding:0 1rem}\
label{display:block;margin-top:.75rem}\
input,select{width:100%;padding:.4rem;box-sizing:border-box}\
.error{color:#a00;border:1px solid #a00;padding:.5rem;margin:1rem 0}\
.warning{background:#fff4ce;padding:.5rem;margin:1rem 0}\
.prediction{font-size:1.4rem;margin:1rem 0}\
.actions{margin-top:1rem;display:flex;gap:1rem}";

pub fn render_form(view: &FormView<'_>) -> String {
    let mut html = String::with_capacity(4096 + view.locations.len() * 64);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>House Price Estimator</title>\n");
    let _ = writeln!(html, "<style>{STYLE}</style>");
    html.push_str("</head>\n<body>\n<h1>House Price Estimator</h1>\n");

    if !view.model_loaded {
        html.push_str(
            "<p class=\"warning\">The prediction model is unavailable. Estimates cannot be produced right now.</p>\n",
        );
    }

    if let Some(error) = &view.error {
        let _ = writeln!(html, "<div class=\"error\">{}</div>", escape(error));
    }

    if let Some(prediction) = view.prediction {
        let _ = writeln!(
            html,
            "<div class=\"prediction\">Estimated price: <strong>{prediction:.2}</strong></div>"
        );
    }

    html.push_str("<form method=\"post\" action=\"/predict\">\n");
    render_location_select(&mut html, view);
    render_number_input(&mut html, Field::Bhk, "BHK", &view.selected.bhk, "1");
    render_number_input(&mut html, Field::Bath, "Bathrooms", &view.selected.bath, "1");
    render_number_input(
        &mut html,
        Field::TotalSqft,
        "Total square feet",
        &view.selected.total_sqft,
        "any",
    );

    html.push_str("<div class=\"actions\">\n<button type=\"submit\">Predict price</button>\n");
    if view.show_clear_button {
        html.push_str("<a href=\"/clear\">Clear</a>\n");
    }
    html.push_str("</div>\n</form>\n</body>\n</html>\n");

    html
}

fn render_location_select(html: &mut String, view: &FormView<'_>) {
    let name = Field::Location.name();
    let _ = writeln!(html, "<label for=\"{name}\">Location</label>");
    let _ = writeln!(html, "<select id=\"{name}\" name=\"{name}\">");

    let placeholder_selected = if view.selected.location.is_empty() {
        " selected"
    } else {
        ""
    };
    let _ = writeln!(
        html,
        "<option value=\"{placeholder}\"{placeholder_selected}>{placeholder}</option>",
        placeholder = escape(LOCATION_PLACEHOLDER)
    );

    for location in view.locations {
        let selected = if *location == view.selected.location {
            " selected"
        } else {
            ""
        };
        let escaped = escape(location);
        let _ = writeln!(html, "<option value=\"{escaped}\"{selected}>{escaped}</option>");
    }

    html.push_str("</select>\n");
}

fn render_number_input(html: &mut String, field: Field, label: &str, value: &str, step: &str) {
    let name = field.name();
    let _ = writeln!(html, "<label for=\"{name}\">{label}</label>");
    let _ = writeln!(
        html,
        "<input type=\"number\" id=\"{name}\" name=\"{name}\" min=\"0\" step=\"{step}\" value=\"{}\">",
        escape(value)
    );
}

/// Escapes text for use in element content and double-quoted attributes.
pub(crate) fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
