//! Thin server-side HTML rendering
//!
//! Deliberately small: plain string assembly around a shared page shell,
//! no template engine. Presentation is not where this service earns its keep.

use filmdex_common::dx::extract_to_dx_number;
use filmdex_common::film::{AvailabilityStatus, FilmRecord};

pub const HELP_HTML: &str = include_str!("help.html");

/// Escape text for safe inclusion in HTML
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Shared page shell with the search form
fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{} - filmdex</title></head>\n<body>\n\
         <h1><a href=\"/\">filmdex</a></h1>\n\
         <form action=\"/search\" method=\"get\">\n\
         <input name=\"dx_number\" placeholder=\"DX number (162-2)\">\n\
         <input name=\"name\" placeholder=\"Film name\">\n\
         <input name=\"manufacturer\" placeholder=\"Manufacturer\">\n\
         <button type=\"submit\">Search</button> <a href=\"/help\">Help</a>\n\
         </form>\n<hr>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

fn film_link(film: &FilmRecord) -> String {
    format!(
        "<a href=\"/film/{}\">{}</a>",
        escape(&film.url_name),
        escape(&film.name)
    )
}

pub fn render_index(film: Option<&FilmRecord>, total_count: i64) -> String {
    let mut body = format!(
        "<p>Look up a photographic film stock by DX code or name. {} films referenced.</p>\n",
        total_count
    );
    if let Some(film) = film {
        body.push_str(&format!(
            "<h2>Film of the moment</h2>\n<p>{}</p>\n",
            film_link(film)
        ));
    }
    layout("Home", &body)
}

pub fn render_search(films: &[FilmRecord], film_type: Option<&str>, too_many_results: bool) -> String {
    let mut body = String::new();
    if let Some(film_type) = film_type {
        body.push_str(&format!("<p>Film type: <b>{}</b></p>\n", escape(film_type)));
    }
    body.push_str(&format!("<p>{} result(s)</p>\n", films.len()));
    if too_many_results {
        body.push_str("<p><i>Too many results; refine your search to see them all.</i></p>\n");
    }
    body.push_str("<ul>\n");
    for film in films {
        let mut line = film_link(film);
        if let Some(manufacturer) = &film.manufacturer {
            line.push_str(&format!(" — {}", escape(manufacturer)));
        }
        if let Some(dx_extract) = &film.dx_extract {
            line.push_str(&format!(" (DX {})", escape(dx_extract)));
        }
        body.push_str(&format!("<li>{}</li>\n", line));
    }
    body.push_str("</ul>\n");
    layout("Search results", &body)
}

pub fn render_film(film: &FilmRecord, film_type: Option<&str>) -> String {
    let mut body = format!("<h2>{}</h2>\n<dl>\n", escape(&film.name));

    let mut row = |label: &str, value: String| {
        body.push_str(&format!("<dt>{}</dt><dd>{}</dd>\n", label, value));
    };

    if !film.manufacturers.is_empty() {
        let list: Vec<String> = film.manufacturers.iter().map(|m| escape(m)).collect();
        row("Manufacturer", list.join(", "));
    }
    if let Some(dx_extract) = &film.dx_extract {
        row("DX extract", escape(dx_extract));
        if let Some(dx_number) = extract_to_dx_number(dx_extract) {
            row("DX number", escape(&dx_number));
        }
    }
    if let Some(dx_full) = &film.dx_full {
        row("DX full code", escape(dx_full));
    }
    if let Some(film_type) = film_type {
        row("Film type", escape(film_type));
    }
    // The label carries its own color markup
    row(
        "Availability",
        AvailabilityStatus::html_label(film.availability).to_string(),
    );
    if let Some(country) = &film.country {
        row("Country", escape(country));
    }
    match (&film.begin_year, &film.end_year) {
        (Some(begin), Some(end)) => row("Years", format!("{} - {}", escape(begin), escape(end))),
        (Some(begin), None) => row("Years", format!("{} -", escape(begin))),
        (None, Some(end)) => row("Years", format!("- {}", escape(end))),
        (None, None) => {}
    }
    if let Some(distributor) = &film.distributor {
        row("Distributor", escape(distributor));
    }
    if let Some(reliability) = film.reliability {
        row("Reliability", format!("{}/4", reliability));
    }
    body.push_str("</dl>\n");

    if film.dx_extract_full_mismatch() {
        body.push_str(
            "<p><i>Note: the recorded DX extract and full code disagree; one of them is likely wrong.</i></p>\n",
        );
    }
    if let Some(picture) = &film.picture {
        body.push_str(&format!(
            "<p><img src=\"{}\" alt=\"{}\" style=\"max-width:400px\"></p>\n",
            escape(picture),
            escape(&film.name)
        ));
    }

    layout(&film.name, &body)
}

pub fn render_error(message: &str) -> String {
    layout("Error", &format!("<p>{}</p>\n", escape(message)))
}
