//! Utilities for rendering the browser state as an HTML page.

use crate::state::BrowserState;
use movie_catalog_model::{Genre, Movie};

/// Number of plot characters shown on a movie card before the ellipsis.
pub const PLOT_PREVIEW_CHARS: usize = 80;

const HEADING: &str = "Movie Collection";
const SUBHEADING: &str = "Explore the whole collection of movies";

/// First [PLOT_PREVIEW_CHARS] characters of the plot followed by `...`. The ellipsis is always
/// appended, even to plots shorter than the preview.
pub fn plot_preview(plot: &str) -> String {
    let mut preview: String = plot.chars().take(PLOT_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

/// Escape text for use in HTML element content and double-quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
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

fn truthy_year(movie: &Movie) -> Option<i32> {
    movie.year.filter(|y| *y != 0)
}

fn truthy_rating(movie: &Movie) -> Option<f64> {
    movie.rating.filter(|r| *r != 0.0 && !r.is_nan())
}

fn link(movie: &Movie) -> Option<&str> {
    movie.wikipedia_url.as_deref().filter(|u| !u.is_empty())
}

/// Builds the catalog page. Forward-only.
pub struct PageBuilder {
    html: String,
}

impl PageBuilder {
    pub fn new() -> Self {
        PageBuilder {
            html: String::new(),
        }
    }

    /// Adds the page heading and its tagline.
    pub fn add_heading(&mut self) {
        self.html.push_str(r#"<div class="heading"><h1>"#);
        self.html.push_str(HEADING);
        self.html.push_str("</h1><p>");
        self.html.push_str(SUBHEADING);
        self.html.push_str("</p></div>");
    }

    /// Adds the genre menu (one button per genre) and the sort menu.
    pub fn add_filters(&mut self, genres: &[Genre]) {
        self.html.push_str(r#"<div class="filters"><div class="dropdown" data-label="Genres">"#);
        for genre in genres {
            self.html.push_str(&format!(
                r#"<button data-genre-id="{}">{}</button>"#,
                genre.id,
                escape_html(&genre.value)
            ));
        }
        self.html.push_str(r#"</div><div class="dropdown" data-label="Sort by">"#);
        self.html
            .push_str(r#"<button data-sort="recent">Recent</button>"#);
        self.html
            .push_str(r#"<button data-sort="rating">Rating</button>"#);
        self.html.push_str("</div></div>");
    }

    /// Adds the loading indicator in place of the grid.
    pub fn add_loading(&mut self) {
        self.html
            .push_str(r#"<div class="loading"><span class="spinner" role="status"></span></div>"#);
    }

    /// Adds an error banner in place of the grid.
    pub fn add_error(&mut self, message: &str) {
        self.html.push_str(r#"<div class="error" role="alert">"#);
        self.html.push_str(&escape_html(message));
        self.html.push_str("</div>");
    }

    /// Adds the grid of movie cards.
    pub fn add_grid(&mut self, movies: &[Movie]) {
        self.html.push_str(r#"<div class="grid">"#);
        for movie in movies {
            self.add_movie_card(movie);
        }
        self.html.push_str("</div>");
    }

    /// Adds one movie card: lazy image, optional year/rating badge, title, plot preview and an
    /// optional "More" link.
    pub fn add_movie_card(&mut self, movie: &Movie) {
        let title = escape_html(&movie.title);
        self.html.push_str(&format!(
            r#"<div class="card"><img src="{}" alt="{}" loading="lazy">"#,
            escape_html(&movie.image),
            title
        ));

        let year = truthy_year(movie);
        let rating = truthy_rating(movie);
        if year.is_some() || rating.is_some() {
            self.html.push_str(r#"<div class="badge"><span>"#);
            if let Some(y) = year {
                self.html.push_str(&y.to_string());
            }
            self.html.push_str("</span>");
            if let Some(r) = rating {
                self.html
                    .push_str(&format!(r#"<span class="rating">&#9733; {}</span>"#, r));
            }
            self.html.push_str("</div>");
        }

        self.html.push_str(&format!(
            "<h3>{}</h3><p>{}</p>",
            title,
            escape_html(&plot_preview(&movie.plot))
        ));

        if let Some(url) = link(movie) {
            self.html.push_str(&format!(
                r#"<a class="more" href="{}" target="_blank" rel="noopener">More</a>"#,
                escape_html(url)
            ));
        }
        self.html.push_str("</div>");
    }

    /// Wrap everything added so far in a complete HTML document.
    pub fn build(self) -> String {
        format!(
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{}</title></head><body><section>{}</section></body></html>",
            HEADING, self.html
        )
    }
}

impl Default for PageBuilder {
    fn default() -> Self {
        PageBuilder::new()
    }
}

/// Render the whole page for the current state: the grid once everything settled, the loading
/// indicator while requests are outstanding, or the error banner after a failure.
pub fn render_page(state: &BrowserState) -> String {
    let mut builder = PageBuilder::new();
    builder.add_heading();
    builder.add_filters(state.genres());
    if state.is_loading() {
        builder.add_loading();
    } else if let Some(message) = state.error() {
        builder.add_error(message);
    } else {
        builder.add_grid(state.movies());
    }
    builder.build()
}
