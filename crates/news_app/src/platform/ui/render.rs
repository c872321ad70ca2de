use std::fmt::Write;

use chrono::Local;
use news_core::{ArticleRowView, NewsViewModel};

/// Render the whole view as plain text for the terminal.
pub fn render(view: &NewsViewModel) -> String {
    let mut out = String::new();

    let heading = if view.searching {
        format!("Search: \"{}\"", view.search_term)
    } else {
        format!("News: {}", view.category)
    };
    let _ = writeln!(
        out,
        "\n== {} | sort: {} | page {} | {} articles ==",
        heading,
        view.sort_by,
        view.page,
        view.articles.len()
    );

    if view.show_categories {
        let categories: Vec<String> = view
            .categories
            .iter()
            .enumerate()
            .map(|(i, category)| {
                if category.active {
                    format!("{}:[{}]", i + 1, category.name)
                } else {
                    format!("{}:{}", i + 1, category.name)
                }
            })
            .collect();
        let _ = writeln!(out, "Categories: {}", categories.join(" "));
    }
    if view.show_home {
        let _ = writeln!(out, "(type `home` to return to {})", view.category);
    }

    if let Some(term) = &view.no_results {
        let _ = writeln!(out, "No results found for \"{term}\"");
    }

    for row in &view.articles {
        render_row(&mut out, row);
    }

    if view.loading {
        let _ = writeln!(out, "Loading...");
    } else if view.can_load_more {
        let _ = writeln!(out, "(type `more` to load more)");
    }

    out
}

fn render_row(out: &mut String, row: &ArticleRowView) {
    let _ = writeln!(out, "{:>3}. {}", row.index, row.title);
    if let Some(description) = row.description.as_deref().filter(|d| !d.trim().is_empty()) {
        let _ = writeln!(out, "     {}", description.trim());
    }
    let _ = writeln!(out, "     {} | {}", row.source, published_label(row));
    let _ = writeln!(out, "     {}", row.url);
    if let Some(image) = &row.image {
        let _ = writeln!(out, "     image: {image}");
    }
}

fn published_label(row: &ArticleRowView) -> String {
    match row.published_at {
        Some(at) => at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => row.published_raw.clone(),
    }
}
