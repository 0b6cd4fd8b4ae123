//! Console rendering of a catalog

use colored::Colorize;
use linkscout_core::{Catalog, CategoryEntries, CategoryTemplate};

const COLUMNS: [&str; 3] = ["Source", "URL", "Description"];

/// Print one table per category under a header naming the target
pub fn print_catalog(catalog: &Catalog) {
    println!(
        "\n{} {}\n",
        "OSINT Results for:".bold().green(),
        catalog.target().bold().yellow()
    );
    for category in catalog.categories() {
        println!("{}", category.name().bold().blue());
        print!("{}", category_table(category));
        println!();
    }
}

/// Render a category as an aligned plain-text table
pub fn category_table(category: &CategoryEntries) -> String {
    let rows: Vec<[&str; 3]> = category
        .iter()
        .map(|e| [e.name.as_str(), e.url.as_str(), e.description.as_str()])
        .collect();

    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = format!(
        "+{}+\n",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    );

    let mut out = String::new();
    out.push_str(&rule);
    out.push_str(&format_row(&COLUMNS, &widths));
    out.push_str(&rule);
    for row in &rows {
        out.push_str(&format_row(row, &widths));
    }
    out.push_str(&rule);
    out
}

fn format_row(cells: &[&str; 3], widths: &[usize; 3]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!(" {}{} ", cell, " ".repeat(width - cell.chars().count())))
        .collect();
    format!("|{}|\n", padded.join("|"))
}

/// Print the registry: every category with its sources and URL templates
pub fn print_sources<'a>(categories: impl Iterator<Item = &'a CategoryTemplate>) {
    for category in categories {
        println!("{} ({})", category.name.bold().blue(), category.sources.len());
        for source in category.sources {
            println!("  {:<20} {}", source.name, source.url_template.dimmed());
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkscout_core::SourceEntry;

    #[test]
    fn test_category_table_layout() {
        let mut category = CategoryEntries::new("Dark Web");
        category.insert(SourceEntry {
            name: "Ahmia".to_string(),
            url: "https://ahmia.fi/search/?q=x".to_string(),
            description: "Search for x on Ahmia".to_string(),
        });

        let table = category_table(&category);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("| Source "));
        assert!(lines[3].contains("| https://ahmia.fi/search/?q=x |"));
        assert!(lines.iter().all(|l| l.chars().count() == lines[0].chars().count()));
    }

    #[test]
    fn test_empty_category_table() {
        let table = category_table(&CategoryEntries::new("Nothing"));
        assert_eq!(table.lines().count(), 4);
    }
}
