//! Plain-text rendering of the catalog summary table.

use std::fmt::Write as _;

use waypost_core::CatalogEntry;

/// Formats a rating for display; absent ratings render as `N/A`.
///
/// A real zero renders as `0.0` — absence and zero are different facts.
pub fn score_cell(rating: Option<f64>) -> String {
    match rating {
        Some(r) => format!("{r:.1}"),
        None => "N/A".to_string(),
    }
}

/// Formats a review count for display; absent counts render as `N/A`.
pub fn review_cell(count: Option<u64>) -> String {
    match count {
        Some(n) => n.to_string(),
        None => "N/A".to_string(),
    }
}

/// Renders the catalog as an aligned text table in display order.
pub fn render_table(entries: &[CatalogEntry]) -> String {
    let headers = ["Place Name", "Address", "Reviews", "Score"];
    let rows: Vec<[String; 4]> = entries
        .iter()
        .map(|e| {
            [
                e.details.name.clone(),
                e.details.address.clone(),
                review_cell(e.details.review_count),
                score_cell(e.details.rating),
            ]
        })
        .collect();

    let mut widths: [usize; 4] = [0; 4];
    for (w, h) in widths.iter_mut().zip(headers) {
        *w = h.len();
    }
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let write_row = |out: &mut String, cells: [&str; 4]| {
        let mut line = String::new();
        for (cell, width) in cells.iter().zip(widths) {
            let _ = write!(line, "{cell:<width$}  ");
        }
        let _ = writeln!(out, "{}", line.trim_end());
    };

    write_row(&mut out, headers);
    let separators = widths.map(|w| "-".repeat(w));
    write_row(
        &mut out,
        [
            separators[0].as_str(),
            separators[1].as_str(),
            separators[2].as_str(),
            separators[3].as_str(),
        ],
    );
    for row in &rows {
        write_row(
            &mut out,
            [
                row[0].as_str(),
                row[1].as_str(),
                row[2].as_str(),
                row[3].as_str(),
            ],
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypost_core::PlaceDetails;

    fn entry(name: &str, rating: Option<f64>, reviews: Option<u64>) -> CatalogEntry {
        CatalogEntry {
            query: name.to_lowercase(),
            candidates: vec![],
            selected: format!("id-{name}"),
            details: PlaceDetails {
                name: name.to_string(),
                address: format!("{name} Street 1"),
                rating,
                review_count: reviews,
            },
        }
    }

    #[test]
    fn score_cell_distinguishes_zero_from_absent() {
        assert_eq!(score_cell(Some(0.0)), "0.0");
        assert_eq!(score_cell(None), "N/A");
        assert_eq!(score_cell(Some(4.64)), "4.6");
    }

    #[test]
    fn review_cell_distinguishes_zero_from_absent() {
        assert_eq!(review_cell(Some(0)), "0");
        assert_eq!(review_cell(None), "N/A");
    }

    #[test]
    fn table_lists_entries_in_display_order() {
        let entries = vec![
            entry("Beta", Some(4.2), Some(10)),
            entry("Alpha", None, None),
        ];
        let table = render_table(&entries);
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].starts_with("Place Name"));
        assert!(lines[2].starts_with("Beta"));
        assert!(lines[3].starts_with("Alpha"));
        assert!(lines[3].contains("N/A"));
    }
}
