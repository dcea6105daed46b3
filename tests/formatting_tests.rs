use geoattend::utils::colors::{GREEN, paint};
use geoattend::utils::formatting::{strip_ansi, truncate, visible_width};
use geoattend::utils::table::Table;
use unicode_width::UnicodeWidthStr;

/// Display column where `needle` starts on each line that contains it.
fn columns_of(rendered: &str, needle: &str) -> Vec<usize> {
    rendered
        .lines()
        .filter_map(|line| {
            line.find(needle)
                .map(|byte| UnicodeWidthStr::width(strip_ansi(&line[..byte]).as_str()))
        })
        .collect()
}

#[test]
fn test_wide_characters_count_double() {
    assert_eq!(visible_width("abc"), 3);
    assert_eq!(visible_width("東京駅"), 6);
    assert_eq!(visible_width("Bogotá"), 6);
}

#[test]
fn test_ansi_sequences_have_no_width() {
    let painted = paint("東京駅", GREEN);
    assert_eq!(strip_ansi(&painted), "東京駅");
    assert_eq!(visible_width(&painted), 6);
}

#[test]
fn test_table_aligns_wide_and_colored_cells() {
    let mut table = Table::new(["PLACE", "MARK"]);
    table.add_row(vec!["東京駅".to_string(), "X".to_string()]);
    table.add_row(vec!["abc".to_string(), "X".to_string()]);
    table.add_row(vec![paint("Medellín", GREEN), "X".to_string()]);

    let cols = columns_of(&table.render(), "X");
    assert_eq!(cols.len(), 3);
    assert!(cols.iter().all(|c| *c == cols[0]), "columns: {:?}", cols);
}

#[test]
fn test_truncate_respects_display_width() {
    assert_eq!(truncate("Sede Norte", 20), "Sede Norte");
    assert_eq!(truncate("abcdefghij", 6), "abc...");

    let cut = truncate("東京駅東京駅", 8);
    assert_eq!(cut, "東京...");
    assert!(UnicodeWidthStr::width(cut.as_str()) <= 8);
}
