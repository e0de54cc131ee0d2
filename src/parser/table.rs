//! Table run builder - turns consecutive `|` lines into a table block.

use super::inline::tokenize;
use crate::core::ast::{Block, Cell};

/// Builds a table from the raw lines of one table run.
///
/// Returns `None` when the run holds fewer than two lines; a table always
/// needs a header plus at least one more line.
pub(crate) fn build_table<S: AsRef<str>>(lines: &[S]) -> Option<Block> {
    if lines.len() < 2 {
        return None;
    }

    let mut rows: Vec<Vec<String>> = lines.iter().map(|l| split_row(l.as_ref())).collect();
    if is_separator_row(&rows[1]) {
        rows.remove(1);
    }

    let columns = rows[0].len();
    let rows = rows
        .into_iter()
        .map(|row| normalize_row(row, columns))
        .collect();

    Some(Block::Table { rows })
}

/// Splits a table line into trimmed cell texts.
///
/// One leading and one trailing `|` are stripped before splitting.
pub(crate) fn split_row(line: &str) -> Vec<String> {
    let line = line.trim();
    let line = line.strip_prefix('|').unwrap_or(line);
    let line = line.strip_suffix('|').unwrap_or(line);
    line.split('|').map(|cell| cell.trim().to_string()).collect()
}

/// Only the first cell of the candidate row is inspected: every
/// whitespace-separated token in it must be made of `:` and `-`. An empty
/// first cell has no tokens and counts as a separator.
pub(crate) fn is_separator_row(cells: &[String]) -> bool {
    cells.first().is_some_and(|cell| {
        cell.split_whitespace()
            .all(|token| token.chars().all(|c| matches!(c, ':' | '-')))
    })
}

/// Pads short rows with empty cells and drops cells beyond `columns`.
fn normalize_row(row: Vec<String>, columns: usize) -> Vec<Cell> {
    let mut cells: Vec<Cell> = row
        .iter()
        .take(columns)
        .map(|text| tokenize(text))
        .collect();
    cells.resize_with(columns, Vec::new);
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ast::Span;
    use pretty_assertions::assert_eq;

    fn cell(s: &str) -> Cell {
        vec![Span::Plain(s.to_string())]
    }

    #[test]
    fn test_split_row_strips_outer_pipes() {
        assert_eq!(split_row("  | H1 |H2|  "), vec!["H1", "H2"]);
        assert_eq!(split_row("|a||c|"), vec!["a", "", "c"]);
        assert_eq!(split_row("|a|b"), vec!["a", "b"]);
    }

    #[test]
    fn test_separator_detection_uses_first_cell() {
        let row = |cells: &[&str]| cells.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        assert!(is_separator_row(&row(&["---", "---"])));
        assert!(is_separator_row(&row(&[":--:", "x"])));
        assert!(is_separator_row(&row(&["-- --"])));
        assert!(!is_separator_row(&row(&["a", "---"])));
        assert!(!is_separator_row(&row(&["-x-"])));
        assert!(is_separator_row(&row(&["", "---"])));
    }

    #[test]
    fn test_header_separator_and_data() {
        let table = build_table(&["|H1|H2|", "|---|---|", "|a|b|"]);
        assert_eq!(
            table,
            Some(Block::Table {
                rows: vec![vec![cell("H1"), cell("H2")], vec![cell("a"), cell("b")]],
            })
        );
    }

    #[test]
    fn test_header_and_separator_only() {
        let table = build_table(&["|H1|H2|", "|:-|-:|"]);
        assert_eq!(
            table,
            Some(Block::Table {
                rows: vec![vec![cell("H1"), cell("H2")]],
            })
        );
    }

    #[test]
    fn test_without_separator_keeps_second_row() {
        let table = build_table(&["|a|b|", "|c|d|"]);
        assert_eq!(
            table,
            Some(Block::Table {
                rows: vec![vec![cell("a"), cell("b")], vec![cell("c"), cell("d")]],
            })
        );
    }

    #[test]
    fn test_ragged_rows_are_normalized_to_header_width() {
        let table = build_table(&["|H1|H2|H3|", "|---|---|---|", "|a|", "|1|2|3|4|"]);
        assert_eq!(
            table,
            Some(Block::Table {
                rows: vec![
                    vec![cell("H1"), cell("H2"), cell("H3")],
                    vec![cell("a"), Vec::new(), Vec::new()],
                    vec![cell("1"), cell("2"), cell("3")],
                ],
            })
        );
    }

    #[test]
    fn test_cells_are_tokenized() {
        let Some(Block::Table { rows }) = build_table(&["|**Name**|Link|", "|a|[x](y)|"]) else {
            panic!("expected a table");
        };
        assert_eq!(rows[0][0], vec![Span::Bold("Name".to_string())]);
        assert_eq!(
            rows[1][1],
            vec![Span::Link {
                label: "x".to_string(),
                url: "y".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_first_cell_marks_separator_row() {
        let table = build_table(&["|H1|H2|", "| | --- |", "|a|b|"]);
        assert_eq!(
            table,
            Some(Block::Table {
                rows: vec![vec![cell("H1"), cell("H2")], vec![cell("a"), cell("b")]],
            })
        );
    }

    #[test]
    fn test_single_line_is_not_a_table() {
        assert_eq!(build_table(&["|only|"]), None);
    }
}
