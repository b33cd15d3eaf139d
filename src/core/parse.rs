use scraper::{Html, Selector};

use crate::domain::model::{Rank, RankedEntry, TransformResult};
use crate::utils::error::{EtlError, Result};

// 類型欄的分類標記（來源頁面使用中文）
const CONFERENCE_MARKER: &str = "会议";
const JOURNAL_MARKER: &str = "期刊";

/// Extracts ranked venue rows from every table in the document.
///
/// A row is kept only if it has at least five cells, its rank cell is
/// exactly A/B/C, and its abbreviation cell is non-empty. Kept rows are
/// classified by the type cell: conference marker wins over journal
/// marker, rows matching neither are dropped. Source order is preserved
/// within each list.
pub fn parse_ranking_tables(html: &str) -> Result<TransformResult> {
    let document = Html::parse_document(html);
    let table_selector = selector("table")?;
    let row_selector = selector("tr")?;
    let cell_selector = selector("td")?;

    let mut conferences = Vec::new();
    let mut journals = Vec::new();

    for table in document.select(&table_selector) {
        for row in table.select(&row_selector) {
            let cells: Vec<String> = row
                .select(&cell_selector)
                .map(|cell| cell.text().collect::<String>().trim().to_string())
                .collect();

            // 少於五格的列視為表頭或分隔列，直接跳過
            if cells.len() < 5 {
                continue;
            }

            let rank = match Rank::parse(&cells[2]) {
                Some(rank) => rank,
                None => continue,
            };
            if cells[0].is_empty() {
                continue;
            }

            let entry = RankedEntry {
                abbr: cells[0].clone(),
                full_name: cells[1].clone(),
                rank,
                category: cells[4].clone(),
            };

            if cells[3].contains(CONFERENCE_MARKER) {
                conferences.push(entry);
            } else if cells[3].contains(JOURNAL_MARKER) {
                journals.push(entry);
            }
        }
    }

    Ok(TransformResult {
        conferences,
        journals,
    })
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| EtlError::ProcessingError {
        message: format!("Invalid CSS selector '{}': {}", css, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_page(rows: &str) -> String {
        format!(
            "<html><body><table>\
             <tr><th>Abbr</th><th>Full Name</th><th>Rank</th><th>Type</th><th>Category</th></tr>\
             {}\
             </table></body></html>",
            rows
        )
    }

    #[test]
    fn test_conference_row_is_classified() {
        let html = table_page(
            "<tr><td>AAAI</td><td>AAAI Conference on Artificial Intelligence</td>\
             <td>A</td><td>会议</td><td>AI</td></tr>",
        );

        let result = parse_ranking_tables(&html).unwrap();

        assert_eq!(result.conferences.len(), 1);
        assert!(result.journals.is_empty());

        let entry = &result.conferences[0];
        assert_eq!(entry.abbr, "AAAI");
        assert_eq!(entry.full_name, "AAAI Conference on Artificial Intelligence");
        assert_eq!(entry.rank, Rank::A);
        assert_eq!(entry.category, "AI");
    }

    #[test]
    fn test_journal_row_is_classified() {
        let html = table_page(
            "<tr><td>TKDE</td><td>IEEE Transactions on Knowledge and Data Engineering</td>\
             <td>A</td><td>期刊</td><td>DB</td></tr>",
        );

        let result = parse_ranking_tables(&html).unwrap();

        assert!(result.conferences.is_empty());
        assert_eq!(result.journals.len(), 1);
        assert_eq!(result.journals[0].abbr, "TKDE");
    }

    #[test]
    fn test_unknown_rank_is_dropped() {
        let html = table_page(
            "<tr><td>XYZ</td><td>Some Venue</td><td>D</td><td>会议</td><td>AI</td></tr>",
        );

        let result = parse_ranking_tables(&html).unwrap();

        assert!(result.conferences.is_empty());
        assert!(result.journals.is_empty());
    }

    #[test]
    fn test_empty_abbreviation_is_dropped() {
        let html = table_page(
            "<tr><td></td><td>Anonymous Venue</td><td>B</td><td>会议</td><td>SE</td></tr>",
        );

        let result = parse_ranking_tables(&html).unwrap();

        assert!(result.conferences.is_empty());
        assert!(result.journals.is_empty());
    }

    #[test]
    fn test_unknown_type_marker_is_dropped() {
        let html = table_page(
            "<tr><td>MISC</td><td>Unclassifiable Venue</td><td>A</td><td>其他</td><td>AI</td></tr>",
        );

        let result = parse_ranking_tables(&html).unwrap();

        assert!(result.conferences.is_empty());
        assert!(result.journals.is_empty());
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let html = table_page(
            "<tr><td>OOPS</td><td>Too Few Cells</td><td>A</td></tr>\
             <tr><td colspan=\"5\">Section header</td></tr>",
        );

        let result = parse_ranking_tables(&html).unwrap();

        assert!(result.conferences.is_empty());
        assert!(result.journals.is_empty());
    }

    #[test]
    fn test_cell_text_is_trimmed() {
        let html = table_page(
            "<tr><td>  SOSP </td><td> Symposium on Operating Systems Principles </td>\
             <td> A </td><td> 会议 </td><td> OS </td></tr>",
        );

        let result = parse_ranking_tables(&html).unwrap();

        assert_eq!(result.conferences[0].abbr, "SOSP");
        assert_eq!(result.conferences[0].category, "OS");
    }

    #[test]
    fn test_source_order_is_preserved() {
        let html = table_page(
            "<tr><td>AAAI</td><td>A1</td><td>A</td><td>会议</td><td>AI</td></tr>\
             <tr><td>TKDE</td><td>J1</td><td>A</td><td>期刊</td><td>DB</td></tr>\
             <tr><td>IJCAI</td><td>A2</td><td>A</td><td>会议</td><td>AI</td></tr>\
             <tr><td>TODS</td><td>J2</td><td>A</td><td>期刊</td><td>DB</td></tr>",
        );

        let result = parse_ranking_tables(&html).unwrap();

        let conference_abbrs: Vec<&str> =
            result.conferences.iter().map(|e| e.abbr.as_str()).collect();
        let journal_abbrs: Vec<&str> = result.journals.iter().map(|e| e.abbr.as_str()).collect();

        assert_eq!(conference_abbrs, vec!["AAAI", "IJCAI"]);
        assert_eq!(journal_abbrs, vec!["TKDE", "TODS"]);
    }

    #[test]
    fn test_classification_is_mutually_exclusive() {
        let html = table_page(
            "<tr><td>AAAI</td><td>A1</td><td>A</td><td>会议</td><td>AI</td></tr>\
             <tr><td>TKDE</td><td>J1</td><td>B</td><td>期刊</td><td>DB</td></tr>",
        );

        let result = parse_ranking_tables(&html).unwrap();

        for entry in &result.conferences {
            assert!(!result.journals.contains(entry));
        }
    }

    #[test]
    fn test_rows_from_multiple_tables_are_collected() {
        let html = "<html><body>\
            <table><tr><td>AAAI</td><td>A1</td><td>A</td><td>会议</td><td>AI</td></tr></table>\
            <table><tr><td>TKDE</td><td>J1</td><td>B</td><td>期刊</td><td>DB</td></tr></table>\
            </body></html>";

        let result = parse_ranking_tables(html).unwrap();

        assert_eq!(result.conferences.len(), 1);
        assert_eq!(result.journals.len(), 1);
    }

    #[test]
    fn test_document_without_tables_yields_empty_lists() {
        let result = parse_ranking_tables("<html><body><p>no data</p></body></html>").unwrap();

        assert!(result.conferences.is_empty());
        assert!(result.journals.is_empty());
    }

    #[test]
    fn test_identical_input_yields_identical_output() {
        let html = table_page(
            "<tr><td>AAAI</td><td>A1</td><td>A</td><td>会议</td><td>AI</td></tr>\
             <tr><td>TKDE</td><td>J1</td><td>B</td><td>期刊</td><td>DB</td></tr>",
        );

        let first = parse_ranking_tables(&html).unwrap();
        let second = parse_ranking_tables(&html).unwrap();

        assert_eq!(first.conferences, second.conferences);
        assert_eq!(first.journals, second.journals);
    }
}
