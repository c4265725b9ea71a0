// tests/extract.rs
use pretty_assertions::assert_eq;

use statsguru_scrape::extract::{extract_tables, page_title};

#[test]
fn empty_rows_and_columns_are_pruned() {
    let html = r#"
        <table>
          <thead><tr><th>Runs</th><th>Wkts</th><th>Blank</th></tr></thead>
          <tbody>
            <tr><td>10</td><td>2</td><td></td></tr>
            <tr><td></td><td></td><td></td></tr>
            <tr><td>31</td><td>0</td><td></td></tr>
          </tbody>
        </table>"#;
    let tables = extract_tables(html);
    assert_eq!(tables.len(), 1);
    let t = &tables[0];
    assert_eq!(t.headers, ["Runs", "Wkts"]);
    assert_eq!(t.rows, [["10", "2"], ["31", "0"]]);
}

#[test]
fn page_without_tables_yields_empty_list() {
    let tables = extract_tables("<html><body><p>No stats here.</p></body></html>");
    assert!(tables.is_empty());
}

#[test]
fn table_that_is_empty_after_pruning_is_dropped() {
    let html = r#"
        <table>
          <tr><th>A</th><th>B</th></tr>
          <tr><td></td><td></td></tr>
          <tr><td> </td><td>
          </td></tr>
        </table>"#;
    assert!(extract_tables(html).is_empty());
}

#[test]
fn header_only_table_is_dropped() {
    let html = "<table><tr><th>A</th><th>B</th></tr></table>";
    assert!(extract_tables(html).is_empty());
}

#[test]
fn leading_th_row_becomes_the_header() {
    let html = r#"
        <table>
          <tr><th>Ct</th><th>St</th></tr>
          <tr><td>5</td><td>1</td></tr>
        </table>"#;
    let tables = extract_tables(html);
    assert_eq!(tables[0].headers, ["Ct", "St"]);
    assert_eq!(tables[0].rows, [["5", "1"]]);
}

#[test]
fn table_without_th_gets_positional_headers() {
    let html = r#"
        <table>
          <tr><td>a</td><td>b</td><td>c</td></tr>
          <tr><td>d</td><td>e</td><td>f</td></tr>
        </table>"#;
    let tables = extract_tables(html);
    assert_eq!(tables[0].headers, ["0", "1", "2"]);
    assert_eq!(tables[0].rows.len(), 2);
}

#[test]
fn colspan_repeats_the_cell_value() {
    let html = r#"
        <table>
          <tr><th>A</th><th>B</th><th>C</th></tr>
          <tr><td colspan="2">x</td><td>y</td></tr>
        </table>"#;
    let tables = extract_tables(html);
    assert_eq!(tables[0].rows, [["x", "x", "y"]]);
}

#[test]
fn short_rows_are_padded_then_pruned_as_usual() {
    let html = r#"
        <table>
          <tr><th>A</th><th>B</th></tr>
          <tr><td>only</td></tr>
          <tr><td>1</td><td>2</td></tr>
        </table>"#;
    let tables = extract_tables(html);
    assert_eq!(tables[0].rows, [["only", ""], ["1", "2"]]);
}

#[test]
fn cell_whitespace_is_collapsed() {
    let html = "<table><tr><th>H</th></tr><tr><td>  10\n   not\tout </td></tr></table>";
    let tables = extract_tables(html);
    assert_eq!(tables[0].rows, [["10 not out"]]);
}

#[test]
fn nested_tables_are_extracted_separately() {
    let html = r#"
        <table>
          <tr><th>Outer</th></tr>
          <tr><td>
            <table>
              <tr><th>Inner</th></tr>
              <tr><td>i1</td></tr>
              <tr><td>i2</td></tr>
            </table>
          </td></tr>
        </table>"#;
    let tables = extract_tables(html);
    assert_eq!(tables.len(), 2);
    // The outer table keeps its own single data row; the inner rows
    // belong to the inner table only.
    assert_eq!(tables[0].headers, ["Outer"]);
    assert_eq!(tables[0].rows.len(), 1);
    assert_eq!(tables[1].headers, ["Inner"]);
    assert_eq!(tables[1].rows, [["i1"], ["i2"]]);
}

#[test]
fn doctype_is_tolerated() {
    let html = "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0\">\
                <html><body><table><tr><th>A</th></tr><tr><td>1</td></tr></table></body></html>";
    let tables = extract_tables(html);
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].rows, [["1"]]);
}

#[test]
fn title_text_is_trimmed() {
    let html = "<html><head><title>\n  Fielding summary \n</title></head><body></body></html>";
    assert_eq!(page_title(html), "Fielding summary");
}

#[test]
fn missing_title_falls_back_to_placeholder() {
    assert_eq!(page_title("<html><body></body></html>"), "cricinfo_page");
}
