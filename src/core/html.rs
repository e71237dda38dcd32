// src/core/html.rs
// DOM helpers on top of `scraper`: locate a table, read its rows as text.

use std::error::Error;

use scraper::{ElementRef, Html, Node, Selector};

use super::sanitize::normalize_ws;
use crate::data::DataSet;

fn selector(css: &str) -> Result<Selector, Box<dyn Error>> {
    Selector::parse(css).map_err(|e| format!("Bad selector {css:?}: {e}").into())
}

/// Parse `doc` and return its `index`-th `<table>` (0 = first).
/// First row → headers, remaining rows → data.
pub fn nth_table(doc: &str, index: usize) -> Result<DataSet, Box<dyn Error>> {
    let html = Html::parse_document(doc);
    let table_sel = selector("table")?;

    let table = html
        .select(&table_sel)
        .nth(index)
        .ok_or_else(|| format!("table #{index} not found ({} in document)", html.select(&table_sel).count()))?;

    let mut rows = table_rows(table)?;
    if rows.is_empty() {
        return Err(format!("table #{index} has no rows").into());
    }
    let headers = rows.remove(0);
    Ok(DataSet { headers: Some(headers), rows })
}

/// All `<tr>` rows owned by `table` (rows of nested tables are skipped),
/// each as the text of its `<th>`/`<td>` cells in document order.
pub fn table_rows(table: ElementRef<'_>) -> Result<Vec<Vec<String>>, Box<dyn Error>> {
    let tr_sel = selector("tr")?;
    let mut out = Vec::new();

    for tr in table.select(&tr_sel) {
        let owner = tr
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(|a| a.value().name() == "table")
            .map(|a| a.id());
        if owner != Some(table.id()) { continue; }

        let cells: Vec<String> = tr
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|c| matches!(c.value().name(), "th" | "td"))
            .map(visible_text)
            .collect();
        if cells.is_empty() { continue; }
        out.push(cells);
    }
    Ok(out)
}

/// Text of `el` and its descendants, whitespace-normalized.
/// Hidden nodes (`display:none`), scripts and styles are skipped.
pub fn visible_text(el: ElementRef<'_>) -> String {
    let mut buf = s!();
    collect_text(el, &mut buf);
    normalize_ws(&buf)
}

fn collect_text(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => {
                if e.name() == "br" { out.push(' '); continue; }
                if let Some(c) = ElementRef::wrap(child) {
                    if !is_hidden(c) { collect_text(c, out); }
                }
            }
            _ => {}
        }
    }
}

fn is_hidden(el: ElementRef<'_>) -> bool {
    if matches!(el.value().name(), "script" | "style") {
        return true;
    }
    el.value()
        .attr("style")
        .map(|s| {
            let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
            compact.to_ascii_lowercase().contains("display:none")
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
        <html><body>
          <p>intro</p>
          <table class="wikitable">
            <tr><th>Rank</th><th>Country</th></tr>
            <tr><td>1</td><td>United States<sup>[6]</sup></td></tr>
            <tr><td><span style="display: none">002</span>2</td><td>Saudi&nbsp;Arabia  (OPEC)</td></tr>
            <tr><td>3</td><td><table><tr><td>inner</td></tr></table>Russia</td></tr>
          </table>
          <table><tr><th>Second</th></tr></table>
        </body></html>
    "#;

    #[test]
    fn first_table_header_and_rows() {
        let ds = nth_table(DOC, 0).unwrap();
        assert_eq!(ds.headers.as_deref(), Some(&[s!("Rank"), s!("Country")][..]));
        assert_eq!(ds.rows.len(), 3);
        assert_eq!(ds.rows[0], vec![s!("1"), s!("United States[6]")]);
    }

    #[test]
    fn hidden_sort_keys_are_skipped() {
        let ds = nth_table(DOC, 0).unwrap();
        assert_eq!(ds.rows[1][0], "2");
        assert_eq!(ds.rows[1][1], "Saudi Arabia (OPEC)");
    }

    #[test]
    fn nested_table_rows_stay_with_their_table() {
        let ds = nth_table(DOC, 0).unwrap();
        assert_eq!(ds.rows[2].len(), 2);
        assert!(ds.rows.iter().all(|r| r[0] != "inner"));
    }

    #[test]
    fn index_selects_later_tables() {
        let ds = nth_table(DOC, 2).unwrap();
        assert_eq!(ds.headers.as_deref(), Some(&[s!("Second")][..]));
        assert!(ds.rows.is_empty());
    }

    #[test]
    fn missing_table_is_an_error() {
        let err = nth_table("<p>no tables</p>", 0).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
