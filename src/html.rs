use scraper::{ElementRef, Html, Selector};

use crate::table::{Cell, Row};
use crate::{Error, Result};

const ROW_SELECTOR: &str = "tr";
const CELL_SELECTOR: &str = "td";

/// Extracts every table row of the document except the first one, which is the header.
pub fn parse_rows(html: &str) -> Result<Vec<Row>> {
    let doc = Html::parse_document(html);

    let row_selector = create_selector(ROW_SELECTOR)?;
    let cell_selector = create_selector(CELL_SELECTOR)?;

    doc.select(&row_selector)
        .skip(1)
        .enumerate()
        .map(|(i, tr)| parse_row(tr, &cell_selector, i + 1))
        .collect()
}

fn parse_row(tr: ElementRef<'_>, cell_selector: &Selector, row: usize) -> Result<Row> {
    let cells = tr
        .select(cell_selector)
        .map(|td| -> Result<Cell> {
            let row_span = match td.value().attr("rowspan") {
                Some(value) => Some(value.trim().parse::<usize>().map_err(|_| {
                    Error::InvalidRowSpan {
                        row,
                        value: value.into(),
                    }
                })?),
                None => None,
            };
            Ok(Cell {
                text: td.text().collect(),
                row_span,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Row::new(cells))
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::ParseMissingSelector(sel_str.into()))
}
