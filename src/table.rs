//! Rebuilds `(episode, description)` pairs from the rows of the death table.
//!
//! An episode with several deaths declares a `rowspan` on its first cell. The
//! rows it covers after the first one carry only the description, in column 0.

use crate::{Error, Result};

/// A table cell: its text and, if declared, its `rowspan`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub row_span: Option<usize>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            row_span: None,
        }
    }

    pub fn spanning(text: impl Into<String>, rows: usize) -> Self {
        Self {
            text: text.into(),
            row_span: Some(rows),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    fn text_at(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(|c| c.text.trim())
    }
}

impl From<Vec<Cell>> for Row {
    fn from(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

/// An episode label with one death description attributed to it.
pub type Death = (String, String);

const EPISODE_COL: usize = 0;
const DESCRIPTION_COL: usize = 2;
const CONTINUATION_COL: usize = 0;

/// Remainder of a row-span block still to be read.
#[derive(Debug)]
struct Span {
    episode: String,
    declared: usize,
    remaining: usize,
}

/// Forward-only walk over table rows.
///
/// Yields every death in document order. The first structural error ends the walk.
#[derive(Debug)]
pub struct TableWalker<I> {
    rows: I,
    span: Option<Span>,
    /// Rows consumed so far, for error reporting.
    position: usize,
    done: bool,
}

impl<I: Iterator<Item = Row>> TableWalker<I> {
    pub fn new(rows: I) -> Self {
        Self {
            rows,
            span: None,
            position: 0,
            done: false,
        }
    }

    fn pull(&mut self) -> Option<Row> {
        let row = self.rows.next()?;
        self.position += 1;
        Some(row)
    }

    fn fail(&mut self, err: Error) -> Option<Result<Death>> {
        self.done = true;
        self.span = None;
        Some(Err(err))
    }

    /// Next non-empty continuation row of the current span, if any is left.
    fn next_in_span(&mut self) -> Option<Result<Death>> {
        while let Some(span) = self.span.as_mut() {
            if span.remaining == 0 {
                self.span = None;
                break;
            }
            span.remaining -= 1;
            let found = span.declared - span.remaining - 1;

            let Some(row) = self.pull() else {
                let Some(span) = self.span.take() else { break };
                return self.fail(Error::SpanExhausted {
                    episode: span.episode,
                    declared: span.declared,
                    found,
                });
            };
            let Some(text) = row.text_at(CONTINUATION_COL) else {
                let row = self.position;
                return self.fail(Error::MissingCell {
                    row,
                    index: CONTINUATION_COL,
                });
            };
            // Some continuation rows are left blank in the source table.
            if text.is_empty() {
                continue;
            }
            let text = text.to_string();
            if let Some(span) = self.span.as_ref() {
                return Some(Ok((span.episode.clone(), text)));
            }
        }
        None
    }
}

impl<I: Iterator<Item = Row>> Iterator for TableWalker<I> {
    type Item = Result<Death>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }
            if self.span.is_some() {
                if let Some(death) = self.next_in_span() {
                    return Some(death);
                }
                continue;
            }

            let Some(row) = self.pull() else {
                self.done = true;
                return None;
            };
            let Some(first) = row.cells.get(EPISODE_COL) else {
                let row = self.position;
                return self.fail(Error::MissingCell {
                    row,
                    index: EPISODE_COL,
                });
            };
            let episode = first.text.trim().to_string();

            match first.row_span {
                Some(declared) => {
                    self.span = Some(Span {
                        episode: episode.clone(),
                        declared,
                        remaining: declared.saturating_sub(1),
                    });
                    // Episodes with no recorded death stop after the title column.
                    if let Some(description) = row.text_at(DESCRIPTION_COL) {
                        return Some(Ok((episode, description.to_string())));
                    }
                }
                None => {
                    let Some(description) = row.text_at(DESCRIPTION_COL) else {
                        let row = self.position;
                        return self.fail(Error::MissingCell {
                            row,
                            index: DESCRIPTION_COL,
                        });
                    };
                    return Some(Ok((episode, description.to_string())));
                }
            }
        }
    }
}

/// Walks `rows`, header already removed.
pub fn walk<R>(rows: R) -> TableWalker<R::IntoIter>
where
    R: IntoIterator<Item = Row>,
{
    TableWalker::new(rows.into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(episode: &str, title: &str, description: &str) -> Row {
        vec![Cell::new(episode), Cell::new(title), Cell::new(description)].into()
    }

    fn continuation(description: &str) -> Row {
        vec![Cell::new(description)].into()
    }

    fn collect(rows: Vec<Row>) -> Result<Vec<Death>> {
        walk(rows).collect()
    }

    fn pair(episode: &str, description: &str) -> Death {
        (episode.to_string(), description.to_string())
    }

    #[test]
    fn single_rows_are_trimmed() {
        let deaths = collect(vec![
            single(" 1.01 ", "Pilot", " Constance Welch "),
            single("1.02", "Wendigo", ""),
        ])
        .unwrap();
        assert_eq!(
            deaths,
            vec![pair("1.01", "Constance Welch"), pair("1.02", "")]
        );
    }

    #[test]
    fn span_block_attributes_continuations_to_episode() {
        let deaths = collect(vec![
            vec![Cell::spanning("1.03", 3), Cell::new("Dead in the Water"), Cell::new("Sophie")].into(),
            continuation("Bill and Lucas"),
            continuation("Peter"),
            single("1.04", "Phantom Traveler", "a demon"),
        ])
        .unwrap();
        assert_eq!(
            deaths,
            vec![
                pair("1.03", "Sophie"),
                pair("1.03", "Bill and Lucas"),
                pair("1.03", "Peter"),
                pair("1.04", "a demon"),
            ]
        );
    }

    #[test]
    fn span_start_without_description_still_reads_block() {
        let deaths = collect(vec![
            vec![Cell::spanning("2.01", 2), Cell::new("In My Time of Dying")].into(),
            continuation("John"),
        ])
        .unwrap();
        assert_eq!(deaths, vec![pair("2.01", "John")]);
    }

    #[test]
    fn blank_continuation_rows_are_skipped() {
        let deaths = collect(vec![
            vec![Cell::spanning("3.16", 3), Cell::new("No Rest for the Wicked"), Cell::new("Dean")].into(),
            continuation("   "),
            continuation("Lilith's victim"),
        ])
        .unwrap();
        assert_eq!(
            deaths,
            vec![pair("3.16", "Dean"), pair("3.16", "Lilith's victim")]
        );
    }

    #[test]
    fn span_of_one_is_a_single_row_block() {
        let deaths = collect(vec![
            vec![Cell::spanning("4.01", 1), Cell::new("Lazarus Rising"), Cell::new("Pamela")].into(),
            single("4.02", "Are You There God?", "Henriksen"),
        ])
        .unwrap();
        assert_eq!(
            deaths,
            vec![pair("4.01", "Pamela"), pair("4.02", "Henriksen")]
        );
    }

    #[test]
    fn exhausted_span_fails_instead_of_truncating() {
        let mut walker = walk(vec![
            vec![Cell::spanning("5.22", 3), Cell::new("Swan Song"), Cell::new("Bobby")].into(),
            continuation("Castiel"),
        ]);
        assert_eq!(walker.next().unwrap().unwrap(), pair("5.22", "Bobby"));
        assert_eq!(walker.next().unwrap().unwrap(), pair("5.22", "Castiel"));
        match walker.next() {
            Some(Err(Error::SpanExhausted {
                episode,
                declared,
                found,
            })) => {
                assert_eq!(episode, "5.22");
                assert_eq!(declared, 3);
                assert_eq!(found, 2);
            }
            other => panic!("expected SpanExhausted, got {other:?}"),
        }
        assert!(walker.next().is_none());
    }

    #[test]
    fn single_row_missing_description_is_structural_error() {
        let err = collect(vec![
            single("1.01", "Pilot", "Jess"),
            vec![Cell::new("1.02"), Cell::new("Wendigo")].into(),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::MissingCell { row: 2, index: 2 }));
    }

    #[test]
    fn continuation_row_without_cells_is_structural_error() {
        let err = collect(vec![
            vec![Cell::spanning("6.10", 2), Cell::new("Caged Heat"), Cell::new("Crowley's demons")].into(),
            Row::default(),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::MissingCell { row: 2, index: 0 }));
    }

    #[test]
    fn empty_row_is_structural_error() {
        let err = collect(vec![Row::default()]).unwrap_err();
        assert!(matches!(err, Error::MissingCell { row: 1, index: 0 }));
    }

    #[test]
    fn no_rows_no_deaths() {
        assert!(collect(Vec::new()).unwrap().is_empty());
    }
}
