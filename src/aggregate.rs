use std::collections::HashMap;

use serde::{Serialize, Serializer};

use crate::classify::{CategoryCounts, Classifier};
use crate::Result;

/// Kill counts per episode, kept in the order episodes were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KillTable {
    entries: Vec<(String, CategoryCounts)>,
    index: HashMap<String, usize>,
}

impl KillTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `counts` to the totals of `episode`, starting from zero on first sight.
    pub fn add(&mut self, episode: &str, counts: CategoryCounts) {
        match self.index.get(episode) {
            Some(&i) => self.entries[i].1 += counts,
            None => {
                self.index.insert(episode.to_string(), self.entries.len());
                self.entries.push((episode.to_string(), counts));
            }
        }
    }

    pub fn get(&self, episode: &str) -> Option<&CategoryCounts> {
        self.index.get(episode).map(|&i| &self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryCounts)> {
        self.entries.iter().map(|(e, c)| (e.as_str(), c))
    }

    /// Sum over every episode.
    pub fn total(&self) -> CategoryCounts {
        self.entries
            .iter()
            .fold(CategoryCounts::default(), |acc, (_, c)| acc + *c)
    }
}

impl Serialize for KillTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Classifies every description and sums the results per episode.
/// Stops at the first error coming out of `deaths`.
pub fn aggregate<I>(deaths: I, classifier: &Classifier) -> Result<KillTable>
where
    I: IntoIterator<Item = Result<(String, String)>>,
{
    let mut table = KillTable::new();
    for death in deaths {
        let (episode, description) = death?;
        table.add(&episode, classifier.classify(&description));
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{Category, Lexicon};

    fn classifier() -> Classifier {
        Classifier::new(Lexicon::default()).unwrap()
    }

    fn ok(episode: &str, description: &str) -> Result<(String, String)> {
        Ok((episode.to_string(), description.to_string()))
    }

    #[test]
    fn empty_input_gives_empty_table() {
        let table = aggregate(Vec::new(), &classifier()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn counts_accumulate_per_episode() {
        let table = aggregate(
            vec![
                ok("1.01", "Jess"),
                ok("1.02", "a ghost"),
                ok("1.01", "Sam and Dean"),
            ],
            &classifier(),
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.get("1.01"),
            Some(&CategoryCounts::single(Category::Humans, 3))
        );
        assert_eq!(table.get("1.02").unwrap().demons, 1);
        assert_eq!(table.total().total(), 4);
    }

    #[test]
    fn accumulating_onto_saturated_entry_does_not_overflow() {
        let table = aggregate(
            vec![
                ok("1.01", "99999999999999999999999 victims"),
                ok("1.01", "Sam"),
                ok("1.01", "a vampire"),
            ],
            &classifier(),
        )
        .unwrap();

        let counts = table.get("1.01").unwrap();
        assert_eq!(counts.humans, u64::MAX);
        assert_eq!(counts.demons, 1);
        assert_eq!(counts.total(), u64::MAX);
        assert_eq!(table.total().humans, u64::MAX);
    }

    #[test]
    fn first_seen_order_is_kept() {
        let table = aggregate(
            vec![ok("10", "x"), ok("2", "y"), ok("10", "z")],
            &classifier(),
        )
        .unwrap();
        let order: Vec<_> = table.iter().map(|(e, _)| e).collect();
        assert_eq!(order, vec!["10", "2"]);
    }

    #[test]
    fn error_stops_the_fold() {
        let res = aggregate(
            vec![
                ok("1.01", "Jess"),
                Err(crate::Error::MissingCell { row: 2, index: 2 }),
                ok("1.02", "never reached"),
            ],
            &classifier(),
        );
        assert!(res.is_err());
    }

    #[test]
    fn serializes_as_object_of_counts() {
        let mut table = KillTable::new();
        table.add("1.01", CategoryCounts::single(Category::Angels, 2));
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"1.01":{"angels":2,"demons":0,"humans":0}}"#);
    }
}
