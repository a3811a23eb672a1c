//! Rendering of mining results.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::hash::Hash;

use itertools::Itertools;
use serde::Serialize;

use crate::{error::Result, frequent::FrequentItemsets, itemset::Itemset, types::SupportCount};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `{ { a, b } { c } }` followed by the total.
    #[default]
    Text,
    Json,
}

/// A finished run, ready to print.
///
/// Itemsets always come out in display order (size, then lexicographic)
/// and are never truncated.
pub struct Report<'a, T> {
    input: &'a str,
    frequent: &'a FrequentItemsets<T>,
}

#[derive(Serialize)]
struct JsonReport<'a, T> {
    input: &'a str,
    min_support: SupportCount,
    num_transactions: usize,
    total: usize,
    itemsets: Vec<JsonItemset<'a, T>>,
}

#[derive(Serialize)]
struct JsonItemset<'a, T> {
    items: &'a Itemset<T>,
    support: SupportCount,
}

impl<'a, T: Eq + Hash + Ord> Report<'a, T> {
    pub fn new(input: &'a str, frequent: &'a FrequentItemsets<T>) -> Self {
        Self { input, frequent }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String>
    where
        T: Display + Serialize,
    {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => self.to_json(),
        }
    }

    pub fn to_json(&self) -> Result<String>
    where
        T: Serialize,
    {
        let report = JsonReport {
            input: self.input,
            min_support: self.frequent.min_support(),
            num_transactions: self.frequent.num_transactions(),
            total: self.frequent.len(),
            itemsets: self
                .frequent
                .sorted()
                .into_iter()
                .map(|(items, support)| JsonItemset { items, support })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

impl<T: Eq + Hash + Ord + Display> Display for Report<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "inputfile {}", self.input)?;
        writeln!(f, "min_sup {}", self.frequent.min_support())?;
        writeln!(
            f,
            "{{ {} }}",
            self.frequent
                .sorted()
                .into_iter()
                .map(|(itemset, _)| itemset)
                .join(" ")
        )?;
        write!(f, "End - total items: {}", self.frequent.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mine, MinerConfig, Miner};

    #[test]
    fn text_report() {
        let transactions = vec![vec![1, 2, 3], vec![1, 2], vec![1, 3], vec![2, 3], vec![1, 2, 3]];
        let frequent = mine(transactions, 3).unwrap();
        let report = Report::new("baskets.csv", &frequent);

        assert_eq!(
            report.to_string(),
            "inputfile baskets.csv\n\
             min_sup 3\n\
             { { 1 } { 2 } { 3 } { 1, 2 } { 1, 3 } { 2, 3 } }\n\
             End - total items: 6"
        );
    }

    #[test]
    fn empty_text_report() {
        let frequent = mine(Vec::<Vec<u64>>::new(), 1).unwrap();
        let text = Report::new("empty.csv", &frequent).render(OutputFormat::Text).unwrap();
        assert!(text.ends_with("{  }\nEnd - total items: 0"));
    }

    #[test]
    fn json_report() {
        let frequent = Miner::new(MinerConfig::new(2))
            .run(vec![vec!["milk", "bread"], vec!["bread", "milk"], vec!["eggs"]])
            .unwrap();
        let json = Report::new("in.csv", &frequent).render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["total"], 3);
        assert_eq!(value["num_transactions"], 3);
        assert_eq!(value["itemsets"][0]["items"], serde_json::json!(["bread"]));
        assert_eq!(
            value["itemsets"][2],
            serde_json::json!({ "items": ["bread", "milk"], "support": 2 })
        );
    }
}
