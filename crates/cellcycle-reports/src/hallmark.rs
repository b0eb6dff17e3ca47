//! Hallmark / gene co-occurrence aggregation.
//!
//! Input rows are `(gene, hallmark)` pairs. Every row contributes one
//! hallmark entry and one count to its gene; duplicates are kept, so
//! `count` measures row contributions rather than distinct hallmarks.

use std::collections::HashMap;
use std::io::Read;

use serde::Serialize;

use crate::error::Result;
use crate::table::Table;

/// All hallmarks recorded for one gene, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HallmarkSummary {
    pub gene: String,
    pub hallmarks: Vec<String>,
    pub count: usize,
}

/// Per-request accumulator keyed on gene.
///
/// Summaries come out in order of each gene's first appearance.
#[derive(Debug, Default)]
pub struct HallmarkAggregator {
    summaries: Vec<HallmarkSummary>,
    index: HashMap<String, usize>,
}

impl HallmarkAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one `(gene, hallmark)` row.
    pub fn push(&mut self, gene: &str, hallmark: &str) {
        let slot = match self.index.get(gene) {
            Some(&slot) => slot,
            None => {
                self.summaries.push(HallmarkSummary {
                    gene: gene.to_string(),
                    hallmarks: Vec::new(),
                    count: 0,
                });
                let slot = self.summaries.len() - 1;
                self.index.insert(gene.to_string(), slot);
                slot
            }
        };
        let summary = &mut self.summaries[slot];
        summary.hallmarks.push(hallmark.to_string());
        summary.count += 1;
    }

    pub fn finish(self) -> Vec<HallmarkSummary> {
        self.summaries
    }
}

/// Group a two-column `gene \t hallmark` table by gene.
///
/// The first line is a header and is ignored. Rows with fewer than two
/// columns are skipped; columns past the second are ignored.
pub fn aggregate_hallmarks<R: Read>(reader: R) -> Result<Vec<HallmarkSummary>> {
    let table = Table::read(reader)?;
    let mut aggregator = HallmarkAggregator::new();
    for row in table {
        let row = row?;
        if let [gene, hallmark, ..] = row.fields() {
            aggregator.push(gene, hallmark);
        }
    }
    Ok(aggregator.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary<'a>(summaries: &'a [HallmarkSummary], gene: &str) -> &'a HallmarkSummary {
        summaries.iter().find(|s| s.gene == gene).unwrap()
    }

    #[test]
    fn test_duplicate_hallmarks_are_counted() {
        let input = "gene\thallmark\nTP53\tApoptosis\nTP53\tApoptosis\nBRCA1\tDNA_repair\n";
        let summaries = aggregate_hallmarks(input.as_bytes()).unwrap();
        assert_eq!(summaries.len(), 2);

        let tp53 = summary(&summaries, "TP53");
        assert_eq!(tp53.hallmarks, vec!["Apoptosis", "Apoptosis"]);
        assert_eq!(tp53.count, 2);

        let brca1 = summary(&summaries, "BRCA1");
        assert_eq!(brca1.hallmarks, vec!["DNA_repair"]);
        assert_eq!(brca1.count, 1);
    }

    #[test]
    fn test_hallmark_order_follows_source() {
        let input = "gene\thallmark\nCDK1\tProliferation\nMYC\tMetabolism\nCDK1\tGenome_instability\nCDK1\tProliferation\n";
        let summaries = aggregate_hallmarks(input.as_bytes()).unwrap();
        assert_eq!(
            summary(&summaries, "CDK1").hallmarks,
            vec!["Proliferation", "Genome_instability", "Proliferation"]
        );
    }

    #[test]
    fn test_counts_sum_to_contributing_rows() {
        let input = "gene\thallmark\nA\tx\nB\ty\nshort\nA\tz\textra\nC\tw\n\torphan\n";
        let summaries = aggregate_hallmarks(input.as_bytes()).unwrap();
        // "short" is skipped, the empty gene is a valid key
        let total: usize = summaries.iter().map(|s| s.count).sum();
        assert_eq!(total, 5);
        for s in &summaries {
            assert_eq!(s.hallmarks.len(), s.count);
        }
        assert_eq!(summary(&summaries, "A").hallmarks, vec!["x", "z"]);
        assert_eq!(summary(&summaries, "").hallmarks, vec!["orphan"]);
    }

    #[test]
    fn test_emission_order_is_stable() {
        let input = "gene\thallmark\nZNF1\ta\nAAA\tb\nMMM\tc\nAAA\td\n";
        let first = aggregate_hallmarks(input.as_bytes()).unwrap();
        let second = aggregate_hallmarks(input.as_bytes()).unwrap();
        assert_eq!(first, second);
        let genes: Vec<&str> = first.iter().map(|s| s.gene.as_str()).collect();
        assert_eq!(genes, vec!["ZNF1", "AAA", "MMM"]);
    }

    #[test]
    fn test_blank_and_latin1_lines() {
        let input: &[u8] = b"gene\thallmark\nTP53\tApoptosis\n\nCDK1\tCaf\xe9\n";
        let summaries = aggregate_hallmarks(input).unwrap();
        let genes: Vec<&str> = summaries.iter().map(|s| s.gene.as_str()).collect();
        assert_eq!(genes, vec!["TP53", "CDK1"]);
        assert_eq!(summaries[1].hallmarks, vec!["Caf\u{FFFD}".to_string()]);
    }

    #[test]
    fn test_header_only_yields_nothing() {
        let summaries = aggregate_hallmarks("gene\thallmark\n".as_bytes()).unwrap();
        assert!(summaries.is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let mut agg = HallmarkAggregator::new();
        agg.push("TP53", "Apoptosis");
        let json = serde_json::to_value(agg.finish()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"gene": "TP53", "hallmarks": ["Apoptosis"], "count": 1}])
        );
    }
}
