use std::collections::BTreeSet;
use std::io;

use crate::catalog;
use crate::counts::DocumentCounts;
use crate::normalize::{round4, Normalization};
use crate::StatsError;

const SCALARS: &[&str] = &["Filename", "Words", "AWL", "TTR", "LDE"];

/// One row per document, sorted by file name, with a column for every catalogued tag that
/// occurs somewhere in the corpus.
#[derive(Debug, Clone)]
pub struct FeatureTable {
    rows: Vec<DocumentCounts>,
    columns: Vec<&'static str>,
}

impl FeatureTable {
    pub fn new(mut rows: Vec<DocumentCounts>) -> Self {
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        let present: BTreeSet<&str> = rows
            .iter()
            .flat_map(|row| row.tags.keys().map(String::as_str))
            .collect();
        let columns = catalog::columns(&present);
        Self { rows, columns }
    }

    pub fn rows(&self) -> &[DocumentCounts] {
        &self.rows
    }

    /// Tag columns, after the scalar features.
    pub fn columns(&self) -> &[&'static str] {
        &self.columns
    }

    pub fn header(&self) -> Vec<&str> {
        SCALARS.iter().chain(&self.columns).copied().collect()
    }

    pub fn record(&self, row: &DocumentCounts, mode: Normalization) -> Vec<String> {
        let mut record = vec![
            row.name.clone(),
            row.words.to_string(),
            round4(row.awl).to_string(),
            round4(row.ttr).to_string(),
            round4(row.lde).to_string(),
        ];
        record.extend(self.columns.iter().map(|tag| match mode {
            Normalization::Raw => row.count(tag).to_string(),
            _ => mode.value(row, tag).to_string(),
        }));
        record
    }

    pub fn write_csv<W: io::Write>(&self, writer: W, mode: Normalization) -> Result<(), StatsError> {
        let mut out = csv::Writer::from_writer(writer);
        out.write_record(self.header())?;
        for row in &self.rows {
            out.write_record(self.record(row, mode))?;
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counts::count_document;
    use lexis_protocol::Token;

    fn counted(name: &str, lines: &[&str]) -> DocumentCounts {
        let tokens: Vec<Token> = lines.iter().filter_map(|l| Token::parse_tagged(l)).collect();
        count_document(name, &tokens, 400).expect("counts")
    }

    #[test]
    fn test_feature_table() {
        let table = FeatureTable::new(vec![
            counted("b.txt", &["yes_DMA", "it_PIT", "works_VPRT"]),
            counted("a.txt", &["the_DT", "cat_NN NNother", "sat_VBD", "._."]),
        ]);
        assert_eq!(table.rows()[0].name, "a.txt");
        assert_eq!(
            table.header(),
            vec!["Filename", "Words", "AWL", "TTR", "LDE", "DMA", "DT", "NN", "PIT", "VBD", "VPRT", "NNother"]
        );

        let mut raw = Vec::new();
        table.write_csv(&mut raw, Normalization::Raw).expect("csv");
        let raw = String::from_utf8(raw).expect("utf-8");
        let lines: Vec<&str> = raw.lines().collect();
        assert_eq!(lines[0], "Filename,Words,AWL,TTR,LDE,DMA,DT,NN,PIT,VBD,VPRT,NNother");
        assert_eq!(lines[1], "a.txt,3,3,1,0.6667,0,1,1,0,1,0,1");
        assert_eq!(lines[2], "b.txt,3,3.3333,1,0.3333,1,0,0,1,0,1,0");

        let mut mixed = Vec::new();
        table.write_csv(&mut mixed, Normalization::Mixed).expect("csv");
        let mixed = String::from_utf8(mixed).expect("utf-8");
        // DT per 100 nouns, VBD per 100 finite verbs, DMA per 100 words
        assert_eq!(mixed.lines().nth(1), Some("a.txt,3,3,1,0.6667,0,100,33.3333,0,100,0,33.3333"));
        assert_eq!(mixed.lines().nth(2), Some("b.txt,3,3.3333,1,0.3333,33.3333,0,0,100,0,100,0"));
    }
}
