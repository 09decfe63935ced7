use std::fmt::Display;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use lexis_protocol::{DocumentId, Layers, TaggedCorpus, TaggedDocument, Token};
use lexis_stats::{count_document, FeatureTable, Normalization};
use lexis_tagger::Tagger;
use log::{info, warn};
use rkyv::ser::{serializers::AllocSerializer, Serializer};

use crate::files::{display_name, text_files, write_atomic};

pub const ARCHIVE_VERSION: u32 = 1;

/// Outcome of one corpus step. Failing documents are skipped and listed at the end.
#[derive(Debug, Default)]
pub struct Report {
    pub done: usize,
    pub failed: Vec<(String, String)>,
}

impl Report {
    fn fail(&mut self, name: &str, reason: impl Display) {
        warn!("{name}: {reason}");
        self.failed.push((name.to_string(), reason.to_string()));
    }

    /// Logs the summary; an error when nothing at all was processed.
    pub fn finish(&self, step: &str) -> Result<()> {
        info!("{step}: {} documents", self.done);
        if !self.failed.is_empty() {
            let names: Vec<&str> = self.failed.iter().map(|(name, _)| name.as_str()).collect();
            warn!("{step}: {} documents skipped: {}", self.failed.len(), names.join(", "));
        }
        if self.done == 0 {
            bail!("{step}: no document could be processed");
        }
        Ok(())
    }
}

fn read_text(path: &Path) -> std::io::Result<String> {
    fs::read(path).map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}

/// One token per line: `word_PRIMARY SECONDARY...`.
fn render(doc: &TaggedDocument) -> String {
    let mut out = String::new();
    for token in doc.tokens() {
        out.push_str(&token.to_string());
        out.push('\n');
    }
    out
}

/// Tags every text file of `input` and writes the tagged file of the same name to `output`.
/// Trees are looked up under the same file name in `trees`.
pub fn tag_corpus(
    tagger: &Tagger,
    input: &Path,
    trees: Option<&Path>,
    output: &Path,
    report: &mut Report,
) -> Result<Vec<TaggedDocument>> {
    fs::create_dir_all(output).with_context(|| format!("creating {:?}", output))?;
    let mut documents = Vec::new();
    for (k, path) in text_files(input)?.into_iter().enumerate() {
        let name = display_name(&path);
        let text = match read_text(&path) {
            Ok(text) => text,
            Err(e) => {
                report.fail(&name, e);
                continue;
            }
        };
        let tree_text = trees.and_then(|dir| {
            let tree_path = dir.join(&name);
            read_text(&tree_path)
                .map_err(|e| warn!("{name}: no trees ({e}); constituency tags skipped"))
                .ok()
        });
        let doc = tagger.tag_document(DocumentId::new(k as u32), &name, &text, tree_text.as_deref());
        write_atomic(&output.join(&name), render(&doc).as_bytes())?;
        report.done += 1;
        documents.push(doc);
    }
    Ok(documents)
}

/// Reads back tagged files written by [`tag_corpus`].
pub fn load_corpus(input: &Path, report: &mut Report) -> Result<Vec<TaggedDocument>> {
    let mut documents = Vec::new();
    for (k, path) in text_files(input)?.into_iter().enumerate() {
        let name = display_name(&path);
        match read_text(&path) {
            Ok(text) => documents.push(TaggedDocument {
                id: DocumentId::new(k as u32),
                name,
                layers: Layers::empty(),
                sentences: vec![text.lines().filter_map(Token::parse_tagged).collect()],
            }),
            Err(e) => report.fail(&name, e),
        }
    }
    Ok(documents)
}

/// Counts every document; documents without words are reported and left out of the table.
pub fn count_corpus(documents: &[TaggedDocument], ttr_window: usize, report: &mut Report) -> FeatureTable {
    let mut rows = Vec::new();
    for doc in documents {
        match count_document(&doc.name, doc.tokens(), ttr_window) {
            Ok(counts) => {
                report.done += 1;
                rows.push(counts);
            }
            Err(e) => report.fail(&doc.name, e),
        }
    }
    FeatureTable::new(rows)
}

pub fn write_tables(table: &FeatureTable, normalizations: &[Normalization], output: &Path) -> Result<()> {
    fs::create_dir_all(output).with_context(|| format!("creating {:?}", output))?;
    for &mode in normalizations {
        let mut buffer = Vec::new();
        table.write_csv(&mut buffer, mode)?;
        let path = output.join(mode.file_name());
        write_atomic(&path, &buffer)?;
        info!("{mode} table written to {:?}", path);
    }
    Ok(())
}

/// Writes the tagged corpus as one validated rkyv archive.
pub fn write_archive(path: &Path, documents: &[TaggedDocument]) -> Result<()> {
    let corpus = TaggedCorpus {
        version: ARCHIVE_VERSION,
        documents: documents.to_vec(),
    };
    let mut serializer = AllocSerializer::<4096>::default();
    serializer
        .serialize_value(&corpus)
        .map_err(|e| anyhow!("archiving tagged corpus: {e:?}"))?;
    let bytes = serializer.into_serializer().into_inner();
    write_atomic(path, &bytes)?;
    info!("archive of {} documents written to {:?}", documents.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn corpus() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("in");
        fs::create_dir(&input).expect("mkdir");
        fs::write(input.join("a.txt"), "the_DT report_NN is_VBZ eaten_VBN ._.\n").expect("write");
        fs::write(input.join("b.txt"), "yes_UH ,_, we_PRP left_VBD ._.\n").expect("write");
        fs::write(input.join("empty.txt"), "._.\n").expect("write");
        (dir, input)
    }

    #[test]
    fn test_tag_and_count() {
        let (dir, input) = corpus();
        let tagged = dir.path().join("out/Tagged");
        let stats = dir.path().join("out/Statistics");

        let mut report = Report::default();
        let documents = tag_corpus(&Tagger::new(Layers::SIMPLE), &input, None, &tagged, &mut report).expect("tag");
        assert_eq!(documents.len(), 3);
        report.finish("tagged").expect("tagged");

        let a = fs::read_to_string(tagged.join("a.txt")).expect("read");
        assert!(a.lines().nth(3).is_some_and(|l| l.starts_with("eaten_PASS")));

        let mut report = Report::default();
        let reloaded = load_corpus(&tagged, &mut report).expect("load");
        let table = count_corpus(&reloaded, 400, &mut report);
        assert_eq!(report.done, 2);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "empty.txt");
        write_tables(&table, &Normalization::ALL, &stats).expect("tables");

        let raw = fs::read_to_string(stats.join("counts_raw.csv")).expect("read");
        assert!(raw.starts_with("Filename,Words,AWL,TTR,LDE,"));
        assert_eq!(raw.lines().count(), 3);
        assert!(stats.join("counts_mixed_normed.csv").is_file());
        assert!(stats.join("counts_word-based_normed.csv").is_file());
    }

    #[test]
    fn test_trees_are_optional_per_document() {
        let (dir, input) = corpus();
        let trees = dir.path().join("trees");
        fs::create_dir(&trees).expect("mkdir");
        fs::write(trees.join("b.txt"), "(S (INTJ (UH yes)) (, ,) (NP (PRP we)) (VP (VBD left)) (. .))\n").expect("write");

        let mut report = Report::default();
        let documents = tag_corpus(&Tagger::default(), &input, Some(&trees), &dir.path().join("out"), &mut report)
            .expect("tag");
        assert_eq!(report.done, 3);
        assert!(report.failed.is_empty());
        assert_eq!(documents[1].sentences[0].len(), 5);
    }

    #[test]
    fn test_archive() {
        let (dir, input) = corpus();
        let mut report = Report::default();
        let documents = tag_corpus(&Tagger::default(), &input, None, &dir.path().join("out"), &mut report)
            .expect("tag");
        let path = dir.path().join("corpus.rkyv");
        write_archive(&path, &documents).expect("archive");

        let bytes = fs::read(&path).expect("read");
        let mut aligned = rkyv::AlignedVec::new();
        aligned.extend_from_slice(&bytes);
        let archived = rkyv::check_archived_root::<TaggedCorpus>(&aligned).expect("valid archive");
        assert_eq!(archived.version, ARCHIVE_VERSION);
        assert_eq!(archived.documents.len(), 3);
        assert_eq!(archived.documents[0].name.as_str(), "a.txt");
    }

    #[test]
    fn test_nothing_processed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut report = Report::default();
        let documents = tag_corpus(&Tagger::default(), dir.path(), None, &dir.path().join("out"), &mut report)
            .expect("tag");
        assert!(documents.is_empty());
        assert!(report.finish("tagged").is_err());
    }
}
