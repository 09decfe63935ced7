//! Rescaling of raw tag counts to rates per 100 nouns, finite verbs or words.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::counts::DocumentCounts;

/// Features of the noun phrase, normalized per 100 nouns in mixed mode.
const NOUN_BASED: &[&str] = &[
    "DT", "JJAT", "POS", "NCOMP", "QUAN", "NNHUMAN", "NNCOG", "NNCONC", "NNTECH", "NNPLACE",
    "NNQUANT", "NNGRP", "NNABSPROC", "ThNNFCT", "ThNATT", "ThNFCT", "ThNLIK", "JJEPSTother",
    "JJATDother", "ToNSTNC", "PrepNSTNC", "JJATother", "ThNSTNCall", "NOMZ", "NSTNCother",
    "JJSIZE", "JJTIME", "JJCOLR", "JJEVAL", "JJREL", "JJTOPIC", "NNMention", "NNP",
];

/// Features of the verb phrase and the clause, normalized per 100 finite verbs in mixed mode.
const VERB_BASED: &[&str] = &[
    "ACT", "ASPECT", "CAUSE", "COMM", "CUZ", "CC", "CONC", "COND", "EX", "EXIST", "ELAB", "FREQ",
    "JJPR", "MENTAL", "OCCUR", "DOAUX", "QUTAG", "QUPR", "SPLIT", "STPR", "WHQU", "THSC", "WHSC",
    "CONT", "VBD", "VPRT", "PLACE", "PROG", "HGOT", "BEMA", "MDCA", "MDCO", "TIME", "THATD",
    "THRC", "VIMP", "MDMM", "ABLE", "MDNE", "MDWS", "MDWO", "XX0", "PASS", "PGET", "VBG", "VBN",
    "PEAS", "GTO", "PP1S", "PP1P", "PP3f", "PP3m", "PP3t", "PP2", "PIT", "PRP", "RP", "ThVCOMM",
    "ThVATT", "ThVFCT", "ThVLIK", "WhVATT", "WhVFCT", "WhVLIK", "WhVCOM", "ToVDSR", "ToVEFRT",
    "ToVPROB", "ToVSPCH", "ToVMNTL", "JJPRother", "VCOMMother", "VATTother", "VFCTother",
    "VLIKother", "ToVSTNCall", "ThVSTNCall", "ThJSTNCall", "ThJATT", "ThJFCT", "ThJLIK", "ThJEVL",
    "PP1all", "PP3all", "WHSCother", "THSCother", "THRCother", "MDPOSSCall", "MDPREDall",
    "PASSall", "WhVSTNCall", "MDother",
];

/// The total a tag is divided by in mixed normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Noun,
    Verb,
    Word,
}

impl Bucket {
    pub fn of(tag: &str) -> Self {
        if NOUN_BASED.contains(&tag) {
            Bucket::Noun
        } else if VERB_BASED.contains(&tag) {
            Bucket::Verb
        } else {
            Bucket::Word
        }
    }

    pub fn total(self, doc: &DocumentCounts) -> usize {
        match self {
            Bucket::Noun => doc.nouns,
            Bucket::Verb => doc.verbs,
            Bucket::Word => doc.words,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Normalization {
    /// Plain frequencies.
    Raw,
    /// Per 100 nouns, finite verbs or words depending on the [`Bucket`] of the tag.
    Mixed,
    /// Per 100 words.
    WordBased,
}

impl Normalization {
    pub const ALL: [Normalization; 3] = [Normalization::Raw, Normalization::Mixed, Normalization::WordBased];

    /// Name of the feature table written for this mode.
    pub fn file_name(self) -> &'static str {
        match self {
            Normalization::Raw => "counts_raw.csv",
            Normalization::Mixed => "counts_mixed_normed.csv",
            Normalization::WordBased => "counts_word-based_normed.csv",
        }
    }

    /// Value of the `tag` column for `doc`. A zero total yields 0.
    pub fn value(self, doc: &DocumentCounts, tag: &str) -> f64 {
        let count = f64::from(doc.count(tag));
        let total = match self {
            Normalization::Raw => return count,
            Normalization::Mixed => Bucket::of(tag).total(doc),
            Normalization::WordBased => doc.words,
        };
        if total == 0 {
            0.0
        } else {
            round4(count * 100.0 / total as f64)
        }
    }
}

impl fmt::Display for Normalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Normalization::Raw => "raw",
            Normalization::Mixed => "mixed",
            Normalization::WordBased => "word-based",
        })
    }
}

impl FromStr for Normalization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Normalization::ALL
            .into_iter()
            .find(|mode| mode.to_string() == s)
            .ok_or_else(|| format!("unknown normalization `{s}` (expected raw, mixed or word-based)"))
    }
}

pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    fn doc(words: usize, nouns: usize, verbs: usize, tags: &[(&str, u32)]) -> DocumentCounts {
        DocumentCounts {
            name: "doc.txt".to_string(),
            words,
            awl: 4.0,
            ttr: 1.0,
            lde: 0.5,
            nouns,
            verbs,
            tags: tags.iter().map(|(t, n)| (t.to_string(), *n)).collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn test_noun_based_quantifiers() {
        let d = doc(10, 2, 1, &[("QUAN", 2), ("NN", 2), ("VPRT", 1)]);
        assert_eq!(Normalization::Mixed.value(&d, "QUAN"), 100.0);
        assert_eq!(Normalization::WordBased.value(&d, "QUAN"), 20.0);
        assert_eq!(Normalization::Raw.value(&d, "QUAN"), 2.0);
        assert_eq!(Normalization::Mixed.value(&d, "VPRT"), 100.0);
        assert_eq!(Normalization::Mixed.value(&d, "NN"), 20.0);
    }

    #[test]
    fn test_buckets() {
        assert_eq!(Bucket::of("NNHUMAN"), Bucket::Noun);
        assert_eq!(Bucket::of("ThVCOMM"), Bucket::Verb);
        assert_eq!(Bucket::of("DMA"), Bucket::Word);
        assert_eq!(Bucket::of("PRESP"), Bucket::Word);
    }

    #[test]
    fn test_rounding_and_zero_totals() {
        let d = doc(3, 0, 0, &[("DMA", 1), ("NCOMP", 1), ("VBD", 1)]);
        assert_eq!(Normalization::WordBased.value(&d, "DMA"), 33.3333);
        assert_eq!(Normalization::Mixed.value(&d, "NCOMP"), 0.0);
        assert_eq!(Normalization::Mixed.value(&d, "VBD"), 0.0);
    }

    #[test]
    fn test_parse_normalization() {
        for mode in Normalization::ALL {
            assert_eq!(mode.to_string().parse::<Normalization>(), Ok(mode));
        }
        assert!("per-noun".parse::<Normalization>().is_err());
    }

    proptest! {
        #[test]
        fn prop_absent_tag_is_zero(words in 0usize..50, nouns in 0usize..20, verbs in 0usize..20, n in 1u32..9) {
            let d = doc(words, nouns, verbs, &[("DMA", n)]);
            for mode in Normalization::ALL {
                prop_assert_eq!(mode.value(&d, "QUAN"), 0.0);
                prop_assert_eq!(mode.value(&d, "VPRT"), 0.0);
                prop_assert!(mode.value(&d, "DMA").is_finite());
            }
        }
    }
}
