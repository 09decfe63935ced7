//! Tags that become feature-table columns, grouped by the layer that emits them.

use std::collections::BTreeSet;

pub const SIMPLE: &[&str] = &[
    "ABLE", "ACT", "AMP", "ASPECT", "BEMA", "CAUSE", "CC", "CD", "COMM", "CONC", "COND", "CONT",
    "CUZ", "DEMO", "DMA", "DOAUX", "DT", "DWNT", "ELAB", "EMO", "EMPH", "EX", "EXIST", "FPUH",
    "FREQ", "GTO", "HDG", "HGOT", "HST", "IN", "JJAT", "JJPR", "MDCA", "MDCO", "MDMM", "MDNE",
    "MDWO", "MDWS", "MENTAL", "NCOMP", "NN", "OCCUR", "PASS", "PEAS", "PGET", "PIT", "PLACE",
    "POLITE", "POS", "PP1P", "PP1S", "PP2", "PP3f", "PP3m", "PP3t", "PROG", "QUAN", "QUPR",
    "QUTAG", "RB", "RP", "SPLIT", "STPR", "THATD", "THRC", "THSC", "TIME", "URL", "VBD", "VBG",
    "VBN", "VIMP", "VPRT", "WHQU", "WHSC", "XX0", "YNQU",
];

pub const EXTENDED: &[&str] = &[
    "COMPAR", "INother", "JJATDother", "JJATother", "JJCOLR", "JJEPSTother", "JJEVAL",
    "JJPRother", "JJREL", "JJSIZE", "JJTIME", "JJTOPIC", "MDPOSSCall", "MDPREDall", "NNABSPROC",
    "NNCOG", "NNCONC", "NNGRP", "NNHUMAN", "NNother", "NNP", "NNPLACE", "NNQUANT", "NNTECH",
    "NOMZ", "NSTNCother", "PASSall", "PP1all", "PP3all", "PrepNSTNC", "RATT", "RBother", "RFACT",
    "RLIKELY", "RNONFACT", "RSTNCall", "SUPER", "ThJATT", "ThJEVL", "ThJFCT", "ThJLIK",
    "ThJSTNCall", "ThNATT", "ThNFCT", "ThNLIK", "ThNNFCT", "ThNSTNCall", "THRCother", "THSCother",
    "ThSTNCall", "ThVATT", "ThVCOMM", "ThVFCT", "ThVLIK", "ThVSTNCall", "ToJABL", "ToJCRTN",
    "ToJEASE", "ToJEFCT", "ToJEVAL", "ToJSTNCall", "ToNSTNC", "ToSTNCall", "ToThNSTNCall",
    "ToVDSR", "ToVEFRT", "ToVMNTL", "ToVPROB", "ToVSPCH", "ToVSTNCall", "VATTother", "VCOMMother",
    "VFCTother", "VLIKother", "WHSCother", "WhVATT", "WhVCOM", "WhVFCT", "WhVLIK", "WhVSTNCall",
];

pub const CONSTITUENCY: &[&str] = &["ANDC", "PASTP", "PHC", "PIRE", "PRESP", "WZPAST", "WZPRES"];

/// Feature columns for a corpus in which `present` tags occur: simple-layer tags, then
/// extended-layer tags, then constituency tags, each group in byte order. Tags outside the
/// catalog have no column.
pub fn columns(present: &BTreeSet<&str>) -> Vec<&'static str> {
    [SIMPLE, EXTENDED, CONSTITUENCY]
        .into_iter()
        .flat_map(|group| {
            let mut tags: Vec<&'static str> = group.iter().copied().filter(|t| present.contains(t)).collect();
            tags.sort_unstable();
            tags
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_are_disjoint() {
        let all: BTreeSet<&str> = SIMPLE.iter().chain(EXTENDED).chain(CONSTITUENCY).copied().collect();
        assert_eq!(all.len(), SIMPLE.len() + EXTENDED.len() + CONSTITUENCY.len());
    }

    #[test]
    fn test_column_order() {
        let present: BTreeSet<&str> = ["PRESP", "NNHUMAN", "VPRT", "DMA", "PPother", "WQ", "ThNFCT", "THRCother"]
            .into_iter()
            .collect();
        assert_eq!(
            columns(&present),
            vec!["DMA", "VPRT", "NNHUMAN", "THRCother", "ThNFCT", "PRESP"]
        );
    }
}
