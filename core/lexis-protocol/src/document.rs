use alloc::string::String;
use alloc::vec::Vec;
use rkyv::{Archive, Deserialize, Serialize};

use crate::ids::DocumentId;
use crate::layers::Layers;
use crate::token::Token;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// A fully tagged document, sentence by sentence, pads removed.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct TaggedDocument {
    pub id: DocumentId,
    pub name: String,
    pub layers: Layers,
    pub sentences: Vec<Vec<Token>>,
}

impl TaggedDocument {
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.sentences.iter().flatten()
    }
}

/// A tagged corpus snapshot, written by the CLI as a single archive.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct TaggedCorpus {
    pub version: u32,
    pub documents: Vec<TaggedDocument>,
}
