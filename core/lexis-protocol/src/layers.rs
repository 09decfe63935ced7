use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

bitflags! {
    /// Which tag layers a tagging run applies.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Layers: u8 {
        /// Grammatical and discourse tags.
        const SIMPLE = 1;
        /// Semantic classes and stance complement clauses.
        const EXTENDED = 2;
        /// Tags derived from phrase-structure trees.
        const CONSTITUENCY = 4;
    }
}

impl Default for Layers {
    fn default() -> Self {
        Layers::all()
    }
}

// rkyv support for Layers
impl Archive for Layers {
    type Archived = u8;
    type Resolver = ();

    unsafe fn resolve(&self, _pos: usize, _resolver: Self::Resolver, out: *mut Self::Archived) {
        out.write(self.bits());
    }
}

impl<S: rkyv::ser::Serializer + ?Sized> Serialize<S> for Layers {
    fn serialize(&self, _serializer: &mut S) -> Result<Self::Resolver, S::Error> {
        Ok(())
    }
}

impl<D: rkyv::Fallible + ?Sized> Deserialize<Layers, D> for u8 {
    fn deserialize(&self, _deserializer: &mut D) -> Result<Layers, D::Error> {
        Ok(Layers::from_bits_truncate(*self))
    }
}
