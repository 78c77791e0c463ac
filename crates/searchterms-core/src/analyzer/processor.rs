//! Common shape of the what, when and where processors

use std::fmt;

use super::words::{Facet, WordStream};

/// A pattern extractor driven by the analyzer's two passes.
///
/// In the sentence pass the analyzer asks [`Processor::modifier`] about every
/// unconsumed word and hands matches to [`Processor::process_modifier`]. In the
/// word pass every remaining word goes to [`Processor::process_word`].
pub trait Processor {
    /// Closed set of modifiers this processor understands
    type Modifier: Copy + fmt::Debug;

    /// Facet recorded on the words this processor claims
    const FACET: Facet;

    /// Dictionary classification of `word` for this processor.
    fn modifier(&self, word: &str) -> Option<Self::Modifier>;

    /// Match the pattern anchored on the modifier at `position`.
    fn process_modifier(&mut self, stream: &mut WordStream, modifier: Self::Modifier, position: usize);

    /// Match a bare word (no modifier) at `position`. Never records errors.
    fn process_word(&mut self, stream: &mut WordStream, position: usize);
}
