//! Chunk ordering: header, entries, footer

use crate::artwork::{footer_chunks, header_chunks};
use crate::{Chunk, EncodeError, Entry, ExcludeList};

/// The complete credits table in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSequence {
    chunks: Vec<Chunk>,
    header_len: usize,
    entry_len: usize,
}

impl ChunkSequence {
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn header(&self) -> &[Chunk] {
        &self.chunks[..self.header_len]
    }

    /// Chunks generated from entries
    pub fn entries(&self) -> &[Chunk] {
        &self.chunks[self.header_len..self.header_len + self.entry_len]
    }

    pub fn footer(&self) -> &[Chunk] {
        &self.chunks[self.header_len + self.entry_len..]
    }

    /// Total encoded size of all chunks in bytes
    pub fn encoded_len(&self) -> usize {
        self.chunks.iter().map(Chunk::encoded_len).sum()
    }
}

/// Build the credits table from `entries`.
///
/// Excluded names are dropped before any chunk is built, so they never take
/// an index slot. Fails on the first entry that cannot be encoded.
pub fn assemble(entries: Vec<Entry>, exclude: &ExcludeList) -> Result<ChunkSequence, EncodeError> {
    let header = header_chunks()?;
    let footer = footer_chunks()?;

    let body = entries
        .iter()
        .filter(|e| !exclude.contains(&e.name))
        .map(Chunk::entry)
        .collect::<Result<Vec<_>, _>>()?;

    let header_len = header.len();
    let entry_len = body.len();

    let mut chunks = header;
    chunks.extend(body);
    chunks.extend(footer);

    Ok(ChunkSequence {
        chunks,
        header_len,
        entry_len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dummy_entries, Operation, Tier};

    #[test]
    fn test_order_header_entries_footer() {
        let entries = vec![Entry::new("Alice", Tier::One), Entry::new("Bob", Tier::Two)];
        let seq = assemble(entries, &ExcludeList::default()).unwrap();

        assert_eq!(seq.header().len(), 3);
        assert_eq!(seq.entries().len(), 2);
        assert_eq!(seq.footer().len(), 4);
        assert_eq!(seq.len(), 9);
        assert_eq!(seq.chunks()[3].label(), Some("Alice: Tier 1"));
        assert_eq!(seq.chunks()[4].label(), Some("Bob: Tier 2"));
    }

    #[test]
    fn test_exclusion_is_case_insensitive() {
        let entries = vec![
            Entry::new("alice", Tier::One),
            Entry::new("Alice", Tier::Two),
            Entry::new("Carol", Tier::Three),
        ];
        let seq = assemble(entries, &ExcludeList::parse("Alice")).unwrap();

        assert_eq!(seq.entries().len(), 1);
        assert_eq!(seq.entries()[0].ops()[2], Operation::ByteList(b"Carol".to_vec()));
        assert_eq!(seq.len(), 3 + 1 + 4);
    }

    #[test]
    fn test_excluded_entry_is_never_encoded() {
        // Would fail encoding if it were not filtered first
        let entries = vec![Entry::new("A".repeat(40), Tier::One)];
        let exclude = ExcludeList::new(["a".repeat(40)]);
        let seq = assemble(entries, &exclude).unwrap();
        assert!(seq.entries().is_empty());
    }

    #[test]
    fn test_bad_entry_fails_whole_run() {
        let entries = vec![Entry::new("Ok", Tier::One), Entry::new("A".repeat(33), Tier::One)];
        assert!(matches!(
            assemble(entries, &ExcludeList::default()),
            Err(EncodeError::LabelTooLong { .. })
        ));
    }

    #[test]
    fn test_dummy_entries_assemble() {
        let seq = assemble(dummy_entries(), &ExcludeList::default()).unwrap();
        assert_eq!(seq.entries().len(), 33);
        assert_eq!(seq, assemble(dummy_entries(), &ExcludeList::default()).unwrap());
    }

    #[test]
    fn test_no_entries() {
        let seq = assemble(Vec::new(), &ExcludeList::default()).unwrap();
        assert!(seq.entries().is_empty());
        assert_eq!(seq.len(), 7);
        assert!(!seq.is_empty());
    }

    #[test]
    fn test_every_chunk_within_budget() {
        let seq = assemble(dummy_entries(), &ExcludeList::default()).unwrap();
        assert!(seq.chunks().iter().all(|c| c.units() <= crate::CHUNK_UNITS));
        assert!(seq.encoded_len() > 0);
    }
}
