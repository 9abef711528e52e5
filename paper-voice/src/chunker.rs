//! Bounded chunking of raw text for summarization requests.

/// Separator between candidate pieces: a sentence end at a line break.
pub const SEPARATOR: &str = ".\n";

/// Default upper bound on chunk length, in bytes.
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 10_000;

/// Split `text` on `separator` and greedily coalesce adjacent pieces
/// while the result stays under `max_size`, re-inserting the separator
/// between coalesced neighbours.
///
/// Any chunk whose length is not strictly under `max_size` is dropped
/// afterwards, so no chunk can overflow the downstream context window.
/// A single separator-free piece over the bound is therefore lost
/// rather than split further.
pub fn split_chunks(text: &str, separator: &str, max_size: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for piece in text.split(separator) {
        if current.is_empty() {
            current = piece.to_string();
        } else if current.len() + separator.len() + piece.len() < max_size {
            current.push_str(separator);
            current.push_str(piece);
        } else {
            chunks.push(std::mem::take(&mut current));
            current = piece.to_string();
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks.retain(|chunk| chunk.len() < max_size);
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_short_text_is_one_chunk() {
        let chunks = split_chunks("one sentence. still the same chunk", SEPARATOR, 100);
        assert_eq!(chunks, vec!["one sentence. still the same chunk"]);
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        assert!(split_chunks("", SEPARATOR, 100).is_empty());
    }

    #[test]
    fn test_pieces_coalesce_up_to_the_bound() {
        let text = "aaaa.\nbbbb.\ncccc.\ndddd";
        let chunks = split_chunks(text, SEPARATOR, 11);
        assert_eq!(chunks, vec!["aaaa.\nbbbb", "cccc.\ndddd"]);
    }

    #[test]
    fn test_oversized_piece_is_dropped() {
        let long = "x".repeat(50);
        let text = format!("short one.\n{long}.\nshort two");
        let chunks = split_chunks(&text, SEPARATOR, 20);
        assert_eq!(chunks, vec!["short one", "short two"]);
    }

    #[test]
    fn test_chunks_preserve_input_order() {
        let text = "first.\nsecond.\nthird.\nfourth";
        let chunks = split_chunks(text, SEPARATOR, 14);
        let mut offset = 0;
        for chunk in &chunks {
            let found = text[offset..]
                .find(chunk.as_str())
                .expect("chunk not found in order");
            offset += found + chunk.len();
        }
    }

    proptest! {
        #[test]
        fn prop_all_chunks_strictly_under_bound(
            text in "[a-z .\n]{0,400}",
            max_size in 4usize..60,
        ) {
            for chunk in split_chunks(&text, SEPARATOR, max_size) {
                prop_assert!(chunk.len() < max_size);
            }
        }

        #[test]
        fn prop_chunks_are_ordered_substrings(text in "[a-z .\n]{0,400}") {
            let chunks = split_chunks(&text, SEPARATOR, 40);
            let mut offset = 0;
            for chunk in &chunks {
                let found = text[offset..].find(chunk.as_str());
                prop_assert!(found.is_some());
                offset += found.unwrap() + chunk.len();
            }
        }
    }
}
