//! Line-based segmentation of a Nougat markup document.
//!
//! A single forward scan classifies each line with mutually exclusive
//! start-of-block predicates, tested in priority order: title, then
//! abstract, then section. A line matching none of them appends to
//! whatever block is open, or to the misc block when none is.
//!
//! Title, abstract, and misc are singular accumulators: re-triggering
//! their start rule later in the document appends to the existing
//! block. Misc content separated by intervening blocks therefore
//! flattens into one bucket. That merge-on-reentry behavior is
//! deliberate, inherited from the original tooling.

/// Marker token identifying the abstract heading. Nougat renders the
/// abstract as a deep heading (`###### Abstract`), so the rule matches
/// on the token anywhere in the line rather than on a prefix.
const ABSTRACT_MARKER: &str = "Abstract";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockLabel {
    Title,
    Abstract,
    Section(usize),
    Misc,
}

/// One labeled run of lines, header line included.
#[derive(Debug, Clone)]
pub struct Block {
    pub label: BlockLabel,
    pub text: String,
}

/// Labeled blocks of a segmented document, in encounter order.
#[derive(Debug, Default)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn title(&self) -> Option<&str> {
        self.find(BlockLabel::Title)
    }

    pub fn abstract_text(&self) -> Option<&str> {
        self.find(BlockLabel::Abstract)
    }

    pub fn misc(&self) -> Option<&str> {
        self.find(BlockLabel::Misc)
    }

    /// Section texts in index order.
    pub fn sections(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter(|b| matches!(b.label, BlockLabel::Section(_)))
            .map(|b| b.text.as_str())
            .collect()
    }

    fn find(&self, label: BlockLabel) -> Option<&str> {
        self.blocks
            .iter()
            .find(|b| b.label == label)
            .map(|b| b.text.as_str())
    }

    /// Index of the block with this label, creating it empty if absent.
    /// Used for the singular title/abstract/misc accumulators.
    fn find_or_create(&mut self, label: BlockLabel) -> usize {
        match self.blocks.iter().position(|b| b.label == label) {
            Some(idx) => idx,
            None => {
                self.blocks.push(Block {
                    label,
                    text: String::new(),
                });
                self.blocks.len() - 1
            }
        }
    }
}

/// Segment a document given as a sequence of lines.
///
/// Lines may arrive with or without their trailing newline; block text
/// always stores one line per `\n`. The scan is a single pass over the
/// input and terminates at end of input unconditionally.
pub fn segment<'a, I>(lines: I) -> Document
where
    I: IntoIterator<Item = &'a str>,
{
    let mut doc = Document::default();
    let mut current: Option<usize> = None;
    let mut next_section = 0usize;

    for line in lines {
        if line.starts_with("# ") {
            let idx = doc.find_or_create(BlockLabel::Title);
            append_line(&mut doc.blocks[idx].text, line);
            current = Some(idx);
        } else if line.contains(ABSTRACT_MARKER) {
            let idx = doc.find_or_create(BlockLabel::Abstract);
            append_line(&mut doc.blocks[idx].text, line);
            current = Some(idx);
        } else if line.starts_with("## ") {
            doc.blocks.push(Block {
                label: BlockLabel::Section(next_section),
                text: String::new(),
            });
            next_section += 1;
            let idx = doc.blocks.len() - 1;
            append_line(&mut doc.blocks[idx].text, line);
            current = Some(idx);
        } else {
            let idx = match current {
                Some(idx) => idx,
                None => {
                    let idx = doc.find_or_create(BlockLabel::Misc);
                    current = Some(idx);
                    idx
                }
            };
            append_line(&mut doc.blocks[idx].text, line);
        }
    }

    doc
}

fn append_line(text: &mut String, line: &str) {
    text.push_str(line);
    if !line.ends_with('\n') {
        text.push('\n');
    }
}
