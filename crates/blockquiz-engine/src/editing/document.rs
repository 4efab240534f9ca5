use crate::autoformat::{self, McqDialect};
use crate::blocks;
use crate::editing::{Cmd, Patch};
use crate::markup::{self, Element, Fragment, MarkupError};
use crate::models::{AiAttrs, Block, McqAttrs, Mode, Node, NodeId, TextBlock, TextKind};

/// Host document: an ordered sequence of top-level nodes.
///
/// The document owns every node's attributes. Views never hold their own
/// copy of a block's state beyond what they last rendered; they request
/// changes with [`Cmd`]s and re-render from the returned [`Patch`].
///
/// ```rust
/// # use blockquiz_engine::editing::{Cmd, Document};
/// # use blockquiz_engine::McqDialect;
/// let markup = r#"<h2>Quiz</h2><div data-type="mcq" data-question-text="Q" data-answers='[]'></div>"#;
/// let mut doc = Document::from_markup(markup, McqDialect::Learnr).unwrap();
/// assert_eq!(doc.nodes().len(), 2);
///
/// let patch = doc.apply(Cmd::InsertAi {
///     question: "Why?".to_string(),
///     answer: String::new(),
/// });
/// assert_eq!(patch.version, doc.version());
/// assert_eq!(doc.nodes().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub(crate) nodes: Vec<Node>,
    /// Node new blocks are inserted after
    pub(crate) cursor: Option<NodeId>,
    pub(crate) mode: Mode,
    /// Incremented on each edit that changed something
    pub(crate) version: u64,
    pub(crate) dialect: McqDialect,
}

impl Document {
    pub fn new(dialect: McqDialect) -> Self {
        Self {
            nodes: Vec::new(),
            cursor: None,
            mode: Mode::Edit,
            version: 0,
            dialect,
        }
    }

    /// Parse a markup document. Custom blocks are recognized by their
    /// `data-type`; plain paragraphs and headings become editable text
    /// blocks; everything else is kept verbatim.
    pub fn from_markup(markup: &str, dialect: McqDialect) -> anyhow::Result<Self> {
        let fragments = markup::parse_fragments(markup)?;
        let mut document = Self::new(dialect);
        document.nodes = fragments.into_iter().filter_map(node_from_fragment).collect();
        log::debug!("Parsed document with {} nodes", document.nodes.len());
        Ok(document)
    }

    pub fn to_markup(&self) -> Result<String, MarkupError> {
        let parts = self
            .nodes
            .iter()
            .map(|node| block_to_markup(&node.block))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(parts.join("\n"))
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn cursor(&self) -> Option<NodeId> {
        self.cursor
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn dialect(&self) -> McqDialect {
        self.dialect
    }

    /// Apply a command. Commands that address a missing node, or a node of
    /// the wrong kind, return an empty patch and leave the version alone.
    pub fn apply(&mut self, cmd: Cmd) -> Patch {
        log::debug!("Applying {cmd:?}");
        let mut patch = Patch::default();

        match cmd {
            Cmd::InsertParagraph { text } => {
                let id = self.insert_at_cursor(Block::Text(TextBlock::paragraph(text)));
                patch.changed.push(id);
            }
            Cmd::InsertAi { question, answer } => {
                let attrs = AiAttrs {
                    question,
                    answer,
                    mode: self.mode,
                };
                let id = self.insert_at_cursor(Block::Ai(attrs));
                patch.changed.push(id);
            }
            Cmd::InsertMcq {
                question_text,
                answers,
            } => {
                let attrs = McqAttrs {
                    question_text,
                    answers,
                    mode: self.mode,
                };
                let id = self.insert_at_cursor(Block::Mcq(attrs));
                patch.changed.push(id);
            }
            Cmd::SetText { id, text } => {
                if self.set_text(id, text) {
                    patch.changed.push(id);
                }
            }
            Cmd::SetTextKind { id, kind } => {
                if let Some(Block::Text(block)) = self.block_mut(id)
                    && block.kind != kind
                {
                    block.kind = kind;
                    patch.changed.push(id);
                }
            }
            Cmd::UpdateAttributes { id, update } => {
                if let Some(block) = self.block_mut(id)
                    && update.apply_to(block)
                {
                    patch.changed.push(id);
                }
            }
            Cmd::RemoveBlock { id } => {
                if self.remove(id) {
                    patch.removed.push(id);
                }
            }
            Cmd::Focus { id } => {
                if self.node(id).is_some() {
                    self.cursor = Some(id);
                }
            }
            Cmd::SetMode(mode) => {
                self.mode = mode;
                for node in &mut self.nodes {
                    if node.block.set_mode(mode) {
                        patch.changed.push(node.id);
                    }
                }
            }
        }

        if !patch.is_empty() {
            self.version += 1;
        }
        patch.version = self.version;
        patch
    }

    fn block_mut(&mut self, id: NodeId) -> Option<&mut Block> {
        self.nodes
            .iter_mut()
            .find(|node| node.id == id)
            .map(|node| &mut node.block)
    }

    fn insert_at_cursor(&mut self, block: Block) -> NodeId {
        let index = self
            .cursor
            .and_then(|cursor| self.nodes.iter().position(|node| node.id == cursor))
            .map(|i| i + 1)
            .unwrap_or(self.nodes.len());
        let node = Node::new(block);
        let id = node.id;
        self.nodes.insert(index, node);
        self.cursor = Some(id);
        id
    }

    fn set_text(&mut self, id: NodeId, text: String) -> bool {
        let dialect = self.dialect;
        let Some(block) = self.block_mut(id) else {
            return false;
        };
        let Block::Text(text_block) = &mut *block else {
            return false;
        };
        if text_block.text == text {
            return false;
        }

        match autoformat::match_rule(&text, dialect) {
            Some((rule, converted)) => {
                log::info!("Autoformat {rule:?} converted block {id:?}");
                *block = converted;
            }
            None => text_block.text = text,
        }
        true
    }

    fn remove(&mut self, id: NodeId) -> bool {
        let Some(index) = self.nodes.iter().position(|node| node.id == id) else {
            return false;
        };
        self.nodes.remove(index);
        if self.cursor == Some(id) {
            let neighbour = index.checked_sub(1).or(Some(index));
            self.cursor = neighbour
                .and_then(|i| self.nodes.get(i))
                .map(|node| node.id);
        }
        true
    }
}

fn node_from_fragment(fragment: Fragment) -> Option<Node> {
    let block = match fragment {
        Fragment::Element { element, source } => block_from_element(element, source),
        Fragment::Text(text) if text.is_empty() => return None,
        Fragment::Text(text) => Block::Text(TextBlock::paragraph(text)),
        Fragment::Other(source) => Block::Raw(source),
    };
    Some(Node::new(block))
}

fn block_from_element(element: Element, source: String) -> Block {
    if let Some(block) = blocks::recognize(&element) {
        return block;
    }
    let text_block = TextKind::from_tag(&element.tag)
        .filter(|_| element.attrs.is_empty())
        .zip(element.text);
    match text_block {
        Some((kind, text)) => Block::Text(TextBlock { kind, text }),
        None => Block::Raw(source),
    }
}

fn block_to_markup(block: &Block) -> Result<String, MarkupError> {
    match block {
        Block::Text(text) => Element::new(text.kind.tag())
            .with_text(text.text.as_str())
            .to_markup(),
        Block::Ai(attrs) => blocks::render(attrs),
        Block::Mcq(attrs) => blocks::render(attrs),
        Block::Raw(source) => Ok(source.clone()),
    }
}
