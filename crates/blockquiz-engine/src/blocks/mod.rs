//! Definitions of the two custom block types: their attribute schemas,
//! markup recognition and the canned attributes the commands and shortcut
//! rules insert.

pub mod ai;
pub mod mcq;

use crate::markup::{Element, MarkupError};
use crate::models::Block;
use crate::schema::{self, NodeSpec};

/// Recognize a persisted custom block, if the element is one
pub fn recognize(element: &Element) -> Option<Block> {
    if schema::matches::<crate::models::AiAttrs>(element) {
        return Some(Block::Ai(schema::decode_attrs(element)));
    }
    if schema::matches::<crate::models::McqAttrs>(element) {
        return Some(Block::Mcq(schema::decode_attrs(element)));
    }
    None
}

pub fn render<N: NodeSpec>(attrs: &N) -> Result<String, MarkupError> {
    schema::to_element(attrs).to_markup()
}
