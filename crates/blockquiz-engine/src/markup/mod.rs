//! Markup reader/writer for top-level document elements.
//!
//! A document is parsed as an HTML body fragment with `html5ever`, so
//! anything a browser would accept loads; malformed input is repaired by
//! the parser's own recovery rules. Each top-level node of the resulting
//! `RcDom` becomes a [`Fragment`]. Elements carry their decoded attributes,
//! their text when they hold nothing else, and their serialized form so
//! unmodelled content can be written back as it was read.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use html5ever::serialize::{SerializeOpts, TraversalScope};
use html5ever::tendril::TendrilSink;
use html5ever::{Attribute, LocalName, ParseOpts, QualName, ns, parse_fragment, serialize};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};

#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    #[error("HTML serialization failed: {0}")]
    Serialize(#[from] std::io::Error),
    #[error("Serialized markup is not UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    /// Content of an element that holds nothing but text, untrimmed
    pub text: Option<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn to_markup(&self) -> Result<String, MarkupError> {
        let node = create_element(&self.tag, &self.attrs);
        if let Some(text) = self.text.as_deref().filter(|text| !text.is_empty()) {
            node.children.borrow_mut().push(create_text(text));
        }
        serialize_node(&node)
    }
}

/// A top-level piece of a markup document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Element { element: Element, source: String },
    /// Loose text between elements (trimmed, entities decoded)
    Text(String),
    /// Comments and processing instructions, serialized
    Other(String),
}

/// Split a markup document into its top-level fragments.
///
/// Doctypes are dropped: a document file holds a body fragment.
pub fn parse_fragments(input: &str) -> Result<Vec<Fragment>, MarkupError> {
    let context = QualName::new(None, ns!(html), LocalName::from("body"));
    let dom = parse_fragment(
        RcDom::default(),
        ParseOpts::default(),
        context,
        Vec::new(),
        false,
    )
    .one(input);

    // Fragment parsing puts every parsed node under a synthetic <html> root
    let root = dom.document.children.borrow().first().cloned();
    let Some(root) = root else {
        return Ok(Vec::new());
    };
    let children = root.children.borrow();
    let mut fragments = Vec::with_capacity(children.len());
    for child in children.iter() {
        if let Some(fragment) = fragment_from_node(child)? {
            fragments.push(fragment);
        }
    }
    Ok(fragments)
}

fn fragment_from_node(node: &Handle) -> Result<Option<Fragment>, MarkupError> {
    let fragment = match &node.data {
        NodeData::Element { name, attrs, .. } => Fragment::Element {
            element: Element {
                tag: name.local.to_string(),
                attrs: attrs
                    .borrow()
                    .iter()
                    .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                    .collect(),
                text: text_content(node),
            },
            source: serialize_node(node)?,
        },
        NodeData::Text { contents } => {
            let text = contents.borrow().trim().to_string();
            if text.is_empty() {
                return Ok(None);
            }
            Fragment::Text(text)
        }
        NodeData::Comment { .. } | NodeData::ProcessingInstruction { .. } => {
            Fragment::Other(serialize_node(node)?)
        }
        NodeData::Document | NodeData::Doctype { .. } => return Ok(None),
    };
    Ok(Some(fragment))
}

/// Concatenated text children, or `None` if any child is not text
fn text_content(node: &Handle) -> Option<String> {
    let mut text = String::new();
    for child in node.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => text.push_str(&contents.borrow()),
            _ => return None,
        }
    }
    Some(text)
}

fn create_element(tag: &str, attrs: &[(String, String)]) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name.as_str())),
            value: value.clone().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Serialize a node together with its children
fn serialize_node(node: &Handle) -> Result<String, MarkupError> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };
    serialize(&mut output, &SerializableHandle::from(node.clone()), opts)?;
    Ok(String::from_utf8(output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn single_element(input: &str) -> (Element, String) {
        let mut fragments = parse_fragments(input).unwrap();
        assert_eq!(fragments.len(), 1, "expected one fragment in {input:?}");
        match fragments.remove(0) {
            Fragment::Element { element, source } => (element, source),
            other => panic!("expected element, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_single_quoted_json_attribute() {
        let (element, source) = single_element(
            r#"<div data-type="mcq" data-answers='[{"text":"8","correct":false}]'></div>"#,
        );
        assert_eq!(element.tag, "div");
        assert_eq!(element.attr("data-type"), Some("mcq"));
        assert_eq!(
            element.attr("data-answers"),
            Some(r#"[{"text":"8","correct":false}]"#)
        );
        assert_eq!(
            source,
            r#"<div data-type="mcq" data-answers="[{&quot;text&quot;:&quot;8&quot;,&quot;correct&quot;:false}]"></div>"#
        );
    }

    #[test]
    fn test_parse_decodes_entities_in_attributes() {
        let (element, _) =
            single_element(r#"<div data-question="&quot;Why?&quot; &amp; how"></div>"#);
        assert_eq!(element.attr("data-question"), Some("\"Why?\" & how"));
    }

    #[test]
    fn test_parse_nested_same_tag() {
        let fragments = parse_fragments("<div><div>inner</div></div><p>after</p>").unwrap();
        assert_eq!(fragments.len(), 2);
        let Fragment::Element { element, source } = &fragments[0] else {
            panic!("expected element");
        };
        assert_eq!(element.text, None);
        assert_eq!(source, "<div><div>inner</div></div>");
    }

    #[test]
    fn test_parse_void_and_self_closing() {
        let fragments = parse_fragments("<hr>\n<br />\n<p>x</p>").unwrap();
        assert_eq!(fragments.len(), 3);
    }

    #[test]
    fn test_parse_loose_text_and_comments() {
        let fragments = parse_fragments("hello &amp; bye\n<!-- note -->").unwrap();
        assert_eq!(
            fragments,
            vec![
                Fragment::Text("hello & bye".to_string()),
                Fragment::Other("<!-- note -->".to_string()),
            ]
        );
    }

    #[test]
    fn test_doctype_is_dropped() {
        let (element, _) = single_element("<!DOCTYPE html>\n<p>hi</p>");
        assert_eq!(element.tag, "p");
        assert_eq!(element.text.as_deref(), Some("hi"));
    }

    #[test]
    fn test_stray_angle_bracket_is_text() {
        let fragments =
            parse_fragments("<p>intro</p>\nif a < b then\n<div data-type=\"ai\"></div>").unwrap();
        assert_eq!(fragments.len(), 3);
        assert_eq!(fragments[1], Fragment::Text("if a < b then".to_string()));
    }

    #[test]
    fn test_unclosed_element_is_closed_by_parser() {
        let fragments = parse_fragments("<p>one</p><div data-type=\"ai\">").unwrap();
        let Fragment::Element { element, source } = &fragments[1] else {
            panic!("expected element");
        };
        assert_eq!(element.attr("data-type"), Some("ai"));
        assert_eq!(source, "<div data-type=\"ai\"></div>");
    }

    #[test]
    fn test_element_to_markup_escapes_attributes() {
        let element = Element::new("div")
            .with_attr("data-type", "ai")
            .with_attr("data-question", "say \"hi\"");
        assert_eq!(
            element.to_markup().unwrap(),
            r#"<div data-type="ai" data-question="say &quot;hi&quot;"></div>"#
        );
    }

    #[test]
    fn test_element_to_markup_escapes_text() {
        let element = Element::new("p").with_text("a < b & c");
        assert_eq!(element.to_markup().unwrap(), "<p>a &lt; b &amp; c</p>");
    }

    #[test]
    fn test_text_keeps_surrounding_whitespace() {
        let (element, _) = single_element("<p>  a &lt; b\n</p>");
        assert_eq!(element.text.as_deref(), Some("  a < b\n"));
        let (element, _) = single_element("<p><em>x</em></p>");
        assert_eq!(element.text, None);
        let (element, _) = single_element("<p></p>");
        assert_eq!(element.text.as_deref(), Some(""));
    }
}
