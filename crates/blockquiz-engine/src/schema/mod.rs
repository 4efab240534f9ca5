//! Fixed attribute schemas for the custom block types.
//!
//! Every node type declares an ordered table of [`AttrSpec`]s. The generic
//! [`decode_attrs`] / [`encode_attrs`] functions walk that table, so adding
//! a field means adding one row rather than touching the codec.

use crate::markup::Element;

/// One named attribute with its markup codec.
///
/// `decode` receives `None` when the markup attribute is absent and must
/// then apply the field's default.
pub struct AttrSpec<A> {
    pub name: &'static str,
    pub markup: &'static str,
    pub decode: fn(&mut A, Option<&str>),
    pub encode: fn(&A) -> String,
}

/// A node type that can be registered with the host document
pub trait NodeSpec: Default + Sized + 'static {
    /// Value of the `data-type` discriminator
    const TYPE_NAME: &'static str;
    /// Container tag used when rendering
    const TAG: &'static str = "div";

    fn schema() -> &'static [AttrSpec<Self>];
}

/// A persisted element belongs to `N` iff it carries `N`'s discriminator
pub fn matches<N: NodeSpec>(element: &Element) -> bool {
    element.attr("data-type") == Some(N::TYPE_NAME)
}

pub fn decode_attrs<N: NodeSpec>(element: &Element) -> N {
    let mut attrs = N::default();
    for spec in N::schema() {
        (spec.decode)(&mut attrs, element.attr(spec.markup));
    }
    attrs
}

pub fn encode_attrs<N: NodeSpec>(attrs: &N) -> Vec<(&'static str, String)> {
    N::schema()
        .iter()
        .map(|spec| (spec.markup, (spec.encode)(attrs)))
        .collect()
}

pub fn to_element<N: NodeSpec>(attrs: &N) -> Element {
    let mut element = Element::new(N::TAG).with_attr("data-type", N::TYPE_NAME);
    for (name, value) in encode_attrs(attrs) {
        element.set_attr(name, value);
    }
    element
}

/// Markup attribute name declared for the attribute called `name`
pub fn markup_name<N: NodeSpec>(name: &str) -> Option<&'static str> {
    N::schema()
        .iter()
        .find(|spec| spec.name == name)
        .map(|spec| spec.markup)
}
