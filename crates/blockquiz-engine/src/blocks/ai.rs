use crate::models::block::DEFAULT_AI_QUESTION;
use crate::models::{AiAttrs, Mode};
use crate::schema::{AttrSpec, NodeSpec};

static AI_SCHEMA: [AttrSpec<AiAttrs>; 3] = [
    AttrSpec {
        name: "question",
        markup: "data-question",
        decode: |attrs, value| attrs.question = value.unwrap_or(DEFAULT_AI_QUESTION).to_string(),
        encode: |attrs| attrs.question.clone(),
    },
    AttrSpec {
        name: "answer",
        markup: "data-answer",
        decode: |attrs, value| attrs.answer = value.unwrap_or_default().to_string(),
        encode: |attrs| attrs.answer.clone(),
    },
    AttrSpec {
        name: "mode",
        markup: "data-mode",
        decode: |attrs, value| attrs.mode = value.map(Mode::from_markup).unwrap_or_default(),
        encode: |attrs| attrs.mode.as_str().to_string(),
    },
];

impl NodeSpec for AiAttrs {
    const TYPE_NAME: &'static str = "ai";

    fn schema() -> &'static [AttrSpec<Self>] {
        &AI_SCHEMA
    }
}

impl AiAttrs {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            mode: Mode::Edit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{Element, Fragment, parse_fragments};
    use crate::schema::{decode_attrs, markup_name, to_element};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_attributes_use_defaults() {
        let element = Element::new("div").with_attr("data-type", "ai");
        let attrs: AiAttrs = decode_attrs(&element);
        assert_eq!(attrs, AiAttrs::default());
    }

    #[test]
    fn test_render_shape() {
        let attrs = AiAttrs {
            question: "What is Rust?".to_string(),
            answer: "A language".to_string(),
            mode: Mode::View,
        };
        insta::assert_snapshot!(
            to_element(&attrs).to_markup().unwrap(),
            @r#"<div data-type="ai" data-question="What is Rust?" data-answer="A language" data-mode="view"></div>"#
        );
    }

    #[test]
    fn test_round_trip() {
        let attrs = AiAttrs {
            question: "Quote \"me\" & <escape>".to_string(),
            answer: "multi\nline".to_string(),
            mode: Mode::View,
        };
        let markup = to_element(&attrs).to_markup().unwrap();
        let fragments = parse_fragments(&markup).unwrap();
        let Fragment::Element { element, .. } = &fragments[0] else {
            panic!("expected element");
        };
        let decoded: AiAttrs = decode_attrs(element);
        assert_eq!(decoded, attrs);
    }

    #[test]
    fn test_schema_names() {
        assert_eq!(markup_name::<AiAttrs>("question"), Some("data-question"));
        assert_eq!(markup_name::<AiAttrs>("mode"), Some("data-mode"));
        assert_eq!(markup_name::<AiAttrs>("missing"), None);
    }
}
