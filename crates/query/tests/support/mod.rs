//! Shared fixtures for integration tests: a CDP document and a tiny
//! selector engine that only sees `SelectorAdapter`.

#![allow(dead_code)]

use std::cell::Cell;

use dom::{DomArena, DomService, NodeId};
use dom_query::SelectorAdapter;
use serde_json::{json, Value};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Builds CDP node JSON with unique ids
pub struct CdpBuilder {
    next_id: Cell<u64>,
}

impl CdpBuilder {
    pub fn new() -> Self {
        Self { next_id: Cell::new(1) }
    }

    fn id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    pub fn document(&self, children: Vec<Value>) -> Value {
        let id = self.id();
        json!({
            "nodeId": id, "backendNodeId": id, "nodeType": 9,
            "nodeName": "#document", "nodeValue": "",
            "children": children
        })
    }

    pub fn doctype(&self) -> Value {
        let id = self.id();
        json!({"nodeId": id, "backendNodeId": id, "nodeType": 10, "nodeName": "html", "nodeValue": ""})
    }

    pub fn element(&self, tag: &str, attributes: &[(&str, &str)], children: Vec<Value>) -> Value {
        let id = self.id();
        let flat: Vec<&str> = attributes
            .iter()
            .flat_map(|&(name, value)| [name, value])
            .collect();
        json!({
            "nodeId": id, "backendNodeId": id, "nodeType": 1,
            "nodeName": tag.to_ascii_uppercase(), "localName": tag, "nodeValue": "",
            "attributes": flat,
            "children": children
        })
    }

    pub fn text(&self, text: &str) -> Value {
        let id = self.id();
        json!({"nodeId": id, "backendNodeId": id, "nodeType": 3, "nodeName": "#text", "nodeValue": text})
    }

    pub fn comment(&self, text: &str) -> Value {
        let id = self.id();
        json!({"nodeId": id, "backendNodeId": id, "nodeType": 8, "nodeName": "#comment", "nodeValue": text})
    }
}

/// The reference test page:
///
/// ```html
/// <!DOCTYPE html>
/// <html>
///   <head><title>I am document</title></head>
///   <body>
///     <h1>I am a <span data-something="something">header</span></h1>
///     <p>Look at my <span class="zomg">first paragraph</span>
///     <p>I am a <span class="omg">second paragraph</span>
///   </body>
/// </html>
/// ```
pub fn page() -> (DomArena, NodeId) {
    let b = CdpBuilder::new();
    let document = b.document(vec![
        b.doctype(),
        b.element(
            "html",
            &[],
            vec![
                b.element("head", &[], vec![b.element("title", &[], vec![b.text("I am document")])]),
                b.text("\n  "),
                b.element(
                    "body",
                    &[],
                    vec![
                        b.element(
                            "h1",
                            &[],
                            vec![
                                b.text("I am a "),
                                b.element("span", &[("data-something", "something")], vec![b.text("header")]),
                            ],
                        ),
                        b.text("\n    "),
                        b.element(
                            "p",
                            &[],
                            vec![
                                b.text("Look at my "),
                                b.element("span", &[("class", "zomg")], vec![b.text("first paragraph")]),
                                b.text("\n    "),
                            ],
                        ),
                        b.comment(" second "),
                        b.element(
                            "p",
                            &[],
                            vec![
                                b.text("I am a "),
                                b.element("span", &[("class", "omg")], vec![b.text("second paragraph")]),
                                b.text("\n  "),
                            ],
                        ),
                    ],
                ),
            ],
        ),
    ]);

    let mut service = DomService::new();
    let root = service
        .parse_cdp_dom_tree(&json!({ "root": document }))
        .unwrap();
    (service.into_arena(), root)
}

#[derive(Debug, Clone, PartialEq)]
enum AttrOp {
    Exists,
    Equals(String),
    Contains(String),
    Includes(String),
    Prefix(String),
    Suffix(String),
}

#[derive(Debug, Clone, PartialEq)]
enum Simple {
    Tag(String),
    Universal,
    Class(String),
    Id(String),
    Attr(String, AttrOp),
    Empty,
    Contains(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Combinator {
    Descendant,
    Child,
    Adjacent,
}

/// Compiled selector: compounds left to right, `links[i]` joins
/// `compounds[i]` and `compounds[i + 1]`.
#[derive(Debug)]
pub struct Selector {
    compounds: Vec<Vec<Simple>>,
    links: Vec<Combinator>,
}

impl Selector {
    /// Supports `tag`, `*`, `.class`, `#id`, `[attr]`, `[attr=v]`, `[attr*=v]`,
    /// `[attr~=v]`, `[attr^=v]`, `[attr$=v]`, `:empty`, `:contains(text)` and
    /// the ` `, `>`, `+` combinators.
    pub fn parse(input: &str) -> Self {
        let chars: Vec<char> = input.trim().chars().collect();
        let mut compounds = vec![Vec::new()];
        let mut links = Vec::new();
        let mut i = 0;

        let ident = |i: &mut usize| {
            let start = *i;
            while *i < chars.len() && (chars[*i].is_alphanumeric() || chars[*i] == '-' || chars[*i] == '_') {
                *i += 1;
            }
            chars[start..*i].iter().collect::<String>()
        };

        while i < chars.len() {
            match chars[i] {
                ' ' | '>' | '+' => {
                    let mut link = Combinator::Descendant;
                    while i < chars.len() && matches!(chars[i], ' ' | '>' | '+') {
                        match chars[i] {
                            '>' => link = Combinator::Child,
                            '+' => link = Combinator::Adjacent,
                            _ => {}
                        }
                        i += 1;
                    }
                    links.push(link);
                    compounds.push(Vec::new());
                }
                '*' => {
                    i += 1;
                    compounds.last_mut().unwrap().push(Simple::Universal);
                }
                '.' => {
                    i += 1;
                    let name = ident(&mut i);
                    compounds.last_mut().unwrap().push(Simple::Class(name));
                }
                '#' => {
                    i += 1;
                    let name = ident(&mut i);
                    compounds.last_mut().unwrap().push(Simple::Id(name));
                }
                '[' => {
                    let close = (i..chars.len()).find(|&j| chars[j] == ']').unwrap();
                    let body: String = chars[i + 1..close].iter().collect();
                    i = close + 1;
                    compounds.last_mut().unwrap().push(parse_attribute(&body));
                }
                ':' => {
                    i += 1;
                    let name = ident(&mut i);
                    let simple = match name.as_str() {
                        "empty" => Simple::Empty,
                        "contains" => {
                            let close = (i..chars.len()).find(|&j| chars[j] == ')').unwrap();
                            let arg: String = chars[i + 1..close].iter().collect();
                            i = close + 1;
                            Simple::Contains(unquote(&arg).to_string())
                        }
                        other => panic!("unsupported pseudo-class :{other}"),
                    };
                    compounds.last_mut().unwrap().push(simple);
                }
                _ => {
                    let name = ident(&mut i);
                    assert!(!name.is_empty(), "unexpected {:?} in {input:?}", chars[i]);
                    compounds.last_mut().unwrap().push(Simple::Tag(name));
                }
            }
        }

        Self { compounds, links }
    }

    pub fn matches<A: SelectorAdapter>(&self, adapter: &A, elem: &A::Element) -> bool {
        self.matches_from(adapter, self.compounds.len() - 1, elem)
    }

    fn matches_from<A: SelectorAdapter>(&self, adapter: &A, index: usize, elem: &A::Element) -> bool {
        if !self.compounds[index].iter().all(|simple| matches_simple(adapter, simple, elem)) {
            return false;
        }
        if index == 0 {
            return true;
        }

        let node = adapter.element_node(elem);
        match self.links[index - 1] {
            Combinator::Child => adapter
                .get_parent(node)
                .and_then(|parent| adapter.as_element(&parent))
                .is_some_and(|parent| self.matches_from(adapter, index - 1, &parent)),
            Combinator::Descendant => {
                let mut cursor = adapter.get_parent(node);
                while let Some(ancestor) = cursor {
                    if let Some(elem) = adapter.as_element(&ancestor) {
                        if self.matches_from(adapter, index - 1, &elem) {
                            return true;
                        }
                    }
                    cursor = adapter.get_parent(&ancestor);
                }
                false
            }
            Combinator::Adjacent => {
                let siblings = adapter.get_siblings(node);
                let position = siblings.iter().position(|sibling| sibling == node);
                position
                    .and_then(|pos| {
                        siblings[..pos]
                            .iter()
                            .rev()
                            .find_map(|sibling| adapter.as_element(sibling))
                    })
                    .is_some_and(|prev| self.matches_from(adapter, index - 1, &prev))
            }
        }
    }
}

fn unquote(value: &str) -> &str {
    value.trim().trim_matches(|c| c == '"' || c == '\'')
}

fn parse_attribute(body: &str) -> Simple {
    // Two-character operators first: "=" would split them in half
    let operators: [(&str, fn(String) -> AttrOp); 5] = [
        ("*=", AttrOp::Contains),
        ("~=", AttrOp::Includes),
        ("^=", AttrOp::Prefix),
        ("$=", AttrOp::Suffix),
        ("=", AttrOp::Equals),
    ];
    for (op, build) in operators {
        if let Some((name, value)) = body.split_once(op) {
            return Simple::Attr(name.trim().to_string(), build(unquote(value).to_string()));
        }
    }
    Simple::Attr(body.trim().to_string(), AttrOp::Exists)
}

fn matches_simple<A: SelectorAdapter>(adapter: &A, simple: &Simple, elem: &A::Element) -> bool {
    let node = adapter.element_node(elem);
    match simple {
        Simple::Universal => true,
        Simple::Tag(tag) => adapter.get_tag_name(elem).eq_ignore_ascii_case(tag),
        Simple::Class(class) => adapter
            .get_attribute_value(node, "class")
            .split_ascii_whitespace()
            .any(|token| token == class),
        Simple::Id(id) => adapter.get_attribute_value(node, "id") == id,
        Simple::Attr(name, op) => {
            if !adapter.has_attribute(node, name) {
                return false;
            }
            let value = adapter.get_attribute_value(node, name);
            match op {
                AttrOp::Exists => true,
                AttrOp::Equals(expected) => value == expected,
                AttrOp::Contains(needle) => !needle.is_empty() && value.contains(needle.as_str()),
                AttrOp::Includes(token) => value.split_ascii_whitespace().any(|t| t == token),
                AttrOp::Prefix(prefix) => !prefix.is_empty() && value.starts_with(prefix.as_str()),
                AttrOp::Suffix(suffix) => !suffix.is_empty() && value.ends_with(suffix.as_str()),
            }
        }
        Simple::Empty => {
            let children = adapter.get_children(node);
            !adapter.exists_one(|_| true, &children)
                && children.iter().all(|child| adapter.get_text(child).is_empty())
        }
        Simple::Contains(text) => adapter.get_text(node).contains(text.as_str()),
    }
}

/// All elements under `roots` matching `selector`, in document order
pub fn select_all<A: SelectorAdapter>(adapter: &A, selector: &str, roots: &[A::Node]) -> Vec<A::Element> {
    let selector = Selector::parse(selector);
    adapter.find_all(
        |node| {
            adapter
                .as_element(node)
                .is_some_and(|elem| selector.matches(adapter, &elem))
        },
        roots,
    )
}

pub fn select_one<A: SelectorAdapter>(adapter: &A, selector: &str, roots: &[A::Node]) -> Option<A::Element> {
    let selector = Selector::parse(selector);
    adapter.find_one(
        |node| {
            adapter
                .as_element(node)
                .is_some_and(|elem| selector.matches(adapter, &elem))
        },
        roots,
    )
}

/// Text of each matched element, for readable assertions
pub fn texts<A: SelectorAdapter>(adapter: &A, elements: &[A::Element]) -> Vec<String> {
    elements
        .iter()
        .map(|elem| adapter.get_text(adapter.element_node(elem)))
        .collect()
}
