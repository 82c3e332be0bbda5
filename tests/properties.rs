//! Property tests for the validator.
//!
//! Generates structurally valid documents and checks acceptance, prefix
//! rejection, whitespace insensitivity and determinism.

use jsoncheck::{validate_str, ErrorKind};
use proptest::prelude::*;

/// A generated JSON value; strings hold already-escaped bodies.
#[derive(Debug, Clone)]
enum Node {
    Null,
    Bool(bool),
    Number(String),
    Str(String),
    Array(Vec<Node>),
    Object(Vec<(String, Node)>),
}

fn number() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop_oneof![Just("0".to_string()), "[1-9][0-9]{0,8}"],
        proptest::option::of("[0-9]{1,4}"),
        proptest::option::of(("[eE]", "[+-]?", "[0-9]{1,3}")),
    )
        .prop_map(|(negative, int, frac, exp)| {
            let mut s = String::new();
            if negative {
                s.push('-');
            }
            s.push_str(&int);
            if let Some(frac) = frac {
                s.push('.');
                s.push_str(&frac);
            }
            if let Some((marker, sign, digits)) = exp {
                s.push_str(&marker);
                s.push_str(&sign);
                s.push_str(&digits);
            }
            s
        })
}

/// String bodies: plain characters and escapes, already escaped.
fn string_body() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        "[a-zA-Z0-9 _.,:;{}\\[\\]é日]",
        Just("\\\"".to_string()),
        Just("\\\\".to_string()),
        Just("\\/".to_string()),
        Just("\\b".to_string()),
        Just("\\f".to_string()),
        Just("\\n".to_string()),
        Just("\\r".to_string()),
        Just("\\t".to_string()),
        "[0-9a-fA-F]{4}".prop_map(|hex| format!("\\u{}", hex)),
    ];
    proptest::collection::vec(piece, 0..8).prop_map(|pieces| pieces.concat())
}

fn leaf() -> impl Strategy<Value = Node> {
    prop_oneof![
        Just(Node::Null),
        any::<bool>().prop_map(Node::Bool),
        number().prop_map(Node::Number),
        string_body().prop_map(Node::Str),
    ]
}

fn node() -> impl Strategy<Value = Node> {
    leaf().prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..6).prop_map(Node::Array),
            proptest::collection::vec((string_body(), inner), 0..6).prop_map(Node::Object),
        ]
    })
}

fn document() -> impl Strategy<Value = Node> {
    prop_oneof![
        proptest::collection::vec(node(), 0..6).prop_map(Node::Array),
        proptest::collection::vec((string_body(), node()), 0..6).prop_map(Node::Object),
    ]
}

fn render(node: &Node, gap: &str, out: &mut String) {
    match node {
        Node::Null => out.push_str("null"),
        Node::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Node::Number(n) => out.push_str(n),
        Node::Str(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        Node::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(gap);
                render(item, gap, out);
                out.push_str(gap);
            }
            out.push(']');
        }
        Node::Object(members) => {
            out.push('{');
            for (i, (key, value)) in members.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(gap);
                out.push('"');
                out.push_str(key);
                out.push('"');
                out.push_str(gap);
                out.push(':');
                out.push_str(gap);
                render(value, gap, out);
                out.push_str(gap);
            }
            out.push('}');
        }
    }
}

fn to_text(node: &Node, gap: &str) -> String {
    let mut out = String::new();
    render(node, gap, &mut out);
    out
}

proptest! {
    #[test]
    fn valid_documents_accepted(doc in document()) {
        let text = to_text(&doc, "");
        prop_assert!(validate_str(&text).is_ok(), "rejected: {}", text);
    }

    #[test]
    fn blank_whitespace_does_not_change_verdict(doc in document(), gap in "[ \t]{1,3}") {
        let text = to_text(&doc, &gap);
        prop_assert!(validate_str(&text).is_ok(), "rejected: {:?}", text);
    }

    #[test]
    fn newlines_do_not_change_verdict(doc in document()) {
        let text = to_text(&doc, "\n");
        prop_assert!(validate_str(&text).is_ok(), "rejected: {:?}", text);
    }

    #[test]
    fn strict_prefixes_rejected(doc in document(), cut in any::<prop::sample::Index>()) {
        let text = to_text(&doc, "");
        let chars: Vec<char> = text.chars().collect();
        let prefix: String = chars[..cut.index(chars.len())].iter().collect();
        prop_assert!(validate_str(&prefix).is_err(), "accepted prefix: {}", prefix);
    }

    #[test]
    fn trailing_garbage_rejected(doc in document(), garbage in "[a-z0-9\\[{\"]{1,4}") {
        let text = format!("{}{}", to_text(&doc, ""), garbage);
        let err = validate_str(&text).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::ExpectedEof);
    }

    #[test]
    fn verdict_is_deterministic(text in "[\\[\\]{}:,\" 0-9a-z\\\\.\\-]{0,24}") {
        let first = validate_str(&text);
        let second = validate_str(&text);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn short_unicode_escapes_rejected(hex in "[0-9a-fA-F]{0,3}", tail in "[g-z\"]") {
        let text = format!("[\"\\u{}{}\"]", hex, tail);
        let err = validate_str(&text).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidUnicodeEscape);
    }
}
