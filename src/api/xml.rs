//! XML body to `serde_json::Value` conversion.
//!
//! Follows the xml2json "object" conventions the service's payloads were
//! designed around: text-only elements become strings, repeated siblings
//! become arrays, attributes sit next to child elements and mixed text is
//! stored under `$t`.

use crate::error::{CatApiError, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::{Map, Value};

const TEXT_KEY: &str = "$t";

struct Node {
    name: String,
    members: Map<String, Value>,
    text: String,
}

impl Node {
    fn open(start: &BytesStart<'_>) -> Result<Self> {
        let mut members = Map::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| CatApiError::Decode(e.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value().map_err(decode_error)?.into_owned();
            members.insert(key, Value::String(value));
        }

        Ok(Self {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            members,
            text: String::new(),
        })
    }

    fn close(self) -> (String, Value) {
        let Node {
            name,
            mut members,
            text,
        } = self;

        let value = if members.is_empty() {
            if text.is_empty() {
                Value::Object(Map::new())
            } else {
                Value::String(text)
            }
        } else {
            if !text.is_empty() {
                members.insert(TEXT_KEY.to_string(), Value::String(text));
            }
            Value::Object(members)
        };

        (name, value)
    }
}

fn decode_error(err: quick_xml::Error) -> CatApiError {
    CatApiError::Decode(err.to_string())
}

/// Insert `value` under `name`, turning the slot into an array when the
/// name repeats.
fn attach(members: &mut Map<String, Value>, name: String, value: Value) {
    match members.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            members.insert(name, value);
        }
    }
}

/// Parse an XML document into a JSON object keyed by its root element name.
pub fn to_value(body: &str) -> Result<Value> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Node> = Vec::new();
    let mut document = Map::new();

    loop {
        match reader.read_event().map_err(decode_error)? {
            Event::Start(start) => stack.push(Node::open(&start)?),
            Event::Empty(start) => {
                let (name, value) = Node::open(&start)?.close();
                match stack.last_mut() {
                    Some(parent) => attach(&mut parent.members, name, value),
                    None => attach(&mut document, name, value),
                }
            }
            Event::Text(text) => {
                if let Some(node) = stack.last_mut() {
                    node.text.push_str(&text.unescape().map_err(decode_error)?);
                }
            }
            Event::CData(data) => {
                if let Some(node) = stack.last_mut() {
                    node.text
                        .push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::End(_) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| CatApiError::Decode("unbalanced closing tag".to_string()))?;
                let (name, value) = node.close();
                match stack.last_mut() {
                    Some(parent) => attach(&mut parent.members, name, value),
                    None => attach(&mut document, name, value),
                }
            }
            Event::Eof => break,
            // Declarations, comments, doctypes and processing instructions carry no data.
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(CatApiError::Decode(format!(
            "unexpected end of document inside <{}>",
            open.name
        )));
    }

    if document.is_empty() {
        return Err(CatApiError::Decode("document has no root element".to_string()));
    }

    Ok(Value::Object(document))
}
