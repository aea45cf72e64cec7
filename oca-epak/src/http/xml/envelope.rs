use crate::canonical_key::canonical_key;
use crate::value::Value;
use indexmap::IndexMap;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Errors that can occur while reading a SOAP envelope into a [Value] tree.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("failed to parse XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("invalid UTF-8 in XML: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("failed to decode XML text: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),
    #[error("malformed XML: {0}")]
    Malformed(String),
    #[error("document has no SOAP body")]
    MissingBody,
}

/// A fault returned in place of a result, usually along with HTTP status 500.
#[derive(Debug, Clone, PartialEq)]
pub struct SoapFault {
    pub code: String,
    pub fault_string: String,
}

/// A parsed SOAP response. The body is the content of `soap:Body`, keyed by canonical element names.
#[derive(Debug, Clone, PartialEq)]
pub struct SoapResponse {
    body: Value,
}

impl SoapResponse {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    /// Parses the raw XML of a response envelope.
    pub fn from_xml(xml: &str) -> Result<Self, EnvelopeError> {
        let envelope = parse(xml.as_bytes())?;
        let body = envelope.get("body").ok_or(EnvelopeError::MissingBody)?;

        Ok(Self::new(body.clone()))
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn fault(&self) -> Option<SoapFault> {
        let fault = self.body.get("fault")?;
        let text = |key: &str| {
            fault
                .get(key)
                .and_then(Value::as_text)
                .unwrap_or_default()
                .to_string()
        };

        Some(SoapFault {
            code: text("faultcode"),
            fault_string: text("faultstring"),
        })
    }
}

/// An element being read. Children are kept by canonical name, repeated names become a list.
struct OpenElement {
    name: String,
    entries: IndexMap<String, Value>,
    has_children: bool,
    text: String,
}

impl OpenElement {
    fn new(start: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<Self, EnvelopeError> {
        let name = canonical_key(std::str::from_utf8(start.local_name().as_ref())?);
        let mut entries = IndexMap::new();

        for attribute in start.attributes() {
            let attribute = attribute.map_err(quick_xml::Error::from)?;
            let key = std::str::from_utf8(attribute.key.as_ref())?;
            if key == "xmlns" || key.starts_with("xmlns:") {
                continue;
            }

            let value = attribute
                .decode_and_unescape_value(reader.decoder())?
                .into_owned();
            entries.insert(format!("@{key}"), Value::Text(value));
        }

        Ok(Self {
            name,
            entries,
            has_children: false,
            text: String::new(),
        })
    }

    fn push_child(&mut self, name: String, child: Value) {
        self.has_children = true;
        match self.entries.get_mut(&name) {
            Some(Value::List(list)) => list.push(child),
            Some(existing) => {
                let first = std::mem::take(existing);
                *existing = Value::List(vec![first, child]);
            }

            None => {
                self.entries.insert(name, child);
            }
        }
    }

    fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn close(self) -> (String, Value) {
        let value = if self.has_children {
            Value::Map(self.entries)
        } else if !self.text.trim().is_empty() {
            Value::Text(self.text)
        } else if !self.entries.is_empty() {
            Value::Map(self.entries)
        } else {
            Value::Null
        };

        (self.name, value)
    }
}

/// Reads an XML document into a [Value] tree rooted at the document element's content.
pub(crate) fn parse(xml: &[u8]) -> Result<Value, EnvelopeError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut stack: Vec<OpenElement> = Vec::new();
    let mut root: Option<Value> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => stack.push(OpenElement::new(&e, &reader)?),
            Event::Empty(e) => {
                let (name, value) = OpenElement::new(&e, &reader)?.close();
                attach(&mut stack, &mut root, name, value)?;
            }

            Event::Text(e) => {
                if let Some(current) = stack.last_mut() {
                    current.push_text(&e.unescape()?);
                }
            }

            Event::CData(e) => {
                if let Some(current) = stack.last_mut() {
                    current.push_text(std::str::from_utf8(e.as_ref())?);
                }
            }

            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| {
                    EnvelopeError::Malformed("closing tag without open tag".to_string())
                })?;

                let (name, value) = element.close();
                attach(&mut stack, &mut root, name, value)?;
            }

            Event::Eof => break,
            Event::Decl(_) | Event::PI(_) | Event::DocType(_) | Event::Comment(_) => {}
        }

        buf.clear();
    }

    if !stack.is_empty() {
        return Err(EnvelopeError::Malformed(
            "unclosed element(s) at end of document".to_string(),
        ));
    }

    root.ok_or_else(|| EnvelopeError::Malformed("no root element found".to_string()))
}

fn attach(
    stack: &mut [OpenElement],
    root: &mut Option<Value>,
    name: String,
    value: Value,
) -> Result<(), EnvelopeError> {
    if let Some(parent) = stack.last_mut() {
        parent.push_child(name, value);
    } else if root.is_none() {
        *root = Some(value);
    } else {
        return Err(EnvelopeError::Malformed(
            "multiple top-level elements found".to_string(),
        ));
    }

    Ok(())
}
