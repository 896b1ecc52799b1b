//! Minimal XML element tree for decoding vendor responses
//!
//! Namespace prefixes are stripped and element lookups compare names with
//! case, `-` and `_` ignored, so `display-label`, `display_label` and
//! `displayLabel` all resolve to the same child. The vendor is not
//! consistent about which spelling it uses.

use intercall_domain::{IntercallError, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Parsed XML element with local names only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Parse a document and return its root element.
    ///
    /// # Errors
    /// Returns `IntercallError::Xml` for malformed input or an empty
    /// document.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => stack.push(Self::open(e)?),
                Ok(Event::Empty(ref e)) => {
                    let element = Self::open(e)?;
                    Self::close(element, &mut stack, &mut root);
                }
                Ok(Event::End(_)) => {
                    let element = stack.pop().ok_or_else(|| {
                        IntercallError::Xml("closing tag without matching start".into())
                    })?;
                    Self::close(element, &mut stack, &mut root);
                }
                Ok(Event::Text(ref e)) => {
                    if let Some(current) = stack.last_mut() {
                        let text = e.unescape().map_err(xml_error)?;
                        current.text.push_str(&text);
                    }
                }
                Ok(Event::CData(e)) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(xml_error(e)),
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(IntercallError::Xml("document ended before all elements closed".into()));
        }
        root.ok_or_else(|| IntercallError::Xml("document has no root element".into()))
    }

    fn open(start: &BytesStart<'_>) -> Result<Self> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(xml_error)?;
            if attr.key.as_namespace_binding().is_some() {
                continue;
            }
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = attr.unescape_value().map_err(xml_error)?.into_owned();
            attributes.push((key, value));
        }
        Ok(Self { name, attributes, ..Self::default() })
    }

    fn close(element: Self, stack: &mut [Self], root: &mut Option<Self>) {
        match stack.last_mut() {
            Some(parent) => parent.children.push(element),
            None => {
                if root.is_none() {
                    *root = Some(element);
                }
            }
        }
    }

    /// Whether this element's name matches `name` loosely.
    pub fn is(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.is(name))
    }

    /// All direct children with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Self> + 'a {
        self.children.iter().filter(move |child| child.is(name))
    }

    /// Text of the first direct child with the given name.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(|child| child.text.as_str())
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| names_match(key, name))
            .map(|(_, value)| value.as_str())
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

fn normalize(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().filter(|c| *c != '-' && *c != '_').map(|c| c.to_ascii_lowercase())
}

/// Compare element names ignoring case, `-` and `_`.
pub fn names_match(left: &str, right: &str) -> bool {
    normalize(left).eq(normalize(right))
}

/// `displayLabel` / `display-label` → `display_label`.
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut previous_lower = false;
    for c in name.chars() {
        if c == '-' || c == '_' {
            out.push('_');
            previous_lower = false;
        } else if c.is_ascii_uppercase() {
            if previous_lower {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
            previous_lower = false;
        } else {
            out.push(c);
            previous_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }
    out
}

fn xml_error(err: impl std::fmt::Display) -> IntercallError {
    IntercallError::Xml(err.to_string())
}
