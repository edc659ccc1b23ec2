//! XML plist decoder.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, NaiveDateTime, Utc};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::Reader;

use super::error::XmlError;
use crate::value::PlistValue;

/// XML plist decoder.
///
/// Stateless; every call parses through a fresh `quick-xml` event reader.
pub struct XmlPlistDecoder;

impl Default for XmlPlistDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlPlistDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes an XML plist document into a value tree.
    ///
    /// The root element must be `<plist>`; its first child element is the
    /// value. Siblings after that child are ignored.
    pub fn decode(&self, text: &str) -> Result<PlistValue, XmlError> {
        let mut reader = Reader::from_str(text);
        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    if e.name().as_ref() != b"plist" {
                        return Err(XmlError::UnexpectedRoot(name_string(&e)));
                    }
                    return self.parse_document_value(&mut reader);
                }
                Event::Empty(e) => {
                    return if e.name().as_ref() == b"plist" {
                        Err(XmlError::MissingValue)
                    } else {
                        Err(XmlError::UnexpectedRoot(name_string(&e)))
                    };
                }
                Event::Eof => return Err(XmlError::UnexpectedEof),
                _ => continue,
            }
        }
    }

    fn parse_document_value(&self, reader: &mut Reader<&[u8]>) -> Result<PlistValue, XmlError> {
        match next_child(reader)? {
            Child::End => Err(XmlError::MissingValue),
            Child::Element(e, empty) => {
                let value = self.parse_element(reader, &e, empty)?;
                reader.read_to_end(QName(b"plist"))?;
                Ok(value)
            }
        }
    }

    /// Dispatches one value element by tag name.
    fn parse_element(
        &self,
        reader: &mut Reader<&[u8]>,
        e: &BytesStart,
        empty: bool,
    ) -> Result<PlistValue, XmlError> {
        match e.name().as_ref() {
            b"dict" => {
                if empty {
                    Ok(PlistValue::Dict(Vec::new()))
                } else {
                    self.parse_dict(reader)
                }
            }
            b"array" => {
                if empty {
                    Ok(PlistValue::Array(Vec::new()))
                } else {
                    self.parse_array(reader)
                }
            }
            b"string" => Ok(PlistValue::String(element_text(reader, e, empty)?)),
            b"integer" => {
                let text = element_text(reader, e, empty)?;
                text.trim()
                    .parse::<i32>()
                    .map(PlistValue::Integer)
                    .map_err(|_| XmlError::InvalidInteger(text))
            }
            b"real" => {
                let text = element_text(reader, e, empty)?;
                text.trim()
                    .parse::<f64>()
                    .map(PlistValue::Real)
                    .map_err(|_| XmlError::InvalidReal(text))
            }
            b"true" => {
                consume(reader, e, empty)?;
                Ok(PlistValue::Bool(true))
            }
            b"false" => {
                consume(reader, e, empty)?;
                Ok(PlistValue::Bool(false))
            }
            b"null" => {
                consume(reader, e, empty)?;
                Ok(PlistValue::Null)
            }
            b"date" => {
                let text = element_text(reader, e, empty)?;
                parse_date(text.trim()).map(PlistValue::Date)
            }
            b"data" => {
                let text = element_text(reader, e, empty)?;
                // Base64 payloads are commonly wrapped; whitespace is not
                // part of the data.
                let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
                Ok(PlistValue::Bytes(STANDARD.decode(compact.as_bytes())?))
            }
            _ => Err(XmlError::UnknownElement(name_string(e))),
        }
    }

    fn parse_dict(&self, reader: &mut Reader<&[u8]>) -> Result<PlistValue, XmlError> {
        let mut entries: Vec<(String, PlistValue)> = Vec::new();
        loop {
            let key = match next_child(reader)? {
                Child::End => return Ok(PlistValue::Dict(entries)),
                Child::Element(e, empty) => {
                    if e.name().as_ref() != b"key" {
                        return Err(XmlError::ExpectedKey(name_string(&e)));
                    }
                    element_text(reader, &e, empty)?
                }
            };
            let value = match next_child(reader)? {
                Child::End => return Err(XmlError::OddChildCount),
                Child::Element(e, empty) => self.parse_element(reader, &e, empty)?,
            };
            if matches!(value, PlistValue::Null) {
                // Null-valued entries are dropped, like null array items.
                continue;
            }
            if entries.iter().any(|(k, _)| *k == key) {
                return Err(XmlError::DuplicateKey(key));
            }
            entries.push((key, value));
        }
    }

    fn parse_array(&self, reader: &mut Reader<&[u8]>) -> Result<PlistValue, XmlError> {
        let mut items = Vec::new();
        loop {
            match next_child(reader)? {
                Child::End => return Ok(PlistValue::Array(items)),
                Child::Element(e, empty) => {
                    let value = self.parse_element(reader, &e, empty)?;
                    if !matches!(value, PlistValue::Null) {
                        items.push(value);
                    }
                }
            }
        }
    }
}

/// The next child of the element currently being parsed.
enum Child<'i> {
    Element(BytesStart<'i>, bool),
    End,
}

/// Advances to the next child element or the parent's closing tag,
/// skipping comments and inter-element whitespace.
fn next_child<'i>(reader: &mut Reader<&'i [u8]>) -> Result<Child<'i>, XmlError> {
    loop {
        match reader.read_event()? {
            Event::Start(e) => return Ok(Child::Element(e, false)),
            Event::Empty(e) => return Ok(Child::Element(e, true)),
            Event::End(_) => return Ok(Child::End),
            Event::Text(t) => {
                if !t.unescape()?.trim().is_empty() {
                    return Err(XmlError::UnknownElement("#text".into()));
                }
            }
            Event::Eof => return Err(XmlError::UnexpectedEof),
            _ => continue,
        }
    }
}

/// Text content of a scalar element, consuming through its closing tag.
fn element_text(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart,
    empty: bool,
) -> Result<String, XmlError> {
    if empty {
        Ok(String::new())
    } else {
        Ok(reader.read_text(e.name())?.into_owned())
    }
}

/// Consumes a childless element written in the `<tag></tag>` form.
fn consume(reader: &mut Reader<&[u8]>, e: &BytesStart, empty: bool) -> Result<(), XmlError> {
    if !empty {
        reader.read_to_end(e.name())?;
    }
    Ok(())
}

fn parse_date(text: &str) -> Result<DateTime<Utc>, XmlError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }
    // Zone-less timestamps are taken as UTC.
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| XmlError::InvalidDate(text.to_string()))
}

fn name_string(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}
