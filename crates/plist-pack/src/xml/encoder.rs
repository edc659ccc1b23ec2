//! XML plist encoder.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::error::XmlError;
use crate::value::PlistValue;

/// Apple's plist DTD declaration, written after the XML declaration.
const PLIST_DOCTYPE: &str = "plist PUBLIC \"-//Apple Computer//DTD PLIST 1.0//EN\" \
                             \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\"";

/// XML plist encoder.
///
/// Produces an indented UTF-8 document with Apple's DTD and a
/// `<plist version="1.0">` root wrapping exactly one value element.
pub struct XmlPlistEncoder;

impl Default for XmlPlistEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlPlistEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Encodes a value tree into a complete XML plist document.
    pub fn encode(&mut self, value: &PlistValue) -> Result<String, XmlError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer.write_event(Event::DocType(BytesText::from_escaped(PLIST_DOCTYPE)))?;
        let mut plist = BytesStart::new("plist");
        plist.push_attribute(("version", "1.0"));
        writer.write_event(Event::Start(plist))?;
        self.write_value(&mut writer, value)?;
        writer.write_event(Event::End(BytesEnd::new("plist")))?;
        Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
    }

    fn write_value(
        &self,
        writer: &mut Writer<Vec<u8>>,
        value: &PlistValue,
    ) -> Result<(), XmlError> {
        match value {
            PlistValue::Null => {
                writer.write_event(Event::Empty(BytesStart::new("null")))?;
            }
            PlistValue::Bool(b) => {
                let tag = if *b { "true" } else { "false" };
                writer.write_event(Event::Empty(BytesStart::new(tag)))?;
            }
            PlistValue::Integer(i) => write_text_element(writer, "integer", &i.to_string())?,
            PlistValue::Real(f) => write_text_element(writer, "real", &f.to_string())?,
            PlistValue::Date(dt) => {
                let text = dt.format("%Y-%m-%dT%H:%M:%SZ").to_string();
                write_text_element(writer, "date", &text)?;
            }
            PlistValue::Bytes(data) => write_text_element(writer, "data", &STANDARD.encode(data))?,
            PlistValue::String(s) => write_text_element(writer, "string", s)?,
            PlistValue::Array(items) => {
                if items.is_empty() {
                    writer.write_event(Event::Empty(BytesStart::new("array")))?;
                } else {
                    writer.write_event(Event::Start(BytesStart::new("array")))?;
                    for item in items {
                        self.write_value(writer, item)?;
                    }
                    writer.write_event(Event::End(BytesEnd::new("array")))?;
                }
            }
            PlistValue::Dict(entries) => {
                if entries.is_empty() {
                    writer.write_event(Event::Empty(BytesStart::new("dict")))?;
                } else {
                    writer.write_event(Event::Start(BytesStart::new("dict")))?;
                    for (key, val) in entries {
                        write_text_element(writer, "key", key)?;
                        self.write_value(writer, val)?;
                    }
                    writer.write_event(Event::End(BytesEnd::new("dict")))?;
                }
            }
        }
        Ok(())
    }
}

/// Writes `<tag>text</tag>`, collapsing to `<tag/>` for empty content so
/// the indenting writer cannot introduce whitespace into the text.
fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    tag: &str,
    text: &str,
) -> Result<(), XmlError> {
    if text.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(tag)))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new(tag)))?;
        writer.write_event(Event::Text(BytesText::new(text)))?;
        writer.write_event(Event::End(BytesEnd::new(tag)))?;
    }
    Ok(())
}
