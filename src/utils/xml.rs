//! XML/HTML writing helpers built on `quick-xml`.

use anyhow::Result;
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io::Cursor;

pub type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Writer with two-space indentation.
#[inline]
pub fn create_xml_writer() -> XmlWriter {
    Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2)
}

/// Consume the writer and return its output as a `String`.
pub fn into_string(writer: XmlWriter) -> Result<String> {
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

/// Write a text element: `<tag>text</tag>` (text is escaped).
#[inline]
pub fn write_text_element(writer: &mut XmlWriter, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Write an empty element with attributes: `<tag attr1="val1" ... />`.
#[inline]
pub fn write_empty_elem(writer: &mut XmlWriter, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut elem = BytesStart::new(tag);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

/// Write an element whose body is emitted verbatim.
///
/// The caller guarantees the body cannot terminate the element early
/// (e.g. JSON with `<` already escaped).
pub fn write_raw_element(
    writer: &mut XmlWriter,
    tag: &str,
    attrs: &[(&str, &str)],
    body: &str,
) -> Result<()> {
    let mut elem = BytesStart::new(tag);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    writer.write_event(Event::Start(elem))?;
    writer.write_event(Event::Text(BytesText::from_escaped(body)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_empty_elem_escapes_attrs() {
        let mut writer = XmlWriter::new(Cursor::new(Vec::new()));
        write_empty_elem(&mut writer, "meta", &[("name", "x"), ("content", "a\"b")]).unwrap();
        assert_eq!(into_string(writer).unwrap(), r#"<meta name="x" content="a&quot;b"/>"#);
    }

    #[test]
    fn test_write_text_element() {
        let mut writer = XmlWriter::new(Cursor::new(Vec::new()));
        write_text_element(&mut writer, "loc", "https://a.com/?x=1&y=2").unwrap();
        assert_eq!(
            into_string(writer).unwrap(),
            "<loc>https://a.com/?x=1&amp;y=2</loc>"
        );
    }

    #[test]
    fn test_write_raw_element_keeps_quotes() {
        let mut writer = XmlWriter::new(Cursor::new(Vec::new()));
        write_raw_element(&mut writer, "script", &[("id", "x")], r#"{"a":"b"}"#).unwrap();
        assert_eq!(into_string(writer).unwrap(), r#"<script id="x">{"a":"b"}</script>"#);
    }
}
