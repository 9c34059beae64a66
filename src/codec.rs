/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Encoding and decoding of records to and from their XML representation.

use std::borrow::Cow;

use quick_xml::{
    encoding::EncodingError,
    events::{BytesDecl, BytesStart, Event},
    se::Serializer,
    Reader, Writer,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{ChoiceGroup, Error, TYPES_NS_URI};

/// Options controlling the shape of encoded XML.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteOptions {
    /// Whether to start the output with an XML declaration.
    pub xml_declaration: bool,

    /// The number of spaces to indent nested elements by, or `None` to write
    /// everything on a single line.
    pub indent: Option<usize>,

    /// Whether to declare the types namespace on the root element.
    pub namespace: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            xml_declaration: false,
            indent: None,
            namespace: true,
        }
    }
}

/// Encodes `value` as an XML element named `root`.
///
/// Absent optional fields are omitted from the output, and fields are written
/// in schema sequence order.
pub fn to_xml<T>(root: &str, value: &T) -> Result<String, Error>
where
    T: Serialize + ?Sized,
{
    to_xml_with_options(root, value, &WriteOptions::default())
}

/// Encodes a choice group member as an element named after its alternative.
pub fn choice_to_xml<G>(value: &G) -> Result<String, Error>
where
    G: ChoiceGroup + Serialize,
{
    to_xml(value.element_name(), value)
}

/// Encodes `value` as an XML element named `root`, shaped by `options`.
///
/// When `root` carries a prefix, as in `t:Task`, the types namespace is bound
/// to that prefix. Otherwise it's declared as the default namespace.
pub fn to_xml_with_options<T>(root: &str, value: &T, options: &WriteOptions) -> Result<String, Error>
where
    T: Serialize + ?Sized,
{
    let mut body = String::new();
    let mut serializer = Serializer::with_root(&mut body, Some(root))?;
    if let Some(width) = options.indent {
        serializer.indent(' ', width);
    }
    value.serialize(serializer)?;

    let mut writer = Writer::new(Vec::new());

    if options.xml_declaration {
        // All EWS examples use XML 1.0 with UTF-8, so stick to that.
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
            .map_err(quick_xml::Error::from)?;

        if options.indent.is_some() {
            writer.get_mut().push(b'\n');
        }
    }

    // The serializer can't add attributes of our own to the root element, so
    // its start tag is read back and written again with the declaration.
    let mut content = body.as_str();
    if options.namespace {
        let mut reader = Reader::from_str(&body);
        let root_tag = match reader.read_event()? {
            Event::Start(tag) => Some(Event::Start(with_namespace_declaration(&tag)?)),
            Event::Empty(tag) => Some(Event::Empty(with_namespace_declaration(&tag)?)),
            _ => None,
        };

        match root_tag {
            Some(tag) => {
                writer.write_event(tag).map_err(quick_xml::Error::from)?;
                content = body
                    .get(reader.buffer_position() as usize..)
                    .unwrap_or_default();
            }

            None => log::warn!("no `{root}` start tag in encoded output, not declaring namespace"),
        }
    }

    let mut xml = String::from_utf8(writer.into_inner())
        .map_err(|err| quick_xml::Error::from(EncodingError::from(err.utf8_error())))?;
    xml.push_str(content);

    Ok(xml)
}

/// Returns a copy of `tag` which binds the types namespace ahead of its
/// other attributes.
fn with_namespace_declaration<'a>(
    tag: &BytesStart<'a>,
) -> Result<BytesStart<'a>, quick_xml::Error> {
    let attribute_name = match tag.name().prefix() {
        Some(prefix) => {
            let prefix = std::str::from_utf8(prefix.into_inner()).map_err(EncodingError::from)?;
            format!("xmlns:{prefix}")
        }

        None => String::from("xmlns"),
    };

    let attributes = tag.attributes().collect::<Result<Vec<_>, _>>()?;

    let mut declared = tag.clone();
    declared.clear_attributes();
    declared.push_attribute((attribute_name.as_str(), TYPES_NS_URI));
    declared.extend_attributes(attributes);

    Ok(declared)
}

/// Decodes a record of type `T` from its XML representation.
///
/// Element names are matched without regard to namespace prefixes, so both
/// `<t:Subject>` and `<Subject>` are accepted. The name of the root element
/// isn't checked, except where `T` is a choice group, in which case it
/// selects the alternative.
///
/// Text content is kept exactly as written, including leading and trailing
/// whitespace. Text made up only of whitespace is treated as formatting and
/// skipped.
pub fn from_xml<T>(xml: &str) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let xml = protect_text_whitespace(xml);

    let mut deserializer = quick_xml::de::Deserializer::from_reader(xml.as_bytes());
    serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        log::debug!(
            "failed to decode {} at `{}`: {}",
            std::any::type_name::<T>(),
            err.path(),
            err.inner()
        );

        Error::from(err)
    })
}

/// Rewrites the whitespace at either end of each text node as character
/// references.
///
/// The quick-xml deserializer trims raw whitespace from text, but leaves
/// references alone and resolves them afterwards.
fn protect_text_whitespace(xml: &str) -> Cow<'_, str> {
    // Reader offsets don't count a byte order mark.
    let document = xml.strip_prefix('\u{feff}').unwrap_or(xml);

    let mut reader = Reader::from_str(document);
    let mut protected = String::new();
    let mut copied = 0;

    loop {
        let start = reader.buffer_position() as usize;

        match reader.read_event() {
            Ok(Event::Text(event)) => {
                let Some(text) = document.get(start..start + event.len()) else {
                    continue;
                };

                let content = text.trim_matches(is_xml_whitespace);
                if content.is_empty() || content.len() == text.len() {
                    continue;
                }

                let leading = text.len() - text.trim_start_matches(is_xml_whitespace).len();
                let trailing = &text[leading + content.len()..];

                protected.push_str(&document[copied..start]);
                push_character_references(&mut protected, &text[..leading]);
                protected.push_str(content);
                push_character_references(&mut protected, trailing);

                copied = start + text.len();
            }

            Ok(Event::Eof) => break,
            Ok(_) => {}

            // Malformed documents are left for the deserializer to report.
            Err(_) => return Cow::Borrowed(xml),
        }
    }

    if copied == 0 {
        return Cow::Borrowed(xml);
    }

    protected.push_str(&document[copied..]);
    Cow::Owned(protected)
}

fn is_xml_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn push_character_references(out: &mut String, whitespace: &str) {
    for c in whitespace.chars() {
        out.push_str(&format!("&#{};", u32::from(c)));
    }
}
