//! Key/value index over a lang file.
//!
//! Lang files are WPF/Avalonia resource dictionaries whose translatable
//! entries look like `<sys:String x:Key="...">value</sys:String>`. This
//! parse is only used for set-membership checks over keys; the transforms
//! themselves operate on raw lines to keep formatting intact.

use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use quick_xml::{Reader, events::BytesStart, events::Event};

use crate::error::{Error, Result};

/// Parse a lang file into a key → value map.
///
/// Fails if the document is not well-formed XML or the root element lacks
/// an `xmlns:sys` namespace declaration. Duplicate keys are not validated;
/// the last declaration wins.
pub fn parse_lang_file(path: impl AsRef<Path>) -> Result<HashMap<String, String>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = Reader::from_reader(BufReader::new(file));
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut entries = HashMap::new();
    let mut saw_root = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                if !saw_root {
                    ensure_sys_namespace(e, path)?;
                    saw_root = true;
                } else if e.local_name().as_ref() == b"String" {
                    if let Some(key) = key_attribute(e)? {
                        let value = read_element_text(&mut reader)?;
                        entries.insert(key, value);
                    }
                }
            }
            Ok(Event::Empty(ref e)) if saw_root && e.local_name().as_ref() == b"String" => {
                if let Some(key) = key_attribute(e)? {
                    entries.insert(key, String::new());
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(Error::Xml(e)),
        }
        buf.clear();
    }

    Ok(entries)
}

fn ensure_sys_namespace(root: &BytesStart<'_>, path: &Path) -> Result<()> {
    for attr in root.attributes() {
        let attr = attr?;
        if attr.key.as_ref().starts_with(b"xmlns:sys") {
            return Ok(());
        }
    }
    Err(Error::MissingNamespace(path.to_path_buf()))
}

fn key_attribute(element: &BytesStart<'_>) -> Result<Option<String>> {
    for attr in element.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"x:Key" {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Collect the text content of the element just opened, up to its end tag.
fn read_element_text<R: BufRead>(reader: &mut Reader<R>) -> Result<String> {
    let mut text = String::new();
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(t)) => text.push_str(&t.unescape()?),
            Ok(Event::CData(t)) => text.push_str(&String::from_utf8_lossy(&t.into_inner())),
            Ok(Event::End(_)) | Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(Error::Xml(e)),
        }
        buf.clear();
    }
    Ok(text)
}
