use std::collections::HashMap;

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::catalog::{Entry, EntryStatus, ExtraElement, Location, LocationStyle, Store, Translation};
use crate::error::{CatalogError, Result};

/// Streaming parser for Qt Linguist TS documents.
///
/// Line numbers in `<location>` elements may be absolute or signed deltas
/// from the previous location in the same file; they are resolved to
/// absolute numbers here and the encoding style is remembered on the store
/// so serialization can round-trip it.
pub fn parse_ts(bytes: &[u8]) -> Result<Store> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| CatalogError::ts_parse(format!("invalid UTF-8: {}", e)))?;

    let mut reader = Reader::from_reader(text.as_bytes());
    reader.trim_text(false);

    let mut parser = TsParser::default();
    let mut saw_root = false;

    loop {
        match read_event(&mut reader)? {
            Event::Decl(_) | Event::DocType(_) | Event::Comment(_) | Event::PI(_) => {}
            Event::Text(t) => require_whitespace(t.as_ref(), "document")?,
            Event::Start(e) if e.name().as_ref() == b"TS" => {
                if saw_root {
                    return Err(malformed("multiple <TS> root elements"));
                }
                saw_root = true;
                parser.parse_root_attrs(&e)?;
                parser.parse_ts_children(&mut reader)?;
            }
            Event::Start(e) | Event::Empty(e) => {
                return Err(malformed(format!(
                    "unexpected element <{}> outside <TS>",
                    name_of(&e)
                )));
            }
            Event::End(_) => return Err(malformed("unexpected closing tag at document level")),
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(malformed("missing <TS> root element"));
    }

    let mut store = parser.store;
    store.set_location_style(if parser.relative_locations {
        LocationStyle::Relative
    } else {
        LocationStyle::Absolute
    });
    Ok(store)
}

#[derive(Default)]
struct TsParser {
    store: Store,
    relative_locations: bool,
    /// File the most recent location referred to; omitted filenames reuse it.
    current_file: String,
    /// Last absolute line seen per file, for delta resolution.
    last_line: HashMap<String, u32>,
}

impl TsParser {
    fn parse_root_attrs(&mut self, e: &BytesStart<'_>) -> Result<()> {
        for attr in e.attributes() {
            let attr = attr.map_err(|e| malformed(format!("bad attribute on <TS>: {}", e)))?;
            let value = attr
                .unescape_value()
                .map_err(|e| malformed(format!("bad attribute value on <TS>: {}", e)))?
                .into_owned();
            match attr.key.as_ref() {
                b"version" => self.store.version = Some(value),
                b"language" => self.store.language = Some(value),
                b"sourcelanguage" => self.store.source_language = Some(value),
                other => {
                    return Err(malformed(format!(
                        "unknown attribute '{}' on <TS>",
                        String::from_utf8_lossy(other)
                    )))
                }
            }
        }
        Ok(())
    }

    fn parse_ts_children(&mut self, reader: &mut Reader<&[u8]>) -> Result<()> {
        loop {
            match read_event(reader)? {
                Event::Start(e) if e.name().as_ref() == b"context" => {
                    self.parse_context(reader)?;
                }
                Event::Start(e) => {
                    let fragment = capture_fragment(reader, &e)?;
                    self.store.header_extra.push(fragment);
                }
                Event::Empty(e) => {
                    self.store.header_extra.push(capture_empty(&e)?);
                }
                Event::Text(t) => require_whitespace(t.as_ref(), "<TS>")?,
                Event::Comment(_) => {}
                Event::End(e) if e.name().as_ref() == b"TS" => return Ok(()),
                Event::End(_) => return Err(malformed("mismatched closing tag inside <TS>")),
                Event::Eof => return Err(malformed("unexpected end of document inside <TS>")),
                _ => {}
            }
        }
    }

    fn parse_context(&mut self, reader: &mut Reader<&[u8]>) -> Result<()> {
        let mut name: Option<String> = None;

        loop {
            match read_event(reader)? {
                Event::Start(e) if e.name().as_ref() == b"name" => {
                    let text = read_text_element(reader, "name")?;
                    self.store.ensure_context(&text);
                    name = Some(text);
                }
                Event::Start(e) if e.name().as_ref() == b"message" => {
                    let context = name
                        .as_deref()
                        .ok_or_else(|| malformed("<message> before <name> in <context>"))?
                        .to_string();
                    self.parse_message(reader, &e, &context)?;
                }
                Event::Start(e) => {
                    let fragment = capture_fragment(reader, &e)?;
                    self.push_context_extra(name.as_deref(), fragment)?;
                }
                Event::Empty(e) => {
                    let fragment = capture_empty(&e)?;
                    self.push_context_extra(name.as_deref(), fragment)?;
                }
                Event::Text(t) => require_whitespace(t.as_ref(), "<context>")?,
                Event::Comment(_) => {}
                Event::End(e) if e.name().as_ref() == b"context" => {
                    if name.is_none() {
                        return Err(malformed("<context> without <name>"));
                    }
                    return Ok(());
                }
                Event::End(_) => return Err(malformed("mismatched closing tag inside <context>")),
                Event::Eof => return Err(malformed("unexpected end of document inside <context>")),
                _ => {}
            }
        }
    }

    fn push_context_extra(&mut self, name: Option<&str>, fragment: String) -> Result<()> {
        match name {
            Some(name) => {
                self.store.add_context_extra(name, fragment);
                Ok(())
            }
            None => Err(malformed("unexpected element before <name> in <context>")),
        }
    }

    fn parse_message(
        &mut self,
        reader: &mut Reader<&[u8]>,
        start: &BytesStart<'_>,
        context: &str,
    ) -> Result<()> {
        let mut numerus = false;
        for attr in start.attributes() {
            let attr = attr.map_err(|e| malformed(format!("bad attribute on <message>: {}", e)))?;
            match attr.key.as_ref() {
                b"numerus" => numerus = attr.value.as_ref() == b"yes",
                other => {
                    return Err(malformed(format!(
                        "unknown attribute '{}' on <message>",
                        String::from_utf8_lossy(other)
                    )))
                }
            }
        }

        let mut source: Option<String> = None;
        let mut comment: Option<String> = None;
        let mut locations: Vec<Location> = Vec::new();
        let mut extra: Vec<ExtraElement> = Vec::new();
        let mut translation: Option<(Translation, EntryStatus)> = None;

        loop {
            match read_event(reader)? {
                Event::Empty(e) if e.name().as_ref() == b"location" => {
                    locations.push(self.parse_location(&e)?);
                }
                Event::Start(e) if e.name().as_ref() == b"location" => {
                    locations.push(self.parse_location(&e)?);
                    consume_empty_element(reader, "location")?;
                }
                Event::Start(e) if e.name().as_ref() == b"source" => {
                    source = Some(read_text_element(reader, "source")?);
                }
                Event::Empty(e) if e.name().as_ref() == b"source" => {
                    source = Some(String::new());
                }
                Event::Start(e) if e.name().as_ref() == b"comment" => {
                    comment = Some(read_text_element(reader, "comment")?);
                }
                Event::Start(e) if e.name().as_ref() == b"translation" => {
                    translation = Some(parse_translation(reader, &e, numerus, false)?);
                }
                Event::Empty(e) if e.name().as_ref() == b"translation" => {
                    translation = Some(parse_translation(reader, &e, numerus, true)?);
                }
                Event::Start(e) => {
                    extra.push(ExtraElement {
                        xml: capture_fragment(reader, &e)?,
                        after_translation: translation.is_some(),
                    });
                }
                Event::Empty(e) => {
                    extra.push(ExtraElement {
                        xml: capture_empty(&e)?,
                        after_translation: translation.is_some(),
                    });
                }
                Event::Text(t) => require_whitespace(t.as_ref(), "<message>")?,
                Event::Comment(_) => {}
                Event::End(e) if e.name().as_ref() == b"message" => break,
                Event::End(_) => return Err(malformed("mismatched closing tag inside <message>")),
                Event::Eof => return Err(malformed("unexpected end of document inside <message>")),
                _ => {}
            }
        }

        let source = source.ok_or_else(|| malformed("<message> missing <source>"))?;
        let (translation, status) = translation.unwrap_or((
            if numerus {
                Translation::Plural(Vec::new())
            } else {
                Translation::empty()
            },
            EntryStatus::Unfinished,
        ));

        self.store.upsert(Entry {
            context: context.to_string(),
            source,
            comment,
            translation,
            status,
            locations,
            numerus,
            extra,
        });
        Ok(())
    }

    fn parse_location(&mut self, e: &BytesStart<'_>) -> Result<Location> {
        let mut filename: Option<String> = None;
        let mut line_raw: Option<String> = None;

        for attr in e.attributes() {
            let attr = attr.map_err(|e| malformed(format!("bad attribute on <location>: {}", e)))?;
            let value = attr
                .unescape_value()
                .map_err(|e| malformed(format!("bad attribute value on <location>: {}", e)))?
                .into_owned();
            match attr.key.as_ref() {
                b"filename" => filename = Some(value),
                b"line" => line_raw = Some(value),
                other => {
                    return Err(malformed(format!(
                        "unknown attribute '{}' on <location>",
                        String::from_utf8_lossy(other)
                    )))
                }
            }
        }

        match filename {
            Some(file) => self.current_file = file,
            None => {
                // Omitted filename means "same file as the previous location",
                // which only the relative encoding produces.
                if self.current_file.is_empty() {
                    return Err(malformed("<location> without filename and no previous file"));
                }
                self.relative_locations = true;
            }
        }

        let line = match line_raw {
            None => None,
            Some(raw) => {
                let absolute = if raw.starts_with('+') || raw.starts_with('-') {
                    self.relative_locations = true;
                    let delta: i64 = raw
                        .parse()
                        .map_err(|_| malformed(format!("bad location line delta '{}'", raw)))?;
                    let base = i64::from(*self.last_line.get(&self.current_file).unwrap_or(&0));
                    u32::try_from(base + delta).map_err(|_| {
                        malformed(format!("location line delta '{}' underflows", raw))
                    })?
                } else {
                    raw.parse::<u32>()
                        .map_err(|_| malformed(format!("bad location line '{}'", raw)))?
                };
                self.last_line.insert(self.current_file.clone(), absolute);
                Some(absolute)
            }
        };

        Ok(Location {
            file: self.current_file.clone(),
            line,
        })
    }
}

fn parse_translation(
    reader: &mut Reader<&[u8]>,
    start: &BytesStart<'_>,
    numerus: bool,
    empty_element: bool,
) -> Result<(Translation, EntryStatus)> {
    let mut status = EntryStatus::Finished;
    for attr in start.attributes() {
        let attr = attr.map_err(|e| malformed(format!("bad attribute on <translation>: {}", e)))?;
        match attr.key.as_ref() {
            b"type" => {
                let value = attr
                    .unescape_value()
                    .map_err(|e| malformed(format!("bad attribute value on <translation>: {}", e)))?;
                status = EntryStatus::from_type_attr(&value).ok_or_else(|| {
                    malformed(format!("unknown translation status '{}'", value))
                })?;
            }
            other => {
                return Err(malformed(format!(
                    "unknown attribute '{}' on <translation>",
                    String::from_utf8_lossy(other)
                )))
            }
        }
    }

    if empty_element {
        let translation = if numerus {
            Translation::Plural(Vec::new())
        } else {
            Translation::empty()
        };
        return Ok((translation, status));
    }

    let mut text = String::new();
    let mut forms: Vec<String> = Vec::new();

    loop {
        match read_event(reader)? {
            Event::Text(t) => {
                let chunk = t
                    .unescape()
                    .map_err(|e| malformed(format!("bad text in <translation>: {}", e)))?;
                text.push_str(&chunk);
            }
            Event::CData(c) => {
                text.push_str(&String::from_utf8_lossy(c.as_ref()));
            }
            Event::Start(e) if e.name().as_ref() == b"numerusform" => {
                forms.push(read_text_element(reader, "numerusform")?);
            }
            Event::Empty(e) if e.name().as_ref() == b"numerusform" => {
                forms.push(String::new());
            }
            Event::Start(e) | Event::Empty(e) => {
                return Err(malformed(format!(
                    "unexpected element <{}> inside <translation>",
                    name_of(&e)
                )));
            }
            Event::Comment(_) => {}
            Event::End(e) if e.name().as_ref() == b"translation" => break,
            Event::End(_) => return Err(malformed("mismatched closing tag inside <translation>")),
            Event::Eof => return Err(malformed("unexpected end of document inside <translation>")),
            _ => {}
        }
    }

    let translation = if numerus || !forms.is_empty() {
        if !text.trim().is_empty() {
            return Err(malformed(
                "numerus <translation> mixes text with <numerusform> elements",
            ));
        }
        Translation::Plural(forms)
    } else {
        Translation::Single(text)
    };
    Ok((translation, status))
}

/// Read the text content of a simple element up to its closing tag.
fn read_text_element(reader: &mut Reader<&[u8]>, element: &str) -> Result<String> {
    let mut text = String::new();
    loop {
        match read_event(reader)? {
            Event::Text(t) => {
                let chunk = t
                    .unescape()
                    .map_err(|e| malformed(format!("bad text in <{}>: {}", element, e)))?;
                text.push_str(&chunk);
            }
            Event::CData(c) => text.push_str(&String::from_utf8_lossy(c.as_ref())),
            Event::Start(e) | Event::Empty(e) => {
                return Err(malformed(format!(
                    "unexpected element <{}> inside <{}>",
                    name_of(&e),
                    element
                )));
            }
            Event::Comment(_) => {}
            Event::End(e) if e.name().as_ref() == element.as_bytes() => return Ok(text),
            Event::End(_) => {
                return Err(malformed(format!("mismatched closing tag inside <{}>", element)))
            }
            Event::Eof => {
                return Err(malformed(format!(
                    "unexpected end of document inside <{}>",
                    element
                )))
            }
            _ => {}
        }
    }
}

/// Expect only whitespace until the closing tag of `element`.
fn consume_empty_element(reader: &mut Reader<&[u8]>, element: &str) -> Result<()> {
    loop {
        match read_event(reader)? {
            Event::Text(t) => require_whitespace(t.as_ref(), element)?,
            Event::End(e) if e.name().as_ref() == element.as_bytes() => return Ok(()),
            Event::Eof => {
                return Err(malformed(format!(
                    "unexpected end of document inside <{}>",
                    element
                )))
            }
            _ => {
                return Err(malformed(format!(
                    "unexpected content inside <{}>",
                    element
                )))
            }
        }
    }
}

/// Re-serialize an unknown element subtree verbatim so future-format data
/// survives a load/serialize cycle.
fn capture_fragment(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    write_captured(&mut writer, Event::Start(start.to_owned()))?;

    let end_name = start.name().as_ref().to_vec();
    let mut depth = 1usize;
    loop {
        let event = read_event(reader)?;
        match &event {
            Event::Start(_) => depth += 1,
            Event::End(e) => {
                depth -= 1;
                if depth == 0 && e.name().as_ref() != end_name.as_slice() {
                    return Err(malformed("mismatched closing tag in preserved element"));
                }
            }
            Event::Eof => {
                return Err(malformed("unexpected end of document in preserved element"))
            }
            _ => {}
        }
        let done = depth == 0;
        write_captured(&mut writer, event)?;
        if done {
            break;
        }
    }

    fragment_to_string(writer.into_inner())
}

fn capture_empty(e: &BytesStart<'_>) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    write_captured(&mut writer, Event::Empty(e.to_owned()))?;
    fragment_to_string(writer.into_inner())
}

fn write_captured(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| malformed(format!("failed to preserve unknown element: {}", e)))
}

fn fragment_to_string(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| malformed(format!("invalid UTF-8 in preserved element: {}", e)))
}

fn read_event<'a>(reader: &mut Reader<&'a [u8]>) -> Result<Event<'a>> {
    reader
        .read_event()
        .map_err(|e| malformed(format!("XML error at byte {}: {}", reader.buffer_position(), e)))
}

fn require_whitespace(raw: &[u8], element: &str) -> Result<()> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        Ok(())
    } else {
        Err(malformed(format!("unexpected text inside {}", element)))
    }
}

fn name_of(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

fn malformed(reason: impl Into<String>) -> CatalogError {
    CatalogError::ts_parse(reason.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="uk_UA">
<context>
    <name>octave::file_editor</name>
    <message>
        <location filename="../src/m-editor/file-editor.cc" line="88"/>
        <source>&amp;Save File</source>
        <translation>&amp;Зберегти</translation>
    </message>
    <message>
        <source>&amp;Close</source>
        <translation type="unfinished"></translation>
    </message>
</context>
</TS>
"#;

    #[test]
    fn test_parse_simple_catalog() {
        let store = Store::load(SIMPLE.as_bytes()).unwrap();
        assert_eq!(store.language.as_deref(), Some("uk_UA"));
        assert_eq!(store.version.as_deref(), Some("2.1"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.location_style(), LocationStyle::Absolute);

        let save = store.find("octave::file_editor", "&Save File", None).unwrap();
        assert_eq!(save.status, EntryStatus::Finished);
        assert_eq!(save.translation, Translation::Single("&Зберегти".to_string()));
        assert_eq!(save.locations.len(), 1);
        assert_eq!(save.locations[0].file, "../src/m-editor/file-editor.cc");
        assert_eq!(save.locations[0].line, Some(88));

        let close = store.find("octave::file_editor", "&Close", None).unwrap();
        assert_eq!(close.status, EntryStatus::Unfinished);
        assert!(!close.translation.has_text());
    }

    #[test]
    fn test_parse_disambiguation_comment() {
        let doc = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="uk_UA">
<context>
    <name>QObject</name>
    <message>
        <source>b</source>
        <comment>short form for bold</comment>
        <translation>ж</translation>
    </message>
    <message>
        <source>b</source>
        <translation type="unfinished"></translation>
    </message>
</context>
</TS>
"#;
        let store = Store::load(doc.as_bytes()).unwrap();
        assert_eq!(store.len(), 2);
        let bold = store.find("QObject", "b", Some("short form for bold")).unwrap();
        assert!(bold.is_finished());
        let plain = store.find("QObject", "b", None).unwrap();
        assert!(!plain.is_finished());
    }

    #[test]
    fn test_parse_relative_locations() {
        let doc = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="uk_UA">
<context>
    <name>QTerminal</name>
    <message>
        <location filename="../src/terminal.cc" line="+55"/>
        <location line="+3"/>
        <location filename="../src/other.cc" line="+10"/>
        <location filename="../src/terminal.cc" line="-2"/>
        <source>Copy</source>
        <translation type="unfinished"></translation>
    </message>
</context>
</TS>
"#;
        let store = Store::load(doc.as_bytes()).unwrap();
        assert_eq!(store.location_style(), LocationStyle::Relative);
        let entry = store.find("QTerminal", "Copy", None).unwrap();
        let lines: Vec<Option<u32>> = entry.locations.iter().map(|l| l.line).collect();
        assert_eq!(lines, vec![Some(55), Some(58), Some(10), Some(56)]);
        assert_eq!(entry.locations[1].file, "../src/terminal.cc");
    }

    #[test]
    fn test_parse_numerus_forms() {
        let doc = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="uk_UA">
<context>
    <name>octave::file_browser</name>
    <message numerus="yes">
        <source>%n file(s)</source>
        <translation>
            <numerusform>%n файл</numerusform>
            <numerusform>%n файли</numerusform>
            <numerusform>%n файлів</numerusform>
        </translation>
    </message>
</context>
</TS>
"#;
        let store = Store::load(doc.as_bytes()).unwrap();
        let entry = store.find("octave::file_browser", "%n file(s)", None).unwrap();
        assert!(entry.numerus);
        match &entry.translation {
            Translation::Plural(forms) => assert_eq!(forms.len(), 3),
            other => panic!("expected plural forms, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_obsolete_and_vanished() {
        let doc = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="uk_UA">
<context>
    <name>QTerminal</name>
    <message>
        <source>Copy</source>
        <translation type="obsolete">Копіювати</translation>
    </message>
    <message>
        <source>Paste</source>
        <translation type="vanished">Вставити</translation>
    </message>
</context>
</TS>
"#;
        let store = Store::load(doc.as_bytes()).unwrap();
        assert_eq!(
            store.find("QTerminal", "Copy", None).unwrap().status,
            EntryStatus::Obsolete
        );
        assert_eq!(
            store.find("QTerminal", "Paste", None).unwrap().status,
            EntryStatus::Vanished
        );
    }

    #[test]
    fn test_unknown_elements_preserved() {
        let doc = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="uk_UA">
<context>
    <name>QObject</name>
    <message>
        <source>b</source>
        <translatorcomment>keep short</translatorcomment>
        <translation type="unfinished"></translation>
    </message>
</context>
</TS>
"#;
        let store = Store::load(doc.as_bytes()).unwrap();
        let entry = store.find("QObject", "b", None).unwrap();
        assert_eq!(entry.extra.len(), 1);
        assert_eq!(entry.extra[0].xml, "<translatorcomment>keep short</translatorcomment>");
        assert!(!entry.extra[0].after_translation);
    }

    #[test]
    fn test_duplicate_keys_collapse_on_load() {
        let doc = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="uk_UA">
<context>
    <name>QObject</name>
    <message>
        <location filename="a.cc" line="1"/>
        <source>Ok</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <location filename="b.cc" line="2"/>
        <source>Ok</source>
        <translation type="unfinished"></translation>
    </message>
</context>
</TS>
"#;
        let store = Store::load(doc.as_bytes()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.find("QObject", "Ok", None).unwrap().locations.len(), 2);
    }

    #[test]
    fn test_malformed_document_fails() {
        let err = Store::load(b"<TS><context></TS>").unwrap_err();
        assert!(err.to_string().contains("Tip:"));
    }

    #[test]
    fn test_message_without_source_fails() {
        let doc = r#"<TS version="2.1"><context><name>C</name><message><translation>x</translation></message></context></TS>"#;
        let err = Store::load(doc.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("missing <source>"));
    }

    #[test]
    fn test_unknown_status_fails() {
        let doc = r#"<TS version="2.1"><context><name>C</name><message><source>x</source><translation type="draft">y</translation></message></context></TS>"#;
        let err = Store::load(doc.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("unknown translation status"));
    }

    #[test]
    fn test_invalid_utf8_fails() {
        let err = Store::load(&[0x3c, 0xff, 0xfe]).unwrap_err();
        assert!(err.to_string().contains("invalid UTF-8"));
    }

    #[test]
    fn test_location_without_any_filename_fails() {
        let doc = r#"<TS version="2.1"><context><name>C</name><message><location line="+3"/><source>x</source></message></context></TS>"#;
        assert!(Store::load(doc.as_bytes()).is_err());
    }

    #[test]
    fn test_rich_text_source_preserved() {
        let doc = r#"<TS version="2.1"><context><name>C</name><message><source>&lt;b&gt;Bold&lt;/b&gt; %1</source><translation type="unfinished"></translation></message></context></TS>"#;
        let store = Store::load(doc.as_bytes()).unwrap();
        assert!(store.find("C", "<b>Bold</b> %1", None).is_some());
    }
}
