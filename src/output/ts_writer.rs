use std::borrow::Cow;
use std::collections::HashMap;
use std::io::Write as _;
use std::path::Path;

use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use quick_xml::Writer;
use tempfile::NamedTempFile;

use crate::catalog::{Entry, Location, LocationStyle, Store, Translation};
use crate::error::{CatalogError, Result};

/// Serialize a store to its canonical persisted form.
///
/// Layout follows Qt Linguist's output: XML declaration, `<!DOCTYPE TS>`,
/// contexts at column zero, four-space indent steps below. Contexts appear
/// in first-appearance order and entries in discovery order, so an
/// unchanged store re-serializes byte-identically.
pub fn serialize_store(store: &Store) -> Result<Vec<u8>> {
    let mut emitter = Emitter {
        writer: Writer::new(Vec::new()),
        style: store.location_style(),
        current_file: String::new(),
        last_line: HashMap::new(),
    };
    emitter.emit(store)?;
    Ok(emitter.writer.into_inner())
}

/// Write a catalog to disk via write-to-temp-then-rename so a crash
/// mid-write never corrupts an existing catalog.
pub fn write_catalog(store: &Store, path: &Path) -> Result<()> {
    let bytes = serialize_store(store)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&bytes)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| CatalogError::Io(e.error))?;
    Ok(())
}

struct Emitter {
    writer: Writer<Vec<u8>>,
    style: LocationStyle,
    current_file: String,
    last_line: HashMap<String, u32>,
}

impl Emitter {
    fn emit(&mut self, store: &Store) -> Result<()> {
        self.event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        self.raw("\n")?;
        self.event(Event::DocType(BytesText::from_escaped("TS")))?;
        self.raw("\n")?;

        let mut ts = BytesStart::new("TS");
        if let Some(version) = &store.version {
            push_attr(&mut ts, "version", version);
        }
        if let Some(language) = &store.language {
            push_attr(&mut ts, "language", language);
        }
        if let Some(source_language) = &store.source_language {
            push_attr(&mut ts, "sourcelanguage", source_language);
        }
        self.event(Event::Start(ts))?;
        self.raw("\n")?;

        for fragment in &store.header_extra {
            self.raw(fragment)?;
            self.raw("\n")?;
        }

        for ctx in store.contexts() {
            self.event(Event::Start(BytesStart::new("context")))?;
            self.raw("\n    ")?;
            self.text_element("name", &ctx.name)?;
            self.raw("\n")?;

            for entry in store.entries().iter().filter(|e| e.context == ctx.name) {
                self.emit_message(entry)?;
            }
            for fragment in &ctx.extra {
                self.raw("    ")?;
                self.raw(fragment)?;
                self.raw("\n")?;
            }

            self.event(Event::End(BytesEnd::new("context")))?;
            self.raw("\n")?;
        }

        self.event(Event::End(BytesEnd::new("TS")))?;
        self.raw("\n")?;
        Ok(())
    }

    fn emit_message(&mut self, entry: &Entry) -> Result<()> {
        self.raw("    ")?;
        let mut message = BytesStart::new("message");
        if entry.numerus {
            push_attr(&mut message, "numerus", "yes");
        }
        self.event(Event::Start(message))?;
        self.raw("\n")?;

        for location in &entry.locations {
            self.raw("        ")?;
            self.emit_location(location)?;
            self.raw("\n")?;
        }

        self.raw("        ")?;
        self.text_element("source", &entry.source)?;
        self.raw("\n")?;

        if let Some(comment) = &entry.comment {
            self.raw("        ")?;
            self.text_element("comment", comment)?;
            self.raw("\n")?;
        }

        for fragment in entry.extra.iter().filter(|f| !f.after_translation) {
            self.raw("        ")?;
            self.raw(&fragment.xml)?;
            self.raw("\n")?;
        }

        self.raw("        ")?;
        self.emit_translation(entry)?;
        self.raw("\n")?;

        for fragment in entry.extra.iter().filter(|f| f.after_translation) {
            self.raw("        ")?;
            self.raw(&fragment.xml)?;
            self.raw("\n")?;
        }

        self.raw("    ")?;
        self.event(Event::End(BytesEnd::new("message")))?;
        self.raw("\n")?;
        Ok(())
    }

    fn emit_location(&mut self, location: &Location) -> Result<()> {
        let mut elem = BytesStart::new("location");
        match self.style {
            LocationStyle::Absolute => {
                push_attr(&mut elem, "filename", &location.file);
                if let Some(line) = location.line {
                    push_attr(&mut elem, "line", &line.to_string());
                }
            }
            LocationStyle::Relative => {
                if location.file != self.current_file {
                    push_attr(&mut elem, "filename", &location.file);
                    self.current_file = location.file.clone();
                }
                if let Some(line) = location.line {
                    let base = i64::from(*self.last_line.get(&location.file).unwrap_or(&0));
                    let delta = i64::from(line) - base;
                    push_attr(&mut elem, "line", &format!("{:+}", delta));
                    self.last_line.insert(location.file.clone(), line);
                }
            }
        }
        self.event(Event::Empty(elem))
    }

    fn emit_translation(&mut self, entry: &Entry) -> Result<()> {
        let mut elem = BytesStart::new("translation");
        if let Some(marker) = entry.status.type_attr() {
            push_attr(&mut elem, "type", marker);
        }
        self.event(Event::Start(elem))?;

        match &entry.translation {
            Translation::Single(text) => {
                if !text.is_empty() {
                    self.escaped_text(text)?;
                }
            }
            Translation::Plural(forms) => {
                self.raw("\n")?;
                for form in forms {
                    self.raw("            ")?;
                    self.text_element("numerusform", form)?;
                    self.raw("\n")?;
                }
                self.raw("        ")?;
            }
        }

        self.event(Event::End(BytesEnd::new("translation")))
    }

    fn text_element(&mut self, name: &str, text: &str) -> Result<()> {
        self.event(Event::Start(BytesStart::new(name)))?;
        if !text.is_empty() {
            self.escaped_text(text)?;
        }
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn escaped_text(&mut self, text: &str) -> Result<()> {
        let escaped = escape(text);
        self.event(Event::Text(BytesText::from_escaped(escaped.as_ref())))
    }

    /// Emit pre-formed bytes (indentation, preserved fragments) verbatim.
    fn raw(&mut self, content: &str) -> Result<()> {
        self.event(Event::Text(BytesText::from_escaped(content)))
    }

    fn event(&mut self, event: Event<'_>) -> Result<()> {
        self.writer
            .write_event(event)
            .map_err(|e| CatalogError::Generic(format!("failed to serialize TS document: {}", e)))
    }
}

fn push_attr(start: &mut BytesStart<'_>, key: &'static str, value: &str) {
    let escaped = escape(value).into_owned();
    start.push_attribute(Attribute {
        key: QName(key.as_bytes()),
        value: Cow::Owned(escaped.into_bytes()),
    });
}

/// Escape text and attribute values the way Qt Linguist does: all five
/// predefined XML entities, in both positions.
fn escape(value: &str) -> Cow<'_, str> {
    if !value.chars().any(|c| matches!(c, '&' | '<' | '>' | '"' | '\'')) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
