use tscatalog::Store;

fn roundtrip(doc: &str) {
    let store = Store::load(doc.as_bytes()).unwrap();
    let bytes = store.serialize().unwrap();
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        doc,
        "canonical document must re-serialize byte-identically"
    );
}

#[test]
fn roundtrip_absolute_locations() {
    roundtrip(
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="uk_UA">
<context>
    <name>octave::file_editor</name>
    <message>
        <location filename="../src/m-editor/file-editor.cc" line="1134"/>
        <source>&amp;Save File</source>
        <translation>&amp;Зберегти</translation>
    </message>
    <message>
        <location filename="../src/m-editor/file-editor.cc" line="1201"/>
        <source>&amp;Close</source>
        <translation type="unfinished"></translation>
    </message>
</context>
<context>
    <name>QTerminal</name>
    <message>
        <source>Copy</source>
        <translation type="obsolete">Копіювати</translation>
    </message>
</context>
</TS>
"#,
    );
}

#[test]
fn roundtrip_relative_locations() {
    roundtrip(
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="uk_UA">
<context>
    <name>QTerminal</name>
    <message>
        <location filename="../src/terminal.cc" line="+55"/>
        <location line="+3"/>
        <source>Copy</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <location filename="../src/other.cc" line="+10"/>
        <location filename="../src/terminal.cc" line="-2"/>
        <source>Paste</source>
        <translation type="unfinished"></translation>
    </message>
</context>
</TS>
"#,
    );
}

#[test]
fn roundtrip_numerus_forms() {
    roundtrip(
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="uk_UA">
<context>
    <name>octave::file_browser</name>
    <message numerus="yes">
        <location filename="../src/file-browser.cc" line="312"/>
        <source>%n file(s)</source>
        <translation>
            <numerusform>%n файл</numerusform>
            <numerusform>%n файли</numerusform>
            <numerusform>%n файлів</numerusform>
        </translation>
    </message>
    <message numerus="yes">
        <source>%n directory(ies)</source>
        <translation type="unfinished">
            <numerusform></numerusform>
            <numerusform></numerusform>
            <numerusform></numerusform>
        </translation>
    </message>
</context>
</TS>
"#,
    );
}

#[test]
fn roundtrip_disambiguation_and_markup() {
    roundtrip(
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="uk_UA" sourcelanguage="en_US">
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
    <message>
        <source>&lt;b&gt;Keyboard&lt;/b&gt; %1</source>
        <translation type="vanished">&lt;b&gt;Клавіатура&lt;/b&gt; %1</translation>
    </message>
</context>
</TS>
"#,
    );
}

#[test]
fn roundtrip_preserves_unknown_elements() {
    roundtrip(
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="uk_UA">
<extra-po_header>X-Generator: scanner 1.0</extra-po_header>
<context>
    <name>QObject</name>
    <message>
        <source>b</source>
        <translation type="unfinished"></translation>
        <translatorcomment>keep short</translatorcomment>
    </message>
</context>
</TS>
"#,
    );
}

#[test]
fn roundtrip_quote_entities_and_comment_placement() {
    roundtrip(
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="uk_UA">
<context>
    <name>QFile</name>
    <message>
        <source>Can&apos;t open file &quot;%1&quot;</source>
        <translatorcomment>keep the quotes as-is</translatorcomment>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <source>Done</source>
        <translation>Готово</translation>
        <extra-loc-layout_id>status_done</extra-loc-layout_id>
    </message>
</context>
</TS>
"#,
    );
}

#[test]
fn reserialization_is_idempotent() {
    let doc = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="uk_UA">
<context>
    <name>QTerminal</name>
    <message>
        <location filename="../src/terminal.cc" line="+55"/>
        <source>Copy</source>
        <translation>Копіювати</translation>
    </message>
</context>
</TS>
"#;
    let first = Store::load(doc.as_bytes()).unwrap().serialize().unwrap();
    let second = Store::load(&first).unwrap().serialize().unwrap();
    assert_eq!(first, second);
}
