use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use tscatalog::{run_merge, EntryStatus, MergeRequest, Store};

const OLD_CATALOG: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="uk_UA">
<context>
    <name>QTerminal</name>
    <message>
        <location filename="src/terminal.cc" line="10"/>
        <source>Copy</source>
        <translation>Копіювати</translation>
    </message>
    <message>
        <location filename="src/terminal.cc" line="20"/>
        <source>Paste</source>
        <translation>Вставити</translation>
    </message>
</context>
</TS>
"#;

fn write_fixtures(dir: &TempDir, inventory_json: &str) -> (PathBuf, PathBuf) {
    let catalog = dir.path().join("uk_UA.ts");
    let inventory = dir.path().join("scan.json");
    fs::write(&catalog, OLD_CATALOG).unwrap();
    fs::write(&inventory, inventory_json).unwrap();
    (catalog, inventory)
}

#[test]
fn merge_obsoletes_missing_keys_and_keeps_translations() {
    let dir = TempDir::new().unwrap();
    let (catalog, inventory) = write_fixtures(
        &dir,
        r#"[{"context": "QTerminal", "source": "Paste", "filename": "src/terminal.cc", "line": 25}]"#,
    );

    let summary = run_merge(MergeRequest::new(catalog.clone(), inventory)).unwrap();
    assert_eq!(summary.carried, 1);
    assert_eq!(summary.obsoleted, 1);

    let store = Store::read_from(&catalog).unwrap();
    let copy = store.find("QTerminal", "Copy", None).unwrap();
    assert_eq!(copy.status, EntryStatus::Obsolete);
    assert!(copy.translation.has_text(), "translator effort must survive");

    let paste = store.find("QTerminal", "Paste", None).unwrap();
    assert_eq!(paste.status, EntryStatus::Finished);
    assert_eq!(paste.locations[0].line, Some(25));
}

#[test]
fn merge_with_prune_removes_missing_keys() {
    let dir = TempDir::new().unwrap();
    let (catalog, inventory) = write_fixtures(
        &dir,
        r#"[{"context": "QTerminal", "source": "Paste", "filename": "src/terminal.cc", "line": 25}]"#,
    );

    let summary =
        run_merge(MergeRequest::new(catalog.clone(), inventory).with_prune(true)).unwrap();
    assert_eq!(summary.pruned, 1);

    let store = Store::read_from(&catalog).unwrap();
    assert!(store.find("QTerminal", "Copy", None).is_none());
}

#[test]
fn merge_twice_with_same_inventory_is_stable() {
    let dir = TempDir::new().unwrap();
    let (catalog, inventory) = write_fixtures(
        &dir,
        r#"[
            {"context": "QTerminal", "source": "Paste", "filename": "src/terminal.cc", "line": 25},
            {"context": "QTerminal", "source": "Cut", "filename": "src/terminal.cc", "line": 30}
        ]"#,
    );

    run_merge(MergeRequest::new(catalog.clone(), inventory.clone())).unwrap();
    let after_first = fs::read(&catalog).unwrap();

    run_merge(MergeRequest::new(catalog.clone(), inventory)).unwrap();
    let after_second = fs::read(&catalog).unwrap();

    assert_eq!(after_first, after_second);
}

#[test]
fn merge_to_separate_output_leaves_original_untouched() {
    let dir = TempDir::new().unwrap();
    let (catalog, inventory) = write_fixtures(&dir, r#"[]"#);
    let output = dir.path().join("merged.ts");

    run_merge(MergeRequest::new(catalog.clone(), inventory).with_output(Some(output.clone())))
        .unwrap();

    assert_eq!(fs::read_to_string(&catalog).unwrap(), OLD_CATALOG);
    let merged = Store::read_from(&output).unwrap();
    assert_eq!(
        merged.find("QTerminal", "Copy", None).unwrap().status,
        EntryStatus::Obsolete
    );
}

#[test]
fn merge_failure_leaves_previous_catalog_intact() {
    let dir = TempDir::new().unwrap();
    let (catalog, inventory) = write_fixtures(&dir, "{definitely not json");

    let err = run_merge(MergeRequest::new(catalog.clone(), inventory)).unwrap_err();
    assert!(err.to_string().contains("scan inventory"));
    assert_eq!(fs::read_to_string(&catalog).unwrap(), OLD_CATALOG);
}

#[test]
fn merge_create_starts_a_fresh_catalog() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("new.ts");
    let inventory = dir.path().join("scan.json");
    fs::write(
        &inventory,
        r#"[{"context": "C", "source": "Hello", "filename": "src/app.cc", "line": 3}]"#,
    )
    .unwrap();

    let summary = run_merge(
        MergeRequest::new(catalog.clone(), inventory).with_create(true),
    )
    .unwrap();
    assert_eq!(summary.added, 1);

    let store = Store::read_from(&catalog).unwrap();
    assert_eq!(
        store.find("C", "Hello", None).unwrap().status,
        EntryStatus::Unfinished
    );
}
