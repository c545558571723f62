use clap::Parser;
use serde_json::{Value, json};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::args::CliArgs;
use super::driver::{collect_manifests, document_manifest, render_json, run};
use classdoc::DocGenOptions;

const WIDGET: &str = r#"{
    "types": {
        "Options": { "kind": "object", "properties": [
            { "name": "label", "type": "string", "documentation": "Text on the widget" },
            { "name": "nested", "type": "Options", "optional": true }
        ] }
    },
    "units": [{ "fileName": "widget.ts", "declarations": [
        { "kind": "class", "name": "Widget", "exported": true,
          "constructors": [{ "parameters": [{ "name": "options", "type": "Options" }] }] }
    ] }]
}"#;

const PANEL: &str = r#"{
    "units": [{ "fileName": "panel.ts", "declarations": [
        { "kind": "class", "name": "Panel", "exported": true }
    ] }]
}"#;

const BROKEN_REFERENCE: &str = r#"{
    "units": [{ "fileName": "bad.ts", "declarations": [
        { "kind": "class", "name": "Bad",
          "constructors": [{ "parameters": [{ "name": "x", "type": "Missing" }] }] }
    ] }]
}"#;

const CONFIG_FILE: &str = super::config::CONFIG_FILE_NAME;

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("failed to create test directory");
    }
    std::fs::write(&path, contents).expect("failed to write test file");
    path
}

fn parse_args(args: &[&str]) -> CliArgs {
    let mut argv = vec!["classdoc"];
    argv.extend_from_slice(args);
    CliArgs::try_parse_from(argv).expect("args should parse")
}

fn class_names(result: &super::driver::RunResult) -> Vec<&str> {
    result
        .documentation
        .classes
        .iter()
        .map(|class| class.name.as_str())
        .collect()
}

#[test]
fn documents_a_single_manifest() {
    let temp = TempDir::new().expect("temp dir");
    let path = write_file(temp.path(), "widget.json", WIDGET);

    let doc = document_manifest(&path, DocGenOptions::default()).expect("manifest documents");
    assert_eq!(doc.classes.len(), 1);

    let options = &doc.classes[0].constructors[0].parameters[0];
    assert_eq!(options.name, "options");
    assert_eq!(options.children().len(), 2);
    assert!(options.children()[1].children().is_empty());
}

#[test]
fn directories_are_walked_in_sorted_order() {
    let temp = TempDir::new().expect("temp dir");
    write_file(temp.path(), "b/panel.json", PANEL);
    write_file(temp.path(), "a/widget.json", WIDGET);
    write_file(temp.path(), "a/notes.txt", "not a manifest");
    write_file(temp.path(), CONFIG_FILE, "{}");

    let manifests = collect_manifests(&[temp.path().to_path_buf()]).expect("walks");
    assert_eq!(
        manifests,
        [
            temp.path().join("a").join("widget.json"),
            temp.path().join("b").join("panel.json")
        ]
    );
}

#[test]
fn missing_input_is_an_error() {
    let temp = TempDir::new().expect("temp dir");
    let result = collect_manifests(&[temp.path().join("missing.json")]);
    assert!(result.is_err());
}

#[test]
fn run_concatenates_in_input_order() {
    let temp = TempDir::new().expect("temp dir");
    let panel = write_file(temp.path(), "panel.json", PANEL);
    let widget = write_file(temp.path(), "widget.json", WIDGET);

    let args = CliArgs::try_parse_from([
        OsStr::new("classdoc"),
        panel.as_os_str(),
        widget.as_os_str(),
    ])
    .expect("args should parse");
    let result = run(&args, temp.path()).expect("run succeeds");

    assert_eq!(class_names(&result), ["Panel", "Widget"]);
    assert_eq!(result.manifests, [panel, widget]);
    assert!(result.documentation.is_complete());
}

#[test]
fn run_uses_project_file() {
    let temp = TempDir::new().expect("temp dir");
    write_file(temp.path(), "manifests/widget.json", WIDGET);
    write_file(
        temp.path(),
        CONFIG_FILE,
        r#"{ "files": ["manifests"], "maxProps": 0 }"#,
    );

    let result = run(&parse_args(&[]), temp.path()).expect("run succeeds");
    assert_eq!(class_names(&result), ["Widget"]);
    let options = &result.documentation.classes[0].constructors[0].parameters[0];
    assert!(options.children().is_empty());

    let result = run(&parse_args(&["--maxProps", "5"]), temp.path()).expect("run succeeds");
    let options = &result.documentation.classes[0].constructors[0].parameters[0];
    assert_eq!(options.children().len(), 2);
}

#[test]
fn run_without_inputs_is_an_error() {
    let temp = TempDir::new().expect("temp dir");
    let error = run(&parse_args(&[]), temp.path()).expect_err("no inputs");
    assert!(error.to_string().contains("no input manifests"));
}

#[test]
fn invalid_manifest_is_fatal() {
    let temp = TempDir::new().expect("temp dir");
    write_file(temp.path(), "bad.json", BROKEN_REFERENCE);

    let error = run(&parse_args(&["bad.json"]), temp.path()).expect_err("lowering fails");
    let message = format!("{error:#}");
    assert!(message.contains("invalid manifest"), "{message}");
    assert!(message.contains("Cannot find type 'Missing'"), "{message}");
}

#[test]
fn unparsable_manifest_is_fatal() {
    let temp = TempDir::new().expect("temp dir");
    write_file(temp.path(), "junk.json", "{ not json");

    let error = run(&parse_args(&["junk.json"]), temp.path()).expect_err("parse fails");
    assert!(error.to_string().contains("failed to parse manifest"));
}

#[test]
fn renders_pretty_and_compact_json() {
    let temp = TempDir::new().expect("temp dir");
    let path = write_file(temp.path(), "panel.json", PANEL);
    let doc = document_manifest(&path, DocGenOptions::default()).expect("documents");

    let pretty = render_json(&doc, false).expect("renders");
    assert!(pretty.starts_with("[\n  {\n    \"name\": \"Panel\""));
    assert!(pretty.ends_with("]\n"));

    let compact = render_json(&doc, true).expect("renders");
    assert_eq!(compact.lines().count(), 1);

    let value: Value = serde_json::from_str(&compact).expect("valid JSON");
    assert_eq!(
        value,
        json!([{
            "name": "Panel",
            "fileName": "panel.ts",
            "description": "",
            "type": {
                "name": "typeof Panel",
                "raw": "typeof Panel",
                "category": "shape",
                "value": [],
                "description": ""
            },
            "constructors": [
                { "parameters": [], "returnType": "Panel", "description": "" }
            ]
        }])
    );
}

fn demo(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(name)
}

#[test]
fn nested_types_demo() {
    let doc = document_manifest(&demo("nested-types.json"), DocGenOptions::default())
        .expect("demo documents");
    assert!(doc.is_complete());

    let value = serde_json::to_value(&doc).expect("serializes");
    let props = &value[0]["constructors"][0]["parameters"][0];
    assert_eq!(props["name"], "a");
    assert_eq!(props["required"], true);

    let optional = &props["value"][6];
    assert_eq!(optional["name"], "optional");
    assert_eq!(optional["category"], "enum");
    assert_eq!(optional["value"][2]["value"], json!(123));

    let image_type = &props["value"][0]["value"][0]["value"][2];
    assert_eq!(image_type["name"], "imgType");
    assert_eq!(image_type["value"][2]["name"], "GIF");
    assert_eq!(image_type["value"][2]["value"], "gif");

    let report = &props["value"][5];
    assert_eq!(report["category"], "shape");
    assert_eq!(report["value"].as_array().map(Vec::len), Some(6));
}

#[test]
fn button_demo() {
    let doc = document_manifest(&demo("button.json"), DocGenOptions::default())
        .expect("demo documents");
    assert_eq!(doc.classes.len(), 1);

    let button = &doc.classes[0];
    assert_eq!(button.name, "Button");
    assert_eq!(button.ty.children()[0].name, "defaultProps");

    let props = &button.constructors[0].parameters[0];
    assert_eq!(props.children().len(), 12);
}
