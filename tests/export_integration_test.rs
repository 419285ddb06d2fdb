//! End-to-end export runs: configuration file, manifest, real sink, real
//! filesystem.

use neutralizer::adapters::converter::ExternalConverter;
use neutralizer::adapters::manifest::parse_assembly;
use neutralizer::adapters::sink::{create_export_sink, CadExportSink};
use neutralizer::config::{load_config, ExportConfig};
use neutralizer::core::export::{ExportEngine, MemoryReporter, RunPhase};
use neutralizer::domain::{Assembly, ExportFormat};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const MANIFEST: &str = r#"{
    "file": "/vault/gate.AD_ASM",
    "name": "Gate",
    "properties": { "Number": "GT-100", "Revision": "C", "Product": "Gates" },
    "parameters": [
        { "name": "Width", "value": 900.0, "units": "mm", "type": "Distance" },
        { "name": "Height", "equation": "Width*2", "value": 1800.0, "units": "mm", "type": "Distance" }
    ],
    "parts": [
        { "file": "/vault/post.AD_PRT", "name": "Post<1>", "properties": { "Number": "PT-1" } },
        { "file": "/vault/post.AD_PRT", "name": "Post<2>", "properties": { "Number": "PT-1" } }
    ],
    "subassemblies": [
        {
            "file": "/vault/hinge.AD_ASM",
            "name": "Hinge<1>",
            "properties": { "Number": "HG-7" },
            "parts": [
                { "file": "/vault/post.AD_PRT", "name": "Post<3>", "properties": { "Number": "PT-1" } },
                { "file": "/vault/pin.AD_PRT", "name": "Pin<1>", "properties": { "Number": "PN-2" } }
            ]
        },
        {
            "file": "/vault/hinge.AD_ASM",
            "name": "Hinge<2>",
            "properties": { "Number": "HG-7" },
            "parts": [
                { "file": "/vault/pin.AD_PRT", "name": "Pin<2>", "properties": { "Number": "PN-2" } }
            ]
        }
    ]
}"#;

fn gate() -> Assembly {
    parse_assembly(MANIFEST).unwrap()
}

fn write_config(dir: &Path, directives: &str) -> ExportConfig {
    let path = dir.join("neutralizer.xml");
    fs::write(
        &path,
        format!(
            "<NeutralizerConfig><BaseExportPath>out</BaseExportPath>\
             <ExportDirectiveList>{directives}</ExportDirectiveList></NeutralizerConfig>"
        ),
    )
    .unwrap();
    load_config(&path).unwrap()
}

fn csv_directives() -> &'static str {
    "<ExportDirective><type>CSV_Properties</type>\
       <RelativeExportPath>props/{Number}.csv</RelativeExportPath>\
       <PurgeDirectoryBeforeExporting>props</PurgeDirectoryBeforeExporting></ExportDirective>\
     <ExportDirective><type>CSV_Parameters</type>\
       <RelativeExportPath>params/{Number}.csv</RelativeExportPath>\
       <EnablePartExport>false</EnablePartExport></ExportDirective>"
}

fn list_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}

#[test]
fn test_csv_export_each_file_once() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path(), csv_directives());
    let root = gate();

    let mut engine = ExportEngine::new(&config, create_export_sink(None), MemoryReporter::new());
    let summary = engine.export_all(&root);

    assert!(summary.is_successful());
    assert_eq!(engine.phase(), RunPhase::Done);
    // Gate, post, hinge, pin
    assert_eq!(summary.components_visited, 4);
    // Post<2>, Post<3>, Hinge<2>
    assert_eq!(summary.duplicates_skipped, 3);
    // 4 property files + parameters for the 2 assemblies
    assert_eq!(summary.successful_exports, 6);

    let out = temp_dir.path().join("out");
    assert_eq!(
        list_files(&out),
        vec![
            PathBuf::from("params/GT-100.csv"),
            PathBuf::from("params/HG-7.csv"),
            PathBuf::from("props/GT-100.csv"),
            PathBuf::from("props/HG-7.csv"),
            PathBuf::from("props/PN-2.csv"),
            PathBuf::from("props/PT-1.csv"),
        ]
    );

    let params = fs::read_to_string(out.join("params/GT-100.csv")).unwrap();
    assert_eq!(
        params,
        "Name,Equation,Value,Units,Type,Comment\r\n\
         Height,Width*2,1800,mm,Distance,\r\n\
         Width,,900,mm,Distance,\r\n"
    );

    let props = fs::read_to_string(out.join("props/PT-1.csv")).unwrap();
    assert!(props.contains("\r\nName,Post<1>\r\n"));
    assert!(props.contains("\r\nNumber,PT-1\r\n"));
    assert!(!props.contains("FileName"));
}

#[test]
fn test_rerun_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path(), csv_directives());
    let root = gate();
    let out = temp_dir.path().join("out");

    let mut engine = ExportEngine::new(&config, create_export_sink(None), MemoryReporter::new());
    engine.export_all(&root);
    let first: Vec<(PathBuf, Vec<u8>)> = list_files(&out)
        .into_iter()
        .map(|p| (p.clone(), fs::read(out.join(&p)).unwrap()))
        .collect();

    let mut engine = ExportEngine::new(&config, create_export_sink(None), MemoryReporter::new());
    let summary = engine.export_all(&root);
    let second: Vec<(PathBuf, Vec<u8>)> = list_files(&out)
        .into_iter()
        .map(|p| (p.clone(), fs::read(out.join(&p)).unwrap()))
        .collect();

    assert_eq!(first, second);
    // The second run purged the previous property files first
    assert_eq!(summary.files_purged, 4);
}

#[test]
fn test_purge_is_contained() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out");
    let stale = out.join("props/old/legacy.csv");
    let keep_other_ext = out.join("props/readme.txt");
    let keep_outside = out.join("params/manual.csv");
    for file in [&stale, &keep_other_ext, &keep_outside] {
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(file, "x").unwrap();
    }

    let config = write_config(temp_dir.path(), csv_directives());
    let mut engine = ExportEngine::new(&config, create_export_sink(None), MemoryReporter::new());
    let summary = engine.export_all(&gate());

    assert_eq!(summary.files_purged, 1);
    assert!(!stale.exists());
    assert!(keep_other_ext.exists());
    assert!(keep_outside.exists());
}

#[test]
fn test_geometry_without_converter_fails_per_item() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(
        temp_dir.path(),
        "<ExportDirective><type>STEP214</type>\
           <RelativeExportPath>step/{Number}.stp</RelativeExportPath></ExportDirective>\
         <ExportDirective><type>CSV_Properties</type>\
           <RelativeExportPath>props/{Number}.csv</RelativeExportPath></ExportDirective>",
    );

    let mut engine = ExportEngine::new(&config, create_export_sink(None), MemoryReporter::new());
    let summary = engine.export_all(&gate());

    assert_eq!(summary.failed_exports, 4);
    assert_eq!(summary.successful_exports, 4);
    assert_eq!(engine.reporter().errors().count(), 4);
    assert!(temp_dir.path().join("out/props/PN-2.csv").is_file());
    assert!(summary
        .exported_files
        .iter()
        .all(|file| file.format == ExportFormat::CsvProperties));
}

#[cfg(unix)]
#[test]
fn test_external_converter_run_with_one_failure() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(
        temp_dir.path(),
        "<ExportDirective><type>STL</type>\
           <RelativeExportPath>stl/{Number}_{Revision}.stl</RelativeExportPath>\
           <EnableRootAssemblyExport>no</EnableRootAssemblyExport></ExportDirective>",
    );

    let script = r#"case "$2" in *hinge*) echo "no solid body" >&2; exit 2;; esac; printf '%s %s' "$1" "$2" > "$3""#;
    let converter = ExternalConverter::new("sh").with_args(["-c", script, "sh"]);
    let sink = CadExportSink::new(converter);

    let mut engine = ExportEngine::new(&config, sink, MemoryReporter::new());
    let summary = engine.export_all(&gate());

    // post, pin and hinge reach the converter; hinge fails
    assert_eq!(summary.exports_attempted, 3);
    assert_eq!(summary.successful_exports, 2);
    assert_eq!(summary.failed_exports, 1);
    assert!(summary.errors[0].message.contains("no solid body"));

    let pin = temp_dir.path().join("out/stl/PN-2_Undefined Revision.stl");
    assert_eq!(fs::read_to_string(pin).unwrap(), "STL /vault/pin.AD_PRT");
    assert!(!temp_dir.path().join("out/stl/GT-100_C.stl").exists());
}
