use std::fs;
use std::path::Path;

use tempfile::tempdir;

use iifewrap_core::config::TransformJob;
use iifewrap_core::error::TransformError;
use iifewrap_core::preset::browser_iife;
use iifewrap_core::transform::{run_jobs, transform};

fn write_numbered(path: &Path, lines: usize) {
    let text: String = (0..lines).map(|i| format!("line{i}\n")).collect();
    fs::write(path, text).expect("write fixture");
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn end_to_end_trim_and_wrap() {
    let tmp = tempdir().expect("tempdir");
    let input = tmp.path().join("in.module.js");
    let output = tmp.path().join("out.js");
    write_numbered(&input, 10);

    let job = TransformJob::new(&input, &output)
        .with_header(strings(&["H1", "H2"]))
        .with_footer(strings(&["F1"]))
        .with_trim(4, 2);

    let report = transform(&job).expect("transform");

    assert_eq!(report.lines_read, 10);
    assert_eq!(report.lines_kept, 4);
    assert_eq!(report.output, output);

    let written = fs::read_to_string(&output).expect("read output");
    assert_eq!(written, "H1\nH2\nline4\nline5\nline6\nline7\n\nF1");
    assert_eq!(report.bytes_written, written.len());
}

#[test]
fn short_input_yields_empty_body() {
    let tmp = tempdir().expect("tempdir");
    let input = tmp.path().join("in.module.js");
    let output = tmp.path().join("out.js");
    write_numbered(&input, 3);

    let job = TransformJob::new(&input, &output)
        .with_header(strings(&["H"]))
        .with_footer(strings(&["F"]))
        .with_trim(4, 0);

    let report = transform(&job).expect("transform");

    assert_eq!(report.lines_kept, 0);
    assert_eq!(fs::read_to_string(&output).expect("read"), "H\n\nF");
}

#[test]
fn missing_input_reports_not_found_and_writes_nothing() {
    let tmp = tempdir().expect("tempdir");
    let input = tmp.path().join("absent.module.js");
    let output = tmp.path().join("out.js");

    let job = TransformJob::new(&input, &output);
    let err = transform(&job).unwrap_err();

    assert!(matches!(err, TransformError::NotFound(ref p) if *p == input));
    assert!(!output.exists());
}

#[test]
fn invalid_utf8_input_reports_encoding_error() {
    let tmp = tempdir().expect("tempdir");
    let input = tmp.path().join("in.module.js");
    let output = tmp.path().join("out.js");
    fs::write(&input, [b'o', b'k', b'\n', 0xff, 0xfe]).expect("write fixture");

    let job = TransformJob::new(&input, &output);
    let err = transform(&job).unwrap_err();

    assert!(matches!(err, TransformError::Encoding { offset: 3, .. }));
    assert!(!output.exists());
}

#[test]
fn output_is_fully_replaced_on_rerun() {
    let tmp = tempdir().expect("tempdir");
    let input = tmp.path().join("in.module.js");
    let output = tmp.path().join("out.js");
    write_numbered(&input, 5);
    fs::write(&output, "a much much longer previous output that must vanish").expect("seed");

    let job = TransformJob::new(&input, &output).with_trim(1, 1);

    let first = transform(&job).expect("first run");
    let first_bytes = fs::read(&output).expect("read");

    let second = transform(&job).expect("second run");
    let second_bytes = fs::read(&output).expect("read again");

    assert_eq!(first_bytes, second_bytes);
    assert_eq!(first.bytes_written, second.bytes_written);
    assert_eq!(first_bytes.len(), first.bytes_written);
}

#[test]
fn no_temp_files_linger_after_success_or_failure() {
    let tmp = tempdir().expect("tempdir");
    let input = tmp.path().join("in.module.js");
    let output = tmp.path().join("out.js");
    write_numbered(&input, 2);

    transform(&TransformJob::new(&input, &output)).expect("transform");
    transform(&TransformJob::new(tmp.path().join("absent.js"), &output)).unwrap_err();

    let mut names: Vec<String> = fs::read_dir(tmp.path())
        .expect("read dir")
        .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    assert_eq!(names, ["in.module.js", "out.js"]);
}

#[test]
fn iife_preset_round_trip() {
    let tmp = tempdir().expect("tempdir");
    let input = tmp.path().join("in.module.js");
    let output = tmp.path().join("out.js");
    write_numbered(&input, 4);

    let job = TransformJob::new(&input, &output)
        .with_trim(1, 1)
        .with_preset(browser_iife(Some("use the module build")));

    transform(&job).expect("transform");

    let written = fs::read_to_string(&output).expect("read");
    assert!(written.starts_with("'use strict';\n"));
    assert!(written.contains("console.warn( 'use the module build' );"));
    assert!(written.contains("\nline1\nline2\n"));
    assert!(written.ends_with("global ) );"));
}

#[test]
fn batch_preserves_job_order_and_isolates_failures() {
    let tmp = tempdir().expect("tempdir");
    let input_a = tmp.path().join("a.module.js");
    let input_c = tmp.path().join("c.module.js");
    write_numbered(&input_a, 4);
    write_numbered(&input_c, 6);

    let jobs = vec![
        TransformJob::new(&input_a, tmp.path().join("a.js")),
        TransformJob::new(tmp.path().join("missing.js"), tmp.path().join("b.js")),
        TransformJob::new(&input_c, tmp.path().join("c.js")).with_trim(2, 2),
    ];

    let outcomes = run_jobs(&jobs);

    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0].as_ref().expect("job a").lines_read, 4);
    assert!(matches!(
        outcomes[1].as_ref().unwrap_err(),
        TransformError::NotFound(_)
    ));
    assert_eq!(outcomes[2].as_ref().expect("job c").lines_kept, 2);

    assert!(tmp.path().join("a.js").exists());
    assert!(!tmp.path().join("b.js").exists());
    assert!(tmp.path().join("c.js").exists());
}
