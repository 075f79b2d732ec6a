use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

const CANONICAL: &str = "draw nothing-fill nothing\n\
                         Circle-fill nothing\n\
                         Rectangle-Red\n\
                         Circle-Blue-TextAnnotation\n";

#[test]
fn test_default_run_prints_canonical_gallery() {
    let output = Command::new(env!("CARGO_BIN_EXE_template_method"))
        .output()
        .expect("binary runs");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), CANONICAL);
}

#[test]
fn test_config_file_selects_shapes() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "strategy = \"native\"").unwrap();
    writeln!(file, "shapes = [\"red_rectangle\", \"circle\"]").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_template_method"))
        .arg(file.path())
        .output()
        .expect("binary runs");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Rectangle-Red\nCircle-fill nothing\n"
    );
}

#[test]
fn test_bad_config_exits_with_failure() {
    let output = Command::new(env!("CARGO_BIN_EXE_template_method"))
        .arg("/no/such/config.toml")
        .output()
        .expect("binary runs");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read"));
}

#[test]
fn test_unwired_shape_fails_fast() {
    let output = Command::new(env!("CARGO_BIN_EXE_unwired_shape"))
        .output()
        .expect("binary runs");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("never wired"));
}
