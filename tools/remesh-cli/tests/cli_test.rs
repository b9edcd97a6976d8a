//! Integration tests for the remesh binary
//!
//! Each test generates its own input assets in a temp dir and runs the
//! compiled CLI; the remeshing tests substitute a script for the external
//! tool since the real binaries are not available.

use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn remesh(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_remesh"))
        .args(args)
        .output()
        .expect("failed to run remesh")
}

/// Minimal single-triangle OBJ
fn write_triangle_obj(path: &Path) {
    std::fs::write(path, "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").expect("write obj");
}

#[test]
fn convert_obj_to_stl() {
    let dir = tempdir().unwrap();
    let obj = dir.path().join("tri.obj");
    let stl = dir.path().join("tri.stl");
    write_triangle_obj(&obj);

    let output = remesh(&["convert", obj.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stl.exists(), "converted STL should exist");
    // 80-byte header + count + one 50-byte facet
    assert_eq!(std::fs::metadata(&stl).unwrap().len(), 80 + 4 + 50);
}

#[test]
fn convert_rejects_unknown_format() {
    let dir = tempdir().unwrap();
    let ply = dir.path().join("tri.ply");
    std::fs::write(&ply, "ply\n").unwrap();

    let output = remesh(&["convert", ply.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--output"), "stderr: {stderr}");
}

#[cfg(unix)]
#[test]
fn instant_run_with_fake_tool() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let obj = dir.path().join("tri.obj");
    write_triangle_obj(&obj);

    // fake instantMeshes: copy the trailing input to the -o target
    let tool = dir.path().join("instantMeshes");
    std::fs::write(
        &tool,
        r#"#!/bin/sh
out=""
prev=""
for a in "$@"; do
  if [ "$prev" = "-o" ]; then out="$a"; fi
  prev="$a"
  last="$a"
done
cp "$last" "$out"
"#,
    )
    .unwrap();
    std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();

    let work = dir.path().join("work");
    let output = remesh(&[
        "instant",
        obj.to_str().unwrap(),
        "--tool",
        tool.to_str().unwrap(),
        "--output-dir",
        work.to_str().unwrap(),
        "--faces",
        "2800",
    ]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let result = work.join("outputs").join("tri_IM.stl");
    assert!(result.exists(), "result mesh should exist");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("tri_IM.stl"), "stdout: {stdout}");
}

#[test]
fn instant_rejects_out_of_range_faces() {
    let dir = tempdir().unwrap();
    let obj = dir.path().join("tri.obj");
    write_triangle_obj(&obj);

    let work = dir.path().join("work");
    let output = remesh(&[
        "instant",
        obj.to_str().unwrap(),
        "--output-dir",
        work.to_str().unwrap(),
        "--faces",
        "50",
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("out of range"), "stderr: {stderr}");
}
