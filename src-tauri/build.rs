use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    stage_flag_archive();
    tauri_build::build();
}

/// Copies `resources/flags.zip` into `OUT_DIR` so the library can embed it
/// with `include_bytes!`. A missing archive still builds: an empty file is
/// staged and `FLAG_ARCHIVE_BUNDLED=0` tells the loader there is nothing to read.
fn stage_flag_archive() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR"));
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR"));

    let source = manifest_dir.join("resources").join("flags.zip");
    let staged = out_dir.join("flags.zip");

    println!("cargo:rerun-if-changed={}", source.display());

    if source.exists() {
        fs::copy(&source, &staged).expect("failed to stage flag archive");
        println!("cargo:rustc-env=FLAG_ARCHIVE_BUNDLED=1");
    } else {
        println!("cargo:warning=flag archive not found at {:?}", source);
        fs::write(&staged, []).expect("failed to stage empty flag archive");
        println!("cargo:rustc-env=FLAG_ARCHIVE_BUNDLED=0");
    }
}
