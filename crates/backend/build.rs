use std::env;
use std::fs;
use std::path::Path;

/// Кладёт config.toml из корня workspace рядом с собранным бинарником
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap(); // "debug" or "release"

    // OUT_DIR: target/<profile>/build/backend-xxx/out -> target/<profile>
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    for file in ["config.toml", "catalog.json"] {
        let source = workspace_root.join(file);
        if source.exists() {
            println!("cargo:rerun-if-changed=../../{}", file);
            fs::copy(&source, target_dir.join(file))
                .unwrap_or_else(|e| panic!("Failed to copy {}: {}", file, e));
        } else {
            println!("cargo:warning={} not found at {:?}, using defaults", file, source);
        }
    }
}
