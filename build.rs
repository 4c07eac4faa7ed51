//! Build script for energy-fmt
//!
//! Embeds a persisted build counter, the build time and the cargo profile.

use std::fs;
use std::path::Path;

const COUNTER_FILE: &str = "build_number.txt";

/// Previous counter plus one; a missing or garbled file restarts at 1
fn next_build_number(path: &Path) -> u64 {
    let previous = fs::read_to_string(path)
        .ok()
        .and_then(|text| text.trim().parse::<u64>().ok())
        .unwrap_or(0);
    previous + 1
}

fn main() {
    println!("cargo:rerun-if-changed=src");

    let counter_path = Path::new(COUNTER_FILE);
    let build_number = next_build_number(counter_path);

    // A read-only source tree still builds, just without a persisted counter
    if let Err(e) = fs::write(counter_path, build_number.to_string()) {
        println!("cargo:warning=Could not persist build number: {}", e);
    }

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=ENERGY_FMT_BUILD_NUMBER={}", build_number);
    println!("cargo:rustc-env=ENERGY_FMT_BUILD_TIMESTAMP={}", timestamp);
    println!("cargo:rustc-env=ENERGY_FMT_BUILD_PROFILE={}", profile);
}
