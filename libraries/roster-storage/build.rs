//! Build script for roster-storage.
//!
//! Rebuilds the crate when the embedded schema changes.

fn main() {
    println!("cargo:rerun-if-changed=migrations");
}
