#[path = "src/codegen.rs"]
#[allow(dead_code)]
mod codegen;

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=src/codegen.rs");
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let source = codegen::render(codegen::DEFAULT_MAX_ARITY);
    if let Err(err) = fs::write(out_dir.join("arity.rs"), source) {
        panic!("failed to write arity.rs: {}", err);
    }
}
