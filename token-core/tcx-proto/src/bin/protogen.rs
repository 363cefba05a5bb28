//! Regenerates the prost message modules from the `.proto` sources.
//!
//! Run from the `token-core` directory with `protoc` on the `PATH`:
//! `cargo run -p tcx-proto --features regenerate --bin tcx-protogen`.
//! An optional argument overrides the `token-core` root.
use std::env;
use std::io;

fn compile(root: &str, target: &str, protos: &[&str]) -> io::Result<()> {
    let mut config = prost_build::Config::new();
    config.out_dir(format!("{}/{}/src", root, target));
    let protos: Vec<String> = protos
        .iter()
        .map(|proto| format!("{}/tcx-proto/src/{}", root, proto))
        .collect();
    config.compile_protos(&protos, &[format!("{}/tcx-proto/src", root)])
}

fn main() -> io::Result<()> {
    let root = env::args().nth(1).unwrap_or_else(|| ".".to_string());

    // tcx-api
    compile(&root, "tcx", &["api.proto"])?;

    // tcx-btc-fork
    compile(&root, "tcx-btc-fork", &["btc_fork.proto"])?;

    // tcx-tron
    compile(&root, "tcx-tron", &["tron.proto"])?;

    Ok(())
}
