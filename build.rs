fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The generated gRPC code is only pulled in by the `server` feature, so
    // library builds and tests do not need protoc on the path.
    if std::env::var_os("CARGO_FEATURE_SERVER").is_some() {
        tonic_build::compile_protos("proto/lp_solver.proto")?;
    }
    println!("cargo:rerun-if-changed=proto/lp_solver.proto");
    Ok(())
}
