//! Generates the `cinema.v1` message types, service traits and clients into
//! `OUT_DIR`. Requires `protoc` on the build host.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto");

    tonic_prost_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&["proto/cinema/v1/cinema.proto"], &["proto"])?;

    Ok(())
}
