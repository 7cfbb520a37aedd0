fn main() {
    // Stamp the binary with the time it was built
    let build_date = chrono::Utc::now()
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string();
    println!("cargo:rustc-env=ROOMPLAN_BUILD_DATE={}", build_date);
    println!("cargo:rerun-if-changed=build.rs");
}
