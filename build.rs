fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Stamped into the startup banner of the replay binary
    let stamp = chrono::Utc::now().format("%Y-%m-%d %H:%M UTC");
    println!("cargo:rustc-env=BUILD_DATE={stamp}");
}
