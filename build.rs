fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();

    // Also set as environment variable for use in env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Relay credentials are compiled in with option_env!
    for var in ["EMAILJS_SERVICE_ID", "EMAILJS_TEMPLATE_ID", "EMAILJS_PUBLIC_KEY"] {
        println!("cargo:rerun-if-env-changed={}", var);
    }

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
