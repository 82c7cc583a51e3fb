fn main() {
    println!("cargo::rustc-check-cfg=cfg(tracing_pretty)");
    println!("cargo::rerun-if-env-changed=BRANDMASKA_LOG_PRETTY");
    if std::env::var("BRANDMASKA_LOG_PRETTY").is_ok_and(|value| value == "1") {
        println!("cargo::rustc-cfg=tracing_pretty");
    }
}
