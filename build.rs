fn main() {
    // Only the device build needs the esp-idf link environment; host builds
    // (tests) skip it. Features reach build scripts as env vars, not cfgs.
    if std::env::var_os("CARGO_FEATURE_ESPIDF").is_some() {
        embuild::espidf::sysenv::output();
    }
}
