fn main() {
    if let Err(err) = nimdie::cli::main() {
        eprintln!("❌ {err}");
        std::process::exit(1);
    }
}
