fn main() {
    if let Err(e) = taptext::cli::main() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
