fn main() {
    if let Err(err) = restgen::cli::run_cli() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
