//! Binary entrypoint for iifewrap-cli.

fn main() {
    if let Err(err) = iifewrap_cli::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
