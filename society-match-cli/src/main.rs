//! Entry point for the society-match command-line interface.
#![forbid(unsafe_code)]

#[expect(
    clippy::print_stderr,
    reason = "The binary reports fatal errors on stderr before exiting"
)]
fn main() {
    if let Err(err) = society_match_cli::run() {
        eprintln!("society-match: {err}");
        std::process::exit(1);
    }
}
