use std::io;

fn main() {
    expeditions_cli::logging::init_logging();
    let code = expeditions_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
