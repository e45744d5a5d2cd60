use word_search::cli::{parse_cli, run};
use word_search::logging;

fn main() {
    let cli = parse_cli();
    logging::init(cli.verbose);
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
