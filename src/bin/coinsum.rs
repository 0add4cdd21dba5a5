use clap::clap_app;
use coinsum::{Ledger, Options};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_FILE: &str = "coins";

fn main() {
    let matches = clap_app!(coinsum =>
        (version: VERSION)
        (about: "Totals a plain-text coin ledger file")
        (@arg FILE: "Ledger file (default \"coins\"); a single character here is taken as the delimiter instead")
        (@arg TOKEN: "Field delimiter, a single non-reserved character (default \":\")")
    )
    .get_matches();

    let (file, token) = match (matches.value_of("FILE"), matches.value_of("TOKEN")) {
        (None, None) => (DEFAULT_FILE, None),
        (Some(arg), None) if arg.chars().count() == 1 => (DEFAULT_FILE, Some(arg)),
        (Some(file), token) => (file, token),
        (None, Some(_)) => unreachable!(),
    };

    let options = match token {
        Some(candidate) => Options::with_token(candidate),
        None => Ok(Options::default()),
    };

    match options.and_then(|options| Ledger::from_file(file, &options)) {
        Ok(ledger) => println!("{}", ledger.total()),
        Err(error) if error.is_input() => println!("{}", error),
        Err(error) => {
            println!("Unhandled error");
            panic!("{}", error);
        }
    }
}
