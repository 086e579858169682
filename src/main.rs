use clap::Parser;
use quickorder::app::run;
use quickorder::config::{load_dotenv, Credentials};
use quickorder::types::*;
use quickorder::util::*;
use std::process::ExitCode;

fn main() -> ExitCode {
    // parse arguments via clap
    let cmd_args = CommandlineArgs::parse();
    init_logging(cmd_args.verbose);
    load_dotenv();

    println!("{}", render_banner());

    let stdin = std::io::stdin();
    match run(&cmd_args, Credentials::from_env, stdin.lock(), std::io::stdout()) {
        Ok(()) => StatusCode::Success.into(),
        Err(e) => {
            print_error_if_necessary(&e);
            e.status_code().into()
        }
    }
}
