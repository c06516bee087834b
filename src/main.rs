use std::{io, process};

use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use make_movie::*;

fn main() {
    let opt = args::Opt::parse();

    env_logger::Builder::new()
        .filter_level(opt.log_level())
        .format_timestamp(None)
        .init();

    if let Some(shell) = opt.completions {
        print_shell_completions(shell);
        return;
    }

    let job = opt
        .movie
        .job()
        .expect("clap requires <NAME> and <OUTPUT_NAME> unless --completions is given");

    let code = match gen::movie::main(&job, &opt.movie) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{}", e);
            e.exit_code()
        }
    };
    process::exit(code);
}

fn print_shell_completions(shell: Shell) {
    generate(
        shell,
        &mut args::Opt::command(),
        "make-movie",
        &mut io::stdout(),
    );
}
