use std::env;
use std::process;

use log::{error, info};

use test_deployer::prelude::*;

fn main() {
    let invocation = match parse_invocation(env::args_os()) {
        Ok(invocation) => invocation,
        Err(e) => {
            println!("{USAGE}");
            eprintln!("{e}");
            process::exit(1);
        }
    };

    if let Err(e) = init_logger(invocation.verbosity, invocation.log_file.as_deref()) {
        eprintln!("Failed to initialise logging: {e:#}");
        process::exit(1);
    }

    match deploy(&invocation) {
        Ok(Deployment::Written { output, tests }) => {
            info!("Wrote {tests} test(s) to {}", output.display());
            println!("{}", success_message(&invocation.source));
        }
        Ok(Deployment::Rendered(json)) => println!("{json}"),
        Err(e) => {
            error!("{e:#}");
            process::exit(1);
        }
    }
}
