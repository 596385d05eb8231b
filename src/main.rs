use std::env;
use std::io::{self, Write};
use std::process;

use linked_list_demo::{config, demo, logger};
use log::debug;


fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("linked-list-demo", |s| s.as_str());
    let opts = config::options();

    let config = match config::Config::from_args(&opts, args.iter().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprint!("{}", config::usage(program, &opts));
            process::exit(2);
        }
    };
    if config.show_help {
        print!("{}", config::usage(program, &opts));
        return;
    }

    if let Err(err) = logger::init_logger(config.log_level, config.log_file.as_deref()) {
        eprintln!("logging disabled: {}", err);
    }
    debug!("starting with {:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = demo::run(&mut out).and_then(|_| out.flush()) {
        eprintln!("writing demo output failed: {}", err);
        process::exit(1);
    }
}
