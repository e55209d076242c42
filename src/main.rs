use crate::cli::config::{Config, parse_configs};
use crate::cli::err::PpErr;
use crate::cli::help::print_help;
use crate::cli::parse::{join_args, parse_token};
use crate::cli::build_pipeline;

mod cli;

fn main() {
    if let Err(e) = run() {
        e.termination();
    }
}

fn run() -> Result<(), PpErr> {
    let mut args = std::env::args().skip(1).peekable();
    let configs = parse_configs(&mut args);
    if configs.contains(&Config::Help) {
        let topic = args.next_if(|arg| !arg.starts_with([':', '-']));
        return print_help(topic.as_deref());
    }
    if configs.contains(&Config::Version) {
        println!("pp {} (built at {})", env!("CARGO_PKG_VERSION"), env!("PP_BUILD_TIME"));
        return Ok(());
    }
    let token = join_args(args);
    let (input, ops, output) = parse_token(&token)?;
    let configs: &'static [Config] = configs.leak();
    let stream = build_pipeline(input, ops, &output, configs)?;
    if configs.contains(&Config::DryRun) { Ok(()) } else { output.handle(stream) }
}
