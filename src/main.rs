// std imports
use std::{
    io::{BufWriter, ErrorKind, stdout},
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use bmatch::{
    Compiler,
    app::{App, Options},
    cli, config,
    error::*,
    input::InputReference,
    settings::Settings,
};

const BMATCH_DEBUG_LOG: &str = "BMATCH_DEBUG_LOG";
const BMATCH_DEBUG_LOG_STYLE: &str = "BMATCH_DEBUG_LOG_STYLE";

// ---

fn bootstrap() -> Result<Settings> {
    if std::env::var(BMATCH_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(BMATCH_DEBUG_LOG).write_style(BMATCH_DEBUG_LOG_STYLE))
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }

    let opt = cli::BootstrapOpt::parse().args;

    let settings = config::load(opt.config)?;
    config::global::initialize(settings.clone());

    Ok(settings)
}

fn run() -> Result<()> {
    let settings = bootstrap()?;

    let opt = cli::Opt::parse_from(wild::args());

    if opt.explain {
        println!("{}", bmatch::explain(&opt.expr)?);
        return Ok(());
    }

    let matcher = Compiler::new().max_depth(opt.max_depth).compile(&opt.expr)?;
    let app = App::new(
        matcher,
        Options {
            lower: opt.lower_enabled(&settings),
        },
    );

    let mut inputs: Vec<InputReference> = opt.files.into_iter().map(InputReference::from).collect();
    if inputs.is_empty() {
        inputs.push(InputReference::Stdin);
    }

    log::debug!("run the app with {} inputs", inputs.len());

    let mut output = BufWriter::new(stdout().lock());
    match app.run(&inputs, &mut output) {
        Ok(()) => Ok(()),
        Err(Error::Io(ref e)) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err),
    }
}

fn main() {
    if let Err(err) = run() {
        err.log();
        process::exit(1);
    }
}
