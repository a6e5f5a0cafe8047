use ipv4_subnet_toolkit::config::Config;
use ipv4_subnet_toolkit::SubnetReport;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const USAGE: &str = "usage: ipv4-subnet-toolkit <address> [prefix] [candidate] [--json]";

#[derive(Debug)]
struct Args {
    address: String,
    prefix: Option<u8>,
    candidate: Option<String>,
    json: bool,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Args, Box<dyn Error>> {
    let (flags, positional): (Vec<String>, Vec<String>) =
        args.partition(|arg| arg.starts_with("--"));

    let mut json = false;
    for flag in flags {
        match flag.as_str() {
            "--json" => json = true,
            _ => return Err(format!("Unknown flag {flag}\n{USAGE}").into()),
        }
    }

    let mut positional = positional.into_iter();
    let address = positional.next().ok_or(USAGE)?.trim().to_string();
    let prefix = match positional.next() {
        Some(prefix) => Some(
            prefix
                .trim()
                .trim_start_matches('/')
                .parse::<u8>()
                .map_err(|e| format!("Invalid prefix {prefix}: {e}"))?,
        ),
        None => None,
    };
    let candidate = positional.next().map(|c| c.trim().to_string());
    if let Some(extra) = positional.next() {
        return Err(format!("Unexpected argument {extra}\n{USAGE}").into());
    }

    Ok(Args {
        address,
        prefix,
        candidate,
        json,
    })
}

fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    if Path::new(&config.log_config).exists() {
        log4rs::init_file(&config.log_config, Default::default())?;
        return Ok(());
    }
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l:5})} {t} - {m}{n}")))
        .build();
    let log_config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(config.log_level))?;
    log4rs::init_config(log_config)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;
    init_logging(&config)?;
    log::info!("#Start main()");

    let args = parse_args(std::env::args().skip(1)).map_err(|e| {
        log::error!("{e}");
        e
    })?;
    log::debug!("args={args:?} config={config:?}");

    let prefix = args.prefix.unwrap_or(config.default_prefix);
    let report = SubnetReport::build(&args.address, prefix, args.candidate.as_deref())
        .map_err(|e| {
            log::error!("{e}");
            e
        })?;

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        for row in report.to_table() {
            println!("{row}");
        }
    }

    Ok(())
}
