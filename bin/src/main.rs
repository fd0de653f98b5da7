use build::{BuildError, Builder};
use content::{SiteConfig, ROSTER};
use log::LevelFilter;
use std::{path::PathBuf, process::exit, time::Instant};

fn main() {
    let mut args = std::env::args().skip(1);
    let mut config_path: Option<PathBuf> = None;
    let mut validate = true;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-v" | "--version" => return print_version(),
            "-h" | "--help" => return print_help(),
            "-c" | "--config" => match args.next() {
                Some(path) => config_path = Some(PathBuf::from(path)),
                None => {
                    eprintln!("{} expects a path", arg);
                    exit(1);
                }
            },
            "--no-validate" => validate = false,
            _ => {
                eprintln!("unknown option: {}", arg);
                exit(1);
            }
        }
    }

    // fixed level: the build reads no environment
    pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Info)
        .init();

    let mut config = match config_path {
        Some(path) => match SiteConfig::read(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("\x1b[38;5;197m{}\x1b[0m", e);
                exit(1);
            }
        },
        None => SiteConfig::default(),
    };
    config.validate &= validate;

    let now = Instant::now();
    let builder = Builder::new(&config, ROSTER);
    match builder.build() {
        Ok(_) => println!(
            "\x1b[38;5;47mGenerated {} pages into: {:?}\x1b[0m (in {}ms)",
            builder.urls().len(),
            config.output_dir,
            now.elapsed().as_millis()
        ),
        Err(e) => {
            report(&e);
            exit(1);
        }
    }
}

fn report(err: &BuildError) {
    eprintln!("\x1b[38;5;197m{}\x1b[0m", err);
    match err {
        BuildError::Validation(violations) => {
            for v in violations {
                eprintln!("  - {}", v);
            }
        }
        BuildError::Io { source, .. } => eprintln!("  {}", source),
        _ => {}
    }
}

fn print_version() {
    println!("sitegen v{}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    print!(
        "Usage: sitegen [options]
        Builds the site into ./public using the compiled-in configuration.
        No options are required.

        Options:
        -c, --config <path>          Optional. Override compiled-in keys from a TOML file
        --no-validate                Skip the post-build SEO checks
        -v, --version                Print version.
        -h, --help                   Show this message.
        ",
    );
}
