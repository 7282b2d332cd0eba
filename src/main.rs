use anyhow::{anyhow, Result};
use clap::{App, Arg};
use dlpage::build::build_page;
use dlpage::config::{default_scripts_directory, Config, Locale};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("dlpage error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = App::new("dlpage")
        .about("Generates a static HTML download page for a release")
        .arg(
            Arg::with_name("template")
                .help("Path to the HTML page template")
                .required(true),
        )
        .arg(
            Arg::with_name("tag-name")
                .help("Release tag, e.g. v1.2.3")
                .required(true),
        )
        .arg(
            Arg::with_name("release-name")
                .help("Human-readable release name")
                .required(true),
        )
        .arg(
            Arg::with_name("directory")
                .long("directory")
                .short("d")
                .takes_value(true)
                .default_value(".")
                .help("Release directory scanned for artifacts and receiving the page"),
        )
        .arg(
            Arg::with_name("locale")
                .long("locale")
                .takes_value(true)
                .default_value("en")
                .possible_values(&["en", "zh"])
                .help("Built-in locale for the page microcopy"),
        )
        .arg(
            Arg::with_name("locale-file")
                .long("locale-file")
                .takes_value(true)
                .help("YAML locale definition, overriding --locale"),
        )
        .arg(
            Arg::with_name("scripts-dir")
                .long("scripts-dir")
                .takes_value(true)
                .help("Directory holding the installer scripts (defaults to the executable's directory)"),
        )
        .get_matches();

    let locale = match matches.value_of("locale-file") {
        Some(path) => Locale::from_file(Path::new(path))?,
        None => {
            let name = matches.value_of("locale").unwrap_or("en");
            Locale::builtin(name)
                .ok_or_else(|| anyhow!("Unknown locale `{}`", name))?
        }
    };

    let scripts_directory = match matches.value_of("scripts-dir") {
        Some(dir) => PathBuf::from(dir),
        None => default_scripts_directory()?,
    };

    let config = Config {
        // the positionals are required; clap rejects invocations
        // without them before we get here
        template: PathBuf::from(matches.value_of("template").unwrap_or_default()),
        tag_name: matches.value_of("tag-name").unwrap_or_default().to_owned(),
        release_name: matches
            .value_of("release-name")
            .unwrap_or_default()
            .to_owned(),
        release_directory: PathBuf::from(matches.value_of("directory").unwrap_or(".")),
        scripts_directory,
        locale,
    };

    build_page(&config)?;
    Ok(())
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
