use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;

use termfolio_content::default_boot_script;
use termfolio_content::register_portfolio_commands;
use termfolio_content::StaticPortfolio;
use termfolio_core::config::BootConfig;
use termfolio_core::config::Config;
use termfolio_core::prefs::JsonFilePrefs;
use termfolio_core::register_shell_commands;
use termfolio_core::CommandEngine;
use termfolio_core::CommandRegistry;
use termfolio_core::Session;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod ui;

const CONFIG_FILE: &str = "termfolio.toml";
const PREFS_FILE: &str = "preferences.json";
const LOG_FILE: &str = "termfolio.log";

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let options = match parse_args(env::args().skip(1).collect())? {
        Invocation::Help => {
            print_help();
            return Ok(());
        }
        Invocation::Version => {
            println!("termfolio {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Invocation::Run(options) => options,
    };

    let dir = config_dir();
    init_logging(&dir)?;

    let mut config = load_config(options.config.as_deref(), &dir.join(CONFIG_FILE))?;
    if options.fast_boot {
        config.boot = BootConfig::fast();
    }
    if options.no_boot {
        config.boot.enabled = false;
    }

    let prefs_path = options.prefs.unwrap_or_else(|| dir.join(PREFS_FILE));
    let mut session = Session::new(JsonFilePrefs::open(&prefs_path));
    if let Some(code) = options.locale.as_deref() {
        session.set_locale(code)?;
        session.take_events();
    }

    let portfolio = match options.content.as_deref() {
        Some(path) => StaticPortfolio::load(path)?,
        None => StaticPortfolio::default(),
    };
    let mut registry = CommandRegistry::new();
    register_shell_commands(&mut registry);
    register_portfolio_commands(&mut registry, Arc::new(portfolio));
    let engine = CommandEngine::new(registry).with_prompt(config.terminal.prompt.clone());

    info!(
        prefs = %prefs_path.display(),
        theme = session.theme().active().name,
        locale = %session.locale().current(),
        "starting termfolio"
    );
    let app = ui::App::new(engine, session, config, default_boot_script());
    ui::run(app)
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    config: Option<PathBuf>,
    prefs: Option<PathBuf>,
    content: Option<PathBuf>,
    locale: Option<String>,
    no_boot: bool,
    fast_boot: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Invocation {
    Help,
    Version,
    Run(Options),
}

fn parse_args(args: Vec<String>) -> Result<Invocation, Box<dyn std::error::Error>> {
    let mut options = Options::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" | "help" => return Ok(Invocation::Help),
            "--version" | "-V" | "version" => return Ok(Invocation::Version),
            "--no-boot" => options.no_boot = true,
            "--fast-boot" => options.fast_boot = true,
            "--config" | "--prefs" | "--content" | "--locale" => {
                let Some(value) = args.next() else {
                    return Err(format!("{arg} requires a value").into());
                };
                match arg.as_str() {
                    "--config" => options.config = Some(PathBuf::from(value)),
                    "--prefs" => options.prefs = Some(PathBuf::from(value)),
                    "--content" => options.content = Some(PathBuf::from(value)),
                    _ => options.locale = Some(value),
                }
            }
            other => {
                print_help();
                return Err(format!("unsupported argument: {other}").into());
            }
        }
    }
    Ok(Invocation::Run(options))
}

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("termfolio")
}

/// An explicit path must exist; the default one is optional.
fn load_config(
    explicit: Option<&Path>,
    default_path: &Path,
) -> Result<Config, Box<dyn std::error::Error>> {
    let path = match explicit {
        Some(path) => path,
        None if default_path.exists() => default_path,
        None => return Ok(Config::default()),
    };
    let raw = fs::read_to_string(path)
        .map_err(|err| format!("failed to read {}: {err}", path.display()))?;
    let config = toml::from_str(&raw)
        .map_err(|err| format!("invalid config {}: {err}", path.display()))?;
    Ok(config)
}

/// Logs go to a file: the terminal itself is the UI.
fn init_logging(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(dir)?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| format!("failed to install logger: {err}"))?;
    Ok(())
}

fn print_help() {
    println!("termfolio {}", env!("CARGO_PKG_VERSION"));
    println!("Usage:");
    println!("  termfolio [--config PATH] [--prefs PATH] [--content PATH]");
    println!("            [--locale en|pt] [--no-boot] [--fast-boot]");
    println!("  termfolio --help");
    println!("  termfolio --version");
    println!();
    println!("Keys: Enter run, Up/Down history, Left/Right pages, Esc close panel,");
    println!("      Tab cycle commands, F2 switch language, Ctrl-C quit");
}
