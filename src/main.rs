use std::path::{Path, PathBuf};
use std::process::ExitCode;

use winekeeper::config::load_settings;
use winekeeper::paths::PATH_SETTINGS;
use winekeeper::{CancelToken, Invocation, LaunchOptions, RuntimeManager, RuntimeResult};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("WINEKEEPER_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() || args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", USAGE_TEXT);
        return ExitCode::SUCCESS;
    }

    let mut settings_path = PATH_SETTINGS.clone();
    if let Some(index) = args.iter().position(|arg| arg == "--settings") {
        if index + 1 >= args.len() {
            eprintln!("{}", USAGE_TEXT);
            return ExitCode::FAILURE;
        }
        settings_path = PathBuf::from(args.remove(index + 1));
        args.remove(index);
    }

    let Some((command, rest)) = args.split_first() else {
        eprintln!("{}", USAGE_TEXT);
        return ExitCode::FAILURE;
    };

    match dispatch(&settings_path, command, rest) {
        Ok(Some(code)) => code,
        Ok(None) => {
            eprintln!("{}", USAGE_TEXT);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("winekeeper: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Run one subcommand; `Ok(None)` means the arguments did not match it
fn dispatch(settings_path: &Path, command: &str, rest: &[String]) -> RuntimeResult<Option<ExitCode>> {
    let settings = load_settings(settings_path);
    let mut manager = RuntimeManager::new(settings)?;

    match (command, rest) {
        ("ensure", []) => {
            manager.ensure_tool(&CancelToken::new())?;
            println!("runtime ready at {}", manager.settings().bin_dir().display());
        }
        ("reset-prefix", []) => {
            manager.reset_prefix()?;
            println!("prefix reset: {}", manager.settings().prefix_dir.display());
        }
        ("run", [_, ..]) => {
            let status = manager
                .run_in_prefix(Invocation::args(rest.iter().cloned()), LaunchOptions::default())?
                .wait()?;
            let code = status.code().unwrap_or(1).clamp(0, 255) as u8;
            return Ok(Some(ExitCode::from(code)));
        }
        ("pids", [exe]) => {
            for pid in manager.get_process_ids(exe)? {
                println!("{pid}");
            }
        }
        ("winepath", [path]) => {
            println!("{}", manager.unix_to_wine_path(Path::new(path))?);
        }
        ("reg-add", [key, value, data]) => {
            manager.add_registry_key(key, value, data)?;
        }
        ("kill", []) => {
            manager.kill()?;
        }
        _ => return Ok(None),
    }
    Ok(Some(ExitCode::SUCCESS))
}

static USAGE_TEXT: &str = r#"
Usage: winekeeper [--settings <file>] <COMMAND>

Commands:
    ensure                        Download and set up the runtime if it is missing
    reset-prefix                  Delete the prefix and create a fresh one
    run <args...>                 Run the runtime binary with the given arguments and wait
    pids <exe>                    List ids of prefix processes matching an executable name
    winepath <path>               Translate a host path to its Windows form
    reg-add <key> <value> <data>  Add a registry value in the prefix
    kill                          Terminate every process in the prefix

Options:
    --settings <file>   Settings JSON (default: $XDG_DATA_HOME/winekeeper/settings.json)

Environment:
    WINEKEEPER_LOG      Log filter, e.g. debug or winekeeper=trace
"#;
