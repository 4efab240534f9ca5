use blockquiz_config::Config;
use blockquiz_engine::{Cmd, Mode, io};
use dioxus::prelude::*;
use std::env;
use std::path::PathBuf;
use std::process;

mod ui;

use ui::App;
use ui::components::ErrorScreen;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("blockquiz starting up!");

    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    let mut config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Config::load() failed with error: {e}");
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    // Determine the document path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => log::info!(
            "Using document path from config: {}",
            config.document_path.display()
        ),
        2 => {
            config.document_path = PathBuf::from(&args[1]);
            log::info!(
                "Using document path from CLI argument: {}",
                config.document_path.display()
            );
        }
        _ => {
            let program_name = args.first().map(String::as_str).unwrap_or("blockquiz");
            eprintln!("Usage: {program_name} [document-path]");
            eprintln!("Or set document_path in {}", config_path.display());
            process::exit(1);
        }
    }

    log::info!("About to launch Dioxus app for desktop");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .with_context(config)
        .launch(app_root);
}

fn app_root() -> Element {
    let config = use_context::<Config>();

    let loaded = use_hook(|| {
        io::load_document(&config.document_path, config.mcq_dialect)
            .map(|mut document| {
                // The editor always opens in edit mode
                document.apply(Cmd::SetMode(Mode::Edit));
                document
            })
            .map_err(|e| e.to_string())
    });

    match loaded {
        Ok(document) => rsx! {
            App { config, initial: document }
        },
        Err(e) => {
            log::error!("Failed to open {}: {e}", config.document_path.display());
            rsx! {
                ErrorScreen {
                    title: "Could not open document".to_string(),
                    message: config.document_path.display().to_string(),
                    details: Some(e)
                }
            }
        }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("blockquiz")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
