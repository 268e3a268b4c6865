#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use clap::Parser;
use fltk::app;

use poly_pad::app::state::AppState;
use poly_pad::app::{AppSettings, Message};
use poly_pad::cli::Args;

fn load_settings(args: &Args) -> AppSettings {
    let mut settings = match &args.settings {
        Some(path) => AppSettings::load_or_create(path),
        None => AppSettings::load(),
    };
    args.apply_to(&mut settings);
    settings
}

fn main() {
    let args = Args::parse();

    let env = env_logger::Env::default().default_filter_or(args.log_filter());
    env_logger::Builder::from_env(env).init();

    log::info!("Starting PolyPad");
    log::debug!("CLI args: {:?}", args);

    let settings = load_settings(&args);

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut state = AppState::new(settings, sender);
    state.start();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if !state.handle(msg) {
                app.quit();
            }
        }
    }

    log::info!("PolyPad exiting");
}
