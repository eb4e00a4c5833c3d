//! Item Forge - terminal entry point.
//!
//! Loads the schema (offering key corrections on the terminal), loads the
//! records and prints what a front end would show on its first frame.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use itemforge_engine::api::render_config_error;
use itemforge_engine::infrastructure::{
    config::{load_dotenv_files, EngineConfig},
    terminal_prompt::TerminalConfirm,
};
use itemforge_engine::{App, AppError};

fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    load_dotenv_files(&cwd);

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "itemforge_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = EngineConfig::from_env();
    let app = match App::bootstrap(&config, Arc::new(TerminalConfirm::stdin())) {
        Ok(app) => app,
        Err(AppError::Config(e)) => {
            tracing::error!(error = %e, "Schema could not be loaded");
            eprintln!("{}", render_config_error(&e));
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    for message in app.startup_messages() {
        println!("{}", message);
    }

    let session = &app.session;
    println!("Categories: {}", session.list_categories().join(", "));
    println!("Active category: {}", session.active_category());
    for view in session.field_views() {
        println!("  {} {}", view.label, view.placeholder);
    }

    let records = session.list_records();
    println!("Records ({}):", records.len());
    for (index, label) in records.iter().enumerate() {
        println!("  {:>3}. {}", index + 1, label);
    }

    match session.latest_as_json()? {
        Some(json) => println!("Latest record:\n{}", json),
        None => println!("No records yet."),
    }

    Ok(())
}
