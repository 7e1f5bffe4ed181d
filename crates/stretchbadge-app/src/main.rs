//! Main application entry point (native).
//!
//! Usage: `stretchbadge [config.json]`

#[cfg(feature = "native")]
fn main() {
    use stretchbadge_app::{App, AppConfig};

    env_logger::init();
    log::info!("Starting Stretch Badge");

    let config = match std::env::args().nth(1) {
        Some(path) => match AppConfig::with_badge_file(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Invalid badge config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => AppConfig::default(),
    };

    pollster::block_on(App::run(config));
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
