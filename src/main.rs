use anyhow::Result;
use swipelist::config::Config;
use swipelist::logger::Logger;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // Handle --generate-config before anything touches the terminal
    if let Some(path) = flag_value(&args, "--generate-config") {
        return Config::generate_default_config(path);
    }

    let config = match flag_value(&args, "--config") {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    let logger = Logger::from_config(&config.logging)?;
    log::info!(
        "Starting swipelist (threshold {}px, action width {}px)",
        config.swipe.threshold,
        config.swipe.action_width
    );

    // Run the TUI application
    swipelist::ui::run_app(config, logger).await?;

    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|index| args.get(index + 1))
        .map(String::as_str)
}
