use anyhow::Result;
use emoji2text::app::App;
use emoji2text::cli;

fn main() -> Result<()> {
    // Process CLI arguments first (before logging init for cleaner output)
    let runtime_options = match cli::process_cli() {
        cli::CliResult::Exit(code) => {
            if code == 0 {
                return Ok(());
            }
            std::process::exit(code);
        }
        cli::CliResult::Continue(options) => options,
    };
    // CLI --log-level flag takes highest precedence, then RUST_LOG, then config (applied later).
    emoji2text::debug::init_log_bridge(runtime_options.log_level);

    log::info!("Starting emoji2text");

    let result = App::new(runtime_options).and_then(|app| app.run());

    match result {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("emoji2text: error: {e:#}");
            std::process::exit(1);
        }
    }
}
