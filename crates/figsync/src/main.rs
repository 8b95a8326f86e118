use figsync::cli::{self, CliError, EXIT_CLI, exit_code_for, render_error};
use figsync::tracing::{TracingConfig, TracingFormat, init_tracing};

#[tokio::main]
async fn main() {
    // NOTE: eprintln! in the panic hook is intentional, the subscriber may be
    // unusable during a panic.
    #[allow(clippy::print_stderr)]
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {panic_info}");
        eprintln!("Internal error occurred. Run with RUST_LOG=debug for more information.");
    }));

    let cli = cli::parse();

    let tracing_config = TracingConfig {
        format: if cli.json {
            TracingFormat::Json
        } else {
            TracingFormat::Dev
        },
        level: cli.level.into(),
    };
    if let Err(e) = init_tracing(tracing_config) {
        render_error(CliError::config(e.to_string()));
        std::process::exit(EXIT_CLI);
    }

    let exit_code = match figsync::execute(&cli).await {
        Ok(code) => code,
        Err(err) => {
            let code = exit_code_for(&err);
            render_error(err);
            code
        }
    };
    std::process::exit(exit_code);
}
