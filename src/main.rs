//! Vertical farm calculator entry point: CLI wiring and scenario evaluation.

use std::process;

use clap::Parser;

use vfarm_calc::cli::CliOptions;
use vfarm_calc::io::export::export_csv;

fn main() {
    let cli = CliOptions::parse();

    // --scenario takes priority, then --preset, then baseline; overrides on top
    let scenario = match cli.load_scenario() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    #[cfg(feature = "tui")]
    if cli.tui {
        if let Err(e) = vfarm_calc::tui::run(scenario, &cli.source_label()) {
            eprintln!("error: TUI crashed: {e}");
            process::exit(1);
        }
        return;
    }

    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let evaluation = match scenario.evaluate() {
        Ok(eval) => eval,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    println!("{}", evaluation.summary);
    println!("\n{}", evaluation.schedule);

    if let Some(ref path) = cli.schedule_out {
        if let Err(e) = export_csv(&evaluation.schedule, path) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Schedule written to {}", path.display());
    }

    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(vfarm_calc::api::AppState {
            scenario,
            evaluation,
        });
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        if let Err(e) = rt.block_on(vfarm_calc::api::serve(state, addr)) {
            eprintln!("error: API server failed: {e}");
            process::exit(1);
        }
    }
}
