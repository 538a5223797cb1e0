mod bootstrap;
mod report;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use tourism_core::constants::BASE_YEAR;
use tourism_core::settings::{LastUsedParams, Settings};
use tourism_data::context::DataContext;
use tourism_ui::app::App;

#[tokio::main]
async fn main() -> Result<()> {
    let mut settings = Settings::load_with_last_used();

    let app_dir = bootstrap::ensure_directories()?;
    let log_file = settings.log_file.clone().or_else(|| {
        (settings.view == "dashboard").then(|| bootstrap::default_log_file(&app_dir))
    });
    bootstrap::setup_logging(&settings.log_level, log_file.as_deref())?;

    tracing::info!("Tourism Dashboard v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "View: {}, Theme: {}, Period: {}-{:02}",
        settings.view,
        settings.theme,
        settings.year,
        settings.month
    );

    let cwd = std::env::current_dir()?;
    let data_path = bootstrap::discover_data_path(settings.data_path.as_deref(), &cwd, &app_dir)
        .with_context(|| {
            format!(
                "no tourism data found; pass --data-path or place {} in the working directory",
                bootstrap::DEFAULT_DATA_FILE
            )
        })?;

    // Parsing a large export is CPU-bound; keep it off the async workers.
    let load_path = data_path.clone();
    let ctx = tokio::task::spawn_blocking(move || DataContext::load(&load_path))
        .await
        .context("data loading task failed")?
        .with_context(|| format!("failed to load {}", data_path.display()))?;

    let year = settings.year_offset();
    let month = settings.month;

    match settings.view.as_str() {
        "json" => {
            let summary = ctx.summary(year, month);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }

        "summary" => {
            print!("{}", report::render_summary_text(&ctx.summary(year, month)));
        }

        _ => {
            tracing::info!("Starting interactive dashboard...");
            let app = App::new(&settings.theme, year, month, ctx.available_years());

            // Blocking crossterm loop. Ctrl+C only raises the stop flag; the
            // loop restores the terminal on its way out.
            let stop = Arc::new(AtomicBool::new(false));
            let loop_stop = Arc::clone(&stop);
            let mut ui = tokio::task::spawn_blocking(move || {
                let mut app = app;
                let result = app.run(&ctx, &loop_stop);
                (app, result)
            });

            let joined = tokio::select! {
                joined = &mut ui => joined,
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Ctrl+C received; shutting down");
                    stop.store(true, Ordering::Relaxed);
                    ui.await
                }
            };
            let (app, result) = joined.context("dashboard task failed")?;

            if !settings.clear {
                settings.year = BASE_YEAR + app.year_offset;
                settings.month = app.month;
                let path = LastUsedParams::config_path();
                if let Err(e) = LastUsedParams::from(&settings).save_to(&path) {
                    tracing::warn!(error = %e, "failed to persist last viewed period");
                }
            }

            result.context("terminal error")?;
        }
    }

    Ok(())
}
