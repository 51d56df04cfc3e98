#![warn(clippy::all)]

use anyhow::{anyhow, Result};
use sparse_life::{random_cells, App, Config, Driver, Settings};
use std::{cell::RefCell, io, rc::Rc, thread::sleep};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    sleep(Config::PROMPT_DELAY);
    let settings = Settings::prompt(&mut io::stdin().lock(), &mut io::stdout())?;
    info!(?settings, "settings accepted");

    let starting_cells = random_cells(settings.cell_count, Config::SEED_RADIUS, settings.seed);
    let driver = Rc::new(RefCell::new(Driver::new(starting_cells)));

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(Config::CANVAS_WIDTH, Config::CANVAS_HEIGHT))
            .with_resizable(false),
        ..Default::default()
    };
    let app_driver = Rc::clone(&driver);
    eframe::run_native(
        Config::WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(app_driver, settings.generations_per_second)))),
    )
    .map_err(|e| anyhow!("window system failure: {e}"))?;

    let summary = driver.borrow().summary();
    println!("{summary}");
    Ok(())
}
