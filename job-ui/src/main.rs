use std::path::PathBuf;

use clap::Parser;
use gpui::{
    App, AppContext, Application, Bounds, Pixels, Size, WindowBounds, WindowOptions, px, size,
};
use gpui_component::Root;
use tracing::{debug, error};

use job_ui::{
    components::AppWindow,
    logging::{LoggingConfig, init_logging},
    setup_app,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Job registration form with inline validation and a summary dialog.
#[derive(Debug, Parser)]
struct Cli {
    /// Log filter, e.g. `debug` or `info,job_core=trace`. Overrides `RUST_LOG`.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Do not write log records to stdout.
    #[arg(long)]
    no_stdout_log: bool,

    /// Initial window width in pixels.
    #[arg(long, default_value_t = 800.0)]
    width: f32,

    /// Initial window height in pixels.
    #[arg(long, default_value_t = 900.0)]
    height: f32,
}

impl Cli {
    fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            file: self.log_file.clone(),
            stdout: !self.no_stdout_log,
        }
    }

    fn window_size(&self) -> Size<Pixels> {
        size(px(self.width), px(self.height))
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.logging())?;
    debug!(?cli, "starting");

    let window_size = cli.window_size();

    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx: &mut App| {
            setup_app(cx);

            let options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                    None,
                    window_size,
                    cx,
                ))),
                ..Default::default()
            };

            let opened = cx.open_window(options, |window, cx| {
                let view = cx.new(|view_cx| AppWindow::new(window, view_cx));
                cx.new(|root_cx| Root::new(view, window, root_cx))
            });

            if let Err(error) = opened {
                error!(?error, "failed to open main window");
                cx.quit();
            }
        });

    Ok(())
}
