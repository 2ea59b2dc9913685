use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use cardfill_admin::console::logging;
use cardfill_admin::{
    build_screens, load_settings, run, Console, LogDestination, ScreenKind, SettingsOverrides,
};
use cardfill_logging::admin_info;
use cardfill_store::{demo_snapshot, Database};
use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(
    name = "cardfill-admin",
    about = "Admin list screens for the card auto-fill platform"
)]
struct Cli {
    /// JSON snapshot to read (overrides `data_file` in the settings).
    #[arg(long)]
    data: Option<PathBuf>,
    /// Use built-in demo data instead of a snapshot file.
    #[arg(long, conflicts_with = "data")]
    demo: bool,
    /// Screen to open first.
    #[arg(long, value_enum)]
    screen: Option<ScreenKind>,
    /// Page size for every screen (overrides the settings).
    #[arg(long)]
    page_size: Option<usize>,
    /// RON settings file.
    #[arg(long, default_value = cardfill_admin::SETTINGS_FILENAME)]
    settings: PathBuf,
    #[arg(long, value_enum)]
    log: Option<LogDestination>,
    /// Write the loaded data to this snapshot file and exit.
    #[arg(long)]
    export: Option<PathBuf>,
    /// Log at debug level.
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = load_settings(&cli.settings)?;
    settings.apply_overrides(SettingsOverrides {
        data_file: cli.data,
        start_screen: cli.screen,
        page_size: cli.page_size,
        log: cli.log,
    });

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logging::initialize(settings.log, level);

    let db = if cli.demo {
        Database::in_memory(demo_snapshot())
    } else {
        match &settings.data_file {
            Some(path) => Database::open(path)
                .with_context(|| format!("opening database {}", path.display()))?,
            None => bail!("no data file configured; pass --data <FILE> or --demo"),
        }
    };

    if let Some(path) = cli.export {
        db.export(&path)
            .with_context(|| format!("exporting to {}", path.display()))?;
        println!("Exported snapshot to {}", path.display());
        return Ok(());
    }

    let db = Rc::new(db);
    let screens = build_screens(&db, &settings).context("building list screens")?;
    admin_info!(
        "Starting console on screen {}",
        settings.start_screen.name()
    );
    let mut console = Console::new(screens, settings.start_screen);

    let stdin = io::stdin();
    run(&mut console, stdin.lock(), io::stdout().lock())
        .context("console i/o")?;
    Ok(())
}
