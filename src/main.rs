use clap::Parser;
use navstack::EvictionPolicy;
use navstack::core::config::{self, CliOverrides, EnvOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "navstack", about = "Navigation stack demo shell")]
struct Args {
    /// Ignore every navigation call, as a design-time preview would
    #[arg(long)]
    preview: bool,

    /// What to do with payloads and registered views once their screen is gone
    #[arg(long, value_enum)]
    eviction: Option<EvictionArg>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum EvictionArg {
    Retain,
    #[value(alias = "on_leave")]
    OnLeave,
}

impl From<EvictionArg> for EvictionPolicy {
    fn from(arg: EvictionArg) -> Self {
        match arg {
            EvictionArg::Retain => EvictionPolicy::Retain,
            EvictionArg::OnLeave => EvictionPolicy::OnLeave,
        }
    }
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config();
    let resolved = config::resolve(
        file_config.as_ref().unwrap_or(&config::NavConfig::default()),
        &EnvOverrides::from_process(),
        CliOverrides {
            preview: args.preview,
            eviction: args.eviction.map(Into::into),
        },
    );

    // Initialize file logger - a TUI can't log to stdout
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    if let Err(e) = &file_config {
        log::warn!("Using default config: {}", e);
    }
    log::info!("navstack starting with {:?}", resolved);

    navstack::tui::run(resolved)
}
