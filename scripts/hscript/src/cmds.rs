pub mod grid;
pub mod list;
pub mod resolve;
pub mod schema;

use std::path::PathBuf;

use hholiday::{store::HolidaySrc, Holiday};

use crate::util::file_src::JsonFileSrc;

// -----------------------------------------------------------------------------
// Cmd
// -----------------------------------------------------------------------------
pub trait Cmd {
    fn run(&self) -> anyhow::Result<()>;
}

// -----------------------------------------------------------------------------
// Commands
// -----------------------------------------------------------------------------
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Print the calendar grid of a month with its holidays
    Grid(grid::Args),
    /// Print the holidays occurring on a date
    Resolve(resolve::Args),
    /// List holidays with filters, upcoming holidays and stats
    List(list::Args),
    /// Print or write JSON schemas of the data types
    Schema(schema::Args),
}

impl Cmd for Commands {
    fn run(&self) -> anyhow::Result<()> {
        match self {
            Commands::Grid(args) => args.run(),
            Commands::Resolve(args) => args.run(),
            Commands::List(args) => args.run(),
            Commands::Schema(args) => args.run(),
        }
    }
}

// -----------------------------------------------------------------------------
// SrcArgs
// -----------------------------------------------------------------------------
#[derive(Debug, clap::Args)]
pub struct SrcArgs {
    /// JSON file of holidays
    #[clap(short = 'H', long = "holidays")]
    pub holidays: PathBuf,

    /// Institution to pick when the file holds several institutions
    #[clap(short = 'I', long = "institution", default_value = "")]
    pub institution: String,
}

impl SrcArgs {
    pub fn load(&self) -> anyhow::Result<Vec<Holiday>> {
        let src = JsonFileSrc::new(&self.holidays);
        let holidays = src.list_holidays(&self.institution)?;
        log::info!("Loaded {} holidays from {:?}", holidays.len(), self.holidays);
        Ok(holidays)
    }
}
