use hchrono::timepoint::Date;
use hholiday::{resolve, Holiday};

use super::{Cmd, SrcArgs};

// -----------------------------------------------------------------------------
// Args
// -----------------------------------------------------------------------------
#[derive(Debug, clap::Args)]
pub struct Args {
    #[clap(flatten)]
    pub src: SrcArgs,

    /// Date to look up as YYYY-MM-DD. Defaults to today
    #[clap(short = 'd', long = "date")]
    pub date: Option<Date>,
}

impl Cmd for Args {
    fn run(&self) -> anyhow::Result<()> {
        let date = self.date.unwrap_or_else(Date::today);
        let holidays = self.src.load()?;

        let res = resolve(date, &holidays);
        for e in &res.rejected {
            log::warn!("Holiday is skipped: {e}");
        }
        if res.matches.is_empty() {
            println!("No holidays on {date}");
        }
        for h in &res.matches {
            println!("{}", describe(h));
        }
        Ok(())
    }
}

fn describe(h: &Holiday) -> String {
    let range = h
        .span()
        .map(|s| s.format_range())
        .unwrap_or_else(|_| format!("{} - {}", h.start_date, h.end_date));
    let recurring = if h.recurring { ", yearly" } else { "" };
    format!("{} [{}] {range}{recurring}", h.name, h.kind.label())
}
