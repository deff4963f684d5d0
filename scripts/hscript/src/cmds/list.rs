use hchrono::timepoint::Date;
use hholiday::{
    listing::{available_years, upcoming, HolidayFilter, HolidayStats, UPCOMING_LIMIT},
    Holiday, HolidayType,
};

use super::{Cmd, SrcArgs};

// -----------------------------------------------------------------------------
// Args
// -----------------------------------------------------------------------------
#[derive(Debug, clap::Args)]
pub struct Args {
    #[clap(flatten)]
    pub src: SrcArgs,

    /// Case-insensitive text searched in names and descriptions
    #[clap(short = 's', long = "search")]
    pub search: Option<String>,

    /// One of public, school, religious and cultural
    #[clap(short = 't', long = "type")]
    pub kind: Option<HolidayType>,

    /// Year of the start date
    #[clap(short = 'y', long = "year")]
    pub year: Option<i32>,

    /// Date treated as today as YYYY-MM-DD. Defaults to the local date
    #[clap(long = "today")]
    pub today: Option<Date>,

    /// Show the upcoming holidays instead of the filtered list
    #[clap(long = "upcoming")]
    pub upcoming: bool,

    /// Print summary figures as JSON after the list
    #[clap(long = "stats")]
    pub stats: bool,
}

impl Args {
    fn filter(&self) -> HolidayFilter {
        HolidayFilter {
            search: self.search.clone(),
            kind: self.kind,
            year: self.year,
        }
    }
}

impl Cmd for Args {
    fn run(&self) -> anyhow::Result<()> {
        let today = self.today.unwrap_or_else(Date::today);
        let holidays = self.src.load()?;

        let shown = if self.upcoming {
            upcoming(&holidays, today, UPCOMING_LIMIT)
        } else {
            self.filter().apply(&holidays)
        };
        log::info!(
            "{} of {} holidays shown. Years: {:?}",
            shown.len(),
            holidays.len(),
            available_years(&holidays)
        );
        for h in &shown {
            println!("{}", line(h));
        }

        if self.stats {
            let stats = HolidayStats::of(&holidays, today);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        Ok(())
    }
}

fn line(h: &Holiday) -> String {
    let (range, days) = match h.span() {
        Ok(span) => (span.format_range(), span.num_days()),
        Err(e) => {
            log::warn!("{e}");
            return format!("{} [{}] invalid dates", h.name, h.kind.label());
        }
    };
    let unit = if days == 1 { "day" } else { "days" };
    let recurring = if h.recurring { " (recurring)" } else { "" };
    format!(
        "{} [{}] {range}, {days} {unit}{recurring}",
        h.name,
        h.kind.label()
    )
}
