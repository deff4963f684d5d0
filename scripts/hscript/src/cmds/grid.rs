use std::{fmt::Write, path::PathBuf};

use anyhow::Context;
use hchrono::timepoint::{Date, YearMonth};
use hholiday::month::{HolidayMonth, PreviewConfig};

use super::{Cmd, SrcArgs};

const WEEKDAY_HEADER: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

// -----------------------------------------------------------------------------
// Args
// -----------------------------------------------------------------------------
#[derive(Debug, clap::Args)]
pub struct Args {
    #[clap(flatten)]
    pub src: SrcArgs,

    /// Month to show as YYYY-MM. Defaults to the month of today
    #[clap(short = 'm', long = "month")]
    pub month: Option<YearMonth>,

    /// Months to move from `month`, negative to go back
    #[clap(long = "offset", default_value_t = 0, allow_hyphen_values = true)]
    pub offset: i64,

    /// Date treated as today as YYYY-MM-DD. Defaults to the local date
    #[clap(long = "today")]
    pub today: Option<Date>,

    /// JSON file of display options, e.g. `{"max_per_cell": 5}`
    #[clap(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Holidays listed per date before collapsing into "+N more". Overrides `--config`
    #[clap(long = "max-per-cell")]
    pub max_per_cell: Option<usize>,

    /// Print the grid as JSON
    #[clap(long = "json")]
    pub json: bool,
}

impl Cmd for Args {
    fn run(&self) -> anyhow::Result<()> {
        let today = self.today.unwrap_or_else(Date::today);
        let base = self.month.unwrap_or_else(|| YearMonth::of(today));
        let month = base
            .add_months(self.offset)
            .with_context(|| format!("{base} moved by {} months is out of range", self.offset))?;
        let config = self.preview_config()?;
        log::debug!("{config:?}");

        let holidays = self.src.load()?;
        let view = HolidayMonth::build(month, today, &holidays)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&to_json(&view))?);
        } else {
            print!("{}", render(&view, &config)?);
        }
        Ok(())
    }
}

impl Args {
    fn preview_config(&self) -> anyhow::Result<PreviewConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let s = std::fs::read_to_string(path)
                    .with_context(|| format!("read config file {:?}", path))?;
                serde_json::from_str::<PreviewConfig>(&s)
                    .with_context(|| format!("parse config file {:?}", path))?
            }
            None => PreviewConfig::default(),
        };
        if let Some(n) = self.max_per_cell {
            config.max_per_cell = n;
        }
        Ok(config)
    }
}

// -----------------------------------------------------------------------------
// render
// -----------------------------------------------------------------------------
/// Text rendering of a month.
///
/// Dates outside the month are in parentheses, today is marked with `*`
/// and dates with holidays with `+`. The holiday previews follow the grid.
fn render(view: &HolidayMonth<'_>, config: &PreviewConfig) -> anyhow::Result<String> {
    let mut out = String::new();
    let title = match view.year_month().first_day() {
        Some(d) => d.format("%B %Y").to_string(),
        None => view.year_month().to_string(),
    };
    writeln!(out, "{title}")?;
    let header = WEEKDAY_HEADER.map(|s| format!("{s:>4}  ")).join("");
    writeln!(out, "{}", header.trim_end())?;

    let cells = view.cells().collect::<Vec<_>>();
    for week in cells.chunks(7) {
        for cell in week {
            let day = cell.day.date.day();
            let label = if cell.day.is_current_month {
                format!("{day:>2}")
            } else {
                format!("({day})")
            };
            let today = if cell.day.is_today { "*" } else { " " };
            let hit = if cell.holidays.is_empty() { " " } else { "+" };
            write!(out, "{label:>4}{today}{hit}")?;
        }
        // markers of the last column
        let trimmed = out.trim_end_matches(' ').len();
        out.truncate(trimmed);
        writeln!(out)?;
    }

    for cell in cells.iter().filter(|c| !c.holidays.is_empty()) {
        let preview = cell.preview(config.max_per_cell);
        writeln!(out)?;
        writeln!(out, "{}", cell.day.date)?;
        for h in preview.shown {
            writeln!(out, "  - {} [{}]", h.name, h.kind.label())?;
        }
        if 0 < preview.more {
            writeln!(out, "  +{} more", preview.more)?;
        }
    }
    Ok(out)
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonCell<'a> {
    #[serde(flatten)]
    day: hchrono::grid::CalendarDay,
    holidays: Vec<&'a hholiday::Holiday>,
}

#[derive(Debug, serde::Serialize)]
struct JsonMonth<'a> {
    month: YearMonth,
    days: Vec<JsonCell<'a>>,
}

fn to_json<'a>(view: &HolidayMonth<'a>) -> JsonMonth<'a> {
    JsonMonth {
        month: view.year_month(),
        days: view
            .cells()
            .map(|c| JsonCell {
                day: *c.day,
                holidays: c.holidays.to_vec(),
            })
            .collect(),
    }
}
