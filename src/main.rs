mod fonts;
mod grid;
mod lifespan;
mod logging;
mod prompt;
mod render;
use crate::grid::TOTAL_WEEKS;
use crate::lifespan::{group_thousands, parse_birthdate, BirthdateError, WeeksLived};
use crate::prompt::{ask_birthdate, PromptError};
use crate::render::{write_calendar, DEFAULT_TITLE};
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use time::{Date, OffsetDateTime};

static BANNER_RULE: &str = "==================================================";

/// Set while the program is blocked waiting for a typed birthdate
static PROMPTING: AtomicBool = AtomicBool::new(false);

/// Exit status for a Ctrl-C received outside the prompt
const INTERRUPTED_STATUS: i32 = 130;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        birthdate: Option<String>,
        title: Option<String>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut birthdate = None;
        let mut title = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('b') | Arg::Long("birthdate") => {
                    birthdate = Some(parser.value()?.string()?);
                }
                Arg::Short('t') | Arg::Long("title") => {
                    title = Some(parser.value()?.string()?);
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run { birthdate, title })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run { birthdate, title } => {
                // The local offset can only be read while single-threaded, so
                // this has to happen before the Ctrl-C handler is installed.
                let today = today_from(OffsetDateTime::now_local())?;
                println!("{BANNER_RULE}");
                println!("Life Calendar Generator");
                println!("{BANNER_RULE}");
                println!();
                let birthdate = match birthdate {
                    Some(s) => parse_birthdate(&s, today)?,
                    None => {
                        install_interrupt_handler()?;
                        PROMPTING.store(true, Ordering::SeqCst);
                        // stdout stays unlocked so that the handler can print
                        let r = ask_birthdate(io::stdin().lock(), io::stdout(), today);
                        PROMPTING.store(false, Ordering::SeqCst);
                        match r {
                            Ok(date) => date,
                            Err(PromptError::InterruptedByUser) => {
                                print_cancelled();
                                return Ok(());
                            }
                            Err(e) => return Err(e.into()),
                        }
                    }
                };
                let title = title.unwrap_or_else(|| DEFAULT_TITLE.to_owned());
                generate(birthdate, today, &title)
            }
            Command::Help => {
                println!("Usage: life-calendar [-b YYYY-MM-DD] [-t TITLE]");
                println!();
                println!("Render your life in weeks as a printable one-page PDF calendar");
                println!();
                println!("Options:");
                println!("  -b, --birthdate <YYYY-MM-DD>");
                println!("                    Your birthdate; you will be prompted if omitted");
                println!("  -t, --title <TITLE>");
                println!("                    Title printed above the grid");
                println!("                    [default: {DEFAULT_TITLE}]");
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn today_from<E>(now: Result<OffsetDateTime, E>) -> anyhow::Result<Date>
where
    E: std::error::Error + Send + Sync + 'static,
{
    Ok(now.context("failed to determine local date")?.date())
}

fn print_cancelled() {
    println!();
    println!("Operation cancelled.");
}

/// Make Ctrl-C at the birthdate prompt a clean cancellation.  Anywhere else
/// it ends the program with the usual interrupted status.
#[allow(clippy::exit)]
fn install_interrupt_handler() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        if PROMPTING.load(Ordering::SeqCst) {
            tracing::debug!("Interrupted at prompt");
            print_cancelled();
            std::process::exit(0);
        }
        std::process::exit(INTERRUPTED_STATUS);
    })
    .context("failed to install Ctrl-C handler")
}

fn generate(birthdate: Date, today: Date, title: &str) -> anyhow::Result<()> {
    let weeks = WeeksLived::between(birthdate, today).ok_or(BirthdateError::FutureDate)?;
    tracing::debug!(%birthdate, %today, weeks = weeks.get(), "Resolved birthdate");
    let filename = format!("life_calendar_{birthdate}.pdf");
    println!();
    println!("Generating your life calendar...");
    write_calendar(Path::new(&filename), weeks, title)?;
    let percent = weeks.percent_of_span();
    println!("\u{2713} PDF saved as: {filename}");
    println!(
        "  You have lived {weeks} weeks out of {} possible weeks.",
        group_thousands(TOTAL_WEEKS)
    );
    println!("  That's {percent:.1}% of a 90-year life.");
    println!();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    logging::init()?;
    Command::from_parser(Parser::from_env())?.run()
}
