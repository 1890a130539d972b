use chrono::{Local, NaiveDateTime};
use stint::{Context, format_delta, parse_bounds_with};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let now = config.now.unwrap_or_else(|| Local::now().naive_local());
    let ctx = Context::at(config.last, now);

    match parse_bounds_with(&config.spec, &ctx) {
        Ok(bounds) => {
            println!("since  {}", bounds.since);
            println!("until  {}", bounds.until);
            println!("delta  {}", format_delta(bounds.delta()));
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

struct CliConfig {
    spec: String,
    last: Option<NaiveDateTime>,
    now: Option<NaiveDateTime>,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut spec: Option<String> = None;
    let mut last: Option<NaiveDateTime> = None;
    let mut now: Option<NaiveDateTime> = None;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("stint {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--last" => {
                let value = args.next().ok_or_else(|| "error: --last expects a value".to_string())?;
                last = Some(parse_timestamp("--last", &value)?);
            }
            "--now" => {
                let value = args.next().ok_or_else(|| "error: --now expects a value".to_string())?;
                now = Some(parse_timestamp("--now", &value)?);
            }
            _ if arg.starts_with("--last=") => {
                last = Some(parse_timestamp("--last", arg.trim_start_matches("--last="))?);
            }
            _ if arg.starts_with("--now=") => {
                now = Some(parse_timestamp("--now", arg.trim_start_matches("--now="))?);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if spec.is_some() {
                    return Err("error: spec provided multiple times".to_string());
                }
                spec = Some(rest);
                break;
            }
            _ if arg.starts_with('-') && !is_spec_like(&arg) => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                if spec.is_some() {
                    return Err("error: spec provided multiple times".to_string());
                }
                spec = Some(arg);
            }
        }
    }

    // An absent spec means "since the previous fact ended, until now".
    Ok(CliConfig { spec: spec.unwrap_or_default(), last, now })
}

// "-5" or "-9..+5" is a valid spec, not an option.
fn is_spec_like(arg: &str) -> bool {
    arg.chars().nth(1).is_some_and(|c| c.is_ascii_digit())
}

fn parse_timestamp(flag: &str, value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S"))
        .map_err(|_| format!("error: invalid {flag} '{value}' (expected YYYY-MM-DDTHH:MM:SS)"))
}

fn help_text() -> String {
    format!(
        "stint {version}

Resolves terse time-bounds specs against the previous fact and the clock.

Usage:
  stint [OPTIONS] [--] [spec]

Options:
  --last <timestamp>    End of the previous fact, YYYY-MM-DDTHH:MM:SS.
                        Specs like \"+5\" or an empty spec count from here.
  --now <timestamp>     Freeze \"now\" instead of using the wall clock.
  -h, --help            Show this help message.
  -V, --version         Print version information.

Examples:
  stint '18:55..19:30'
  stint --last 2014-01-30T22:15:00 '+5..'
  stint --now 2014-01-31T19:51:00 -- -5",
        version = env!("CARGO_PKG_VERSION"),
    )
}
