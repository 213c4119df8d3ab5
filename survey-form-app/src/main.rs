use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, bail};
use survey_form::{SessionConfig, run};
use survey_form_html::{HtmlOptions, to_html};
use survey_form_ratatui::RatatuiFormBackend;
use tracing::info;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
survey-form: fill in a survey with topic-specific questions

USAGE:
  survey-form [OPTIONS]

OPTIONS:
  --questions <PATH>  Load follow-up questions from a JSON file
  --delay-ms <MS>     Simulated fetch latency in milliseconds [default: 500]
  --html <PATH>       Write the empty form as an HTML document instead of running the TUI
  --title <TEXT>      Form title [default: Survey]
  --log <PATH>        Write logs to a file (filter with RUST_LOG)
  -h, --help          Print this help
";

#[derive(Debug, PartialEq)]
struct Args {
    questions: Option<PathBuf>,
    delay_ms: Option<u64>,
    html: Option<PathBuf>,
    title: String,
    log: Option<PathBuf>,
}

impl Args {
    fn parse(mut pargs: pico_args::Arguments) -> anyhow::Result<Self> {
        let args = Self {
            questions: pargs.opt_value_from_str("--questions")?,
            delay_ms: pargs.opt_value_from_str("--delay-ms")?,
            html: pargs.opt_value_from_str("--html")?,
            title: pargs
                .opt_value_from_str("--title")?
                .unwrap_or_else(|| "Survey".to_string()),
            log: pargs.opt_value_from_str("--log")?,
        };

        let rest = pargs.finish();
        if !rest.is_empty() {
            bail!("unexpected arguments: {rest:?}");
        }
        Ok(args)
    }

    fn session_config(&self) -> SessionConfig {
        let mut config = SessionConfig::new();
        if let Some(path) = &self.questions {
            config = config.with_questions_path(path);
        }
        if let Some(ms) = self.delay_ms {
            config = config.with_fetch_delay(Duration::from_millis(ms));
        }
        config
    }
}

/// The terminal belongs to the TUI, so logs go to a file or nowhere.
fn init_logging(log: Option<&Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false);

    match log {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            builder.with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::sink).init(),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let mut pargs = pico_args::Arguments::from_env();
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }
    let args = Args::parse(pargs)?;
    init_logging(args.log.as_deref())?;

    let mut session = args
        .session_config()
        .build_session()
        .context("cannot load follow-up questions")?;

    if let Some(path) = &args.html {
        let html = to_html(&session.view(), &HtmlOptions::new().with_title(&args.title));
        std::fs::write(path, html)
            .with_context(|| format!("cannot write {}", path.display()))?;
        info!(path = %path.display(), "form written as HTML");
        return Ok(());
    }

    let backend = RatatuiFormBackend::new().with_title(&args.title);
    match run(&backend, &mut session) {
        Ok(Some(response)) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Ok(None) => eprintln!("No survey data collected."),
        Err(err) if err.is_cancelled() => eprintln!("Survey cancelled."),
        Err(err) => return Err(err).context("survey form failed"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<Args> {
        Args::parse(pico_args::Arguments::from_vec(
            args.iter().map(OsString::from).collect(),
        ))
    }

    #[test]
    fn defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(
            args,
            Args {
                questions: None,
                delay_ms: None,
                html: None,
                title: "Survey".to_string(),
                log: None,
            }
        );
        assert_eq!(args.session_config().fetch_delay(), Duration::from_millis(500));
    }

    #[test]
    fn all_options() {
        let args = parse(&[
            "--questions",
            "q.json",
            "--delay-ms",
            "20",
            "--html",
            "out.html",
            "--title",
            "Customer Survey",
            "--log",
            "survey.log",
        ])
        .unwrap();

        assert_eq!(args.questions, Some(PathBuf::from("q.json")));
        assert_eq!(args.html, Some(PathBuf::from("out.html")));
        assert_eq!(args.title, "Customer Survey");
        assert_eq!(args.log, Some(PathBuf::from("survey.log")));
        assert_eq!(args.session_config().fetch_delay(), Duration::from_millis(20));
    }

    #[test]
    fn rejects_bad_delay() {
        assert!(parse(&["--delay-ms", "soon"]).is_err());
    }

    #[test]
    fn rejects_unknown_arguments() {
        let err = parse(&["--colour"]).unwrap_err();
        assert!(err.to_string().contains("unexpected arguments"));
    }
}
