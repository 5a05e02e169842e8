#[macro_use(trace, debug, info, error)]
extern crate log;

mod error;
mod prober;
mod report;

use std::{io::Write, process::ExitCode};

/// Prints the codec, sample rate, channels, bit rate and duration of a media file's first stream
#[derive(Debug, clap::Parser)]
#[command(version)]
struct Cli {
    /// File to probe
    path: std::path::PathBuf,

    /// ffprobe compatible program to run
    #[arg(long, env = "FFPROBE", default_value = prober::DEFAULT_PROGRAM)]
    ffprobe: std::ffi::OsString,
}

/// How a run ended, every failure has already been printed
#[derive(Debug, PartialEq)]
enum Outcome {
    Summarized,
    Failed,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Summarized => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::FAILURE,
        }
    }
}

fn main() -> ExitCode {
    use {clap::Parser as _, tracing_subscriber::EnvFilter};

    // stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut stdout = std::io::stdout().lock();
    match run(&cli, &mut stdout) {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            error!("Could not write to stdout: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, out: &mut impl Write) -> std::io::Result<Outcome> {
    use {
        crate::{error::ReportError, prober::Prober, report::StreamSummary},
        std::time::Instant,
    };

    let start_timer = Instant::now();

    let report = match Prober::new(&cli.ffprobe).probe(&cli.path) {
        Ok(report) => report,
        Err(e) => {
            writeln!(out, "Error! {e} {}", e.stderr())?;
            return Ok(Outcome::Failed);
        }
    };

    info!(
        "Probed {} in {:?}",
        cli.path.display(),
        start_timer.elapsed()
    );
    writeln!(out, "Ok!")?;

    match StreamSummary::from_report(&report) {
        Ok(summary) => {
            writeln!(out, "{summary}")?;
            Ok(Outcome::Summarized)
        }
        Err(ReportError::Json(e)) => {
            writeln!(out, "Error decoding JSON! {e}")?;
            Ok(Outcome::Failed)
        }
        Err(e) => {
            writeln!(out, "Error reading stream! {e}")?;
            Ok(Outcome::Failed)
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use {
        super::{run, Cli, Outcome},
        crate::{prober::fake, report::samples::MP3_REPORT},
    };

    fn run_with(script_body: &str) -> (Outcome, String) {
        let _guard = fake::SCRIPT_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let script = fake::script(dir.path(), script_body);

        let cli = Cli {
            path: "song.mp3".into(),
            ffprobe: script.into_os_string(),
        };

        let mut out = Vec::new();
        let outcome = run(&cli, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_one_summary_line() {
        let (outcome, out) = run_with(&format!("cat <<'JSON'\n{MP3_REPORT}\nJSON"));

        assert_eq!(outcome, Outcome::Summarized);
        assert_eq!(
            out,
            "Ok!\nAudio file has encoding mp3, sample rate 44100, 2 channel(s), 320000 bit rate, and is 213.289796 seconds long\n"
        );
    }

    #[test]
    fn prober_failure_prints_its_stderr() {
        let (outcome, out) = run_with("echo 'song.mp3: Invalid data found when processing input' >&2\nexit 1");

        assert_eq!(outcome, Outcome::Failed);
        assert!(out.starts_with("Error! "), "{out}");
        assert!(
            out.contains("song.mp3: Invalid data found when processing input"),
            "{out}"
        );
        assert!(!out.contains("Ok!"), "{out}");
    }

    #[test]
    fn undecodable_report() {
        let (outcome, out) = run_with("echo 'not json'");

        assert_eq!(outcome, Outcome::Failed);
        assert!(out.starts_with("Ok!\nError decoding JSON! "), "{out}");
    }

    #[test]
    fn unexpected_stream_shape() {
        let (outcome, out) = run_with(r#"echo '{"streams": [{"codec_name": "mp3"}]}'"#);

        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(
            out,
            "Ok!\nError reading stream! the first stream has no `duration` field\n"
        );
    }
}
