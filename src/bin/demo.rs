use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use logging::{
    ACTIVE_LEVELS, BUILD_FLAGS, SeverityLevel, critical_log, debug_log, error_log, info_log,
    warning_log,
};
use thiserror::Error;
use tracing::{debug, error, info};

/// Runs the logging walkthrough for a single value.
///
/// Records are written by the `logging` facade, so which of them appear is
/// decided by the flags this binary was built with, not by any option here.
#[derive(Parser, Debug)]
#[command(name = "levelgate-demo")]
#[command(version, about = "Exercise the build-time leveled logging facade")]
struct Args {
    /// Stream the log records are written to.
    #[arg(long, value_enum, default_value_t = Destination::Stderr)]
    to: Destination,

    /// Print whether each level is active in this build before running.
    #[arg(long)]
    show_levels: bool,

    /// Value fed to the walkthrough; 100 or more reaches every level.
    #[arg(allow_negative_numbers = true)]
    value: i64,
}

/// Standard stream receiving the records.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
enum Destination {
    /// Standard error, the facade's default destination.
    #[default]
    Stderr,
    /// Standard output.
    Stdout,
}

#[derive(Debug, Error)]
enum DemoError {
    #[error("failed to write level report: {0}")]
    Report(#[from] io::Error),
}

/// Outcome of one walkthrough run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Continue,
    Shutdown,
}

/// Parses `args`, runs the walkthrough and maps the result to an exit code.
///
/// With `--to stdout` records are written to `stdout`. With `--to stderr` the
/// walkthrough names no destination and the facade picks standard error
/// itself, so `stderr` only receives usage errors. A value that reaches the
/// critical branch makes the run fail, whether or not the critical record
/// was actually written.
#[must_use]
pub fn run_with<I, Out, Err>(args: I, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    let args = match Args::try_parse_from(args) {
        Ok(args) => args,
        Err(err) => {
            let rendered = err.render().to_string();
            let target: &mut dyn Write = if err.use_stderr() { stderr } else { stdout };
            let _ = target.write_all(rendered.as_bytes());
            return exit_code(err.exit_code());
        }
    };

    debug!(flags = ?BUILD_FLAGS, active = %ACTIVE_LEVELS, "resolved logging configuration");

    if args.show_levels {
        if let Err(err) = report_levels(stdout) {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    }

    let outcome = match args.to {
        Destination::Stderr => walkthrough_default(args.value),
        Destination::Stdout => walkthrough_to(args.value, stdout),
    };

    match outcome {
        Outcome::Continue => ExitCode::SUCCESS,
        Outcome::Shutdown => {
            info!(value = args.value, "critical threshold reached");
            ExitCode::FAILURE
        }
    }
}

fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}

/// Writes one `<Level>: active|inert` line per severity.
fn report_levels<W: Write>(out: &mut W) -> Result<(), DemoError> {
    for level in SeverityLevel::ALL {
        let state = if ACTIVE_LEVELS.contains(level) {
            "active"
        } else {
            "inert"
        };
        writeln!(out, "{level}: {state}")?;
    }
    out.flush()?;
    Ok(())
}

/// Expands to the usage walkthrough for `a`, optionally with a `to:` target
/// forwarded to every logging call.
macro_rules! walkthrough {
    ($a:expr $(, to: $out:expr)?) => {{
        let a: i64 = $a;
        debug_log!($(to: $out,)? "a has a value of", a);

        if a != 0 {
            info_log!($(to: $out,)? "a is not 0");
        }
        if a > 25 {
            warning_log!($(to: $out,)? "Oh goodness a is greater than 25!");
        }
        if a > 50 {
            error_log!($(to: $out,)? "a cannot be greater than 50!");
        }
        if a >= 100 {
            critical_log!($(to: $out,)? "a is greater or equal to 100, shutting down!");
            Outcome::Shutdown
        } else {
            Outcome::Continue
        }
    }};
}

/// Runs the walkthrough against the facade's default destination.
fn walkthrough_default(a: i64) -> Outcome {
    walkthrough!(a)
}

/// Runs the walkthrough against `out`.
fn walkthrough_to<W: Write + ?Sized>(a: i64, mut out: &mut W) -> Outcome {
    walkthrough!(a, to: out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_records(a: i64) -> String {
        let mut records = String::new();
        let mut push = |level: SeverityLevel, reached: bool, text: &str| {
            if reached && level.is_active() {
                records.push_str(&format!("{} {text}\n", level.tag()));
            }
        };
        push(SeverityLevel::Debug, true, &format!("a has a value of {a}"));
        push(SeverityLevel::Info, a != 0, "a is not 0");
        push(SeverityLevel::Warning, a > 25, "Oh goodness a is greater than 25!");
        push(SeverityLevel::Error, a > 50, "a cannot be greater than 50!");
        push(
            SeverityLevel::Critical,
            a >= 100,
            "a is greater or equal to 100, shutting down!",
        );
        records
    }

    #[test]
    fn walkthrough_writes_reached_active_records() {
        for a in [-3, 0, 1, 25, 26, 50, 51, 99] {
            let mut out = Vec::new();
            assert_eq!(walkthrough_to(a, &mut out), Outcome::Continue);
            assert_eq!(String::from_utf8(out).expect("utf8"), expected_records(a), "a = {a}");
        }
    }

    #[test]
    fn walkthrough_shuts_down_at_one_hundred() {
        let mut out = Vec::new();
        assert_eq!(walkthrough_to(100, &mut out), Outcome::Shutdown);
        assert_eq!(String::from_utf8(out).expect("utf8"), expected_records(100));
    }

    #[test]
    fn report_lists_every_level_in_order() {
        let mut out = Vec::new();
        report_levels(&mut out).expect("report");
        let report = String::from_utf8(out).expect("utf8");
        let names: Vec<_> = report
            .lines()
            .filter_map(|line| line.split(':').next())
            .collect();
        assert_eq!(names, ["Debug", "Info", "Warning", "Error", "Critical"]);
    }

    #[test]
    fn records_follow_the_selected_stream() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let exit = run_with(
            ["levelgate-demo", "--to", "stdout", "60"],
            &mut stdout,
            &mut stderr,
        );

        assert_eq!(exit, ExitCode::SUCCESS);
        assert!(stderr.is_empty());
        assert_eq!(String::from_utf8(stdout).expect("utf8"), expected_records(60));
    }

    #[test]
    fn critical_value_fails() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let exit = run_with(
            ["levelgate-demo", "--to", "stdout", "150"],
            &mut stdout,
            &mut stderr,
        );

        assert_eq!(exit, ExitCode::FAILURE);
        assert!(stderr.is_empty());
        assert_eq!(String::from_utf8(stdout).expect("utf8"), expected_records(150));
    }

    #[test]
    fn walkthrough_through_a_borrowed_writer() {
        fn forward<W: Write>(out: &mut W) -> Outcome {
            walkthrough_to(60, out)
        }

        let mut out = Vec::new();
        assert_eq!(forward(&mut out), Outcome::Continue);
        assert_eq!(String::from_utf8(out).expect("utf8"), expected_records(60));
    }

    #[test]
    fn default_destination_bypasses_the_supplied_streams() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let exit = run_with(["levelgate-demo", "0"], &mut stdout, &mut stderr);

        assert_eq!(exit, ExitCode::SUCCESS);
        assert!(stdout.is_empty());
        assert!(stderr.is_empty());
    }

    #[test]
    fn negative_values_are_accepted() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let exit = run_with(["levelgate-demo", "-7"], &mut stdout, &mut stderr);
        assert_eq!(exit, ExitCode::SUCCESS);
    }

    #[test]
    fn missing_value_is_a_usage_error() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let exit = run_with(["levelgate-demo"], &mut stdout, &mut stderr);

        assert_eq!(exit, ExitCode::from(2));
        assert!(!stderr.is_empty());
    }

    #[test]
    fn version_flag_reports_success() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let exit = run_with(["levelgate-demo", "--version"], &mut stdout, &mut stderr);

        assert_eq!(exit, ExitCode::SUCCESS);
        assert!(!stdout.is_empty());
        assert!(stderr.is_empty());
    }
}
