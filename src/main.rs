use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info, Level};
use tracing_subscriber::fmt::time::LocalTime;
use tracing_appender::non_blocking;
use time::macros::format_description;

use sha1sum::Digest;
use sha1sum::util::io::read_input;

const SAMPLE: &str = "test";

#[derive(Parser, Debug)]
#[command(name="sha1sum", version, about="Print SHA-1 (160-bit) digests")]
struct Args {
    #[arg(short='s', long="string", value_name="TEXT", help="Hash the given text (repeatable)")]
    strings: Vec<String>,

    #[arg(short, long, help="Write logs to stderr instead of the log file")]
    verbose: bool,

    #[arg(long, default_value="logs", help="Directory holding sha1sum.log")]
    log_dir: PathBuf,

    #[arg(help="Files to hash; `-` reads standard input")]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let mut args = Args::parse();

    let timer = LocalTime::new(
        format_description!("[month]/[day]/[year] [hour repr:24]:[minute]:[second].[subsecond digits:4]"));
    let _guard = if args.verbose {
        tracing_subscriber::fmt().with_writer(std::io::stderr).with_max_level(Level::DEBUG).with_timer(timer).init();
        None
    } else {
        let file_appender = tracing_appender::rolling::never(&args.log_dir, "sha1sum.log");
        let (non_blocking, guard) = non_blocking(file_appender);
        tracing_subscriber::fmt().with_writer(non_blocking).with_ansi(false).with_timer(timer).init();
        Some(guard)
    };

    if args.strings.is_empty() && args.files.is_empty() {
        args.strings.push(SAMPLE.to_string());
    }

    for text in &args.strings {
        debug!(bytes = text.len(), "hashing string");
        println!("{}  \"{}\"", Digest::of(text.as_bytes()), text);
    }

    let mut failures = 0;
    for path in &args.files {
        match read_input(path) {
            Ok(bytes) => {
                debug!(bytes = bytes.len(), path = %path.display(), "hashing file");
                println!("{}  {}", Digest::of(&bytes), path.display());
            },
            Err(e) => {
                error!(path = %path.display(), "unable to read input: {e}");
                eprintln!("sha1sum: {}: {e}", path.display());
                failures += 1;
            },
        }
    }

    info!(strings = args.strings.len(), files = args.files.len(), failures, "done");
    if failures == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
