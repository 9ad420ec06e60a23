use clap::{Parser, ValueEnum};
use lastfm_export::exporter::DEFAULT_BASE_NAME;
use lastfm_export::{ExportError, ExportOptions, LastFmClient, LibraryExporter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lastfm-export")]
#[command(about = "Export a Last.fm library to JSON and CSV", long_about = None)]
struct Cli {
    /// Last.fm API key (can also be set via LASTFM_API_KEY env var)
    #[arg(long, env = "LASTFM_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Last.fm username whose library is exported
    #[arg(short, long)]
    user: String,

    /// Output directory (created if missing)
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Base filename for the exported files
    #[arg(long, default_value = DEFAULT_BASE_NAME)]
    base_name: String,

    /// Which files to write
    #[arg(short, long, value_enum, default_value_t = Format::Both)]
    format: Format,

    /// Artists requested per page
    #[arg(long, default_value_t = 1000)]
    artists_per_page: u32,

    /// Albums requested per page
    #[arg(long, default_value_t = 1000)]
    albums_per_page: u32,

    /// Only export albums by this artist
    #[arg(long)]
    album_artist: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 15)]
    timeout: u64,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Format {
    Json,
    Csv,
    Both,
}

impl Format {
    fn json(self) -> bool {
        matches!(self, Format::Json | Format::Both)
    }

    fn csv(self) -> bool {
        matches!(self, Format::Csv | Format::Both)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let api_key = cli.api_key.trim();
    let user = cli.user.trim();
    if api_key.is_empty() {
        eprintln!("Missing API key: please provide your Last.fm API key.");
        return ExitCode::from(2);
    }
    if user.is_empty() {
        eprintln!("Missing username: please provide the Last.fm username.");
        return ExitCode::from(2);
    }

    let base_name = match cli.base_name.trim() {
        "" => DEFAULT_BASE_NAME.to_string(),
        name => name.to_string(),
    };

    let options = ExportOptions {
        output_dir: cli.output,
        base_name,
        write_json: cli.format.json(),
        write_csv: cli.format.csv(),
        artists_per_page: cli.artists_per_page,
        albums_per_page: cli.albums_per_page,
        album_artist_filter: cli.album_artist,
    };

    println!("Exporting...");
    let outcome = LastFmClient::new(api_key)
        .map_err(ExportError::from)
        .and_then(|client| {
            let client = client.with_timeout(Duration::from_secs(cli.timeout));
            LibraryExporter::new(&client, user).export_library(&options)
        });

    match outcome {
        Ok(result) => {
            for line in result.summary_lines() {
                println!("{}", line);
            }
            println!("Export complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let headline = if e.is_api() {
                "An error occurred while talking to Last.fm:"
            } else {
                "An error occurred while writing files:"
            };
            eprintln!("{}\n\n{}", headline, e);
            ExitCode::FAILURE
        }
    }
}
