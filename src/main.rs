use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use hyperdraw::{Document, HyperdrawError, Renderer};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "hyperdraw", version, about = "Draw a hypergraph document as SVG")]
struct Cli {
    /// JSON hypergraph document; reads stdin when omitted.
    input: Option<PathBuf>,
    /// SVG output file; writes stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for hyperdraw. Override with RUST_LOG.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("hyperdraw=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("hyperdraw: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> hyperdraw::Result<()> {
    let document = match &cli.input {
        Some(path) => {
            let file = File::open(path).map_err(|source| file_error(path, source))?;
            Document::from_reader(BufReader::new(file))?
        }
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Document::from_json_str(&text)?
        }
    };
    debug!(
        vertices = document.graph.vertices().len(),
        edges = document.graph.edges().len(),
        "loaded document"
    );

    let svg = Renderer::new(&document).render(Vec::new())?;

    match &cli.output {
        Some(path) => File::create(path)
            .and_then(|mut file| file.write_all(&svg))
            .map_err(|source| file_error(path, source))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&svg)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn file_error(path: &Path, source: io::Error) -> HyperdrawError {
    HyperdrawError::File {
        path: path.to_path_buf(),
        source,
    }
}
