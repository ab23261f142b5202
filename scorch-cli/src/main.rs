use std::{io::Write as _, path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use scorch::{
    BurnOptions, BurnOutput, FontChains, OutputFormat, Renderer, Rgba8, SimplexNoise, Speed,
};

/// Render text as an animated burning GIF, sprite sheet or PNG frames.
#[derive(Parser, Debug)]
#[command(name = "scorch", version)]
struct Cli {
    /// Text to set on fire (at most 50 characters).
    #[arg(long)]
    text: String,

    /// Animation pacing: fast (5 frames) or slow (50 frames).
    #[arg(long, default_value = "fast")]
    speed: Speed,

    /// Output kind: gif, sheet (vertical PNG sprite sheet) or frames (PNG directory).
    #[arg(long, default_value = "gif")]
    format: OutputFormat,

    /// Named font chain from the font-chains file.
    #[arg(long)]
    font_chain: Option<String>,

    /// JSON file mapping chain names to lists of font paths.
    #[arg(long, env = "SCORCH_FONT_CHAINS")]
    font_chains: Option<PathBuf>,

    /// Default font chain as a `;`-separated list of font paths.
    #[arg(long, env = "SCORCH_FONT")]
    font: Option<String>,

    /// Flame base colour (#RRGGBB or #RRGGBBAA).
    #[arg(long)]
    flame_color: Option<Rgba8>,

    /// Text colour (#RRGGBB; an alpha byte is accepted but ignored).
    #[arg(long)]
    text_color: Option<Rgba8>,

    /// Pick a random flame hue; the text is shifted 30 degrees from it.
    #[arg(long, default_value_t = false)]
    random_color: bool,

    /// Noise seed.
    #[arg(long, default_value_t = scorch::DEFAULT_SEED)]
    seed: u32,

    /// Output file (gif, sheet) or directory (frames). Defaults to stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Log debug events to stderr (RUST_LOG overrides).
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.format == OutputFormat::Frames && cli.output.is_none() {
        anyhow::bail!("--format frames needs --output <DIR>");
    }

    let fonts = load_fonts(&cli)?;
    let opts = BurnOptions {
        text: cli.text.clone(),
        speed: cli.speed,
        font_chain: cli.font_chain.clone(),
        flame_color: cli.flame_color,
        text_color: cli.text_color,
        random_color: cli.random_color,
    };

    let renderer = Renderer::new(Arc::new(SimplexNoise::new(cli.seed)), fonts);
    let out = renderer.render(&opts, cli.format)?;

    match (&out, &cli.output) {
        (BurnOutput::Frames(frames), Some(dir)) => {
            scorch::write_png_sequence(dir, frames)?;
            eprintln!("wrote {} frames to {}", frames.len(), dir.display());
        }
        (_, Some(path)) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let file = std::fs::File::create(path)
                .with_context(|| format!("create '{}'", path.display()))?;
            out.encode(std::io::BufWriter::new(file))?;
            eprintln!("wrote {}", path.display());
        }
        (_, None) => {
            let mut stdout = std::io::BufWriter::new(std::io::stdout().lock());
            out.encode(&mut stdout)?;
            stdout.flush().context("flush stdout")?;
        }
    }
    Ok(())
}

fn load_fonts(cli: &Cli) -> anyhow::Result<FontChains> {
    let mut fonts = match &cli.font_chains {
        Some(path) => FontChains::load(path)?,
        None => FontChains::new(),
    };
    if let Some(list) = &cli.font {
        let chain = FontChains::parse_chain_list(list);
        if !chain.is_empty() {
            fonts = fonts.with_default(chain);
        }
    }
    tracing::debug!(chains = ?fonts.names().collect::<Vec<_>>(), "font chains loaded");
    Ok(fonts)
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
