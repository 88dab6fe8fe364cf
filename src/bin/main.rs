use anyhow::{Context, Result};
use cipher_core::persistence::{self, ProfileFormat};
use cipher_core::{
    io, Alphabet, AlphabetPreset, CaesarBreaker, Cipher, CipherKind, Direction, FrequencyProfile,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cipher_tool")]
#[command(about = "Caesar and Vigenère ciphers with a frequency-analysis Caesar breaker")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Built-in alphabet to operate over. The `-cased` presets shift each case
    /// within itself
    #[arg(
        long,
        global = true,
        value_enum,
        env = "CIPHER_ALPHABET",
        default_value = "latin-cased"
    )]
    alphabet: AlphabetArg,

    /// Custom alphabet given as its ordered symbols (overrides --alphabet)
    #[arg(long, global = true, env = "CIPHER_SYMBOLS")]
    symbols: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with a Caesar or Vigenère cipher
    Encode(CipherArgs),
    /// Decrypt text with a Caesar or Vigenère cipher
    Decode(CipherArgs),
    /// Count alphabet symbols of a text into a frequency profile
    #[command(name = "count_symbol_frequency")]
    CountSymbolFrequency(CountArgs),
    /// Recover Caesar-encrypted text using a reference frequency profile
    #[command(name = "caesar_breaking")]
    CaesarBreaking(BreakArgs),
}

#[derive(Args)]
struct StreamArgs {
    /// Input file (standard input when omitted)
    #[arg(long = "input_file")]
    input_file: Option<PathBuf>,

    /// Output file (standard output when omitted)
    #[arg(long = "output_file")]
    output_file: Option<PathBuf>,
}

#[derive(Args)]
struct CipherArgs {
    #[command(flatten)]
    io: StreamArgs,

    #[arg(long, value_enum)]
    cipher: CipherArg,

    /// Integer shift for caesar, keyword for vigenere
    #[arg(long, allow_hyphen_values = true)]
    key: String,
}

#[derive(Args)]
struct CountArgs {
    #[command(flatten)]
    io: StreamArgs,

    /// Profile encoding (inferred from the output extension when omitted)
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Add the counts to the profile already stored in --output_file
    #[arg(long, requires = "output_file")]
    merge: bool,
}

#[derive(Args)]
struct BreakArgs {
    #[command(flatten)]
    io: StreamArgs,

    /// Reference frequency profile of the expected plaintext language
    #[arg(long = "file_with_symbols_frequency")]
    file_with_symbols_frequency: PathBuf,

    /// Profile encoding (inferred from the profile extension when omitted)
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlphabetArg {
    EnglishLower,
    Latin,
    LatinCased,
    Extended,
    Cyrillic,
    CyrillicCased,
}

impl From<AlphabetArg> for AlphabetPreset {
    fn from(arg: AlphabetArg) -> Self {
        match arg {
            AlphabetArg::EnglishLower => AlphabetPreset::EnglishLower,
            AlphabetArg::Latin => AlphabetPreset::Latin,
            AlphabetArg::LatinCased => AlphabetPreset::LatinCased,
            AlphabetArg::Extended => AlphabetPreset::Extended,
            AlphabetArg::Cyrillic => AlphabetPreset::Cyrillic,
            AlphabetArg::CyrillicCased => AlphabetPreset::CyrillicCased,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CipherArg {
    Caesar,
    Vigenere,
}

impl From<CipherArg> for CipherKind {
    fn from(arg: CipherArg) -> Self {
        match arg {
            CipherArg::Caesar => CipherKind::Caesar,
            CipherArg::Vigenere => CipherKind::Vigenere,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Table,
    Binary,
}

impl From<FormatArg> for ProfileFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => ProfileFormat::Json,
            FormatArg::Table => ProfileFormat::Table,
            FormatArg::Binary => ProfileFormat::Binary,
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let alphabet = match &cli.symbols {
        Some(symbols) => Alphabet::new(symbols).context("invalid custom alphabet")?,
        None => Alphabet::from_preset(cli.alphabet.into()),
    };
    log::debug!("Using alphabet of {} symbols", alphabet.size());

    match cli.command {
        Commands::Encode(args) => run_cipher(&alphabet, args, Direction::Encode),
        Commands::Decode(args) => run_cipher(&alphabet, args, Direction::Decode),
        Commands::CountSymbolFrequency(args) => run_count(&alphabet, args),
        Commands::CaesarBreaking(args) => run_break(&alphabet, args),
    }
}

fn run_cipher(alphabet: &Alphabet, args: CipherArgs, direction: Direction) -> Result<()> {
    let cipher = Cipher::from_kind(args.cipher.into(), &args.key)?;
    let text = read_text(args.io.input_file.as_deref())?;
    let output = cipher
        .apply(alphabet, &text, direction)
        .with_context(|| format!("{} {direction:?} failed", cipher.kind()))?;
    write_text(args.io.output_file.as_deref(), &output)
}

fn run_count(alphabet: &Alphabet, args: CountArgs) -> Result<()> {
    let input = args.io.input_file.as_deref();
    let reader = io::open_input(input).with_context(|| describe_input(input))?;
    let counted = FrequencyProfile::count_reader(alphabet, reader)
        .with_context(|| describe_input(input))?;

    match args.io.output_file.as_deref() {
        Some(path) => {
            let format = resolve_format(args.format, path);
            let mut profile = if args.merge {
                persistence::load_or_new(path, format)
                    .with_context(|| format!("failed to load profile '{}'", path.display()))?
            } else {
                FrequencyProfile::new()
            };
            profile.merge(&counted);
            persistence::save_profile(&profile, path, format)
                .with_context(|| format!("failed to save profile '{}'", path.display()))?;
        }
        None => {
            let format = args.format.map(Into::into).unwrap_or(ProfileFormat::Json);
            let mut out = io::open_output(None)?;
            persistence::write_profile(&counted, &mut out, format)?;
            out.flush().context("failed to write standard output")?;
        }
    }
    Ok(())
}

fn run_break(alphabet: &Alphabet, args: BreakArgs) -> Result<()> {
    let path = args.file_with_symbols_frequency.as_path();
    let format = resolve_format(args.format, path);
    let mut reference = persistence::load_profile(path, format)
        .with_context(|| format!("failed to load reference profile '{}'", path.display()))?;
    let foreign = reference.retain_alphabet(alphabet);
    if !foreign.is_empty() {
        log::warn!(
            "Ignoring {} reference symbols outside the alphabet: {:?}",
            foreign.len(),
            foreign
        );
    }

    let ciphertext = read_text(args.io.input_file.as_deref())?;
    let result = CaesarBreaker::new(alphabet, &reference).break_text(&ciphertext);
    write_text(args.io.output_file.as_deref(), &result.plaintext)
}

fn resolve_format(format: Option<FormatArg>, path: &Path) -> ProfileFormat {
    format.map(Into::into).unwrap_or_else(|| ProfileFormat::from_path(path))
}

fn read_text(path: Option<&Path>) -> Result<String> {
    io::read_input(path).with_context(|| describe_input(path))
}

fn write_text(path: Option<&Path>, text: &str) -> Result<()> {
    io::write_output(path, text).with_context(|| match path {
        Some(path) => format!("failed to write '{}'", path.display()),
        None => "failed to write standard output".to_string(),
    })
}

fn describe_input(path: Option<&Path>) -> String {
    match path {
        Some(path) => format!("failed to read '{}'", path.display()),
        None => "failed to read standard input".to_string(),
    }
}
