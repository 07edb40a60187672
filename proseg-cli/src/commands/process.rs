//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;
use anyhow::{bail, Context, Result};
use clap::Args;
use log::{debug, info, warn};
use proseg_core::{Config, Lexicon, OracleKind, Segmented, Segmenter};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true, num_args = 1..)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text, or the config file's default_format]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Keep multi-sentence quoted passages in one sentence
    #[arg(long)]
    pub no_split_dialog: bool,

    /// Group the sentences of one quoted passage in the output
    #[arg(long)]
    pub group_quotes: bool,

    /// Custom lexicon file (see `generate-config`)
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Boundary oracle
    #[arg(long, value_enum)]
    pub oracle: Option<OracleArg>,

    /// Process files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for parallel processing (implies --parallel)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "PROSEG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Boundary oracles selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OracleArg {
    Punctuation,
    Uax29,
}

impl From<OracleArg> for OracleKind {
    fn from(arg: OracleArg) -> Self {
        match arg {
            OracleArg::Punctuation => OracleKind::Punctuation,
            OracleArg::Uax29 => OracleKind::Uax29,
        }
    }
}

/// Sentences of one file, by paragraph
type FileSentences = Vec<Vec<String>>;

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();
        debug!("Arguments: {self:?}");

        let cli_config = CliConfig::load_or_default(self.config.as_deref())?;
        let format = self.output_format(&cli_config)?;
        let threads = self.worker_threads(cli_config.processing.threads)?;
        let segmenter = self.build_segmenter(&cli_config)?;
        let files = resolve_patterns(&self.input)?;
        info!(
            "Processing {} files ({} bytes) with the {} oracle",
            files.len(),
            FileReader::total_size(&files)?,
            segmenter.oracle_name()
        );

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);
        let results = segment_files(&segmenter, &files, &progress, threads)?;
        progress.finish();

        let mut formatter = create_formatter(
            format,
            self.open_writer()?,
            cli_config.output.pretty_json,
        );
        let group_quotes = self.group_quotes || cli_config.output.group_quotes;
        let written = write_sentences(formatter.as_mut(), &segmenter, &results, group_quotes)?;
        formatter.finish()?;

        info!("Wrote {written} sentences");
        Ok(())
    }

    fn output_format(&self, cli_config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        let name = &cli_config.output.default_format;
        OutputFormat::parse(name)
            .ok_or_else(|| CliError::ConfigError(format!("Unknown output format: {name}")).into())
    }

    fn build_segmenter(&self, cli_config: &CliConfig) -> Result<Segmenter> {
        let processing = &cli_config.processing;
        let oracle = match self.oracle {
            Some(arg) => OracleKind::from(arg).name().to_string(),
            None => processing.oracle.clone(),
        };
        let config = Config::builder()
            .split_dialog(processing.split_dialog && !self.no_split_dialog)
            .oracle(oracle)
            .cache_capacity(processing.cache_capacity)
            .max_quote_group(processing.max_quote_group)
            .build()
            .context("Invalid segmenter configuration")?;

        let segmenter = match self.lexicon.as_ref().or(processing.lexicon.as_ref()) {
            Some(path) => {
                let lexicon = Lexicon::from_file(path)
                    .with_context(|| format!("Failed to load lexicon: {}", path.display()))?;
                info!("Using lexicon {} from {}", lexicon.code(), path.display());
                Segmenter::with_lexicon(Arc::new(lexicon), config)?
            }
            None => Segmenter::with_config(config)?,
        };
        Ok(segmenter)
    }

    /// Worker count when running in parallel, `None` for sequential
    fn worker_threads(&self, cli_config_threads: usize) -> Result<Option<usize>> {
        if self.threads == Some(0) {
            bail!("Thread count must be greater than 0");
        }
        if !self.parallel && self.threads.is_none() {
            return Ok(None);
        }
        let threads = match self.threads.unwrap_or(cli_config_threads) {
            0 => num_cpus::get(),
            n => n,
        };
        Ok(Some(threads))
    }

    fn open_writer(&self) -> Result<Box<dyn Write + Send + Sync>> {
        Ok(match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        // A logger installed by an earlier command in this process stays
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}

/// Segment every file, in input order; `threads` selects the parallel path
fn segment_files(
    segmenter: &Segmenter,
    files: &[PathBuf],
    progress: &ProgressReporter,
    threads: Option<usize>,
) -> Result<Vec<FileSentences>> {
    let Some(threads) = threads else {
        return files
            .iter()
            .map(|path| segment_file(segmenter, path, progress))
            .collect();
    };

    debug!("Segmenting in parallel on {threads} threads");
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("Failed to start worker threads")?;
    pool.install(|| {
        files
            .par_iter()
            .map(|path| segment_file(segmenter, path, progress))
            .collect()
    })
}

fn segment_file(
    segmenter: &Segmenter,
    path: &Path,
    progress: &ProgressReporter,
) -> Result<FileSentences> {
    let text = FileReader::read_text(path)?;
    let filename = path.display().to_string();

    if text.trim().is_empty() {
        warn!("Skipping empty file: {filename}");
        progress.file_completed(&filename, 0);
        return Ok(Vec::new());
    }

    let paragraphs = match segmenter.segment_text(&text, false) {
        Ok(Segmented::Paragraphs(paragraphs)) => paragraphs,
        Ok(Segmented::Flat(sentences)) => vec![sentences],
        Err(e) => return Err(CliError::ProcessingError(format!("{filename}: {e}")).into()),
    };

    let count = paragraphs.iter().map(Vec::len).sum();
    debug!("{filename}: {} paragraphs, {count} sentences", paragraphs.len());
    progress.file_completed(&filename, count);
    Ok(paragraphs)
}

/// Feed every sentence to `formatter`, grouped by quote span when asked;
/// returns the number of sentences written
fn write_sentences(
    formatter: &mut dyn OutputFormatter,
    segmenter: &Segmenter,
    files: &[FileSentences],
    group_quotes: bool,
) -> Result<usize> {
    let mut index = 0;
    for paragraph in files.iter().flatten() {
        if group_quotes {
            for group in segmenter.group_quotes(paragraph.as_slice()) {
                formatter.format_group(&group, index)?;
                index += group.len();
            }
        } else {
            for sentence in paragraph {
                formatter.format_sentence(sentence, index)?;
                index += 1;
            }
        }
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: &Path, output: &Path) -> ProcessArgs {
        ProcessArgs {
            input: vec![input.display().to_string()],
            output: Some(output.to_path_buf()),
            format: None,
            no_split_dialog: false,
            group_quotes: false,
            lexicon: None,
            oracle: None,
            parallel: false,
            threads: None,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    fn fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_process_to_text_file() {
        let dir = TempDir::new().unwrap();
        let input = fixture(&dir, "in.txt", "Dr. Smith left. He was late.\n\nThe end.");
        let output = dir.path().join("out.txt");

        args(&input, &output).execute().unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "Dr. Smith left.\nHe was late.\nThe end.\n"
        );
    }

    #[test]
    fn test_dialog_flags() {
        let dir = TempDir::new().unwrap();
        let input = fixture(&dir, "in.txt", "\"Wait. Listen to me.\" He left.");
        let output = dir.path().join("out.txt");

        let mut kept = args(&input, &output);
        kept.no_split_dialog = true;
        kept.execute().unwrap();
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "\"Wait. Listen to me.\"\nHe left.\n"
        );

        let mut grouped = args(&input, &output);
        grouped.group_quotes = true;
        grouped.execute().unwrap();
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "\"Wait. Listen to me.\"\nHe left.\n"
        );
    }

    #[test]
    fn test_parallel_keeps_file_order() {
        let dir = TempDir::new().unwrap();
        for (name, text) in [("a.txt", "Alpha one."), ("b.txt", "Beta two."), ("c.txt", "Gamma three.")] {
            fixture(&dir, name, text);
        }
        let output = dir.path().join("out.json");

        let mut process = args(&dir.path().join("*.txt"), &output);
        process.format = Some(OutputFormat::Json);
        process.threads = Some(2);
        process.execute().unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        let texts: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["text"].as_str().unwrap())
            .collect();
        assert_eq!(texts, vec!["Alpha one.", "Beta two.", "Gamma three."]);
    }

    #[test]
    fn test_config_file_defaults() {
        let dir = TempDir::new().unwrap();
        let input = fixture(&dir, "in.txt", "One here. Two here.");
        let config = fixture(
            &dir,
            "proseg.toml",
            "[output]\ndefault_format = \"markdown\"\n",
        );
        let output = dir.path().join("out.md");

        let mut process = args(&input, &output);
        process.config = Some(config);
        process.execute().unwrap();

        let markdown = fs::read_to_string(&output).unwrap();
        assert!(markdown.starts_with("1. One here.\n2. Two here.\n"));
        assert!(markdown.contains("*Total sentences: 2*"));
    }

    #[test]
    fn test_invalid_settings() {
        let dir = TempDir::new().unwrap();
        let input = fixture(&dir, "in.txt", "Text.");
        let output = dir.path().join("out.txt");

        let mut zero_threads = args(&input, &output);
        zero_threads.threads = Some(0);
        let err = zero_threads.execute().unwrap_err();
        assert!(err.to_string().contains("Thread count must be greater than 0"));

        let config = fixture(&dir, "bad.toml", "[output]\ndefault_format = \"yaml\"\n");
        let mut bad_format = args(&input, &output);
        bad_format.config = Some(config);
        let err = bad_format.execute().unwrap_err();
        assert!(err.to_string().contains("Unknown output format: yaml"));
    }

    #[test]
    fn test_empty_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        let input = fixture(&dir, "empty.txt", "  \n");
        let output = dir.path().join("out.txt");

        args(&input, &output).execute().unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "");
    }
}
