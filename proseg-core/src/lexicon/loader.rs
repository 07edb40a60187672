use super::config::LexiconConfig;
use super::Lexicon;
use crate::error::{Error, Result};
use std::path::Path;
use std::sync::{Arc, OnceLock};

static ENGLISH: OnceLock<Arc<Lexicon>> = OnceLock::new();

macro_rules! embed_lexicon {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

const EMBEDDED: (&str, &str) = embed_lexicon!("en", "../../configs/english.toml");

fn load_embedded() -> Result<Lexicon> {
    let (code, toml_content) = EMBEDDED;
    let lexicon = parse_lexicon(toml_content)
        .map_err(|e| Error::Lexicon(format!("Failed to parse embedded {code} lexicon: {e}")))?;

    if lexicon.code() != code {
        return Err(Error::Lexicon(format!(
            "Lexicon code mismatch: expected {}, got {}",
            code,
            lexicon.code()
        )));
    }

    Ok(lexicon)
}

/// The embedded English lexicon, parsed on first use
pub fn english() -> Result<Arc<Lexicon>> {
    if let Some(lexicon) = ENGLISH.get() {
        return Ok(Arc::clone(lexicon));
    }
    let loaded = Arc::new(load_embedded()?);
    Ok(Arc::clone(ENGLISH.get_or_init(|| loaded)))
}

/// Raw text of the embedded lexicon, used as a template for custom ones
pub fn embedded_source() -> &'static str {
    EMBEDDED.1
}

pub fn parse_lexicon(toml_content: &str) -> Result<Lexicon> {
    let config: LexiconConfig =
        toml::from_str(toml_content).map_err(|e| Error::Lexicon(e.to_string()))?;
    Lexicon::from_config(&config)
}

pub fn load_lexicon_file(path: impl AsRef<Path>) -> Result<Lexicon> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Io(format!("Failed to read {}: {e}", path.display())))?;
    parse_lexicon(&content)
        .map_err(|e| Error::Lexicon(format!("{}: {}", path.display(), strip_prefix(&e))))
}

fn strip_prefix(err: &Error) -> String {
    match err {
        Error::Lexicon(msg) => msg.clone(),
        other => other.to_string(),
    }
}
