//! Integration tests for the public segmentation API

use std::sync::Arc;

use proseg_core::lexicon::{self, load_lexicon_file};
use proseg_core::{BoundaryOracle, Config, Error, Input, Lexicon, Segmented, Segmenter};

const SEMICOLON_TERMINATORS: &str = "terminators = [\".\", \"!\", \"?\", \";\"]";

fn semicolon_lexicon() -> Arc<Lexicon> {
    let source = lexicon::embedded_source()
        .replace("terminators = [\".\", \"!\", \"?\"]", SEMICOLON_TERMINATORS);
    Arc::new(Lexicon::from_toml_str(&source).unwrap())
}

#[derive(Debug)]
struct WholeText;

impl BoundaryOracle for WholeText {
    fn name(&self) -> &str {
        "whole-text"
    }

    fn segment(&self, text: &str) -> Vec<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            Vec::new()
        } else {
            vec![trimmed.to_string()]
        }
    }
}

#[test]
fn test_custom_lexicon_terminators() {
    let text = "One; Two. Three.";

    let custom = Segmenter::with_lexicon(semicolon_lexicon(), Config::default()).unwrap();
    assert_eq!(
        custom.segment_sentences(text).unwrap(),
        vec!["One;", "Two.", "Three."]
    );

    let default = Segmenter::new().unwrap();
    assert_eq!(
        default.segment_sentences(text).unwrap(),
        vec!["One; Two.", "Three."]
    );
}

#[test]
fn test_invalid_lexicon_is_rejected() {
    let source = lexicon::embedded_source().replace(
        "terminators = [\".\", \"!\", \"?\"]",
        "terminators = [\"a\"]",
    );
    assert!(matches!(
        Lexicon::from_toml_str(&source),
        Err(Error::Lexicon(_))
    ));
    assert!(matches!(
        Lexicon::from_toml_str("not = [valid"),
        Err(Error::Lexicon(_))
    ));
}

#[test]
fn test_lexicon_file_round_trip() {
    let path = std::env::temp_dir().join(format!("proseg-lexicon-{}.toml", std::process::id()));
    std::fs::write(&path, lexicon::embedded_source()).unwrap();

    let loaded = load_lexicon_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded.code(), "en");
    assert_eq!(loaded.terminators(), lexicon::english().unwrap().terminators());
    assert!(matches!(
        load_lexicon_file("/nonexistent/proseg/lexicon.toml"),
        Err(Error::Io(_))
    ));
}

#[test]
fn test_uax29_oracle() {
    let config = Config::builder().oracle("uax29").build().unwrap();
    let segmenter = Segmenter::with_config(config).unwrap();

    assert_eq!(segmenter.oracle_name(), "uax29");
    assert_eq!(
        segmenter
            .segment_sentences("Hello world. This is a test.")
            .unwrap(),
        vec!["Hello world.", "This is a test."]
    );
}

#[test]
fn test_caller_supplied_oracle() {
    let segmenter = Segmenter::with_oracle(Arc::new(WholeText), Config::default()).unwrap();

    assert_eq!(segmenter.oracle_name(), "whole-text");
    assert_eq!(
        segmenter.segment_sentences("First one. Second one.").unwrap(),
        vec!["First one. Second one."]
    );
    // The split cascade still runs after a permissive oracle
    assert_eq!(
        segmenter.segment_sentences("Really? Yes! Fine.").unwrap(),
        vec!["Really?", "Yes!", "Fine."]
    );
}

#[test]
fn test_process_reader_input() {
    let segmenter = Segmenter::new().unwrap();
    let reader = std::io::Cursor::new("Dr. Smith arrived. He sat down.\n\nThe end.".as_bytes().to_vec());
    let output = segmenter.process(Input::from_reader(reader)).unwrap();

    assert_eq!(output.paragraphs.len(), 2);
    assert_eq!(
        output.sentences().collect::<Vec<_>>(),
        vec!["Dr. Smith arrived.", "He sat down.", "The end."]
    );
    assert_eq!(output.metadata.split_dialog, segmenter.config().split_dialog());
}

#[test]
fn test_paragraphs_from_segment_text() {
    let segmenter = Segmenter::new().unwrap();
    let segmented = segmenter
        .segment_text("A first. A second.\n\n\nA third.", false)
        .unwrap();

    match segmented {
        Segmented::Paragraphs(paragraphs) => {
            assert_eq!(paragraphs.len(), 2);
            assert_eq!(paragraphs[0], vec!["A first.", "A second."]);
            assert_eq!(paragraphs[1], vec!["A third."]);
        }
        Segmented::Flat(_) => panic!("expected paragraphs"),
    }
}

#[test]
fn test_concurrent_use() {
    let segmenter = Arc::new(Segmenter::new().unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let segmenter = Arc::clone(&segmenter);
            std::thread::spawn(move || {
                let text = format!("Worker {i} started. It finished.");
                segmenter.segment_sentences(&text).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let sentences = handle.join().unwrap();
        assert_eq!(
            sentences,
            vec![format!("Worker {i} started."), "It finished.".to_string()]
        );
    }
}
