use miette::Diagnostic;
use thiserror::Error;

/// Result type for catalog lookups (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("unknown template '{key}'")]
    #[diagnostic(code(biolens::unknown_template))]
    UnknownTemplate {
        key: String,
        #[help]
        help: Option<String>,
    },
}

impl Error {
    /// Build an unknown-template error, suggesting close matches from `known`.
    pub fn unknown_template<'a>(key: &str, known: impl IntoIterator<Item = &'a str>) -> Box<Self> {
        let candidates: Vec<&str> = known
            .into_iter()
            .filter(|candidate| is_close_match(key, candidate))
            .collect();

        let help = match candidates.as_slice() {
            [] => "run `biolens list` to see available templates".to_string(),
            [single] => format!("did you mean '{}'?", single),
            many => format!("did you mean one of: {}?", many.join(", ")),
        };

        Box::new(Error::UnknownTemplate {
            key: key.to_string(),
            help: Some(help),
        })
    }
}

/// A key is a close match when every segment it names is a segment of the
/// candidate, or when both end in the same segment. Partial segments never
/// match, so `/` or `dom` get no suggestion.
fn is_close_match(key: &str, candidate: &str) -> bool {
    let segments: Vec<&str> = key.split('/').filter(|s| !s.is_empty()).collect();
    let Some(last) = segments.last() else {
        return false;
    };

    candidate.rsplit('/').next() == Some(*last)
        || segments
            .iter()
            .all(|segment| candidate.split('/').any(|s| s == *segment))
}
