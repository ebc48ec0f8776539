use thiserror::Error;

/// Structural defects in a match record.
///
/// Any of these aborts the whole operation; there are no partial results
/// and no silent skips (a skipped delivery would corrupt the ball-count
/// denominators used for rate metrics).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchDataError {
    #[error("match record has no innings")]
    EmptyMatch,

    #[error("malformed innings {innings}: missing `{field}`")]
    MalformedInnings { innings: usize, field: &'static str },

    #[error("malformed delivery at innings {innings}, delivery {delivery}: missing or invalid `{field}`")]
    MalformedDelivery {
        innings: usize,
        delivery: usize,
        field: &'static str,
    },
}

/// Failures while turning a cricsheet YAML document into a `MatchRecord`.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Invalid(#[from] MatchDataError),
}

/// Failures while profiling a tabular CSV dataset.
#[derive(Error, Debug)]
pub enum TabularError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset has no columns")]
    Empty,
}
