use thiserror::Error;

/// Errors surfaced by the evaluation core.
///
/// These map onto the validation rules in the data model: malformed
/// geometry and ids are rejected at construction time, temporal
/// ambiguity is rejected when a hypothesis stream is indexed, and the
/// two derived metrics (MOTA, MOTP) reject the degenerate inputs they
/// cannot be computed from.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotError {
    #[error("rectangle width and height must be non-negative, got width={width}, height={height}")]
    InvalidRect { width: f64, height: f64 },

    #[error("object id must not be empty")]
    EmptyObjectId,

    #[error(
        "found {count} hypothesis frames within sync_delta={sync_delta} of timestamp={timestamp}, expected at most one"
    )]
    TemporalAmbiguity {
        timestamp: f64,
        sync_delta: f64,
        count: usize,
    },

    #[error("MOTA requires at least one ground-truth object to have been seen, got N_gt={n_gt}")]
    EmptyGroundTruth { n_gt: i64 },

    #[error("MOTP requires at least one correspondence, got N_corr={n_corr}")]
    NoCorrespondences { n_corr: i64 },

    #[error("total overlap accumulator must be non-negative, got {0}")]
    NegativeOverlap(f64),

    #[error(
        "tracking counters must be non-negative, got false_negatives={false_negatives}, false_positives={false_positives}, identity_switches={identity_switches}"
    )]
    InvalidCounters {
        false_negatives: i64,
        false_positives: i64,
        identity_switches: i64,
    },
}
