use std::collections::HashSet;

use super::frame::FrameLike;
use super::track_set::{AnnotationSet, HypothesisSet};

/// Checks a single stream for ambiguous (duplicated) object ids within
/// any one frame. The Rust type system already guarantees the fields
/// the original untyped format had to check for by hand, so this is
/// the one structural property left to verify: an id that occurs twice
/// in the same frame could refer to either object at lookup time.
fn validate_frames<F: FrameLike>(frames: &[F], stream_name: &str) -> bool {
    let mut ok = true;
    for frame in frames {
        let mut seen = HashSet::new();
        for object in frame.objects() {
            if !seen.insert(object.id.clone()) {
                log::warn!(
                    "{stream_name} frame at timestamp {} (frame {:?}) has an ambiguous id: {}",
                    frame.timestamp(),
                    frame.number(),
                    object.id
                );
                ok = false;
            }
        }
    }
    ok
}

/// Validates a ground-truth/hypothesis pair before evaluation.
///
/// Returns `(annotations_ok, hypotheses_ok)`; a `false` in either slot
/// means that stream contains at least one frame with a duplicated id.
/// Evaluation does not require this check to pass — the correspondence
/// engine's duplicate-id defenses (resolve-and-warn-on-the-first-match)
/// make evaluation well-defined regardless — but callers that want to
/// know *why* a result looks off should run it first.
pub fn validate(annotations: &AnnotationSet, hypotheses: &HypothesisSet) -> (bool, bool) {
    (
        validate_frames(&annotations.frames, "ground truth"),
        validate_frames(&hypotheses.frames, "hypothesis"),
    )
}
