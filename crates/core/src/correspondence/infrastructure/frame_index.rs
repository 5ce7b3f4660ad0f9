use crate::model::domain::frame::HypothesisFrame;
use crate::shared::error::MotError;

/// Finds the hypothesis frame synchronized with a ground-truth
/// timestamp, within `sync_delta`.
///
/// - No match: a warning is logged and an empty frame is returned, so
///   every object in the paired ground-truth frame becomes a miss.
/// - Exactly one match: that frame is returned.
/// - More than one match: [`MotError::TemporalAmbiguity`], since the
///   stream no longer has a well-defined correspondence at this
///   timestamp.
pub fn hypothesis_frame_at(
    frames: &[HypothesisFrame],
    timestamp: f64,
    sync_delta: f64,
) -> Result<HypothesisFrame, MotError> {
    let matches: Vec<&HypothesisFrame> = frames
        .iter()
        .filter(|frame| (frame.timestamp - timestamp).abs() < sync_delta)
        .collect();

    match matches.len() {
        0 => {
            log::warn!("no hypothesis frame within sync_delta={sync_delta} of timestamp={timestamp}");
            Ok(HypothesisFrame::empty(timestamp))
        }
        1 => Ok(matches[0].clone()),
        count => Err(MotError::TemporalAmbiguity {
            timestamp,
            sync_delta,
            count,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_match_returns_empty_frame_and_warns() {
        let frame = hypothesis_frame_at(&[], 1.0, 0.01).unwrap();
        assert_eq!(frame.timestamp, 1.0);
        assert!(frame.objects.is_empty());
    }

    #[test]
    fn single_match_is_returned() {
        let frames = vec![HypothesisFrame::new(1.0), HypothesisFrame::new(2.0)];
        let frame = hypothesis_frame_at(&frames, 1.0001, 0.01).unwrap();
        assert_eq!(frame.timestamp, 1.0);
    }

    #[test]
    fn two_matches_within_delta_is_an_error() {
        let frames = vec![HypothesisFrame::new(1.0), HypothesisFrame::new(1.0005)];
        let err = hypothesis_frame_at(&frames, 1.0, 0.01).unwrap_err();
        assert_eq!(
            err,
            MotError::TemporalAmbiguity {
                timestamp: 1.0,
                sync_delta: 0.01,
                count: 2,
            }
        );
    }

    #[test]
    fn matches_are_exclusive_at_the_boundary() {
        let frames = vec![HypothesisFrame::new(1.01)];
        let frame = hypothesis_frame_at(&frames, 1.0, 0.01).unwrap();
        assert!(frame.objects.is_empty());
    }
}
