use crate::assignment::domain::solver::AssignmentSolver;
use crate::assignment::infrastructure::kuhn_munkres_solver::KuhnMunkresSolver;
use crate::correspondence::domain::correspondence_engine::CorrespondenceEngine;
use crate::correspondence::domain::persistent_mapping::PersistentMapping;
use crate::correspondence::infrastructure::frame_index;
use crate::model::domain::track_set::{AnnotationSet, HypothesisSet};
use crate::shared::error::MotError;
use crate::statistics::domain::mot_statistics::MotStatistics;

use super::debug_record::FrameRecord;

/// Minimum IoU for a ground-truth/hypothesis pair to be considered a
/// correspondence at all.
pub const DEFAULT_OVERLAP_THRESHOLD: f64 = 0.2;
/// Maximum timestamp gap for a hypothesis frame to be treated as
/// synchronized with a ground-truth frame.
pub const DEFAULT_SYNC_DELTA: f64 = 1e-3;
/// Cost sentinel marking a pairing the assignment solver must never
/// propose as real, regardless of how it is forced to fill out a
/// complete assignment.
pub const DEFAULT_FORBIDDEN_COST: f64 = 1e9;

/// Tunable parameters of one evaluation run.
#[derive(Clone, Debug)]
pub struct EvaluatorConfig {
    pub overlap_threshold: f64,
    pub sync_delta: f64,
    pub forbidden_cost: f64,
    /// Whether the per-frame classification stream is retained.
    /// Disabling this does not change MOTA/MOTP/coverage results, only
    /// whether [`MotEvaluator::debug_frames`] holds classifications.
    pub debug_enabled: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            overlap_threshold: DEFAULT_OVERLAP_THRESHOLD,
            sync_delta: DEFAULT_SYNC_DELTA,
            forbidden_cost: DEFAULT_FORBIDDEN_COST,
            debug_enabled: true,
        }
    }
}

/// Drives a single CLEAR MOT evaluation pass over a ground-truth and
/// hypothesis stream pair.
///
/// An evaluator runs its pass at most once per [`MotEvaluator::reset`]:
/// calling [`MotEvaluator::evaluate`] again before resetting is a no-op
/// that returns the already-computed result, since reprocessing
/// ground-truth frames against an already-mutated persistent mapping
/// would double-count every statistic.
pub struct MotEvaluator {
    annotations: AnnotationSet,
    hypotheses: HypothesisSet,
    config: EvaluatorConfig,
    engine: CorrespondenceEngine,
    mapping: PersistentMapping,
    statistics: MotStatistics,
    debug_frames: Vec<FrameRecord>,
    evaluated: bool,
}

impl MotEvaluator {
    pub fn new(annotations: AnnotationSet, hypotheses: HypothesisSet, config: EvaluatorConfig) -> Self {
        Self::with_solver(annotations, hypotheses, config, Box::new(KuhnMunkresSolver::new()))
    }

    pub fn with_solver(
        annotations: AnnotationSet,
        hypotheses: HypothesisSet,
        config: EvaluatorConfig,
        solver: Box<dyn AssignmentSolver>,
    ) -> Self {
        let engine = CorrespondenceEngine::new(config.overlap_threshold, config.forbidden_cost, solver);
        Self {
            annotations,
            hypotheses,
            config,
            engine,
            mapping: PersistentMapping::new(),
            statistics: MotStatistics::new(),
            debug_frames: Vec::new(),
            evaluated: false,
        }
    }

    /// Clears every accumulated result so the same evaluator can be
    /// run again, e.g. after swapping in a different configuration.
    pub fn reset(&mut self) {
        self.mapping.clear();
        self.statistics.reset();
        self.debug_frames.clear();
        self.evaluated = false;
    }

    /// Runs the evaluation. Idempotent: a second call before `reset`
    /// returns immediately without altering any accumulated result.
    pub fn evaluate(&mut self) -> Result<(), MotError> {
        if self.evaluated {
            return Ok(());
        }

        for gt_frame in &self.annotations.frames {
            let hyp_frame = frame_index::hypothesis_frame_at(
                &self.hypotheses.frames,
                gt_frame.timestamp,
                self.config.sync_delta,
            )?;

            let classified = self
                .engine
                .evaluate_frame(gt_frame, &hyp_frame, &mut self.mapping, &mut self.statistics);

            self.debug_frames.push(FrameRecord {
                timestamp: gt_frame.timestamp,
                number: gt_frame.number,
                class_tag: gt_frame.class_tag.clone(),
                classified: if self.config.debug_enabled { classified } else { Vec::new() },
            });
        }

        self.evaluated = true;
        Ok(())
    }

    pub fn evaluated(&self) -> bool {
        self.evaluated
    }

    pub fn statistics(&self) -> &MotStatistics {
        &self.statistics
    }

    pub fn debug_frames(&self) -> &[FrameRecord] {
        &self.debug_frames
    }

    pub fn annotations(&self) -> &AnnotationSet {
        &self.annotations
    }

    pub fn hypotheses(&self) -> &HypothesisSet {
        &self.hypotheses
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::domain::frame::GroundTruthFrame;
    use crate::model::domain::object::Object;
    use crate::model::domain::frame::HypothesisFrame;
    use crate::shared::object_id::ObjectId;
    use crate::shared::rect::Rect;

    fn object(id: &str, x: f64) -> Object {
        Object::new(ObjectId::new(id).unwrap(), Rect::new(x, 0.0, 1.0, 1.0).unwrap())
    }

    fn perfect_streams() -> (AnnotationSet, HypothesisSet) {
        let mut gt_frame = GroundTruthFrame::new(0.0);
        gt_frame.objects = vec![object("a1", 0.0)];
        let mut hyp_frame = HypothesisFrame::new(0.0);
        hyp_frame.objects = vec![object("h1", 0.0)];

        (
            AnnotationSet {
                frames: vec![gt_frame],
                ..Default::default()
            },
            HypothesisSet {
                frames: vec![hyp_frame],
                ..Default::default()
            },
        )
    }

    #[test]
    fn evaluate_is_idempotent() {
        let (annotations, hypotheses) = perfect_streams();
        let mut evaluator = MotEvaluator::new(annotations, hypotheses, EvaluatorConfig::default());

        evaluator.evaluate().unwrap();
        let mota_first = evaluator.statistics().mota().unwrap();
        evaluator.evaluate().unwrap();
        let mota_second = evaluator.statistics().mota().unwrap();

        assert_eq!(mota_first, mota_second);
        assert_eq!(evaluator.debug_frames().len(), 1);
    }

    #[test]
    fn reset_allows_a_fresh_pass() {
        let (annotations, hypotheses) = perfect_streams();
        let mut evaluator = MotEvaluator::new(annotations, hypotheses, EvaluatorConfig::default());
        evaluator.evaluate().unwrap();
        evaluator.reset();
        assert!(!evaluator.evaluated());
        assert!(evaluator.debug_frames().is_empty());
        evaluator.evaluate().unwrap();
        assert_eq!(evaluator.statistics().mota().unwrap(), 1.0);
    }

    #[test]
    fn identical_streams_score_a_perfect_mota_and_motp() {
        let (annotations, hypotheses) = perfect_streams();
        let mut evaluator = MotEvaluator::new(annotations, hypotheses, EvaluatorConfig::default());
        evaluator.evaluate().unwrap();
        assert_eq!(evaluator.statistics().mota().unwrap(), 1.0);
        assert_eq!(evaluator.statistics().motp().unwrap(), 1.0);
    }

    #[test]
    fn empty_hypotheses_miss_every_annotation() {
        let (annotations, _) = perfect_streams();
        let hypotheses = HypothesisSet::default();
        let mut evaluator = MotEvaluator::new(annotations, hypotheses, EvaluatorConfig::default());
        evaluator.evaluate().unwrap();
        assert_eq!(evaluator.statistics().false_negatives(), 1);
        assert_eq!(evaluator.statistics().false_positives(), 0);
    }

    #[test]
    fn empty_annotations_yield_no_false_negatives_but_mota_is_undefined() {
        let annotations = AnnotationSet::default();
        let (_, hypotheses) = perfect_streams();
        let mut evaluator = MotEvaluator::new(annotations, hypotheses, EvaluatorConfig::default());
        evaluator.evaluate().unwrap();
        assert_eq!(evaluator.statistics().false_negatives(), 0);
        assert!(evaluator.statistics().mota().is_err());
    }

    #[test]
    fn raising_overlap_threshold_cannot_decrease_misses_or_increase_correspondences() {
        // a1/h1 overlap partially (IoU < 1): loose threshold accepts it,
        // strict threshold does not.
        let mut gt_frame = GroundTruthFrame::new(0.0);
        gt_frame.objects = vec![object("a1", 0.0)];
        let mut hyp_frame = HypothesisFrame::new(0.0);
        hyp_frame.objects = vec![object("h1", 0.5)];
        let annotations = AnnotationSet {
            frames: vec![gt_frame],
            ..Default::default()
        };
        let hypotheses = HypothesisSet {
            frames: vec![hyp_frame],
            ..Default::default()
        };

        let loose_config = EvaluatorConfig {
            overlap_threshold: 0.1,
            ..EvaluatorConfig::default()
        };
        let mut loose = MotEvaluator::new(annotations.clone(), hypotheses.clone(), loose_config);
        loose.evaluate().unwrap();

        let strict_config = EvaluatorConfig {
            overlap_threshold: 0.9,
            ..EvaluatorConfig::default()
        };
        let mut strict = MotEvaluator::new(annotations, hypotheses, strict_config);
        strict.evaluate().unwrap();

        assert!(strict.statistics().false_negatives() >= loose.statistics().false_negatives());
        assert!(strict.statistics().correspondences() <= loose.statistics().correspondences());
    }

    #[test]
    fn disabling_debug_keeps_frame_metadata_but_drops_classifications() {
        let (annotations, hypotheses) = perfect_streams();
        let config = EvaluatorConfig {
            debug_enabled: false,
            ..EvaluatorConfig::default()
        };
        let mut evaluator = MotEvaluator::new(annotations, hypotheses, config);
        evaluator.evaluate().unwrap();
        assert_eq!(evaluator.debug_frames().len(), 1);
        assert!(evaluator.debug_frames()[0].classified.is_empty());
        assert_eq!(evaluator.statistics().mota().unwrap(), 1.0);
    }

    #[test]
    fn duplicate_hypothesis_timestamp_is_a_temporal_ambiguity_error() {
        let (annotations, _) = perfect_streams();
        let hypotheses = HypothesisSet {
            frames: vec![HypothesisFrame::new(0.0), HypothesisFrame::new(0.0)],
            ..Default::default()
        };
        let mut evaluator = MotEvaluator::new(annotations, hypotheses, EvaluatorConfig::default());
        assert!(matches!(
            evaluator.evaluate(),
            Err(MotError::TemporalAmbiguity { .. })
        ));
    }
}
