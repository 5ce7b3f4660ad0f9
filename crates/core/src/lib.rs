//! CLEAR MOT evaluation core.
//!
//! Compares a ground-truth object stream against a hypothesis stream,
//! frame by frame, and produces the standard CLEAR MOT metrics (MOTA,
//! MOTP) together with track-coverage statistics. See
//! [`evaluation::domain::mot_evaluator::MotEvaluator`] for the entry
//! point.

pub mod assignment;
pub mod correspondence;
pub mod evaluation;
pub mod model;
pub mod shared;
pub mod statistics;

pub use assignment::domain::cost_matrix::CostMatrix;
pub use assignment::domain::solver::AssignmentSolver;
pub use assignment::infrastructure::kuhn_munkres_solver::KuhnMunkresSolver;
pub use correspondence::domain::outcome::{ClassifiedObject, OutcomeClass};
pub use correspondence::domain::persistent_mapping::PersistentMapping;
pub use evaluation::domain::debug_record::FrameRecord;
pub use evaluation::domain::mot_evaluator::{EvaluatorConfig, MotEvaluator};
pub use model::domain::frame::{GroundTruthFrame, HypothesisFrame};
pub use model::domain::object::Object;
pub use model::domain::track_set::{AnnotationSet, HypothesisSet};
pub use model::domain::validation::validate;
pub use shared::error::MotError;
pub use shared::object_id::ObjectId;
pub use shared::rect::Rect;
pub use statistics::domain::mot_statistics::MotStatistics;
