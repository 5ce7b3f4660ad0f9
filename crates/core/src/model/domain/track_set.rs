use super::frame::{GroundTruthFrame, HypothesisFrame};

/// A full ground-truth stream: every annotated frame for one sequence.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct AnnotationSet {
    pub filename: String,
    pub class_tag: String,
    pub frames: Vec<GroundTruthFrame>,
}

/// A full hypothesis stream: every frame a tracker reported for one
/// sequence.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct HypothesisSet {
    pub filename: String,
    pub class_tag: String,
    pub frames: Vec<HypothesisFrame>,
}
