use crate::correspondence::domain::outcome::ClassifiedObject;

/// The per-frame debug stream: one record per ground-truth frame
/// processed, naming its classified objects.
///
/// When debugging is disabled the record is still appended (so frame
/// count and timestamps stay inspectable) but `classified` is left
/// empty rather than holding a list nobody asked to keep around.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameRecord {
    pub timestamp: f64,
    pub number: Option<u64>,
    pub class_tag: String,
    pub classified: Vec<ClassifiedObject>,
}
