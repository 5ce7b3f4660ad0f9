use crate::shared::object_id::ObjectId;
use crate::shared::rect::Rect;

/// A single tracked object within one frame: an identity and its
/// bounding box at that instant.
#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    pub id: ObjectId,
    pub rect: Rect,
}

impl Object {
    pub fn new(id: ObjectId, rect: Rect) -> Self {
        Self { id, rect }
    }
}
