//! JSON wire format for ground-truth and hypothesis files, and its
//! conversion into the evaluation core's domain model.
//!
//! This is the one place `serde_json` is used: the core crate never
//! parses JSON, it only ever sees fully-typed [`AnnotationSet`]s and
//! [`HypothesisSet`]s.

use std::fmt;

use mot_eval_core::{
    AnnotationSet, GroundTruthFrame, HypothesisFrame, HypothesisSet, MotError, Object, ObjectId, Rect,
};
use serde::{Deserialize, Serialize};

/// An object id may be spelled as a JSON string or a JSON integer in
/// the wild; both are coerced to the same canonical string form.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum WireId {
    String(String),
    Integer(i64),
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireId::String(s) => write!(f, "{s}"),
            WireId::Integer(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct WireObject {
    pub id: WireId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, Deserialize, Serialize, Default)]
pub struct WireFrame {
    pub timestamp: f64,
    #[serde(default)]
    pub num: Option<u64>,
    /// Per-frame class tag. Distinct from the set-level `class` field;
    /// the reference format carries both.
    #[serde(default)]
    pub class: String,
    #[serde(default, alias = "annotations", alias = "hypotheses")]
    pub objects: Vec<WireObject>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct WireSet {
    pub filename: String,
    pub class: String,
    pub frames: Vec<WireFrame>,
}

/// Errors produced while converting a parsed wire document into the
/// evaluation core's domain model.
#[derive(Debug, thiserror::Error)]
pub enum WireConversionError {
    #[error("frame at timestamp {timestamp} has invalid object {id}: {source}")]
    InvalidObject {
        timestamp: f64,
        id: WireId,
        #[source]
        source: MotError,
    },
}

fn convert_object(wire: &WireObject, timestamp: f64) -> Result<Object, WireConversionError> {
    let id = ObjectId::new(wire.id.to_string()).map_err(|source| WireConversionError::InvalidObject {
        timestamp,
        id: wire.id.clone(),
        source,
    })?;
    let rect =
        Rect::new(wire.x, wire.y, wire.width, wire.height).map_err(|source| WireConversionError::InvalidObject {
            timestamp,
            id: wire.id.clone(),
            source,
        })?;
    Ok(Object::new(id, rect))
}

pub fn into_annotation_set(wire: WireSet) -> Result<AnnotationSet, WireConversionError> {
    let mut frames = Vec::with_capacity(wire.frames.len());
    for wire_frame in wire.frames {
        let mut objects = Vec::with_capacity(wire_frame.objects.len());
        for wire_object in &wire_frame.objects {
            objects.push(convert_object(wire_object, wire_frame.timestamp)?);
        }
        frames.push(GroundTruthFrame {
            timestamp: wire_frame.timestamp,
            number: wire_frame.num,
            class_tag: wire_frame.class,
            objects,
        });
    }
    Ok(AnnotationSet {
        filename: wire.filename,
        class_tag: wire.class,
        frames,
    })
}

pub fn into_hypothesis_set(wire: WireSet) -> Result<HypothesisSet, WireConversionError> {
    let mut frames = Vec::with_capacity(wire.frames.len());
    for wire_frame in wire.frames {
        let mut objects = Vec::with_capacity(wire_frame.objects.len());
        for wire_object in &wire_frame.objects {
            objects.push(convert_object(wire_object, wire_frame.timestamp)?);
        }
        frames.push(HypothesisFrame {
            timestamp: wire_frame.timestamp,
            number: wire_frame.num,
            class_tag: wire_frame.class,
            objects,
        });
    }
    Ok(HypothesisSet {
        filename: wire.filename,
        class_tag: wire.class,
        frames,
    })
}
