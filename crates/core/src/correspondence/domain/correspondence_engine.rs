use std::collections::{HashMap, HashSet};

use crate::assignment::domain::cost_matrix::CostMatrix;
use crate::assignment::domain::solver::AssignmentSolver;
use crate::model::domain::frame::{GroundTruthFrame, HypothesisFrame};
use crate::model::domain::object::Object;
use crate::shared::object_id::ObjectId;
use crate::statistics::domain::mot_statistics::MotStatistics;

use super::outcome::{ClassifiedObject, OutcomeClass};
use super::persistent_mapping::PersistentMapping;

/// Resolves `id` against `objects`, using the first occurrence and
/// warning if more than one object in the frame shares it. Frames with
/// duplicate ids are a data-quality problem, not a reason to abort an
/// evaluation in progress.
fn find_unique<'a>(objects: &'a [Object], id: &ObjectId, stream_name: &str) -> Option<&'a Object> {
    let mut matches = objects.iter().filter(|object| &object.id == id);
    let first = matches.next()?;
    if matches.next().is_some() {
        log::warn!("more than one {stream_name} object with id {id} in frame, using the first occurrence");
    }
    Some(first)
}

/// Reconciles one ground-truth frame against its paired hypothesis
/// frame, updating the persistent identity mapping and running
/// statistics as it goes.
///
/// The algorithm runs in three phases:
///
/// 1. **Carry-over** — every annotation/hypothesis pair already linked
///    in the persistent mapping is kept as a correspondence if their
///    overlap is still at least `overlap_threshold`.
/// 2. **Assignment** — everything left unmatched after carry-over is
///    handed to a minimum-cost bipartite solver over an inverse-IoU
///    cost matrix; newly formed pairs that conflict with an existing
///    mapping entry are counted as identity switches.
/// 3. **Classification** — every object in the frame is labeled
///    correspondence, miss, false positive, or identity switch.
pub struct CorrespondenceEngine {
    overlap_threshold: f64,
    forbidden_cost: f64,
    solver: Box<dyn AssignmentSolver>,
}

impl CorrespondenceEngine {
    pub fn new(overlap_threshold: f64, forbidden_cost: f64, solver: Box<dyn AssignmentSolver>) -> Self {
        Self {
            overlap_threshold,
            forbidden_cost,
            solver,
        }
    }

    pub fn evaluate_frame(
        &self,
        gt_frame: &GroundTruthFrame,
        hyp_frame: &HypothesisFrame,
        mapping: &mut PersistentMapping,
        stats: &mut MotStatistics,
    ) -> Vec<ClassifiedObject> {
        for object in &gt_frame.objects {
            stats.mark_seen_gt(object.id.clone());
        }
        for object in &hyp_frame.objects {
            stats.mark_seen_hyp(object.id.clone());
        }

        if gt_frame.objects.is_empty() && hyp_frame.objects.is_empty() {
            return Vec::new();
        }

        let mut correspondence: HashMap<ObjectId, ObjectId> = HashMap::new();

        // Phase 1: carry over the persistent mapping where it still holds.
        let carried: Vec<(ObjectId, ObjectId)> = mapping
            .iter()
            .map(|(a, h)| (a.clone(), h.clone()))
            .collect();
        for (a_id, h_id) in carried {
            let Some(a_obj) = find_unique(&gt_frame.objects, &a_id, "ground truth") else {
                continue;
            };
            let Some(h_obj) = find_unique(&hyp_frame.objects, &h_id, "hypothesis") else {
                continue;
            };
            let overlap = a_obj.rect.iou(&h_obj.rect);
            if overlap >= self.overlap_threshold {
                correspondence.insert(a_id, h_id);
                stats.add_overlap(overlap);
            }
        }

        // Phase 2: minimum-cost assignment over everything still unmatched.
        let unmatched_gt: Vec<usize> = (0..gt_frame.objects.len())
            .filter(|&i| !correspondence.contains_key(&gt_frame.objects[i].id))
            .collect();
        let matched_hyp_ids: HashSet<&ObjectId> = correspondence.values().collect();
        let unmatched_hyp: Vec<usize> = (0..hyp_frame.objects.len())
            .filter(|&j| !matched_hyp_ids.contains(&hyp_frame.objects[j].id))
            .collect();

        let mut switched_gt: HashSet<ObjectId> = HashSet::new();
        let mut switched_hyp: HashSet<ObjectId> = HashSet::new();

        if !unmatched_gt.is_empty() && !unmatched_hyp.is_empty() {
            // Dimensioned over the unmatched subsets only: an already
            // corresponded object must never compete for a column or
            // row with one that still needs a match.
            let mut cost =
                CostMatrix::filled_with_forbidden(unmatched_hyp.len(), unmatched_gt.len(), self.forbidden_cost);
            for (ci, &i) in unmatched_gt.iter().enumerate() {
                for (cj, &j) in unmatched_hyp.iter().enumerate() {
                    let overlap = gt_frame.objects[i].rect.iou(&hyp_frame.objects[j].rect);
                    if overlap >= self.overlap_threshold {
                        cost.set(cj, ci, 1.0 / overlap);
                    }
                }
            }

            for (cj, ci) in self.solver.assign(&cost) {
                if ci >= unmatched_gt.len() || cj >= unmatched_hyp.len() || cost.is_forbidden(cj, ci) {
                    continue;
                }
                let i = unmatched_gt[ci];
                let j = unmatched_hyp[cj];

                let a_id = gt_frame.objects[i].id.clone();
                let h_id = hyp_frame.objects[j].id.clone();
                let distance = cost.get(cj, ci);

                // Collect conflicting mapping entries before mutating the
                // mapping, so the order in which conflicts are resolved
                // never changes which pairs are flagged as switches.
                let conflicts: Vec<ObjectId> = mapping
                    .iter()
                    .filter(|(m_a, m_h)| (*m_a == &a_id) != (*m_h == &h_id))
                    .map(|(m_a, _)| m_a.clone())
                    .collect();

                for conflict_a in conflicts {
                    stats.increment_idsw();
                    switched_gt.insert(a_id.clone());
                    switched_hyp.insert(h_id.clone());
                    mapping.remove(&conflict_a);
                }

                correspondence.insert(a_id.clone(), h_id.clone());
                stats.add_overlap(1.0 / distance);
                stats.mark_correspondent(a_id.clone(), h_id.clone());
                mapping.insert(a_id, h_id);
            }
        }

        stats.record_frame(correspondence.len(), gt_frame.objects.len());

        // Phase 3: classify every object in the frame.
        let matched_hyp_ids: HashSet<&ObjectId> = correspondence.values().collect();
        let mut classified = Vec::with_capacity(gt_frame.objects.len() + hyp_frame.objects.len());

        for object in &gt_frame.objects {
            let outcome = if switched_gt.contains(&object.id) {
                OutcomeClass::IdentitySwitch
            } else if correspondence.contains_key(&object.id) {
                OutcomeClass::Correspondence
            } else {
                stats.increment_fn();
                OutcomeClass::Miss
            };
            classified.push(ClassifiedObject {
                object: object.clone(),
                outcome,
            });
        }

        for object in &hyp_frame.objects {
            let outcome = if switched_hyp.contains(&object.id) {
                OutcomeClass::IdentitySwitch
            } else if matched_hyp_ids.contains(&object.id) {
                OutcomeClass::Correspondence
            } else {
                stats.increment_fp();
                OutcomeClass::FalsePositive
            };
            classified.push(ClassifiedObject {
                object: object.clone(),
                outcome,
            });
        }

        classified
    }
}
