//! Seam to the function approximator that scores (state, action) pairs.

use crate::{Action, Memory, TrainError};

/// Number of floats in an encoded state
pub const STATE_LEN: usize = 12;

/// Actions the learning agent picks between
pub const AGENT_ACTIONS: [Action; 3] = Action::VERTICAL;

/// Width of a feature row: state followed by a one-hot action
pub const FEATURE_LEN: usize = STATE_LEN + AGENT_ACTIONS.len();

/// Value estimator used by the learning agent.
///
/// Implementations are moved onto a worker thread while fitting, so they must
/// be `Send`. Larger predictions mean more preferred actions.
pub trait ValueModel: Send + 'static {
    /// One prediction per feature row
    fn predict(&self, rows: &[Vec<f32>]) -> Result<Vec<f32>, TrainError>;

    /// Fit on the whole batch for `epochs` passes
    fn fit(&mut self, batch: &TrainingBatch, epochs: usize) -> Result<FitReport, TrainError>;
}

/// Outcome of a fitting run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FitReport {
    pub epochs: usize,
    pub samples: usize,
    pub losses: Vec<f32>, // one per epoch
}

impl FitReport {
    pub fn final_loss(&self) -> Option<f32> {
        self.losses.last().copied()
    }
}

/// Features and labels gathered from one or more memories
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingBatch {
    pub features: Vec<Vec<f32>>,
    pub labels: Vec<f32>,
}

impl TrainingBatch {
    /// Concatenate memories in order: feature = state ++ one-hot(action),
    /// label = accumulated value.
    pub fn from_memories(memories: &[&Memory]) -> Self {
        let total = memories.iter().map(|m| m.len()).sum();
        let mut batch = Self {
            features: Vec::with_capacity(total),
            labels: Vec::with_capacity(total),
        };
        for memory in memories {
            for experience in memory.iter() {
                batch
                    .features
                    .push(encode_features(&experience.state, experience.action));
                batch.labels.push(experience.value);
            }
        }
        batch
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// One-hot over [`AGENT_ACTIONS`]; actions outside that set encode as zeros
pub fn one_hot(action: Action) -> [f32; AGENT_ACTIONS.len()] {
    let mut encoded = [0.0; AGENT_ACTIONS.len()];
    if let Some(slot) = AGENT_ACTIONS.iter().position(|a| *a == action) {
        encoded[slot] = 1.0;
    }
    encoded
}

pub fn encode_features(state: &[f32], action: Action) -> Vec<f32> {
    let mut row = Vec::with_capacity(state.len() + AGENT_ACTIONS.len());
    row.extend_from_slice(state);
    row.extend_from_slice(&one_hot(action));
    row
}
