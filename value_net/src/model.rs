use burn::backend::{Autodiff, NdArray};
use burn::module::AutodiffModule;
use burn::optim::adaptor::OptimizerAdaptor;
use burn::optim::{Adam, AdamConfig, GradientsParams, Optimizer};
use burn::prelude::*;
use burn::tensor::TensorData;
use log::debug;

use pong_core::{FitReport, Params, TrainError, TrainingBatch, ValueModel, FEATURE_LEN};

use crate::{ValueNetwork, ValueNetworkConfig};

type InferBackend = NdArray<f32>;
type TrainBackend = Autodiff<InferBackend>;

/// Multi-layer perceptron value model: dense layers with tanh, Adam, mean
/// squared error, one full-batch update per epoch.
pub struct MlpValueModel {
    network: ValueNetwork<TrainBackend>,
    optimizer: OptimizerAdaptor<Adam, ValueNetwork<TrainBackend>, TrainBackend>,
    learning_rate: f64,
    input_size: usize,
    device: <TrainBackend as Backend>::Device,
}

impl MlpValueModel {
    pub fn new(input_size: usize, learning_rate: f64) -> Self {
        let device = Default::default();
        let network = ValueNetworkConfig::new(input_size).init(&device);
        let optimizer = AdamConfig::new().init();

        Self {
            network,
            optimizer,
            learning_rate,
            input_size,
            device,
        }
    }

    /// Model sized for encoded Pong features
    pub fn for_pong() -> Self {
        Self::new(FEATURE_LEN, Params::LEARNING_RATE)
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    fn check_width(&self, rows: &[Vec<f32>]) -> Result<(), TrainError> {
        match rows.iter().find(|row| row.len() != self.input_size) {
            Some(row) => Err(TrainError::Model(format!(
                "expected {} features per row, got {}",
                self.input_size,
                row.len()
            ))),
            None => Ok(()),
        }
    }
}

/// Flatten rows into a [rows, width] tensor
fn rows_to_tensor<B: Backend>(rows: &[Vec<f32>], width: usize, device: &B::Device) -> Tensor<B, 2> {
    let flat: Vec<f32> = rows.iter().flatten().copied().collect();
    Tensor::<B, 1>::from_data(TensorData::from(flat.as_slice()), device)
        .reshape([rows.len() as i32, width as i32])
}

fn to_vec<B: Backend, const D: usize>(tensor: Tensor<B, D>) -> Result<Vec<f32>, TrainError> {
    tensor
        .into_data()
        .to_vec::<f32>()
        .map_err(|err| TrainError::Model(format!("tensor extraction failed: {err:?}")))
}

impl ValueModel for MlpValueModel {
    fn predict(&self, rows: &[Vec<f32>]) -> Result<Vec<f32>, TrainError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        self.check_width(rows)?;

        let network = self.network.valid();
        let input = rows_to_tensor::<InferBackend>(rows, self.input_size, &self.device);
        to_vec(network.forward(input))
    }

    fn fit(&mut self, batch: &TrainingBatch, epochs: usize) -> Result<FitReport, TrainError> {
        if batch.features.len() != batch.labels.len() {
            return Err(TrainError::Model(format!(
                "{} feature rows but {} labels",
                batch.features.len(),
                batch.labels.len()
            )));
        }
        if batch.is_empty() {
            return Ok(FitReport::default());
        }
        self.check_width(&batch.features)?;

        let samples = batch.len();
        let inputs = rows_to_tensor::<TrainBackend>(&batch.features, self.input_size, &self.device);
        let targets = Tensor::<TrainBackend, 1>::from_data(
            TensorData::from(batch.labels.as_slice()),
            &self.device,
        )
        .reshape([samples as i32, 1]);

        let mut losses = Vec::with_capacity(epochs);
        for epoch in 0..epochs {
            let predicted = self.network.forward(inputs.clone());

            // MSE loss
            let diff = predicted - targets.clone();
            let loss = (diff.clone() * diff).mean();

            let loss_val = to_vec(loss.clone())?[0];
            if !loss_val.is_finite() {
                return Err(TrainError::Model(format!(
                    "loss became {loss_val} at epoch {epoch}"
                )));
            }
            losses.push(loss_val);

            let grads = loss.backward();
            let grads = GradientsParams::from_grads(grads, &self.network);
            self.network = self
                .optimizer
                .step(self.learning_rate, self.network.clone(), grads);
        }

        debug!(
            "Fitted {} samples for {} epochs, loss {:?}",
            samples,
            epochs,
            losses.last()
        );
        Ok(FitReport {
            epochs,
            samples,
            losses,
        })
    }
}
