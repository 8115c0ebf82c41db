// ABOUTME: Small feed-forward regression network with dropout, MSE loss and Adam
// ABOUTME: Dense(5->32 relu) -> Dropout -> Dense(32->16 relu) -> Dense(16->1 linear)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Volume Network
//!
//! A deliberately tiny multilayer perceptron. The per-user dataset is a handful
//! of sessions, so the whole forward/backward pass is plain `Vec<f64>` math with
//! no tensor library.
//!
//! Weights use Glorot-uniform initialization and zero biases. Dropout is the
//! inverted variant: kept activations are scaled by `1 / (1 - rate)` during
//! training so inference needs no rescaling.

use crate::dataset::FeatureVector;
use crate::error::EstimatorError;
use pierre_quest_core::constants::estimator::{
    ADAM_BETA1, ADAM_BETA2, ADAM_EPSILON, HIDDEN_UNITS_1, HIDDEN_UNITS_2, INPUT_FEATURES,
    LOG_EVERY_EPOCHS, PARAMETER_SCHEMA_VERSION,
};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Layer activation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    /// Rectified linear unit
    Relu,
    /// Identity
    Linear,
}

impl Activation {
    fn apply(self, value: f64) -> f64 {
        match self {
            Self::Relu => value.max(0.0),
            Self::Linear => value,
        }
    }

    fn derivative(self, pre_activation: f64) -> f64 {
        match self {
            Self::Relu => {
                if pre_activation > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Linear => 1.0,
        }
    }
}

/// Fully connected layer; `weights` is row-major by output unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseLayer {
    /// Input width
    pub inputs: usize,
    /// Output width
    pub outputs: usize,
    /// Activation applied to the weighted sum
    pub activation: Activation,
    /// `outputs * inputs` weights
    pub weights: Vec<f64>,
    /// One bias per output
    pub biases: Vec<f64>,
}

impl DenseLayer {
    fn glorot_uniform<R: Rng>(
        inputs: usize,
        outputs: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Self {
        let limit = (6.0 / (inputs + outputs) as f64).sqrt();
        let weights = (0..inputs * outputs)
            .map(|_| rng.gen_range(-limit..limit))
            .collect();
        Self {
            inputs,
            outputs,
            activation,
            weights,
            biases: vec![0.0; outputs],
        }
    }

    fn pre_activation(&self, input: &[f64]) -> Vec<f64> {
        self.weights
            .chunks(self.inputs)
            .zip(&self.biases)
            .map(|(row, bias)| row.iter().zip(input).map(|(w, x)| w * x).sum::<f64>() + bias)
            .collect()
    }

    fn activate(&self, pre: &[f64]) -> Vec<f64> {
        pre.iter().map(|&z| self.activation.apply(z)).collect()
    }

    /// Accumulate gradients for one sample and return the gradient w.r.t. the input
    fn backward(
        &self,
        input: &[f64],
        pre: &[f64],
        grad_output: &[f64],
        grads: &mut LayerGradients,
    ) -> Vec<f64> {
        let mut grad_input = vec![0.0; self.inputs];
        for (unit, (&z, &upstream)) in pre.iter().zip(grad_output).enumerate() {
            let delta = upstream * self.activation.derivative(z);
            grads.biases[unit] += delta;
            let row = unit * self.inputs;
            for (i, &x) in input.iter().enumerate() {
                grads.weights[row + i] += delta * x;
                grad_input[i] += self.weights[row + i] * delta;
            }
        }
        grad_input
    }

    fn is_finite(&self) -> bool {
        self.weights.iter().chain(&self.biases).all(|v| v.is_finite())
    }
}

#[derive(Debug, Clone)]
struct LayerGradients {
    weights: Vec<f64>,
    biases: Vec<f64>,
}

impl LayerGradients {
    fn zeros(layer: &DenseLayer) -> Self {
        Self {
            weights: vec![0.0; layer.weights.len()],
            biases: vec![0.0; layer.biases.len()],
        }
    }

    fn reset(&mut self) {
        self.weights.fill(0.0);
        self.biases.fill(0.0);
    }
}

/// First and second moment estimates for one layer
#[derive(Debug, Clone)]
struct AdamMoments {
    weights_m: Vec<f64>,
    weights_v: Vec<f64>,
    biases_m: Vec<f64>,
    biases_v: Vec<f64>,
}

impl AdamMoments {
    fn zeros(layer: &DenseLayer) -> Self {
        Self {
            weights_m: vec![0.0; layer.weights.len()],
            weights_v: vec![0.0; layer.weights.len()],
            biases_m: vec![0.0; layer.biases.len()],
            biases_v: vec![0.0; layer.biases.len()],
        }
    }
}

/// Adam optimizer state across all layers
#[derive(Debug, Clone)]
struct Adam {
    learning_rate: f64,
    step: i32,
    moments: Vec<AdamMoments>,
}

impl Adam {
    fn new(learning_rate: f64, layers: &[DenseLayer]) -> Self {
        Self {
            learning_rate,
            step: 0,
            moments: layers.iter().map(AdamMoments::zeros).collect(),
        }
    }

    fn apply(&mut self, layers: &mut [DenseLayer], grads: &[LayerGradients]) {
        self.step = self.step.saturating_add(1);
        let correction1 = 1.0 - ADAM_BETA1.powi(self.step);
        let correction2 = 1.0 - ADAM_BETA2.powi(self.step);
        let lr = self.learning_rate;

        for ((layer, grad), moments) in layers.iter_mut().zip(grads).zip(&mut self.moments) {
            Self::update(
                &mut layer.weights,
                &grad.weights,
                &mut moments.weights_m,
                &mut moments.weights_v,
                lr,
                (correction1, correction2),
            );
            Self::update(
                &mut layer.biases,
                &grad.biases,
                &mut moments.biases_m,
                &mut moments.biases_v,
                lr,
                (correction1, correction2),
            );
        }
    }

    fn update(
        params: &mut [f64],
        grads: &[f64],
        first: &mut [f64],
        second: &mut [f64],
        lr: f64,
        (correction1, correction2): (f64, f64),
    ) {
        for (((param, &g), m), v) in params.iter_mut().zip(grads).zip(first).zip(second) {
            *m = ADAM_BETA1.mul_add(*m, (1.0 - ADAM_BETA1) * g);
            *v = ADAM_BETA2.mul_add(*v, (1.0 - ADAM_BETA2) * g * g);
            let m_hat = *m / correction1;
            let v_hat = *v / correction2;
            *param -= lr * m_hat / (v_hat.sqrt() + ADAM_EPSILON);
        }
    }
}

/// Per-sample activations kept for backpropagation
struct ForwardTrace {
    layer_inputs: Vec<Vec<f64>>,
    pre_activations: Vec<Vec<f64>>,
    dropout_mask: Vec<f64>,
    output: f64,
}

/// Training schedule for one `fit` call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOptions {
    /// Full passes over the dataset
    pub epochs: usize,
    /// Samples per optimizer step
    pub batch_size: usize,
    /// Adam learning rate
    pub learning_rate: f64,
}

/// Serializable snapshot of learned weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkParameters {
    /// Schema version of this blob
    pub version: u32,
    /// Layers in forward order
    pub layers: Vec<DenseLayer>,
}

/// Regression network predicting next-session volume
#[derive(Debug, Clone, PartialEq)]
pub struct FeedForwardNetwork {
    layers: Vec<DenseLayer>,
    dropout_rate: f64,
}

/// Index of the layer whose output passes through dropout
const DROPOUT_AFTER_LAYER: usize = 0;

/// Architecture as (inputs, outputs, activation) per layer
const ARCHITECTURE: [(usize, usize, Activation); 3] = [
    (INPUT_FEATURES, HIDDEN_UNITS_1, Activation::Relu),
    (HIDDEN_UNITS_1, HIDDEN_UNITS_2, Activation::Relu),
    (HIDDEN_UNITS_2, 1, Activation::Linear),
];

impl FeedForwardNetwork {
    /// Freshly initialized network
    #[must_use]
    pub fn new<R: Rng>(dropout_rate: f64, rng: &mut R) -> Self {
        let layers = ARCHITECTURE
            .iter()
            .map(|&(inputs, outputs, activation)| {
                DenseLayer::glorot_uniform(inputs, outputs, activation, rng)
            })
            .collect();
        Self {
            layers,
            dropout_rate,
        }
    }

    /// Restore a network from persisted parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the schema version differs, any layer shape does not
    /// match the architecture, or any weight is non-finite
    pub fn from_parameters(
        parameters: NetworkParameters,
        dropout_rate: f64,
    ) -> Result<Self, EstimatorError> {
        if parameters.version != PARAMETER_SCHEMA_VERSION {
            return Err(EstimatorError::SchemaVersion {
                found: parameters.version,
                expected: PARAMETER_SCHEMA_VERSION,
            });
        }
        if parameters.layers.len() != ARCHITECTURE.len() {
            return Err(EstimatorError::ShapeMismatch {
                layer: parameters.layers.len(),
                detail: format!(
                    "expected {} layers, found {}",
                    ARCHITECTURE.len(),
                    parameters.layers.len()
                ),
            });
        }
        for (index, (layer, &(inputs, outputs, activation))) in
            parameters.layers.iter().zip(&ARCHITECTURE).enumerate()
        {
            if layer.inputs != inputs
                || layer.outputs != outputs
                || layer.activation != activation
                || layer.weights.len() != inputs * outputs
                || layer.biases.len() != outputs
            {
                return Err(EstimatorError::ShapeMismatch {
                    layer: index,
                    detail: format!(
                        "expected {inputs}x{outputs} {activation:?}, found {}x{} {:?} with {} weights and {} biases",
                        layer.inputs,
                        layer.outputs,
                        layer.activation,
                        layer.weights.len(),
                        layer.biases.len()
                    ),
                });
            }
            if !layer.is_finite() {
                return Err(EstimatorError::NonFiniteParameters);
            }
        }
        Ok(Self {
            layers: parameters.layers,
            dropout_rate,
        })
    }

    /// Snapshot the learned weights
    #[must_use]
    pub fn to_parameters(&self) -> NetworkParameters {
        NetworkParameters {
            version: PARAMETER_SCHEMA_VERSION,
            layers: self.layers.clone(),
        }
    }

    /// Inference forward pass (dropout disabled)
    #[must_use]
    pub fn predict(&self, features: &FeatureVector) -> f64 {
        let mut activations = features.to_vec();
        for layer in &self.layers {
            let pre = layer.pre_activation(&activations);
            activations = layer.activate(&pre);
        }
        activations.first().copied().unwrap_or(f64::NAN)
    }

    fn forward_train<R: Rng>(&self, features: &FeatureVector, rng: &mut R) -> ForwardTrace {
        let keep = 1.0 - self.dropout_rate;
        let mut layer_inputs = Vec::with_capacity(self.layers.len());
        let mut pre_activations = Vec::with_capacity(self.layers.len());
        let mut dropout_mask = Vec::new();
        let mut activations = features.to_vec();

        for (index, layer) in self.layers.iter().enumerate() {
            let pre = layer.pre_activation(&activations);
            let mut output = layer.activate(&pre);
            if index == DROPOUT_AFTER_LAYER && self.dropout_rate > 0.0 {
                dropout_mask = (0..output.len())
                    .map(|_| if rng.gen::<f64>() < keep { 1.0 / keep } else { 0.0 })
                    .collect();
                for (value, scale) in output.iter_mut().zip(&dropout_mask) {
                    *value *= scale;
                }
            }
            layer_inputs.push(activations);
            pre_activations.push(pre);
            activations = output;
        }

        ForwardTrace {
            layer_inputs,
            pre_activations,
            dropout_mask,
            output: activations.first().copied().unwrap_or(f64::NAN),
        }
    }

    fn backward(&self, trace: &ForwardTrace, grad_output: f64, grads: &mut [LayerGradients]) {
        let mut upstream = vec![grad_output];
        for (index, layer) in self.layers.iter().enumerate().rev() {
            let mut grad_input = layer.backward(
                &trace.layer_inputs[index],
                &trace.pre_activations[index],
                &upstream,
                &mut grads[index],
            );
            // gradient flowing into layer `index` passes back through the dropout
            // applied to the previous layer's output
            if index == DROPOUT_AFTER_LAYER + 1 && !trace.dropout_mask.is_empty() {
                for (grad, scale) in grad_input.iter_mut().zip(&trace.dropout_mask) {
                    *grad *= scale;
                }
            }
            upstream = grad_input;
        }
    }

    /// Mean squared error over `inputs`/`labels` with inference weights
    #[must_use]
    pub fn mean_squared_error(&self, inputs: &[FeatureVector], labels: &[f64]) -> f64 {
        if labels.is_empty() {
            return 0.0;
        }
        let total: f64 = inputs
            .iter()
            .zip(labels)
            .map(|(x, y)| (self.predict(x) - y).powi(2))
            .sum();
        total / labels.len() as f64
    }

    /// Train with shuffled mini-batches, one Adam step per batch
    ///
    /// Returns the mean training loss of every epoch.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset is empty or the loss becomes non-finite
    pub fn fit<R: Rng>(
        &mut self,
        inputs: &[FeatureVector],
        labels: &[f64],
        options: FitOptions,
        rng: &mut R,
    ) -> Result<Vec<f64>, EstimatorError> {
        let samples = inputs.len().min(labels.len());
        if samples == 0 {
            return Err(EstimatorError::EmptyDataset);
        }

        let batch_size = options.batch_size.max(1);
        let mut optimizer = Adam::new(options.learning_rate, &self.layers);
        let mut grads: Vec<LayerGradients> =
            self.layers.iter().map(LayerGradients::zeros).collect();
        let mut order: Vec<usize> = (0..samples).collect();
        let mut history = Vec::with_capacity(options.epochs);

        for epoch in 0..options.epochs {
            order.shuffle(rng);
            let mut epoch_loss = 0.0;

            for batch in order.chunks(batch_size) {
                grads.iter_mut().for_each(LayerGradients::reset);
                let scale = 2.0 / batch.len() as f64;
                for &sample in batch {
                    let trace = self.forward_train(&inputs[sample], rng);
                    let error = trace.output - labels[sample];
                    epoch_loss += error * error;
                    self.backward(&trace, scale * error, &mut grads);
                }
                optimizer.apply(&mut self.layers, &grads);
            }

            let mean_loss = epoch_loss / samples as f64;
            if !mean_loss.is_finite() {
                return Err(EstimatorError::NonFiniteLoss { epoch });
            }
            if epoch % LOG_EVERY_EPOCHS == 0 {
                debug!(epoch, loss = mean_loss, "Estimator training progress");
            }
            history.push(mean_loss);
        }

        Ok(history)
    }
}
