use burn::nn::{Linear, LinearConfig};
use burn::prelude::*;
use burn::tensor::activation::tanh;

/// Dense value network.
///
/// ```text
/// Input:  [batch, input_size]
/// FC1:    input_size -> 64, tanh
/// FC2:    64 -> 32, tanh
/// Out:    32 -> 1  (predicted value)
/// ```
#[derive(Module, Debug)]
pub struct ValueNetwork<B: Backend> {
    fc1: Linear<B>,
    fc2: Linear<B>,
    out: Linear<B>,
}

#[derive(Config, Debug)]
pub struct ValueNetworkConfig {
    pub input_size: usize,
    #[config(default = 64)]
    pub hidden_size: usize,
    #[config(default = 32)]
    pub second_hidden_size: usize,
}

impl ValueNetworkConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> ValueNetwork<B> {
        ValueNetwork {
            fc1: LinearConfig::new(self.input_size, self.hidden_size).init(device),
            fc2: LinearConfig::new(self.hidden_size, self.second_hidden_size).init(device),
            out: LinearConfig::new(self.second_hidden_size, 1).init(device),
        }
    }
}

impl<B: Backend> ValueNetwork<B> {
    /// Forward pass: [batch, input_size] -> [batch, 1]
    pub fn forward(&self, input: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = tanh(self.fc1.forward(input));
        let x = tanh(self.fc2.forward(x));
        self.out.forward(x)
    }
}
