use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use log::{debug, info, warn};
use rand::Rng;

use crate::{
    encode_features, Action, Config, FitReport, GameRng, InputState, Memory, Player, PlayerKind,
    Seat, Side, TrainError, TrainingBatch, ValueModel, AGENT_ACTIONS,
};

type Finished<M> = (M, Result<FitReport, TrainError>);

/// Epsilon-greedy player backed by a value model.
///
/// Training moves the model onto a worker thread; until the result has been
/// picked up by [`Player::poll_ready`] the agent is not ready and refuses to
/// start another round.
pub struct LearningAgent<M: ValueModel> {
    seat: Seat,
    model: Option<M>, // None while a worker owns it
    pending: Option<Receiver<Finished<M>>>,
    epsilon: f32,
    epsilon_decay: f32,
    rng: GameRng,
    ready: bool,
    rounds: usize,
    last_report: Option<FitReport>,
}

impl<M: ValueModel> LearningAgent<M> {
    pub fn new(side: Side, config: &Config, model: M) -> Self {
        Self {
            seat: Seat::new(side, config),
            model: Some(model),
            pending: None,
            epsilon: config.epsilon,
            epsilon_decay: config.epsilon_decay,
            rng: GameRng::new(config.seed.wrapping_add(101 + side.index() as u64)),
            ready: true,
            rounds: 0,
            last_report: None,
        }
    }

    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// Completed training rounds
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn is_training(&self) -> bool {
        self.pending.is_some()
    }

    pub fn last_report(&self) -> Option<&FitReport> {
        self.last_report.as_ref()
    }

    /// Predicted value of each action in [`AGENT_ACTIONS`] for `state`
    pub fn action_values(&self, state: &[f32]) -> Result<Vec<f32>, TrainError> {
        let model = self.model.as_ref().ok_or(TrainError::AlreadyTraining)?;
        let rows: Vec<Vec<f32>> = AGENT_ACTIONS
            .iter()
            .map(|action| encode_features(state, *action))
            .collect();
        model.predict(&rows)
    }

    /// Block until the in-flight training round finishes
    pub fn wait_for_training(&mut self) -> Result<(), TrainError> {
        let Some(receiver) = self.pending.take() else {
            return Ok(());
        };
        let finished = receiver.recv().map_err(|_| TrainError::WorkerLost)?;
        self.finish(finished)
    }

    fn random_action(&mut self) -> Action {
        AGENT_ACTIONS[self.rng.0.gen_range(0..AGENT_ACTIONS.len())]
    }

    fn finish(&mut self, (model, report): Finished<M>) -> Result<(), TrainError> {
        self.model = Some(model);
        let report = report?;
        self.epsilon /= self.epsilon_decay;
        self.rounds += 1;
        self.ready = true;
        info!(
            "{:?} agent finished training round {} on {} samples, loss {:?}, epsilon {:.4}",
            self.seat.side(),
            self.rounds,
            report.samples,
            report.final_loss(),
            self.epsilon
        );
        self.last_report = Some(report);
        Ok(())
    }
}

/// Index of the first maximum, ignoring NaN
fn argmax(values: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, &value) in values.iter().enumerate() {
        if value.is_nan() {
            continue;
        }
        match best {
            Some((_, top)) if value <= top => {}
            _ => best = Some((index, value)),
        }
    }
    best.map(|(index, _)| index)
}

impl<M: ValueModel> Player for LearningAgent<M> {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Agent
    }

    fn seat(&self) -> &Seat {
        &self.seat
    }

    fn seat_mut(&mut self) -> &mut Seat {
        &mut self.seat
    }

    fn choose_action(&mut self, state: &[f32], _input: &InputState) -> Action {
        if self.rng.0.gen::<f32>() < self.epsilon {
            return self.random_action();
        }

        match self.action_values(state) {
            Ok(values) => match argmax(&values) {
                Some(index) => AGENT_ACTIONS[index],
                None => self.random_action(),
            },
            Err(err) => {
                warn!("{:?} agent falling back to random action: {err}", self.seat.side());
                self.random_action()
            }
        }
    }

    fn train(&mut self, opponent: &Memory, epochs: usize) -> Result<(), TrainError> {
        if self.pending.is_some() {
            return Err(TrainError::AlreadyTraining);
        }

        let batch = TrainingBatch::from_memories(&[self.seat.memory(), opponent]);
        if batch.is_empty() {
            debug!("{:?} agent has no experience to train on", self.seat.side());
            return Ok(());
        }
        let mut model = self.model.take().ok_or(TrainError::WorkerLost)?;

        info!(
            "{:?} agent training on {} samples for {} epochs",
            self.seat.side(),
            batch.len(),
            epochs
        );
        self.ready = false;

        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let report = model.fit(&batch, epochs);
            // The agent may have been dropped mid-training
            let _ = sender.send((model, report));
        });
        self.pending = Some(receiver);
        Ok(())
    }

    fn poll_ready(&mut self, _input: &mut InputState) -> Result<bool, TrainError> {
        let Some(receiver) = &self.pending else {
            return Ok(self.ready);
        };

        match receiver.try_recv() {
            Ok(finished) => {
                self.pending = None;
                self.finish(finished)?;
                Ok(self.ready)
            }
            Err(TryRecvError::Empty) => Ok(false),
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                Err(TrainError::WorkerLost)
            }
        }
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}
