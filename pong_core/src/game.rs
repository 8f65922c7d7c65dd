use log::info;

use crate::{
    Ball, BallView, Config, ConfigError, Environment, Frame, InputState, PaddleView, Player, PongError,
    RestartPolicy, Score, Side, SimError,
};

/// Result of one [`Game::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Rally,
    Point {
        scorer: Side,
        restarted: bool, // the game already reset and started training
    },
}

/// A match: the environment, two players and the running score
pub struct Game {
    environment: Environment,
    left: Box<dyn Player>,
    right: Box<dyn Player>,
    input: InputState,
    score: Score,
    restart: RestartPolicy,
    train_epochs: usize,
    running: bool,
}

impl Game {
    pub fn new(
        config: &Config,
        left: Box<dyn Player>,
        right: Box<dyn Player>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if left.side() != Side::Left || right.side() != Side::Right {
            return Err(ConfigError::Validation(
                "players must sit on the left and right seats respectively".to_string(),
            ));
        }

        Ok(Self {
            environment: Environment::new(config),
            left,
            right,
            input: InputState::new(),
            score: Score::new(),
            restart: config.restart,
            train_epochs: config.train_epochs,
            running: false,
        })
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn player(&self, side: Side) -> &dyn Player {
        match side {
            Side::Left => &*self.left,
            Side::Right => &*self.right,
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Both players act, the environment ticks, the score accumulates
    pub fn step(&mut self) -> Result<StepOutcome, PongError> {
        // Refuse before anyone acts so memories stay clean
        if self.needs_reset() {
            return Err(SimError::ResetRequired.into());
        }

        self.left.perform_action(&mut self.environment, &self.input);
        self.right.perform_action(&mut self.environment, &self.input);

        let scored = self.environment.time_step()?;
        let reward = self.environment.reward();
        self.score.record(reward);

        if !scored {
            return Ok(StepOutcome::Rally);
        }

        let scorer = if reward > 0 { Side::Left } else { Side::Right };
        info!(
            "{:?} scores, balance {} ({}-{}), leader {:?}",
            scorer,
            self.score.balance,
            self.score.left,
            self.score.right,
            self.score.leader()
        );

        let restarted = self.restart == RestartPolicy::Immediate;
        if restarted {
            self.reset()?;
        }
        Ok(StepOutcome::Point { scorer, restarted })
    }

    /// End the rally: flush the scoring reward into both memories, re-centre,
    /// stop, and start both players training on each other's experience
    pub fn reset(&mut self) -> Result<(), PongError> {
        self.left.perform_action(&mut self.environment, &self.input);
        self.right.perform_action(&mut self.environment, &self.input);
        self.environment.reset();
        self.stop();

        // Both seats start training even if one refuses
        let left = self.left.train(self.right.memory(), self.train_epochs);
        let right = self.right.train(self.left.memory(), self.train_epochs);
        left?;
        right?;
        Ok(())
    }

    /// Poll both players; true when both are ready to play
    pub fn poll_ready(&mut self) -> Result<bool, PongError> {
        let left = self.left.poll_ready(&mut self.input)?;
        let right = self.right.poll_ready(&mut self.input)?;
        Ok(left && right)
    }

    /// Snapshot for the renderer
    pub fn frame(&self) -> Frame {
        let env = &self.environment;
        let board = env.board();
        Frame {
            board_width: board.width(),
            board_height: board.height(),
            left: PaddleView::new(
                &env.paddle(Side::Left),
                self.left.is_ready(),
                self.left.kind().label(),
            ),
            right: PaddleView::new(
                &env.paddle(Side::Right),
                self.right.is_ready(),
                self.right.kind().label(),
            ),
            ball: BallView::from(&env.ball()),
            score: self.score.balance,
            points_left: self.score.left,
            points_right: self.score.right,
            running: self.running,
        }
    }

    /// Stage the ball, e.g. to replay a scenario
    pub fn set_ball(&mut self, ball: Ball) {
        self.environment.set_ball(ball);
    }

    /// True once the environment holds a scored frame that needs a reset
    pub fn needs_reset(&self) -> bool {
        self.environment.is_scored()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Action, FitReport, HumanPlayer, LearningAgent, RandomPlayer, TrainError, TrainingBatch,
        ValueModel,
    };
    use glam::Vec2;
    use std::sync::mpsc::{self, Receiver};

    /// Flat value model whose fit waits until the gate is released or dropped
    struct GatedModel {
        gate: Receiver<()>,
    }

    impl ValueModel for GatedModel {
        fn predict(&self, rows: &[Vec<f32>]) -> Result<Vec<f32>, TrainError> {
            Ok(vec![0.0; rows.len()])
        }

        fn fit(&mut self, batch: &TrainingBatch, epochs: usize) -> Result<FitReport, TrainError> {
            let _ = self.gate.recv();
            Ok(FitReport {
                epochs,
                samples: batch.len(),
                losses: Vec::new(),
            })
        }
    }

    fn config(restart: RestartPolicy) -> Config {
        Config {
            reward_shaping: false,
            restart,
            ..Config::new()
        }
    }

    fn random_game(config: &Config) -> Game {
        Game::new(
            config,
            Box::new(RandomPlayer::new(Side::Left, config)),
            Box::new(RandomPlayer::new(Side::Right, config)),
        )
        .expect("Valid game")
    }

    /// Put the ball one tick away from the right goal line
    fn stage_right_goal(game: &mut Game) {
        let mut ball = game.environment().ball();
        ball.pos = Vec2::new(799.0, 100.0);
        ball.dir = Vec2::new(1.0, 1.0);
        game.set_ball(ball);
    }

    #[test]
    fn test_new_rejects_swapped_seats() {
        let config = Config::new();
        let result = Game::new(
            &config,
            Box::new(RandomPlayer::new(Side::Right, &config)),
            Box::new(RandomPlayer::new(Side::Left, &config)),
        );
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = Config {
            board_height: -1.0,
            ..Config::new()
        };
        let result = Game::new(
            &config,
            Box::new(RandomPlayer::new(Side::Left, &config)),
            Box::new(RandomPlayer::new(Side::Right, &config)),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_rally_step_records_both_players() {
        let config = config(RestartPolicy::Immediate);
        let mut game = random_game(&config);

        assert_eq!(game.step().expect("Rally step"), StepOutcome::Rally);
        assert_eq!(game.score(), Score::new());
        assert_eq!(game.player(Side::Left).memory().len(), 1);
        assert_eq!(game.player(Side::Right).memory().len(), 1);
    }

    #[test]
    fn test_point_with_immediate_restart() {
        let config = config(RestartPolicy::Immediate);
        let mut game = random_game(&config);
        game.start();
        stage_right_goal(&mut game);

        let outcome = game.step().expect("Scoring step");

        assert_eq!(
            outcome,
            StepOutcome::Point {
                scorer: Side::Left,
                restarted: true
            }
        );
        assert_eq!(game.score().balance, 1);
        assert!(!game.is_running(), "Reset stops the game");
        assert!(!game.needs_reset());
        assert_eq!(game.environment().ball().pos, Vec2::new(400.0, 200.0));

        // Scoring tick plus the flush action
        let left = game.player(Side::Left).memory();
        let right = game.player(Side::Right).memory();
        assert_eq!(left.len(), 2);
        assert_eq!(left.last().map(|e| e.reward), Some(1.0));
        assert_eq!(left.get(0).map(|e| e.value), Some(1.0), "Credited before the flush push");
        assert_eq!(left.last().map(|e| e.value), Some(0.0));
        assert_eq!(right.last().map(|e| e.reward), Some(-1.0));
    }

    #[test]
    fn test_point_with_external_restart() {
        let config = config(RestartPolicy::External);
        let mut game = random_game(&config);
        stage_right_goal(&mut game);

        let outcome = game.step().expect("Scoring step");
        assert_eq!(
            outcome,
            StepOutcome::Point {
                scorer: Side::Left,
                restarted: false
            }
        );
        assert!(game.needs_reset());

        let before = game.player(Side::Left).memory().len();
        assert_eq!(game.step(), Err(PongError::Sim(SimError::ResetRequired)));
        assert_eq!(game.player(Side::Left).memory().len(), before, "Nobody acted");
        assert_eq!(game.score().balance, 1, "Score counted once");

        game.reset().expect("Driver reset");
        assert_eq!(game.step().expect("New rally"), StepOutcome::Rally);
    }

    #[test]
    fn test_human_must_continue_after_point() {
        let config = config(RestartPolicy::Immediate);
        let mut game = Game::new(
            &config,
            Box::new(HumanPlayer::new(Side::Left, &config)),
            Box::new(RandomPlayer::new(Side::Right, &config)),
        )
        .expect("Valid game");

        game.input_mut().press_continue();
        assert_eq!(game.poll_ready(), Ok(true));

        game.input_mut().key_down(crate::Key::Up);
        stage_right_goal(&mut game);
        game.step().expect("Scoring step");
        assert_eq!(
            game.player(Side::Left).memory().last().map(|e| e.action),
            Some(Action::Up)
        );

        assert_eq!(game.poll_ready(), Ok(false), "Human paused after the point");
        game.input_mut().press_continue();
        assert_eq!(game.poll_ready(), Ok(true));
    }

    #[test]
    fn test_frame_reflects_state() {
        let config = config(RestartPolicy::Immediate);
        let game = Game::new(
            &config,
            Box::new(HumanPlayer::new(Side::Left, &config)),
            Box::new(RandomPlayer::new(Side::Right, &config)),
        )
        .expect("Valid game");

        let frame = game.frame();
        assert_eq!((frame.board_width, frame.board_height), (800.0, 400.0));
        assert_eq!(frame.left.label, "Human");
        assert!(!frame.left.ready);
        assert_eq!(frame.right.label, "Random");
        assert!(frame.right.ready);
        assert_eq!((frame.left.x, frame.left.y), (40.0, 200.0));
        assert_eq!((frame.left.length, frame.left.width), (80.0, 8.0));
        assert_eq!((frame.ball.x, frame.ball.y, frame.ball.diameter), (400.0, 200.0, 6.0));
        assert_eq!(frame.score, 0);
        assert!(!frame.running);
    }

    #[test]
    fn test_reset_during_training_still_pauses_other_seat() {
        let config = config(RestartPolicy::External);
        let (release, gate) = mpsc::channel();
        let mut game = Game::new(
            &config,
            Box::new(LearningAgent::new(Side::Left, &config, GatedModel { gate })),
            Box::new(HumanPlayer::new(Side::Right, &config)),
        )
        .expect("Valid game");

        game.step().expect("Rally step");
        game.reset().expect("First round starts");
        assert!(!game.player(Side::Left).is_ready(), "Agent is training");

        game.input_mut().press_continue();
        assert_eq!(game.poll_ready(), Ok(false));
        assert!(game.player(Side::Right).is_ready());

        assert_eq!(
            game.reset(),
            Err(PongError::Train(TrainError::AlreadyTraining))
        );
        assert!(
            !game.player(Side::Right).is_ready(),
            "Human pauses even though the agent refused"
        );
        drop(release);
    }
}
