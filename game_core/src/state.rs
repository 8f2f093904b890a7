//! The whole mutable session in one place

use hecs::{Entity, World};

use crate::{
    apply_key, create_ball, create_paddle, step, Ball, Config, ConfigError, Events, GameRng, Key,
    Paddle, Score, Side,
};

/// Everything a session mutates: both paddles and the ball (as entities in
/// `world`), the score, and the RNG used for respawns.
pub struct GameState {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    left_paddle: Entity,
    right_paddle: Entity,
    ball: Entity,
}

impl GameState {
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        let left_paddle = create_paddle(&mut world, Paddle::spawn(Side::Left, &config));
        let right_paddle = create_paddle(&mut world, Paddle::spawn(Side::Right, &config));

        let mut ball = Ball::new(
            config.board.center(),
            glam::Vec2::ONE,
            config.ball_speed_initial,
        );
        ball.respawn(&config, &mut rng);
        let ball = create_ball(&mut world, ball);

        Ok(Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            left_paddle,
            right_paddle,
            ball,
        })
    }

    /// Advance one tick (move and collide, no rendering)
    pub fn step(&mut self) {
        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
    }

    /// Handle one key press
    pub fn key_down(&mut self, key: Key) -> bool {
        apply_key(&mut self.world, &self.config, key)
    }

    /// Zero the score, return paddles to their corners and respawn the ball
    pub fn reset(&mut self) {
        self.score = Score::new();
        self.events.clear();

        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            *paddle = Paddle::spawn(paddle.side, &self.config);
        }
        self.respawn_ball();
    }

    pub fn respawn_ball(&mut self) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.respawn(&self.config, &mut self.rng);
        }
    }

    // The three entities live for the whole session; nothing despawns them.

    pub fn ball(&self) -> Ball {
        match self.world.get::<&Ball>(self.ball) {
            Ok(ball) => *ball,
            Err(err) => unreachable!("ball entity missing: {err}"),
        }
    }

    pub fn set_ball(&mut self, ball: Ball) {
        match self.world.get::<&mut Ball>(self.ball) {
            Ok(mut current) => *current = ball,
            Err(err) => unreachable!("ball entity missing: {err}"),
        }
    }

    fn paddle_entity(&self, side: Side) -> Entity {
        match side {
            Side::Left => self.left_paddle,
            Side::Right => self.right_paddle,
        }
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        match self.world.get::<&Paddle>(self.paddle_entity(side)) {
            Ok(paddle) => *paddle,
            Err(err) => unreachable!("{side:?} paddle entity missing: {err}"),
        }
    }

    pub fn set_paddle_y(&mut self, side: Side, y: f32) {
        let entity = self.paddle_entity(side);
        match self.world.get::<&mut Paddle>(entity) {
            Ok(mut paddle) => paddle.y = y,
            Err(err) => unreachable!("{side:?} paddle entity missing: {err}"),
        }
    }
}
