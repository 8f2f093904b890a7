//! Drawing the board onto a 2D surface
//!
//! The game never talks to a canvas directly. Hosts implement [`Surface`]
//! and [`render`] turns the current [`GameState`] into draw calls.

use std::convert::Infallible;

use glam::Vec2;

use crate::{GameState, Paddle, Side};

/// A 2D drawing target with canvas-like state (current colours, line width,
/// font and dash pattern).
pub trait Surface {
    type Error;

    fn set_fill_color(&mut self, color: &str) -> Result<(), Self::Error>;
    fn set_stroke_color(&mut self, color: &str) -> Result<(), Self::Error>;
    fn set_line_width(&mut self, width: f32) -> Result<(), Self::Error>;
    fn set_font(&mut self, font: &str) -> Result<(), Self::Error>;

    fn fill_rect(&mut self, pos: Vec2, size: Vec2) -> Result<(), Self::Error>;
    fn stroke_rect(&mut self, pos: Vec2, size: Vec2) -> Result<(), Self::Error>;
    fn fill_text(&mut self, text: &str, pos: Vec2) -> Result<(), Self::Error>;

    /// Dash pattern for subsequent strokes, as alternating dash/gap lengths
    fn set_line_dash(&mut self, pattern: &[f32]) -> Result<(), Self::Error>;
    fn reset_line_dash(&mut self) -> Result<(), Self::Error> {
        self.set_line_dash(&[])
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2) -> Result<(), Self::Error>;

    /// Filled circle with a border in the current stroke colour
    fn fill_circle(&mut self, center: Vec2, radius: f32) -> Result<(), Self::Error>;
}

/// Colours, fonts and line styles used by [`render`]
#[derive(Debug, Clone)]
pub struct Palette {
    pub board: &'static str,
    pub left_paddle: &'static str,
    pub right_paddle: &'static str,
    pub paddle_border: &'static str,
    pub ball: &'static str,
    pub ball_border: &'static str,
    pub text: &'static str,
    pub divider: &'static str,
    pub score_font: &'static str,
    pub divider_dash: [f32; 2],
    pub divider_width: f32,
    pub border_width: f32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            board: "forestgreen",
            left_paddle: "#4287f5",
            right_paddle: "red",
            paddle_border: "black",
            ball: "yellow",
            ball_border: "black",
            text: "black",
            divider: "black",
            score_font: "30px impact",
            divider_dash: [19.0, 30.0],
            divider_width: 5.0,
            border_width: 2.0,
        }
    }
}

/// Draw one full frame: board, scores, divider, paddles, ball
pub fn render<S: Surface>(
    state: &GameState,
    palette: &Palette,
    surface: &mut S,
) -> Result<(), S::Error> {
    draw_board(state, palette, surface)?;
    for side in [Side::Left, Side::Right] {
        draw_paddle(&state.paddle(side), palette, surface)?;
    }
    draw_ball(state, palette, surface)
}

fn draw_board<S: Surface>(
    state: &GameState,
    palette: &Palette,
    surface: &mut S,
) -> Result<(), S::Error> {
    let board = state.config.board;

    surface.set_fill_color(palette.board)?;
    surface.fill_rect(Vec2::ZERO, Vec2::new(board.width, board.height))?;

    surface.set_font(palette.score_font)?;
    surface.set_fill_color(palette.text)?;
    surface.fill_text(
        &state.score.left.to_string(),
        Vec2::new(board.width / 4.0, board.height / 8.0),
    )?;
    surface.fill_text(
        &state.score.right.to_string(),
        Vec2::new(board.width - board.width / 4.0, board.height / 8.0),
    )?;

    surface.set_stroke_color(palette.divider)?;
    surface.set_line_width(palette.divider_width)?;
    surface.set_line_dash(&palette.divider_dash)?;
    surface.stroke_line(
        Vec2::new(board.width / 2.0, 0.0),
        Vec2::new(board.width / 2.0, board.height),
    )?;
    surface.reset_line_dash()
}

fn draw_paddle<S: Surface>(
    paddle: &Paddle,
    palette: &Palette,
    surface: &mut S,
) -> Result<(), S::Error> {
    let fill = match paddle.side {
        Side::Left => palette.left_paddle,
        Side::Right => palette.right_paddle,
    };
    let pos = Vec2::new(paddle.x, paddle.y);
    let size = Vec2::new(paddle.width, paddle.height);

    surface.set_line_width(palette.border_width)?;
    surface.set_stroke_color(palette.paddle_border)?;
    surface.set_fill_color(fill)?;
    surface.fill_rect(pos, size)?;
    surface.stroke_rect(pos, size)
}

fn draw_ball<S: Surface>(
    state: &GameState,
    palette: &Palette,
    surface: &mut S,
) -> Result<(), S::Error> {
    surface.set_fill_color(palette.ball)?;
    surface.set_stroke_color(palette.ball_border)?;
    surface.set_line_width(palette.border_width)?;
    surface.fill_circle(state.ball().pos, state.config.ball_radius)
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillColor(String),
    StrokeColor(String),
    LineWidth(f32),
    Font(String),
    FillRect { pos: Vec2, size: Vec2 },
    StrokeRect { pos: Vec2, size: Vec2 },
    FillText { text: String, pos: Vec2 },
    LineDash(Vec<f32>),
    StrokeLine { from: Vec2, to: Vec2 },
    FillCircle { center: Vec2, radius: f32 },
}

/// Surface that records every call instead of drawing
#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    pub commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Texts drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for CommandBuffer {
    type Error = Infallible;

    fn set_fill_color(&mut self, color: &str) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::FillColor(color.to_owned()));
        Ok(())
    }

    fn set_stroke_color(&mut self, color: &str) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::StrokeColor(color.to_owned()));
        Ok(())
    }

    fn set_line_width(&mut self, width: f32) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::LineWidth(width));
        Ok(())
    }

    fn set_font(&mut self, font: &str) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Font(font.to_owned()));
        Ok(())
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::FillRect { pos, size });
        Ok(())
    }

    fn stroke_rect(&mut self, pos: Vec2, size: Vec2) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::StrokeRect { pos, size });
        Ok(())
    }

    fn fill_text(&mut self, text: &str, pos: Vec2) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::FillText {
            text: text.to_owned(),
            pos,
        });
        Ok(())
    }

    fn set_line_dash(&mut self, pattern: &[f32]) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::LineDash(pattern.to_vec()));
        Ok(())
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::StrokeLine { from, to });
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::FillCircle { center, radius });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ball, Config};

    fn frame(state: &GameState) -> CommandBuffer {
        let mut buffer = CommandBuffer::new();
        render(state, &Palette::default(), &mut buffer).expect("recording cannot fail");
        buffer
    }

    #[test]
    fn test_frame_starts_with_background() {
        let state = GameState::new(Config::new(), 3).expect("valid config");
        let buffer = frame(&state);

        assert_eq!(
            buffer.commands[0],
            DrawCommand::FillColor("forestgreen".to_owned())
        );
        assert_eq!(
            buffer.commands[1],
            DrawCommand::FillRect {
                pos: Vec2::ZERO,
                size: Vec2::new(700.0, 500.0)
            }
        );
    }

    #[test]
    fn test_scores_drawn_as_text() {
        let mut state = GameState::new(Config::new(), 3).expect("valid config");
        state.score.increment_right();
        state.score.increment_right();
        let buffer = frame(&state);

        assert_eq!(buffer.texts(), vec!["0", "2"]);
        assert!(buffer.commands.contains(&DrawCommand::FillText {
            text: "0".to_owned(),
            pos: Vec2::new(175.0, 62.5)
        }));
        assert!(buffer.commands.contains(&DrawCommand::FillText {
            text: "2".to_owned(),
            pos: Vec2::new(525.0, 62.5)
        }));
    }

    #[test]
    fn test_divider_is_dashed_then_reset() {
        let state = GameState::new(Config::new(), 3).expect("valid config");
        let buffer = frame(&state);

        let line = buffer
            .commands
            .iter()
            .position(|c| matches!(c, DrawCommand::StrokeLine { .. }))
            .expect("divider drawn");
        assert_eq!(
            buffer.commands[line],
            DrawCommand::StrokeLine {
                from: Vec2::new(350.0, 0.0),
                to: Vec2::new(350.0, 500.0)
            }
        );
        assert_eq!(buffer.commands[line - 1], DrawCommand::LineDash(vec![19.0, 30.0]));
        assert_eq!(buffer.commands[line + 1], DrawCommand::LineDash(vec![]));
    }

    #[test]
    fn test_paddles_filled_and_stroked() {
        let state = GameState::new(Config::new(), 3).expect("valid config");
        let buffer = frame(&state);

        let size = Vec2::new(25.0, 100.0);
        for pos in [Vec2::ZERO, Vec2::new(675.0, 400.0)] {
            assert!(buffer.commands.contains(&DrawCommand::FillRect { pos, size }));
            assert!(buffer.commands.contains(&DrawCommand::StrokeRect { pos, size }));
        }
        assert!(buffer
            .commands
            .contains(&DrawCommand::FillColor("#4287f5".to_owned())));
        assert!(buffer
            .commands
            .contains(&DrawCommand::FillColor("red".to_owned())));
    }

    #[test]
    fn test_ball_drawn_last() {
        let mut state = GameState::new(Config::new(), 3).expect("valid config");
        state.set_ball(Ball::new(Vec2::new(100.0, 120.0), Vec2::ONE, 1.0));
        let buffer = frame(&state);

        assert_eq!(
            buffer.commands.last(),
            Some(&DrawCommand::FillCircle {
                center: Vec2::new(100.0, 120.0),
                radius: 12.5
            })
        );
    }

    #[test]
    fn test_render_does_not_mutate_state() {
        let state = GameState::new(Config::new(), 3).expect("valid config");
        let before = (state.ball(), state.score, state.paddle(Side::Left));
        frame(&state);
        frame(&state);
        assert_eq!(before, (state.ball(), state.score, state.paddle(Side::Left)));
    }
}
