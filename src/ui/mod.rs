pub mod flappy_scene;
pub mod game_common;

use flappy::core::CoreGame;
use ratatui::Frame;

/// Draw one frame of the game.
pub fn draw_ui(frame: &mut Frame, game: &CoreGame) {
    let area = frame.size();
    flappy_scene::render_flappy(frame, area, game);
}
