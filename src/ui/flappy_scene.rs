//! Terminal rendering of the playfield.

use super::game_common::{
    create_game_layout, info_line, render_game_over_banner, render_info_panel_frame,
    render_status_bar,
};
use flappy::core::{CoreGame, GameSnapshot, PipeKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const RUNNING_CONTROLS: &[(&str, &str)] = &[("[Space/Up/Enter]", "Flap"), ("[Esc/q]", "Quit")];
const GAME_OVER_CONTROLS: &[(&str, &str)] = &[("[Space]", "Restart"), ("[Esc/q]", "Quit")];

/// What a single terminal cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Sky,
    Bird,
    Pipe,
    /// The pipe row next to the gap.
    PipeCap,
}

/// Render the whole game screen.
pub fn render_flappy(frame: &mut Frame, area: Rect, game: &CoreGame) {
    let snapshot = game.state().snapshot();
    let layout = create_game_layout(frame, area, " Flappy Bird ", Color::Cyan, 10, 22);

    render_play_area(frame, layout.content, &snapshot);
    render_status_bar_content(frame, layout.status_bar, &snapshot);
    render_info_panel(frame, layout.info_panel, game, &snapshot);

    if snapshot.game_over {
        render_game_over_banner(
            frame,
            layout.content,
            "GAME OVER",
            &format!("Score: {}", snapshot.score.floor() as u32),
            GAME_OVER_CONTROLS,
        );
    }
}

/// Scale the board onto the available cells and draw bird and pipes.
fn render_play_area(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let cell_w = snapshot.board_width as f64 / width as f64;
    let cell_h = snapshot.board_height as f64 / height as f64;
    let bird_glyph = bird_glyph(snapshot.bird_velocity);

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let gy = ((row as f64 + 0.5) * cell_h) as i32;
        let spans: Vec<Span> = (0..width)
            .map(|col| {
                let gx = ((col as f64 + 0.5) * cell_w) as i32;
                match cell_at(snapshot, gx, gy, cell_h.ceil() as i32) {
                    Cell::Sky => Span::raw(" "),
                    Cell::Bird => Span::styled(
                        bird_glyph,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Cell::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
                    Cell::PipeCap => Span::styled("▓", Style::default().fg(Color::LightGreen)),
                }
            })
            .collect();
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Classify the board point `(gx, gy)`. `cap_height` is how many board
/// pixels next to the gap count as the pipe cap.
fn cell_at(snapshot: &GameSnapshot, gx: i32, gy: i32, cap_height: i32) -> Cell {
    if snapshot.bird.contains_point(gx, gy) {
        return Cell::Bird;
    }
    for pipe in &snapshot.pipes {
        if !pipe.rect.contains_point(gx, gy) {
            continue;
        }
        let near_gap = match pipe.kind {
            PipeKind::Top => gy >= pipe.rect.bottom() - cap_height,
            PipeKind::Bottom => gy < pipe.rect.y + cap_height,
        };
        return if near_gap { Cell::PipeCap } else { Cell::Pipe };
    }
    Cell::Sky
}

fn bird_glyph(velocity: i32) -> &'static str {
    if velocity < -3 {
        "▲"
    } else if velocity > 6 {
        "▼"
    } else {
        "►"
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot) {
    let score = snapshot.score.floor() as u32;
    if snapshot.game_over {
        render_status_bar(
            frame,
            area,
            &format!("Game Over: {}", score),
            Color::Red,
            GAME_OVER_CONTROLS,
        );
    } else {
        render_status_bar(
            frame,
            area,
            &format!("Score: {}", score),
            Color::Green,
            RUNNING_CONTROLS,
        );
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &CoreGame, snapshot: &GameSnapshot) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let lines = vec![
        info_line("Score", format!("{}", snapshot.score.floor() as u32), Color::White),
        info_line("Best", format!("{}", snapshot.best_score.floor() as u32), Color::Yellow),
        Line::from(""),
        info_line("Pipes", format!("{}", snapshot.pipes.len()), Color::Green),
        info_line("Speed", format!("{:+}", snapshot.bird_velocity), Color::Cyan),
        info_line("Ticks", format!("{}", game.clock().tick_count), Color::Gray),
        Line::from(""),
        info_line("Games", format!("{}", game.games_played()), Color::Gray),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
