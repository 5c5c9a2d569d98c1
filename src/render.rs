use crate::apple::Apple;
use crate::grid::{Grid, Pos};
use crate::haus::SnekHaus;
use crate::snek::Snek;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders},
};

pub const BOARD_BACKGROUND_COLOR: Color = Color::Black;
pub const BORDER_COLOR: Color = Color::Rgb(93, 216, 228);
pub const APPLE_COLOR: Color = Color::Rgb(255, 0, 0);
pub const SNAKE_COLOR: Color = Color::Rgb(0, 255, 0);
pub const HEAD_COLOR: Color = Color::Rgb(255, 255, 0);

const TITLE: &str = "Snake";

/// Maps grid cells onto a terminal area, `cell_width` columns per cell.
struct Board {
    grid: Grid,
    area: Rect,
}

impl Board {
    fn paint(&self, pos: Pos, color: Color, buf: &mut Buffer) {
        let y = self.area.y + pos.y;
        if y >= self.area.bottom() {
            return;
        }
        let x0 = self.area.x + pos.x * self.grid.cell_width;
        for x in x0..x0 + self.grid.cell_width {
            if x >= self.area.right() {
                break;
            }
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(" ").set_bg(color);
            }
        }
    }
}

/// Things that know how to put themselves on the board.
pub enum Sprite<'a> {
    Snek(&'a Snek),
    Apple(&'a Apple),
}

impl Sprite<'_> {
    fn draw(&self, board: &Board, buf: &mut Buffer) {
        match self {
            Sprite::Snek(snek) => {
                for &pos in snek.body().iter().skip(1) {
                    board.paint(pos, SNAKE_COLOR, buf);
                }
                board.paint(snek.head(), HEAD_COLOR, buf);
            }
            Sprite::Apple(apple) => board.paint(apple.pos(), APPLE_COLOR, buf),
        }
    }
}

impl<R> Widget for &SnekHaus<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let board = Board {
            grid: *self.grid(),
            area,
        };

        for pos in self.grid().cells() {
            board.paint(pos, BOARD_BACKGROUND_COLOR, buf);
        }
        // Erase hint for the tail left behind by the last move
        if let Some(pos) = self.vacated() {
            board.paint(pos, BOARD_BACKGROUND_COLOR, buf);
        }

        for sprite in [Sprite::Apple(self.apple()), Sprite::Snek(self.snek())] {
            sprite.draw(&board, buf);
        }
    }
}

/// Terminal size needed to show the whole grid plus its frame.
pub fn frame_size(grid: &Grid) -> Size {
    Size {
        width: grid.width.saturating_mul(grid.cell_width).saturating_add(2),
        height: grid.height.saturating_add(2),
    }
}

pub fn draw<R>(frame: &mut Frame, haus: &SnekHaus<R>) {
    let wanted = frame_size(haus.grid());
    let screen = frame.area();
    let width = wanted.width.min(screen.width);
    let height = wanted.height.min(screen.height);
    let area = Rect::new(
        screen.x + (screen.width - width) / 2,
        screen.y + (screen.height - height) / 2,
        width,
        height,
    );

    let block = Block::default()
        .title(TITLE)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_COLOR));
    let inner_area = block.inner(area);

    frame.render_widget(block, area);
    frame.render_widget(haus, inner_area);
}
