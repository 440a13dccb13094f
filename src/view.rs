use std::io::{self, Write};

use crate::Game;

/// Writes successive frames of a game to a terminal.
#[derive(Debug)]
pub struct View<W>
where
    W: Write,
{
    out: W,
    escapes: bool,
}

impl<W> View<W>
where
    W: Write,
{
    /// clears the screen before every frame.
    pub fn new(out: W) -> Self {
        Self { out, escapes: true }
    }

    /// appends frames one after another, without escape codes.
    pub fn plain(out: W) -> Self {
        Self {
            out,
            escapes: false,
        }
    }

    pub fn show(&mut self, game: &Game) -> io::Result<()> {
        let mut frame = String::new();
        if self.escapes {
            let clear = termion::clear::All;
            let home = termion::cursor::Goto(1, 1);
            frame += &format!("{clear}{home}");
        }
        frame += &format!("Frame {}:\n", game.generation() + 1);
        frame += &game.render();
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{coord, Grid, RuleEngine};

    fn game() -> Game {
        let mut grid = Grid::empty(2, 2).unwrap();
        grid.activate(coord!(0, 0)).unwrap();
        Game::new(grid, RuleEngine::Conway)
    }

    #[test]
    fn plain_frames_have_header_and_board() {
        let mut view = View::plain(Vec::new());
        view.show(&game()).unwrap();
        let text = String::from_utf8(view.into_inner()).unwrap();
        assert_eq!(text, "Frame 1:\n *  \n    \n");
    }

    #[test]
    fn terminal_frames_clear_first() {
        let mut view = View::new(Vec::new());
        view.show(&game()).unwrap();
        let text = String::from_utf8(view.into_inner()).unwrap();
        assert!(text.starts_with(&termion::clear::All.to_string()));
        assert!(text.ends_with("Frame 1:\n *  \n    \n"));
    }
}
