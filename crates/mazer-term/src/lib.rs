//! Crossterm terminal renderer for maze snapshots.
//!
//! [`TermRenderer`] redraws only the positions that changed since the
//! previous snapshot it drew, colouring every agent's markers with that
//! agent's own colour.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, queue,
    style::{self, Color as CtColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use mazer_core::{Snapshot, Symbol, compute_frame};

/// Foreground colours cycled through by agent index.
const AGENT_COLORS: [CtColor; 6] = [
    CtColor::Cyan,
    CtColor::Magenta,
    CtColor::Green,
    CtColor::Blue,
    CtColor::Red,
    CtColor::White,
];

/// Maps a [`Symbol`] to the colour it is drawn with.
fn symbol_color(sym: Symbol) -> CtColor {
    match sym {
        Symbol::Wall => CtColor::DarkGrey,
        Symbol::Passage => CtColor::Reset,
        Symbol::Goal => CtColor::Yellow,
        Symbol::Start(a) | Symbol::Trail(a) | Symbol::Agent(a) => {
            AGENT_COLORS[a.index() % AGENT_COLORS.len()]
        }
    }
}

/// Draws successive snapshots of one maze to a terminal.
pub struct TermRenderer<W: Write> {
    out: W,
    prev: Option<Snapshot>,
}

impl TermRenderer<Stdout> {
    /// Renderer writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TermRenderer<W> {
    /// Create a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out, prev: None }
    }

    /// Switch to the alternate screen and hide the cursor.
    pub fn init(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        self.out.flush()
    }

    /// Draw `snap`, writing only what changed since the last draw.
    pub fn draw(&mut self, snap: &Snapshot) -> io::Result<()> {
        let frame = match &self.prev {
            Some(prev) if prev.bounds() == snap.bounds() => compute_frame(prev, snap),
            _ => compute_frame(&Snapshot::from_text(""), snap),
        };

        for fc in &frame.cells {
            let p = fc.pos;
            queue!(
                self.out,
                cursor::MoveTo(p.x as u16, p.y as u16),
                SetForegroundColor(symbol_color(fc.sym)),
                style::Print(fc.sym.glyph())
            )?;
        }
        if !frame.cells.is_empty() {
            queue!(
                self.out,
                style::ResetColor,
                cursor::MoveTo(0, snap.height() as u16)
            )?;
        }
        self.out.flush()?;
        self.prev = Some(snap.clone());
        Ok(())
    }

    /// Restore the terminal.
    pub fn close(&mut self) {
        let _ = queue!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_core::{AgentId, Grid, Point};

    fn printed(out: &[u8]) -> String {
        String::from_utf8_lossy(out).into_owned()
    }

    #[test]
    fn first_draw_paints_everything() {
        let g = Grid::new(3, 3);
        g.set(Point::new(1, 1), Symbol::Goal);
        let mut r = TermRenderer::new(Vec::new());
        r.draw(&g.snapshot()).unwrap();
        let s = printed(&r.out);
        assert_eq!(s.matches('#').count(), 8);
        assert!(s.contains('Q'));
    }

    #[test]
    fn unchanged_snapshot_writes_nothing() {
        let g = Grid::new(4, 2);
        let mut r = TermRenderer::new(Vec::new());
        r.draw(&g.snapshot()).unwrap();
        r.out.clear();
        r.draw(&g.snapshot()).unwrap();
        assert!(r.out.is_empty());
    }

    #[test]
    fn only_changes_are_redrawn() {
        let g = Grid::new(5, 3);
        let mut r = TermRenderer::new(Vec::new());
        r.draw(&g.snapshot()).unwrap();
        r.out.clear();

        g.set(Point::new(2, 1), Symbol::Agent(AgentId(11)));
        r.draw(&g.snapshot()).unwrap();
        let s = printed(&r.out);
        assert!(s.contains('b'));
        assert!(!s.contains('#'));
    }

    #[test]
    fn agents_get_distinct_colors() {
        let a = symbol_color(Symbol::Trail(AgentId(0)));
        let b = symbol_color(Symbol::Trail(AgentId(1)));
        assert_ne!(a, b);
        assert_eq!(a, symbol_color(Symbol::Agent(AgentId(0))));
        assert_eq!(a, symbol_color(Symbol::Trail(AgentId(6))));
    }
}
