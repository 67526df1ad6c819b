use crate::screen::Screen;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use lifecanvas_lib::{Cell, Color, Config, Seed, Stroke, Universe};
use std::{
    io::{self, Stdout, Write},
    time::Duration,
};
use tracing::{debug, warn};

/// Time between two animation frames.
const FRAME: Duration = Duration::from_millis(33);

const WHITE: Color = Color::new(255, 255, 255, 255);

struct LifeWindow {
    universe: Universe,
    ticks_per_frame: u32,
    running: bool,
    blit: bool,
    stroke: Option<Stroke>,
    screen: Screen,
}

/// What the event loop should do after an event.
enum Action {
    Redraw,
    Quit,
    Nothing,
}

impl LifeWindow {
    fn new(config: &Config, blit: bool, (cols, rows): (u16, u16)) -> Self {
        let mut universe = config.world();
        universe.set_square_size(1);
        universe.set_square_spacing(0);
        let (width, height) = world_size(cols, rows);
        universe.resize_to(width, height);
        LifeWindow {
            universe,
            ticks_per_frame: config.ticks_per_frame,
            running: false,
            blit,
            stroke: None,
            screen: Screen::new(width, height),
        }
    }

    fn status(&self) -> &'static str {
        if self.running {
            "Running... Press [space] to pause."
        } else {
            "Paused. Press [space] to run."
        }
    }

    fn update(&mut self, out: &mut Stdout) -> io::Result<()> {
        let (width, height) = (self.universe.width(), self.universe.height());
        self.screen.reset(width, height);
        if self.blit {
            if let Err(e) = self
                .universe
                .render_cells(Cell::Alive, WHITE, &mut self.screen)
            {
                warn!("{}", e);
            }
        } else {
            self.universe
                .fill_cells(Cell::Alive, &mut self.screen)
                .unwrap_or_else(|never| match never {});
        }

        queue!(
            out,
            Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            SetAttribute(Attribute::Reverse),
            Print(format!(
                "Gen: {}  Cells: {}  {}",
                self.universe.generation(),
                self.universe.population(),
                self.status()
            )),
            SetAttribute(Attribute::Reset)
        )?;
        for (y, line) in self.screen.lines().enumerate() {
            queue!(out, cursor::MoveTo(0, y as u16 + 1), Print(line))?;
        }
        queue!(
            out,
            cursor::MoveTo(0, height as u16 + 1),
            SetAttribute(Attribute::Reverse),
            Print("[space] run/pause  [n] step  [c] clear  [r] random  [q] quit"),
            SetAttribute(Attribute::Reset)
        )?;
        out.flush()
    }

    fn key(&mut self, key: KeyEvent) -> Action {
        if key.kind == KeyEventKind::Release {
            return Action::Nothing;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.running = !self.running;
                Action::Redraw
            }
            KeyCode::Char('n') | KeyCode::Right => {
                self.running = false;
                self.universe.tick();
                Action::Redraw
            }
            KeyCode::Char('c') => {
                self.universe.clear();
                Action::Redraw
            }
            KeyCode::Char('r') => {
                self.universe.seed(Seed::Random);
                Action::Redraw
            }
            _ => Action::Nothing,
        }
    }

    fn mouse(&mut self, mouse: MouseEvent) -> Action {
        // The top bar takes the first row.
        let (x, y) = (mouse.column as u32, mouse.row as u32);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if y > 0 => {
                self.stroke = Some(Stroke::begin(&mut self.universe, x, y - 1));
                Action::Redraw
            }
            MouseEventKind::Drag(MouseButton::Left) if y > 0 => {
                if let Some(stroke) = &mut self.stroke {
                    stroke.extend(&mut self.universe, x, y - 1);
                } else {
                    self.stroke = Some(Stroke::begin(&mut self.universe, x, y - 1));
                }
                Action::Redraw
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.stroke = None;
                Action::Nothing
            }
            _ => Action::Nothing,
        }
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        let (width, height) = world_size(cols, rows);
        debug!(width, height, "Terminal resized");
        self.stroke = None;
        self.universe.resize_to(width, height);
    }
}

/// The world fills the terminal, except for the top and bottom bars.
fn world_size(cols: u16, rows: u16) -> (u32, u32) {
    (cols as u32, rows.saturating_sub(2) as u32)
}

fn event_loop(win: &mut LifeWindow, out: &mut Stdout) -> io::Result<()> {
    win.update(out)?;
    loop {
        let timeout = if win.running {
            FRAME
        } else {
            Duration::from_secs(1)
        };
        if event::poll(timeout)? {
            let action = match event::read()? {
                Event::Key(key) => win.key(key),
                Event::Mouse(mouse) => win.mouse(mouse),
                Event::Resize(cols, rows) => {
                    win.resize(cols, rows);
                    Action::Redraw
                }
                _ => Action::Nothing,
            };
            match action {
                Action::Quit => return Ok(()),
                Action::Redraw => win.update(out)?,
                Action::Nothing => (),
            }
        } else if win.running {
            win.universe.advance(win.ticks_per_frame);
            win.update(out)?;
        }
    }
}

/// Runs the world interactively in the terminal,
/// then prints the last generation in Plaintext format.
pub(crate) fn run_with_tui(config: &Config, blit: bool) -> io::Result<()> {
    let mut win = LifeWindow::new(config, blit, terminal::size()?);
    let mut out = io::stdout();

    terminal::enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;
    let result = event_loop(&mut win, &mut out);
    execute!(out, cursor::Show, DisableMouseCapture, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result?;

    print!("{}", win.universe);
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> LifeWindow {
        LifeWindow::new(&Config::new(3, 3).set_seed(Seed::Stripes), false, (6, 6))
    }

    fn left(kind: fn(MouseButton) -> MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: kind(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn fills_the_terminal() {
        let win = window();
        assert_eq!((win.universe.width(), win.universe.height()), (6, 4));
        assert_eq!(win.universe.get_square_size(), 1);
        assert_eq!(win.universe.get_square_spacing(), 0);
        // The seeded corner survives the resize.
        assert_eq!(win.universe.get_cell_at(0, 0), Ok(Cell::Alive));
        assert_eq!(world_size(10, 1), (10, 0));
    }

    #[test]
    fn keys() {
        let mut win = window();
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert!(matches!(win.key(press(KeyCode::Char(' '))), Action::Redraw));
        assert!(win.running);
        win.key(press(KeyCode::Char('n')));
        assert!(!win.running);
        assert_eq!(win.universe.generation(), 1);

        win.key(press(KeyCode::Char('c')));
        assert_eq!(win.universe.population(), 0);
        assert_eq!(win.universe.generation(), 0);

        assert!(matches!(win.key(press(KeyCode::Char('q'))), Action::Quit));
        assert!(matches!(win.key(press(KeyCode::Esc)), Action::Quit));
        assert!(matches!(win.key(press(KeyCode::Char('x'))), Action::Nothing));
    }

    #[test]
    fn drawing() {
        let mut win = window();
        win.universe.clear();

        win.mouse(left(MouseEventKind::Down, 0, 1));
        win.mouse(left(MouseEventKind::Drag, 3, 1));
        win.mouse(left(MouseEventKind::Up, 3, 1));
        let alive: Vec<_> = win.universe.coords_of(Cell::Alive).collect();
        assert_eq!(alive, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert!(win.stroke.is_none());

        // The top bar is not part of the world.
        win.mouse(left(MouseEventKind::Down, 5, 0));
        assert_eq!(win.universe.population(), 4);
    }

    #[test]
    fn resizing() {
        let mut win = window();
        win.resize(2, 4);
        assert_eq!((win.universe.width(), win.universe.height()), (2, 2));
        assert_eq!(win.universe.get_cell_at(0, 0), Ok(Cell::Alive));
    }
}
