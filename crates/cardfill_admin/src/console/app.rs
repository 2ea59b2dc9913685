use std::io::{self, BufRead, Write};

use cardfill_core::ListMsg;
use cardfill_logging::{admin_error, admin_info};

use super::ui::commands::{self, Command, HELP};
use super::ui::render;
use super::ui::screens::{Screen, ScreenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns every screen and routes console commands to the active one.
pub struct Console {
    screens: Vec<Box<dyn Screen>>,
    active: usize,
    messages: Vec<String>,
}

impl Console {
    pub fn new(screens: Vec<Box<dyn Screen>>, start: ScreenKind) -> Self {
        let active = position_of(&screens, start).unwrap_or(0);
        Self {
            screens,
            active,
            messages: Vec::new(),
        }
    }

    pub fn active_kind(&self) -> Option<ScreenKind> {
        self.screens.get(self.active).map(|screen| screen.kind())
    }

    pub fn execute(&mut self, command: Command) -> Flow {
        match command {
            Command::Screen(kind) => self.switch_to(kind),
            Command::Search(keyword) => self.dispatch(ListMsg::KeywordChanged(keyword)),
            Command::Filter(filter) => self.dispatch(ListMsg::FilterChanged(filter)),
            Command::Next => self.dispatch(ListMsg::NextPage),
            Command::Previous => self.dispatch(ListMsg::PreviousPage),
            Command::PageSize(size) => self.dispatch(ListMsg::PageSizeChanged(size)),
            Command::Refresh => self.dispatch(ListMsg::Refresh),
            Command::Screens => {
                for kind in ScreenKind::ALL {
                    self.messages.push(format!(
                        "{:<10} {} (filter: {})",
                        kind.name(),
                        kind.title(),
                        kind.filter_hint()
                    ));
                }
            }
            Command::Help => self
                .messages
                .extend(HELP.iter().map(|line| line.to_string())),
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Reports a line that could not be parsed.
    pub fn report(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Pending messages followed by the active screen's table.
    pub fn frame(&mut self) -> Vec<String> {
        let mut lines = std::mem::take(&mut self.messages);
        match self.screens.get(self.active) {
            Some(screen) => lines.extend(render::render(&screen.table())),
            None => lines.push("No screens configured.".to_string()),
        }
        lines
    }

    fn switch_to(&mut self, kind: ScreenKind) {
        if let Some(index) = position_of(&self.screens, kind) {
            admin_info!("Switching to screen {}", kind.name());
            self.active = index;
            self.dispatch(ListMsg::Refresh);
        }
    }

    fn dispatch(&mut self, msg: ListMsg) {
        let Some(screen) = self.screens.get_mut(self.active) else {
            return;
        };
        if let Err(err) = screen.handle(msg) {
            admin_error!("{} screen: {}", screen.kind().name(), err);
            self.messages
                .push(format!("Error: {err} (showing the last loaded page)"));
        }
    }
}

fn position_of(screens: &[Box<dyn Screen>], kind: ScreenKind) -> Option<usize> {
    screens.iter().position(|screen| screen.kind() == kind)
}

/// Reads commands from `input` until EOF or `quit`, drawing a frame after each.
pub fn run(console: &mut Console, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    console.execute(Command::Refresh);
    draw(console, &mut output)?;

    for line in input.lines() {
        let line = line?;
        match commands::parse(&line) {
            Ok(None) => {}
            Ok(Some(command)) => {
                if console.execute(command) == Flow::Quit {
                    break;
                }
            }
            Err(err) => console.report(err.to_string()),
        }
        draw(console, &mut output)?;
    }
    output.flush()
}

fn draw(console: &mut Console, output: &mut impl Write) -> io::Result<()> {
    writeln!(output)?;
    for line in console.frame() {
        writeln!(output, "{line}")?;
    }
    write!(output, "> ")?;
    output.flush()
}
