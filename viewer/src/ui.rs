use std::io::{self, Stdout, Write, stdout};
use std::time::Duration;

use crossterm::{
    cursor::{MoveDown, MoveToColumn, MoveUp},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use log::warn;
use thiserror::Error;

const PROMPT: &str = "> ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiInputError {
    #[error("input source disconnected")]
    Disconnected,
}

pub trait Prompt {
    fn show_message(&mut self, message: &str);
    fn show_error(&mut self, message: &str);
    fn show_prompt(&mut self, prompt: &str);
    fn poll_input(&mut self, limit: usize) -> Result<Option<String>, UiInputError>;
}

/// Raw-mode line editor. Messages scroll above a `> ` input line that wraps
/// to the terminal width.
pub struct TerminalUi<W: Write> {
    stdout: W,
    buffer: String,
    prompt_lines: u16,
    cols: u16,
    is_raw_mode_owner: bool, // True except in tests.
}

impl TerminalUi<Stdout> {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = stdout();
        let (cols, _) = terminal::size().unwrap_or((80, 24));
        execute!(
            stdout,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(PROMPT)
        )?;
        Ok(Self {
            stdout,
            buffer: String::new(),
            prompt_lines: 1,
            cols,
            is_raw_mode_owner: true,
        })
    }
}

impl<W: Write> TerminalUi<W> {
    fn clear_prompt(&mut self) -> io::Result<()> {
        if self.prompt_lines > 1 {
            queue!(self.stdout, MoveUp(self.prompt_lines - 1))?;
        }

        for i in 0..self.prompt_lines {
            queue!(self.stdout, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
            if i + 1 < self.prompt_lines {
                queue!(self.stdout, MoveDown(1))?;
            }
        }

        if self.prompt_lines > 1 {
            queue!(self.stdout, MoveUp(self.prompt_lines - 1))?;
        }
        queue!(self.stdout, MoveToColumn(0))
    }

    fn redraw_prompt(&mut self) -> io::Result<()> {
        self.clear_prompt()?;

        let cols = self.cols.max(1) as usize;
        let full_len = PROMPT.len() + self.buffer.chars().count();
        self.prompt_lines = full_len.max(1).div_ceil(cols) as u16;

        queue!(self.stdout, Print(PROMPT), Print(&self.buffer))?;
        self.stdout.flush()
    }

    fn print_line(&mut self, prefix: &str, message: &str) -> io::Result<()> {
        self.clear_prompt()?;
        queue!(self.stdout, Print(prefix), Print(message), Print("\r\n"))?;
        self.prompt_lines = 1;
        self.redraw_prompt()
    }

    fn handle_event(&mut self, event: Event, limit: usize) -> Result<Option<String>, UiInputError> {
        let result = match event {
            Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                if key_event.modifiers == KeyModifiers::CONTROL {
                    return match key_event.code {
                        KeyCode::Char('c') | KeyCode::Char('d') => Err(UiInputError::Disconnected),
                        _ => Ok(None),
                    };
                }

                match key_event.code {
                    KeyCode::Enter => {
                        let line: String = self.buffer.drain(..).collect();
                        let echoed = queue!(self.stdout, Print("\r\n"));
                        self.prompt_lines = 1;
                        if let Err(e) = echoed.and_then(|_| self.redraw_prompt()) {
                            warn!("failed to redraw prompt: {}", e);
                        }
                        return Ok(Some(line));
                    }
                    KeyCode::Backspace => {
                        if self.buffer.pop().is_some() {
                            self.redraw_prompt()
                        } else {
                            Ok(())
                        }
                    }
                    KeyCode::Esc => {
                        if self.buffer.is_empty() {
                            Ok(())
                        } else {
                            self.buffer.clear();
                            self.redraw_prompt()
                        }
                    }
                    KeyCode::Char(c) => {
                        if self.buffer.len() + c.len_utf8() > limit {
                            Ok(())
                        } else {
                            self.buffer.push(c);
                            self.redraw_prompt()
                        }
                    }
                    _ => Ok(()),
                }
            }
            Event::Resize(cols, _) => {
                self.cols = cols;
                self.redraw_prompt()
            }
            _ => Ok(()),
        };

        if let Err(e) = result {
            warn!("failed to redraw prompt: {}", e);
        }
        Ok(None)
    }
}

impl<W: Write> Prompt for TerminalUi<W> {
    fn show_message(&mut self, message: &str) {
        if let Err(e) = self.print_line("", message) {
            warn!("failed to show message: {}", e);
        }
    }

    fn show_error(&mut self, message: &str) {
        if let Err(e) = self.print_line("[ERROR] ", message) {
            warn!("failed to show error: {}", e);
        }
    }

    fn show_prompt(&mut self, prompt: &str) {
        self.show_message(prompt);
    }

    fn poll_input(&mut self, limit: usize) -> Result<Option<String>, UiInputError> {
        if !input_ready(event::poll(Duration::from_millis(50)))? {
            return Ok(None);
        }

        match event::read() {
            Ok(event) => self.handle_event(event, limit),
            Err(_) => Err(UiInputError::Disconnected),
        }
    }
}

/// A failed poll means the input source is gone.
fn input_ready(polled: io::Result<bool>) -> Result<bool, UiInputError> {
    polled.map_err(|e| {
        warn!("failed to poll terminal input: {}", e);
        UiInputError::Disconnected
    })
}

impl<W: Write> Drop for TerminalUi<W> {
    fn drop(&mut self) {
        if self.is_raw_mode_owner {
            // Only the instance that enabled raw mode may disable it, so tests
            // never touch the runner's terminal.
            execute!(self.stdout, Print("\r\n")).ok();
            if let Err(e) = terminal::disable_raw_mode() {
                warn!("failed to disable raw mode: {}", e);
            }
        }
    }
}
