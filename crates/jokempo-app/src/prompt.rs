use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use std::io::{self, BufRead, Write};

/// Colour hint for a message or menu entry. Plain prompts ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Accept,
    Decline,
    Neutral,
    Alert,
    Celebrate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub key: char,
    pub label: String,
    pub tone: Tone,
}

impl MenuOption {
    pub fn new(key: char, label: impl Into<String>, tone: Tone) -> Self {
        Self {
            key,
            label: label.into(),
            tone,
        }
    }
}

/// Everything the session needs from the terminal.
pub trait Prompt {
    fn banner(&mut self, title: &str) -> io::Result<()>;

    fn say(&mut self, message: &str, tone: Tone) -> io::Result<()>;

    /// Blocks until one of `options` is chosen and returns its key.
    fn choose(&mut self, message: &str, options: &[MenuOption]) -> io::Result<char>;

    /// Reads one raw line of free text.
    fn ask_line(&mut self, message: &str) -> io::Result<String>;
}

pub const INVALID_OPTION: &str = "Invalid option. Try again.";

/// Line-oriented prompt: one answer per line, first non-blank character is the key.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn banner(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== {title} ===")
    }

    fn say(&mut self, message: &str, _tone: Tone) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    fn choose(&mut self, message: &str, options: &[MenuOption]) -> io::Result<char> {
        writeln!(self.output, "{message}")?;
        let menu = options
            .iter()
            .map(|option| format!("[{}] {}", option.key, option.label))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(self.output, "{menu}")?;
        loop {
            self.output.flush()?;
            let line = self.read_line()?;
            let key = line.trim().chars().next();
            if let Some(key) = key.filter(|k| options.iter().any(|o| o.key == *k)) {
                return Ok(key);
            }
            writeln!(self.output, "{INVALID_OPTION}")?;
        }
    }

    fn ask_line(&mut self, message: &str) -> io::Result<String> {
        writeln!(self.output, "{message}")?;
        self.output.flush()?;
        self.read_line()
    }
}

/// The arrow-key menus read from stdin and draw on stderr; both must be terminals.
pub fn menus_supported(stdin_is_terminal: bool, stderr_is_terminal: bool) -> bool {
    stdin_is_terminal && stderr_is_terminal
}

/// Interactive prompt with arrow-key menus and coloured output.
#[derive(Default)]
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self::default()
    }
}

fn paint(text: &str, tone: Tone) -> String {
    match tone {
        Tone::Plain => text.green().to_string(),
        Tone::Accept => text.on_blue().white().to_string(),
        Tone::Decline => text.on_red().white().to_string(),
        Tone::Neutral => text.on_bright_black().white().to_string(),
        Tone::Alert => text.on_red().white().bold().to_string(),
        Tone::Celebrate => text.on_magenta().white().bold().to_string(),
    }
}

impl Prompt for TerminalPrompt {
    fn banner(&mut self, title: &str) -> io::Result<()> {
        let rule = "═".repeat(title.chars().count() + 8);
        println!();
        println!("{}", rule.green());
        println!("{}", format!("    {title}    ").green().bold());
        println!("{}", rule.green());
        Ok(())
    }

    fn say(&mut self, message: &str, tone: Tone) -> io::Result<()> {
        println!("{}", paint(message, tone));
        Ok(())
    }

    fn choose(&mut self, message: &str, options: &[MenuOption]) -> io::Result<char> {
        let items = options
            .iter()
            .map(|option| paint(&format!(" [{}] {} ", option.key, option.label), option.tone))
            .collect::<Vec<_>>();
        let index = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(&items[..])
            .default(0)
            .interact()
            .map_err(io::Error::other)?;
        options
            .get(index)
            .map(|option| option.key)
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, INVALID_OPTION))
    }

    fn ask_line(&mut self, message: &str) -> io::Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()
            .map_err(io::Error::other)
    }
}
