pub mod cli;
pub mod config;
pub mod logging;
pub mod prompt;
pub mod render;
pub mod session;

pub use cli::Cli;
pub use config::AppConfig;
pub use prompt::{LinePrompt, MenuOption, Prompt, TerminalPrompt, Tone};
pub use session::{Session, SessionError, SessionReport};
