//! # Command Outputter
//!
//! Turns an ordered list of command references into a print job.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌────────────┐     ┌─────────┐
//! │ CommandRef   │ ──► │   resolve    │ ──► │ Vec<Cmd>   │ ──► │  bytes  │
//! │ (configured) │     │ (providers + │     │ (flat,     │     │ (ESC …  │
//! │              │     │  literals)   │     │  ordered)  │     │ LF NUL) │
//! └──────────────┘     └──────────────┘     └────────────┘     └─────────┘
//! ```
//!
//! A reference is one of:
//!
//! - a provider name, resolved through closures registered on the outputter
//! - a literal code (`C`, `T`, `XS`) for a parameterless command
//! - an explicit absence
//! - a nested list, flattened in place
//! - a command that is already built
//!
//! ## Example
//!
//! ```
//! use label_printer::outputter::{CommandRef, Outputter};
//! use label_printer::protocol::layout::SetLabelSize;
//!
//! let outputter = Outputter::new(vec![
//!     CommandRef::provider("label_size"),
//!     CommandRef::literal("C"),
//!     CommandRef::Absent,
//!     CommandRef::literal("XS"),
//! ])
//! .with_provider("label_size", || {
//!     Ok(Some(SetLabelSize::new("0110", "0920", "0080")?.into()))
//! });
//!
//! let commands = outputter.resolved_commands()?;
//! assert_eq!(commands.len(), 3);
//!
//! let job = outputter.output()?;
//! assert!(job.starts_with(b"\x1bD0110,0920,0080\n\x00"));
//! # Ok::<(), label_printer::LabelPrinterError>(())
//! ```

use std::collections::HashMap;
use std::fmt;

use log::{debug, trace};

use crate::error::LabelPrinterError;
use crate::protocol::control::{ClearImageBuffer, Feed, Issue};
use crate::protocol::{self, Command, Encode};

/// Literal codes and the parameterless commands they stand for.
pub const LITERAL_COMMANDS: &[(&str, fn() -> Command)] = &[
    ("C", clear_image_buffer as fn() -> Command),
    ("T", feed as fn() -> Command),
    ("XS", issue as fn() -> Command),
];

fn clear_image_buffer() -> Command {
    Command::ClearImageBuffer(ClearImageBuffer)
}

fn feed() -> Command {
    Command::Feed(Feed)
}

fn issue() -> Command {
    Command::Issue(Issue)
}

/// Look up a literal code in [`LITERAL_COMMANDS`].
pub fn literal_command(code: &str) -> Option<Command> {
    LITERAL_COMMANDS
        .iter()
        .find(|(literal, _)| *literal == code)
        .map(|(_, build)| build())
}

/// One slot in an outputter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandRef {
    /// Resolved by calling the provider registered under this name.
    Provider(String),
    /// Resolved through [`LITERAL_COMMANDS`].
    Literal(String),
    /// Contributes nothing.
    Absent,
    /// Resolved element by element and flattened in place.
    Many(Vec<CommandRef>),
    /// Already built; contributes itself.
    Command(Command),
}

impl CommandRef {
    pub fn provider(name: impl Into<String>) -> Self {
        CommandRef::Provider(name.into())
    }

    pub fn literal(code: impl Into<String>) -> Self {
        CommandRef::Literal(code.into())
    }
}

impl From<Command> for CommandRef {
    fn from(command: Command) -> Self {
        CommandRef::Command(command)
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<protocol::$variant> for CommandRef {
                fn from(command: protocol::$variant) -> Self {
                    CommandRef::Command(command.into())
                }
            }
        )+
    };
}

impl_from_variant!(
    SetLabelSize,
    AdjustPosition,
    AdjustPrintDensity,
    Feed,
    ClearImageBuffer,
    Issue,
    BitmapFormat,
    BitmapDraw,
    BarcodeFormat,
    BarcodeDraw,
);

impl From<Option<Command>> for CommandRef {
    fn from(command: Option<Command>) -> Self {
        command.map_or(CommandRef::Absent, CommandRef::Command)
    }
}

impl From<Vec<CommandRef>> for CommandRef {
    fn from(refs: Vec<CommandRef>) -> Self {
        CommandRef::Many(refs)
    }
}

impl fmt::Display for CommandRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandRef::Provider(name) => write!(f, ":{}", name),
            CommandRef::Literal(code) => write!(f, "\"{}\"", code),
            CommandRef::Absent => f.write_str("nil"),
            CommandRef::Many(refs) => write!(f, "[{} references]", refs.len()),
            CommandRef::Command(command) => write!(f, "<{}>", command.prefix()),
        }
    }
}

/// Zero-argument function yielding a command, or nothing.
pub type Provider<'a> = Box<dyn Fn() -> Result<Option<Command>, LabelPrinterError> + 'a>;

/// Resolves a configured list of [`CommandRef`]s into commands and bytes.
pub struct Outputter<'a> {
    commands_list: Vec<CommandRef>,
    providers: HashMap<String, Provider<'a>>,
}

impl<'a> Outputter<'a> {
    pub fn new(commands_list: Vec<CommandRef>) -> Self {
        Self {
            commands_list,
            providers: HashMap::new(),
        }
    }

    /// Register a provider for `CommandRef::Provider(name)`.
    pub fn with_provider<F>(mut self, name: impl Into<String>, provider: F) -> Self
    where
        F: Fn() -> Result<Option<Command>, LabelPrinterError> + 'a,
    {
        self.providers.insert(name.into(), Box::new(provider));
        self
    }

    /// The configured references, unresolved.
    pub fn commands_list(&self) -> &[CommandRef] {
        &self.commands_list
    }

    /// Resolve every reference, in order, into a flat list of commands.
    ///
    /// Absences and providers yielding nothing are dropped. The first
    /// unknown reference aborts resolution.
    pub fn resolved_commands(&self) -> Result<Vec<Command>, LabelPrinterError> {
        let mut commands = Vec::new();
        for reference in &self.commands_list {
            self.resolve(reference, &mut commands)?;
        }
        debug!(
            "resolved {} references into {} commands",
            self.commands_list.len(),
            commands.len()
        );
        Ok(commands)
    }

    /// The complete print job: every resolved command's output, concatenated.
    pub fn output(&self) -> Result<Vec<u8>, LabelPrinterError> {
        let commands = self.resolved_commands()?;
        let mut out = Vec::new();
        for command in &commands {
            out.extend(command.output());
        }
        Ok(out)
    }

    fn resolve(
        &self,
        reference: &CommandRef,
        commands: &mut Vec<Command>,
    ) -> Result<(), LabelPrinterError> {
        match reference {
            CommandRef::Provider(name) => {
                let provider = self.providers.get(name).ok_or_else(|| {
                    LabelPrinterError::UnknownCommandReference(reference.to_string())
                })?;
                match provider()? {
                    Some(command) => {
                        trace!("{} -> {}", reference, command.formatted());
                        commands.push(command);
                    }
                    None => trace!("{} -> nothing", reference),
                }
            }
            CommandRef::Literal(code) => {
                let command = literal_command(code).ok_or_else(|| {
                    LabelPrinterError::UnknownCommandReference(reference.to_string())
                })?;
                commands.push(command);
            }
            CommandRef::Absent => {}
            CommandRef::Many(refs) => {
                for nested in refs {
                    self.resolve(nested, commands)?;
                }
            }
            CommandRef::Command(command) => commands.push(command.clone()),
        }
        Ok(())
    }
}

impl fmt::Debug for Outputter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut providers: Vec<&String> = self.providers.keys().collect();
        providers.sort();
        f.debug_struct("Outputter")
            .field("commands_list", &self.commands_list)
            .field("providers", &providers)
            .finish()
    }
}
