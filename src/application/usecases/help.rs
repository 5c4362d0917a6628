//! `?` / `help [cmd...]`

use crate::application::ports::Reporter;
use crate::domain::argv::ArgumentVector;
use crate::domain::command::{COMMANDS, HELP_INDENT, Lookup, resolve};

pub struct HelpUseCase<'a> {
    pub reporter: &'a dyn Reporter,
}

impl<'a> HelpUseCase<'a> {
    pub fn execute(&self, argv: &ArgumentVector) {
        if argv.operands().is_empty() {
            self.reporter
                .line("Commands may be abbreviated.  Commands are:");
            self.reporter.line("");
            for entry in &COMMANDS {
                self.reporter.line(&format!(
                    "{:<width$}\t{}",
                    entry.name,
                    entry.help,
                    width = HELP_INDENT
                ));
            }
            return;
        }

        for name in argv.operands() {
            match resolve(name) {
                Lookup::Found(entry) => self.reporter.line(entry.help),
                Lookup::Ambiguous => self
                    .reporter
                    .line(&format!("?Ambiguous help command {name}")),
                Lookup::NotFound => self
                    .reporter
                    .line(&format!("?Invalid help command {name}")),
            }
        }
    }
}
