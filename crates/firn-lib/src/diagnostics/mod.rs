mod collection;
mod message;
mod printer;
mod reporter;


pub use collection::{DiagnosticBuilder, Diagnostics};
pub use message::{DiagnosticKind, DiagnosticMessage, Severity};
pub use printer::DiagnosticsPrinter;
pub use reporter::{CollectingReporter, DiagnosticReporter};
