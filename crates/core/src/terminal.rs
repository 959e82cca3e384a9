//! Terminal identification capability

/// Resolves the name of the terminal emulator the process is running in.
///
/// Returns an empty string when the terminal cannot be identified.
pub trait TerminalResolver {
    fn resolve_terminal_name(&self) -> String;
}

impl<F> TerminalResolver for F
where
    F: Fn() -> String,
{
    fn resolve_terminal_name(&self) -> String {
        self()
    }
}
