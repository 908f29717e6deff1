#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Older history entry, previous page.
    Backward,
    /// Newer history entry, next page.
    Forward,
}

/// Every input a host can feed into the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalAction {
    InputChar(char),
    InputBackspace,
    SetInput(String),
    /// Run whatever is in the live edit buffer.
    Submit,
    /// Run a line directly, as a suggestion button does.
    Execute(String),
    NavigateHistory(Direction),
    NavigatePanel(Direction),
    SelectPage(usize),
    DismissPanel,
}
