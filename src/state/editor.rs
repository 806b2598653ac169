//! Pieces shared by both gameplay variants: starter code, the cosmetic run
//! preview, paste policy and the single-flight submission gate.

use crate::model::Language;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionMode {
    Standard,
    Retention,
}

pub fn starter_code(language: Language, mode: SessionMode) -> &'static str {
    match (mode, language) {
        (SessionMode::Standard, Language::Html) => "<!-- Your HTML here -->\n",
        (SessionMode::Standard, _) => "// Your code here\n",
        (SessionMode::Retention, Language::Html) => "<h1></h1>",
        (SessionMode::Retention, _) => "// START CODING\n",
    }
}

/// What the output pane shows. Nothing is executed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Preview {
    #[default]
    Idle,
    /// Buffer rendered verbatim inside a sandboxed frame.
    Markup(String),
    /// Canned console acknowledgement.
    Console(String),
}

pub fn run_preview(language: Language, code: &str, plain: bool, mode: SessionMode) -> Preview {
    if language.is_markup() {
        return Preview::Markup(code.to_string());
    }
    let text = match (mode, plain) {
        (SessionMode::Standard, true) => "[System] Running your code...".to_string(),
        (SessionMode::Standard, false) => format!(
            "[SYSTEM] COMPILING {}...\n[SYSTEM] SYMBOL TABLE GENERATED.\n[SYSTEM] CODE BLOCK EXECUTED.\n[STDOUT] Result pending evaluation.",
            language
        ),
        (SessionMode::Retention, true) => "[System] Running code...".to_string(),
        (SessionMode::Retention, false) => "[STDOUT] Result pending...".to_string(),
    };
    Preview::Console(text)
}

/// Warning to show when a paste is blocked; `None` means the paste goes through.
pub fn paste_warning(anti_cheat: bool, plain: bool, mode: SessionMode) -> Option<&'static str> {
    if !anti_cheat {
        return None;
    }
    Some(match (mode, plain) {
        (SessionMode::Standard, true) => "Paste is not allowed here. Please type manually.",
        (SessionMode::Standard, false) => "ANTI_CHEAT: PASTE_COMMAND_INTERCEPTED.",
        (SessionMode::Retention, true) => "Paste is not allowed here.",
        (SessionMode::Retention, false) => "ANTI_CHEAT: PASTE_BLOCKED.",
    })
}

/// At most one grading request in flight. Each request gets a ticket and only
/// the answer carrying the outstanding ticket is accepted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitGate {
    issued: u64,
    pending: Option<u64>,
}

impl SubmitGate {
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn begin(&mut self) -> Option<u64> {
        if self.pending.is_some() {
            return None;
        }
        self.issued += 1;
        self.pending = Some(self.issued);
        self.pending
    }

    pub fn settle(&mut self, ticket: u64) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Drops the outstanding ticket so its answer will be ignored.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
