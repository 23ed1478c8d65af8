/// Action identifier understood by note-taking receivers.
pub const NOTE_ACTION: &str = "com.meokg456.note.ADD_NOTE";
pub const TEXT_PLAIN: &str = "text/plain";

/// Content handed to a share target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareContent {
    pub action: String,
    pub mime_type: String,
    pub subject: String,
    pub body: String,
}

impl ShareContent {
    /// Plain-text note with the given subject and body.
    pub fn note(subject: String, body: String) -> Self {
        Self {
            action: NOTE_ACTION.to_string(),
            mime_type: TEXT_PLAIN.to_string(),
            subject,
            body,
        }
    }
}
