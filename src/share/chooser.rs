use super::content::ShareContent;

/// Popup state while the user picks where a note goes.
#[derive(Debug, Clone)]
pub struct ShareChooser {
    content: ShareContent,
    selected: usize,
    len: usize,
}

impl ShareChooser {
    /// Chooser over `len` targets. Returns `None` when there is nothing to
    /// choose from.
    pub fn new(content: ShareContent, len: usize) -> Option<Self> {
        (len > 0).then_some(Self {
            content,
            selected: 0,
            len,
        })
    }

    pub fn content(&self) -> &ShareContent {
        &self.content
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % self.len;
    }

    pub fn prev(&mut self) {
        self.selected = (self.selected + self.len - 1) % self.len;
    }
}
