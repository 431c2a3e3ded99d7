//! Best-effort clipboard access for copying code snippets.

use arboard::Clipboard;

/// Lazily opened system clipboard.
///
/// The handle is kept open after the first copy: on X11 the copied text is
/// only served while the owning handle is alive.
#[derive(Default)]
pub struct SnippetClipboard {
    inner: Option<Clipboard>,
}

impl SnippetClipboard {
    pub fn copy(&mut self, text: &str) -> Result<(), arboard::Error> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new()?,
        };
        self.inner.insert(clipboard).set_text(text.to_owned())
    }
}
