//! In-process keyboard/line event plumbing.
//!
//! A prompt run consumes discrete events from a single shared channel. The
//! channel has exactly one consuming side (`InputSource`); a prompt takes
//! temporary ownership through [`InputSource::attach`], and dropping the
//! returned guard hands the source back. Producers hold cloneable
//! [`InputHandle`]s.

use tokio::sync::mpsc;
use tracing::trace;

/// Named key identity, mirroring what a terminal keypress carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Backspace,
    Char(char),
    /// Any key the engine has no mapping for.
    Other,
}

/// One keypress with its control-modifier flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub name: Key,
    pub ctrl: bool,
}

impl KeyPress {
    /// Unmodified keypress.
    pub fn plain(name: Key) -> Self {
        Self { name, ctrl: false }
    }

    /// Control-modified character keypress.
    pub fn ctrl(ch: char) -> Self {
        Self {
            name: Key::Char(ch),
            ctrl: true,
        }
    }

    /// Unmodified character keypress.
    pub fn ch(ch: char) -> Self {
        Self::plain(Key::Char(ch))
    }
}

/// Discrete runtime event consumed by a prompt state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    Key(KeyPress),
    /// A submitted line carrying the raw text typed so far.
    Line(String),
}

/// Producing side of the event channel. Cheap to clone.
#[derive(Debug, Clone)]
pub struct InputHandle {
    tx: mpsc::UnboundedSender<PromptEvent>,
}

impl InputHandle {
    /// Emit an event; silently dropped when the source is gone.
    pub fn send(&self, event: PromptEvent) {
        let _ = self.tx.send(event);
    }

    /// Emit a keypress event.
    pub fn key(&self, key: KeyPress) {
        self.send(PromptEvent::Key(key));
    }

    /// Emit a line event with the submitted text.
    pub fn line(&self, text: impl Into<String>) {
        self.send(PromptEvent::Line(text.into()));
    }

    /// Whether the consuming side has been dropped.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Consuming side of the event channel.
///
/// Exactly one prompt may be attached at a time; sequential handoff across a
/// session is expressed by the exclusive borrow held by [`AttachedInput`].
#[derive(Debug)]
pub struct InputSource {
    rx: mpsc::UnboundedReceiver<PromptEvent>,
}

impl InputSource {
    /// Create a fresh event channel.
    pub fn channel() -> (InputHandle, InputSource) {
        let (tx, rx) = mpsc::unbounded_channel();
        (InputHandle { tx }, InputSource { rx })
    }

    /// Take exclusive ownership of the event stream for one prompt run.
    pub fn attach(&mut self) -> AttachedInput<'_> {
        trace!("input source attached");
        AttachedInput { source: self }
    }
}

/// Guard granting one prompt exclusive access to the event stream.
///
/// Dropping the guard detaches the prompt; buffered events stay queued for
/// the next owner.
#[derive(Debug)]
pub struct AttachedInput<'a> {
    source: &'a mut InputSource,
}

impl AttachedInput<'_> {
    /// Await the next event in emission order.
    ///
    /// Returns `None` when every producer handle has been dropped.
    pub async fn next(&mut self) -> Option<PromptEvent> {
        self.source.rx.recv().await
    }
}

impl Drop for AttachedInput<'_> {
    fn drop(&mut self) {
        trace!("input source detached");
    }
}
