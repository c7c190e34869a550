/// Input for the conversation window, decoupled from the terminal backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Poll timeout; redraw only.
    Tick,
    /// Terminal size changed; redraw only.
    Resized,
    QuitRequested,
    InputKey(KeyInput),
}

/// A pressed key by name (`"j"`, `"down"`, `"enter"`, ...) plus the Ctrl flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn plain(key: impl Into<String>) -> Self {
        Self::new(key, false)
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_ctrl(key: impl Into<String>) -> Self {
        Self::new(key, true)
    }
}
