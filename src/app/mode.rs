/// What the reader shows around the flashed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Stats line, progress bar and the surrounding lines.
    #[default]
    Full,
    /// The current word only.
    DistractionFree,
}

impl DisplayMode {
    pub fn from_flag(distraction_free: bool) -> Self {
        if distraction_free {
            DisplayMode::DistractionFree
        } else {
            DisplayMode::Full
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Full => DisplayMode::DistractionFree,
            DisplayMode::DistractionFree => DisplayMode::Full,
        }
    }

    pub fn is_distraction_free(self) -> bool {
        self == DisplayMode::DistractionFree
    }
}

/// How the input adapter reads the next key after a word has been shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollMode {
    /// Take a pending key if there is one, otherwise move on.
    #[default]
    NonBlocking,
    /// Hold the current word until a key arrives.
    Blocking,
}

impl PollMode {
    pub fn toggled(self) -> Self {
        match self {
            PollMode::NonBlocking => PollMode::Blocking,
            PollMode::Blocking => PollMode::NonBlocking,
        }
    }
}
