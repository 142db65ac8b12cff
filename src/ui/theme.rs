use ratatui::style::{Color, Modifier, Style};

/// Colors for the reading screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub anchor: Color,
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    /// Dark blue background with a coral anchor letter
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26
            text: Color::Rgb(169, 177, 214),    // #A9B1D6
            anchor: Color::Rgb(247, 118, 142),  // #F7768E
            dimmed: Color::Rgb(100, 110, 150),  // #646E96
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn word(&self) -> Style {
        self.base().add_modifier(Modifier::BOLD)
    }

    pub fn anchor(&self) -> Style {
        Style::default()
            .fg(self.anchor)
            .bg(self.background)
            .add_modifier(Modifier::BOLD)
    }

    pub fn context(&self) -> Style {
        Style::default().fg(self.dimmed).bg(self.background)
    }

    pub fn active_context_word(&self) -> Style {
        Style::default().fg(self.anchor).bg(self.background)
    }

    pub fn prompt(&self) -> Style {
        self.base().add_modifier(Modifier::REVERSED)
    }
}
