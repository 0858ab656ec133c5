use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub border: Color,
    pub positive: Color,
    pub negative: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(11, 17, 32),
            surface: Color::Rgb(21, 31, 50),
            text: Color::Rgb(241, 245, 249),
            text_muted: Color::Rgb(139, 155, 180),
            accent: Color::Rgb(59, 130, 246),
            border: Color::Rgb(40, 52, 74),
            positive: Color::Rgb(16, 185, 129),
            negative: Color::Rgb(239, 68, 68),
            error: Color::Rgb(239, 68, 68),
        }
    }
}

impl Theme {
    /// Uses the background the host asked for, if any.
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        if let Some(background) = background {
            self.background = background;
        }
        self
    }
}
