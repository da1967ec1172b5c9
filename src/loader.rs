//! Loading screen: typewriter title, fade-out, deferred page enhancements

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Text typed out on the loading screen
    pub text: String,
    /// Pause before typing starts
    pub type_delay_ms: u64,
    /// Time between typed characters
    pub type_interval_ms: u64,
    /// When the loading screen fades out
    pub hide_at_ms: u64,
    /// Delay from the fade-out to re-enabling page scroll
    pub scroll_unlock_ms: u64,
    /// When the loaded state, hero entrance and parallax kick in
    pub enhance_at_ms: u64,
    /// Delay between hero children entering
    pub hero_stagger_ms: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            text: "HICHAM ADERDOUR".to_string(),
            type_delay_ms: 500,
            type_interval_ms: 80,
            hide_at_ms: 2500,
            scroll_unlock_ms: 500,
            enhance_at_ms: 3000,
            hero_stagger_ms: 200,
        }
    }
}

impl LoaderConfig {
    /// Fire time of the first typed character
    pub fn first_char_at(&self) -> Duration {
        Duration::from_millis(self.type_delay_ms + self.type_interval_ms)
    }

    pub fn type_interval(&self) -> Duration {
        Duration::from_millis(self.type_interval_ms)
    }

    /// Entrance delay of the hero child at `index`
    pub fn hero_delay(&self, index: usize) -> Duration {
        Duration::from_millis(self.hero_stagger_ms) * index as u32
    }
}

/// Reveals the loader text one character at a time
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    typed: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            typed: 0,
        }
    }

    /// Text shown so far
    pub fn shown(&self) -> String {
        self.chars[..self.typed].iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.typed >= self.chars.len()
    }

    /// Type one more character and return the text now shown
    ///
    /// `None` once everything has been typed.
    pub fn type_next(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.typed += 1;
        Some(self.shown())
    }
}
