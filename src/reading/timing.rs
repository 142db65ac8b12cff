// Pacing engine: how long each word stays on screen.

use super::syllables::SyllableEstimator;
use crate::engine::config::TimingConfig;
use std::time::Duration;

pub const SYLLABLE_DIVISOR: f64 = 100.0;
pub const PERIOD_PAUSE_SECS: f64 = 0.2;
pub const CLAUSE_PAUSE_SECS: f64 = 0.1;

const CLAUSE_MARKS: &[char] = &[',', '\'', '"', '`', '-', '(', ')', ':'];

pub fn words_per_second(wpm: u32) -> f64 {
    wpm.max(1) as f64 / 60.0
}

/// Base display time: one word slot, stretched by the squared syllable count.
pub fn word_display_seconds<S>(word: &str, words_per_second: f64, syllables: &S) -> f64
where
    S: SyllableEstimator + ?Sized,
{
    base_seconds(word, words_per_second, syllables, SYLLABLE_DIVISOR)
}

fn base_seconds<S>(word: &str, words_per_second: f64, syllables: &S, divisor: f64) -> f64
where
    S: SyllableEstimator + ?Sized,
{
    let count = syllables.estimate(word) as f64;
    (1.0 / words_per_second) * (1.0 + count * count / divisor)
}

pub fn has_period(word: &str) -> bool {
    word.contains('.')
}

pub fn has_clause_mark(word: &str) -> bool {
    word.contains(CLAUSE_MARKS)
}

/// Extra time added on top of the base wait. The period and clause pauses
/// are independent and both apply when both kinds of mark are present.
pub fn punctuation_pause_seconds(word: &str) -> f64 {
    let mut pause = 0.0;
    if has_period(word) {
        pause += PERIOD_PAUSE_SECS;
    }
    if has_clause_mark(word) {
        pause += CLAUSE_PAUSE_SECS;
    }
    pause
}

/// The suspension for one word, split into the phases that elapse in order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WordTiming {
    pub period_pause: Duration,
    pub clause_pause: Duration,
    pub base: Duration,
}

impl WordTiming {
    pub fn compute<S>(word: &str, wpm: u32, syllables: &S, config: &TimingConfig) -> Self
    where
        S: SyllableEstimator + ?Sized,
    {
        let base = base_seconds(
            word,
            words_per_second(wpm),
            syllables,
            config.syllable_divisor,
        );
        let pause = |applies: bool, secs: f64| {
            if applies {
                Duration::from_secs_f64(secs)
            } else {
                Duration::ZERO
            }
        };

        Self {
            period_pause: pause(has_period(word), config.period_pause_secs),
            clause_pause: pause(has_clause_mark(word), config.clause_pause_secs),
            base: Duration::from_secs_f64(base),
        }
    }

    /// Period pause, clause pause, then the base wait.
    pub fn phases(&self) -> [Duration; 3] {
        [self.period_pause, self.clause_pause, self.base]
    }

    pub fn total(&self) -> Duration {
        self.period_pause + self.clause_pause + self.base
    }
}
