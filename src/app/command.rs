//! Key dispatch for the reading screen
//!
//! Maps a single key to a reading command:
//! - `q` → quit
//! - `t` → toggle distraction-free mode
//! - `h` / `H` → back 5 / 20 words
//! - `l` / `L` → forward 5 / 20 words
//! - `s` / `d` → slower / faster by 10 wpm
//!
//! Space (poll mode) and Ctrl-C (speed re-prompt) are handled by the
//! session loop before a key reaches this module.

use super::event::Operation;
use super::state::SpeedState;
use crate::engine::config::TimingConfig;
use crate::engine::error::InputError;
use crate::reading::{jump_backward, jump_forward, Document, ReadingPosition};

/// Flips the session between blocking and non-blocking key polls.
pub const POLL_TOGGLE_KEY: char = ' ';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    ToggleDistractionFree,
    JumpBackward(usize),
    JumpForward(usize),
    SlowDown,
    SpeedUp,
}

pub fn parse_key(key: char, config: &TimingConfig) -> Result<Command, InputError> {
    match key {
        'q' => Ok(Command::Quit),
        't' => Ok(Command::ToggleDistractionFree),
        'h' => Ok(Command::JumpBackward(config.short_jump)),
        'H' => Ok(Command::JumpBackward(config.long_jump)),
        'l' => Ok(Command::JumpForward(config.short_jump)),
        'L' => Ok(Command::JumpForward(config.long_jump)),
        's' => Ok(Command::SlowDown),
        'd' => Ok(Command::SpeedUp),
        other => Err(InputError::Unrecognized(other)),
    }
}

/// Applies a command to the given position and speed. Pure: the caller
/// decides what to do with the returned operation.
pub fn apply_command(
    command: Command,
    document: &Document,
    position: ReadingPosition,
    speed: SpeedState,
    config: &TimingConfig,
) -> Operation {
    match command {
        Command::Quit => Operation::Quit,
        Command::ToggleDistractionFree => Operation::ModeToggled,
        Command::JumpBackward(n) => {
            Operation::PositionChanged(jump_backward(n, document, position))
        }
        Command::JumpForward(n) => {
            Operation::PositionChanged(jump_forward(n, document, position))
        }
        Command::SlowDown => {
            Operation::SpeedChanged(speed.slower(config.wpm_step, config.min_wpm))
        }
        Command::SpeedUp => Operation::SpeedChanged(speed.faster(
            config.wpm_step,
            config.min_wpm,
            config.floor_reset_wpm,
        )),
    }
}

/// Interprets a key with the default jump sizes and speed step.
pub fn interpret(
    key: char,
    document: &Document,
    position: ReadingPosition,
    speed: SpeedState,
) -> Result<Operation, InputError> {
    interpret_with(&TimingConfig::default(), key, document, position, speed)
}

pub fn interpret_with(
    config: &TimingConfig,
    key: char,
    document: &Document,
    position: ReadingPosition,
    speed: SpeedState,
) -> Result<Operation, InputError> {
    let command = parse_key(key, config)?;
    Ok(apply_command(command, document, position, speed, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fox() -> Document {
        Document::from_lines(["the quick brown fox", "jumps over the lazy dog"])
    }

    #[test]
    fn test_parse_all_keys() {
        let config = TimingConfig::default();
        assert_eq!(parse_key('q', &config), Ok(Command::Quit));
        assert_eq!(parse_key('t', &config), Ok(Command::ToggleDistractionFree));
        assert_eq!(parse_key('h', &config), Ok(Command::JumpBackward(5)));
        assert_eq!(parse_key('H', &config), Ok(Command::JumpBackward(20)));
        assert_eq!(parse_key('l', &config), Ok(Command::JumpForward(5)));
        assert_eq!(parse_key('L', &config), Ok(Command::JumpForward(20)));
        assert_eq!(parse_key('s', &config), Ok(Command::SlowDown));
        assert_eq!(parse_key('d', &config), Ok(Command::SpeedUp));
    }

    #[test]
    fn test_parse_unknown_key() {
        let config = TimingConfig::default();
        assert_eq!(parse_key('x', &config), Err(InputError::Unrecognized('x')));
        assert_eq!(parse_key('Q', &config), Err(InputError::Unrecognized('Q')));
    }

    #[test]
    fn test_space_is_not_a_reading_command() {
        let config = TimingConfig::default();
        assert!(parse_key(POLL_TOGGLE_KEY, &config).is_err());
    }

    #[test]
    fn test_interpret_quit() {
        let op = interpret('q', &fox(), ReadingPosition::start(), SpeedState::new(300));
        assert_eq!(op, Ok(Operation::Quit));
    }

    #[test]
    fn test_interpret_toggle() {
        let op = interpret('t', &fox(), ReadingPosition::start(), SpeedState::new(300));
        assert_eq!(op, Ok(Operation::ModeToggled));
    }

    #[test]
    fn test_interpret_forward_then_back() {
        let doc = fox();
        let speed = SpeedState::new(300);

        let forward = interpret('l', &doc, ReadingPosition::start(), speed);
        assert_eq!(
            forward,
            Ok(Operation::PositionChanged(ReadingPosition::new(1, 1)))
        );

        let back = interpret('h', &doc, ReadingPosition::new(1, 1), speed);
        assert_eq!(back, Ok(Operation::PositionChanged(ReadingPosition::start())));
    }

    #[test]
    fn test_interpret_long_jumps_clamp() {
        let doc = fox();
        let speed = SpeedState::new(300);
        assert_eq!(
            interpret('L', &doc, ReadingPosition::start(), speed),
            Ok(Operation::PositionChanged(ReadingPosition::new(1, 4)))
        );
        assert_eq!(
            interpret('H', &doc, ReadingPosition::new(1, 4), speed),
            Ok(Operation::PositionChanged(ReadingPosition::start()))
        );
    }

    #[test]
    fn test_interpret_speed_keys() {
        let doc = fox();
        let pos = ReadingPosition::start();
        assert_eq!(
            interpret('s', &doc, pos, SpeedState::new(300)),
            Ok(Operation::SpeedChanged(SpeedState::new(290)))
        );
        assert_eq!(
            interpret('d', &doc, pos, SpeedState::new(300)),
            Ok(Operation::SpeedChanged(SpeedState::new(310)))
        );
    }

    #[test]
    fn test_repeated_slow_down_floors_at_one() {
        let doc = fox();
        let pos = ReadingPosition::start();
        let mut speed = SpeedState::new(35);
        for _ in 0..10 {
            match interpret('s', &doc, pos, speed) {
                Ok(Operation::SpeedChanged(next)) => speed = next,
                other => panic!("Expected SpeedChanged, got {:?}", other),
            }
            assert!(speed.wpm() >= 1);
        }
        assert_eq!(speed.wpm(), 1);
    }

    #[test]
    fn test_speed_up_from_floor_lands_on_ten() {
        let op = interpret('d', &fox(), ReadingPosition::start(), SpeedState::new(1));
        assert_eq!(op, Ok(Operation::SpeedChanged(SpeedState::new(10))));
    }

    #[test]
    fn test_speed_up_from_floor_uses_configured_reset() {
        let config = TimingConfig {
            floor_reset_wpm: 60,
            ..TimingConfig::default()
        };
        let op = interpret_with(&config, 'd', &fox(), ReadingPosition::start(), SpeedState::new(1));
        assert_eq!(op, Ok(Operation::SpeedChanged(SpeedState::new(60))));
    }

    #[test]
    fn test_custom_jump_sizes() {
        let config = TimingConfig {
            short_jump: 2,
            ..TimingConfig::default()
        };
        let op = interpret_with(
            &config,
            'l',
            &fox(),
            ReadingPosition::start(),
            SpeedState::new(300),
        );
        assert_eq!(op, Ok(Operation::PositionChanged(ReadingPosition::new(0, 2))));
    }

    #[test]
    fn test_unrecognized_key_leaves_state_alone() {
        let op = interpret('z', &fox(), ReadingPosition::new(1, 2), SpeedState::new(300));
        assert_eq!(op, Err(InputError::Unrecognized('z')));
    }
}
