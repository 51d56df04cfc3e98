use crate::{input, InputError};
use eframe::egui::Color32;
use std::io::{BufRead, Write};
use std::time::Duration;

pub struct Config;

impl Config {
    pub const WINDOW_TITLE: &'static str = "Conway's Game of Life";
    pub const CANVAS_WIDTH: f32 = 1400.;
    pub const CANVAS_HEIGHT: f32 = 750.;
    pub const SQUARE_SIZE: f32 = 10.;
    pub const SQUARE_GAP: f32 = 1.;
    pub const LIVE_COLOR: Color32 = Color32::WHITE;
    pub const BACKGROUND_COLOR: Color32 = Color32::BLACK;

    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::GRAY;
    pub const TEXT_MARGIN: f32 = 8.;

    /// Starting cells are sampled from `[-SEED_RADIUS, SEED_RADIUS]` on both axes,
    /// small enough for the pattern to stay on screen for a while.
    pub const SEED_RADIUS: i64 = 10;
    pub const SEED_ENV_VAR: &'static str = "CONWAY_SEED";

    pub const PROMPT_DELAY: Duration = Duration::from_millis(500);
    pub const EXTINCTION_LINGER: Duration = Duration::from_secs(1);
}

/// Values chosen by the user for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub cell_count: usize,
    pub generations_per_second: u32,
    pub seed: Option<u64>,
}

impl Settings {
    /// Asks for the size of the first generation and the simulation rate.
    ///
    /// The seed comes from the `CONWAY_SEED` environment variable, if set.
    pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Self, InputError> {
        let cell_count = input::read_integer(input, output, input::CELL_COUNT_QUESTION)?;
        let rate = input::read_integer(input, output, input::RATE_QUESTION)?;
        let mut settings = Self::validate(cell_count, rate, None)?;
        settings.seed = Self::seed_from(std::env::var(Config::SEED_ENV_VAR).ok().as_deref())?;
        Ok(settings)
    }

    pub fn validate(cell_count: i64, rate: i64, seed: Option<u64>) -> Result<Self, InputError> {
        let cell_count =
            usize::try_from(cell_count).map_err(|_| InputError::NegativeCellCount(cell_count))?;
        let generations_per_second = u32::try_from(rate)
            .ok()
            .filter(|&r| r > 0)
            .ok_or(InputError::NonPositiveRate(rate))?;
        Ok(Self {
            cell_count,
            generations_per_second,
            seed,
        })
    }

    fn seed_from(value: Option<&str>) -> Result<Option<u64>, InputError> {
        value
            .map(|s| {
                s.trim()
                    .parse::<u64>()
                    .map_err(|_| InputError::InvalidSeed(s.to_string()))
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::Settings;
    use crate::InputError;
    use std::io::Cursor;

    #[test]
    fn test_validate() {
        let settings = Settings::validate(30, 5, Some(1)).unwrap();
        assert_eq!(settings.cell_count, 30);
        assert_eq!(settings.generations_per_second, 5);
        assert_eq!(settings.seed, Some(1));

        assert_eq!(Settings::validate(0, 1, None).unwrap().cell_count, 0);
        assert!(matches!(
            Settings::validate(-1, 5, None),
            Err(InputError::NegativeCellCount(-1))
        ));
        assert!(matches!(
            Settings::validate(10, 0, None),
            Err(InputError::NonPositiveRate(0))
        ));
        assert!(matches!(
            Settings::validate(10, -4, None),
            Err(InputError::NonPositiveRate(-4))
        ));
        assert!(matches!(
            Settings::validate(10, i64::MAX, None),
            Err(InputError::NonPositiveRate(_))
        ));
    }

    #[test]
    fn test_seed_from() {
        assert_eq!(Settings::seed_from(None).unwrap(), None);
        assert_eq!(Settings::seed_from(Some(" 12 ")).unwrap(), Some(12));
        assert!(matches!(
            Settings::seed_from(Some("abc")),
            Err(InputError::InvalidSeed(_))
        ));
    }

    #[test]
    fn test_prompt_asks_both_questions() {
        let mut input = Cursor::new(b"25\n0\n".to_vec());
        let mut output = Vec::new();
        let result = Settings::prompt(&mut input, &mut output);
        assert!(matches!(result, Err(InputError::NonPositiveRate(0))));

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains(crate::input::CELL_COUNT_QUESTION));
        assert!(printed.contains(crate::input::RATE_QUESTION));
    }
}
