use derive_more::{Display, Into};
use thiserror::Error;

/// Weight of one set in pounds. Construction enforces the input rules
/// of the set logging form, so a stored value is always well-formed.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub const MAX: f32 = 1000.0;

    pub fn new(value: f32) -> Result<Self, WeightError> {
        if value <= 0.0 {
            return Err(WeightError::NonPositive);
        }

        if value > Self::MAX {
            return Err(WeightError::TooLarge);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(WeightError::EmptyInput);
        }

        let parsed = trimmed
            .parse::<f32>()
            .map_err(|_| WeightError::NotANumber)?;

        if parsed <= 0.0 {
            return Err(WeightError::NonPositive);
        }

        if parsed > Self::MAX {
            return Err(WeightError::TooLarge);
        }

        // Checked on the raw text, not the parsed float, to catch
        // inputs like "10.123".
        if let Some((_, fraction)) = trimmed.split_once('.') {
            if fraction.len() > 2 {
                return Err(WeightError::TooManyDecimals);
            }
        }

        Ok(Self(parsed))
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WeightError {
    #[error("Weight is required")]
    EmptyInput,
    #[error("Weight must be a valid number")]
    NotANumber,
    #[error("Weight must be greater than 0")]
    NonPositive,
    #[error("Weight must be less than 1000 lbs")]
    TooLarge,
    #[error("Weight can have at most 2 decimal places")]
    TooManyDecimals,
}

/// Repetition count of one set.
#[derive(Debug, Default, Display, Clone, Copy, Into, Eq, PartialEq, Ord, PartialOrd)]
pub struct Reps(u32);

impl Reps {
    pub const MAX: u32 = 100;

    pub fn new(value: u32) -> Result<Self, RepsError> {
        if value == 0 {
            return Err(RepsError::NonPositive);
        }

        if value > Self::MAX {
            return Err(RepsError::TooLarge);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(RepsError::EmptyInput);
        }

        let parsed = trimmed
            .parse::<f64>()
            .map_err(|_| RepsError::NotAWholeNumber)?;

        if parsed.fract() != 0.0 {
            return Err(RepsError::NotAWholeNumber);
        }

        if parsed <= 0.0 {
            return Err(RepsError::NonPositive);
        }

        if parsed > f64::from(Self::MAX) {
            return Err(RepsError::TooLarge);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Ok(Self(parsed as u32))
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RepsError {
    #[error("Reps are required")]
    EmptyInput,
    #[error("Reps must be a whole number")]
    NotAWholeNumber,
    #[error("Reps must be greater than 0")]
    NonPositive,
    #[error("Reps must be less than 100")]
    TooLarge,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SetInputError {
    #[error(transparent)]
    Weight(#[from] WeightError),
    #[error(transparent)]
    Reps(#[from] RepsError),
}

/// Checks both set inputs, weight first, and stops at the first
/// failing one.
pub fn validate_set_inputs(weight: &str, reps: &str) -> Result<(Weight, Reps), SetInputError> {
    let weight = Weight::try_from(weight)?;
    let reps = Reps::try_from(reps)?;
    Ok((weight, reps))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("12.5", Ok(Weight(12.5)))]
    #[case("135", Ok(Weight(135.0)))]
    #[case(" 45 ", Ok(Weight(45.0)))]
    #[case("999.99", Ok(Weight(999.99)))]
    #[case("1000", Ok(Weight(1000.0)))]
    #[case("", Err(WeightError::EmptyInput))]
    #[case("   ", Err(WeightError::EmptyInput))]
    #[case("abc", Err(WeightError::NotANumber))]
    #[case("0", Err(WeightError::NonPositive))]
    #[case("-10", Err(WeightError::NonPositive))]
    #[case("1001", Err(WeightError::TooLarge))]
    #[case("12.555", Err(WeightError::TooManyDecimals))]
    #[case("0.123", Err(WeightError::TooManyDecimals))]
    fn test_weight_try_from(#[case] raw: &str, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::try_from(raw), expected);
    }

    #[rstest]
    #[case(135.0, Ok(Weight(135.0)))]
    #[case(0.0, Err(WeightError::NonPositive))]
    #[case(1000.5, Err(WeightError::TooLarge))]
    fn test_weight_new(#[case] value: f32, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::new(value), expected);
    }

    #[rstest]
    #[case("5", Ok(Reps(5)))]
    #[case("12.0", Ok(Reps(12)))]
    #[case("100", Ok(Reps(100)))]
    #[case("", Err(RepsError::EmptyInput))]
    #[case("abc", Err(RepsError::NotAWholeNumber))]
    #[case("12.5", Err(RepsError::NotAWholeNumber))]
    #[case("0", Err(RepsError::NonPositive))]
    #[case("-3", Err(RepsError::NonPositive))]
    #[case("101", Err(RepsError::TooLarge))]
    fn test_reps_try_from(#[case] raw: &str, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::try_from(raw), expected);
    }

    #[rstest]
    #[case(5, Ok(Reps(5)))]
    #[case(0, Err(RepsError::NonPositive))]
    #[case(101, Err(RepsError::TooLarge))]
    fn test_reps_new(#[case] value: u32, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::new(value), expected);
    }

    #[test]
    fn test_validate_set_inputs_checks_weight_first() {
        assert_eq!(
            validate_set_inputs("", ""),
            Err(SetInputError::Weight(WeightError::EmptyInput))
        );
        assert_eq!(
            validate_set_inputs("135", "0"),
            Err(SetInputError::Reps(RepsError::NonPositive))
        );
        assert_eq!(
            validate_set_inputs("135", "5"),
            Ok((Weight(135.0), Reps(5)))
        );
    }
}
