use derive_more::{Display, Into};
use serde::{Deserialize, Serialize};
use strum::AsRefStr;

use crate::domain::errors::{DomainResult, ValidationError};

pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 45;
pub const SET_SIZE: usize = 6;

/// Value Object - one ball, always within `MIN_NUMBER..=MAX_NUMBER`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct LottoNumber(u8);

impl LottoNumber {
    pub(crate) const LOWEST: LottoNumber = LottoNumber(MIN_NUMBER);

    pub fn new(value: u8) -> DomainResult<Self> {
        if (MIN_NUMBER..=MAX_NUMBER).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::NumberOutOfRange(value as u32))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn band(&self) -> NumberBand {
        match self.0 {
            1..=10 => NumberBand::Band1,
            11..=20 => NumberBand::Band2,
            21..=30 => NumberBand::Band3,
            31..=40 => NumberBand::Band4,
            _ => NumberBand::Band5,
        }
    }
}

impl TryFrom<u8> for LottoNumber {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Colour band of a ball, exposed to the page as a CSS class
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum NumberBand {
    #[strum(serialize = "ball-band-1")]
    Band1,
    #[strum(serialize = "ball-band-2")]
    Band2,
    #[strum(serialize = "ball-band-3")]
    Band3,
    #[strum(serialize = "ball-band-4")]
    Band4,
    #[strum(serialize = "ball-band-5")]
    Band5,
}

/// Value Object - sequential draw identifier, starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into)]
pub struct DrawNumber(u32);

impl DrawNumber {
    pub const FIRST: DrawNumber = DrawNumber(1);

    pub fn new(value: u32) -> DomainResult<Self> {
        if value == 0 {
            return Err(ValidationError::NonPositiveDrawNumber(0));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn successor(&self) -> DrawNumber {
        DrawNumber(self.0.saturating_add(1))
    }

    /// `None` once we are at the first draw.
    pub fn predecessor(&self) -> Option<DrawNumber> {
        (self.0 > 1).then(|| DrawNumber(self.0 - 1))
    }

    /// This draw and up to `count - 1` earlier ones, newest first.
    pub fn descending(self, count: usize) -> impl Iterator<Item = DrawNumber> {
        std::iter::successors(Some(self), DrawNumber::predecessor).take(count)
    }
}

/// Value Object - six distinct balls in ascending order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumberSet([LottoNumber; SET_SIZE]);

impl NumberSet {
    /// Validates size and uniqueness, then sorts.
    pub fn new(numbers: &[u8]) -> DomainResult<Self> {
        if numbers.len() != SET_SIZE {
            return Err(ValidationError::WrongSetSize {
                expected: SET_SIZE,
                actual: numbers.len(),
            });
        }

        let mut array = [LottoNumber::LOWEST; SET_SIZE];
        for (slot, &n) in array.iter_mut().zip(numbers) {
            *slot = LottoNumber::new(n)?;
        }
        array.sort_unstable();
        if let Some(pair) = array.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(ValidationError::DuplicateNumber(pair[0].value()));
        }

        Ok(Self(array))
    }

    /// Caller guarantees the numbers are distinct.
    pub(crate) fn from_distinct(mut numbers: [LottoNumber; SET_SIZE]) -> Self {
        numbers.sort_unstable();
        Self(numbers)
    }

    pub fn numbers(&self) -> &[LottoNumber] {
        &self.0
    }

    pub fn values(&self) -> Vec<u8> {
        self.0.iter().map(LottoNumber::value).collect()
    }

    pub fn contains(&self, number: LottoNumber) -> bool {
        self.0.contains(&number)
    }
}

impl std::fmt::Display for NumberSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined: Vec<String> = self.0.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", joined.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lotto_number_rejects_out_of_range() {
        assert!(LottoNumber::new(0).is_err());
        assert!(LottoNumber::new(46).is_err());
        assert_eq!(LottoNumber::new(45).unwrap().value(), 45);
    }

    #[test]
    fn bands_split_on_decades() {
        let band = |n| LottoNumber::new(n).unwrap().band();
        assert_eq!(band(10), NumberBand::Band1);
        assert_eq!(band(11), NumberBand::Band2);
        assert_eq!(band(30), NumberBand::Band3);
        assert_eq!(band(40), NumberBand::Band4);
        assert_eq!(band(41).as_ref(), "ball-band-5");
    }

    #[test]
    fn draw_number_descending_stops_at_first_draw() {
        let ids: Vec<u32> = DrawNumber::new(3).unwrap().descending(5).map(|d| d.value()).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn number_set_sorts_and_validates() {
        let set = NumberSet::new(&[45, 3, 17, 1, 22, 9]).unwrap();
        assert_eq!(set.values(), vec![1, 3, 9, 17, 22, 45]);
        assert_eq!(set.to_string(), "1 3 9 17 22 45");

        assert_eq!(
            NumberSet::new(&[1, 2, 3]),
            Err(ValidationError::WrongSetSize { expected: 6, actual: 3 })
        );
        assert_eq!(
            NumberSet::new(&[1, 2, 3, 4, 5, 5]),
            Err(ValidationError::DuplicateNumber(5))
        );
    }
}
