//! Stat kinds, valuation and the comparison rule.
//!
//! ## Valuation
//!
//! Each `StatKind` reads one field of a `Card` and yields a `StatValue`:
//! - `Numeric(v)`: the field is present and, for the nutrition stats, its
//!   text starts with a number
//! - `Unavailable`: the field is absent or has no leading number
//!
//! ## Comparison
//!
//! [`winner`] is the only place that decides a round. Unavailable values
//! count as `0.0`, equal values always tie.

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::Side;

/// The seven comparable stats of a recipe card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    Rating,
    Reviews,
    Time,
    Calories,
    Carbs,
    Fat,
    Protein,
}

impl StatKind {
    /// All stat kinds in card display order.
    pub const ALL: [StatKind; 7] = [
        StatKind::Rating,
        StatKind::Reviews,
        StatKind::Time,
        StatKind::Calories,
        StatKind::Carbs,
        StatKind::Fat,
        StatKind::Protein,
    ];

    /// Stable lowercase key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            StatKind::Rating => "rating",
            StatKind::Reviews => "reviews",
            StatKind::Time => "time",
            StatKind::Calories => "calories",
            StatKind::Carbs => "carbs",
            StatKind::Fat => "fat",
            StatKind::Protein => "protein",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            StatKind::Rating => "Rating",
            StatKind::Reviews => "Reviews",
            StatKind::Time => "Time",
            StatKind::Calories => "Calories",
            StatKind::Carbs => "Carbs",
            StatKind::Fat => "Fat",
            StatKind::Protein => "Protein",
        }
    }

    /// Value of this stat on `card`.
    #[must_use]
    pub fn value_of(self, card: &Card) -> StatValue {
        let value = match self {
            StatKind::Rating => card.rating,
            StatKind::Reviews => card.reviews.map(f64::from),
            StatKind::Time => card.time.map(f64::from),
            StatKind::Calories => card.calories.as_deref().and_then(parse_leading_number),
            StatKind::Carbs => card.carbs.as_deref().and_then(parse_leading_number),
            StatKind::Fat => card.fat.as_deref().and_then(parse_leading_number),
            StatKind::Protein => card.protein.as_deref().and_then(parse_leading_number),
        };
        value.map_or(StatValue::Unavailable, StatValue::Numeric)
    }

    /// Whether `card` carries a usable value for this stat.
    #[must_use]
    pub fn is_available(self, card: &Card) -> bool {
        self.value_of(card).is_available()
    }
}

impl std::fmt::Display for StatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A stat reading.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum StatValue {
    Numeric(f64),
    Unavailable,
}

impl StatValue {
    #[must_use]
    pub fn is_available(self) -> bool {
        matches!(self, StatValue::Numeric(_))
    }

    /// Value used for comparison. Unavailable compares as zero.
    #[must_use]
    pub fn comparable(self) -> f64 {
        match self {
            StatValue::Numeric(v) => v,
            StatValue::Unavailable => 0.0,
        }
    }
}

/// Which end of the scale wins a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    HigherWins,
    LowerWins,
}

impl Direction {
    #[must_use]
    pub fn higher_wins(self) -> bool {
        self == Direction::HigherWins
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::HigherWins => f.write_str("higher wins"),
            Direction::LowerWins => f.write_str("lower wins"),
        }
    }
}

/// Decide a round: the side whose card wins on `stat`, or `None` on a tie.
#[must_use]
pub fn winner(stat: StatKind, direction: Direction, player: &Card, computer: &Card) -> Option<Side> {
    let p = stat.value_of(player).comparable();
    let c = stat.value_of(computer).comparable();

    let (better, worse) = match direction {
        Direction::HigherWins => (p > c, c > p),
        Direction::LowerWins => (p < c, c < p),
    };

    if better {
        Some(Side::Player)
    } else if worse {
        Some(Side::Computer)
    } else {
        None
    }
}

/// Extract the leading decimal number of a stat text.
///
/// Leading whitespace and a sign are accepted. Either `.` or `,` works as the
/// decimal separator when a digit follows it. An `e`/`E` exponent is taken
/// only when at least one digit follows it.
///
/// ```
/// use recipe_trumps::cards::parse_leading_number;
///
/// assert_eq!(parse_leading_number("350 kcal"), Some(350.0));
/// assert_eq!(parse_leading_number("12,5 g"), Some(12.5));
/// assert_eq!(parse_leading_number("1e3 kcal"), Some(1000.0));
/// assert_eq!(parse_leading_number("kcal"), None);
/// ```
#[must_use]
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_in = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = sign_len + digits_in(sign_len);
    let mut number = text[..int_end].to_string();
    let mut fraction_digits = 0;

    if matches!(bytes.get(int_end), Some(b'.' | b','))
        && bytes.get(int_end + 1).is_some_and(u8::is_ascii_digit)
    {
        fraction_digits = digits_in(int_end + 1);
        number.push('.');
        number.push_str(&text[int_end + 1..int_end + 1 + fraction_digits]);
    }

    if int_end == sign_len && fraction_digits == 0 {
        return None;
    }

    let mantissa_end = if fraction_digits > 0 {
        int_end + 1 + fraction_digits
    } else {
        int_end
    };
    if matches!(bytes.get(mantissa_end), Some(b'e' | b'E')) {
        let exp_sign = usize::from(matches!(bytes.get(mantissa_end + 1), Some(b'+' | b'-')));
        let exp_start = mantissa_end + 1 + exp_sign;
        let exp_digits = digits_in(exp_start);
        if exp_digits > 0 {
            number.push('e');
            number.push_str(&text[mantissa_end + 1..exp_start + exp_digits]);
        }
    }
    number.parse().ok()
}
