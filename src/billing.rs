use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

const MINUTES_PER_HOUR: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3600;

/// An amount in US dollars.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
pub struct Money(Decimal);

impl Money {
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }
}

impl Add<Money> for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, other: Decimal) -> Self {
        Self(
            (self.0 * other).round_dp_with_strategy(
                2,
                RoundingStrategy::MidpointNearestEven,
            ),
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

/// Hourly rates by work type, iterated in the order they were added.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct RateTable {
    rates: Vec<(String, Money)>,
}

impl RateTable {
    pub fn new() -> Self {
        Self { rates: Vec::new() }
    }

    /// Adds a work type, replacing the rate of an existing one in place.
    pub fn with_rate(mut self, work_type: &str, rate: Money) -> Self {
        match self.rates.iter_mut().find(|(name, _)| name == work_type) {
            Some(entry) => entry.1 = rate,
            None => self.rates.push((work_type.to_string(), rate)),
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.rates.iter().map(|(name, rate)| (name.as_str(), *rate))
    }

    /// Rates for audiobook production work.
    pub fn audiobook() -> Self {
        Self::new()
            .with_rate("audiobook editing", Money::new(Decimal::from(50)))
            .with_rate("audiobook proofing", Money::new(Decimal::from(25)))
            .with_rate("extra editing", Money::new(Decimal::from(50)))
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct LineItem {
    pub work_type: String,
    pub hours: Decimal,
    pub rate: Money,
    pub total: Money,
}

impl LineItem {
    pub fn new(work_type: &str, hours: Decimal, rate: Money) -> Self {
        Self {
            work_type: work_type.to_string(),
            hours,
            rate,
            total: rate * hours,
        }
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}, {} @ {}/hour: {}",
            self.work_type,
            RunTime(self.hours),
            self.rate,
            self.total
        )
    }
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct InvoiceRecord {
    pub customer_name: String,
    pub customer_address: String,
    /// Expected as YYYY-MM-DD, kept verbatim.
    pub invoice_date: String,
    pub book_title: String,
    pub items: Vec<LineItem>,
}

impl InvoiceRecord {
    pub fn grand_total(&self) -> Money {
        self.items
            .iter()
            .map(|i| i.total)
            .fold(Money::zero(), |acc, x| acc + x)
    }
}

/// Parses an hours value, accepting only non-negative numbers that can be
/// shown as a run time.
pub fn parse_hours(input: &str) -> Option<Decimal> {
    let input = input.trim();
    Decimal::from_str(input)
        .or_else(|_| Decimal::from_scientific(input))
        .ok()
        .filter(|h| *h >= Decimal::ZERO)
        .filter(|h| h.checked_mul(Decimal::from(SECONDS_PER_HOUR)).is_some())
}

/// Decimal hours shown as HH:MM:SS.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct RunTime(pub Decimal);

impl RunTime {
    fn components(&self) -> (u64, u64, u64) {
        let sixty = Decimal::from(MINUTES_PER_HOUR);
        let hours = self.0.trunc();
        let minutes = (self.0 * sixty % sixty).trunc();
        let seconds =
            (self.0 * Decimal::from(SECONDS_PER_HOUR) % sixty).trunc();
        (
            hours.to_u64().unwrap_or_default(),
            minutes.to_u64().unwrap_or_default(),
            seconds.to_u64().unwrap_or_default(),
        )
    }
}

impl fmt::Display for RunTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (hours, minutes, seconds) = self.components();
        write!(f, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}
