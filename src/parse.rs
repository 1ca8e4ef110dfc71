use std::{fmt, num::ParseFloatError, str::FromStr};

use crate::interval::Interval;

/// Which bound of an interval failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundSide {
    Lo,
    Hi,
}

impl fmt::Display for BoundSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundSide::Lo => f.write_str("lower"),
            BoundSide::Hi => f.write_str("upper"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseIntervalError {
    #[error("interval must be enclosed in square brackets")]
    MissingBrackets,
    #[error("expected `,` between the interval bounds")]
    MissingSeparator,
    #[error("invalid {which} bound")]
    Bound {
        which: BoundSide,
        #[source]
        source: ParseFloatError,
    },
}

/// Parses the form written by `Display`, `[lo, hi]`, or the literal `empty`.
///
/// Inverted bounds are accepted as is.
///
/// ```rust
/// # use ranged::Interval;
/// let x: Interval = "[-1.5, 2]".parse().unwrap();
/// assert_eq!(x, Interval::new(-1.5, 2.0));
/// assert_eq!("empty".parse::<Interval>().unwrap(), Interval::empty());
/// ```
impl FromStr for Interval {
    type Err = ParseIntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_bounds(s.trim())
            .inspect_err(|err| tracing::debug!(%err, input = s, "rejected interval"))
    }
}

fn parse_bounds(s: &str) -> Result<Interval, ParseIntervalError> {
    if s == "empty" {
        return Ok(Interval::empty());
    }

    let inner = s
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or(ParseIntervalError::MissingBrackets)?;

    let (lo, hi) = inner
        .split_once(',')
        .ok_or(ParseIntervalError::MissingSeparator)?;

    let lo = parse_bound(lo, BoundSide::Lo)?;
    let hi = parse_bound(hi, BoundSide::Hi)?;

    Ok(Interval::new(lo, hi))
}

fn parse_bound(s: &str, which: BoundSide) -> Result<f64, ParseIntervalError> {
    s.trim()
        .parse()
        .map_err(|source| ParseIntervalError::Bound { which, source })
}
