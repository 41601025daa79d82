// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation directions and the axes they move along.

use core::fmt;
use core::str::FromStr;

/// The two layout axes a navigator can move along.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left/right movement. Overlap is measured on the vertical extent.
    Horizontal,
    /// Up/down movement. Overlap is measured on the horizontal extent.
    Vertical,
}

/// Direction for the horizontal navigator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HorizontalDirection {
    /// Toward smaller `x`.
    #[default]
    Left,
    /// Toward larger `x`.
    Right,
}

/// Direction for the vertical navigator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalDirection {
    /// Toward smaller `y`.
    Up,
    /// Toward larger `y`.
    #[default]
    Down,
}

/// Any of the four arrow directions.
///
/// This is the form hosts usually receive from key handling. It converts into
/// the axis-specific directions with [`TryFrom`], and parses from the tokens
/// `"left"`, `"right"`, `"up"` and `"down"`. Tokens are case-sensitive.
///
/// ```rust
/// use spatial_focus::{Axis, Direction, HorizontalDirection};
///
/// let dir: Direction = "right".parse().unwrap();
/// assert_eq!(dir.axis(), Axis::Horizontal);
/// assert_eq!(HorizontalDirection::try_from(dir), Ok(HorizontalDirection::Right));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Move left.
    Left,
    /// Move right.
    Right,
    /// Move up.
    Up,
    /// Move down.
    Down,
}

impl Direction {
    /// All four directions, in token order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// The axis this direction moves along.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Horizontal,
            Self::Up | Self::Down => Axis::Vertical,
        }
    }

    /// Whether this direction moves toward smaller coordinates (left or up).
    pub const fn is_backward(self) -> bool {
        matches!(self, Self::Left | Self::Up)
    }

    /// The direction pointing the other way on the same axis.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// The lowercase token for this direction.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when parsing a [`Direction`] from an unknown token.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction token, expected one of left, right, up, down")]
pub struct ParseDirectionError;

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| s == d.as_str())
            .ok_or(ParseDirectionError)
    }
}

/// Error returned when a [`Direction`] is converted to the direction type of
/// the other axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("direction `{direction}` does not move along the {expected:?} axis")]
pub struct AxisMismatch {
    /// The direction that was supplied.
    pub direction: Direction,
    /// The axis the target type expects.
    pub expected: Axis,
}

impl From<HorizontalDirection> for Direction {
    fn from(value: HorizontalDirection) -> Self {
        match value {
            HorizontalDirection::Left => Self::Left,
            HorizontalDirection::Right => Self::Right,
        }
    }
}

impl From<VerticalDirection> for Direction {
    fn from(value: VerticalDirection) -> Self {
        match value {
            VerticalDirection::Up => Self::Up,
            VerticalDirection::Down => Self::Down,
        }
    }
}

impl TryFrom<Direction> for HorizontalDirection {
    type Error = AxisMismatch;

    fn try_from(direction: Direction) -> Result<Self, Self::Error> {
        match direction {
            Direction::Left => Ok(Self::Left),
            Direction::Right => Ok(Self::Right),
            Direction::Up | Direction::Down => Err(AxisMismatch {
                direction,
                expected: Axis::Horizontal,
            }),
        }
    }
}

impl TryFrom<Direction> for VerticalDirection {
    type Error = AxisMismatch;

    fn try_from(direction: Direction) -> Result<Self, Self::Error> {
        match direction {
            Direction::Up => Ok(Self::Up),
            Direction::Down => Ok(Self::Down),
            Direction::Left | Direction::Right => Err(AxisMismatch {
                direction,
                expected: Axis::Vertical,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tokens() {
        assert_eq!("left".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("right".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("down".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!("Right".parse::<Direction>(), Err(ParseDirectionError));
        assert_eq!("UP".parse::<Direction>(), Err(ParseDirectionError));
        assert_eq!(" left".parse::<Direction>(), Err(ParseDirectionError));
        assert_eq!("forward".parse::<Direction>(), Err(ParseDirectionError));
        assert_eq!("".parse::<Direction>(), Err(ParseDirectionError));
    }

    #[test]
    fn axis_specific_defaults() {
        assert_eq!(HorizontalDirection::default(), HorizontalDirection::Left);
        assert_eq!(VerticalDirection::default(), VerticalDirection::Down);
    }

    #[test]
    fn conversion_rejects_wrong_axis() {
        assert_eq!(
            VerticalDirection::try_from(Direction::Left),
            Err(AxisMismatch {
                direction: Direction::Left,
                expected: Axis::Vertical,
            })
        );
        assert_eq!(
            HorizontalDirection::try_from(Direction::Down),
            Err(AxisMismatch {
                direction: Direction::Down,
                expected: Axis::Horizontal,
            })
        );
        for dir in Direction::ALL {
            let back = match dir.axis() {
                Axis::Horizontal => Direction::from(HorizontalDirection::try_from(dir).unwrap()),
                Axis::Vertical => Direction::from(VerticalDirection::try_from(dir).unwrap()),
            };
            assert_eq!(back, dir, "conversion should round-trip through its own axis");
        }
    }

    #[test]
    fn display_honors_padding() {
        assert_eq!(alloc::format!("{:>6}|", Direction::Up), "    up|");
        assert_eq!(
            alloc::format!("{}", AxisMismatch {
                direction: Direction::Up,
                expected: Axis::Horizontal,
            }),
            "direction `up` does not move along the Horizontal axis"
        );
    }

    #[test]
    fn opposite_stays_on_axis() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().axis(), dir.axis());
            assert_ne!(dir.opposite().is_backward(), dir.is_backward());
        }
    }
}
