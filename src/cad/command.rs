//! Command token vocabulary.

use serde::{Deserialize, Serialize};

use crate::cad::PAD_VAL;
use crate::error::{Result, TrazarError};

/// A command token occupying one sequence time-step.
///
/// The closed vocabulary matches the upstream encoder's wire codes
/// (`Line=0` through `Extrude=5`). `Pad` is a first-class variant here
/// rather than a reused numeric sentinel: on the wire it shares the −1
/// code with the "no value" parameter sentinel, but in typed form the
/// two are distinct concepts.
///
/// # Examples
///
/// ```
/// use trazar::cad::Command;
///
/// assert_eq!(Command::from_code(4).unwrap(), Command::StartSketch);
/// assert_eq!(Command::StartSketch.code(), 4);
/// assert!(Command::from_code(9).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Draw a line to an endpoint.
    Line,
    /// Draw a circular arc.
    Arc,
    /// Draw a full circle.
    Circle,
    /// Terminate the program; everything after must be padding.
    EndOfSequence,
    /// Open a new sketch loop.
    StartSketch,
    /// Lift the completed sketch into a solid.
    Extrude,
    /// Trailing padding past the end marker.
    Pad,
}

impl Command {
    /// Decodes a wire code into a command token.
    ///
    /// # Errors
    ///
    /// Returns an error for any code outside {−1, 0..=5}.
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(Command::Line),
            1 => Ok(Command::Arc),
            2 => Ok(Command::Circle),
            3 => Ok(Command::EndOfSequence),
            4 => Ok(Command::StartSketch),
            5 => Ok(Command::Extrude),
            PAD_VAL => Ok(Command::Pad),
            _ => Err(TrazarError::UnknownCommandCode { code }),
        }
    }

    /// Returns the wire code for this command.
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Command::Line => 0,
            Command::Arc => 1,
            Command::Circle => 2,
            Command::EndOfSequence => 3,
            Command::StartSketch => 4,
            Command::Extrude => 5,
            Command::Pad => PAD_VAL,
        }
    }

    /// True for the 2D sketch primitives (Line, Arc, Circle).
    #[must_use]
    pub fn is_primitive(self) -> bool {
        matches!(self, Command::Line | Command::Arc | Command::Circle)
    }

    /// True for tokens that close a sketch window (Extrude,
    /// EndOfSequence, Pad).
    #[must_use]
    pub fn is_boundary(self) -> bool {
        matches!(
            self,
            Command::Extrude | Command::EndOfSequence | Command::Pad
        )
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
