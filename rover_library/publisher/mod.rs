//! State Publisher
//!
//! Serializes the estimate for logging and telemetry writers. Two encodings
//! of the same five-field record are provided:
//!
//! - Text: `x,y,heading,v,w` as decimal values, no header, no trailing
//!   separator or newline
//! - Binary: five native-endian `f32` in the same order, 20 bytes, no length
//!   prefix or type tag
//!
//! Framing (newlines, packet headers, record counts) belongs to the writer.
//!
//! # Example
//!
//! ```rust
//! use rover_library::publisher::DataSource;
//! use rover_library::PoseState;
//!
//! let state = PoseState { x: 1.5, y: -2.0, heading: 0.25, v: 0.5, w: 0.0 };
//!
//! let mut line = String::new();
//! state.write_csv(&mut line);
//! assert_eq!(line, "1.5,-2,0.25,0.5,0");
//!
//! let mut buffer = [0u8; 64];
//! let next = state.write_data_bytes(&mut buffer, 0)?;
//! let next = state.write_data_bytes(&mut buffer, next)?;
//! assert_eq!(next, 40);
//! # Ok::<(), rover_core::RoverError>(())
//! ```

use crate::algorithms::state_estimator::StateEstimator;
use crate::messages::{PoseState, StateRecord};
use rover_core::{RoverError, RoverResult};
use std::fmt::Write;

/// Column names, in record order
pub const FIELD_NAMES: &str = "x,y,heading,v,w";

/// Column types, in record order
pub const FIELD_TYPES: &str = "float,float,float,float,float";

/// Anything that can be written as a fixed-order text row and a fixed-size
/// binary record
pub trait DataSource {
    /// Comma-separated column names
    fn field_names(&self) -> &'static str;

    /// Comma-separated column types
    fn field_types(&self) -> &'static str;

    /// Size of one binary record in bytes
    fn record_size(&self) -> usize;

    /// Append one text row to `out`
    fn write_csv(&self, out: &mut String);

    /// Write one binary record into `buffer` at `offset`
    ///
    /// Returns the offset just past the record. Fails without writing when
    /// the record does not fit.
    fn write_data_bytes(&self, buffer: &mut [u8], offset: usize) -> RoverResult<usize>;

    /// Text row as a new string
    fn to_csv_string(&self) -> String {
        let mut out = String::new();
        self.write_csv(&mut out);
        out
    }
}

impl DataSource for PoseState {
    fn field_names(&self) -> &'static str {
        FIELD_NAMES
    }

    fn field_types(&self) -> &'static str {
        FIELD_TYPES
    }

    fn record_size(&self) -> usize {
        StateRecord::SIZE
    }

    fn write_csv(&self, out: &mut String) {
        let _ = write!(
            out,
            "{},{},{},{},{}",
            self.x, self.y, self.heading, self.v, self.w
        );
    }

    fn write_data_bytes(&self, buffer: &mut [u8], offset: usize) -> RoverResult<usize> {
        let end = offset
            .checked_add(StateRecord::SIZE)
            .filter(|&end| end <= buffer.len())
            .ok_or(RoverError::BufferTooSmall {
                offset,
                needed: StateRecord::SIZE,
                available: buffer.len(),
            })?;

        let record = self.to_record();
        buffer[offset..end].copy_from_slice(bytemuck::bytes_of(&record));
        Ok(end)
    }
}

impl DataSource for StateEstimator {
    fn field_names(&self) -> &'static str {
        FIELD_NAMES
    }

    fn field_types(&self) -> &'static str {
        FIELD_TYPES
    }

    fn record_size(&self) -> usize {
        StateRecord::SIZE
    }

    fn write_csv(&self, out: &mut String) {
        self.state().write_csv(out)
    }

    fn write_data_bytes(&self, buffer: &mut [u8], offset: usize) -> RoverResult<usize> {
        self.state().write_data_bytes(buffer, offset)
    }
}
