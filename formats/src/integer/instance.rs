use std::cmp::Ordering;

use super::super::error::{Field, FormatError};
use super::TwosComplementFormat;

/// An unsigned bit pattern interpreted in a [`TwosComplementFormat`].
///
/// As for [`crate::FloatInstance`], equality and ordering come from
/// the decoded value and are spelled [`TwosComplementInstance::equals`]
/// and [`TwosComplementInstance::compare`].  For integers the order
/// is total.
#[derive(Clone, Copy, Debug)]
pub struct TwosComplementInstance {
    format: TwosComplementFormat,
    uint: u64,
}

impl TwosComplementInstance {
    pub fn new(
        format: TwosComplementFormat,
        uint: u64,
    ) -> Result<TwosComplementInstance, FormatError> {
        let max = format.uint_limit();
        if uint > max {
            Err(FormatError::FieldOutOfRange {
                field: Field::Unsigned,
                value: uint,
                max,
            })
        } else {
            Ok(TwosComplementInstance { format, uint })
        }
    }

    pub const fn format(&self) -> &TwosComplementFormat {
        &self.format
    }

    pub const fn uint(&self) -> u64 {
        self.uint
    }

    /// The numerical value of the bit pattern.
    pub const fn value(&self) -> i64 {
        self.format.reinterpret(self.uint)
    }

    pub fn compare(&self, other: &TwosComplementInstance) -> Ordering {
        self.value().cmp(&other.value())
    }

    pub fn equals(&self, other: &TwosComplementInstance) -> bool {
        self.value() == other.value()
    }
}
