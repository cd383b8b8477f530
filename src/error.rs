//! Error types for group socket parsing and datapoint conversion.
//!
//! Every fallible operation in the crate returns [`KnxError`]. The public enum
//! only names the error category; the wrapped structs keep their kind private
//! and expose `is_*` helpers instead, so new kinds can be added without
//! breaking callers.
//!
//! Errors are `Clone + PartialEq` because decode failures travel inside
//! [`Decoded`](crate::dpt::Decoded) results and parser events.

use core::fmt;

/// Result type alias for crate operations.
pub type Result<T> = core::result::Result<T, KnxError>;

// =============================================================================
// Error Kind Enums (Internal)
// =============================================================================

/// Frame error variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum FrameErrorKind {
    MalformedFrame,
    UnsupportedService,
    PayloadTooLarge,
}

/// Addressing error variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum AddressingErrorKind {
    InvalidIndividualAddress,
    InvalidGroupAddress,
    OutOfRange,
}

/// DPT error variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum DptErrorKind {
    LengthMismatch { expected: usize, actual: usize },
    UnknownType,
    UnsupportedEncoding,
    ValueOutOfRange,
    ValueTypeMismatch,
}

/// Lookup table persistence variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum StoreErrorKind {
    Parse,
    Serialize,
}

// =============================================================================
// Main Error Type
// =============================================================================

/// Group socket and datapoint error types.
///
/// This is the main error type returned by all operations of the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KnxError {
    /// Frame-related errors (truncated telegram, unknown service)
    Frame(FrameError),
    /// Addressing errors (invalid address format, etc.)
    Addressing(AddressingError),
    /// Datapoint Type errors (encoding, decoding, etc.)
    Dpt(DptError),
    /// Lookup table load/save errors
    Store(StoreError),
}

// =============================================================================
// Structured Error Types
// =============================================================================

/// Frame error
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameError {
    kind: FrameErrorKind,
}

impl FrameError {
    pub(crate) const fn new(kind: FrameErrorKind) -> Self {
        Self { kind }
    }

    /// Check if the frame was too short for its declared layout
    pub fn is_malformed(&self) -> bool {
        matches!(self.kind, FrameErrorKind::MalformedFrame)
    }

    /// Check if the telegram carries a service other than read/write/response
    pub fn is_unsupported_service(&self) -> bool {
        matches!(self.kind, FrameErrorKind::UnsupportedService)
    }
}

/// Addressing error
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressingError {
    kind: AddressingErrorKind,
}

impl AddressingError {
    pub(crate) const fn new(kind: AddressingErrorKind) -> Self {
        Self { kind }
    }

    /// Check if address is out of range
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind, AddressingErrorKind::OutOfRange)
    }

    /// Check if a group address string could not be parsed
    pub fn is_invalid_group_address(&self) -> bool {
        matches!(self.kind, AddressingErrorKind::InvalidGroupAddress)
    }

    /// Check if an individual address string could not be parsed
    pub fn is_invalid_individual_address(&self) -> bool {
        matches!(self.kind, AddressingErrorKind::InvalidIndividualAddress)
    }
}

/// DPT error
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DptError {
    kind: DptErrorKind,
}

impl DptError {
    pub(crate) const fn new(kind: DptErrorKind) -> Self {
        Self { kind }
    }

    /// Check if the payload length did not match the datapoint type
    pub fn is_length_mismatch(&self) -> bool {
        matches!(self.kind, DptErrorKind::LengthMismatch { .. })
    }

    /// Check if the datapoint type identifier was not recognized
    pub fn is_unknown_type(&self) -> bool {
        matches!(self.kind, DptErrorKind::UnknownType)
    }

    /// Check if the datapoint type has no encoder
    pub fn is_unsupported_encoding(&self) -> bool {
        matches!(self.kind, DptErrorKind::UnsupportedEncoding)
    }

    /// Check if value is out of range
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind, DptErrorKind::ValueOutOfRange)
    }

    /// Check if the value variant does not belong to the datapoint type
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind, DptErrorKind::ValueTypeMismatch)
    }

    /// Expected and actual payload length of a length mismatch.
    pub fn lengths(&self) -> Option<(usize, usize)> {
        match self.kind {
            DptErrorKind::LengthMismatch { expected, actual } => Some((expected, actual)),
            _ => None,
        }
    }
}

/// Lookup table persistence error
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StoreError {
    kind: StoreErrorKind,
}

impl StoreError {
    pub(crate) const fn new(kind: StoreErrorKind) -> Self {
        Self { kind }
    }

    /// Check if the stored table could not be parsed
    pub fn is_parse(&self) -> bool {
        matches!(self.kind, StoreErrorKind::Parse)
    }
}

// =============================================================================
// Convenience Constructors for KnxError
// =============================================================================

impl KnxError {
    // Frame errors
    #[inline]
    pub(crate) const fn malformed_frame() -> Self {
        Self::Frame(FrameError::new(FrameErrorKind::MalformedFrame))
    }

    #[inline]
    pub(crate) const fn unsupported_service() -> Self {
        Self::Frame(FrameError::new(FrameErrorKind::UnsupportedService))
    }

    #[inline]
    pub(crate) const fn payload_too_large() -> Self {
        Self::Frame(FrameError::new(FrameErrorKind::PayloadTooLarge))
    }

    // Addressing errors
    pub(crate) const fn invalid_group_address() -> Self {
        Self::Addressing(AddressingError::new(AddressingErrorKind::InvalidGroupAddress))
    }

    pub(crate) const fn invalid_individual_address() -> Self {
        Self::Addressing(AddressingError::new(AddressingErrorKind::InvalidIndividualAddress))
    }

    pub(crate) const fn address_out_of_range() -> Self {
        Self::Addressing(AddressingError::new(AddressingErrorKind::OutOfRange))
    }

    // DPT errors
    pub(crate) const fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::Dpt(DptError::new(DptErrorKind::LengthMismatch { expected, actual }))
    }

    pub(crate) const fn unknown_dpt() -> Self {
        Self::Dpt(DptError::new(DptErrorKind::UnknownType))
    }

    pub(crate) const fn unsupported_encoding() -> Self {
        Self::Dpt(DptError::new(DptErrorKind::UnsupportedEncoding))
    }

    pub(crate) const fn dpt_value_out_of_range() -> Self {
        Self::Dpt(DptError::new(DptErrorKind::ValueOutOfRange))
    }

    pub(crate) const fn dpt_type_mismatch() -> Self {
        Self::Dpt(DptError::new(DptErrorKind::ValueTypeMismatch))
    }

    // Store errors
    pub(crate) const fn store_parse() -> Self {
        Self::Store(StoreError::new(StoreErrorKind::Parse))
    }

    pub(crate) const fn store_serialize() -> Self {
        Self::Store(StoreError::new(StoreErrorKind::Serialize))
    }

    /// Get the DPT error, if this is one.
    pub fn as_dpt(&self) -> Option<&DptError> {
        match self {
            KnxError::Dpt(e) => Some(e),
            _ => None,
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl fmt::Display for KnxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnxError::Frame(e) => write!(f, "Frame error: {:?}", e.kind),
            KnxError::Addressing(e) => write!(f, "Addressing error: {:?}", e.kind),
            KnxError::Dpt(e) => match e.kind {
                DptErrorKind::LengthMismatch { expected, actual } => write!(
                    f,
                    "DPT error: mismatching DPT declaration and data length (expected {expected} bytes, got {actual})"
                ),
                kind => write!(f, "DPT error: {kind:?}"),
            },
            KnxError::Store(e) => write!(f, "Store error: {:?}", e.kind),
        }
    }
}

impl std::error::Error for KnxError {}
