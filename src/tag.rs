//! Capability tags for cursors.
//!
//! A [`Zip`] is constructed with a tag naming the strongest cursor operation
//! class its users intend to rely on. Rather than leaving stronger
//! operations callable-but-meaningless, each operation is gated on the trait
//! level that licenses it, so calling past the declared capability fails to
//! compile.
//!
//! The tags are uninhabited: they exist only as type parameters.
//!
//! [`Zip`]: super::Zip

mod sealed {
    pub trait Sealed {}
}

/// Implemented by all capability tags.
///
/// This trait is sealed: the three tags in this module are the only
/// capability levels.
pub trait Tag: sealed::Sealed {}

/// Tags whose cursors can also step backwards.
pub trait Reversible: Tag {}

/// Tags whose cursors can also move by arbitrary signed offsets, measure
/// distances, and be ordered.
pub trait Seekable: Reversible {}

// ----------------------------------------------------------------------------

/// Single-direction, single-step cursors.
pub enum Forward {}

impl sealed::Sealed for Forward {}
impl Tag for Forward {}

/// Cursors that step in either direction.
pub enum Bidirectional {}

impl sealed::Sealed for Bidirectional {}
impl Tag for Bidirectional {}
impl Reversible for Bidirectional {}

/// Cursors with constant-time positional arithmetic. The default, and the
/// strongest level.
pub enum RandomAccess {}

impl sealed::Sealed for RandomAccess {}
impl Tag for RandomAccess {}
impl Reversible for RandomAccess {}
impl Seekable for RandomAccess {}
