//! Centralized limits for type naming.
//!
//! Resolved type descriptors are finite trees, but nothing stops a caller from
//! building (or parsing) an absurdly deep one. These limits keep every
//! recursive walk well inside the default thread stack.
//!
//! # Categories
//!
//! - **Naming depth**: nesting allowed while rendering a name
//! - **Reference nesting**: nesting allowed while parsing a textual reference

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Maximum nesting depth when rendering a type name.
///
/// Every generic argument and every array element adds one level. When the
/// limit is reached the resolver fails with `NamingError::DepthExceeded`
/// rather than recursing further.
///
/// # Example
///
/// ```text
/// // depth 3: Page -> List -> Widget
/// Page<List<Widget>>
///
/// // a generated descriptor nesting Box<Box<Box<...>>> 10_000 times
/// // is rejected at level 64.
/// ```
pub const MAX_TYPE_NAME_DEPTH: u32 = 64;

/// Maximum nesting depth accepted by the type reference parser.
///
/// Measured like [`MAX_TYPE_NAME_DEPTH`]: one level per named type and one
/// per `[]` suffix along the deepest path, so `Box<Widget>[]` is 3 deep.
/// One level below the naming limit, because resolving a raw generic binds
/// its missing parameters to `java.lang.Object` one level further down.
/// Every reference that parses and resolves can therefore be named.
pub const MAX_TYPE_REFERENCE_NESTING: u32 = MAX_TYPE_NAME_DEPTH - 1;
