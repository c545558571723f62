//! Centralized limits for type-graph serialization.
//!
//! Boundedness of the serializer is structural: the ancestor path length is
//! capped by the configured maximum depth and wide shapes are cut off by the
//! maximum property count. There is no time-based limit.

/// Default maximum length of the ancestor path before child expansion stops.
///
/// The type being expanded counts toward the path (see
/// [`TraversalContext::should_stop`](crate::TraversalContext::should_stop)):
/// with `max_depth = n`, the root and `n - 1` levels below it list their
/// children, so `0` expands nothing and the output nests at most `n` deep.
///
/// Five levels covers the common "props -> nested config -> item -> leaf"
/// layouts of component configuration types without dumping entire library
/// type graphs.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Default maximum number of declared properties a shape may have and still
/// be expanded.
///
/// Shapes wider than this are emitted with an empty property list. Types
/// such as `HTMLElement` have hundreds of members and would otherwise dominate
/// the output.
pub const DEFAULT_MAX_PROPS: usize = 30;

/// Hard ceiling for any configured maximum depth.
///
/// The serializer recurses on the native stack, one frame group per level of
/// the ancestor path. Requests above this ceiling are clamped.
pub const MAX_DEPTH_CEILING: usize = 64;

/// The textual rendering a provider uses for the empty tuple.
pub const EMPTY_ARRAY_TOKEN: &str = "[]";

/// Global array type name used when a provider does not override it.
pub const ARRAY_TYPE_NAME: &str = "Array";
