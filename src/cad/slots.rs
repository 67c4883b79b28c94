//! Parameter-slot layout and vocabulary constants.
//!
//! The upstream encoder emits one 16-slot vector per time-step, laid
//! out as `[x, y, alpha, f, r, theta, phi, psi, px, py, pz, s, e1, e2, b, u]`.

/// Width of every parameter vector.
pub const PARAM_WIDTH: usize = 16;

/// Sentinel meaning "no value" in a parameter slot (and the wire code
/// for the pad command).
pub const PAD_VAL: i32 = -1;

/// Largest legal quantized parameter value.
pub const MAX_PARAM: i32 = 255;

/// Boolean-operation code for "create new body".
pub const NEW_BODY_OP: i32 = 0;

/// Default cap on effective sequence length.
pub const DEFAULT_MAX_TOTAL_LEN: usize = 60;

/// Named indices into a parameter vector.
pub mod slot {
    /// Primitive endpoint x (Line) / first reference x.
    pub const X: usize = 0;
    /// Primitive endpoint y (Line) / first reference y.
    pub const Y: usize = 1;
    /// Arc sweep angle / secondary x reference.
    pub const ALPHA: usize = 2;
    /// Secondary y reference / arc start angle.
    pub const F: usize = 3;
    /// Circle radius / arc end angle.
    pub const RADIUS: usize = 4;
    /// Sketch-plane size.
    pub const SKETCH_SIZE: usize = 11;
    /// Extrude extent 1.
    pub const EXTENT_ONE: usize = 12;
    /// Extrude extent 2.
    pub const EXTENT_TWO: usize = 13;
    /// Extrude extent-type code: 0 one-sided, 1 symmetric, 2 two-sided.
    pub const EXTENT_TYPE: usize = 14;
    /// Extrude boolean-operation code: 0 new body, others union/cut/intersect.
    pub const BOOLEAN_OP: usize = 15;
}
