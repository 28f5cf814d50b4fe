//! Shared numeric and colour defaults for the canvas crate.

// ── Surface ─────────────────────────────────────────────────────

/// Fraction of the viewport width given to the drawing surface.
pub const SURFACE_WIDTH_RATIO: f64 = 0.65;

/// Fraction of the viewport height given to the drawing surface.
pub const SURFACE_HEIGHT_RATIO: f64 = 0.7;

/// Surface background colour.
pub const BACKGROUND_COLOR: &str = "#ffffff";

// ── Tool defaults ───────────────────────────────────────────────

/// Initial draw colour for the brush and new text.
pub const DEFAULT_COLOR: &str = "#000000";

/// Initial free-draw brush width.
pub const DEFAULT_BRUSH_WIDTH: u32 = 5;

/// Smallest accepted brush width.
pub const BRUSH_WIDTH_MIN: u32 = 1;

/// Largest accepted brush width.
pub const BRUSH_WIDTH_MAX: u32 = 50;

// ── New shapes ──────────────────────────────────────────────────

/// Side length of a new rectangle.
pub const RECT_SIZE: f64 = 100.0;

/// Horizontal/vertical span reserved when placing a new rectangle.
pub const RECT_PLACEMENT_MARGIN: f64 = 120.0;

/// Radius of a new circle.
pub const CIRCLE_RADIUS: f64 = 50.0;

/// Horizontal/vertical span reserved when placing a new circle.
pub const CIRCLE_PLACEMENT_MARGIN: f64 = 100.0;

/// Fill for new rectangles and circles.
pub const SHAPE_FILL: &str = "white";

/// Outline for new rectangles and circles.
pub const SHAPE_STROKE: &str = "black";

/// Outline width for new rectangles and circles.
pub const SHAPE_STROKE_WIDTH: f64 = 1.0;

/// Where new text lands.
pub const TEXT_LEFT: f64 = 200.0;
pub const TEXT_TOP: f64 = 200.0;

/// Font size of new text.
pub const TEXT_FONT_SIZE: f64 = 22.0;

/// Content used when the text buffer is empty.
pub const TEXT_PLACEHOLDER: &str = "Edit me";

/// Line height as a multiple of font size.
pub const TEXT_LINE_HEIGHT: f64 = 1.16;

/// Average glyph advance as a multiple of font size, used for text bounds.
pub const TEXT_GLYPH_WIDTH: f64 = 0.6;

// ── Hit-testing ─────────────────────────────────────────────────

/// Extra slop around thin geometry (strokes, outlines) in surface pixels.
pub const HIT_SLOP_PX: f64 = 4.0;

/// Padding between an object and its selection box.
pub const SELECTION_PADDING_PX: f64 = 4.0;
