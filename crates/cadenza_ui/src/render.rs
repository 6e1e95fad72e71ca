//! Renderer contract and headless backend.
//!
//! The rasterizer is an external collaborator: the tree only needs a way to
//! create a backing paint surface per component, redraw it when the dirty
//! flag is set, and blit it at the cached absolute position. [`Renderer`]
//! captures exactly that seam; [`HeadlessRenderer`] records the operations
//! for tests and headless runs.

/// RGBA color, components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component.
    pub a: f32,
}

impl Color {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from RGBA values.
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from RGB values with full alpha.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Returns the same color with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Drawing backend the component tree paints through.
pub trait Renderer {
    /// Backing paint surface type.
    type Surface;

    /// Creates a surface of the given pixel size.
    fn create_surface(&mut self, width: f32, height: f32) -> Self::Surface;

    /// Fills the whole surface with a color.
    fn fill_rect(&mut self, surface: &mut Self::Surface, color: Color);

    /// Overlays text onto the surface at its origin.
    fn draw_text(&mut self, surface: &mut Self::Surface, text: &str, size: f32, color: Color);

    /// Blits `source` onto `target` at `position`.
    fn blit(&mut self, target: &mut Self::Surface, source: &Self::Surface, position: (f32, f32));
}

/// Surface produced by [`HeadlessRenderer`]: remembers its size and the last
/// fill/text applied to it.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessSurface {
    /// Surface width at creation time.
    pub width: f32,
    /// Surface height at creation time.
    pub height: f32,
    /// Last fill color, if any.
    pub fill: Option<Color>,
    /// Last text overlay, if any.
    pub text: Option<String>,
}

/// Op-recording backend for tests and headless runs.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    /// Total surface fills performed.
    pub fill_count: usize,
    /// Total text overlays performed.
    pub text_count: usize,
    /// Blit positions recorded since the last [`Self::begin_frame`].
    pub blits: Vec<(f32, f32)>,
}

impl HeadlessRenderer {
    /// Creates an empty recording backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the per-frame blit log.
    pub fn begin_frame(&mut self) {
        self.blits.clear();
    }
}

impl Renderer for HeadlessRenderer {
    type Surface = HeadlessSurface;

    fn create_surface(&mut self, width: f32, height: f32) -> Self::Surface {
        HeadlessSurface { width, height, fill: None, text: None }
    }

    fn fill_rect(&mut self, surface: &mut Self::Surface, color: Color) {
        surface.fill = Some(color);
        self.fill_count += 1;
    }

    fn draw_text(&mut self, surface: &mut Self::Surface, text: &str, _size: f32, _color: Color) {
        surface.text = Some(text.to_owned());
        self.text_count += 1;
    }

    fn blit(&mut self, _target: &mut Self::Surface, _source: &Self::Surface, position: (f32, f32)) {
        self.blits.push(position);
    }
}
