use starship_core::Color;

/// Axis-aligned rectangle in screen pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    /// Square of side `size` centered on (cx, cy).
    pub fn centered_square(cx: f64, cy: f64, size: f64) -> Self {
        Self {
            x: cx - size / 2.0,
            y: cy - size / 2.0,
            width: size,
            height: size,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// A filled rectangle to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub rect: ScreenRect,
    pub color: Color,
}

/// Anything that can receive filled rectangles in submission order.
pub trait DrawTarget {
    /// Viewport size in pixels (width, height).
    fn size(&self) -> (u32, u32);

    fn fill_rect(&mut self, command: &DrawCommand);
}

/// Records draw commands instead of rasterizing them.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Replay the recorded commands, in order, onto another target.
    pub fn replay(&self, target: &mut impl DrawTarget) {
        for command in &self.commands {
            target.fill_rect(command);
        }
    }
}

impl DrawTarget for DrawList {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, command: &DrawCommand) {
        self.commands.push(*command);
    }
}
