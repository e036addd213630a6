//! Architectural background drawn beneath the rooms: building shell,
//! corridor bands, walls with door gaps, doors, plan title and scale bar.
//!
//! Geometry is laid out for the standard 1400×800 plan. The shell rectangle,
//! title block and scale bar track the actual drawing-surface size so they
//! stay anchored to the edges when the surface grows.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use crate::camera::Point;
use crate::consts::SHELL_INSET;
use crate::room::Rect;

// ── Palette ─────────────────────────────────────────────────────

pub const SHELL_FILL: &str = "#fefefe";
pub const SHELL_STROKE: &str = "#d1d5db";
pub const CORRIDOR_FILL: &str = "#f9fafb";
pub const CORRIDOR_STROKE: &str = "#f3f4f6";
pub const PERIMETER_COLOR: &str = "#9ca3af";
pub const SECTION_COLOR: &str = "#d1d5db";
pub const DIVIDER_COLOR: &str = "#e5e7eb";
pub const MAIN_DOOR_FILL: &str = "#059669";
pub const MAIN_DOOR_STROKE: &str = "#047857";
pub const DOOR_FILL: &str = "#ffffff";
pub const DOOR_STROKE: &str = "#9ca3af";
pub const SWING_STROKE: &str = "#d1d5db";
pub const TITLE_COLOR: &str = "#2d3748";
pub const SUBTITLE_COLOR: &str = "#4a5568";

/// Dash pattern for door swing arcs.
pub const SWING_DASH: [f64; 2] = [2.0, 2.0];

/// Radius of the door handle dot.
pub const HANDLE_RADIUS: f64 = 1.0;

pub const PLAN_TITLE: &str = "ARCHITECTURAL FLOOR PLAN - LEVEL 1";
pub const PLAN_SUBTITLE: &str = "Interactive Canvas Implementation with Professional Doors & Corridors";
pub const MAIN_ENTRANCE_LABEL: &str = "MAIN ENTRANCE";
pub const SCALE_LABEL: &str = "50 ft";

// ── Geometry tables ─────────────────────────────────────────────

const CORRIDORS: [(f64, f64, f64, f64); 6] = [
    (50.0, 195.0, 1300.0, 10.0),
    (50.0, 395.0, 1300.0, 10.0),
    (50.0, 595.0, 1300.0, 10.0),
    (295.0, 50.0, 10.0, 700.0),
    (595.0, 50.0, 10.0, 700.0),
    (895.0, 50.0, 10.0, 700.0),
];

const PERIMETER: [[f64; 4]; 4] = [
    [50.0, 50.0, 1350.0, 50.0],
    [50.0, 50.0, 50.0, 750.0],
    [1350.0, 50.0, 1350.0, 750.0],
    [50.0, 750.0, 1350.0, 750.0],
];

const SECTION_WALLS: [[f64; 4]; 27] = [
    [300.0, 50.0, 300.0, 180.0],
    [300.0, 220.0, 300.0, 360.0],
    [300.0, 400.0, 300.0, 540.0],
    [300.0, 580.0, 300.0, 750.0],
    [600.0, 50.0, 600.0, 160.0],
    [600.0, 200.0, 600.0, 340.0],
    [600.0, 380.0, 600.0, 520.0],
    [600.0, 560.0, 600.0, 750.0],
    [900.0, 50.0, 900.0, 180.0],
    [900.0, 220.0, 900.0, 360.0],
    [900.0, 400.0, 900.0, 540.0],
    [900.0, 580.0, 900.0, 750.0],
    [50.0, 200.0, 180.0, 200.0],
    [220.0, 200.0, 480.0, 200.0],
    [520.0, 200.0, 780.0, 200.0],
    [820.0, 200.0, 1080.0, 200.0],
    [1120.0, 200.0, 1350.0, 200.0],
    [50.0, 400.0, 180.0, 400.0],
    [220.0, 400.0, 480.0, 400.0],
    [520.0, 400.0, 780.0, 400.0],
    [820.0, 400.0, 1080.0, 400.0],
    [1120.0, 400.0, 1350.0, 400.0],
    [50.0, 600.0, 180.0, 600.0],
    [220.0, 600.0, 480.0, 600.0],
    [520.0, 600.0, 780.0, 600.0],
    [820.0, 600.0, 1080.0, 600.0],
    [1120.0, 600.0, 1350.0, 600.0],
];

const DIVIDERS: [[f64; 4]; 16] = [
    [150.0, 50.0, 150.0, 160.0],
    [150.0, 200.0, 150.0, 240.0],
    [450.0, 50.0, 450.0, 160.0],
    [450.0, 200.0, 450.0, 240.0],
    [750.0, 50.0, 750.0, 160.0],
    [750.0, 200.0, 750.0, 240.0],
    [1050.0, 50.0, 1050.0, 160.0],
    [1050.0, 200.0, 1050.0, 240.0],
    [50.0, 300.0, 280.0, 300.0],
    [320.0, 300.0, 580.0, 300.0],
    [620.0, 300.0, 880.0, 300.0],
    [920.0, 300.0, 1350.0, 300.0],
    [50.0, 500.0, 280.0, 500.0],
    [320.0, 500.0, 580.0, 500.0],
    [620.0, 500.0, 880.0, 500.0],
    [920.0, 500.0, 1350.0, 500.0],
];

const DOORS: [(f64, f64, f64, f64, DoorKind, Swing); 26] = {
    use DoorKind::{Main, Office, Single};
    use Swing::{Down, In, Left, Right, Up};
    [
        (675.0, 45.0, 50.0, 10.0, Main, In),
        (295.0, 180.0, 10.0, 40.0, Single, Right),
        (295.0, 360.0, 10.0, 40.0, Single, Left),
        (295.0, 540.0, 10.0, 40.0, Single, Right),
        (595.0, 160.0, 10.0, 40.0, Single, Left),
        (595.0, 340.0, 10.0, 40.0, Single, Right),
        (595.0, 520.0, 10.0, 40.0, Single, Left),
        (895.0, 180.0, 10.0, 40.0, Single, Right),
        (895.0, 360.0, 10.0, 40.0, Single, Left),
        (895.0, 540.0, 10.0, 40.0, Single, Right),
        (180.0, 195.0, 40.0, 10.0, Single, Up),
        (480.0, 195.0, 40.0, 10.0, Single, Down),
        (780.0, 195.0, 40.0, 10.0, Single, Up),
        (1080.0, 195.0, 40.0, 10.0, Single, Down),
        (180.0, 395.0, 40.0, 10.0, Single, Down),
        (480.0, 395.0, 40.0, 10.0, Single, Up),
        (780.0, 395.0, 40.0, 10.0, Single, Down),
        (1080.0, 395.0, 40.0, 10.0, Single, Up),
        (180.0, 595.0, 40.0, 10.0, Single, Up),
        (480.0, 595.0, 40.0, 10.0, Single, Down),
        (780.0, 595.0, 40.0, 10.0, Single, Up),
        (1080.0, 595.0, 40.0, 10.0, Single, Down),
        (145.0, 160.0, 10.0, 40.0, Office, Right),
        (445.0, 160.0, 10.0, 40.0, Office, Left),
        (745.0, 160.0, 10.0, 40.0, Office, Right),
        (1045.0, 160.0, 10.0, 40.0, Office, Left),
    ]
};

// ── Types ───────────────────────────────────────────────────────

/// Filled band marking a corridor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corridor {
    pub rect: Rect,
}

/// Which layer of the plan a wall belongs to; controls color and weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallKind {
    /// Outer building perimeter.
    Perimeter,
    /// Section separator with door gaps.
    Section,
    /// Internal room divider.
    Divider,
}

impl WallKind {
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Perimeter => PERIMETER_COLOR,
            Self::Section => SECTION_COLOR,
            Self::Divider => DIVIDER_COLOR,
        }
    }

    #[must_use]
    pub fn thickness(self) -> f64 {
        match self {
            Self::Perimeter => 2.0,
            Self::Section | Self::Divider => 1.0,
        }
    }
}

/// Straight wall segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    pub from: Point,
    pub to: Point,
    pub kind: WallKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorKind {
    /// Building entrance, drawn filled and labeled.
    Main,
    /// Door in a corridor or section wall.
    Single,
    /// Room entry door.
    Office,
}

/// Direction the door leaf opens toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swing {
    Right,
    Left,
    Up,
    Down,
    /// Main entrance; no swing arc.
    In,
}

/// Quarter-circle arc describing a door swing.
///
/// Angles are in degrees, clockwise from the positive x axis, matching
/// canvas conventions where y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwingArc {
    pub center: Point,
    pub radius: f64,
    pub start_deg: f64,
    pub sweep_deg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Door {
    pub rect: Rect,
    pub kind: DoorKind,
    pub swing: Swing,
}

impl Door {
    /// Swing arc for interior doors; `None` for the main entrance.
    #[must_use]
    pub fn swing_arc(&self) -> Option<SwingArc> {
        let Rect { x, y, width: w, height: h } = self.rect;
        let (center, radius, start_deg) = match self.swing {
            Swing::Right => (Point::new(x + w, y + h / 2.0), h / 2.0, 0.0),
            Swing::Left => (Point::new(x, y + h / 2.0), h / 2.0, 90.0),
            Swing::Up => (Point::new(x + w / 2.0, y), w / 2.0, 180.0),
            Swing::Down => (Point::new(x + w / 2.0, y + h), w / 2.0, 270.0),
            Swing::In => return None,
        };
        Some(SwingArc { center, radius, start_deg, sweep_deg: 90.0 })
    }

    /// Handle dot position: 80% along the long axis, centered on the short one.
    #[must_use]
    pub fn handle(&self) -> Option<Point> {
        if self.kind == DoorKind::Main {
            return None;
        }
        let Rect { x, y, width: w, height: h } = self.rect;
        let hx = if w > h { x + w * 0.8 } else { x + w / 2.0 };
        let hy = if h > w { y + h * 0.8 } else { y + h / 2.0 };
        Some(Point::new(hx, hy))
    }

    /// Label drawn above the main entrance.
    #[must_use]
    pub fn label(&self) -> Option<&'static str> {
        (self.kind == DoorKind::Main).then_some(MAIN_ENTRANCE_LABEL)
    }
}

/// Text placed in the plan's title block.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellText {
    pub text: &'static str,
    pub at: Point,
    pub font_px: f64,
    pub bold: bool,
    pub color: &'static str,
}

/// Scale indicator line with its caption.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleBar {
    pub from: Point,
    pub to: Point,
    pub caption: ShellText,
}

/// Complete background for one drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorShell {
    pub building: Rect,
    pub corridors: Vec<Corridor>,
    pub walls: Vec<Wall>,
    pub doors: Vec<Door>,
    pub title: ShellText,
    pub subtitle: ShellText,
    pub scale: ScaleBar,
}

fn walls_of(kind: WallKind, table: &[[f64; 4]]) -> impl Iterator<Item = Wall> + '_ {
    table.iter().map(move |&[x1, y1, x2, y2]| Wall {
        from: Point::new(x1, y1),
        to: Point::new(x2, y2),
        kind,
    })
}

impl FloorShell {
    /// Standard single-level plan for a drawing surface of the given size.
    #[must_use]
    pub fn standard(width: f64, height: f64) -> Self {
        let inset = SHELL_INSET;
        let building = Rect::new(inset, inset, width - 2.0 * inset, height - 2.0 * inset);

        let corridors = CORRIDORS
            .iter()
            .map(|&(x, y, w, h)| Corridor { rect: Rect::new(x, y, w, h) })
            .collect();

        let walls = walls_of(WallKind::Perimeter, &PERIMETER)
            .chain(walls_of(WallKind::Section, &SECTION_WALLS))
            .chain(walls_of(WallKind::Divider, &DIVIDERS))
            .collect();

        let doors = DOORS
            .iter()
            .map(|&(x, y, w, h, kind, swing)| Door { rect: Rect::new(x, y, w, h), kind, swing })
            .collect();

        let title = ShellText {
            text: PLAN_TITLE,
            at: Point::new(60.0, height - 80.0),
            font_px: 14.0,
            bold: true,
            color: TITLE_COLOR,
        };
        let subtitle = ShellText {
            text: PLAN_SUBTITLE,
            at: Point::new(60.0, height - 60.0),
            font_px: 10.0,
            bold: false,
            color: SUBTITLE_COLOR,
        };
        let scale = ScaleBar {
            from: Point::new(width - 150.0, height - 80.0),
            to: Point::new(width - 100.0, height - 80.0),
            caption: ShellText {
                text: SCALE_LABEL,
                at: Point::new(width - 125.0, height - 95.0),
                font_px: 8.0,
                bold: false,
                color: TITLE_COLOR,
            },
        };

        Self { building, corridors, walls, doors, title, subtitle, scale }
    }
}
