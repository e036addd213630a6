//! Vector floor document: parsing and markup rewriting.
//!
//! ARCHITECTURE
//! ============
//! A floor document is an SVG file exported from a drawing tool. Any
//! `path`, `polygon`, `rect`, `circle` or `ellipse` that carries an `id` is a
//! room shape; any `text` with an `id` is a label that activates the same
//! identifier. [`FloorDocument::parse`] extracts those shapes (with an
//! approximate bounding box) and labels; [`FloorDocument::rewrite`] emits the
//! root `<svg>` element again with viewer attributes on the root and
//! caller-chosen classes and inline styles on every shape and label.
//!
//! TRADE-OFFS
//! ==========
//! Bounding boxes ignore `transform` attributes and treat path data as a
//! flat list of absolute coordinate pairs. They are good enough for
//! hit-testing rectangular room outlines, which is what exported plans use.

#[cfg(test)]
#[path = "svg_test.rs"]
mod svg_test;

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesStart, Event};

use crate::room::Rect;

/// `id` given to the rewritten root element.
pub const ROOT_ID: &str = "svgplan";
/// `id` given to the mobile viewer's root element.
pub const MOBILE_ROOT_ID: &str = "mobile-svgplan";
/// Root class for the desktop viewer.
pub const ROOT_CLASS: &str = "floor-plan-svg";
/// Root class for the mobile viewer.
pub const MOBILE_ROOT_CLASS: &str = "floor-plan-svg mobile-floor-plan";
/// Class added to every room shape.
pub const SHAPE_CLASS: &str = "room";
/// Class added to every room label.
pub const LABEL_CLASS: &str = "room-label";
/// Class toggled on a hovered shape.
pub const HOVER_CLASS: &str = "room-hover";

/// Errors raised while reading or rewriting a floor document.
#[derive(Debug, thiserror::Error)]
pub enum SvgError {
    #[error("SVG not found in file")]
    MissingRoot,

    #[error("malformed SVG: {0}")]
    Malformed(String),

    #[error("failed to write SVG: {0}")]
    Write(String),
}

impl From<quick_xml::Error> for SvgError {
    fn from(err: quick_xml::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for SvgError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// Element kinds that become room shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Path,
    Polygon,
    Rect,
    Circle,
    Ellipse,
}

impl ShapeKind {
    #[must_use]
    pub fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"path" => Some(Self::Path),
            b"polygon" => Some(Self::Polygon),
            b"rect" => Some(Self::Rect),
            b"circle" => Some(Self::Circle),
            b"ellipse" => Some(Self::Ellipse),
            _ => None,
        }
    }
}

/// A shape with an `id` inside the document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocShape {
    pub id: String,
    pub kind: ShapeKind,
    /// Approximate bounds in document units, when the geometry is readable.
    pub bbox: Option<Rect>,
}

/// A `text` element with an `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLabel {
    pub id: String,
    pub text: String,
}

/// Which kind of element a decoration is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    Shape(ShapeKind),
    Label,
}

/// Extra class and inline style for one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoration {
    /// Space-separated classes appended to any existing `class`.
    pub class: String,
    /// CSS declarations appended to any existing `style`.
    pub style: Option<String>,
}

/// Attributes written onto the root `<svg>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootAttributes<'a> {
    pub id: &'a str,
    pub class: &'a str,
}

impl Default for RootAttributes<'_> {
    fn default() -> Self {
        Self { id: ROOT_ID, class: ROOT_CLASS }
    }
}

impl RootAttributes<'static> {
    /// Root attributes for the mobile viewer.
    #[must_use]
    pub fn mobile() -> Self {
        Self { id: MOBILE_ROOT_ID, class: MOBILE_ROOT_CLASS }
    }
}

/// Parsed floor document.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorDocument {
    source: String,
    pub view_box: Option<Rect>,
    pub shapes: Vec<DocShape>,
    pub labels: Vec<DocLabel>,
}

impl FloorDocument {
    /// Parse `source`, collecting room shapes and labels.
    ///
    /// # Errors
    ///
    /// [`SvgError::MissingRoot`] when the document has no `<svg>` element,
    /// [`SvgError::Malformed`] for XML syntax errors.
    pub fn parse(source: &str) -> Result<Self, SvgError> {
        let mut reader = Reader::from_str(source);
        let mut view_box = None;
        let mut shapes = Vec::new();
        let mut labels: Vec<DocLabel> = Vec::new();
        let mut seen_root = false;
        let mut depth = 0usize;
        // (depth of the open <text>, index into labels)
        let mut open_label: Option<(usize, usize)> = None;

        loop {
            let event = reader.read_event()?;
            let decoder = reader.decoder();
            match event {
                Event::Start(ref e) | Event::Empty(ref e) => {
                    let is_start = matches!(event, Event::Start(_));
                    let attrs = read_attributes(e, decoder)?;
                    let tag = e.local_name();
                    if !seen_root {
                        if tag.as_ref() == b"svg" {
                            seen_root = true;
                            view_box = attr(&attrs, "viewBox").and_then(parse_view_box);
                        }
                    } else if let Some(id) = attr(&attrs, "id") {
                        if let Some(kind) = ShapeKind::from_tag(tag.as_ref()) {
                            shapes.push(DocShape { id: id.to_owned(), kind, bbox: shape_bbox(kind, &attrs) });
                        } else if tag.as_ref() == b"text" {
                            labels.push(DocLabel { id: id.to_owned(), text: String::new() });
                            if is_start {
                                open_label = Some((depth + 1, labels.len() - 1));
                            }
                        }
                    }
                    if is_start {
                        depth += 1;
                    }
                }
                Event::Text(ref t) => {
                    if let Some((_, idx)) = open_label {
                        if let Some(label) = labels.get_mut(idx) {
                            label.text.push_str(String::from_utf8_lossy(t).trim());
                        }
                    }
                }
                Event::End(_) => {
                    if open_label.is_some_and(|(d, _)| d == depth) {
                        open_label = None;
                    }
                    depth = depth.saturating_sub(1);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !seen_root {
            return Err(SvgError::MissingRoot);
        }
        Ok(Self { source: source.to_owned(), view_box, shapes, labels })
    }

    /// Ids of all room shapes in document order.
    pub fn shape_ids(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().map(|s| s.id.as_str())
    }

    #[must_use]
    pub fn shape(&self, id: &str) -> Option<&DocShape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Topmost shape whose bounding box contains `pt` (document units).
    #[must_use]
    pub fn shape_at(&self, pt: crate::camera::Point) -> Option<&DocShape> {
        self.shapes.iter().rev().find(|s| s.bbox.is_some_and(|b| b.contains(pt)))
    }

    /// Union of all known shape bounds, falling back to the `viewBox`.
    #[must_use]
    pub fn extent(&self) -> Option<Rect> {
        self.shapes.iter().filter_map(|s| s.bbox).reduce(|a, b| a.union(&b)).or(self.view_box)
    }

    /// Emit the root `<svg>` element with viewer attributes applied.
    ///
    /// The root gets `root.id`, `width="100%"`, `height="100%"` and
    /// `root.class`, and loses its default `xmlns`. Every shape and label with
    /// an `id` is passed to `decorate` and receives the returned class and
    /// style. Anything outside the root element is dropped.
    ///
    /// # Errors
    ///
    /// [`SvgError::Malformed`] for XML syntax errors, [`SvgError::Write`] if
    /// serialization fails.
    pub fn rewrite(
        &self,
        root: RootAttributes<'_>,
        decorate: &mut dyn FnMut(ElementRole, &str) -> Decoration,
    ) -> Result<String, SvgError> {
        let mut reader = Reader::from_str(&self.source);
        let mut writer = Writer::new(Vec::new());
        let mut depth = 0usize;
        let mut in_root = false;

        loop {
            let event = reader.read_event()?;
            let decoder = reader.decoder();
            match event {
                Event::Eof => break,
                Event::Start(ref e) | Event::Empty(ref e) => {
                    let is_start = matches!(event, Event::Start(_));
                    let attrs = read_attributes(e, decoder)?;
                    let tag = e.local_name();
                    let rebuilt = if !in_root {
                        if tag.as_ref() != b"svg" {
                            continue;
                        }
                        in_root = true;
                        Some(root_element(e, &attrs, root))
                    } else {
                        let role = ShapeKind::from_tag(tag.as_ref())
                            .map(ElementRole::Shape)
                            .or((tag.as_ref() == b"text").then_some(ElementRole::Label));
                        match (role, attr(&attrs, "id")) {
                            (Some(role), Some(id)) => {
                                let base = match role {
                                    ElementRole::Shape(_) => SHAPE_CLASS,
                                    ElementRole::Label => LABEL_CLASS,
                                };
                                let extra = decorate(role, id);
                                Some(decorated_element(e, &attrs, base, &extra))
                            }
                            _ => None,
                        }
                    };
                    let out = match (rebuilt, is_start) {
                        (Some(el), true) => Event::Start(el),
                        (Some(el), false) => Event::Empty(el),
                        (None, _) => event.into_owned(),
                    };
                    write(&mut writer, out)?;
                    if is_start {
                        depth += 1;
                    } else if depth == 0 {
                        break;
                    }
                }
                Event::End(_) => {
                    if in_root {
                        write(&mut writer, event)?;
                        depth = depth.saturating_sub(1);
                        if depth == 0 {
                            break;
                        }
                    }
                }
                other => {
                    if in_root {
                        write(&mut writer, other)?;
                    }
                }
            }
        }

        if !in_root {
            return Err(SvgError::MissingRoot);
        }
        String::from_utf8(writer.into_inner()).map_err(|e| SvgError::Write(e.to_string()))
    }
}

// ── Helpers ─────────────────────────────────────────────────────

type Attrs = Vec<(String, String)>;

fn read_attributes(e: &BytesStart<'_>, decoder: quick_xml::encoding::Decoder) -> Result<Attrs, SvgError> {
    let mut out = Vec::new();
    for a in e.attributes() {
        let a = a?;
        let key = String::from_utf8_lossy(a.key.as_ref()).into_owned();
        let value = a.decode_and_unescape_value(decoder)?.into_owned();
        out.push((key, value));
    }
    Ok(out)
}

fn attr<'a>(attrs: &'a Attrs, key: &str) -> Option<&'a str> {
    attrs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

fn num(attrs: &Attrs, key: &str) -> Option<f64> {
    match attr(attrs, key)?.trim().trim_end_matches("px").parse::<f64>() {
        Ok(n) => Some(n),
        Err(_) => None,
    }
}

fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

fn root_element(e: &BytesStart<'_>, attrs: &Attrs, root: RootAttributes<'_>) -> BytesStart<'static> {
    let mut el = BytesStart::new(element_name(e));
    for (k, v) in attrs {
        if matches!(k.as_str(), "xmlns" | "id" | "width" | "height" | "class") {
            continue;
        }
        el.push_attribute((k.as_str(), v.as_str()));
    }
    el.push_attribute(("id", root.id));
    el.push_attribute(("width", "100%"));
    el.push_attribute(("height", "100%"));
    el.push_attribute(("class", root.class));
    el
}

fn decorated_element(e: &BytesStart<'_>, attrs: &Attrs, base_class: &str, extra: &Decoration) -> BytesStart<'static> {
    let mut el = BytesStart::new(element_name(e));
    for (k, v) in attrs {
        if k != "class" && k != "style" {
            el.push_attribute((k.as_str(), v.as_str()));
        }
    }

    let mut classes: Vec<&str> = attr(attrs, "class").map(str::split_whitespace).into_iter().flatten().collect();
    for class in std::iter::once(base_class).chain(extra.class.split_whitespace()) {
        if !classes.contains(&class) {
            classes.push(class);
        }
    }
    el.push_attribute(("class", classes.join(" ").as_str()));

    let style = match (attr(attrs, "style").map(str::trim).filter(|s| !s.is_empty()), extra.style.as_deref()) {
        (Some(old), Some(new)) => Some(format!("{};{new}", old.trim_end_matches(';'))),
        (Some(old), None) => Some(old.to_owned()),
        (None, Some(new)) => Some(new.to_owned()),
        (None, None) => None,
    };
    if let Some(style) = style {
        el.push_attribute(("style", style.as_str()));
    }
    el
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), SvgError> {
    writer.write_event(event).map_err(|e| SvgError::Write(e.to_string()))
}

/// Every number in an SVG list attribute (`points`, `d`, `viewBox`).
#[must_use]
pub fn parse_numbers(raw: &str) -> Vec<f64> {
    let mut out = Vec::new();
    let mut current = String::new();
    let flush = |current: &mut String, out: &mut Vec<f64>| {
        if let Ok(n) = current.parse::<f64>() {
            out.push(n);
        }
        current.clear();
    };
    for ch in raw.chars() {
        let exponent_sign = (ch == '-' || ch == '+') && current.ends_with(['e', 'E']);
        if ch.is_ascii_digit() || ch == 'e' || ch == 'E' || exponent_sign {
            current.push(ch);
        } else if ch == '.' {
            if current.contains('.') || current.contains(['e', 'E']) {
                flush(&mut current, &mut out);
            }
            current.push(ch);
        } else if ch == '-' || ch == '+' {
            flush(&mut current, &mut out);
            current.push(ch);
        } else {
            flush(&mut current, &mut out);
        }
    }
    flush(&mut current, &mut out);
    out
}

fn parse_view_box(raw: &str) -> Option<Rect> {
    match parse_numbers(raw)[..] {
        [x, y, w, h] => Some(Rect::new(x, y, w, h)),
        _ => None,
    }
}

fn points_bbox(coords: &[f64]) -> Option<Rect> {
    let mut points = coords.chunks_exact(2).filter_map(|pair| match *pair {
        [x, y] => Some((x, y)),
        _ => None,
    });
    let (x0, y0) = points.next()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (x0, y0, x0, y0);
    for (x, y) in points {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
}

fn shape_bbox(kind: ShapeKind, attrs: &Attrs) -> Option<Rect> {
    match kind {
        ShapeKind::Rect => Some(Rect::new(
            num(attrs, "x").unwrap_or(0.0),
            num(attrs, "y").unwrap_or(0.0),
            num(attrs, "width")?,
            num(attrs, "height")?,
        )),
        ShapeKind::Circle => {
            let (cx, cy, r) = (num(attrs, "cx").unwrap_or(0.0), num(attrs, "cy").unwrap_or(0.0), num(attrs, "r")?);
            Some(Rect::new(cx - r, cy - r, 2.0 * r, 2.0 * r))
        }
        ShapeKind::Ellipse => {
            let (cx, cy) = (num(attrs, "cx").unwrap_or(0.0), num(attrs, "cy").unwrap_or(0.0));
            let (rx, ry) = (num(attrs, "rx")?, num(attrs, "ry")?);
            Some(Rect::new(cx - rx, cy - ry, 2.0 * rx, 2.0 * ry))
        }
        ShapeKind::Polygon => points_bbox(&parse_numbers(attr(attrs, "points")?)),
        ShapeKind::Path => points_bbox(&parse_numbers(attr(attrs, "d")?)),
    }
}
