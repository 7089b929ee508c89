// Dweve Benchboard - Benchmark Results Dashboard
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Raster drawing surface for `<canvas>` mount points.
//!
//! A [`Canvas`] records 2D drawing operations in CSS pixel coordinates.
//! Its backing raster is sized from the host [`Viewport`] times the device
//! pixel ratio, and the recorded operations are scaled by that ratio when
//! rasterized, which keeps lines crisp on high-density displays. For static
//! export the operations are converted to an equivalent inline SVG.

use crate::dom::Element;

/// Host viewport the run chart is laid out against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// CSS width of the canvas element, in pixels.
    pub width: f64,
    /// CSS height of the canvas element, in pixels.
    pub height: f64,
    /// Physical pixels per CSS pixel.
    pub device_pixel_ratio: f64,
}

impl Viewport {
    /// Create a viewport. A missing or invalid pixel ratio counts as `1`,
    /// and negative or non-finite dimensions count as `0`.
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        let dimension = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        let ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self {
            width: dimension(width),
            height: dimension(height),
            device_pixel_ratio: ratio,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(900.0, 360.0, 1.0)
    }
}

/// Horizontal text anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    fn svg_anchor(self) -> &'static str {
        match self {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
            TextAlign::Right => "end",
        }
    }
}

/// One recorded drawing operation, in CSS pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: String,
    },
    StrokePath {
        points: Vec<(f64, f64)>,
        color: String,
        width: f64,
    },
    FillCircle {
        cx: f64,
        cy: f64,
        radius: f64,
        color: String,
    },
    FillText {
        text: String,
        x: f64,
        y: f64,
        color: String,
        font: String,
        align: TextAlign,
        /// Rotation in degrees around `(x, y)`.
        rotation: f64,
    },
}

/// A 2D drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    css_width: f64,
    css_height: f64,
    scale: f64,
    ops: Vec<DrawOp>,
}

impl Default for Canvas {
    fn default() -> Self {
        // HTML canvas defaults.
        Self {
            width: 300,
            height: 150,
            css_width: 300.0,
            css_height: 150.0,
            scale: 1.0,
            ops: Vec::new(),
        }
    }
}

impl Canvas {
    /// Size the backing raster for `viewport` and clear the surface.
    pub fn resize(&mut self, viewport: &Viewport) {
        let ratio = viewport.device_pixel_ratio;
        self.width = (viewport.width * ratio) as u32;
        self.height = (viewport.height * ratio) as u32;
        self.css_width = viewport.width;
        self.css_height = viewport.height;
        self.scale = ratio;
        self.ops.clear();
    }

    /// Backing raster width in physical pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Backing raster height in physical pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Drawing transform scale (the device pixel ratio).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Logical size in CSS pixels, as given to the last resize.
    pub fn css_size(&self) -> (f64, f64) {
        (self.css_width, self.css_height)
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        self.ops.push(DrawOp::FillRect {
            x,
            y,
            width,
            height,
            color: color.to_string(),
        });
    }

    pub fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, width: f64) {
        self.stroke_path(vec![from, to], color, width);
    }

    pub fn stroke_path(&mut self, points: Vec<(f64, f64)>, color: &str, width: f64) {
        if points.len() < 2 {
            return;
        }
        self.ops.push(DrawOp::StrokePath {
            points,
            color: color.to_string(),
            width,
        });
    }

    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: &str) {
        self.ops.push(DrawOp::FillCircle {
            cx,
            cy,
            radius,
            color: color.to_string(),
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn fill_text(
        &mut self,
        text: impl Into<String>,
        x: f64,
        y: f64,
        color: &str,
        font: &str,
        align: TextAlign,
        rotation: f64,
    ) {
        self.ops.push(DrawOp::FillText {
            text: text.into(),
            x,
            y,
            color: color.to_string(),
            font: font.to_string(),
            align,
            rotation,
        });
    }

    /// Render the recorded operations as an SVG element in CSS pixel space.
    pub fn to_svg(&self) -> Element {
        let (width, height) = self.css_size();
        let mut svg = Element::svg("svg")
            .with_attr("viewBox", format!("0 0 {} {}", width, height))
            .with_attr("width", width)
            .with_attr("height", height);

        for op in &self.ops {
            let node = match op {
                DrawOp::FillRect {
                    x,
                    y,
                    width,
                    height,
                    color,
                } => Element::svg("rect")
                    .with_attr("x", x)
                    .with_attr("y", y)
                    .with_attr("width", width)
                    .with_attr("height", height)
                    .with_attr("fill", color),
                DrawOp::StrokePath {
                    points,
                    color,
                    width,
                } => Element::svg("polyline")
                    .with_attr("points", format_points(points))
                    .with_attr("fill", "none")
                    .with_attr("stroke", color)
                    .with_attr("stroke-width", width),
                DrawOp::FillCircle {
                    cx,
                    cy,
                    radius,
                    color,
                } => Element::svg("circle")
                    .with_attr("cx", cx)
                    .with_attr("cy", cy)
                    .with_attr("r", radius)
                    .with_attr("fill", color),
                DrawOp::FillText {
                    text,
                    x,
                    y,
                    color,
                    font,
                    align,
                    rotation,
                } => {
                    let mut node = Element::svg("text")
                        .with_attr("x", x)
                        .with_attr("y", y)
                        .with_attr("fill", color)
                        .with_attr("text-anchor", align.svg_anchor())
                        .with_attr("style", format!("font: {}", font))
                        .with_text(text.clone());
                    if *rotation != 0.0 {
                        node.set_attr("transform", format!("rotate({} {} {})", rotation, x, y));
                    }
                    node
                }
            };
            svg.append(node);
        }
        svg
    }
}

fn format_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{},{}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_accounts_for_pixel_ratio() {
        let mut canvas = Canvas::default();
        canvas.fill_rect(0.0, 0.0, 1.0, 1.0, "#000");
        canvas.resize(&Viewport::new(800.0, 300.0, 2.0));
        assert_eq!((canvas.width(), canvas.height()), (1600, 600));
        assert_eq!(canvas.scale(), 2.0);
        assert_eq!(canvas.css_size(), (800.0, 300.0));
        assert!(canvas.ops().is_empty());
    }

    #[test]
    fn test_fractional_ratio_keeps_exact_css_size() {
        let mut canvas = Canvas::default();
        canvas.resize(&Viewport::new(333.3, 200.0, 1.5));
        assert_eq!((canvas.width(), canvas.height()), (499, 300));
        assert_eq!(canvas.css_size(), (333.3, 200.0));
        assert_eq!(canvas.to_svg().attr("viewBox"), Some("0 0 333.3 200"));
    }

    #[test]
    fn test_invalid_ratio_defaults_to_one() {
        assert_eq!(Viewport::new(10.0, 10.0, 0.0).device_pixel_ratio, 1.0);
        assert_eq!(Viewport::new(10.0, 10.0, f64::NAN).device_pixel_ratio, 1.0);
        assert_eq!(Viewport::new(-5.0, 10.0, 1.0).width, 0.0);
    }

    #[test]
    fn test_degenerate_paths_skipped() {
        let mut canvas = Canvas::default();
        canvas.stroke_path(vec![(1.0, 1.0)], "#000", 2.0);
        assert!(canvas.ops().is_empty());
        canvas.stroke_line((0.0, 0.0), (5.0, 5.0), "#000", 1.0);
        assert_eq!(canvas.ops().len(), 1);
    }

    #[test]
    fn test_svg_conversion() {
        let mut canvas = Canvas::default();
        canvas.resize(&Viewport::new(200.0, 100.0, 3.0));
        canvas.stroke_path(vec![(0.0, 0.0), (10.0, 5.5)], "#1f7a8c", 2.0);
        canvas.fill_circle(10.0, 5.5, 3.0, "#1f7a8c");
        canvas.fill_text("MB/s", 16.0, 50.0, "#3a3a3a", "12px monospace", TextAlign::Center, -90.0);

        let svg = canvas.to_svg();
        assert_eq!(svg.attr("viewBox"), Some("0 0 200 100"));
        let tags: Vec<_> = svg.child_elements().map(Element::tag).collect();
        assert_eq!(tags, ["polyline", "circle", "text"]);
        let line = svg.child_elements().next().unwrap();
        assert_eq!(line.attr("points"), Some("0,0 10,5.5"));
        let label = svg.child_elements().last().unwrap();
        assert_eq!(label.attr("transform"), Some("rotate(-90 16 50)"));
        assert_eq!(label.text_content(), "MB/s");
    }
}
