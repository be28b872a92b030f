//! SVG serialization of a frame.
//!
//! Produces the same markup shape the browser client drew: one transformed
//! group holding route lines (grouped per route), customer markers, and the
//! depot marker on top.

use std::fmt::Write;

use crate::error::Result;
use crate::mapper::DrawingArea;
use crate::renderer::{Marker, Segment};
use crate::visualization::Frame;

/// Escape the XML special characters for text content and attribute values.
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

pub fn to_svg_string(frame: &Frame<'_>, area: &DrawingArea) -> Result<String> {
    let mut out = String::new();
    write_frame(frame, area, &mut out)?;
    Ok(out)
}

pub fn write_frame<W: Write>(frame: &Frame<'_>, area: &DrawingArea, out: &mut W) -> Result<()> {
    let pan = frame.viewport.pan();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = area.width,
        h = area.height,
    )?;
    writeln!(
        out,
        r#"  <g transform="translate({}, {}) scale({})">"#,
        pan.x,
        pan.y,
        frame.viewport.zoom()
    )?;

    for route in frame.scene.segments.chunk_by(|a, b| a.route_index == b.route_index) {
        writeln!(
            out,
            r#"    <g class="route" data-vehicle="{}">"#,
            route[0].vehicle_id
        )?;
        for segment in route {
            write_segment(segment, out)?;
        }
        writeln!(out, "    </g>")?;
    }

    // Depot is last in the scene, so it draws over the customers.
    for marker in &frame.scene.markers {
        write_marker(marker, out)?;
    }

    writeln!(out, "  </g>")?;
    writeln!(out, "</svg>")?;
    Ok(())
}

fn write_segment<W: Write>(segment: &Segment, out: &mut W) -> Result<()> {
    let line = segment.line;
    writeln!(
        out,
        r#"      <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-opacity="{}"/>"#,
        line.p0.x,
        line.p0.y,
        line.p1.x,
        line.p1.y,
        xml_escape(segment.color.as_str()),
        segment.stroke.width,
        segment.stroke.opacity,
    )?;
    Ok(())
}

fn write_marker<W: Write>(marker: &Marker, out: &mut W) -> Result<()> {
    let style = &marker.style;
    let label = marker.label_anchor();
    writeln!(out, "    <g>")?;
    writeln!(
        out,
        r#"      <circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
        marker.position.x,
        marker.position.y,
        style.radius,
        xml_escape(style.fill.as_str()),
        xml_escape(style.stroke.as_str()),
        style.stroke_width,
    )?;
    writeln!(
        out,
        r#"      <text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="middle" font-weight="{}">{}</text>"#,
        label.x,
        label.y,
        style.label_size,
        xml_escape(style.label_color.as_str()),
        if style.label_bold { "bold" } else { "500" },
        xml_escape(&marker.label),
    )?;
    writeln!(out, "    </g>")?;
    Ok(())
}
