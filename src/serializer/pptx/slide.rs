//! DrawingML slide part generation.
//!
//! One [`SlidePart`] accumulates shape XML as draw calls arrive and renders
//! the complete `p:sld` document at commit time. Geometry arrives in canvas
//! inches and is converted to EMUs here.

use crate::common::style::RunFlags;
use crate::common::unit::{emu, emu_from_points};
use crate::common::{Align, Color, Error, Result, ShadowStyle, TextRun, TextStyle, VAlign};
use crate::layout::Frame;
use crate::serializer::{ShapeKind, ShapeStyle};
use std::fmt::Write as FmtWrite;

/// Escape XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn fmt_err(e: std::fmt::Error) -> Error {
    Error::Serialization(e.to_string())
}

/// One slide under construction: background plus accumulated shape XML.
#[derive(Debug, Clone, Default)]
pub(crate) struct SlidePart {
    pub(crate) background: Option<Color>,
    shapes_xml: String,
    shape_count: u32,
}

impl SlidePart {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    // IDs: 1 is the root group shape, drawables start at 2.
    fn next_id(&mut self) -> u32 {
        self.shape_count += 1;
        self.shape_count + 1
    }

    /// Append a filled rectangle or ellipse.
    pub(crate) fn add_shape(
        &mut self,
        kind: ShapeKind,
        frame: Frame,
        style: &ShapeStyle,
    ) -> Result<()> {
        let id = self.next_id();
        let (prst, name) = match kind {
            ShapeKind::Rectangle => ("rect", "Rectangle"),
            ShapeKind::Ellipse => ("ellipse", "Ellipse"),
        };
        let xml = &mut self.shapes_xml;

        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        write!(xml, r#"<p:cNvPr id="{id}" name="{name} {id}"/>"#).map_err(fmt_err)?;
        xml.push_str("<p:cNvSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr>");
        write_xfrm(xml, frame)?;
        write!(xml, r#"<a:prstGeom prst="{prst}"><a:avLst/></a:prstGeom>"#).map_err(fmt_err)?;
        write!(
            xml,
            r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
            style.fill.to_hex()
        )
        .map_err(fmt_err)?;
        if let Some(shadow) = &style.shadow {
            write_shadow(xml, shadow)?;
        }
        xml.push_str("</p:spPr>");

        // Shapes carry an empty text body so the part stays well-formed.
        xml.push_str("<p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:endParaRPr lang=\"en-US\"/></a:p></p:txBody>");
        xml.push_str("</p:sp>");
        Ok(())
    }

    /// Append a text block.
    pub(crate) fn add_text(
        &mut self,
        frame: Frame,
        runs: &[TextRun],
        style: &TextStyle,
    ) -> Result<()> {
        let id = self.next_id();
        let xml = &mut self.shapes_xml;

        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        write!(xml, r#"<p:cNvPr id="{id}" name="TextBox {id}"/>"#).map_err(fmt_err)?;
        xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr>");
        write_xfrm(xml, frame)?;
        xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
        xml.push_str("<a:noFill/>");
        xml.push_str("</p:spPr>");

        xml.push_str("<p:txBody>");
        let inset = emu_from_points(style.margin as f64);
        let anchor = match style.anchor {
            VAlign::Top => "t",
            VAlign::Middle => "ctr",
            VAlign::Bottom => "b",
        };
        write!(
            xml,
            r#"<a:bodyPr wrap="square" lIns="{inset}" tIns="{inset}" rIns="{inset}" bIns="{inset}" anchor="{anchor}" rtlCol="0"/>"#
        )
        .map_err(fmt_err)?;
        xml.push_str("<a:lstStyle/>");

        // One paragraph per BREAK_LINE boundary; paragraph-level properties
        // (alignment, spacing, bullet) come from the style and the flags of
        // the paragraph's first run.
        let mut para_open = false;
        for run in runs {
            if !para_open {
                write_para_open(xml, style, run.flags.contains(RunFlags::BULLET))?;
                para_open = true;
            }
            write_run(xml, run, style)?;
            if run.flags.contains(RunFlags::BREAK_LINE) {
                xml.push_str("</a:p>");
                para_open = false;
            }
        }
        if para_open {
            xml.push_str("</a:p>");
        }
        if runs.is_empty() {
            xml.push_str("<a:p><a:endParaRPr lang=\"en-US\"/></a:p>");
        }

        xml.push_str("</p:txBody>");
        xml.push_str("</p:sp>");
        Ok(())
    }

    /// Render the complete slide document.
    pub(crate) fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(4096 + self.shapes_xml.len());

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld>");

        // Background must come before spTree.
        if let Some(fill) = self.background {
            xml.push_str("<p:bg><p:bgPr>");
            xml.push_str(&format!(
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                fill.to_hex()
            ));
            xml.push_str("<a:effectLst/></p:bgPr></p:bg>");
        }

        xml.push_str("<p:spTree>");
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        xml.push_str(&self.shapes_xml);

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        xml
    }
}

fn write_xfrm(xml: &mut String, frame: Frame) -> Result<()> {
    xml.push_str("<a:xfrm>");
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, emu(frame.x), emu(frame.y)).map_err(fmt_err)?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, emu(frame.w), emu(frame.h)).map_err(fmt_err)?;
    xml.push_str("</a:xfrm>");
    Ok(())
}

fn write_shadow(xml: &mut String, shadow: &ShadowStyle) -> Result<()> {
    // Angle in 60000ths of a degree, alpha in 1000ths of a percent.
    write!(
        xml,
        r#"<a:effectLst><a:outerShdw blurRad="{}" dist="{}" dir="{}" rotWithShape="0"><a:srgbClr val="{}"><a:alpha val="{}"/></a:srgbClr></a:outerShdw></a:effectLst>"#,
        emu_from_points(shadow.blur as f64),
        emu_from_points(shadow.offset as f64),
        (shadow.angle as f64 * 60_000.0).round() as i64,
        shadow.color.to_hex(),
        (shadow.opacity as f64 * 100_000.0).round() as i64,
    )
    .map_err(fmt_err)
}

fn write_para_open(xml: &mut String, style: &TextStyle, bullet: bool) -> Result<()> {
    xml.push_str("<a:p><a:pPr");
    match style.align {
        Align::Left => {},
        Align::Center => xml.push_str(r#" algn="ctr""#),
        Align::Right => xml.push_str(r#" algn="r""#),
    }
    xml.push('>');
    if let Some(points) = style.para_space_after {
        write!(
            xml,
            r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#,
            (points * 100.0).round() as i64
        )
        .map_err(fmt_err)?;
    }
    if bullet {
        xml.push_str(r#"<a:buFont typeface="Arial"/><a:buChar char="&#8226;"/>"#);
    } else {
        xml.push_str("<a:buNone/>");
    }
    xml.push_str("</a:pPr>");
    Ok(())
}

fn write_run(xml: &mut String, run: &TextRun, style: &TextStyle) -> Result<()> {
    let size = run.size.unwrap_or(style.size);
    write!(
        xml,
        r#"<a:r><a:rPr lang="en-US" sz="{}" dirty="0""#,
        (size * 100.0).round() as u32
    )
    .map_err(fmt_err)?;
    if style.bold {
        xml.push_str(r#" b="1""#);
    }
    if style.italic {
        xml.push_str(r#" i="1""#);
    }
    xml.push('>');
    write!(
        xml,
        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
        style.color.to_hex()
    )
    .map_err(fmt_err)?;
    write!(xml, r#"<a:latin typeface="{}"/>"#, style.font.name()).map_err(fmt_err)?;
    xml.push_str("</a:rPr>");
    write!(xml, "<a:t>{}</a:t>", escape_xml(&run.text)).map_err(fmt_err)?;
    xml.push_str("</a:r>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::FontFace;

    #[test]
    fn test_shape_geometry_in_emus() {
        let mut part = SlidePart::new();
        part.add_shape(
            ShapeKind::Rectangle,
            Frame::new(0.7, 1.5, 8.6, 0.5),
            &ShapeStyle {
                fill: Color::new(0xFF, 0xFF, 0xFF),
                shadow: None,
            },
        )
        .unwrap();
        let xml = part.to_xml();
        assert!(xml.contains(r#"<a:off x="640080" y="1371600"/>"#));
        assert!(xml.contains(r#"<a:ext cx="7863840" cy="457200"/>"#));
        assert!(xml.contains(r#"prst="rect""#));
    }

    #[test]
    fn test_shadow_encoding() {
        let mut part = SlidePart::new();
        part.add_shape(
            ShapeKind::Rectangle,
            Frame::new(0.0, 0.0, 1.0, 1.0),
            &ShapeStyle {
                fill: Color::BLACK,
                shadow: Some(ShadowStyle::new(6.0, 2.0, 135.0, Color::BLACK, 0.12)),
            },
        )
        .unwrap();
        let xml = part.to_xml();
        assert!(xml.contains(r#"blurRad="76200""#));
        assert!(xml.contains(r#"dist="25400""#));
        assert!(xml.contains(r#"dir="8100000""#));
        assert!(xml.contains(r#"<a:alpha val="12000"/>"#));
    }

    #[test]
    fn test_text_paragraph_splitting() {
        let mut part = SlidePart::new();
        let runs = vec![
            TextRun::bullet("first").break_line(),
            TextRun::bullet("second"),
        ];
        part.add_text(
            Frame::new(1.0, 2.2, 3.5, 2.5),
            &runs,
            &TextStyle::new(FontFace::Calibri, 13.0, Color::BLACK).spacing(8.0),
        )
        .unwrap();
        let xml = part.to_xml();
        assert_eq!(xml.matches("<a:p>").count(), 2);
        assert_eq!(xml.matches(r#"<a:buChar char="&#8226;"/>"#).count(), 2);
        assert!(xml.contains(r#"<a:spcAft><a:spcPts val="800"/></a:spcAft>"#));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut part = SlidePart::new();
        part.add_text(
            Frame::new(0.0, 0.0, 1.0, 1.0),
            &[TextRun::plain("a < b & \"c\"")],
            &TextStyle::new(FontFace::Consolas, 12.0, Color::BLACK),
        )
        .unwrap();
        assert!(part.to_xml().contains("a &lt; b &amp; &quot;c&quot;"));
    }

    #[test]
    fn test_background_precedes_sp_tree() {
        let mut part = SlidePart::new();
        part.background = Some(Color::new(0x0B, 0x1D, 0x3A));
        let xml = part.to_xml();
        let bg = xml.find("<p:bg>").unwrap();
        let tree = xml.find("<p:spTree>").unwrap();
        assert!(bg < tree);
        assert!(xml.contains(r#"<a:srgbClr val="0B1D3A"/>"#));
    }
}
