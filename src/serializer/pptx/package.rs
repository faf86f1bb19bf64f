//! OPC package assembly.
//!
//! Serializes every part of the presentation package into a zip archive in
//! memory. The fixed parts (master, layout, theme, static relationships)
//! come from [`template`](super::template); the parts that depend on the
//! slide count or metadata are generated here.

use super::slide::SlidePart;
use super::template;
use crate::common::{Error, Result};
use crate::deck::DeckMetadata;
use chrono::SecondsFormat;
use std::fmt::Write as FmtWrite;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn zip_err(e: zip::result::ZipError) -> Error {
    Error::Zip(e.to_string())
}

fn fmt_err(e: std::fmt::Error) -> Error {
    Error::Serialization(e.to_string())
}

/// `[Content_Types].xml`: default extensions plus one override per part.
fn content_types_xml(slide_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(2048);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
    xml.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>"#);
    for i in 1..=slide_count {
        write!(
            xml,
            r#"<Override PartName="/ppt/slides/slide{i}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#
        )
        .map_err(fmt_err)?;
    }
    xml.push_str(r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#);
    xml.push_str(r#"<Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>"#);
    xml.push_str("</Types>");
    Ok(xml)
}

/// `ppt/presentation.xml`: the master reference, the slide id list in
/// presentation order, and the 16:9 slide size.
fn presentation_xml(slide_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(1024);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<p:presentation xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#);
    xml.push_str(r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#);
    xml.push_str("<p:sldIdLst>");
    for i in 0..slide_count {
        // Slide ids must be >= 256; relationship ids continue after the
        // master's rId1.
        write!(xml, r#"<p:sldId id="{}" r:id="rId{}"/>"#, 256 + i, 2 + i).map_err(fmt_err)?;
    }
    xml.push_str("</p:sldIdLst>");
    xml.push_str(r#"<p:sldSz cx="9144000" cy="5143500"/>"#);
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");
    Ok(xml)
}

/// `ppt/_rels/presentation.xml.rels`: master first, then the slides.
fn presentation_rels_xml(slide_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(1024);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#);
    xml.push_str(r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="slideMasters/slideMaster1.xml"/>"#);
    for i in 1..=slide_count {
        write!(
            xml,
            r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide{i}.xml"/>"#,
            1 + i
        )
        .map_err(fmt_err)?;
    }
    xml.push_str("</Relationships>");
    Ok(xml)
}

/// `docProps/core.xml` from the deck metadata.
fn core_props_xml(metadata: &DeckMetadata) -> String {
    let created = metadata
        .created
        .to_rfc3339_opts(SecondsFormat::Secs, true);
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            r#"<dc:title>{title}</dc:title>"#,
            r#"<dc:creator>{author}</dc:creator>"#,
            r#"<cp:lastModifiedBy>{author}</cp:lastModifiedBy>"#,
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">{created}</dcterms:created>"#,
            r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{created}</dcterms:modified>"#,
            r#"</cp:coreProperties>"#,
        ),
        title = escape_xml(&metadata.title),
        author = escape_xml(&metadata.author),
        created = created,
    )
}

/// `docProps/app.xml`: the slide count and generator name.
fn app_props_xml(slide_count: usize) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
            r#"<Application>{app}</Application>"#,
            r#"<Slides>{n}</Slides>"#,
            r#"<PresentationFormat>Widescreen</PresentationFormat>"#,
            r#"</Properties>"#,
        ),
        app = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION")),
        n = slide_count,
    )
}

/// Serialize the whole package into zip archive bytes.
pub(crate) fn package_bytes(metadata: &DeckMetadata, slides: &[SlidePart]) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut add = |writer: &mut ZipWriter<Cursor<Vec<u8>>>, name: &str, body: &str| -> Result<()> {
        writer.start_file(name, options).map_err(zip_err)?;
        writer.write_all(body.as_bytes())?;
        Ok(())
    };

    let n = slides.len();

    add(&mut writer, "[Content_Types].xml", &content_types_xml(n)?)?;
    add(&mut writer, "_rels/.rels", template::package_rels_xml())?;
    add(&mut writer, "docProps/core.xml", &core_props_xml(metadata))?;
    add(&mut writer, "docProps/app.xml", &app_props_xml(n))?;
    add(&mut writer, "ppt/presentation.xml", &presentation_xml(n)?)?;
    add(
        &mut writer,
        "ppt/_rels/presentation.xml.rels",
        &presentation_rels_xml(n)?,
    )?;
    add(
        &mut writer,
        "ppt/slideMasters/slideMaster1.xml",
        template::slide_master_xml(),
    )?;
    add(
        &mut writer,
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        template::slide_master_rels_xml(),
    )?;
    add(
        &mut writer,
        "ppt/slideLayouts/slideLayout1.xml",
        template::slide_layout_xml(),
    )?;
    add(
        &mut writer,
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        template::slide_layout_rels_xml(),
    )?;
    add(&mut writer, "ppt/theme/theme1.xml", template::theme_xml())?;

    for (i, slide) in slides.iter().enumerate() {
        add(
            &mut writer,
            &format!("ppt/slides/slide{}.xml", i + 1),
            &slide.to_xml(),
        )?;
        add(
            &mut writer,
            &format!("ppt/slides/_rels/slide{}.xml.rels", i + 1),
            template::slide_rels_xml(),
        )?;
    }

    let cursor = writer.finish().map_err(zip_err)?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn metadata() -> DeckMetadata {
        DeckMetadata {
            title: "Claude Game Player".into(),
            author: "Ops & Tools".into(),
            created: Utc.with_ymd_and_hms(2026, 8, 25, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_content_types_cover_every_slide() {
        let xml = content_types_xml(3).unwrap();
        for i in 1..=3 {
            assert!(xml.contains(&format!("/ppt/slides/slide{i}.xml")));
        }
        assert!(!xml.contains("/ppt/slides/slide4.xml"));
    }

    #[test]
    fn test_presentation_lists_slides_in_order() {
        let xml = presentation_xml(2).unwrap();
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="5143500"/>"#));

        let rels = presentation_rels_xml(2).unwrap();
        assert!(rels.contains(r#"Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide1.xml"#));
    }

    #[test]
    fn test_core_props_escape_and_timestamp() {
        let mut meta = metadata();
        meta.title = "Ops & Tools <review>".into();
        let xml = core_props_xml(&meta);
        assert!(xml.contains("<dc:title>Ops &amp; Tools &lt;review&gt;</dc:title>"));
        assert!(xml.contains(r#"<dcterms:created xsi:type="dcterms:W3CDTF">2026-08-25T12:00:00Z</dcterms:created>"#));
    }

    #[test]
    fn test_package_bytes_form_a_readable_archive() {
        let slides = vec![SlidePart::new(), SlidePart::new()];
        let bytes = package_bytes(&metadata(), &slides).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_owned())
            .collect();
        for expected in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/theme/theme1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/slide2.xml",
            "ppt/slides/_rels/slide2.xml.rels",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing {expected}");
        }
    }
}
