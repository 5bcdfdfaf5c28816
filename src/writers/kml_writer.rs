use crate::error::Result;
use crate::models::{Placemark, PlacemarkDocument};
use crate::utils::constants::KML_NAMESPACE;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serializes placemark documents as standalone KML 2.2 files
pub struct KmlWriter {
    indent: usize,
}

impl KmlWriter {
    pub fn new() -> Self {
        Self { indent: 2 }
    }

    /// Zero disables pretty printing
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn write_document(&self, document: &PlacemarkDocument, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut sink = BufWriter::new(file);
        self.write_to(document, &mut sink)?;
        sink.flush()?;

        tracing::info!(
            path = %path.display(),
            placemarks = document.len(),
            "Wrote KML document"
        );
        Ok(())
    }

    pub fn render(&self, document: &PlacemarkDocument) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_to(document, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    pub fn write_to<W: Write>(&self, document: &PlacemarkDocument, sink: W) -> Result<()> {
        let mut writer = if self.indent > 0 {
            Writer::new_with_indent(sink, b' ', self.indent)
        } else {
            Writer::new(sink)
        };

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

        let mut root = BytesStart::new("kml");
        root.push_attribute(("xmlns", KML_NAMESPACE));
        writer.write_event(Event::Start(root))?;
        writer.write_event(Event::Start(BytesStart::new("Document")))?;

        for placemark in &document.placemarks {
            write_placemark(&mut writer, placemark)?;
        }

        writer.write_event(Event::End(BytesEnd::new("Document")))?;
        writer.write_event(Event::End(BytesEnd::new("kml")))?;
        writer.get_mut().write_all(b"\n")?;
        Ok(())
    }
}

impl Default for KmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn write_placemark<W: Write>(writer: &mut Writer<W>, placemark: &Placemark) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("Placemark")))?;
    write_text_element(writer, "name", &placemark.label)?;
    write_text_element(writer, "description", &placemark.description)?;

    writer.write_event(Event::Start(BytesStart::new("Point")))?;
    write_text_element(writer, "coordinates", &placemark.coordinates())?;
    writer.write_event(Event::End(BytesEnd::new("Point")))?;

    writer.write_event(Event::End(BytesEnd::new("Placemark")))?;
    Ok(())
}

fn write_text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
