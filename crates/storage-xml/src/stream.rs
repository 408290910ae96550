//! Streaming XML output over `quick_xml::Writer`
//!
//! Tags are opened and closed explicitly. The most recently opened tag stays
//! pending until something else is written, so attributes can be added to it
//! after `open_tag`. A tag closed while still pending is written as an empty
//! element (`<tag a="1"/>`).

use crate::{XmlAttribute, XmlConfig, XmlError, Result};
use quick_xml::{
    events::{BytesDecl, BytesEnd, BytesStart, Event},
    Writer,
};
use std::fmt;
use std::io::Write;
use tracing::{debug, trace};

/// Ordered attribute/element writer
pub struct XmlOutputStream<W: Write> {
    writer: Writer<W>,
    open: Vec<String>,
    pending: Option<BytesStart<'static>>,
}

impl<W: Write> XmlOutputStream<W> {
    /// Create a compact writer without declaration
    pub fn new(inner: W) -> Self {
        Self {
            writer: Writer::new(inner),
            open: Vec::new(),
            pending: None,
        }
    }

    /// Create a writer using `config`
    pub fn with_config(inner: W, config: &XmlConfig) -> Result<Self> {
        let writer = if config.is_indented() {
            if !config.indent_char.is_ascii() {
                return Err(XmlError::InvalidIndent(config.indent_char));
            }
            let indent = config.indent_char as u8;
            Writer::new_with_indent(inner, indent, config.indent_size)
        } else {
            Writer::new(inner)
        };

        let mut stream = Self {
            writer,
            open: Vec::new(),
            pending: None,
        };
        if config.declaration {
            stream
                .writer
                .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
                .map_err(XmlError::write)?;
        }
        Ok(stream)
    }

    /// Open a new element nested in the current one
    pub fn open_tag(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.flush_pending()?;
        let name = name.into();
        trace!(tag = %name, depth = self.open.len(), "open tag");
        self.pending = Some(BytesStart::new(name.clone()));
        self.open.push(name);
        Ok(self)
    }

    /// Add an attribute to the tag opened last
    ///
    /// Fails once that tag has children written into it.
    pub fn add_attribute(&mut self, attribute: XmlAttribute) -> Result<&mut Self> {
        match self.pending.as_mut() {
            Some(start) => {
                start.push_attribute((attribute.name(), attribute.value()));
                Ok(self)
            }
            None => Err(XmlError::NoOpenTag {
                attribute: attribute.name().to_string(),
            }),
        }
    }

    /// Add several attributes in order
    pub fn add_attributes<I>(&mut self, attributes: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = XmlAttribute>,
    {
        for attribute in attributes {
            self.add_attribute(attribute)?;
        }
        Ok(self)
    }

    /// Close the innermost open element
    pub fn close_tag(&mut self) -> Result<&mut Self> {
        let name = self.open.pop().ok_or(XmlError::UnbalancedClose)?;
        trace!(tag = %name, depth = self.open.len(), "close tag");
        let written = match self.pending.take() {
            Some(start) => self.writer.write_event(Event::Empty(start)),
            None => self.writer.write_event(Event::End(BytesEnd::new(name))),
        };
        written.map_err(XmlError::write)?;
        Ok(self)
    }

    /// Number of currently open elements
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Finish the document and return the sink
    pub fn finish(self) -> Result<W> {
        if !self.open.is_empty() {
            return Err(XmlError::UnclosedTags(self.open.len()));
        }
        let mut inner = self.writer.into_inner();
        inner.flush()?;
        debug!("xml document finished");
        Ok(inner)
    }

    fn flush_pending(&mut self) -> Result<()> {
        if let Some(start) = self.pending.take() {
            self.writer
                .write_event(Event::Start(start))
                .map_err(XmlError::write)?;
        }
        Ok(())
    }
}

impl<W: Write> fmt::Debug for XmlOutputStream<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XmlOutputStream")
            .field("open", &self.open)
            .field("pending", &self.pending.is_some())
            .finish_non_exhaustive()
    }
}

/// Render a single element named `tag` into a string
pub fn to_xml_string<F>(tag: &str, config: &XmlConfig, body: F) -> Result<String>
where
    F: FnOnce(&mut XmlOutputStream<Vec<u8>>) -> Result<()>,
{
    let mut xos = XmlOutputStream::with_config(Vec::new(), config)?;
    xos.open_tag(tag)?;
    body(&mut xos)?;
    xos.close_tag()?;
    let bytes = xos.finish()?;
    Ok(String::from_utf8(bytes)?)
}
