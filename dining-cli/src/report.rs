use anyhow::{Context, Result};
use dining_core::{MenuCatalog, Receipt};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;

/// JSON document written by `--report json`.
#[derive(Debug, Serialize)]
pub struct ReportDocument<'a> {
    pub version: &'static str,
    pub menu: &'a MenuCatalog,
    pub receipt: &'a Receipt,
}

impl<'a> ReportDocument<'a> {
    pub const fn new(menu: &'a MenuCatalog, receipt: &'a Receipt) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            menu,
            receipt,
        }
    }
}

pub fn generate_json_report<W: Write>(
    writer: &mut W,
    document: &ReportDocument<'_>,
) -> Result<()> {
    let json_output = serde_json::to_string_pretty(document)?;
    writeln!(writer, "{json_output}")?;
    Ok(())
}

pub enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    pub fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
