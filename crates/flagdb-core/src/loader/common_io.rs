// crates/flagdb-core/src/loader/common_io.rs
use crate::error::{FlagError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// On-disk representation, chosen from the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    /// `flags.json` or `flags.json.gz`
    Json,
    /// `flags.bin`: bincode, gzip-wrapped when `compact` is enabled.
    Binary,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        if name.ends_with(".json") || name.ends_with(".json.gz") {
            Ok(Self::Json)
        } else if name.ends_with(".bin") {
            Ok(Self::Binary)
        } else {
            Err(FlagError::InvalidData(format!(
                "cannot infer dataset format from {}",
                path.display()
            )))
        }
    }
}

/// Whether a path asks for gzip output.
pub fn wants_gzip(path: &Path, format: DataFormat) -> bool {
    match format {
        DataFormat::Json => path.to_string_lossy().to_ascii_lowercase().ends_with(".gz"),
        DataFormat::Binary => cfg!(feature = "compact"),
    }
}

/// Opens a file, buffers it, and transparently unwraps gzip content.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        FlagError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let mut reader = BufReader::new(file);
    let is_gzip = reader.fill_buf()?.starts_with(&GZIP_MAGIC);

    if !is_gzip {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(FlagError::InvalidData(format!(
            "{} is gzip-compressed but the 'compact' feature is disabled",
            path.display()
        )))
    }
}

/// Output stream returned by [`create_stream`].
///
/// Call [`DataWriter::finish`] when done: it writes the gzip trailer and
/// flushes the buffer, reporting errors that a plain drop would swallow.
pub enum DataWriter {
    Plain(BufWriter<File>),
    #[cfg(feature = "compact")]
    Gzip(flate2::write::GzEncoder<BufWriter<File>>),
}

impl DataWriter {
    pub fn finish(self) -> Result<()> {
        match self {
            Self::Plain(mut w) => w.flush()?,
            #[cfg(feature = "compact")]
            Self::Gzip(encoder) => encoder.finish()?.flush()?,
        }
        Ok(())
    }
}

impl Write for DataWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Plain(w) => w.write(buf),
            #[cfg(feature = "compact")]
            Self::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Plain(w) => w.flush(),
            #[cfg(feature = "compact")]
            Self::Gzip(w) => w.flush(),
        }
    }
}

/// Creates a file for writing, optionally gzip-wrapped.
pub fn create_stream(path: &Path, gzip: bool) -> Result<DataWriter> {
    let writer = BufWriter::new(File::create(path)?);

    if !gzip {
        return Ok(DataWriter::Plain(writer));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::{write::GzEncoder, Compression};
        Ok(DataWriter::Gzip(GzEncoder::new(writer, Compression::default())))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(FlagError::InvalidData(
            "Gzip requested but 'compact' disabled".into(),
        ))
    }
}
