use crate::core::models::event::Event;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Defines the interface for formats that hold a batch of events.
pub trait EventReader {
    /// The error type for I/O and parse failures.
    type Error: Error + From<io::Error>;

    /// Reads every event from a reader, in file order.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or the input violates the format's layout rules.
    fn read_from(reader: &mut impl Read) -> Result<Vec<Event>, Self::Error>;

    /// Reads every event from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Event>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}

/// Defines the interface for tabular result formats.
pub trait ResultWriter {
    /// One output row.
    type Row;

    /// The error type for I/O and serialization failures.
    type Error: Error + From<io::Error>;

    /// Writes a header followed by one line per row.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(rows: &[Self::Row], writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Writes the rows to a file path, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(rows: &[Self::Row], path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(rows, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
