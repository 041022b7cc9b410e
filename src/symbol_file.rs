//! # Symbol-File I/O
//!
//! Reads the plain-text symbol list described in the crate's external
//! interface (one symbol per line, trailing whitespace stripped, blank
//! lines skipped; an optional hex mode decodes each line before the
//! length check) and writes the packed binary table and the
//! human-readable mapping. Performs no retries and leaves no partial
//! output files on failure.

use std::fs;
use std::path::Path;

use crate::error::CascadeError;
use crate::table::PackedTable;
use crate::util::hex::decode_hex;

/// Input encoding for a symbol file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ascii,
    Hex,
}

/// One parsed input line: its original text (for the readable table) and
/// its decoded raw bytes (for normalization).
#[derive(Debug, Clone)]
pub struct RawSymbol {
    pub text: String,
    pub bytes: Vec<u8>,
}

/// Trims trailing ASCII whitespace from a byte slice, mirroring `str::trim_end`.
fn trim_end_whitespace(mut line: &[u8]) -> &[u8] {
    while let Some((&last, rest)) = line.split_last() {
        if last.is_ascii_whitespace() {
            line = rest;
        } else {
            break;
        }
    }
    line
}

/// Reads and decodes every non-blank line of `path`.
///
/// Reads raw bytes rather than requiring the whole file to be valid UTF-8
/// up front: a file that exists and is readable but contains an invalid
/// byte sequence is an encoding problem, not a missing-file problem, and is
/// reported per offending line like the hex-decode and non-ASCII checks
/// below rather than failing the read as a whole.
pub fn read_symbols(path: &Path, format: Format) -> Result<Vec<RawSymbol>, CascadeError> {
    let contents = fs::read(path)
        .map_err(|e| CascadeError::InputNotFound(format!("{}: {e}", path.display())))?;

    let mut symbols = Vec::new();
    for (line_no, raw_line) in contents.split(|&b| b == b'\n').enumerate() {
        let line = trim_end_whitespace(raw_line);
        if line.is_empty() {
            continue;
        }

        let bytes = match format {
            Format::Ascii => {
                if !line.iter().all(u8::is_ascii) {
                    return Err(CascadeError::InputEncoding(format!(
                        "line {} contains non-ASCII characters",
                        line_no + 1
                    )));
                }
                line.to_vec()
            }
            Format::Hex => {
                let line_str = std::str::from_utf8(line).map_err(|e| {
                    CascadeError::InputEncoding(format!("line {}: {e}", line_no + 1))
                })?;
                decode_hex(line_str).map_err(|e| {
                    CascadeError::InputEncoding(format!("line {}: {e}", line_no + 1))
                })?
            }
        };

        symbols.push(RawSymbol {
            text: String::from_utf8_lossy(line).into_owned(),
            bytes,
        });
    }

    Ok(symbols)
}

/// Writes the packed binary table with no header, consumed directly by a
/// downstream lookup engine whose address calculation mirrors
/// [`crate::table`].
pub fn write_packed_table(path: &Path, table: &PackedTable) -> Result<(), CascadeError> {
    fs::write(path, &table.bytes)
        .map_err(|e| CascadeError::OutputWriteFailed(format!("{}: {e}", path.display())))
}

/// Writes the human-readable `<symbol> -> <unique_id>` mapping.
pub fn write_readable_table(path: &Path, text: &str) -> Result<(), CascadeError> {
    fs::write(path, text)
        .map_err(|e| CascadeError::OutputWriteFailed(format!("{}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;
    use std::io::Write;

    fn file_with(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn blank_lines_and_trailing_whitespace_are_handled() {
        let f = file_with("AAPL  \n\nMSFT\n   \nGOOG\n");
        let symbols = read_symbols(f.path(), Format::Ascii).unwrap();
        let texts: Vec<&str> = symbols.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["AAPL", "MSFT", "GOOG"]);
    }

    #[test]
    fn hex_mode_decodes_each_line() {
        let f = file_with("4141\n4242\n");
        let symbols = read_symbols(f.path(), Format::Hex).unwrap();
        assert_eq!(symbols[0].bytes, vec![0x41, 0x41]);
        assert_eq!(symbols[1].bytes, vec![0x42, 0x42]);
    }

    #[test]
    fn invalid_hex_fails_with_input_encoding() {
        let f = file_with("not-hex\n");
        let err = read_symbols(f.path(), Format::Hex).unwrap_err();
        assert!(matches!(err, CascadeError::InputEncoding(_)));
    }

    #[test]
    fn non_ascii_in_ascii_mode_fails() {
        let f = file_with("caf\u{e9}\n");
        let err = read_symbols(f.path(), Format::Ascii).unwrap_err();
        assert!(matches!(err, CascadeError::InputEncoding(_)));
    }

    #[test]
    fn invalid_utf8_bytes_fail_with_input_encoding_not_input_not_found() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"AAPL\n\xFF\xFE\n").unwrap();
        let err = read_symbols(f.path(), Format::Ascii).unwrap_err();
        assert!(matches!(err, CascadeError::InputEncoding(_)));
    }

    #[test]
    fn missing_file_fails_with_input_not_found() {
        let err = read_symbols(Path::new("/nonexistent/path/symbols.txt"), Format::Ascii).unwrap_err();
        assert!(matches!(err, CascadeError::InputNotFound(_)));
    }

    #[test]
    fn write_packed_table_to_unwritable_directory_fails_with_output_write_failed() {
        let table = PackedTable {
            crc_width: 8,
            id_mask: 0,
            bytes: vec![0u8; 8],
        };
        let err = write_packed_table(Path::new("/nonexistent/dir/out.bin"), &table).unwrap_err();
        assert!(matches!(err, CascadeError::OutputWriteFailed(_)));
    }

    #[test]
    fn write_readable_table_to_unwritable_directory_fails_with_output_write_failed() {
        let err = write_readable_table(Path::new("/nonexistent/dir/out.txt"), "AAPL -> 0\n")
            .unwrap_err();
        assert!(matches!(err, CascadeError::OutputWriteFailed(_)));
    }
}
