// Password list persistence: plain text or gzip, one password per line

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use seedlist_engine::GenerationReport;

use crate::CliError;

/// Marker left in candidates by seed categories that were never filled in.
pub const HOBBY_PLACEHOLDER: &str = "<SPORTS_TEAM/HOBBY>";

/// Result of [`write_list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    /// File actually written (with `.gz` appended when compressed).
    pub path: PathBuf,
    pub count: usize,
    /// Lines dropped because they contained a placeholder.
    pub skipped: usize,
}

/// `true` if `password` contains an unfilled `<...>` placeholder.
pub fn has_placeholder(password: &str) -> bool {
    if password.contains(HOBBY_PLACEHOLDER) {
        return true;
    }
    let mut rest = password;
    while let Some(open) = rest.find('<') {
        rest = &rest[open + 1..];
        match rest.find(['<', '>']) {
            Some(end) if end > 0 && rest[end..].starts_with('>') => return true,
            Some(_) => continue,
            None => return false,
        }
    }
    false
}

/// Destination path for a possibly compressed list.
pub fn output_path(destination: &Path, compressed: bool) -> PathBuf {
    if !compressed {
        return destination.to_path_buf();
    }
    let mut name = OsString::from(destination.as_os_str());
    name.push(".gz");
    PathBuf::from(name)
}

/// Write `passwords` to `destination`, one per line, skipping placeholders.
pub fn write_list(
    passwords: &[String],
    destination: &Path,
    compressed: bool,
) -> Result<Written, CliError> {
    let path = output_path(destination, compressed);
    let io_err = |source: io::Error| CliError::Io {
        path: path.clone(),
        source,
    };

    let file = File::create(&path).map_err(io_err)?;
    let (count, skipped) = if compressed {
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        let counts = write_lines(&mut encoder, passwords).map_err(io_err)?;
        encoder.finish().and_then(|mut w| w.flush()).map_err(io_err)?;
        counts
    } else {
        let mut writer = BufWriter::new(file);
        let counts = write_lines(&mut writer, passwords).map_err(io_err)?;
        writer.flush().map_err(io_err)?;
        counts
    };

    tracing::info!(path = %path.display(), count, skipped, compressed, "wrote password list");
    Ok(Written {
        path,
        count,
        skipped,
    })
}

/// Run statistics printed after the list is written. Warnings themselves are
/// already logged by the engine; only their number is repeated here.
pub fn summary(report: &GenerationReport, written: &Written) -> String {
    let mut text = format!(
        "{} candidates, {} too short, {} too weak, {} placeholder lines skipped",
        report.candidates, report.too_short, report.too_weak, written.skipped
    );
    if !report.warnings.is_empty() {
        text.push_str(&format!("; {} warning(s) logged above", report.warnings.len()));
    }
    text
}

fn write_lines<W: Write>(out: &mut W, passwords: &[String]) -> io::Result<(usize, usize)> {
    let mut count = 0;
    let mut skipped = 0;
    for password in passwords {
        if has_placeholder(password) {
            skipped += 1;
            continue;
        }
        writeln!(out, "{password}")?;
        count += 1;
    }
    Ok((count, skipped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    use flate2::read::GzDecoder;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn placeholder_detection() {
        assert!(has_placeholder("John<SPORTS_TEAM/HOBBY>1990"));
        assert!(has_placeholder("<PHONE>2020"));
        assert!(has_placeholder("a<<b>"));
        assert!(!has_placeholder("John<3you"));
        assert!(!has_placeholder("a<>b"));
        assert!(!has_placeholder("x>y<z"));
        assert!(!has_placeholder("John1990"));
    }

    #[test]
    fn plain_list_skips_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.txt");
        let written = write_list(
            &list(&["John1990", "<NAME>1990", "john_1990", "x<SPORTS_TEAM/HOBBY>"]),
            &dest,
            false,
        )
        .unwrap();
        assert_eq!(written.path, dest);
        assert_eq!((written.count, written.skipped), (2, 2));
        let text = std::fs::read_to_string(&dest).unwrap();
        assert_eq!(text, "John1990\njohn_1990\n");
    }

    #[test]
    fn gzip_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("list.txt");
        let passwords = list(&["Anna2001!", "anna_berg", "B3rgAnna"]);
        let written = write_list(&passwords, &dest, true).unwrap();
        assert_eq!(written.path, dir.path().join("list.txt.gz"));
        assert!(!dest.exists());

        let mut text = String::new();
        GzDecoder::new(File::open(&written.path).unwrap())
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text.lines().collect::<Vec<_>>(), ["Anna2001!", "anna_berg", "B3rgAnna"]);
    }

    #[test]
    fn summary_counts_warnings_without_pointing_elsewhere() {
        use seedlist_engine::RunWarning;

        let written = Written {
            path: PathBuf::from("out.txt"),
            count: 3,
            skipped: 1,
        };
        let mut report = GenerationReport {
            candidates: 9,
            too_short: 2,
            too_weak: 3,
            ..GenerationReport::default()
        };
        assert_eq!(
            summary(&report, &written),
            "9 candidates, 2 too short, 3 too weak, 1 placeholder lines skipped"
        );

        report.warnings = vec![RunWarning::ModelUnavailable, RunWarning::ModelEmpty];
        let text = summary(&report, &written);
        assert!(text.ends_with("; 2 warning(s) logged above"));
        assert!(!text.contains("--verbose"));
    }

    #[test]
    fn unwritable_destination_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("missing").join("out.txt");
        let err = write_list(&list(&["abcdefgh"]), &dest, false).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }
}
