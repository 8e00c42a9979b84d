use crate::tally::ExtensionTally;
use std::io::{self, Write};

const COUNT_WIDTH: usize = 10;

/// Writes the total, then one row per extension ranked by count.
pub fn write_report<W: Write>(out: &mut W, tally: &ExtensionTally, total: usize) -> io::Result<()> {
    writeln!(out, "File count: {}", total)?;
    writeln!(out)?;
    writeln!(out, "{:>width$} {}", "#", "extension", width = COUNT_WIDTH)?;

    for entry in tally.ranked() {
        writeln!(
            out,
            "{:>width$} {}",
            entry.count,
            entry.extension,
            width = COUNT_WIDTH
        )?;
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_layout() {
        let mut tally = ExtensionTally::new();
        for key in [".txt", ".txt", ".txt", "", ""] {
            tally.increment(key);
        }
        let mut out: Vec<u8> = Vec::new();
        write_report(&mut out, &tally, tally.total()).unwrap();

        let expected = "File count: 5\n\
                        \n         # extension\n\
                        \x20        3 .txt\n\
                        \x20        2 \n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_report_empty_tally() {
        let tally = ExtensionTally::new();
        let mut out: Vec<u8> = Vec::new();
        write_report(&mut out, &tally, 0).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "File count: 0\n\n         # extension\n"
        );
    }
}
