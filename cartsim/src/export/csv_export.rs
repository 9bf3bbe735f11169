//! Spreadsheet-friendly text export of a recorded series.
//!
//! Layout:
//! - UTF-8 byte-order mark, then a header row
//! - `;` between fields, CRLF after every row including the last
//! - numbers in fixed-point with 6 fractional digits
//! - one row per sample, oldest first

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::CartsimError;
use crate::simulation::states::Sample;

pub const BOM: char = '\u{FEFF}';
pub const SEPARATOR: &str = ";";
pub const EOL: &str = "\r\n";
pub const DEFAULT_FILE_NAME: &str = "simulador_colisiones_energia.csv";

pub const HEADER: [&str; 11] = [
    "tiempo [s]",
    "x1 [m]",
    "v1 [m/s]",
    "x2 [m]",
    "v2 [m/s]",
    "K1 [J]",
    "K2 [J]",
    "Us [J]",
    "Emec [J]",
    "Ediss [J]",
    "p_total [kg·m/s]",
];

/// Render `samples` as export text
pub fn to_csv(samples: &[Sample]) -> String {
    let mut out = String::new();
    out.push(BOM);
    out.push_str(&HEADER.join(SEPARATOR));
    out.push_str(EOL);
    for s in samples {
        out.push_str(&row(s));
        out.push_str(EOL);
    }
    out
}

/// Write the export text of `samples` to `w`
pub fn write_csv<W: Write>(w: &mut W, samples: &[Sample]) -> Result<(), CartsimError> {
    w.write_all(to_csv(samples).as_bytes())?;
    Ok(())
}

/// Write the export text of `samples` to a file at `path`
pub fn write_csv_file(path: &Path, samples: &[Sample]) -> Result<(), CartsimError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_csv(&mut writer, samples)?;
    writer.flush()?;
    Ok(())
}

fn row(s: &Sample) -> String {
    let fields = [s.t, s.x1, s.v1, s.x2, s.v2, s.k1, s.k2, s.us, s.emec, s.ediss, s.p];
    fields.iter().map(|&v| fixed6(v)).collect::<Vec<_>>().join(SEPARATOR)
}

fn fixed6(v: f64) -> String {
    // adding 0.0 turns -0.0 into 0.0
    format!("{:.6}", v + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_point_six_digits() {
        assert_eq!(fixed6(0.1), "0.100000");
        assert_eq!(fixed6(-2.5), "-2.500000");
        assert_eq!(fixed6(-0.0), "0.000000");
        assert_eq!(fixed6(1.0e7), "10000000.000000");
        assert_eq!(fixed6(1.0e-9), "0.000000");
    }
}
