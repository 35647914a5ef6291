//! Moving averages over CSV columns.
//!
//! Each column is smoothed as a series of its own.  Empty fields were
//! already dropped by `read_columns`, so a row of the output doesn't
//! correspond to a row of the input once a column has gaps.

use crate::input::*;
use anyhow::{Context, Result};
use bpaf::Bpaf;
use gauss_vector::{Ema, Vector};
use log::*;
use std::io::Write;

#[derive(Debug, Clone, Bpaf)]
pub struct SmaOptions {
    /// The number of values in each window
    #[bpaf(short, long, argument("N"))]
    period: usize,
    /// Columns to smooth (default: all of them)
    #[bpaf(positional("COLUMN"))]
    columns: Vec<String>,
}

#[derive(Debug, Clone, Bpaf)]
pub struct EmaOptions {
    /// The number of values in the seed window
    #[bpaf(short, long, argument("N"))]
    period: usize,
    /// Use Wilder's smoothing ratio, 1/N, instead of 2/(N+1)
    wilder: bool,
    /// Columns to smooth (default: all of them)
    #[bpaf(positional("COLUMN"))]
    columns: Vec<String>,
}

pub fn sma(opts: SmaOptions) -> Result<()> {
    let columns = read_columns(std::io::stdin(), &opts.columns)?;
    let smoothed = smooth(&columns, |v| v.sma(opts.period))?;
    write_csv(&smoothed, std::io::stdout())
}

pub fn ema(opts: EmaOptions) -> Result<()> {
    let ema = if opts.wilder {
        Ema::wilder(opts.period)
    } else {
        Ema::new(opts.period)
    };
    let columns = read_columns(std::io::stdin(), &opts.columns)?;
    let smoothed = smooth(&columns, |v| v.ema(ema))?;
    write_csv(&smoothed, std::io::stdout())
}

fn smooth(
    columns: &[Column],
    f: impl Fn(&Vector) -> Result<Vector, gauss_vector::Error>,
) -> Result<Vec<Column>> {
    columns
        .iter()
        .map(|col| {
            let values = f(&col.values).with_context(|| format!("Column {:?}", col.name))?;
            debug!("Smoothed {:?} down to {} values", col.name, values.len());
            Ok(Column {
                name: col.name.clone(),
                values,
            })
        })
        .collect()
}

/// Columns of different lengths are padded with empty fields.
fn write_csv(columns: &[Column], out: impl Write) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(columns.iter().map(|col| col.name.as_str()))?;
    let rows = columns.iter().map(|col| col.values.len()).max().unwrap_or(0);
    for i in 0..rows {
        wtr.write_record(
            columns
                .iter()
                .map(|col| col.values.get(i).map_or(String::new(), |x| x.to_string())),
        )?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauss_vector::*;

    fn columns() -> Vec<Column> {
        vec![
            Column {
                name: "a".into(),
                values: vector![1, 2, 3, 4],
            },
            Column {
                name: "b".into(),
                values: vector![10, 20, 30],
            },
        ]
    }

    #[test]
    fn sma_csv() {
        let smoothed = smooth(&columns(), |v| v.sma(2)).unwrap();
        let mut out = vec![];
        write_csv(&smoothed, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "a,b\n1.5,15\n2.5,25\n3.5,\n"
        );
    }

    #[test]
    fn gaps_shift_a_column() {
        let csv = "a,b\n1,10\n2,\n3,30\n4,40\n";
        let columns = read_columns(csv.as_bytes(), &[]).unwrap();
        let smoothed = smooth(&columns, |v| v.sma(2)).unwrap();
        let mut out = vec![];
        write_csv(&smoothed, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "a,b\n1.5,20\n2.5,35\n3.5,\n"
        );
    }

    #[test]
    fn period_too_long() {
        let err = smooth(&columns(), |v| v.ema(Ema::new(4))).err().unwrap();
        assert_eq!(format!("{}", err), "Column \"b\"");
        assert_eq!(
            format!("{:#}", err),
            "Column \"b\": A period of 4 doesn't fit in a vector of length 3"
        );
    }
}
