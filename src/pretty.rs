use crate::describe::Summary;
use ansi_term::Style;
use anyhow::Result;
use std::fmt;
use std::io::Write;

/// Writes one row per column, aligned with a `TabWriter`.
pub fn render(summaries: &[Summary], out: impl Write) -> Result<()> {
    let mut out = tabwriter::TabWriter::new(out);
    writeln!(out, "column\tcount\tsum\tmean\tstdev\tmin\tmedian\tmax")?;
    for s in summaries {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            s.column,
            s.count,
            PrettyStat(Some(s.sum)),
            PrettyStat(s.mean),
            PrettyStat(s.stdev),
            PrettyStat(s.min),
            PrettyStat(s.median),
            PrettyStat(s.max),
        )?;
    }
    out.flush()?;
    Ok(())
}

/// A statistic which may not be defined for this column
pub struct PrettyStat(pub Option<f64>);

impl fmt::Display for PrettyStat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(x) if x.fract() == 0. && x.abs() < 1e15 => write!(f, "{}", x),
            Some(x) => write!(f, "{:.3}", x),
            None => write!(f, "{}", Style::new().dimmed().paint("n/a")),
        }
    }
}
