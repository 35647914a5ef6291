use crate::input::*;
use crate::pretty;
use anyhow::Result;
use bpaf::Bpaf;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Bpaf)]
pub struct DescribeOptions {
    /// Print one JSON object per column instead of a table
    json: bool,
    /// Columns to describe (default: all of them)
    #[bpaf(positional("COLUMN"))]
    columns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub column: String,
    pub count: usize,
    pub sum: f64,
    pub mean: Option<f64>,
    pub stdev: Option<f64>,
    pub min: Option<f64>,
    pub median: Option<f64>,
    pub max: Option<f64>,
}

impl Summary {
    pub fn new(col: &Column) -> Summary {
        let v = &col.values;
        Summary {
            column: col.name.clone(),
            count: v.len(),
            sum: v.sum(),
            mean: v.mean().ok(),
            stdev: v.stdev().ok(),
            min: v.min().ok(),
            median: v.median().ok(),
            max: v.max().ok(),
        }
    }
}

pub fn describe(opts: DescribeOptions) -> Result<()> {
    let columns = read_columns(std::io::stdin(), &opts.columns)?;
    let summaries = columns.iter().map(Summary::new).collect::<Vec<_>>();
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    if opts.json {
        for s in &summaries {
            writeln!(stdout, "{}", serde_json::to_string(s)?)?;
        }
    } else {
        pretty::render(&summaries, stdout)?;
    }
    Ok(())
}
