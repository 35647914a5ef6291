use crate::input::*;
use anyhow::Result;
use bpaf::Bpaf;
use gauss_vector::DistributionFormat;
use std::io::Write;

#[derive(Debug, Clone, Bpaf)]
pub struct DistributionOptions {
    /// Print each value's share of the column rather than its count
    relative: bool,
    /// Columns to tally (default: all of them)
    #[bpaf(positional("COLUMN"))]
    columns: Vec<String>,
}

pub fn distribution(opts: DistributionOptions) -> Result<()> {
    let format = if opts.relative {
        DistributionFormat::Relative
    } else {
        DistributionFormat::Absolute
    };
    let columns = read_columns(std::io::stdin(), &opts.columns)?;
    let out = to_json(&columns, format)?;
    writeln!(std::io::stdout(), "{}", out)?;
    Ok(())
}

fn to_json(columns: &[Column], format: DistributionFormat) -> Result<serde_json::Value> {
    let mut map = serde_json::Map::new();
    for col in columns {
        let dist = col.values.distribution(format);
        map.insert(col.name.clone(), serde_json::to_value(&dist)?);
    }
    Ok(serde_json::Value::Object(map))
}
