use anyhow::{bail, Context, Result};
use gauss_vector::Vector;
use log::*;
use std::io::Read;

pub struct Column {
    pub name: String,
    pub values: Vector,
}

/// Reads a CSV with a header row, keeping the named columns (or all of
/// them if `wanted` is empty).  Every kept field must be a number; empty
/// fields are skipped, so columns with gaps come out shorter than the rest.
pub fn read_columns(input: impl Read, wanted: &[String]) -> Result<Vec<Column>> {
    let mut rdr = csv::Reader::from_reader(input);
    let headers = rdr.headers()?.clone();
    for name in wanted {
        if !headers.iter().any(|x| x == name.as_str()) {
            bail!("No column named {:?}", name);
        }
    }
    let indices = headers
        .iter()
        .enumerate()
        .filter(|(_, x)| wanted.is_empty() || wanted.iter().any(|y| y.as_str() == *x))
        .map(|(idx, _)| idx)
        .collect::<Vec<_>>();
    let mut columns = indices
        .iter()
        .map(|&idx| Column {
            name: headers[idx].to_string(),
            values: Vector::new(),
        })
        .collect::<Vec<_>>();

    for row in rdr.into_records() {
        let row = row?;
        let line = row.position().map_or(0, |pos| pos.line());
        for (col, &idx) in columns.iter_mut().zip(&indices) {
            let field = row.get(idx).unwrap_or("").trim();
            if field.is_empty() {
                continue;
            }
            let x = field.parse::<f64>().with_context(|| {
                format!("Line {}, column {:?}: {:?} is not a number", line, col.name, field)
            })?;
            col.values.push(x);
        }
    }
    for col in &columns {
        info!("Read {} values from {:?}", col.values.len(), col.name);
    }
    Ok(columns)
}
