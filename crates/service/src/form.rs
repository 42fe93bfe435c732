//! Decoding of the web form that collects a system cell by cell.
//!
//! The form posts `size`, one `m{row}_{col}` field per matrix cell and one `c{row}` field per
//! constant, rows and columns numbered from zero.

use std::collections::HashMap;

use crate::{EquationRequest, Error, Reply, Solver, SolverClient};

/// Builds an [`EquationRequest`] from posted form fields.
///
/// When a field is posted more than once its first value is used. Values must parse as finite
/// floating point numbers.
pub fn parse_form<'a, I>(fields: I) -> Result<EquationRequest, Error>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut values = HashMap::new();
    for (name, value) in fields {
        values.entry(name).or_insert(value);
    }

    let size = values
        .get("size")
        .and_then(|v| v.parse::<i32>().ok())
        .filter(|&size| size >= 1)
        .ok_or(Error::InvalidSize)?;

    let rows = size as usize;
    let mut matrix = Vec::new();
    // grown cell by cell: `size` is only trusted once the fields behind it are there
    let mut constants = Vec::new();
    for i in 0..rows {
        for j in 0..rows {
            let v = field(&values, &format!("m{}_{}", i, j)).ok_or(Error::InvalidMatrixValues)?;
            matrix.push(v);
        }
        let c = field(&values, &format!("c{}", i)).ok_or(Error::InvalidConstantsValues)?;
        constants.push(c);
    }

    Ok(EquationRequest::new(size, matrix, constants))
}

fn field(values: &HashMap<&str, &str>, name: &str) -> Option<f64> {
    values
        .get(name)
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Full round trip of a form submission: decode, solve under the client's deadline, and render
/// the outcome for the user.
pub fn submit<'a, S, I>(client: &SolverClient<S>, fields: I) -> Reply
where
    S: Solver + Send + Sync + 'static,
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let result = parse_form(fields).and_then(|request| {
        client
            .solve_equation(request)
            .and_then(|response| response.into_result())
    });
    Reply::from_result(result)
}
