use serde::{Deserialize, Serialize};

use crate::Error;

/// A single solve request as it travels over the wire.
///
/// `matrix` is row-major: `matrix[row * size + col]`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquationRequest {
    pub size: i32,
    pub matrix: Vec<f64>,
    pub constants: Vec<f64>,
}

/// Answer to an [`EquationRequest`].
///
/// Exactly one of the fields is meaningful: a non-empty `error` is authoritative over whatever
/// `solution` holds, an empty `error` means `solution` is the result.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquationResponse {
    pub solution: Vec<f64>,
    pub error: String,
}

impl EquationRequest {
    pub fn new(size: i32, matrix: Vec<f64>, constants: Vec<f64>) -> Self {
        EquationRequest {
            size,
            matrix,
            constants,
        }
    }
}

impl EquationResponse {
    pub fn solved(solution: Vec<f64>) -> Self {
        EquationResponse {
            solution,
            error: String::new(),
        }
    }

    pub fn failed(error: impl ToString) -> Self {
        EquationResponse {
            solution: Vec::new(),
            error: error.to_string(),
        }
    }

    pub fn into_result(self) -> Result<Vec<f64>, Error> {
        if self.error.is_empty() {
            Ok(self.solution)
        } else {
            Err(Error::Solver(self.error))
        }
    }
}
