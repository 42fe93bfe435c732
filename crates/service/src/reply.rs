use crate::Error;

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

/// What the user gets to see: a one line message and the HTTP status code that goes with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub message: String,
}

impl Reply {
    /// `Solution: [0.8 1.4]`, components separated by single spaces.
    pub fn solution(solution: &[f64]) -> Self {
        let values: Vec<String> = solution.iter().map(|v| v.to_string()).collect();
        Reply {
            status: STATUS_OK,
            message: format!("Solution: [{}]", values.join(" ")),
        }
    }

    pub fn from_result(result: Result<Vec<f64>, Error>) -> Self {
        match result {
            Ok(solution) => Reply::solution(&solution),
            Err(e) => Reply::from(e),
        }
    }
}

impl From<Error> for Reply {
    fn from(e: Error) -> Self {
        if !e.is_user_error() {
            return Reply {
                status: STATUS_INTERNAL_SERVER_ERROR,
                message: "Error connecting to server".to_string(),
            };
        }

        let message = match e {
            Error::Solver(_) => e.to_string(),
            Error::Gauss(e) => format!("Solver error: {}", e),
            _ => format!("Error: {}", e),
        };
        Reply {
            status: STATUS_BAD_REQUEST,
            message,
        }
    }
}
