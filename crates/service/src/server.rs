use gauss::{Gauss, LinearSolver};
use log::{debug, info};
use nalgebra::DVector;

use crate::{EquationRequest, EquationResponse, Error, ServiceConfig};

/// The remote-procedure interface: one request in, one response out.
pub trait Solver {
    fn solve_equation(&self, request: &EquationRequest) -> EquationResponse;
}

/// Answers [`EquationRequest`]s with a [`LinearSolver`]. Stateless between calls.
#[derive(Clone, Debug)]
pub struct SolverServer<LS> {
    solver: LS,
}

impl SolverServer<Gauss<f64>> {
    pub fn from_config(config: &ServiceConfig) -> Self {
        SolverServer::new(Gauss::new(config.solver))
    }
}

impl<LS> SolverServer<LS>
where
    LS: LinearSolver<f64>,
{
    pub fn new(solver: LS) -> Self {
        SolverServer { solver }
    }

    /// Solves a request in-process. A negative `size` is reported as a dimension mismatch.
    pub fn solve(&self, request: &EquationRequest) -> Result<DVector<f64>, Error> {
        let size = usize::try_from(request.size).unwrap_or(0);
        let x = self
            .solver
            .solve(size, &request.matrix, &request.constants)?;
        Ok(x)
    }

    /// Decodes a JSON [`EquationRequest`], solves it and encodes the JSON [`EquationResponse`].
    pub fn handle(&self, body: &str) -> Result<String, Error> {
        let request: EquationRequest = serde_json::from_str(body)?;
        let response = self.solve_equation(&request);
        Ok(serde_json::to_string(&response)?)
    }
}

impl<LS> Solver for SolverServer<LS>
where
    LS: LinearSolver<f64>,
{
    fn solve_equation(&self, request: &EquationRequest) -> EquationResponse {
        tracing::trace!("SolverServer::solve_equation(size={})", request.size);
        match self.solve(request) {
            Ok(x) => {
                info!("Solution: {:?}", x.as_slice());
                EquationResponse::solved(x.as_slice().to_vec())
            }
            Err(e) => {
                debug!("solve failed: {}", e);
                EquationResponse::failed(e)
            }
        }
    }
}
