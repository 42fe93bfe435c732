use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        mpsc, Arc,
    },
    thread,
    time::Duration,
};

use log::warn;

use crate::{EquationRequest, EquationResponse, Error, Solver};

/// Workers allowed to run at once, across all clones of a client.
pub const DEFAULT_MAX_IN_FLIGHT: usize = 64;

/// Calls a [`Solver`] under a per-call deadline.
///
/// Each call runs on its own worker thread. The solver has no notion of cancellation, so a call
/// that outlives its deadline is left to finish and its answer is dropped. Such workers still
/// count against `max_in_flight` until they return; once the limit is reached new calls fail
/// with [`Error::Busy`] instead of spawning.
#[derive(Debug)]
pub struct SolverClient<S> {
    solver: Arc<S>,
    deadline: Duration,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: usize,
}

impl<S> Clone for SolverClient<S> {
    fn clone(&self) -> Self {
        SolverClient {
            solver: Arc::clone(&self.solver),
            deadline: self.deadline,
            in_flight: Arc::clone(&self.in_flight),
            max_in_flight: self.max_in_flight,
        }
    }
}

/// One running worker. Dropped when the worker returns, unwinds, or never got spawned.
struct InFlight(Arc<AtomicUsize>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

impl<S> SolverClient<S>
where
    S: Solver + Send + Sync + 'static,
{
    pub fn new(solver: Arc<S>, deadline: Duration) -> Self {
        SolverClient {
            solver,
            deadline,
            in_flight: Arc::new(AtomicUsize::new(0)),
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
        }
    }

    /// Limits the number of workers running at once. A limit of 0 is taken as 1.
    pub fn with_max_in_flight(mut self, max_in_flight: usize) -> Self {
        self.max_in_flight = max_in_flight.max(1);
        self
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Workers currently running, including those whose caller already gave up on them.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn solve_equation(&self, request: EquationRequest) -> Result<EquationResponse, Error> {
        let guard = self.acquire()?;
        let (tx, rx) = mpsc::channel();
        let solver = Arc::clone(&self.solver);

        thread::Builder::new()
            .name("solver".to_string())
            .spawn(move || {
                let tx = tx;
                // the slot is given back before the answer (or the unwind) reaches the caller
                let response = {
                    let _guard = guard;
                    solver.solve_equation(&request)
                };
                // the receiver is gone if the deadline already passed
                let _ = tx.send(response);
            })
            .map_err(Error::Spawn)?;

        rx.recv_timeout(self.deadline).map_err(|e| match e {
            mpsc::RecvTimeoutError::Timeout => {
                warn!("solve exceeded deadline of {:?}, discarding result", self.deadline);
                Error::DeadlineExceeded {
                    deadline: self.deadline,
                }
            }
            mpsc::RecvTimeoutError::Disconnected => Error::Disconnected,
        })
    }

    fn acquire(&self) -> Result<InFlight, Error> {
        let prev = self.in_flight.fetch_add(1, Ordering::AcqRel);
        let guard = InFlight(Arc::clone(&self.in_flight));
        if prev >= self.max_in_flight {
            warn!("{} solves already in flight, rejecting call", prev);
            return Err(Error::Busy {
                limit: self.max_in_flight,
            });
        }
        Ok(guard)
    }

    /// Solves `A·x = b` remotely, `matrix` in row-major order.
    pub fn solve(&self, size: i32, matrix: Vec<f64>, constants: Vec<f64>) -> Result<Vec<f64>, Error> {
        self.solve_equation(EquationRequest::new(size, matrix, constants))?
            .into_result()
    }
}
