use approx::assert_relative_eq;
use nalgebra::DVector;

use super::{rhs, swapping_matrix};
use crate::*;

#[test]
fn test_parallel_solves_share_one_solver() {
    let gauss = Gauss::<f64>::default();

    std::thread::scope(|s| {
        let handles: Vec<_> = (1..=16)
            .map(|n| {
                let gauss = &gauss;
                s.spawn(move || {
                    let a = swapping_matrix(n);
                    let expect: Vec<f64> = (0..n).map(|i| (i as f64 + 1.0) / 4.0).collect();
                    let b = rhs(n, &a, &expect);
                    for _ in 0..50 {
                        let x = gauss.solve(n, &a, &b).unwrap();
                        assert_relative_eq!(x, DVector::from_vec(expect.clone()), epsilon = 1e-9);
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }
    });
}
