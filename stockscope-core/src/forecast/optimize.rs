//! Deterministic Nelder–Mead simplex minimiser.
//!
//! Non-finite objective values are treated as `+∞`, so callers can wall off
//! infeasible regions by returning `f64::INFINITY`.

#[derive(Debug, Clone, Copy)]
pub struct NelderMead {
    pub max_iterations: usize,
    /// Relative spread of objective values across the simplex at which the
    /// search stops.
    pub tolerance: f64,
}

impl Default for NelderMead {
    fn default() -> Self {
        Self {
            max_iterations: 5_000,
            tolerance: 1e-10,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Minimum {
    pub point: Vec<f64>,
    pub value: f64,
    pub iterations: usize,
    pub converged: bool,
}

const REFLECT: f64 = 1.0;
const EXPAND: f64 = 2.0;
const CONTRACT: f64 = 0.5;
const SHRINK: f64 = 0.5;

impl NelderMead {
    /// Minimise `objective` from `start`, with an initial simplex offset by
    /// `steps` along each axis.
    pub fn minimize<F>(&self, objective: F, start: &[f64], steps: &[f64]) -> Minimum
    where
        F: Fn(&[f64]) -> f64,
    {
        let eval = |x: &[f64]| {
            let v = objective(x);
            if v.is_finite() {
                v
            } else {
                f64::INFINITY
            }
        };

        let n = start.len();
        let mut simplex: Vec<(Vec<f64>, f64)> = Vec::with_capacity(n + 1);
        simplex.push((start.to_vec(), eval(start)));
        for i in 0..n {
            let mut x = start.to_vec();
            x[i] += steps.get(i).copied().unwrap_or(0.1);
            let fx = eval(&x);
            simplex.push((x, fx));
        }

        let mut iterations = 0;
        let mut converged = false;
        loop {
            simplex.sort_by(|a, b| a.1.total_cmp(&b.1));
            let best = simplex[0].1;
            let worst = simplex[n].1;
            if best.is_finite() && (worst - best).abs() <= self.tolerance * (best.abs() + self.tolerance)
            {
                converged = true;
                break;
            }
            if iterations >= self.max_iterations {
                break;
            }
            iterations += 1;

            let centroid: Vec<f64> = (0..n)
                .map(|j| simplex[..n].iter().map(|(x, _)| x[j]).sum::<f64>() / n as f64)
                .collect();
            let toward = |from: &[f64], coef: f64| -> Vec<f64> {
                centroid
                    .iter()
                    .zip(from)
                    .map(|(c, x)| c + coef * (x - c))
                    .collect()
            };

            let reflected = toward(&simplex[n].0, -REFLECT);
            let f_reflected = eval(&reflected);

            if f_reflected < best {
                let expanded = toward(&reflected, EXPAND);
                let f_expanded = eval(&expanded);
                simplex[n] = if f_expanded < f_reflected {
                    (expanded, f_expanded)
                } else {
                    (reflected, f_reflected)
                };
                continue;
            }

            if f_reflected < simplex[n - 1].1 {
                simplex[n] = (reflected, f_reflected);
                continue;
            }

            let (contracted, f_contracted, accept) = if f_reflected < worst {
                let c = toward(&reflected, CONTRACT);
                let fc = eval(&c);
                let ok = fc <= f_reflected;
                (c, fc, ok)
            } else {
                let c = toward(&simplex[n].0, CONTRACT);
                let fc = eval(&c);
                let ok = fc < worst;
                (c, fc, ok)
            };
            if accept {
                simplex[n] = (contracted, f_contracted);
                continue;
            }

            let anchor = simplex[0].0.clone();
            for vertex in simplex.iter_mut().skip(1) {
                let shrunk: Vec<f64> = anchor
                    .iter()
                    .zip(&vertex.0)
                    .map(|(a, x)| a + SHRINK * (x - a))
                    .collect();
                let f_shrunk = eval(&shrunk);
                *vertex = (shrunk, f_shrunk);
            }
        }

        let (point, value) = simplex.swap_remove(0);
        Minimum {
            point,
            value,
            iterations,
            converged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_quadratic_minimum() {
        let nm = NelderMead::default();
        let min = nm.minimize(
            |x| (x[0] - 3.0).powi(2) + (x[1] + 1.0).powi(2) + 2.0,
            &[0.0, 0.0],
            &[0.5, 0.5],
        );
        assert!(min.converged);
        assert!((min.point[0] - 3.0).abs() < 1e-3);
        assert!((min.point[1] + 1.0).abs() < 1e-3);
        assert!((min.value - 2.0).abs() < 1e-6);
    }

    #[test]
    fn respects_infinite_walls() {
        // Unconstrained minimum at x = 2 lies outside the feasible x < 1.
        let nm = NelderMead::default();
        let min = nm.minimize(
            |x| if x[0] >= 1.0 { f64::INFINITY } else { (x[0] - 2.0).powi(2) },
            &[0.0],
            &[0.1],
        );
        assert!(min.point[0] < 1.0);
        assert!(min.point[0] > 0.99);
    }

    #[test]
    fn reports_non_convergence_when_everything_is_infeasible() {
        let nm = NelderMead {
            max_iterations: 50,
            tolerance: 1e-10,
        };
        let min = nm.minimize(|_| f64::NAN, &[0.0, 0.0], &[0.1, 0.1]);
        assert!(!min.converged);
        assert_eq!(min.iterations, 50);
        assert!(min.value.is_infinite());
    }

    #[test]
    fn is_deterministic() {
        let nm = NelderMead::default();
        let f = |x: &[f64]| (x[0] - 1.0).powi(4) + (x[0] * x[1] - 2.0).powi(2);
        let a = nm.minimize(f, &[0.3, 0.3], &[0.2, 0.2]);
        let b = nm.minimize(f, &[0.3, 0.3], &[0.2, 0.2]);
        assert_eq!(a, b);
    }
}
