//! Sample autocorrelation (ACF) and partial autocorrelation (PACF).
//!
//! ACF uses the biased (divide-by-n) autocovariance. PACF is the
//! Durbin–Levinson recursion over that ACF, i.e. the Yule–Walker estimate.
//! NaN values are dropped before either is computed.

/// z-score of the two-sided 95% band drawn around zero.
const Z_95: f64 = 1.959_963_984_540_054;

/// Sample ACF for lags `0..=nlags` (lag 0 is always 1).
///
/// Returns an empty vector when fewer than two finite values remain or the
/// series has zero variance.
pub fn acf(values: &[f64], nlags: usize) -> Vec<f64> {
    let clean: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let n = clean.len();
    if n < 2 {
        return Vec::new();
    }

    let mean = clean.iter().sum::<f64>() / n as f64;
    let centered: Vec<f64> = clean.iter().map(|v| v - mean).collect();
    let c0 = centered.iter().map(|v| v * v).sum::<f64>() / n as f64;
    if c0 <= 0.0 || !c0.is_finite() {
        return Vec::new();
    }

    let max_lag = nlags.min(n - 1);
    (0..=max_lag)
        .map(|k| {
            let ck = centered[..n - k]
                .iter()
                .zip(&centered[k..])
                .map(|(a, b)| a * b)
                .sum::<f64>()
                / n as f64;
            ck / c0
        })
        .collect()
}

/// Sample PACF for lags `0..=nlags` via Durbin–Levinson.
///
/// The recursion stops early (shorter output) if it becomes singular.
pub fn pacf(values: &[f64], nlags: usize) -> Vec<f64> {
    let r = acf(values, nlags);
    if r.len() < 2 {
        return r;
    }

    let mut out = vec![1.0, r[1]];
    let mut phi = vec![r[1]];
    for k in 2..r.len() {
        let num = r[k] - (1..k).map(|j| phi[j - 1] * r[k - j]).sum::<f64>();
        let den = 1.0 - (1..k).map(|j| phi[j - 1] * r[j]).sum::<f64>();
        if den.abs() < 1e-12 {
            break;
        }
        let phi_kk = num / den;
        let mut next: Vec<f64> = (1..k).map(|j| phi[j - 1] - phi_kk * phi[k - j - 1]).collect();
        next.push(phi_kk);
        phi = next;
        out.push(phi_kk);
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelogramKind {
    Acf,
    Pacf,
}

impl CorrelogramKind {
    pub fn label(self) -> &'static str {
        match self {
            CorrelogramKind::Acf => "ACF",
            CorrelogramKind::Pacf => "PACF",
        }
    }
}

/// Correlogram ready for plotting: lag 0 omitted, 95% band around zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Correlogram {
    pub kind: CorrelogramKind,
    pub lags: Vec<usize>,
    pub values: Vec<f64>,
    /// Half-width of the band at each lag.
    pub band: Vec<f64>,
}

/// Build an ACF or PACF correlogram for lags `1..=nlags`.
///
/// ACF bands widen with Bartlett's formula; PACF bands are `1.96 / sqrt(n)`.
/// PACF lags are capped below `n / 2`. Returns `None` if nothing can be
/// estimated.
pub fn correlogram(values: &[f64], nlags: usize, kind: CorrelogramKind) -> Option<Correlogram> {
    let n = values.iter().filter(|v| v.is_finite()).count();
    let full = match kind {
        CorrelogramKind::Acf => acf(values, nlags),
        CorrelogramKind::Pacf => pacf(values, nlags.min((n / 2).saturating_sub(1))),
    };
    if full.len() < 2 {
        return None;
    }

    let nf = n as f64;
    let lags: Vec<usize> = (1..full.len()).collect();
    let band = match kind {
        CorrelogramKind::Acf => {
            let mut cumulative = 0.0;
            lags.iter()
                .map(|&k| {
                    if k > 1 {
                        cumulative += full[k - 1] * full[k - 1];
                    }
                    Z_95 * ((1.0 + 2.0 * cumulative) / nf).sqrt()
                })
                .collect()
        }
        CorrelogramKind::Pacf => vec![Z_95 / nf.sqrt(); lags.len()],
    };

    Some(Correlogram {
        kind,
        values: full[1..].to_vec(),
        lags,
        band,
    })
}
