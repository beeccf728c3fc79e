use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};

use crate::error::CoreError;

pub const GRID_SIDE: usize = 3;
pub const GRID_LEN: usize = GRID_SIDE * GRID_SIDE;

type Grid = [[f64; GRID_SIDE]; GRID_SIDE];

/// One statistic reduced along each axis and over the whole grid.
///
/// Serializes as `[columns, rows, flattened]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    /// Reduced down each column (axis 0).
    pub columns: [f64; GRID_SIDE],
    /// Reduced across each row (axis 1).
    pub rows: [f64; GRID_SIDE],
    pub flattened: f64,
}

impl Serialize for Reduction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.columns)?;
        tuple.serialize_element(&self.rows)?;
        tuple.serialize_element(&self.flattened)?;
        tuple.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub mean: Reduction,
    pub variance: Reduction,
    #[serde(rename = "standard deviation")]
    pub standard_deviation: Reduction,
    pub max: Reduction,
    pub min: Reduction,
    pub sum: Reduction,
}

impl StatsReport {
    /// `(name, reduction)` pairs in report order.
    pub fn entries(&self) -> [(&'static str, &Reduction); 6] {
        [
            ("mean", &self.mean),
            ("variance", &self.variance),
            ("standard deviation", &self.standard_deviation),
            ("max", &self.max),
            ("min", &self.min),
            ("sum", &self.sum),
        ]
    }
}

/// Compute every statistic for exactly nine finite values, read row-major
/// into a 3x3 grid. Variance and standard deviation use `ddof = 0`.
pub fn calculate(values: &[f64]) -> Result<StatsReport, CoreError> {
    if values.len() != GRID_LEN {
        return Err(CoreError::WrongValueCount(values.len()));
    }
    if let Some(bad) = values.iter().copied().find(|v| !v.is_finite()) {
        return Err(CoreError::NonFinite(bad));
    }

    let mut grid: Grid = [[0.0; GRID_SIDE]; GRID_SIDE];
    for (i, v) in values.iter().enumerate() {
        grid[i / GRID_SIDE][i % GRID_SIDE] = *v;
    }

    Ok(StatsReport {
        mean: reduce(&grid, values, mean),
        variance: reduce(&grid, values, variance),
        standard_deviation: reduce(&grid, values, std_dev),
        max: reduce(&grid, values, max),
        min: reduce(&grid, values, min),
        sum: reduce(&grid, values, sum),
    })
}

fn reduce(grid: &Grid, flat: &[f64], f: fn(&[f64]) -> f64) -> Reduction {
    let columns = std::array::from_fn(|c| {
        let column: [f64; GRID_SIDE] = std::array::from_fn(|r| grid[r][c]);
        f(&column)
    });
    let rows = std::array::from_fn(|r| f(&grid[r]));
    Reduction {
        columns,
        rows,
        flattened: f(flat),
    }
}

// Callers guarantee non-empty, finite slices.

fn sum(data: &[f64]) -> f64 {
    data.iter().sum()
}

fn mean(data: &[f64]) -> f64 {
    sum(data) / data.len() as f64
}

fn variance(data: &[f64]) -> f64 {
    let m = mean(data);
    data.iter().map(|x| (x - m).powi(2)).sum::<f64>() / data.len() as f64
}

fn std_dev(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

fn max(data: &[f64]) -> f64 {
    data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

fn min(data: &[f64]) -> f64 {
    data.iter().copied().fold(f64::INFINITY, f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "expected {expected:?}, got {actual:?}");
        }
    }

    #[test]
    fn test_zero_to_eight() {
        let values: Vec<f64> = (0..9).map(f64::from).collect();
        let report = calculate(&values).unwrap();

        assert_close(&report.mean.columns, &[3.0, 4.0, 5.0]);
        assert_close(&report.mean.rows, &[1.0, 4.0, 7.0]);
        assert_close(&[report.mean.flattened], &[4.0]);

        assert_close(&report.variance.columns, &[6.0, 6.0, 6.0]);
        assert_close(&report.variance.rows, &[2.0 / 3.0; 3]);
        assert_close(&[report.variance.flattened], &[60.0 / 9.0]);

        let sd_col = 6f64.sqrt();
        let sd_row = (2.0f64 / 3.0).sqrt();
        assert_close(&report.standard_deviation.columns, &[sd_col; 3]);
        assert_close(&report.standard_deviation.rows, &[sd_row; 3]);
        assert_close(
            &[report.standard_deviation.flattened],
            &[2.581988897471611],
        );

        assert_eq!(report.max.columns, [6.0, 7.0, 8.0]);
        assert_eq!(report.max.rows, [2.0, 5.0, 8.0]);
        assert_eq!(report.max.flattened, 8.0);
        assert_eq!(report.min.columns, [0.0, 1.0, 2.0]);
        assert_eq!(report.min.rows, [0.0, 3.0, 6.0]);
        assert_eq!(report.min.flattened, 0.0);
        assert_eq!(report.sum.columns, [9.0, 12.0, 15.0]);
        assert_eq!(report.sum.rows, [3.0, 12.0, 21.0]);
        assert_eq!(report.sum.flattened, 36.0);
    }

    #[test]
    fn test_unordered_input() {
        let report = calculate(&[9.0, 1.0, 5.0, 3.0, 3.0, 3.0, 2.0, 9.0, 0.0]).unwrap();
        assert_close(&report.mean.columns, &[14.0 / 3.0, 13.0 / 3.0, 8.0 / 3.0]);
        assert_close(&report.mean.rows, &[5.0, 3.0, 11.0 / 3.0]);
        assert_eq!(report.max.columns, [9.0, 9.0, 5.0]);
        assert_eq!(report.min.rows, [1.0, 3.0, 0.0]);
        assert_eq!(report.sum.flattened, 35.0);
    }

    #[test]
    fn test_too_few_values() {
        let err = calculate(&[2.0, 6.0, 2.0, 8.0, 4.0, 0.0, 1.0]).unwrap_err();
        assert_eq!(err.to_string(), "List must contain nine numbers.");
    }

    #[test]
    fn test_too_many_values() {
        let values = [1.0; 10];
        assert!(matches!(
            calculate(&values),
            Err(CoreError::WrongValueCount(10))
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut values = [1.0; 9];
        values[4] = f64::NAN;
        assert!(matches!(calculate(&values), Err(CoreError::NonFinite(_))));
    }

    #[test]
    fn test_json_keys() {
        let values: Vec<f64> = (0..9).map(f64::from).collect();
        let json = serde_json::to_value(calculate(&values).unwrap()).unwrap();
        for key in ["mean", "variance", "standard deviation", "max", "min", "sum"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(
            json["mean"],
            serde_json::json!([[3.0, 4.0, 5.0], [1.0, 4.0, 7.0], 4.0])
        );
        assert_eq!(json["sum"][2], 36.0);
    }

    #[test]
    fn test_entries_order() {
        let report = calculate(&[1.0; 9]).unwrap();
        let names: Vec<&str> = report.entries().iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            ["mean", "variance", "standard deviation", "max", "min", "sum"]
        );
        assert_eq!(report.variance.flattened, 0.0);
    }
}
