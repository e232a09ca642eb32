//! Pre-sized table of leave-one-out pseudo-estimates
//!
//! Row `i` holds the estimator output on the sample with observation `i`
//! removed. The table is allocated once for `n` rows of `k` columns and every
//! row is validated before it is stored, so the column reductions downstream
//! only ever see complete, finite, rectangular data.

use jackknife_core::{moments, Error, Result};

/// Check one estimator output against the established width
///
/// `omitted_index` is `None` for the full-sample estimate.
pub fn validate_row(row: &[f64], expected: usize, omitted_index: Option<usize>) -> Result<()> {
    if row.len() != expected {
        return Err(Error::contract_violation(omitted_index, expected, row.len()));
    }
    if let Some((column, value)) = row.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        let err = Error::numeric_domain(format!("estimator returned {value}")).in_column(column);
        return Err(match omitted_index {
            Some(i) => err.at_omitted_index(i),
            None => err,
        });
    }
    Ok(())
}

/// Row-major `n x k` table of pseudo-estimates
#[derive(Debug, Clone, PartialEq)]
pub struct PseudoEstimateTable {
    n_rows: usize,
    n_columns: usize,
    values: Vec<f64>,
    filled: Vec<bool>,
}

impl PseudoEstimateTable {
    /// Allocate an empty table for `n_rows` omitted observations and
    /// `n_columns` parameters
    pub fn new(n_rows: usize, n_columns: usize) -> Self {
        Self {
            n_rows,
            n_columns,
            values: vec![0.0; n_rows * n_columns],
            filled: vec![false; n_rows],
        }
    }

    /// Store the pseudo-estimate for `omitted_index`
    ///
    /// Fails with a contract violation if the row has the wrong width, a
    /// numeric domain error if any value is not finite, and invalid input if
    /// the index is out of range or already filled.
    pub fn insert(&mut self, omitted_index: usize, row: &[f64]) -> Result<()> {
        if omitted_index >= self.n_rows {
            return Err(Error::InvalidInput(format!(
                "omitted index {omitted_index} out of range for {} rows",
                self.n_rows
            )));
        }
        if self.filled[omitted_index] {
            return Err(Error::InvalidInput(format!(
                "row {omitted_index} already inserted"
            )));
        }
        validate_row(row, self.n_columns, Some(omitted_index))?;

        let start = omitted_index * self.n_columns;
        self.values[start..start + self.n_columns].copy_from_slice(row);
        self.filled[omitted_index] = true;
        Ok(())
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_columns(&self) -> usize {
        self.n_columns
    }

    /// Whether every row has been inserted
    pub fn is_complete(&self) -> bool {
        self.filled.iter().all(|&f| f)
    }

    /// The pseudo-estimate for `omitted_index`, if it has been inserted
    pub fn row(&self, omitted_index: usize) -> Option<&[f64]> {
        if omitted_index < self.n_rows && self.filled[omitted_index] {
            let start = omitted_index * self.n_columns;
            Some(&self.values[start..start + self.n_columns])
        } else {
            None
        }
    }

    /// Iterate over inserted rows as `(omitted_index, row)`
    pub fn rows(&self) -> impl Iterator<Item = (usize, &[f64])> + '_ {
        (0..self.n_rows).filter_map(move |i| self.row(i).map(|row| (i, row)))
    }

    /// Copy out one parameter column
    pub fn column(&self, column: usize) -> Option<Vec<f64>> {
        if column >= self.n_columns {
            return None;
        }
        Some(
            self.values
                .iter()
                .skip(column)
                .step_by(self.n_columns)
                .copied()
                .collect(),
        )
    }

    fn require_complete(&self) -> Result<()> {
        if self.is_complete() {
            Ok(())
        } else {
            let missing = self.filled.iter().filter(|&&f| !f).count();
            Err(Error::InvalidInput(format!(
                "pseudo-estimate table is missing {missing} of {} rows",
                self.n_rows
            )))
        }
    }

    /// Mean of each column
    pub fn column_means(&self) -> Result<Vec<f64>> {
        self.require_complete()?;
        (0..self.n_columns)
            .map(|j| {
                self.column(j)
                    .and_then(|values| moments::mean(&values))
                    .ok_or_else(|| Error::too_few_observations(1, self.n_rows))
            })
            .collect()
    }

    /// Unbiased variance (divides by `n - 1`) of each column
    pub fn column_variances(&self) -> Result<Vec<f64>> {
        self.require_complete()?;
        (0..self.n_columns)
            .map(|j| {
                self.column(j)
                    .and_then(|values| moments::variance(&values))
                    .ok_or_else(|| Error::too_few_observations(2, self.n_rows))
            })
            .collect()
    }
}
