//! Reusable buffers for building leave-one-out sub-samples
//!
//! Each thread keeps one buffer of capacity `n - 1` and refills it for every
//! omitted index, so a jackknife run allocates once per worker thread instead
//! of once per row.

use std::cell::RefCell;

thread_local! {
    static LEAVE_ONE_OUT: RefCell<Vec<f64>> = const { RefCell::new(Vec::new()) };
}

/// Copy `sample` without the element at `omitted` into `buffer`
pub fn fill_leave_one_out(sample: &[f64], omitted: usize, buffer: &mut Vec<f64>) {
    debug_assert!(omitted < sample.len(), "Index {omitted} out of bounds");
    buffer.clear();
    buffer.extend_from_slice(&sample[..omitted]);
    buffer.extend_from_slice(&sample[omitted + 1..]);
}

/// Run `f` on `sample` with observation `omitted` removed
///
/// Uses the calling thread's buffer. A nested call from inside `f` (an
/// estimator that itself runs a jackknife) gets a fresh allocation instead.
pub fn with_leave_one_out<R>(sample: &[f64], omitted: usize, f: impl FnOnce(&[f64]) -> R) -> R {
    let mut f = Some(f);
    let reused = LEAVE_ONE_OUT.with(|cell| {
        let mut buffer = cell.try_borrow_mut().ok()?;
        fill_leave_one_out(sample, omitted, &mut buffer);
        f.take().map(|f| f(&buffer))
    });
    match (reused, f) {
        (Some(result), _) => result,
        (None, Some(f)) => {
            let mut buffer = Vec::with_capacity(sample.len().saturating_sub(1));
            fill_leave_one_out(sample, omitted, &mut buffer);
            f(&buffer)
        }
        (None, None) => unreachable!("closure consumed without producing a result"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_leave_one_out() {
        let sample = [1.0, 2.0, 3.0, 4.0];
        let mut buffer = Vec::new();

        fill_leave_one_out(&sample, 0, &mut buffer);
        assert_eq!(buffer, vec![2.0, 3.0, 4.0]);

        fill_leave_one_out(&sample, 2, &mut buffer);
        assert_eq!(buffer, vec![1.0, 2.0, 4.0]);

        fill_leave_one_out(&sample, 3, &mut buffer);
        assert_eq!(buffer, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_with_leave_one_out() {
        let sample = [5.0, 6.0, 7.0];
        let sums: Vec<f64> = (0..3)
            .map(|i| with_leave_one_out(&sample, i, |sub| sub.iter().sum()))
            .collect();
        assert_eq!(sums, vec![13.0, 12.0, 11.0]);
    }

    #[test]
    fn test_nested_calls_do_not_panic() {
        let outer = [1.0, 2.0, 3.0];
        let inner = [10.0, 20.0];
        let result = with_leave_one_out(&outer, 0, |sub| {
            let nested = with_leave_one_out(&inner, 1, |nested| nested.to_vec());
            (sub.to_vec(), nested)
        });
        assert_eq!(result, (vec![2.0, 3.0], vec![10.0]));
    }
}
