/// Continuation-passing for any result.
///
/// Every statistic returns its value directly; `pipe` is the separate
/// entry point for callers who'd rather hand the value to a callback.  The
/// callback runs immediately and its result is returned.
///
/// ```
/// # use gauss_vector::*;
/// let v = vector![1, 2, 3];
/// let msg = v.sum().pipe(|sum| format!("sum = {}", sum));
/// assert_eq!(msg, "sum = 6");
/// ```
pub trait Pipe: Sized {
    fn pipe<R>(self, f: impl FnOnce(Self) -> R) -> R {
        f(self)
    }
}

impl<T> Pipe for T {}
