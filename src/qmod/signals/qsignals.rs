use num_traits::Float;

/// Periodic square-law test signal
///
/// `x(t) = (t mod T)^2`, a parabola restarting every period `T`.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QSignal<T: Float>
{
    period: T
}

impl<T: Float> QSignal<T>
{
    /// CREATE NEW QSIGNAL
    ///
    /// # Args
    /// -----
    ///
    /// `period`: signal period T (must be > 0, checked by the caller)
    ///
    pub fn new(period: T) -> Self {
        Self { period }
    }

    pub fn period(&self) -> T {
        self.period
    }

    /// Signal value at time `t`
    ///
    pub fn sample(&self, t: T) -> T {
        periodic_square(t, self.period)
    }

    /// GENERATE SIGNAL TO VEC
    ///
    /// Evaluate the signal at every time stamp
    ///
    /// # Args
    /// -----
    ///
    /// `times`: time stamps in seconds
    ///
    /// # Return
    /// --------
    ///
    /// `Vec<T>` with one value per time stamp
    ///
    pub fn signal_to_vec(&self, times: &[T]) -> Vec<T> {
        times.iter().map(|&t| self.sample(t)).collect::<Vec<T>>()
    }
}

/// Mathematical modulo: result in `[0, period)` for any sign of `t`.
///
#[inline]
pub fn wrap_phase<T: Float>(t: T, period: T) -> T {
    let r = t % period;
    let wrapped = if r < T::zero() { r + period } else { r };
    // r + period rounds up to period when r is a tiny negative value
    if wrapped >= period { T::zero() } else { wrapped }
}

#[inline]
pub fn periodic_square<T: Float>(t: T, period: T) -> T {
    let tt = wrap_phase(t, period);
    tt * tt
}
