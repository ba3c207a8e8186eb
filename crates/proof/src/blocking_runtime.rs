//! A blocking runtime for futures, so that the asynchronous step can run to completion inside a
//! deterministic environment that has no threads and no clock.

use alloc::boxed::Box;
use core::{
    future::Future,
    task::{Context, Poll, RawWaker, RawWakerVTable, Waker},
};

/// Busy waits on a future until it is ready, polling it with a no-op waker in a thread-blocking
/// loop. Every oracle in the step program resolves without yielding to an external reactor, so the
/// loop never spins more than the future needs to make progress.
pub fn block_on<T>(f: impl Future<Output = T>) -> T {
    let mut f = Box::pin(f);

    fn noop_clone(_: *const ()) -> RawWaker {
        noop_raw_waker()
    }
    const fn noop(_: *const ()) {}
    fn noop_raw_waker() -> RawWaker {
        let vtable = &RawWakerVTable::new(noop_clone, noop, noop, noop);
        RawWaker::new(core::ptr::null(), vtable)
    }
    // SAFETY: every vtable entry ignores the data pointer, so a null pointer is never dereferenced.
    let waker = unsafe { Waker::from_raw(noop_raw_waker()) };
    let mut context = Context::from_waker(&waker);

    loop {
        if let Poll::Ready(v) = f.as_mut().poll(&mut context) {
            return v;
        }
    }
}
