//! Entry/exit tracing for public operations.

/// Run `f`, emitting `begin` and `end` debug events tagged with `method`.
///
/// `end` is emitted whether `f` returns `Ok` or `Err`; a panic skips it.
pub(crate) fn traced<T>(method: &'static str, f: impl FnOnce() -> T) -> T {
    tracing::debug!(method, "begin");
    let result = f();
    tracing::debug!(method, "end");
    result
}
