use tracing::debug;

/// A before-hook as seen by generated registration code
///
/// Returning `false` rejects the request: no later hook and no handler run.
pub trait BeforeHook<C: ?Sized> {
    fn before(&self, ctx: &mut C) -> bool;
}

impl<C: ?Sized, F> BeforeHook<C> for F
where
    F: Fn(&mut C) -> bool,
{
    fn before(&self, ctx: &mut C) -> bool {
        self(ctx)
    }
}

/// Run `hooks` in order, then `handler` if every hook accepted.
///
/// `hooks` must be ordered outermost first, as returned by
/// [`super::hook_chain`]. Returns `true` if the handler ran.
pub fn run_with_hooks<C: ?Sized>(
    hooks: &[&dyn BeforeHook<C>],
    ctx: &mut C,
    handler: impl FnOnce(&mut C),
) -> bool {
    for (idx, hook) in hooks.iter().enumerate() {
        if !hook.before(ctx) {
            debug!(hook_idx = idx, "before hook rejected request");
            return false;
        }
    }
    handler(ctx);
    true
}
