//! Requested vs. granted privacy inclusion.

/// Whether to warn that private moments were asked for but withheld.
///
/// `granted` is the server's `includes_private`. Asking for public moments
/// only never warns.
pub fn reconcile(requested: bool, granted: bool) -> bool {
    requested && !granted
}
