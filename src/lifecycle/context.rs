//! The root cancellation scope shared by the coordinator, the watcher and
//! the service.

use tokio_util::sync::CancellationToken;
use tracing::Span;

/// Process-wide handle meaning "the service should keep running".
///
/// Clones share the same cancellation state. Cancelling is one-way and
/// idempotent.
#[derive(Debug, Clone)]
pub struct RootContext {
    token: CancellationToken,
    routine: &'static str,
    span: Span,
}

impl RootContext {
    /// Create a live context tagged with the routine that owns it.
    pub fn new(routine: &'static str) -> Self {
        Self {
            token: CancellationToken::new(),
            routine,
            span: tracing::info_span!("root_context", routine),
        }
    }

    /// Name of the owning routine, for diagnostics.
    pub fn routine(&self) -> &'static str {
        self.routine
    }

    /// Span carrying the routine tag; work done on behalf of this context
    /// runs inside it.
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// The underlying token. Services derive child tokens from it.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Resolves once the context is cancelled.
    pub async fn cancelled(&self) {
        self.token.cancelled().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_is_idempotent() {
        let ctx = RootContext::new("mainRoutine");
        let other = ctx.clone();
        assert!(!ctx.is_cancelled());

        other.cancel();
        other.cancel();
        assert!(ctx.is_cancelled());
        assert_eq!(ctx.routine(), "mainRoutine");
    }

    #[tokio::test]
    async fn test_child_token_follows_root() {
        let ctx = RootContext::new("mainRoutine");
        let child = ctx.token().child_token();
        ctx.cancel();
        child.cancelled().await;
        ctx.cancelled().await;
    }
}
