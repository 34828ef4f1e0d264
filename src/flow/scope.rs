//! Structured task scopes for features and attached views.

use std::future::Future;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Owns the lifetime of every task a feature or view spawns.
///
/// Cancelling a scope cancels all of its children; cancelling a child
/// leaves the parent running. Tasks observe cancellation cooperatively at
/// their next suspension point.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    token: CancellationToken,
}

impl Scope {
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Create a child scope, cancelled together with this one.
    pub fn child(&self) -> Scope {
        Scope {
            token: self.token.child_token(),
        }
    }

    /// Signal cancellation to this scope and all of its children.
    pub fn cancel(&self) {
        if !self.token.is_cancelled() {
            tracing::debug!("Scope cancelled");
            self.token.cancel();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Completes once the scope (or any ancestor) is cancelled.
    pub async fn cancelled(&self) {
        self.token.cancelled().await;
    }

    /// Spawn `fut` as a child task. It is dropped at the next suspension
    /// point after cancellation, yielding `None`.
    pub fn spawn<F>(&self, fut: F) -> JoinHandle<Option<F::Output>>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let token = self.token.clone();
        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => None,
                out = fut => Some(out),
            }
        })
    }

    /// Tie the scope's lifetime to the returned guard.
    pub fn guard(&self) -> ScopeGuard {
        ScopeGuard {
            scope: self.clone(),
        }
    }
}

/// Cancels its scope when dropped (screen teardown).
#[must_use = "dropping the guard cancels the scope immediately"]
pub struct ScopeGuard {
    scope: Scope,
}

impl ScopeGuard {
    pub fn scope(&self) -> &Scope {
        &self.scope
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        self.scope.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn cancelling_parent_cancels_child() {
        let parent = Scope::new();
        let child = parent.child();
        parent.cancel();
        assert!(child.is_cancelled());
        tokio::time::timeout(Duration::from_secs(1), child.cancelled())
            .await
            .expect("child observes parent cancellation");
    }

    #[tokio::test]
    async fn cancelling_child_keeps_parent() {
        let parent = Scope::new();
        let child = parent.child();
        child.cancel();
        assert!(child.is_cancelled());
        assert!(!parent.is_cancelled());
    }

    #[tokio::test]
    async fn spawned_task_is_dropped_on_cancel() {
        let scope = Scope::new();
        let handle = scope.spawn(async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            1
        });
        scope.cancel();
        let out = handle.await.expect("task joins");
        assert_eq!(out, None);
    }

    #[tokio::test]
    async fn spawned_task_completes_normally() {
        let scope = Scope::new();
        let out = scope.spawn(async { 7 }).await.expect("task joins");
        assert_eq!(out, Some(7));
    }

    #[test]
    fn guard_cancels_on_drop() {
        let scope = Scope::new();
        let guard = scope.guard();
        assert!(!guard.scope().is_cancelled());
        drop(guard);
        assert!(scope.is_cancelled());
    }
}
