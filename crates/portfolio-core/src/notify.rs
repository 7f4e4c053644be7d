//! Transient notifications (toasts).
//!
//! Each notification carries its own deadline on the tokio clock; the owner
//! calls [`Notifications::expire`] once the deadline has passed.

use std::time::Duration;

use tokio::time::Instant;

/// Notification severity
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    /// CSS modifier class
    pub fn class(&self) -> &'static str {
        match self {
            NotificationKind::Info => "notification-info",
            NotificationKind::Success => "notification-success",
            NotificationKind::Error => "notification-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    pub expires_at: Instant,
}

/// Notifications currently on screen, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifications {
    items: Vec<Notification>,
    next_id: u64,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notification for `ttl` and return its id
    pub fn push(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        ttl: Duration,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            kind,
            message: message.into(),
            expires_at: Instant::now() + ttl,
        });
        id
    }

    /// Drop every notification whose deadline is at or before `now`.
    /// Returns how many were removed.
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.items.len();
        self.items.retain(|n| n.expires_at > now);
        before - self.items.len()
    }

    /// Remove a notification. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_millis(3000);

    #[test]
    fn test_push_assigns_unique_ids() {
        let mut n = Notifications::new();
        let a = n.push(NotificationKind::Info, "a", TTL);
        let b = n.push(NotificationKind::Error, "b", TTL);
        assert_ne!(a, b);
        assert_eq!(
            n.iter().map(|x| x.message.as_str()).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_dismiss() {
        let mut n = Notifications::new();
        let a = n.push(NotificationKind::Success, "sent", TTL);
        assert!(n.dismiss(a));
        assert!(!n.dismiss(a));
        assert!(n.is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let mut n = Notifications::new();
        let a = n.push(NotificationKind::Info, "a", TTL);
        n.dismiss(a);
        let b = n.push(NotificationKind::Info, "b", TTL);
        assert_ne!(a, b);
    }

    #[test]
    fn test_kind_classes() {
        assert_eq!(NotificationKind::default().class(), "notification-info");
        assert_eq!(NotificationKind::Error.class(), "notification-error");
    }

    #[tokio::test(start_paused = true)]
    async fn test_notification_expires_after_ttl() {
        let mut n = Notifications::new();
        n.push(NotificationKind::Success, "sent", TTL);

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert_eq!(n.expire(Instant::now()), 0);
        assert_eq!(n.len(), 1);

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(n.expire(Instant::now()), 1);
        assert!(n.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_expire_keeps_later_notifications() {
        let mut n = Notifications::new();
        n.push(NotificationKind::Error, "first", TTL);
        tokio::time::sleep(Duration::from_millis(1000)).await;
        n.push(NotificationKind::Info, "second", TTL);

        tokio::time::sleep(Duration::from_millis(2000)).await;
        n.expire(Instant::now());

        let left: Vec<_> = n.iter().map(|x| x.message.as_str()).collect();
        assert_eq!(left, vec!["second"]);
    }
}
