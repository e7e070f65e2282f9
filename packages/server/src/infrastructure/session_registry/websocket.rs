//! WebSocket を使った SessionRegistry 実装
//!
//! ## 責務
//!
//! - 接続中のセッションと、その `UnboundedSender` を管理
//! - セッションへのペイロード送信（push_to, broadcast）
//!
//! ## 設計ノート
//!
//! WebSocket の生成と実際のソケット書き込みは UI 層（`ui/handler/websocket.rs`）で
//! 行われます。この実装は生成された `UnboundedSender` を受け取り、キューへの投入だけを
//! 行います。キュー投入は待ちが発生しないため、遅いクライアントが他のセッションへの
//! 配信を止めることはありません。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    BroadcastReport, DeliveryError, PusherChannel, Session, SessionId, SessionRegistry,
};

struct RegisteredSession {
    session: Session,
    channel: PusherChannel,
}

/// WebSocket を使った SessionRegistry 実装
///
/// ## 使用例
///
/// ```ignore
/// let registry = WebSocketSessionRegistry::new();
/// let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
/// registry.register(session, tx).await;
///
/// // 全セッションに送信
/// registry.broadcast("{\"user\":\"alice\",\"text\":\"hi\"}").await;
/// ```
#[derive(Default)]
pub struct WebSocketSessionRegistry {
    /// 接続中のセッション
    ///
    /// Key: SessionId
    /// Value: Session と PusherChannel
    sessions: Mutex<HashMap<SessionId, RegisteredSession>>,
}

impl WebSocketSessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRegistry for WebSocketSessionRegistry {
    async fn register(&self, session: Session, channel: PusherChannel) {
        let session_id = session.id;
        let label = session.label();
        let mut sessions = self.sessions.lock().await;
        sessions.insert(session_id, RegisteredSession { session, channel });
        tracing::debug!(
            "Session '{}' registered ({} open)",
            label,
            sessions.len()
        );
    }

    async fn unregister(&self, session_id: &SessionId) -> bool {
        let mut sessions = self.sessions.lock().await;
        let removed = sessions.remove(session_id).is_some();
        if removed {
            tracing::debug!(
                "Session '{}' unregistered ({} open)",
                session_id,
                sessions.len()
            );
        }
        removed
    }

    async fn push_to(&self, session_id: &SessionId, payload: &str) -> Result<(), DeliveryError> {
        let sessions = self.sessions.lock().await;

        let registered = sessions
            .get(session_id)
            .ok_or(DeliveryError::SessionNotFound(*session_id))?;
        registered
            .channel
            .send(payload.to_string())
            .map_err(|_| DeliveryError::ChannelClosed(*session_id))?;
        tracing::debug!("Pushed payload to session '{}'", session_id);
        Ok(())
    }

    async fn broadcast(&self, payload: &str) -> BroadcastReport {
        let mut sessions = self.sessions.lock().await;
        let mut report = BroadcastReport::default();

        for (session_id, registered) in sessions.iter() {
            // 送信失敗はそのセッションの切断として扱い、他のセッションへの配信は続ける
            if registered.channel.send(payload.to_string()).is_err() {
                report.dropped.push(*session_id);
            } else {
                report.delivered.push(*session_id);
            }
        }

        for session_id in &report.dropped {
            sessions.remove(session_id);
            tracing::warn!(
                "Session '{}' transport failed during broadcast, removed from registry",
                session_id
            );
        }

        tracing::debug!(
            "Broadcasted payload to {} session(s), dropped {}",
            report.delivered.len(),
            report.dropped.len()
        );
        report
    }

    async fn sessions(&self) -> Vec<Session> {
        let sessions = self.sessions.lock().await;
        let mut list: Vec<Session> = sessions
            .values()
            .map(|registered| registered.session.clone())
            .collect();
        list.sort_by_key(|session| session.connected_at);
        list
    }

    async fn count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{IdentityToken, Timestamp};
    use tokio::sync::mpsc;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - WebSocketSessionRegistry の登録・解除
    // - push_to: 特定のセッションへの送信
    // - broadcast: 全セッションへの送信と失敗セッションの除去
    //
    // 【なぜこのテストが必要か】
    // - Registry は UseCase から呼ばれる配信経路の中核
    // - 送信に失敗したセッションが他のセッションへの配信を妨げないことを保証する
    //
    // 【どのようなシナリオをテストするか】
    // 1. push_to の成功ケース / 未登録セッション / 切断済みセッション
    // 2. broadcast の成功ケース（送信者を含む全セッション）
    // 3. broadcast の部分失敗ケース（一部のセッションの受信側が閉じている）
    // 4. unregister の冪等性
    // ========================================

    fn create_session(connected_at: i64) -> Session {
        Session::new(SessionId::generate(), None, Timestamp::new(connected_at))
    }

    #[tokio::test]
    async fn test_push_to_success() {
        // テスト項目: 特定のセッションにペイロードを送信できる
        // given (前提条件):
        let registry = WebSocketSessionRegistry::new();
        let session = create_session(1000);
        let session_id = session.id;
        let (tx, mut rx) = mpsc::unbounded_channel();
        registry.register(session, tx).await;

        // when (操作):
        let result = registry.push_to(&session_id, "Hello").await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(rx.recv().await, Some("Hello".to_string()));
    }

    #[tokio::test]
    async fn test_push_to_session_not_found() {
        // テスト項目: 未登録のセッションへの送信はエラーを返す
        // given (前提条件):
        let registry = WebSocketSessionRegistry::new();
        let session_id = SessionId::generate();

        // when (操作):
        let result = registry.push_to(&session_id, "Hello").await;

        // then (期待する結果):
        assert_eq!(result, Err(DeliveryError::SessionNotFound(session_id)));
    }

    #[tokio::test]
    async fn test_push_to_closed_channel() {
        // テスト項目: 受信側が閉じたセッションへの送信はエラーを返す
        // given (前提条件):
        let registry = WebSocketSessionRegistry::new();
        let session = create_session(1000);
        let session_id = session.id;
        let (tx, rx) = mpsc::unbounded_channel();
        registry.register(session, tx).await;
        drop(rx);

        // when (操作):
        let result = registry.push_to(&session_id, "Hello").await;

        // then (期待する結果):
        assert_eq!(result, Err(DeliveryError::ChannelClosed(session_id)));
    }

    #[tokio::test]
    async fn test_broadcast_reaches_every_session() {
        // テスト項目: 全セッション（送信者を含む）にブロードキャストできる
        // given (前提条件):
        let registry = WebSocketSessionRegistry::new();
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        registry.register(create_session(1000), tx1).await;
        registry.register(create_session(2000), tx2).await;

        // when (操作):
        let report = registry.broadcast("Broadcast message").await;

        // then (期待する結果):
        assert_eq!(report.delivered.len(), 2);
        assert!(report.dropped.is_empty());
        assert_eq!(rx1.recv().await, Some("Broadcast message".to_string()));
        assert_eq!(rx2.recv().await, Some("Broadcast message".to_string()));
    }

    #[tokio::test]
    async fn test_broadcast_partial_failure_removes_failed_session() {
        // テスト項目: 送信に失敗したセッションは除去され、他のセッションには届く
        // given (前提条件):
        let registry = WebSocketSessionRegistry::new();
        let healthy = create_session(1000);
        let broken = create_session(2000);
        let broken_id = broken.id;
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, rx2) = mpsc::unbounded_channel();
        registry.register(healthy, tx1).await;
        registry.register(broken, tx2).await;
        drop(rx2);

        // when (操作):
        let report = registry.broadcast("Broadcast message").await;

        // then (期待する結果):
        assert_eq!(report.dropped, vec![broken_id]);
        assert_eq!(report.delivered.len(), 1);
        assert_eq!(rx1.recv().await, Some("Broadcast message".to_string()));
        assert_eq!(registry.count().await, 1);
    }

    #[tokio::test]
    async fn test_broadcast_with_no_sessions() {
        // テスト項目: セッションがなくてもエラーにならない
        // given (前提条件):
        let registry = WebSocketSessionRegistry::new();

        // when (操作):
        let report = registry.broadcast("Message").await;

        // then (期待する結果):
        assert_eq!(report, BroadcastReport::default());
    }

    #[tokio::test]
    async fn test_unregister_is_idempotent() {
        // テスト項目: 同じセッションを二度解除しても問題ない
        // given (前提条件):
        let registry = WebSocketSessionRegistry::new();
        let session = create_session(1000);
        let session_id = session.id;
        let (tx, _rx) = mpsc::unbounded_channel();
        registry.register(session, tx).await;

        // when (操作):
        let first = registry.unregister(&session_id).await;
        let second = registry.unregister(&session_id).await;
        let never_registered = registry.unregister(&SessionId::generate()).await;

        // then (期待する結果):
        assert!(first);
        assert!(!second);
        assert!(!never_registered);
        assert_eq!(registry.count().await, 0);
    }

    #[tokio::test]
    async fn test_sessions_sorted_by_connected_at() {
        // テスト項目: セッション一覧は接続時刻順に返される
        // given (前提条件):
        let registry = WebSocketSessionRegistry::new();
        let later = create_session(3000);
        let earlier = Session::new(
            SessionId::generate(),
            Some(IdentityToken::new("alice".to_string()).unwrap()),
            Timestamp::new(1000),
        );
        let (tx1, _rx1) = mpsc::unbounded_channel();
        let (tx2, _rx2) = mpsc::unbounded_channel();
        registry.register(later.clone(), tx1).await;
        registry.register(earlier.clone(), tx2).await;

        // when (操作):
        let sessions = registry.sessions().await;

        // then (期待する結果):
        assert_eq!(sessions, vec![earlier, later]);
    }
}
