//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SubmitMessageUseCase::execute() メソッド
//! - ペイロードのデコード、ストアへの追加、全セッションへのブロードキャスト
//!
//! ### なぜこのテストが必要か
//! - 送信者自身を含む全セッションにメッセージが届くことを保証（エコーを省略しない）
//! - 不正なペイロードがストアにも他のセッションにも影響しないことを確認
//! - 一部のセッションへの配信失敗が他のセッションへの配信を妨げないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：メッセージ送信とブロードキャスト
//! - 異常系：JSON でないペイロード、フィールド欠落
//! - エッジケース：受信側が閉じたセッションが混在する場合

use std::sync::Arc;

use crate::domain::{
    BroadcastReport, MessageCodec, MessageIndex, MessageStore, SessionId, SessionRegistry,
};

use super::{error::SubmitMessageError, sequencer::DeliverySequencer};

/// Result of one accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Position of the message in store order
    pub index: MessageIndex,
    /// Fan-out result
    pub report: BroadcastReport,
}

/// メッセージ送信のユースケース
pub struct SubmitMessageUseCase {
    /// MessageStore（メッセージ履歴）
    store: Arc<dyn MessageStore>,
    /// SessionRegistry（接続中セッションの集合）
    registry: Arc<dyn SessionRegistry>,
    /// MessageCodec（ペイロードの変換）
    codec: Arc<dyn MessageCodec>,
    /// 配信順序の直列化
    sequencer: Arc<DeliverySequencer>,
}

impl SubmitMessageUseCase {
    /// 新しい SubmitMessageUseCase を作成
    pub fn new(
        store: Arc<dyn MessageStore>,
        registry: Arc<dyn SessionRegistry>,
        codec: Arc<dyn MessageCodec>,
        sequencer: Arc<DeliverySequencer>,
    ) -> Self {
        Self {
            store,
            registry,
            codec,
            sequencer,
        }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `from_session_id` - 送信元セッションの ID（ログ用）
    /// * `raw` - 受信したペイロード（未パース）
    ///
    /// # Returns
    ///
    /// * `Ok(SubmitOutcome)` - 追加位置とブロードキャスト結果
    /// * `Err(SubmitMessageError)` - ペイロードが不正（ストアもセッションも変更されない）
    pub async fn execute(
        &self,
        from_session_id: &SessionId,
        raw: &str,
    ) -> Result<SubmitOutcome, SubmitMessageError> {
        // 1. ペイロードをデコード（ロック取得前）
        let message = self.codec.decode(raw)?;
        let payload = self.codec.encode(&message);

        let _turn = self.sequencer.acquire().await;

        // 2. ストアに追加
        let index = self.store.append(message).await;

        // 3. 送信者を含む全セッションにブロードキャスト
        let report = self.registry.broadcast(&payload).await;

        tracing::debug!(
            "Message {} from session '{}' fanned out to {} session(s)",
            index,
            from_session_id,
            report.delivered.len()
        );

        Ok(SubmitOutcome { index, report })
    }
}
