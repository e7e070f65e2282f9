//! UseCase: セッション開始処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - OpenSessionUseCase::execute() メソッド
//! - セッションの登録と履歴の再送（リプレイ）
//!
//! ### なぜこのテストが必要か
//! - 新規接続したクライアントが過去のメッセージを欠落・重複なく受け取ることを保証
//! - リプレイ途中で送信に失敗したセッションが登録されたまま残らないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：空のストアへの接続、履歴ありのストアへの接続
//! - 異常系：リプレイ途中の送信失敗

use std::sync::Arc;

use crate::domain::{MessageCodec, MessageStore, PusherChannel, Session, SessionRegistry};

use super::{error::OpenSessionError, sequencer::DeliverySequencer};

/// セッション開始のユースケース
pub struct OpenSessionUseCase {
    /// MessageStore（メッセージ履歴）
    store: Arc<dyn MessageStore>,
    /// SessionRegistry（接続中セッションの集合）
    registry: Arc<dyn SessionRegistry>,
    /// MessageCodec（ペイロードの変換）
    codec: Arc<dyn MessageCodec>,
    /// 配信順序の直列化
    sequencer: Arc<DeliverySequencer>,
}

impl OpenSessionUseCase {
    /// 新しい OpenSessionUseCase を作成
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

    /// セッション開始を実行
    ///
    /// セッションを登録し、その時点のストアの内容を 1 メッセージずつ順番に送信する。
    /// 登録からリプレイ完了までの間に他のメッセージが追加されることはない。
    ///
    /// # Arguments
    ///
    /// * `session` - 接続したセッション（Domain Model）
    /// * `channel` - セッションへの送信用チャンネル
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - リプレイしたメッセージ数
    /// * `Err(OpenSessionError)` - リプレイ失敗（セッションは登録解除済み）
    pub async fn execute(
        &self,
        session: Session,
        channel: PusherChannel,
    ) -> Result<usize, OpenSessionError> {
        let session_id = session.id;
        let _turn = self.sequencer.acquire().await;

        // 1. Registry にセッションを登録
        self.registry.register(session, channel).await;

        // 2. 履歴をリプレイ
        let history = self.store.snapshot().await;
        let total = history.len();
        for (delivered, message) in history.iter().enumerate() {
            let payload = self.codec.encode(message);
            if let Err(source) = self.registry.push_to(&session_id, &payload).await {
                // 失敗したセッションは即座に切断扱い
                self.registry.unregister(&session_id).await;
                return Err(OpenSessionError::ReplayFailed {
                    session_id,
                    delivered,
                    total,
                    source,
                });
            }
        }

        Ok(total)
    }
}
