//! UseCase: セッション終了処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CloseSessionUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 切断したセッションに以降のメッセージが配信されないことを保証
//! - 同じセッションを複数回閉じてもエラーにならないこと（冪等性）を確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：登録済みセッションの終了
//! - エッジケース：二重の終了、未登録セッションの終了

use std::sync::Arc;

use crate::domain::{SessionId, SessionRegistry};

/// セッション終了のユースケース
pub struct CloseSessionUseCase {
    /// SessionRegistry（接続中セッションの集合）
    registry: Arc<dyn SessionRegistry>,
}

impl CloseSessionUseCase {
    /// 新しい CloseSessionUseCase を作成
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// セッション終了を実行
    ///
    /// # Returns
    ///
    /// セッションが登録されていた場合 `true`。未登録・終了済みの場合は何もせず `false`。
    pub async fn execute(&self, session_id: &SessionId) -> bool {
        self.registry.unregister(session_id).await
    }

    /// 残りのセッション数を取得
    pub async fn count_remaining_sessions(&self) -> usize {
        self.registry.count().await
    }
}
