//! Shared application state.

use std::sync::Arc;

use crate::{
    domain::Timestamp,
    usecase::{
        CloseSessionUseCase, GetBroadcastStateUseCase, OpenSessionUseCase, SubmitMessageUseCase,
    },
};

/// Shared application state
pub struct AppState {
    /// OpenSessionUseCase（セッション開始のユースケース）
    pub open_session_usecase: Arc<OpenSessionUseCase>,
    /// SubmitMessageUseCase（メッセージ送信のユースケース）
    pub submit_message_usecase: Arc<SubmitMessageUseCase>,
    /// CloseSessionUseCase（セッション終了のユースケース）
    pub close_session_usecase: Arc<CloseSessionUseCase>,
    /// GetBroadcastStateUseCase（配信状態取得のユースケース）
    pub get_broadcast_state_usecase: Arc<GetBroadcastStateUseCase>,
    /// サーバー起動時刻
    pub started_at: Timestamp,
}
