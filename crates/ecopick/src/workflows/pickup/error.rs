use super::region::RegionStatus;
use super::relay::RelayError;
use super::schedule::DateRejection;

/// Reasons a pickup request is not dispatched.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("clothing, shoes, or bags must weigh more than 0kg")]
    MinimumNotMet,
    #[error("address is outside the pickup service area")]
    RegionUnavailable,
    #[error("a submission is already in progress")]
    SubmissionInProgress,
    #[error(transparent)]
    Date(#[from] DateRejection),
    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl IntakeError {
    /// Customer-facing message. Relay failures all read as one retry prompt.
    pub fn notice(&self) -> &'static str {
        match self {
            IntakeError::MinimumNotMet => "의류, 신발, 가방 중 하나 이상의 무게를 입력해주세요.",
            IntakeError::RegionUnavailable => RegionStatus::Unavailable
                .notice()
                .unwrap_or("수거 서비스 지역이 아닙니다."),
            IntakeError::SubmissionInProgress => "신청을 처리하고 있습니다. 잠시만 기다려주세요.",
            IntakeError::Date(rejection) => rejection.notice(),
            IntakeError::Relay(_) => "신청 중 오류가 발생했습니다. 다시 시도해주세요.",
        }
    }
}
