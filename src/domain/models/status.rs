//! 상태 값 열거
//!
//! 상태 컬럼은 문자열로 저장되며, 요청 검증 시 아래 목록으로 허용 값을 제한합니다.
//! 상태 전이는 일괄 덮어쓰기이며 별도의 상태 머신은 두지 않습니다.

pub const TODO_STATUSES: &[&str] = &["success", "waiting", "canceled", "processing", "done"];

pub const ORDER_STATUSES: &[&str] = &[
    "new",
    "paid",
    "canceled",
    "delivered",
    "refunded",
    "returned",
    "partially",
    "partially_paid",
];

pub const ORDER_DETAIL_STATUSES: &[&str] =
    &["new", "paid", "canceled", "delivered", "refunded", "returned"];

pub const MEMBER_STATUSES: &[&str] = &["premium", "basic", "inactive", "stopped"];

/// 주문 및 주문 상세가 공유하는 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    New,
    Paid,
    Canceled,
    Delivered,
    Refunded,
    Returned,
}

impl OrderStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Paid => "paid",
            OrderStatus::Canceled => "canceled",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Refunded => "refunded",
            OrderStatus::Returned => "returned",
        }
    }
}
