#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

#[cfg(feature = "ja")]
pub mod strings {
    pub const PAYMENT_SUMMARY: &str = "支払いサマリー";
    pub const ORDER_DETAILS: &str = "注文内容";
    pub const TOTAL_ORDER_AMOUNT: &str = "注文合計";
    pub const DELIVERY_FEE: &str = "配達料";
    pub const SERVICE_FEE: &str = "サービス料";
    pub const BILLING_MODE: &str = "分担方式";
    pub const MODE_EVEN: &str = "均等";
    pub const MODE_PROPORTIONAL: &str = "注文額比例";
    pub const INDIVIDUAL_PAYMENTS: &str = "各自の支払い";
    pub const HOST_MARKER: &str = "(ホスト)";
    pub const NOT_CALCULATED: &str = "未計算";
    pub const TOTAL_TO_COLLECT: &str = "回収合計";
    pub const NO_PARTICIPANTS: &str = "参加者がいません";
}

#[cfg(not(feature = "ja"))]
pub mod strings {
    pub const PAYMENT_SUMMARY: &str = "Payment Summary";
    pub const ORDER_DETAILS: &str = "Order Details";
    pub const TOTAL_ORDER_AMOUNT: &str = "Total Order Amount";
    pub const DELIVERY_FEE: &str = "Delivery Fee";
    pub const SERVICE_FEE: &str = "Service Fee";
    pub const BILLING_MODE: &str = "Billing Mode";
    pub const MODE_EVEN: &str = "Even";
    pub const MODE_PROPORTIONAL: &str = "Proportional";
    pub const INDIVIDUAL_PAYMENTS: &str = "Individual Payments";
    pub const HOST_MARKER: &str = "(Host)";
    pub const NOT_CALCULATED: &str = "not calculated";
    pub const TOTAL_TO_COLLECT: &str = "Total to Collect";
    pub const NO_PARTICIPANTS: &str = "No participants";
}

pub use strings::*;

#[cfg(feature = "ja")]
pub fn empty_name() -> String {
    "名前を入力してください".to_string()
}

#[cfg(feature = "ja")]
pub fn negative_amount(name: impl std::fmt::Display, amount: impl std::fmt::Display) -> String {
    format!("'{name}' の金額 {amount} は無効です。0 以上の数値を入力してください")
}

#[cfg(feature = "ja")]
pub fn unknown_participant(id: impl std::fmt::Display) -> String {
    format!("参加者 {id} が見つかりません")
}

#[cfg(feature = "ja")]
pub fn line_error(line: usize, detail: impl std::fmt::Display) -> String {
    format!("行 {line}: {detail}")
}

#[cfg(not(feature = "ja"))]
pub fn empty_name() -> String {
    "Participant name must not be empty".to_string()
}

#[cfg(not(feature = "ja"))]
pub fn negative_amount(name: impl std::fmt::Display, amount: impl std::fmt::Display) -> String {
    format!("Amount {amount} for '{name}' is invalid; enter a non-negative number")
}

#[cfg(not(feature = "ja"))]
pub fn unknown_participant(id: impl std::fmt::Display) -> String {
    format!("Participant {id} not found")
}

#[cfg(not(feature = "ja"))]
pub fn line_error(line: usize, detail: impl std::fmt::Display) -> String {
    format!("Line {line}: {detail}")
}
