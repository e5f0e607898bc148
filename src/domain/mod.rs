//! Domain Layer
//!
//! - Speech Context: 合成请求的值对象与不变量
//! - Call Context: 呼叫参与者与策略选择

pub mod call;
pub mod speech;
