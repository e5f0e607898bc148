//! Call Session
//!
//! 每通呼叫一个会话：把五个服务句柄（STT、LLM、TTS、VAD、轮次检测）
//! 和一条系统指令组装起来，启动后发出一次开场白。
//!
//! 会话本身不拥有任何跨呼叫状态；音频传输、缓冲与轮次调度
//! 全部委托给宿主框架，这里只做装配与单次回复

mod builder;
mod call_session;

pub use builder::SessionBuilder;
pub use call_session::{AgentDefinition, CallSession, JobContext, Reply, SttHandle};

/// Call Center Agent 的固定系统指令
pub const AGENT_INSTRUCTIONS: &str = "You are a helpful AI call center agent for HelloJade. \
     Be concise, friendly, and professional. \
     Ask clarifying questions when needed. \
     If you cannot help, offer to transfer to a human agent.";

/// 开场白指令，每通呼叫恰好下发一次
pub const GREETING_INSTRUCTIONS: &str =
    "Greet the caller warmly and ask how you can help them today.";
