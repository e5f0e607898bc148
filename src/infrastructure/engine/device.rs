//! 计算设备选择
//!
//! 优先级：显式配置（含 `DEVICE` 环境变量）> CUDA 自动探测 > CPU 回退。
//! 探测只看驱动是否就位，不做任何依赖验证

use std::path::Path;

/// 计算设备
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Device {
    Cuda,
    Cpu,
    /// 显式配置的其它设备串（如 "cuda:1"、"mps"），原样透传
    Other(String),
}

impl Device {
    /// 解析显式配置的设备串
    pub fn parse(device: &str) -> Self {
        match device.to_ascii_lowercase().as_str() {
            "cuda" => Self::Cuda,
            "cpu" => Self::Cpu,
            _ => Self::Other(device.to_string()),
        }
    }

    /// 按配置解析设备，缺省时自动探测
    ///
    /// 显式配置无条件生效（不校验硬件是否真的存在）
    pub fn resolve(configured: Option<&str>) -> Self {
        match configured {
            Some(device) if !device.is_empty() => Self::parse(device),
            _ => Self::detect(),
        }
    }

    /// 自动探测：CUDA 可用则 cuda，否则 cpu
    pub fn detect() -> Self {
        if cuda_available() {
            Self::Cuda
        } else {
            Self::Cpu
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Cuda => "cuda",
            Self::Cpu => "cpu",
            Self::Other(s) => s,
        }
    }
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// NVIDIA 驱动探测
fn cuda_available() -> bool {
    Path::new("/proc/driver/nvidia/version").exists() || Path::new("/dev/nvidia0").exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_device_wins_over_detection() {
        // 无论硬件如何，显式配置必须原样生效
        assert_eq!(Device::resolve(Some("cuda")), Device::Cuda);
        assert_eq!(Device::resolve(Some("cpu")), Device::Cpu);
        assert_eq!(Device::resolve(Some("cuda")).as_str(), "cuda");
    }

    #[test]
    fn test_unknown_device_passed_through() {
        let device = Device::resolve(Some("cuda:1"));
        assert_eq!(device, Device::Other("cuda:1".to_string()));
        assert_eq!(device.as_str(), "cuda:1");
    }

    #[test]
    fn test_empty_configured_falls_back_to_detection() {
        let device = Device::resolve(Some(""));
        assert!(matches!(device, Device::Cuda | Device::Cpu));
    }

    #[test]
    fn test_detection_returns_cuda_or_cpu() {
        let device = Device::detect();
        assert!(matches!(device, Device::Cuda | Device::Cpu));
    }
}
