//! WAV 编解码
//!
//! 手写 RIFF 头：输出固定为单声道 16 位 PCM。
//! 解析部分只用于校验与信息提取，不做完整解码

use thiserror::Error;

/// WAV 错误
#[derive(Debug, Error)]
pub enum WavError {
    #[error("Invalid WAV: {0}")]
    InvalidInput(String),
}

/// WAV 文件信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavInfo {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
    pub data_size: usize,
}

impl WavInfo {
    pub fn duration_ms(&self) -> u64 {
        if self.sample_rate == 0 || self.channels == 0 || self.bits_per_sample == 0 {
            return 0;
        }
        let samples_per_channel =
            self.data_size / (self.bits_per_sample as usize / 8) / self.channels as usize;
        (samples_per_channel as u64 * 1000) / self.sample_rate as u64
    }
}

/// 将 PCM f32 样本编码为单声道 16 位 WAV
pub fn encode(samples: &[f32], sample_rate: u32) -> Vec<u8> {
    let bits_per_sample: u16 = 16;
    let num_channels: u16 = 1;
    let byte_rate = sample_rate * num_channels as u32 * (bits_per_sample / 8) as u32;
    let block_align = num_channels * (bits_per_sample / 8);

    // 转换 f32 样本到 i16
    let pcm_data: Vec<i16> = samples
        .iter()
        .map(|&s| {
            let clamped = s.clamp(-1.0, 1.0);
            (clamped * 32767.0) as i16
        })
        .collect();

    let data_size = pcm_data.len() * 2;
    let file_size = 36 + data_size;

    let mut wav = Vec::with_capacity(44 + data_size);

    // RIFF header
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(file_size as u32).to_le_bytes());
    wav.extend_from_slice(b"WAVE");

    // fmt chunk
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes()); // chunk size
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM format
    wav.extend_from_slice(&num_channels.to_le_bytes());
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&bits_per_sample.to_le_bytes());

    // data chunk
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&(data_size as u32).to_le_bytes());

    // PCM data
    for sample in pcm_data {
        wav.extend_from_slice(&sample.to_le_bytes());
    }

    wav
}

/// 解析 WAV 文件头
pub fn parse_header(data: &[u8]) -> Result<WavInfo, WavError> {
    if data.len() < 44 {
        return Err(WavError::InvalidInput("WAV data too short".to_string()));
    }

    if &data[0..4] != b"RIFF" {
        return Err(WavError::InvalidInput(
            "missing RIFF header".to_string(),
        ));
    }

    if &data[8..12] != b"WAVE" {
        return Err(WavError::InvalidInput(
            "missing WAVE identifier".to_string(),
        ));
    }

    // 查找 fmt / data chunk
    let mut pos = 12;
    let mut fmt: Option<(u16, u32, u16)> = None; // (channels, sample_rate, bits)
    let mut data_size = 0usize;

    while pos + 8 <= data.len() {
        let chunk_id = &data[pos..pos + 4];
        let chunk_size =
            u32::from_le_bytes([data[pos + 4], data[pos + 5], data[pos + 6], data[pos + 7]])
                as usize;

        match chunk_id {
            b"fmt " => {
                if chunk_size < 16 || pos + 8 + 16 > data.len() {
                    return Err(WavError::InvalidInput(
                        "invalid fmt chunk size".to_string(),
                    ));
                }
                let fmt_data = &data[pos + 8..pos + 8 + 16];
                fmt = Some((
                    u16::from_le_bytes([fmt_data[2], fmt_data[3]]),
                    u32::from_le_bytes([fmt_data[4], fmt_data[5], fmt_data[6], fmt_data[7]]),
                    u16::from_le_bytes([fmt_data[14], fmt_data[15]]),
                ));
            }
            b"data" => {
                data_size = chunk_size;
                break;
            }
            _ => {}
        }

        pos += 8 + chunk_size;
        // 对齐到偶数字节
        if chunk_size % 2 != 0 {
            pos += 1;
        }
    }

    let (channels, sample_rate, bits_per_sample) =
        fmt.ok_or_else(|| WavError::InvalidInput("missing fmt chunk".to_string()))?;

    if data_size == 0 {
        return Err(WavError::InvalidInput("missing data chunk".to_string()));
    }

    Ok(WavInfo {
        sample_rate,
        channels,
        bits_per_sample,
        data_size,
    })
}
