// 設定のValue Objects

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MOVE_FRAMES, DEFAULT_REMOVE_FRAMES};

/// アニメーションのフレーム数を表すValue Object
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct FrameCount(u32);

impl FrameCount {
    pub const MAX: u32 = 600;

    pub fn new(frames: u32) -> Result<Self> {
        if frames == 0 {
            return Err(anyhow!("フレーム数は1以上である必要があります"));
        }
        if frames > Self::MAX {
            return Err(anyhow!("フレーム数が大きすぎます: {}", frames));
        }
        Ok(Self(frames))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for FrameCount {
    type Error = anyhow::Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<FrameCount> for u32 {
    fn from(value: FrameCount) -> Self {
        value.0
    }
}

/// 画面に対する盤の占有率 (0.0, 1.0]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct BoardFill(f32);

impl BoardFill {
    pub fn new(value: f32) -> Result<Self> {
        if !(value > 0.0 && value <= 1.0) {
            return Err(anyhow!("盤の占有率は0.0より大きく1.0以下: {}", value));
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> f32 {
        self.0
    }
}

impl Default for BoardFill {
    fn default() -> Self {
        Self(0.9)
    }
}

impl TryFrom<f32> for BoardFill {
    type Error = anyhow::Error;

    fn try_from(value: f32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<BoardFill> for f32 {
    fn from(value: BoardFill) -> Self {
        value.0
    }
}

/// ゲーム全体の設定
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// 駒の移動にかけるフレーム数
    pub move_frames: FrameCount,
    /// 取られた駒の退場にかけるフレーム数
    pub remove_frames: FrameCount,
    pub board_fill: BoardFill,
    pub verbose_logging: bool,
    pub log_path: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            move_frames: FrameCount(DEFAULT_MOVE_FRAMES),
            remove_frames: FrameCount(DEFAULT_REMOVE_FRAMES),
            board_fill: BoardFill::default(),
            verbose_logging: false,
            log_path: "debug_log.txt".to_string(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        // 数値はValue Objectsで検証済み
        if self.log_path.trim().is_empty() {
            return Err(anyhow!("ログファイルのパスが空です"));
        }
        Ok(())
    }

    /// JSONファイルから読み込む
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("設定ファイルを読めません: {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("設定ファイルの形式が不正: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// ファイルが無ければ既定値
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }
}
