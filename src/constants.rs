// 盤面定数

/// ====== 盤面定数 ======
/// 盤面のマス数（一辺）
pub const GRID: usize = 5;
pub const GRID_I32: i32 = GRID as i32;

/// 盤テクスチャの分割数（中央の 5×5 のみがプレイ領域）
pub const BOARD_DIVISIONS: f32 = 10.0;

/// 余白とマスの比率 (10-5)/6
pub const MARGIN_RATIO: f32 = (BOARD_DIVISIONS - GRID as f32) / (GRID as f32 + 1.0);

/// 取られた駒が退場するときの目標行
pub const OFF_BOARD_ROW: f32 = -2.0;

/// 盤画像の基準サイズ（ピクセル）
pub const BOARD_TEXTURE_SIZE: f32 = 1000.0;

// アニメーションの既定フレーム数
pub const DEFAULT_MOVE_FRAMES: u32 = 12;
pub const DEFAULT_REMOVE_FRAMES: u32 = 18;

/// 到着判定の許容誤差（マス単位）
pub const ARRIVAL_EPSILON: f32 = 1e-3;

/// 画面ログの最大行数
pub const MAX_LOG_LINES: usize = 500;
