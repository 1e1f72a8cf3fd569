use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;

/// 設定檔路徑
pub const CONFIG_PATH: &str = "hexrogue.toml";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WorldSetting {
    /// 預設視距
    pub fov_radius: i32,
    /// log4rs 設定檔
    pub log_config: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
struct Setting {
    #[serde(default)]
    world: WorldSetting,
}

impl Default for WorldSetting {
    fn default() -> Self {
        Self {
            fov_radius: 8,
            log_config: "log4rs.yml".to_string(),
        }
    }
}

impl WorldSetting {
    /// 解析 toml 內容，缺少的欄位用預設值
    pub fn from_toml_str(content: &str) -> Result<Self, failure::Error> {
        let setting: Setting = toml::from_str(content)?;
        Ok(setting.world)
    }

    /// 讀取設定檔
    pub fn load(path: &str) -> Result<Self, failure::Error> {
        let mut file = File::open(path)?;
        let mut str_val = String::new();
        file.read_to_string(&mut str_val)?;
        Self::from_toml_str(&str_val)
    }

    /// 讀取設定檔，失敗時使用預設值
    pub fn load_or_default(path: &str) -> Self {
        match Self::load(path) {
            Ok(setting) => setting,
            Err(e) => {
                log::warn!("無法讀取設定檔 {}，使用預設值: {}", path, e);
                Self::default()
            }
        }
    }
}

lazy_static! {
    pub static ref CONFIG: WorldSetting = WorldSetting::load_or_default(CONFIG_PATH);
}
