//! 進捗レコードの保存/読み込み。
//!
//! ## 保存方針
//!
//! - 保存先は単一キー (`internal_path_progress_v1`) の文字列ストア。
//!   wasm では localStorage、テストではインメモリ実装を注入する。
//! - 形式はフラットな JSON。バージョンはキー名の `_v1` サフィックスが担う。
//!   フィールド追加は `#[serde(default)]` で吸収できるため envelope は持たない。
//! - 読み込みは絶対に失敗しない: キー欠損・壊れた JSON はデフォルト値に落ちる。

use super::record::ProgressRecord;

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "internal_path_progress_v1";

/// Single-entry string storage the progress store writes through.
pub trait StorageBackend {
    fn get(&self) -> Option<String>;
    fn set(&mut self, payload: &str);
    fn remove(&mut self);
}

/// Browser localStorage under the fixed progress key.
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(target_arch = "wasm32")]
impl StorageBackend for LocalStorage {
    fn get(&self) -> Option<String> {
        get_storage()?.get_item(STORAGE_KEY).ok()?
    }

    fn set(&mut self, payload: &str) {
        let Some(storage) = get_storage() else {
            web_sys::console::warn_1(&"progress save failed: no localStorage".into());
            return;
        };
        if storage.set_item(STORAGE_KEY, payload).is_err() {
            web_sys::console::warn_1(&"progress save failed: set_item rejected".into());
        }
    }

    fn remove(&mut self) {
        if let Some(storage) = get_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

/// In-memory backend for tests and non-wasm builds.
#[derive(Default)]
pub struct MemoryStorage {
    payload: Option<String>,
}

impl StorageBackend for MemoryStorage {
    fn get(&self) -> Option<String> {
        self.payload.clone()
    }

    fn set(&mut self, payload: &str) {
        self.payload = Some(payload.to_string());
    }

    fn remove(&mut self) {
        self.payload = None;
    }
}

/// Load/save/reset for the single [`ProgressRecord`] entry.
///
/// `load` never fails: absent or undecodable payloads yield the default
/// record, successfully parsed ones are normalized field by field.
pub struct ProgressStore {
    backend: Box<dyn StorageBackend>,
}

impl ProgressStore {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn local() -> Self {
        Self::new(Box::new(LocalStorage))
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStorage::default()))
    }

    pub fn load(&self) -> ProgressRecord {
        let Some(raw) = self.backend.get() else {
            return ProgressRecord::default();
        };
        match serde_json::from_str::<ProgressRecord>(&raw) {
            Ok(mut record) => {
                record.normalize();
                record
            }
            Err(_) => {
                #[cfg(target_arch = "wasm32")]
                web_sys::console::warn_1(&"corrupt progress data, using defaults".into());
                ProgressRecord::default()
            }
        }
    }

    pub fn save(&mut self, record: &ProgressRecord) {
        match serde_json::to_string(record) {
            Ok(payload) => self.backend.set(&payload),
            Err(_) => {
                #[cfg(target_arch = "wasm32")]
                web_sys::console::warn_1(&"progress serialization failed".into());
            }
        }
    }

    /// Deletes the entry outright; the next `load` synthesizes defaults.
    pub fn reset(&mut self) {
        self.backend.remove();
    }
}
