use crate::DomainError;

pub type Result<T> = std::result::Result<T, DomainError>;

/// HKLM（64bitビュー）読み取り専用の最小ポート。
///
/// パスはすべて HKLM からの相対パス。キーや値が存在しないことはエラーではなく
/// `false` / 空 / `None` で表す。それ以外の失敗は `RegistryAccessError`。
pub trait RegistryReader {
    /// キーが存在するか
    fn key_exists(&self, path: &str) -> Result<bool>;

    /// 直下のサブキー名（キーが無ければ空）
    fn subkey_names(&self, path: &str) -> Result<Vec<String>>;

    /// REG_DWORD 値
    fn read_dword(&self, path: &str, name: &str) -> Result<Option<u32>>;

    /// REG_SZ / REG_EXPAND_SZ 値（REG_EXPAND_SZ は環境変数を展開済み）
    fn read_string(&self, path: &str, name: &str) -> Result<Option<String>>;
}
