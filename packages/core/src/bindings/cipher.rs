// Шифр локальной базы данных. Передаётся в другие фабрики по ID.

use super::NativeResult;

pub trait DbCipher: Send + Sync {
    fn encrypt(&self, plaintext: &[u8]) -> NativeResult<Vec<u8>>;
    fn decrypt(&self, ciphertext: &[u8]) -> NativeResult<Vec<u8>>;
    fn marshal_json(&self) -> NativeResult<Vec<u8>>;
    fn unmarshal_json(&self, data: &[u8]) -> NativeResult<()>;
}

pub const OPERATIONS: &[&str] = &["Encrypt", "Decrypt", "MarshalJSON", "UnmarshalJSON"];
