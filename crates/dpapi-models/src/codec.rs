use dpapi_error::DpapiError;
use serde::{Serialize, de::DeserializeOwned};

/// JSON passthrough encoding of a model.
pub trait BinaryCodec: Sized {
    fn marshal_binary(&self) -> Result<Vec<u8>, DpapiError>;

    fn unmarshal_binary(data: &[u8]) -> Result<Self, DpapiError>;
}

impl<T: Serialize + DeserializeOwned> BinaryCodec for T {
    fn marshal_binary(&self) -> Result<Vec<u8>, DpapiError> {
        Ok(serde_json::to_vec(self)?)
    }

    fn unmarshal_binary(data: &[u8]) -> Result<Self, DpapiError> {
        Ok(serde_json::from_slice(data)?)
    }
}
