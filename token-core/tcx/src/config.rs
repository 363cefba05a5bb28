use log::info;
use parking_lot::RwLock;
use prost::Message;

use crate::api::InitTokenCoreXParam;
use crate::Result;

/// Runtime settings handed over by `init_token_core_x`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoreConfig {
    pub file_dir: String,
    pub xpub_common_key: String,
    pub xpub_common_iv: String,
}

impl From<InitTokenCoreXParam> for CoreConfig {
    fn from(param: InitTokenCoreXParam) -> Self {
        CoreConfig {
            file_dir: param.file_dir,
            xpub_common_key: param.xpub_common_key,
            xpub_common_iv: param.xpub_common_iv,
        }
    }
}

lazy_static! {
    pub static ref CONFIG: RwLock<CoreConfig> = RwLock::new(CoreConfig::default());
    pub static ref IS_DEBUG: RwLock<bool> = RwLock::new(false);
}

pub fn config() -> CoreConfig {
    CONFIG.read().clone()
}

pub fn set_debug(is_debug: bool) {
    *IS_DEBUG.write() = is_debug;
}

pub(crate) fn init_token_core_x(data: &[u8]) -> Result<()> {
    let param = InitTokenCoreXParam::decode(data)?;
    info!("init token core x, file dir: {}", param.file_dir);
    *CONFIG.write() = param.into();
    Ok(())
}
