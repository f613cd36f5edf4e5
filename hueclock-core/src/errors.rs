use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum HueclockError {
    /// ordinal of the panel that failed bring-up. 1 is left, 2 is right.
    #[error("panel {0} failed to initialize")]
    PanelInit(u8),
}

pub type HueclockResult<T> = Result<T, HueclockError>;
