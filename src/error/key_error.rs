use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents errors raised when mapping input onto calculator keys.
pub enum KeyError {
    /// The label does not name a key on the keypad.
    #[error("Unknown key '{label}'.")]
    UnknownKey {
        /// The label that was not recognized.
        label: String,
    },
}
