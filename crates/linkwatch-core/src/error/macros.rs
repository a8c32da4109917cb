//! Error macros for linkwatch

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::LinkwatchError::invalid_value(
            $context, $value,
        ))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::LinkwatchError::UsageError($msg.to_string()))
    };
}

/// Macro for cancelling a confirmed operation
#[macro_export]
macro_rules! bail_cancelled {
    ($msg:expr) => {
        return Err($crate::error::LinkwatchError::cancelled($msg))
    };
}
