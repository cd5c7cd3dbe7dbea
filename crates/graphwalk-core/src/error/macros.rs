//! Error macros for graphwalk

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}

/// Macro for creating unsupported operation errors
#[macro_export]
macro_rules! bail_unsupported {
    ($operation:expr, $reason:expr) => {
        return Err($crate::error::GraphError::unsupported($operation, $reason))
    };
}

/// Return `InvalidNode` unless `$node` lies in `[0, node_count)`
#[macro_export]
macro_rules! ensure_node {
    ($node:expr, $node_count:expr) => {
        if $node >= $node_count {
            return Err($crate::error::GraphError::invalid_node($node, $node_count));
        }
    };
}
