//! NativeLog trait for platform logging facilities

/// A platform logging facility scoped to a subsystem and category.
///
/// Each operation receives one fully formatted message. Implementations
/// swallow their own delivery failures.
pub trait NativeLog: Send + Sync {
    fn trace(&self, message: &str);
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn notice(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
    fn critical(&self, message: &str);
    fn name(&self) -> &str;
}

/// Reject identifiers the native facilities cannot carry as C strings
pub(crate) fn validate_identifier(field: &str, value: &str) -> super::error::Result<()> {
    if value.contains('\0') {
        return Err(super::error::HandlerError::invalid_identifier(
            field,
            value,
            "contains NUL byte",
        ));
    }
    Ok(())
}
